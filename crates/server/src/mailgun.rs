use shared_types::ContactValues;

// --- Environment helpers ---

fn mailgun_api_key() -> Result<String, String> {
    std::env::var("MAILGUN_API_KEY").map_err(|_| "MAILGUN_API_KEY is not configured".to_string())
}

fn mailgun_domain() -> Result<String, String> {
    std::env::var("MAILGUN_DOMAIN").map_err(|_| "MAILGUN_DOMAIN is not configured".to_string())
}

fn mailgun_from() -> Result<String, String> {
    match std::env::var("MAILGUN_FROM") {
        Ok(v) => Ok(v),
        Err(_) => Ok(format!("Contact form <noreply@{}>", mailgun_domain()?)),
    }
}

// --- Core email sending ---

/// A plain-text message ready to hand to Mailgun.
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingEmail {
    pub to: String,
    pub reply_to: String,
    pub subject: String,
    pub text: String,
}

#[tracing::instrument(skip(email), fields(to = %email.to, subject = %email.subject))]
pub async fn send_email(email: &OutgoingEmail) -> Result<(), String> {
    let domain = mailgun_domain()?;
    let url = format!("https://api.mailgun.net/v3/{}/messages", domain);

    let client = reqwest::Client::new();
    let response = client
        .post(&url)
        .basic_auth("api", Some(mailgun_api_key()?))
        .form(&[
            ("from", mailgun_from()?),
            ("to", email.to.clone()),
            ("h:Reply-To", email.reply_to.clone()),
            ("subject", email.subject.clone()),
            ("text", email.text.clone()),
        ])
        .send()
        .await
        .map_err(|e| format!("Mailgun request failed: {}", e))?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(format!("Mailgun API error ({}): {}", status, body));
    }

    tracing::info!("Email sent successfully");
    Ok(())
}

// --- Contact enquiries ---

/// Build the notification for a contact enquiry. Replies go to the visitor.
pub fn enquiry_email(recipient: &str, values: &ContactValues) -> OutgoingEmail {
    let name = values.first_name.trim();
    OutgoingEmail {
        to: recipient.to_string(),
        reply_to: values.email.trim().to_string(),
        subject: format!("New enquiry from {}: {}", name, values.enquiry.label()),
        text: format!(
            "Name: {}\nEmail: {}\nType of enquiry: {}\n\n{}\n",
            name,
            values.email.trim(),
            values.enquiry.label(),
            values.comment
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::EnquiryType;

    #[test]
    fn enquiry_email_addresses_and_subject() {
        let values = ContactValues {
            first_name: " Jane ".into(),
            email: "jane@example.com".into(),
            enquiry: EnquiryType::OpenSource,
            comment: "Could you review our crate layout?".into(),
        };
        let email = enquiry_email("me@example.com", &values);
        assert_eq!(email.to, "me@example.com");
        assert_eq!(email.reply_to, "jane@example.com");
        assert_eq!(
            email.subject,
            "New enquiry from Jane: Open source consultancy session"
        );
        assert_eq!(
            email.text,
            "Name: Jane\nEmail: jane@example.com\nType of enquiry: Open source consultancy session\n\nCould you review our crate layout?\n"
        );
    }
}
