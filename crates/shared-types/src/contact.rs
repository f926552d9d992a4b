use serde::{Deserialize, Serialize};

// ── Enquiry type ────────────────────────────────────────────────────

/// Kind of enquiry a visitor is making. Selected, never typed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub enum EnquiryType {
    #[default]
    HireMe,
    OpenSource,
    Other,
}

/// All enquiry types in the order they are offered.
pub const ENQUIRY_TYPES: &[EnquiryType] = &[
    EnquiryType::HireMe,
    EnquiryType::OpenSource,
    EnquiryType::Other,
];

impl EnquiryType {
    /// Wire value, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            EnquiryType::HireMe => "hireMe",
            EnquiryType::OpenSource => "openSource",
            EnquiryType::Other => "other",
        }
    }

    /// Human label shown in the select.
    pub fn label(&self) -> &'static str {
        match self {
            EnquiryType::HireMe => "Freelance project proposal",
            EnquiryType::OpenSource => "Open source consultancy session",
            EnquiryType::Other => "Other",
        }
    }

    /// Parse a wire value. Unknown values yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        ENQUIRY_TYPES.iter().copied().find(|t| t.as_str() == s)
    }
}

// ── Fields ──────────────────────────────────────────────────────────

/// Identifies one field of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContactField {
    FirstName,
    Email,
    Type,
    Comment,
}

/// Every field, in render order.
pub const CONTACT_FIELDS: &[ContactField] = &[
    ContactField::FirstName,
    ContactField::Email,
    ContactField::Type,
    ContactField::Comment,
];

impl ContactField {
    /// Wire key, also used as the DOM id and in `AppError::field_errors`.
    pub fn key(&self) -> &'static str {
        match self {
            ContactField::FirstName => "firstName",
            ContactField::Email => "email",
            ContactField::Type => "type",
            ContactField::Comment => "comment",
        }
    }
}

// ── Values ──────────────────────────────────────────────────────────

/// The values a visitor submits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ContactValues {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, rename = "type")]
    pub enquiry: EnquiryType,
    #[serde(default)]
    pub comment: String,
}

impl ContactValues {
    /// Text value of a field. `Type` yields its wire value.
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::FirstName => &self.first_name,
            ContactField::Email => &self.email,
            ContactField::Type => self.enquiry.as_str(),
            ContactField::Comment => &self.comment,
        }
    }

    /// Overwrite one field. Returns `false` when `value` is not a valid
    /// enquiry type, in which case nothing changes.
    pub fn set(&mut self, field: ContactField, value: &str) -> bool {
        match field {
            ContactField::FirstName => self.first_name = value.to_string(),
            ContactField::Email => self.email = value.to_string(),
            ContactField::Type => match EnquiryType::parse(value) {
                Some(t) => self.enquiry = t,
                None => return false,
            },
            ContactField::Comment => self.comment = value.to_string(),
        }
        true
    }
}

// ── Response ────────────────────────────────────────────────────────

/// Outcome category of a submission.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum ResponseType {
    Success,
    Error,
}

impl ResponseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseType::Success => "success",
            ResponseType::Error => "error",
        }
    }
}

/// What the backend says about a submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ContactResponse {
    #[serde(rename = "type")]
    pub kind: ResponseType,
    pub message: String,
}

impl ContactResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ResponseType::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ResponseType::Error,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == ResponseType::Success
    }

    /// Acknowledgement sent back once an enquiry has been accepted.
    pub fn thanks(first_name: &str) -> Self {
        Self::success(format!(
            "Thanks for your submission {}, we will get back to you shortly!",
            first_name.trim()
        ))
    }

    /// Generic failure shown when the enquiry could not be delivered.
    pub fn delivery_failed() -> Self {
        Self::error("Something went wrong, please try again later!")
    }
}
