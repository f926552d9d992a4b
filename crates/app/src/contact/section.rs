use dioxus::prelude::*;
use shared_types::{ContactField, ENQUIRY_TYPES};
use shared_ui::{use_toast, Button, Form, FormField, FormSelect, Input, Textarea};

use super::{ContactController, ServerFnClient, SubmissionClient, ToastSink};

/// Destination passed to the backend; empty selects its default.
const CONTACT_ENDPOINT: &str = match option_env!("CONTACT_ENDPOINT") {
    Some(endpoint) => endpoint,
    None => "",
};

type Controller = ContactController<ServerFnClient, ToastSink>;

/// The "Contact me" section: four validated fields and a submit button.
#[component]
pub fn ContactMeSection() -> Element {
    let toasts = use_toast();
    let mut controller: Signal<Controller> = use_signal(|| {
        ContactController::new(CONTACT_ENDPOINT, ServerFnClient, ToastSink(toasts))
    });

    let mut set = move |field: ContactField, value: String| {
        controller.write().set_field(field, value);
    };
    let mut touch = move |field: ContactField| {
        controller.write().touch_field(field);
    };

    let on_submit = move |_: FormEvent| {
        let values = match controller.write().begin_submit() {
            Ok(values) => values,
            Err(outcome) => {
                tracing::debug!(?outcome, "contact form not sent");
                return;
            }
        };
        spawn(async move {
            let (client, endpoint) = {
                let ctl = controller.read();
                (*ctl.client(), ctl.endpoint().to_string())
            };
            let response = client.submit(&endpoint, values).await;
            controller.write().on_submission_settled(response);
        });
    };

    let ctl = controller.read();
    let form = ctl.form();
    let values = form.values();
    let busy = form.is_submitting();
    let error_for = |field: ContactField| form.visible_error(field).map(str::to_string);

    rsx! {
        section { class: "contact-me", id: "contact",
            h2 { class: "contact-me-title", "Contact me" }

            Form { onsubmit: on_submit,
                FormField {
                    html_for: "firstName",
                    label: "Name",
                    error: error_for(ContactField::FirstName),
                    Input {
                        id: "firstName",
                        placeholder: "Jane",
                        disabled: busy,
                        value: values.first_name.clone(),
                        invalid: error_for(ContactField::FirstName).is_some(),
                        on_input: move |e: FormEvent| set(ContactField::FirstName, e.value()),
                        on_blur: move |_: FocusEvent| touch(ContactField::FirstName),
                    }
                }

                FormField {
                    html_for: "email",
                    label: "Email Address",
                    error: error_for(ContactField::Email),
                    Input {
                        id: "email",
                        input_type: "email",
                        placeholder: "jane@example.com",
                        disabled: busy,
                        value: values.email.clone(),
                        invalid: error_for(ContactField::Email).is_some(),
                        on_input: move |e: FormEvent| set(ContactField::Email, e.value()),
                        on_blur: move |_: FocusEvent| touch(ContactField::Email),
                    }
                }

                FormField {
                    html_for: "type",
                    label: "Type of enquiry",
                    error: None,
                    FormSelect {
                        id: "type",
                        value: values.enquiry.as_str().to_string(),
                        disabled: busy,
                        onchange: move |e: FormEvent| set(ContactField::Type, e.value()),
                        for enquiry in ENQUIRY_TYPES.iter() {
                            option {
                                key: "{enquiry.as_str()}",
                                value: enquiry.as_str(),
                                selected: *enquiry == values.enquiry,
                                "{enquiry.label()}"
                            }
                        }
                    }
                }

                FormField {
                    html_for: "comment",
                    label: "Your message",
                    error: error_for(ContactField::Comment),
                    Textarea {
                        id: "comment",
                        placeholder: "Tell me about your project",
                        disabled: busy,
                        value: values.comment.clone(),
                        invalid: error_for(ContactField::Comment).is_some(),
                        on_input: move |e: FormEvent| set(ContactField::Comment, e.value()),
                        on_blur: move |_: FocusEvent| touch(ContactField::Comment),
                    }
                }

                Button {
                    button_type: "submit",
                    loading: busy,
                    class: "contact-me-submit",
                    "Submit"
                }
            }
        }
    }
}
