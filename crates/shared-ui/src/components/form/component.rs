use dioxus::prelude::*;

/// Form wrapper that prevents the browser's default submission.
#[component]
pub fn Form(
    #[props(default)] onsubmit: EventHandler<FormEvent>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "form", None, false),
        Attribute::new("novalidate", true, None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        form {
            onsubmit: move |evt| {
                evt.prevent_default();
                onsubmit.call(evt);
            },
            ..merged,
            {children}
        }
    }
}

/// One labelled form control with its inline error.
///
/// The error paragraph is only rendered when `error` is set.
#[component]
pub fn FormField(
    /// Id of the control this field labels.
    html_for: String,
    label: String,
    #[props(!optional)]
    error: Option<String>,
    children: Element,
) -> Element {
    let invalid = error.is_some();

    rsx! {
        div { class: "form-field", "data-invalid": invalid,
            label { class: "form-field-label", r#for: "{html_for}", "{label}" }
            {children}
            if let Some(message) = error {
                p { class: "form-field-error", role: "alert", "{message}" }
            }
        }
    }
}
