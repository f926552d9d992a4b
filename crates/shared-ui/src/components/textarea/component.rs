use dioxus::prelude::*;

/// Multi-line text input.
#[component]
pub fn Textarea(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] on_blur: EventHandler<FocusEvent>,
    #[props(default)] placeholder: String,
    #[props(default = 6)] rows: u32,
    #[props(default = false)] disabled: bool,
    #[props(default = false)] invalid: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "textarea", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "textarea-wrapper",
            textarea {
                value: value,
                placeholder: placeholder,
                rows: "{rows}",
                disabled: disabled,
                "aria-invalid": invalid,
                oninput: move |evt| on_input.call(evt),
                onblur: move |evt| on_blur.call(evt),
                ..merged,
            }
        }
    }
}
