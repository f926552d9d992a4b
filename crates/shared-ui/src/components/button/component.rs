use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    /// Shows a spinner and `loading_text` in place of the children, and
    /// disables the button.
    #[props(default = false)]
    pub loading: bool,
    #[props(default = "Sending...".to_string())]
    pub loading_text: String,
    #[props(default = "button".to_string())]
    pub button_type: String,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    let base = vec![Attribute::new("class", "button", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, props.attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        button {
            r#type: "{props.button_type}",
            disabled: props.loading,
            "aria-busy": props.loading,
            ..merged,
            if props.loading {
                span { class: "button-spinner" }
                "{props.loading_text}"
            } else {
                {props.children}
            }
        }
    }
}
