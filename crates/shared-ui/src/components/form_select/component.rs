use dioxus::prelude::*;

/// A native select element for forms.
///
/// Wraps a native `<select>` with `appearance: none` and co-located styling.
/// Children should be `option { value: "...", "Label" }` elements.
#[component]
pub fn FormSelect(
    /// Current selected value.
    #[props(default)]
    value: String,
    /// Called when the selection changes.
    #[props(default)]
    onchange: Option<EventHandler<Event<FormData>>>,
    #[props(default = false)]
    disabled: bool,
    #[props(extends = GlobalAttributes)]
    attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "form-select", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "form-select-wrapper",
            select {
                value: value,
                disabled: disabled,
                onchange: move |evt| {
                    if let Some(handler) = &onchange {
                        handler.call(evt);
                    }
                },
                ..merged,
                {children}
            }
        }
    }
}
