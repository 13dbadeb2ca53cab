use dioxus::prelude::*;

#[component]
pub fn Label(#[props(default = "".to_string())] html_for: String, children: Element) -> Element {
    rsx! {
        label {
            class: "form-label",
            r#for: "{html_for}",
            {children}
        }
    }
}

#[component]
pub fn Input(
    #[props(default = "".to_string())] id: String,
    #[props(default = "".to_string())] class: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default = "".to_string())] placeholder: String,
    value: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        input {
            id: "{id}",
            class: "form-input {class}",
            r#type: "{r#type}",
            placeholder: "{placeholder}",
            value: "{value}",
            oninput: move |evt| oninput.call(evt),
        }
    }
}

/// Controlled select over `(value, label)` options.
#[component]
pub fn Select(
    #[props(default = "".to_string())] id: String,
    #[props(default = "".to_string())] class: String,
    value: String,
    options: Vec<(String, String)>,
    onchange: EventHandler<String>,
) -> Element {
    rsx! {
        select {
            id: "{id}",
            class: "form-select {class}",
            value: "{value}",
            onchange: move |evt| onchange.call(evt.value()),
            for (val, label) in &options {
                option {
                    key: "{val}",
                    value: "{val}",
                    selected: *val == value,
                    "{label}"
                }
            }
        }
    }
}
