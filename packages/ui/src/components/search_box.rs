use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaMagnifyingGlass;
use dioxus_free_icons::Icon;

/// Controlled search input. Emits on every keystroke; callers reset their
/// page to zero when the term changes.
#[component]
pub fn SearchBox(
    value: String,
    #[props(default = "Search...".to_string())] placeholder: String,
    oninput: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "search-box",
            Icon { class: "search-icon", icon: FaMagnifyingGlass, width: 14, height: 14 }
            input {
                class: "search-input",
                r#type: "search",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
            }
        }
    }
}
