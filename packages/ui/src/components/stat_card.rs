use dioxus::prelude::*;

/// One dashboard counter. `value` is `None` while loading or when its data
/// source failed; a failed card renders a dash instead of blanking the rest
/// of the dashboard.
#[component]
pub fn StatCard(label: String, value: Option<String>) -> Element {
    rsx! {
        div {
            class: "stat-card",
            span { class: "stat-label", "{label}" }
            if let Some(v) = value {
                span { class: "stat-value", "{v}" }
            } else {
                span { class: "stat-value stat-missing", "—" }
            }
        }
    }
}
