//! Marketing landing page: hero, how it works, goals, store locations.

use dioxus::prelude::*;

use api::GoalCode;

#[component]
pub fn Home() -> Element {
    // Store locations are public content; a failure just hides the section.
    let stores = use_resource(|| async move {
        api::services::stores::list_stores(String::new(), 0, 50)
            .await
            .map(|page| page.items)
            .unwrap_or_default()
    });

    rsx! {
        section {
            class: "hero",
            h1 { "Build your bowl. Hit your goal." }
            p {
                class: "hero-subtitle",
                "Fresh ingredients, live nutrition tracking, and a bowl that fits "
                "whatever you're training for."
            }
            a { class: "btn btn-primary hero-cta", href: "/order", "Start building" }
        }

        section {
            class: "how-it-works",
            h2 { "How it works" }
            div {
                class: "steps-grid",
                StepCard {
                    position: 1,
                    title: "Pick a goal",
                    body: "Lose weight, maintain, or gain muscle. We set the macro targets.",
                }
                StepCard {
                    position: 2,
                    title: "Fill your bowl",
                    body: "Walk through the steps and watch calories and macros update live.",
                }
                StepCard {
                    position: 3,
                    title: "Pick up in store",
                    body: "Order ahead and grab your bowl at the location that suits you.",
                }
            }
        }

        section {
            class: "goals",
            h2 { "Made for your goal" }
            div {
                class: "goals-grid",
                for goal in GoalCode::ALL {
                    div {
                        key: "{goal.label()}",
                        class: "goal-card",
                        h3 { "{goal.label()}" }
                    }
                }
            }
        }

        if let Some(stores) = stores() {
            if !stores.is_empty() {
                section {
                    class: "locations",
                    h2 { "Find us" }
                    div {
                        class: "locations-grid",
                        for store in stores.iter() {
                            div {
                                key: "{store.id}",
                                class: "location-card",
                                h3 { "{store.name}" }
                                p { "{store.address}" }
                                if let Some(hours) = &store.open_hours {
                                    p { class: "location-hours", "{hours}" }
                                }
                                if let Some(phone) = &store.phone {
                                    p { class: "location-phone", "{phone}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StepCard(position: u32, title: String, body: String) -> Element {
    rsx! {
        div {
            class: "step-card",
            span { class: "step-number", "{position}" }
            h3 { "{title}" }
            p { "{body}" }
        }
    }
}
