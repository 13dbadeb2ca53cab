//! Ordering flow: pick a template, walk the bowl wizard, collect bowls in a
//! cart, then submit the batch with a store and optional promo code.

use api::{BowlTemplate, NewBowl, NewOrder};
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Input, Select};
use ui::order::BowlBuilder;
use ui::{push_toast, use_auth, use_auth_guard, use_toasts, Access, ToastLevel};

/// A finished bowl waiting in the cart.
#[derive(Clone, PartialEq)]
struct CartLine {
    bowl: NewBowl,
    template_name: String,
    price: f64,
}

#[component]
pub fn Order() -> Element {
    let access = use_auth_guard(None);
    let auth = use_auth();
    let nav = use_navigator();
    let mut toasts = use_toasts();

    let mut building = use_signal(|| Option::<BowlTemplate>::None);
    let mut cart = use_signal(Vec::<CartLine>::new);
    let mut store_id = use_signal(String::new);
    let mut promo_code = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let templates = use_resource(|| async move {
        api::services::templates::list_templates().await.ok()
    });
    let stores = use_resource(|| async move {
        api::services::stores::list_stores(String::new(), 0, 50)
            .await
            .map(|page| page.items)
            .ok()
    });

    if access != Access::Allowed {
        return rsx! {};
    }

    let initial_goal = auth().user.as_ref().and_then(|u| u.goal);

    // Wizard mode: one template, full screen.
    if let Some(template) = building() {
        let template_name = template.name.clone();
        let base_price = template.base_price;
        return rsx! {
            div {
                class: "order-page",
                BowlBuilder {
                    template: template.clone(),
                    initial_goal: initial_goal,
                    on_complete: move |bowl: NewBowl| {
                        let price = base_price
                            + bowl
                                .items
                                .iter()
                                .map(|i| i.unit_price * i.quantity as f64)
                                .sum::<f64>();
                        cart.write().push(CartLine {
                            bowl,
                            template_name: template_name.clone(),
                            price,
                        });
                        building.set(None);
                    },
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| building.set(None),
                    "Cancel this bowl"
                }
            }
        };
    }

    let store_options = stores()
        .flatten()
        .map(|stores| {
            stores
                .into_iter()
                .map(|s| (s.id, format!("{} — {}", s.name, s.address)))
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();

    let cart_total: f64 = cart().iter().map(|line| line.price).sum();
    let can_submit = !cart().is_empty() && !store_id().is_empty() && !submitting();

    let handle_submit = move |_| {
        spawn(async move {
            let code = promo_code().trim().to_string();
            let order = NewOrder {
                store_id: store_id(),
                promotion_code: (!code.is_empty()).then_some(code),
                bowls: cart().iter().map(|line| line.bowl.clone()).collect(),
            };

            submitting.set(true);
            match api::services::orders::create_order(order).await {
                Ok(created) => {
                    cart.write().clear();
                    nav.push(crate::Route::Checkout {
                        status: "success".to_string(),
                        order_id: created.id,
                    });
                }
                Err(e) => {
                    submitting.set(false);
                    push_toast(&mut toasts, ToastLevel::Error, &e.to_string());
                }
            }
        });
    };

    rsx! {
        div {
            class: "order-page",

            section {
                class: "template-picker",
                h1 { "Choose a bowl" }

                match templates() {
                    None => rsx! { p { class: "loading", "Loading bowls..." } },
                    Some(None) => rsx! { p { class: "form-error", "Could not load bowls. Try again later." } },
                    Some(Some(templates)) => rsx! {
                        div {
                            class: "template-grid",
                            for template in templates {
                                div {
                                    key: "{template.id}",
                                    class: "template-card",
                                    h3 { "{template.name}" }
                                    if let Some(description) = &template.description {
                                        p { "{description}" }
                                    }
                                    span { class: "template-price", {format!("from ${:.2}", template.base_price)} }
                                    Button {
                                        variant: ButtonVariant::Primary,
                                        onclick: {
                                            let template = template.clone();
                                            move |_| building.set(Some(template.clone()))
                                        },
                                        "Build this bowl"
                                    }
                                }
                            }
                        }
                    },
                }
            }

            aside {
                class: "cart-panel",
                h2 { "Your order" }

                if cart().is_empty() {
                    p { class: "cart-empty", "No bowls yet. Pick one to get started." }
                } else {
                    ul {
                        class: "cart-lines",
                        for (index, line) in cart().iter().enumerate() {
                            li {
                                key: "{index}",
                                class: "cart-line",
                                span { "{line.template_name}" }
                                span { {format!("${:.2}", line.price)} }
                                button {
                                    class: "link-button",
                                    onclick: move |_| { cart.write().remove(index); },
                                    "Remove"
                                }
                            }
                        }
                    }

                    div {
                        class: "cart-total",
                        span { "Total" }
                        span { {format!("${:.2}", cart_total)} }
                    }

                    Select {
                        value: store_id(),
                        options: {
                            let mut options = vec![(String::new(), "Pick a store...".to_string())];
                            options.extend(store_options);
                            options
                        },
                        onchange: move |v| store_id.set(v),
                    }

                    Input {
                        placeholder: "Promo code (optional)",
                        value: promo_code(),
                        oninput: move |evt: FormEvent| promo_code.set(evt.value()),
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        disabled: !can_submit,
                        onclick: handle_submit,
                        if submitting() { "Placing order..." } else { "Place order" }
                    }
                }
            }
        }
    }
}
