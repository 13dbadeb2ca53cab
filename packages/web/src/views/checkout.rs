//! Order outcome page. The order flow lands here after submission, and the
//! payment gateway redirects back here with a status in the query string.

use dioxus::prelude::*;
use ui::{use_auth_guard, Access};

#[component]
pub fn Checkout(status: String, order_id: String) -> Element {
    let access = use_auth_guard(None);

    let load_id = order_id.clone();
    let order = use_resource(move || {
        let id = load_id.clone();
        async move {
            if id.is_empty() {
                return None;
            }
            api::services::orders::get_order(id).await.ok()
        }
    });

    if access != Access::Allowed {
        return rsx! {};
    }

    let succeeded = status == "success";

    rsx! {
        div {
            class: "checkout-page",

            if succeeded {
                h1 { "Order placed" }
                p { class: "checkout-message", "Thanks! Your bowls are on the way to the kitchen." }
            } else {
                h1 { "Payment not completed" }
                p {
                    class: "checkout-message",
                    "Your payment didn't go through. Your order is still saved; you can try again from your order history."
                }
            }

            if let Some(Some(order)) = order() {
                div {
                    class: "order-summary",
                    h2 { "Order #{order.id}" }
                    span { class: "order-status", "{order.status.label()}" }

                    ul {
                        class: "order-bowls",
                        for bowl in order.bowls.iter() {
                            li {
                                key: "{bowl.id}",
                                class: "order-bowl",
                                span {
                                    if let Some(name) = &bowl.template_name {
                                        "{name}"
                                    } else {
                                        "Custom bowl"
                                    }
                                }
                                span { {format!("${:.2}", bowl.price)} }
                            }
                        }
                    }

                    div {
                        class: "order-totals",
                        div { span { "Subtotal" } span { {format!("${:.2}", order.subtotal)} } }
                        if order.promotion_discount > 0.0 {
                            div {
                                span { "Discount" }
                                span { {format!("-${:.2}", order.promotion_discount)} }
                            }
                        }
                        div { class: "order-total", span { "Total" } span { {format!("${:.2}", order.total)} } }
                    }
                }
            }

            a { class: "btn btn-primary", href: "/order", "Build another bowl" }
        }
    }
}
