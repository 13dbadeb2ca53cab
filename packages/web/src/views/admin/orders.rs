//! Order management: list, inspect, and drive status transitions. The
//! transitions themselves are validated server-side; buttons only appear for
//! the moves that make sense from the current status.

use api::services::orders::{cancel_order, complete_order, confirm_order, list_orders};
use api::{Order, OrderStatus};
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, ModalOverlay, Pagination, SearchBox};
use ui::{push_toast, use_toasts, ToastLevel};

use super::PAGE_SIZE;

#[component]
pub fn AdminOrders() -> Element {
    let mut toasts = use_toasts();
    let mut search = use_signal(String::new);
    let mut page = use_signal(|| 0u32);
    let mut reload = use_signal(|| 0u32);
    let mut viewing = use_signal(|| Option::<Order>::None);

    let list = use_resource(move || async move {
        reload();
        list_orders(search(), page(), PAGE_SIZE).await.ok()
    });

    let transition = move |id: String, action: &'static str| {
        spawn(async move {
            let result = match action {
                "confirm" => confirm_order(id).await,
                "complete" => complete_order(id).await,
                _ => cancel_order(id).await,
            };
            match result {
                Ok(order) => {
                    push_toast(
                        &mut toasts,
                        ToastLevel::Success,
                        &format!("Order is now {}", order.status.label()),
                    );
                    reload += 1;
                }
                Err(e) => push_toast(&mut toasts, ToastLevel::Error, &e.to_string()),
            }
        });
    };

    rsx! {
        div {
            class: "admin-page",

            header {
                class: "admin-header",
                h1 { "Orders" }
                SearchBox {
                    value: search(),
                    oninput: move |v| {
                        search.set(v);
                        page.set(0);
                    },
                }
            }

            match list() {
                None => rsx! { p { class: "loading", "Loading..." } },
                Some(None) => rsx! { p { class: "form-error", "Could not load orders" } },
                Some(Some(orders)) => rsx! {
                    table {
                        class: "admin-table",
                        thead {
                            tr {
                                th { "Order" }
                                th { "Customer" }
                                th { "Total" }
                                th { "Status" }
                                th { "Placed" }
                                th {}
                            }
                        }
                        tbody {
                            for order in orders.items.iter() {
                                tr {
                                    key: "{order.id}",
                                    td {
                                        button {
                                            class: "link-button",
                                            onclick: {
                                                let order = order.clone();
                                                move |_| viewing.set(Some(order.clone()))
                                            },
                                            "#{order.id}"
                                        }
                                    }
                                    td { {order.user_name.clone().unwrap_or_else(|| order.user_id.clone())} }
                                    td { {format!("${:.2}", order.total)} }
                                    td {
                                        span {
                                            class: "status-badge status-{order.status.label().to_lowercase()}",
                                            "{order.status.label()}"
                                        }
                                    }
                                    td { {order.created_at.clone().unwrap_or_default()} }
                                    td {
                                        class: "row-actions",
                                        if order.status == OrderStatus::Pending {
                                            Button {
                                                variant: ButtonVariant::Primary,
                                                onclick: {
                                                    let id = order.id.clone();
                                                    move |_| transition(id.clone(), "confirm")
                                                },
                                                "Confirm"
                                            }
                                        }
                                        if order.status == OrderStatus::Confirmed {
                                            Button {
                                                variant: ButtonVariant::Primary,
                                                onclick: {
                                                    let id = order.id.clone();
                                                    move |_| transition(id.clone(), "complete")
                                                },
                                                "Complete"
                                            }
                                        }
                                        if matches!(order.status, OrderStatus::Pending | OrderStatus::Confirmed) {
                                            Button {
                                                variant: ButtonVariant::Danger,
                                                onclick: {
                                                    let id = order.id.clone();
                                                    move |_| transition(id.clone(), "cancel")
                                                },
                                                "Cancel"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }

                    Pagination {
                        page: page(),
                        total_pages: orders.total_pages,
                        onchange: move |p| page.set(p),
                    }
                },
            }

            if let Some(order) = viewing() {
                ModalOverlay {
                    on_close: move |_| viewing.set(None),
                    div {
                        class: "order-detail",
                        h2 { "Order #{order.id}" }
                        p { class: "order-status", "{order.status.label()}" }

                        for bowl in order.bowls.iter() {
                            div {
                                class: "order-bowl",
                                h3 {
                                    if let Some(name) = &bowl.template_name {
                                        "{name}"
                                    } else {
                                        "Custom bowl"
                                    }
                                }
                                ul {
                                    for item in bowl.items.iter() {
                                        li {
                                            key: "{item.ingredient_id}",
                                            {format!(
                                                "{} × {}",
                                                item.quantity,
                                                item.ingredient_name.clone().unwrap_or_else(|| item.ingredient_id.clone()),
                                            )}
                                        }
                                    }
                                }
                                span { {format!("${:.2}", bowl.price)} }
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
            }
        }
    }
}
