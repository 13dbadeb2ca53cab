//! Dashboard counters. The four sources are fetched concurrently and
//! inspected one by one, so a single failure renders as a dash instead of
//! blanking the whole page.

use dioxus::prelude::*;
use ui::components::StatCard;

#[derive(Clone, PartialEq, Default)]
struct Stats {
    users: Option<u64>,
    orders: Option<u64>,
    revenue: Option<f64>,
    ingredients: Option<u64>,
}

#[component]
pub fn AdminDashboard() -> Element {
    let stats = use_resource(|| async move {
        let (users, orders, revenue, ingredients) = futures::join!(
            api::services::stats::count_users(),
            api::services::stats::count_orders(),
            api::services::stats::total_revenue(),
            api::services::stats::count_ingredients(),
        );

        for e in [users.as_ref().err(), orders.as_ref().err(), revenue.as_ref().err(), ingredients.as_ref().err()]
            .into_iter()
            .flatten()
        {
            tracing::warn!("dashboard stat failed: {e}");
        }

        Stats {
            users: users.ok(),
            orders: orders.ok(),
            revenue: revenue.ok(),
            ingredients: ingredients.ok(),
        }
    });

    let stats = stats().unwrap_or_default();

    rsx! {
        div {
            class: "admin-page",
            h1 { "Dashboard" }

            div {
                class: "stats-grid",
                StatCard {
                    label: "Users",
                    value: stats.users.map(|n| n.to_string()),
                }
                StatCard {
                    label: "Orders",
                    value: stats.orders.map(|n| n.to_string()),
                }
                StatCard {
                    label: "Revenue",
                    value: stats.revenue.map(|n| format!("${n:.2}")),
                }
                StatCard {
                    label: "Ingredients",
                    value: stats.ingredients.map(|n| n.to_string()),
                }
            }
        }
    }
}
