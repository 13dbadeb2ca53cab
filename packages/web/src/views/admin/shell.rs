//! Admin layout: role guard around a sidebar plus the routed content.

use api::Role;
use dioxus::prelude::*;
use ui::{use_auth_guard, Access, LogoutButton};

use crate::Route;

/// Wraps every admin page. Renders a blank frame until the auth store has
/// hydrated, and nothing at all once a redirect has been decided.
#[component]
pub fn AdminShell() -> Element {
    let access = use_auth_guard(Some(Role::Admin));

    if access != Access::Allowed {
        return rsx! {};
    }

    rsx! {
        div {
            class: "admin-shell",

            aside {
                class: "admin-sidebar",
                a { class: "admin-brand", href: "/", "HealthyBowl" }

                nav {
                    class: "admin-nav",
                    Link { to: Route::AdminDashboard {}, "Dashboard" }
                    Link { to: Route::AdminOrders {}, "Orders" }
                    Link { to: Route::AdminIngredients {}, "Ingredients" }
                    Link { to: Route::AdminCategories {}, "Categories" }
                    Link { to: Route::AdminTemplates {}, "Bowl templates" }
                    Link { to: Route::AdminPromotions {}, "Promotions" }
                    Link { to: Route::AdminStores {}, "Stores" }
                    Link { to: Route::AdminUsers {}, "Users" }
                }

                LogoutButton { class: "btn btn-ghost admin-logout" }
            }

            main {
                class: "admin-content",
                Outlet::<Route> {}
            }
        }
    }
}
