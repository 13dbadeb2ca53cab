use dioxus::prelude::*;

use crate::auth::{use_auth, LogoutButton};

/// Site-wide top navigation. Links are plain anchors so the bar stays
/// router-agnostic across pages.
#[component]
pub fn Navbar() -> Element {
    let auth = use_auth();
    let state = auth();

    rsx! {
        nav {
            class: "navbar",
            a { class: "navbar-brand", href: "/", "HealthyBowl" }

            div {
                class: "navbar-links",
                a { href: "/order", "Build a bowl" }

                if let Some(user) = &state.user {
                    if user.is_admin() {
                        a { href: "/admin", "Admin" }
                    }
                    span { class: "navbar-user", "{user.name}" }
                    LogoutButton { class: "btn btn-ghost" }
                } else if state.hydrated {
                    a { class: "btn btn-outline", href: "/login", "Sign in" }
                }
            }
        }
    }
}
