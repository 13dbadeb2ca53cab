//! Route guard hook for protected pages.

use api::Role;
use dioxus::prelude::*;

use crate::auth::{use_auth, Access, AuthState};

/// Two-phase guard: re-hydrate the auth store from cookies on mount, then,
/// once hydration has completed, redirect away if the requirement fails.
///
/// Returns the current [`Access`] so the page can render a blank frame while
/// `Pending` and its content only when `Allowed`.
pub fn use_auth_guard(required_role: Option<Role>) -> Access {
    let mut auth = use_auth();

    // Cookies are the source of truth; the store is only a cache of them.
    use_effect(move || {
        auth.set(AuthState::from_cookies());
    });

    let access = auth().access(required_role);

    use_effect(use_reactive!(|access| {
        if let Access::Denied { redirect } = access {
            crate::navigate_to(redirect);
        }
    }));

    access
}
