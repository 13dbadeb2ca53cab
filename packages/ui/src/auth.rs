//! Authentication context and hooks for the UI.
//!
//! The in-memory state is a cache of cookie state, never the source of
//! truth: [`AuthProvider`] hydrates from cookies on mount, and guarded pages
//! re-hydrate before making any authorization decision. The `hydrated` flag
//! is what lets guards avoid a premature redirect on first paint, before
//! cookies have been read.

use api::{AuthSession, Role, User};
use dioxus::prelude::*;

use crate::cookies;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub is_authenticated: bool,
    /// Set once cookies have been read, exactly once per mount.
    pub hydrated: bool,
}

/// Outcome of a guard check against the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Cookies not read yet. Render nothing, decide nothing.
    Pending,
    Allowed,
    /// Redirect target when the requirement fails.
    Denied { redirect: &'static str },
}

impl AuthState {
    /// Rebuild state from cookies.
    pub fn from_cookies() -> Self {
        let is_authenticated = cookies::get(cookies::IS_AUTHENTICATED).as_deref() == Some("true");
        let user = cookies::get(cookies::USER)
            .map(|raw| cookies::percent_decode(&raw))
            .and_then(|json| serde_json::from_str::<User>(&json).ok());

        Self {
            // A user snapshot without the flag is stale state, not a login.
            is_authenticated: is_authenticated && user.is_some(),
            user,
            hydrated: true,
        }
    }

    /// Guard decision for a page requiring authentication and, optionally, a
    /// role. Never denies before hydration has completed.
    pub fn access(&self, required_role: Option<Role>) -> Access {
        if !self.hydrated {
            return Access::Pending;
        }
        let Some(user) = self.user.as_ref().filter(|_| self.is_authenticated) else {
            return Access::Denied { redirect: "/login" };
        };
        match required_role {
            Some(role) if user.role != role => Access::Denied { redirect: "/" },
            _ => Access::Allowed,
        }
    }
}

/// Get the current authentication state.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that manages authentication state.
/// Wrap the app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_context_provider(|| Signal::new(AuthState::default()));

    // Hydrate from cookies once on mount. Effects only run on the client,
    // so the server render never sees a hydrated store.
    use_effect(move || {
        auth_state.set(AuthState::from_cookies());
    });

    rsx! {
        {children}
    }
}

/// Persist a fresh login: write all four cookies, then update the store.
pub fn store_session(auth: &mut Signal<AuthState>, session: &AuthSession) {
    cookies::set(cookies::ACCESS_TOKEN, &session.access_token);
    cookies::set(cookies::REFRESH_TOKEN, &session.refresh_token);
    cookies::set(cookies::IS_AUTHENTICATED, "true");
    if let Ok(json) = serde_json::to_string(&session.user) {
        cookies::set(cookies::USER, &cookies::percent_encode(&json));
    }

    auth.set(AuthState {
        user: Some(session.user.clone()),
        is_authenticated: true,
        hydrated: true,
    });
}

/// Clear the session: cookies first, then the store.
pub fn clear_session(auth: &mut Signal<AuthState>) {
    cookies::remove(cookies::ACCESS_TOKEN);
    cookies::remove(cookies::REFRESH_TOKEN);
    cookies::remove(cookies::IS_AUTHENTICATED);
    cookies::remove(cookies::USER);

    auth.set(AuthState {
        user: None,
        is_authenticated: false,
        hydrated: true,
    });
}

/// Button that logs out and returns to the landing page.
#[component]
pub fn LogoutButton(
    #[props(default = "Log out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth = use_auth();

    let onclick = move |_| {
        clear_session(&mut auth);
        crate::navigate_to("/");
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{Role, UserStatus};

    fn user(role: Role) -> User {
        User {
            id: "u1".into(),
            name: "Ana".into(),
            email: "ana@example.com".into(),
            role,
            goal: None,
            status: UserStatus::Active,
            avatar_url: None,
            created_at: None,
        }
    }

    #[test]
    fn test_access_pending_before_hydration() {
        let state = AuthState::default();
        assert_eq!(state.access(None), Access::Pending);
        assert_eq!(state.access(Some(Role::Admin)), Access::Pending);
    }

    #[test]
    fn test_access_denied_when_hydrated_and_absent() {
        let state = AuthState {
            user: None,
            is_authenticated: false,
            hydrated: true,
        };
        assert_eq!(state.access(None), Access::Denied { redirect: "/login" });
    }

    #[test]
    fn test_access_allowed_for_authenticated_customer() {
        let state = AuthState {
            user: Some(user(Role::Customer)),
            is_authenticated: true,
            hydrated: true,
        };
        assert_eq!(state.access(None), Access::Allowed);
    }

    #[test]
    fn test_access_denied_for_non_admin_on_admin_route() {
        let state = AuthState {
            user: Some(user(Role::Customer)),
            is_authenticated: true,
            hydrated: true,
        };
        assert_eq!(
            state.access(Some(Role::Admin)),
            Access::Denied { redirect: "/" }
        );
    }

    #[test]
    fn test_access_allowed_for_admin_on_admin_route() {
        let state = AuthState {
            user: Some(user(Role::Admin)),
            is_authenticated: true,
            hydrated: true,
        };
        assert_eq!(state.access(Some(Role::Admin)), Access::Allowed);
    }

    #[test]
    fn test_user_snapshot_without_flag_is_not_authenticated() {
        // Simulates a stale `user` cookie with isAuthenticated cleared.
        let state = AuthState {
            user: Some(user(Role::Customer)),
            is_authenticated: false,
            hydrated: true,
        };
        assert_eq!(state.access(None), Access::Denied { redirect: "/login" });
    }
}
