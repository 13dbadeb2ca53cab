//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod cookies;

mod auth;
pub use auth::{
    clear_session, store_session, use_auth, Access, AuthProvider, AuthState, LogoutButton,
};

mod guard;
pub use guard::use_auth_guard;

mod toast;
pub use toast::{push_toast, use_toasts, Toast, ToastLevel, Toaster, Toasts};

mod navbar;
pub use navbar::Navbar;

mod otp;
pub use otp::{is_complete_otp, sanitize_otp, OtpInput, OTP_LEN};

pub mod optimistic;

pub mod order;

mod upload;
pub use upload::ImageUpload;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Hard client-side navigation, for redirects that must drop page state
/// (guard denials, logout).
pub fn navigate_to(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!("navigation to {path} skipped outside the browser");
    }
}
