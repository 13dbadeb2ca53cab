//! Password reset in two phases: request an emailed code, then submit the
//! code with a new password.

use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Input};
use ui::{is_complete_otp, OtpInput};

#[component]
pub fn ForgotPassword() -> Element {
    let mut email = use_signal(String::new);
    let mut code = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    // False until the reset email has been requested.
    let mut code_sent = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut notice = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_request = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_lowercase();
            if e.is_empty() || !e.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }

            loading.set(true);
            match api::services::auth::forgot_password(e).await {
                Ok(()) => {
                    code_sent.set(true);
                    notice.set(Some("Check your email for a 6-digit code".to_string()));
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            loading.set(false);
        });
    };

    let handle_reset = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            notice.set(None);

            if !is_complete_otp(&code()) {
                error.set(Some("Enter the full 6-digit code".to_string()));
                return;
            }
            if new_password().len() < 8 {
                error.set(Some("Password must be at least 8 characters".to_string()));
                return;
            }

            loading.set(true);
            let e = email().trim().to_lowercase();
            match api::services::auth::reset_password(e, code(), new_password()).await {
                Ok(()) => ui::navigate_to("/login"),
                Err(e) => {
                    loading.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",

            h1 { "Reset password" }

            if let Some(err) = error() {
                div { class: "form-error-banner", "{err}" }
            }
            if let Some(msg) = notice() {
                div { class: "form-notice-banner", "{msg}" }
            }

            if !code_sent() {
                form {
                    class: "auth-form",
                    onsubmit: handle_request,

                    Input {
                        r#type: "email",
                        placeholder: "Email",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Sending..." } else { "Send reset code" }
                    }
                }
            } else {
                form {
                    class: "auth-form",
                    onsubmit: handle_reset,

                    OtpInput {
                        value: code(),
                        oninput: move |v| code.set(v),
                    }

                    Input {
                        r#type: "password",
                        placeholder: "New password (min 8 characters)",
                        value: new_password(),
                        oninput: move |evt: FormEvent| new_password.set(evt.value()),
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Resetting..." } else { "Reset password" }
                    }
                }
            }

            p {
                class: "auth-links",
                a { href: "/login", "Back to sign in" }
            }
        }
    }
}
