//! Email verification: the six-digit code mailed on registration.

use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant};
use ui::{is_complete_otp, push_toast, store_session, use_auth, use_toasts, OtpInput, ToastLevel};

#[component]
pub fn VerifyOtp(email: String) -> Element {
    let mut auth = use_auth();
    let mut toasts = use_toasts();
    let mut code = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);
    let mut resending = use_signal(|| false);

    let submit_email = email.clone();
    let handle_verify = move |evt: FormEvent| {
        evt.prevent_default();
        let email = submit_email.clone();
        spawn(async move {
            // The input sanitizes, so an incomplete code is the only invalid shape.
            if !is_complete_otp(&code()) {
                error.set(Some("Enter the full 6-digit code".to_string()));
                return;
            }

            error.set(None);
            loading.set(true);
            match api::services::auth::verify_otp(email, code()).await {
                Ok(session) => {
                    store_session(&mut auth, &session);
                    ui::navigate_to("/");
                }
                Err(e) => {
                    loading.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    let resend_email = email.clone();
    let handle_resend = move |_| {
        let email = resend_email.clone();
        spawn(async move {
            resending.set(true);
            match api::services::auth::resend_otp(email).await {
                Ok(()) => push_toast(&mut toasts, ToastLevel::Success, "A new code is on its way"),
                Err(e) => push_toast(&mut toasts, ToastLevel::Error, &e.to_string()),
            }
            resending.set(false);
        });
    };

    rsx! {
        div {
            class: "auth-page",

            h1 { "Check your email" }
            p { class: "auth-subtitle", "We sent a 6-digit code to {email}" }

            form {
                class: "auth-form",
                onsubmit: handle_verify,

                if let Some(err) = error() {
                    div { class: "form-error-banner", "{err}" }
                }

                OtpInput {
                    value: code(),
                    oninput: move |v| code.set(v),
                }

                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    disabled: loading() || !is_complete_otp(&code()),
                    if loading() { "Verifying..." } else { "Verify" }
                }
            }

            p {
                class: "auth-links",
                "Didn't get it? "
                button {
                    class: "link-button",
                    disabled: resending(),
                    onclick: handle_resend,
                    "Resend code"
                }
            }
        }
    }
}
