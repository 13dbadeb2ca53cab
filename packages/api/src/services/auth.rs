//! Authentication and OTP server functions.
//!
//! Login and OTP verification return an [`AuthSession`]; the client writes
//! the tokens and user snapshot to cookies itself, so cookie state stays the
//! single source of truth for the auth store.

use dioxus::prelude::*;

use crate::models::{AuthSession, User};

/// Log in with email and password.
#[cfg(feature = "server")]
#[post("/api/auth/login", jar: axum_extra::extract::CookieJar)]
pub async fn login(email: String, password: String) -> Result<AuthSession, ServerFnError> {
    let backend = super::backend(&jar)?;
    backend
        .post(
            "/auth/login",
            &serde_json::json!({ "email": email.trim().to_lowercase(), "password": password }),
        )
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/login")]
pub async fn login(email: String, password: String) -> Result<AuthSession, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Register a new account. The backend sends a verification OTP by email;
/// the account stays unverified until [`verify_otp`] succeeds.
#[cfg(feature = "server")]
#[post("/api/auth/register", jar: axum_extra::extract::CookieJar)]
pub async fn register(name: String, email: String, password: String) -> Result<User, ServerFnError> {
    let email = email.trim().to_lowercase();
    let name = name.trim().to_string();

    if name.is_empty() {
        return Err(ServerFnError::new("Name is required"));
    }
    if email.is_empty() || !email.contains('@') {
        return Err(ServerFnError::new("Invalid email address"));
    }
    if password.len() < 8 {
        return Err(ServerFnError::new("Password must be at least 8 characters"));
    }

    let backend = super::backend(&jar)?;
    backend
        .post(
            "/auth/register",
            &serde_json::json!({ "name": name, "email": email, "password": password }),
        )
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/register")]
pub async fn register(name: String, email: String, password: String) -> Result<User, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Verify the 6-digit email OTP. Returns a full session on success.
#[cfg(feature = "server")]
#[post("/api/auth/verify-otp", jar: axum_extra::extract::CookieJar)]
pub async fn verify_otp(email: String, otp: String) -> Result<AuthSession, ServerFnError> {
    if otp.len() != 6 || !otp.chars().all(|c| c.is_ascii_digit()) {
        return Err(ServerFnError::new("OTP must be exactly 6 digits"));
    }

    let backend = super::backend(&jar)?;
    backend
        .post(
            "/auth/verify-otp",
            &serde_json::json!({ "email": email.trim().to_lowercase(), "otp": otp }),
        )
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/verify-otp")]
pub async fn verify_otp(email: String, otp: String) -> Result<AuthSession, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Ask the backend to email a fresh OTP.
#[cfg(feature = "server")]
#[post("/api/auth/resend-otp", jar: axum_extra::extract::CookieJar)]
pub async fn resend_otp(email: String) -> Result<(), ServerFnError> {
    let backend = super::backend(&jar)?;
    backend
        .post_empty(
            "/auth/resend-otp",
            &serde_json::json!({ "email": email.trim().to_lowercase() }),
        )
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/resend-otp")]
pub async fn resend_otp(email: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Start a password reset: the backend emails an OTP.
#[cfg(feature = "server")]
#[post("/api/auth/forgot-password", jar: axum_extra::extract::CookieJar)]
pub async fn forgot_password(email: String) -> Result<(), ServerFnError> {
    let backend = super::backend(&jar)?;
    backend
        .post_empty(
            "/auth/forgot-password",
            &serde_json::json!({ "email": email.trim().to_lowercase() }),
        )
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/forgot-password")]
pub async fn forgot_password(email: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Complete a password reset with the emailed OTP and a new password.
#[cfg(feature = "server")]
#[post("/api/auth/reset-password", jar: axum_extra::extract::CookieJar)]
pub async fn reset_password(
    email: String,
    otp: String,
    new_password: String,
) -> Result<(), ServerFnError> {
    if otp.len() != 6 || !otp.chars().all(|c| c.is_ascii_digit()) {
        return Err(ServerFnError::new("OTP must be exactly 6 digits"));
    }
    if new_password.len() < 8 {
        return Err(ServerFnError::new("Password must be at least 8 characters"));
    }

    let backend = super::backend(&jar)?;
    backend
        .post_empty(
            "/auth/reset-password",
            &serde_json::json!({
                "email": email.trim().to_lowercase(),
                "otp": otp,
                "newPassword": new_password,
            }),
        )
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/reset-password")]
pub async fn reset_password(
    email: String,
    otp: String,
    new_password: String,
) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Fetch the profile behind the current access token, or `None` when the
/// cookie is missing or no longer valid.
#[cfg(feature = "server")]
#[get("/api/auth/me", jar: axum_extra::extract::CookieJar)]
pub async fn me() -> Result<Option<User>, ServerFnError> {
    if jar.get(super::ACCESS_TOKEN_COOKIE).is_none() {
        return Ok(None);
    }
    let backend = super::backend(&jar)?;
    match backend.get::<User>("/auth/me").await {
        Ok(user) => Ok(Some(user)),
        Err(e) => {
            tracing::debug!("auth/me rejected: {e}");
            Ok(None)
        }
    }
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/me")]
pub async fn me() -> Result<Option<User>, ServerFnError> {
    Ok(None)
}
