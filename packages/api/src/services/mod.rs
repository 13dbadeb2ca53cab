//! Server functions, one module per backend resource.
//!
//! Every public `async fn` here is a Dioxus server function compiled twice:
//! the full body behind `#[cfg(feature = "server")]` and a thin client stub
//! otherwise. Each one translates a single in-repo call into a single
//! backend REST call through [`crate::rest::Backend`], reading the caller's
//! access token from the request cookie jar.

pub mod auth;
pub mod categories;
pub mod ingredients;
pub mod orders;
pub mod promotions;
pub mod stats;
pub mod stores;
pub mod templates;
pub mod users;

/// Name of the access-token cookie written at login.
pub const ACCESS_TOKEN_COOKIE: &str = "accessToken";

#[cfg(feature = "server")]
pub(crate) use server::backend;

#[cfg(feature = "server")]
mod server {
    use axum_extra::extract::CookieJar;
    use dioxus::prelude::ServerFnError;

    use crate::config;
    use crate::rest::Backend;

    /// Build a backend client for this request, carrying the caller's access
    /// token when the cookie is present.
    pub(crate) fn backend(jar: &CookieJar) -> Result<Backend, ServerFnError> {
        let config = config::get().map_err(ServerFnError::new)?;
        let token = jar
            .get(super::ACCESS_TOKEN_COOKIE)
            .map(|c| c.value().to_string());
        Ok(Backend::new(config.backend_url.clone()).with_token(token))
    }
}
