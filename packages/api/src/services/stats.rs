//! Admin dashboard counters. The dashboard fires these concurrently and
//! inspects each outcome independently, so one failing source never blanks
//! the others.

use dioxus::prelude::*;

#[cfg(feature = "server")]
#[get("/api/stats/users", jar: axum_extra::extract::CookieJar)]
pub async fn count_users() -> Result<u64, ServerFnError> {
    let backend = super::backend(&jar)?;
    backend
        .get("/stats/users")
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[get("/api/stats/users")]
pub async fn count_users() -> Result<u64, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[get("/api/stats/orders", jar: axum_extra::extract::CookieJar)]
pub async fn count_orders() -> Result<u64, ServerFnError> {
    let backend = super::backend(&jar)?;
    backend
        .get("/stats/orders")
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[get("/api/stats/orders")]
pub async fn count_orders() -> Result<u64, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[get("/api/stats/revenue", jar: axum_extra::extract::CookieJar)]
pub async fn total_revenue() -> Result<f64, ServerFnError> {
    let backend = super::backend(&jar)?;
    backend
        .get("/stats/revenue")
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[get("/api/stats/revenue")]
pub async fn total_revenue() -> Result<f64, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[get("/api/stats/ingredients", jar: axum_extra::extract::CookieJar)]
pub async fn count_ingredients() -> Result<u64, ServerFnError> {
    let backend = super::backend(&jar)?;
    backend
        .get("/stats/ingredients")
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[get("/api/stats/ingredients")]
pub async fn count_ingredients() -> Result<u64, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
