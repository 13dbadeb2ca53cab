//! Orders: wizard submission plus the admin status actions. All status
//! transitions happen server-side; this layer only relays them.

use dioxus::prelude::*;

use crate::models::{NewOrder, Order};
use crate::rest::Page;

#[cfg(feature = "server")]
#[get("/api/orders/list", jar: axum_extra::extract::CookieJar)]
pub async fn list_orders(search: String, page: u32, size: u32) -> Result<Page<Order>, ServerFnError> {
    let backend = super::backend(&jar)?;
    backend
        .get_page(&format!(
            "/orders/getall{}",
            crate::rest::list_query(&search, page, size)
        ))
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[get("/api/orders/list")]
pub async fn list_orders(search: String, page: u32, size: u32) -> Result<Page<Order>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[get("/api/orders/:id", jar: axum_extra::extract::CookieJar)]
pub async fn get_order(id: String) -> Result<Order, ServerFnError> {
    let backend = super::backend(&jar)?;
    backend
        .get(&format!("/orders/getbyid/{id}"))
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[get("/api/orders/:id")]
pub async fn get_order(id: String) -> Result<Order, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Submit the wizard output as one batch.
#[cfg(feature = "server")]
#[post("/api/orders/create", jar: axum_extra::extract::CookieJar)]
pub async fn create_order(order: NewOrder) -> Result<Order, ServerFnError> {
    if order.bowls.is_empty() {
        return Err(ServerFnError::new("Order must contain at least one bowl"));
    }
    let backend = super::backend(&jar)?;
    backend
        .post("/orders/create", &order)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[post("/api/orders/create")]
pub async fn create_order(order: NewOrder) -> Result<Order, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/orders/confirm", jar: axum_extra::extract::CookieJar)]
pub async fn confirm_order(id: String) -> Result<Order, ServerFnError> {
    let backend = super::backend(&jar)?;
    backend
        .post(&format!("/orders/confirm/{id}"), &())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[post("/api/orders/confirm")]
pub async fn confirm_order(id: String) -> Result<Order, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/orders/cancel", jar: axum_extra::extract::CookieJar)]
pub async fn cancel_order(id: String) -> Result<Order, ServerFnError> {
    let backend = super::backend(&jar)?;
    backend
        .post(&format!("/orders/cancel/{id}"), &())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[post("/api/orders/cancel")]
pub async fn cancel_order(id: String) -> Result<Order, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/orders/complete", jar: axum_extra::extract::CookieJar)]
pub async fn complete_order(id: String) -> Result<Order, ServerFnError> {
    let backend = super::backend(&jar)?;
    backend
        .post(&format!("/orders/complete/{id}"), &())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[post("/api/orders/complete")]
pub async fn complete_order(id: String) -> Result<Order, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
