//! Promotion codes.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::Promotion;
use crate::rest::Page;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionInput {
    pub code: String,
    pub description: String,
    pub discount_percent: f64,
    pub active: bool,
    pub starts_at: Option<String>,
    pub ends_at: Option<String>,
}

#[cfg(feature = "server")]
#[get("/api/promotions/list", jar: axum_extra::extract::CookieJar)]
pub async fn list_promotions(search: String, page: u32, size: u32) -> Result<Page<Promotion>, ServerFnError> {
    let backend = super::backend(&jar)?;
    backend
        .get_page(&format!(
            "/promotions/getall{}",
            crate::rest::list_query(&search, page, size)
        ))
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[get("/api/promotions/list")]
pub async fn list_promotions(search: String, page: u32, size: u32) -> Result<Page<Promotion>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[get("/api/promotions/:id", jar: axum_extra::extract::CookieJar)]
pub async fn get_promotion(id: String) -> Result<Promotion, ServerFnError> {
    let backend = super::backend(&jar)?;
    backend
        .get(&format!("/promotions/getbyid/{id}"))
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[get("/api/promotions/:id")]
pub async fn get_promotion(id: String) -> Result<Promotion, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/promotions/create", jar: axum_extra::extract::CookieJar)]
pub async fn create_promotion(input: PromotionInput) -> Result<Promotion, ServerFnError> {
    let backend = super::backend(&jar)?;
    backend
        .post("/promotions/create", &input)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[post("/api/promotions/create")]
pub async fn create_promotion(input: PromotionInput) -> Result<Promotion, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/promotions/update", jar: axum_extra::extract::CookieJar)]
pub async fn update_promotion(id: String, input: PromotionInput) -> Result<Promotion, ServerFnError> {
    let backend = super::backend(&jar)?;
    backend
        .put(&format!("/promotions/update/{id}"), &input)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[post("/api/promotions/update")]
pub async fn update_promotion(id: String, input: PromotionInput) -> Result<Promotion, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/promotions/delete", jar: axum_extra::extract::CookieJar)]
pub async fn delete_promotion(id: String) -> Result<(), ServerFnError> {
    let backend = super::backend(&jar)?;
    backend
        .delete_empty(&format!("/promotions/delete/{id}"))
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/promotions/delete")]
pub async fn delete_promotion(id: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
