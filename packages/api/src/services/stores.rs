//! Store locations.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::StoreLocation;
use crate::rest::Page;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreInput {
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub open_hours: Option<String>,
}

#[cfg(feature = "server")]
#[get("/api/stores/list", jar: axum_extra::extract::CookieJar)]
pub async fn list_stores(search: String, page: u32, size: u32) -> Result<Page<StoreLocation>, ServerFnError> {
    let backend = super::backend(&jar)?;
    backend
        .get_page(&format!(
            "/stores/getall{}",
            crate::rest::list_query(&search, page, size)
        ))
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[get("/api/stores/list")]
pub async fn list_stores(search: String, page: u32, size: u32) -> Result<Page<StoreLocation>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[get("/api/stores/:id", jar: axum_extra::extract::CookieJar)]
pub async fn get_store(id: String) -> Result<StoreLocation, ServerFnError> {
    let backend = super::backend(&jar)?;
    backend
        .get(&format!("/stores/getbyid/{id}"))
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[get("/api/stores/:id")]
pub async fn get_store(id: String) -> Result<StoreLocation, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/stores/create", jar: axum_extra::extract::CookieJar)]
pub async fn create_store(input: StoreInput) -> Result<StoreLocation, ServerFnError> {
    let backend = super::backend(&jar)?;
    backend
        .post("/stores/create", &input)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[post("/api/stores/create")]
pub async fn create_store(input: StoreInput) -> Result<StoreLocation, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/stores/update", jar: axum_extra::extract::CookieJar)]
pub async fn update_store(id: String, input: StoreInput) -> Result<StoreLocation, ServerFnError> {
    let backend = super::backend(&jar)?;
    backend
        .put(&format!("/stores/update/{id}"), &input)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[post("/api/stores/update")]
pub async fn update_store(id: String, input: StoreInput) -> Result<StoreLocation, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/stores/delete", jar: axum_extra::extract::CookieJar)]
pub async fn delete_store(id: String) -> Result<(), ServerFnError> {
    let backend = super::backend(&jar)?;
    backend
        .delete_empty(&format!("/stores/delete/{id}"))
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/stores/delete")]
pub async fn delete_store(id: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
