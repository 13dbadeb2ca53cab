//! Ingredient categories.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::Category;
use crate::rest::Page;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInput {
    pub name: String,
    pub description: Option<String>,
}

#[cfg(feature = "server")]
#[get("/api/categories/list", jar: axum_extra::extract::CookieJar)]
pub async fn list_categories(search: String, page: u32, size: u32) -> Result<Page<Category>, ServerFnError> {
    let backend = super::backend(&jar)?;
    backend
        .get_page(&format!(
            "/categories/getall{}",
            crate::rest::list_query(&search, page, size)
        ))
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[get("/api/categories/list")]
pub async fn list_categories(search: String, page: u32, size: u32) -> Result<Page<Category>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[get("/api/categories/:id", jar: axum_extra::extract::CookieJar)]
pub async fn get_category(id: String) -> Result<Category, ServerFnError> {
    let backend = super::backend(&jar)?;
    backend
        .get(&format!("/categories/getbyid/{id}"))
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[get("/api/categories/:id")]
pub async fn get_category(id: String) -> Result<Category, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/categories/create", jar: axum_extra::extract::CookieJar)]
pub async fn create_category(input: CategoryInput) -> Result<Category, ServerFnError> {
    let backend = super::backend(&jar)?;
    backend
        .post("/categories/create", &input)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[post("/api/categories/create")]
pub async fn create_category(input: CategoryInput) -> Result<Category, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/categories/update", jar: axum_extra::extract::CookieJar)]
pub async fn update_category(id: String, input: CategoryInput) -> Result<Category, ServerFnError> {
    let backend = super::backend(&jar)?;
    backend
        .put(&format!("/categories/update/{id}"), &input)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[post("/api/categories/update")]
pub async fn update_category(id: String, input: CategoryInput) -> Result<Category, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/categories/delete", jar: axum_extra::extract::CookieJar)]
pub async fn delete_category(id: String) -> Result<(), ServerFnError> {
    let backend = super::backend(&jar)?;
    backend
        .delete_empty(&format!("/categories/delete/{id}"))
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/categories/delete")]
pub async fn delete_category(id: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
