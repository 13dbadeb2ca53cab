//! Bowl templates: recipe skeletons with ordered selection steps.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::BowlTemplate;
use crate::rest::Page;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateStepInput {
    pub label: String,
    pub category_id: String,
    pub position: u32,
    pub min_selections: u32,
    pub max_selections: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateInput {
    pub name: String,
    pub description: Option<String>,
    pub base_price: f64,
    pub steps: Vec<TemplateStepInput>,
}

/// All templates, for the wizard's template picker and the admin list.
#[cfg(feature = "server")]
#[get("/api/templates/list", jar: axum_extra::extract::CookieJar)]
pub async fn list_templates() -> Result<Vec<BowlTemplate>, ServerFnError> {
    let backend = super::backend(&jar)?;
    let page: Page<BowlTemplate> = backend
        .get_page("/bowl-templates/getall")
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    Ok(page.items)
}

#[cfg(not(feature = "server"))]
#[get("/api/templates/list")]
pub async fn list_templates() -> Result<Vec<BowlTemplate>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[get("/api/templates/:id", jar: axum_extra::extract::CookieJar)]
pub async fn get_template(id: String) -> Result<BowlTemplate, ServerFnError> {
    let backend = super::backend(&jar)?;
    backend
        .get(&format!("/bowl-templates/getbyid/{id}"))
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[get("/api/templates/:id")]
pub async fn get_template(id: String) -> Result<BowlTemplate, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/templates/create", jar: axum_extra::extract::CookieJar)]
pub async fn create_template(input: TemplateInput) -> Result<BowlTemplate, ServerFnError> {
    let backend = super::backend(&jar)?;
    backend
        .post("/bowl-templates/create", &input)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[post("/api/templates/create")]
pub async fn create_template(input: TemplateInput) -> Result<BowlTemplate, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/templates/update", jar: axum_extra::extract::CookieJar)]
pub async fn update_template(id: String, input: TemplateInput) -> Result<BowlTemplate, ServerFnError> {
    let backend = super::backend(&jar)?;
    backend
        .put(&format!("/bowl-templates/update/{id}"), &input)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[post("/api/templates/update")]
pub async fn update_template(id: String, input: TemplateInput) -> Result<BowlTemplate, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/templates/delete", jar: axum_extra::extract::CookieJar)]
pub async fn delete_template(id: String) -> Result<(), ServerFnError> {
    let backend = super::backend(&jar)?;
    backend
        .delete_empty(&format!("/bowl-templates/delete/{id}"))
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/templates/delete")]
pub async fn delete_template(id: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
