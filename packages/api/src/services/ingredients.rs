//! Ingredient catalog: read by the wizard, mutated by admin CRUD.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::{Ingredient, NutritionFacts};
use crate::rest::Page;

/// Create/update payload for an ingredient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientInput {
    pub name: String,
    pub unit: String,
    pub price: f64,
    pub category_id: String,
    pub image_url: Option<String>,
    pub image_public_id: Option<String>,
    pub nutrition: NutritionFacts,
    pub available: bool,
}

#[cfg(feature = "server")]
#[get("/api/ingredients/list", jar: axum_extra::extract::CookieJar)]
pub async fn list_ingredients(
    search: String,
    page: u32,
    size: u32,
) -> Result<Page<Ingredient>, ServerFnError> {
    let backend = super::backend(&jar)?;
    backend
        .get_page(&format!(
            "/ingredients/getall{}",
            crate::rest::list_query(&search, page, size)
        ))
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[get("/api/ingredients/list")]
pub async fn list_ingredients(
    search: String,
    page: u32,
    size: u32,
) -> Result<Page<Ingredient>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// All ingredients in one category, for a wizard selection step.
#[cfg(feature = "server")]
#[get("/api/ingredients/by-category/:category_id", jar: axum_extra::extract::CookieJar)]
pub async fn ingredients_by_category(category_id: String) -> Result<Vec<Ingredient>, ServerFnError> {
    let backend = super::backend(&jar)?;
    let page: Page<Ingredient> = backend
        .get_page(&format!("/ingredients/getall?categoryId={category_id}"))
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    Ok(page.items)
}

#[cfg(not(feature = "server"))]
#[get("/api/ingredients/by-category/:category_id")]
pub async fn ingredients_by_category(category_id: String) -> Result<Vec<Ingredient>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[get("/api/ingredients/:id", jar: axum_extra::extract::CookieJar)]
pub async fn get_ingredient(id: String) -> Result<Ingredient, ServerFnError> {
    let backend = super::backend(&jar)?;
    backend
        .get(&format!("/ingredients/getbyid/{id}"))
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[get("/api/ingredients/:id")]
pub async fn get_ingredient(id: String) -> Result<Ingredient, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/ingredients/create", jar: axum_extra::extract::CookieJar)]
pub async fn create_ingredient(input: IngredientInput) -> Result<Ingredient, ServerFnError> {
    let backend = super::backend(&jar)?;
    backend
        .post("/ingredients/create", &input)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[post("/api/ingredients/create")]
pub async fn create_ingredient(input: IngredientInput) -> Result<Ingredient, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/ingredients/update", jar: axum_extra::extract::CookieJar)]
pub async fn update_ingredient(
    id: String,
    input: IngredientInput,
) -> Result<Ingredient, ServerFnError> {
    let backend = super::backend(&jar)?;
    backend
        .put(&format!("/ingredients/update/{id}"), &input)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[post("/api/ingredients/update")]
pub async fn update_ingredient(
    id: String,
    input: IngredientInput,
) -> Result<Ingredient, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/ingredients/delete", jar: axum_extra::extract::CookieJar)]
pub async fn delete_ingredient(id: String) -> Result<(), ServerFnError> {
    let backend = super::backend(&jar)?;
    backend
        .delete_empty(&format!("/ingredients/delete/{id}"))
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/ingredients/delete")]
pub async fn delete_ingredient(id: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
