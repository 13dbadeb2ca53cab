//! Admin user management.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::{GoalCode, Role, User, UserStatus};
use crate::rest::Page;

/// Create/update payload for a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInput {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub goal: Option<GoalCode>,
    pub status: UserStatus,
}

#[cfg(feature = "server")]
#[get("/api/users/list", jar: axum_extra::extract::CookieJar)]
pub async fn list_users(search: String, page: u32, size: u32) -> Result<Page<User>, ServerFnError> {
    let backend = super::backend(&jar)?;
    backend
        .get_page(&format!(
            "/users/getall{}",
            crate::rest::list_query(&search, page, size)
        ))
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[get("/api/users/list")]
pub async fn list_users(search: String, page: u32, size: u32) -> Result<Page<User>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[get("/api/users/:id", jar: axum_extra::extract::CookieJar)]
pub async fn get_user(id: String) -> Result<User, ServerFnError> {
    let backend = super::backend(&jar)?;
    backend
        .get(&format!("/users/getbyid/{id}"))
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[get("/api/users/:id")]
pub async fn get_user(id: String) -> Result<User, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/users/update", jar: axum_extra::extract::CookieJar)]
pub async fn update_user(id: String, input: UserInput) -> Result<User, ServerFnError> {
    let backend = super::backend(&jar)?;
    backend
        .put(&format!("/users/update/{id}"), &input)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[post("/api/users/update")]
pub async fn update_user(id: String, input: UserInput) -> Result<User, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/users/delete", jar: axum_extra::extract::CookieJar)]
pub async fn delete_user(id: String) -> Result<(), ServerFnError> {
    let backend = super::backend(&jar)?;
    backend
        .delete_empty(&format!("/users/delete/{id}"))
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/users/delete")]
pub async fn delete_user(id: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
