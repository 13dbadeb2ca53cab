//! Ingredient DTO. Read-mostly: the ordering flow reads it, admin CRUD
//! mutates it through the backend.

use serde::{Deserialize, Serialize};

use super::nutrition::NutritionFacts;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    /// Serving unit shown next to quantities ("g", "scoop", "piece").
    pub unit: String,
    pub price: f64,
    pub category_id: String,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Cloudinary public id of `image_url`, needed for deletion.
    #[serde(default)]
    pub image_public_id: Option<String>,
    #[serde(default)]
    pub nutrition: NutritionFacts,
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}
