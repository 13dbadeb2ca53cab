//! Configuration-like reference data: categories, promotions, stores, and
//! bowl templates. Admin CRUD writes these; the ordering flow reads them.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Promotion {
    pub id: String,
    pub code: String,
    pub description: String,
    /// Percent discount, 0..=100.
    pub discount_percent: f64,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub starts_at: Option<String>,
    #[serde(default)]
    pub ends_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreLocation {
    pub id: String,
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub open_hours: Option<String>,
}

/// Admin-defined recipe skeleton the wizard walks through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BowlTemplate {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub base_price: f64,
    /// Ordered selection steps (starch, protein, vegetable, sauce, ...).
    #[serde(default)]
    pub steps: Vec<TemplateStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateStep {
    pub id: String,
    /// Display label, e.g. "Pick your protein".
    pub label: String,
    /// Category the step selects from.
    pub category_id: String,
    pub position: u32,
    #[serde(default = "one")]
    pub min_selections: u32,
    #[serde(default = "one")]
    pub max_selections: u32,
}

fn one() -> u32 {
    1
}
