//! Order DTOs: what the wizard submits and what order screens read back.
//! Status transitions happen server-side only.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

/// One ingredient line inside a bowl.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BowlItem {
    pub ingredient_id: String,
    #[serde(default)]
    pub ingredient_name: Option<String>,
    pub quantity: u32,
    #[serde(default)]
    pub unit_price: f64,
}

/// A bowl on an existing order, as read back from the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderBowl {
    pub id: String,
    pub template_id: String,
    #[serde(default)]
    pub template_name: Option<String>,
    pub items: Vec<BowlItem>,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub user_name: Option<String>,
    pub store_id: String,
    pub status: OrderStatus,
    pub subtotal: f64,
    #[serde(default)]
    pub promotion_discount: f64,
    pub total: f64,
    #[serde(default)]
    pub bowls: Vec<OrderBowl>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A bowl as submitted from the wizard: template plus selected line items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBowl {
    pub template_id: String,
    pub items: Vec<BowlItem>,
}

/// Order-creation payload: the whole wizard output submitted as one batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub store_id: String,
    #[serde(default)]
    pub promotion_code: Option<String>,
    pub bowls: Vec<NewBowl>,
}
