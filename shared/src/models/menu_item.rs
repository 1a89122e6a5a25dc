//! Menu Item Model

use serde::{Deserialize, Serialize};

/// Menu item entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    /// Preparation time in minutes
    pub prep_time: i64,
    /// False when the item is 86'd
    pub available: bool,
}

/// Create menu item payload
///
/// Every field is optional on the wire; the handler enforces presence of
/// `name`, `category` and `price` before touching storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemCreate {
    pub id: Option<String>,
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub prep_time: Option<i64>,
    pub available: Option<bool>,
}

/// Update menu item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub prep_time: Option<i64>,
    pub available: Option<bool>,
}
