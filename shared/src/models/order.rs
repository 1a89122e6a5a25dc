//! Order Model

use serde::{Deserialize, Serialize};

/// Line item — a (menu reference, quantity) pair owned by exactly one order.
///
/// `menu_id` is a weak reference: the menu item it points at may have been
/// deleted since, and readers price such a line at zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct OrderLineItem {
    pub menu_id: String,
    pub qty: i64,
}

/// Order entity
///
/// Totals are never part of the stored entity; they are derived from
/// current menu prices at read time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    #[serde(rename = "table")]
    pub table_number: i64,
    /// Weak reference to a reservation; empty string when unlinked
    pub reservation_id: String,
    /// Open string set (fired | paid | …), validated only by presence
    pub status: String,
    /// Tax rate as a percentage (8.5 means 8.5%)
    pub tax_rate: f64,
    /// Set server-side at creation, immutable thereafter
    pub created_at: i64,

    // -- Relations (populated by application code, skipped by FromRow) --
    #[cfg_attr(feature = "db", sqlx(skip))]
    #[serde(default)]
    pub items: Vec<OrderLineItem>,
}

/// Create order payload
///
/// Required fields (`table`, `status`, non-empty `items`) are optional on
/// the wire; the handler enforces presence. `createdAt` is never accepted
/// from the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    pub id: Option<String>,
    #[serde(rename = "table")]
    pub table_number: Option<i64>,
    pub reservation_id: Option<String>,
    pub status: Option<String>,
    pub tax_rate: Option<f64>,
    #[serde(default)]
    pub items: Vec<OrderLineItem>,
}

/// Update order payload
///
/// Scalar fields keep their stored values when absent. `items` always
/// replaces the stored set wholesale (delete all, insert the new list) —
/// an absent list clears the order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdate {
    #[serde(rename = "table")]
    pub table_number: Option<i64>,
    /// `Some("")` clears the reservation link
    pub reservation_id: Option<String>,
    pub status: Option<String>,
    pub tax_rate: Option<f64>,
    #[serde(default)]
    pub items: Vec<OrderLineItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_serializes_camel_case() {
        let order = Order {
            id: "o-101".into(),
            table_number: 7,
            reservation_id: "r-omid".into(),
            status: "fired".into(),
            tax_rate: 8.5,
            created_at: 1_700_000_000_000,
            items: vec![OrderLineItem {
                menu_id: "m-burrata".into(),
                qty: 2,
            }],
        };

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["table"], 7);
        assert_eq!(json["reservationId"], "r-omid");
        assert_eq!(json["taxRate"], 8.5);
        assert_eq!(json["createdAt"], 1_700_000_000_000_i64);
        assert_eq!(json["items"][0]["menuId"], "m-burrata");
        assert_eq!(json["items"][0]["qty"], 2);
    }

    #[test]
    fn order_create_tolerates_missing_fields() {
        let payload: OrderCreate = serde_json::from_str(r#"{"status":"fired"}"#).unwrap();
        assert_eq!(payload.status.as_deref(), Some("fired"));
        assert!(payload.table_number.is_none());
        assert!(payload.items.is_empty());
    }

    #[test]
    fn order_update_items_default_to_empty() {
        let payload: OrderUpdate = serde_json::from_str(r#"{"table":3}"#).unwrap();
        assert_eq!(payload.table_number, Some(3));
        assert!(payload.items.is_empty());
    }
}
