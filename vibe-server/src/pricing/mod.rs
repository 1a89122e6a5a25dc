//! Order totals computation
//!
//! Totals are always derived, never stored: the subtotal prices each line
//! item at the *current* menu price, so a dangling menu reference counts
//! as zero and historical orders drift with later price changes.
//!
//! Arithmetic runs on `Decimal` internally; `f64` crosses the boundary
//! rounded to 2 decimal places, half away from zero.

use rust_decimal::prelude::*;
use serde::Serialize;
use shared::models::OrderLineItem;
use std::collections::HashMap;

/// Monetary rounding: 2 decimal places
const DECIMAL_PLACES: u32 = 2;

/// Derived order totals
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrderTotals {
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
}

fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite value in monetary calculation, using zero");
        Decimal::ZERO
    })
}

fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(0.0)
}

/// Compute subtotal/tax/total for a set of line items against current menu
/// prices. A missing menu reference prices at zero; `tax_rate` is a
/// percentage (8.5 means 8.5%).
pub fn order_totals(
    items: &[OrderLineItem],
    prices: &HashMap<String, f64>,
    tax_rate: f64,
) -> OrderTotals {
    let subtotal: Decimal = items
        .iter()
        .map(|item| {
            let price = prices.get(&item.menu_id).copied().unwrap_or(0.0);
            to_decimal(price) * Decimal::from(item.qty)
        })
        .sum();

    let tax = (subtotal * to_decimal(tax_rate) / Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    let total = subtotal + tax;

    OrderTotals {
        subtotal: to_f64(subtotal),
        tax: to_f64(tax),
        total: to_f64(total),
    }
}
