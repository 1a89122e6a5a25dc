//! Order Repository
//!
//! Line items are owned exclusively by their order: created with it,
//! replaced wholesale on update, removed with it. Every multi-statement
//! write runs in a single transaction.

use super::{RepoError, RepoResult};
use shared::models::{Order, OrderLineItem, OrderUpdate};
use sqlx::SqlitePool;

const COLUMNS: &str =
    "id, table_number, COALESCE(reservation_id, '') AS reservation_id, status, tax_rate, created_at";

/// NULL out an empty reservation reference before it hits storage
fn reservation_ref(id: &str) -> Option<&str> {
    if id.is_empty() { None } else { Some(id) }
}

async fn find_items(pool: &SqlitePool, order_id: &str) -> RepoResult<Vec<OrderLineItem>> {
    let items = sqlx::query_as::<_, OrderLineItem>(
        "SELECT menu_id, qty FROM order_items WHERE order_id = ? ORDER BY id",
    )
    .bind(order_id)
    .fetch_all(pool)
    .await?;
    Ok(items)
}

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Order>> {
    let mut orders = sqlx::query_as::<_, Order>(&format!(
        "SELECT {COLUMNS} FROM orders ORDER BY created_at DESC"
    ))
    .fetch_all(pool)
    .await?;

    for order in &mut orders {
        order.items = find_items(pool, &order.id).await?;
    }
    Ok(orders)
}

pub async fn find_by_id(pool: &SqlitePool, id: &str) -> RepoResult<Option<Order>> {
    let order = sqlx::query_as::<_, Order>(&format!("SELECT {COLUMNS} FROM orders WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    let Some(mut order) = order else {
        return Ok(None);
    };
    order.items = find_items(pool, &order.id).await?;
    Ok(Some(order))
}

/// Insert an order and its line items atomically
pub async fn create(pool: &SqlitePool, order: Order) -> RepoResult<Order> {
    let mut tx = pool.begin().await?;
    sqlx::query(
        "INSERT INTO orders (id, table_number, reservation_id, status, tax_rate, created_at) VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&order.id)
    .bind(order.table_number)
    .bind(reservation_ref(&order.reservation_id))
    .bind(&order.status)
    .bind(order.tax_rate)
    .bind(order.created_at)
    .execute(&mut *tx)
    .await?;

    for item in &order.items {
        sqlx::query("INSERT INTO order_items (order_id, menu_id, qty) VALUES (?, ?, ?)")
            .bind(&order.id)
            .bind(&item.menu_id)
            .bind(item.qty)
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;

    find_by_id(pool, &order.id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create order".into()))
}

/// Update order fields and replace its line items wholesale.
///
/// The stored item set is deleted and the payload's set inserted — never
/// diffed. `created_at` is immutable after creation.
pub async fn update(pool: &SqlitePool, id: &str, data: OrderUpdate) -> RepoResult<Order> {
    let existing = find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Order {id} not found")))?;

    let table_number = data.table_number.unwrap_or(existing.table_number);
    let reservation_id = data.reservation_id.unwrap_or(existing.reservation_id);
    let status = data.status.unwrap_or(existing.status);
    let tax_rate = data.tax_rate.unwrap_or(existing.tax_rate);

    let mut tx = pool.begin().await?;
    sqlx::query(
        "UPDATE orders SET table_number = ?, reservation_id = ?, status = ?, tax_rate = ? WHERE id = ?",
    )
    .bind(table_number)
    .bind(reservation_ref(&reservation_id))
    .bind(&status)
    .bind(tax_rate)
    .bind(id)
    .execute(&mut *tx)
    .await?;

    sqlx::query("DELETE FROM order_items WHERE order_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    for item in &data.items {
        sqlx::query("INSERT INTO order_items (order_id, menu_id, qty) VALUES (?, ?, ?)")
            .bind(id)
            .bind(&item.menu_id)
            .bind(item.qty)
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Order {id} not found")))
}

/// Delete an order together with its line items
pub async fn delete(pool: &SqlitePool, id: &str) -> RepoResult<()> {
    let mut tx = pool.begin().await?;
    sqlx::query("DELETE FROM order_items WHERE order_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM orders WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;
    Ok(())
}
