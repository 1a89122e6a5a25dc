//! Menu Repository

use super::{RepoError, RepoResult};
use shared::models::{MenuItem, MenuItemUpdate};
use sqlx::SqlitePool;
use std::collections::HashMap;

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<MenuItem>> {
    let items = sqlx::query_as::<_, MenuItem>(
        "SELECT id, name, category, price, prep_time, available FROM menu ORDER BY category, name",
    )
    .fetch_all(pool)
    .await?;
    Ok(items)
}

pub async fn find_by_id(pool: &SqlitePool, id: &str) -> RepoResult<Option<MenuItem>> {
    let item = sqlx::query_as::<_, MenuItem>(
        "SELECT id, name, category, price, prep_time, available FROM menu WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(item)
}

pub async fn create(pool: &SqlitePool, item: MenuItem) -> RepoResult<MenuItem> {
    sqlx::query(
        "INSERT INTO menu (id, name, category, price, prep_time, available) VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&item.id)
    .bind(&item.name)
    .bind(&item.category)
    .bind(item.price)
    .bind(item.prep_time)
    .bind(item.available)
    .execute(pool)
    .await?;

    find_by_id(pool, &item.id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create menu item".into()))
}

pub async fn update(pool: &SqlitePool, id: &str, data: MenuItemUpdate) -> RepoResult<MenuItem> {
    let rows = sqlx::query(
        "UPDATE menu SET name = COALESCE(?1, name), category = COALESCE(?2, category), price = COALESCE(?3, price), prep_time = COALESCE(?4, prep_time), available = COALESCE(?5, available) WHERE id = ?6",
    )
    .bind(data.name)
    .bind(data.category)
    .bind(data.price)
    .bind(data.prep_time)
    .bind(data.available)
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Menu item {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Menu item {id} not found")))
}

/// Delete a menu item and every order line item referencing it.
///
/// The line items go first so a crash cannot leave them pointing at a
/// missing row; both statements commit atomically.
pub async fn delete(pool: &SqlitePool, id: &str) -> RepoResult<()> {
    let mut tx = pool.begin().await?;
    sqlx::query("DELETE FROM order_items WHERE menu_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM menu WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;
    Ok(())
}

pub async fn count(pool: &SqlitePool) -> RepoResult<i64> {
    let n: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM menu")
        .fetch_one(pool)
        .await?;
    Ok(n)
}

/// Current price per menu id, for totals computation.
pub async fn price_map(pool: &SqlitePool) -> RepoResult<HashMap<String, f64>> {
    let rows: Vec<(String, f64)> = sqlx::query_as("SELECT id, price FROM menu")
        .fetch_all(pool)
        .await?;
    Ok(rows.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        crate::db::create_tables(&pool).await.unwrap();
        pool
    }

    fn burrata() -> MenuItem {
        MenuItem {
            id: "m-burrata".into(),
            name: "Charred Burrata".into(),
            category: "Small Plates".into(),
            price: 14.0,
            prep_time: 8,
            available: true,
        }
    }

    #[tokio::test]
    async fn create_and_fetch() {
        let pool = test_pool().await;
        let created = create(&pool, burrata()).await.unwrap();
        assert_eq!(created.id, "m-burrata");
        assert_eq!(created.price, 14.0);
        assert!(created.available);

        let fetched = find_by_id(&pool, "m-burrata").await.unwrap().unwrap();
        assert_eq!(fetched.name, "Charred Burrata");
    }

    #[tokio::test]
    async fn find_all_sorts_by_category_then_name() {
        let pool = test_pool().await;
        for (id, name, category) in [
            ("m-1", "Pappardelle", "Mains"),
            ("m-2", "Halibut", "Mains"),
            ("m-3", "Burrata", "Small Plates"),
        ] {
            create(
                &pool,
                MenuItem {
                    id: id.into(),
                    name: name.into(),
                    category: category.into(),
                    price: 10.0,
                    prep_time: 10,
                    available: true,
                },
            )
            .await
            .unwrap();
        }

        let items = find_all(&pool).await.unwrap();
        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Halibut", "Pappardelle", "Burrata"]);
    }

    #[tokio::test]
    async fn update_keeps_absent_fields() {
        let pool = test_pool().await;
        create(&pool, burrata()).await.unwrap();

        let updated = update(
            &pool,
            "m-burrata",
            MenuItemUpdate {
                name: None,
                category: None,
                price: Some(16.0),
                prep_time: None,
                available: Some(false),
            },
        )
        .await
        .unwrap();

        assert_eq!(updated.price, 16.0);
        assert!(!updated.available);
        // untouched fields survive
        assert_eq!(updated.name, "Charred Burrata");
        assert_eq!(updated.prep_time, 8);
    }

    #[tokio::test]
    async fn update_missing_id_is_not_found() {
        let pool = test_pool().await;
        let err = update(
            &pool,
            "m-nope",
            MenuItemUpdate {
                name: Some("x".into()),
                category: None,
                price: None,
                prep_time: None,
                available: None,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_removes_referencing_line_items() {
        let pool = test_pool().await;
        create(&pool, burrata()).await.unwrap();

        // Two orders reference the item, one does not
        for (order_id, menu_id) in [
            ("o-1", "m-burrata"),
            ("o-2", "m-burrata"),
            ("o-3", "m-other"),
        ] {
            sqlx::query("INSERT INTO orders (id, table_number, status, tax_rate, created_at) VALUES (?, 1, 'fired', 0, 0)")
                .bind(order_id)
                .execute(&pool)
                .await
                .unwrap();
            sqlx::query("INSERT INTO order_items (order_id, menu_id, qty) VALUES (?, ?, 1)")
                .bind(order_id)
                .bind(menu_id)
                .execute(&pool)
                .await
                .unwrap();
        }

        delete(&pool, "m-burrata").await.unwrap();

        assert!(find_by_id(&pool, "m-burrata").await.unwrap().is_none());
        let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM order_items")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(remaining, 1);
        // the unrelated orders themselves persist
        let orders: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(orders, 3);
    }

    #[tokio::test]
    async fn price_map_reflects_current_prices() {
        let pool = test_pool().await;
        create(&pool, burrata()).await.unwrap();
        let prices = price_map(&pool).await.unwrap();
        assert_eq!(prices.get("m-burrata"), Some(&14.0));
        assert_eq!(prices.get("m-gone"), None);
    }
}
