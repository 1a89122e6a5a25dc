//! Demonstration fixtures
//!
//! Populates each table only when that table is empty. A fixture loader
//! for demos and local development, not part of the service contract.

use super::repository::RepoResult;
use shared::util::now_millis;
use sqlx::SqlitePool;

const MINUTE_MS: i64 = 60 * 1000;
const HOUR_MS: i64 = 60 * MINUTE_MS;

pub async fn seed_if_empty(pool: &SqlitePool) -> RepoResult<()> {
    seed_menu(pool).await?;
    seed_reservations(pool).await?;
    seed_orders(pool).await?;
    Ok(())
}

async fn is_empty(pool: &SqlitePool, table: &str) -> RepoResult<bool> {
    let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await?;
    Ok(count == 0)
}

async fn seed_menu(pool: &SqlitePool) -> RepoResult<()> {
    if !is_empty(pool, "menu").await? {
        return Ok(());
    }

    let menu: [(&str, &str, &str, f64, i64, bool); 5] = [
        ("m-burrata", "Charred Burrata", "Small Plates", 14.0, 8, true),
        ("m-pasta", "Hand-cut Pappardelle", "Mains", 22.0, 14, true),
        ("m-halibut", "Miso Poached Halibut", "Mains", 28.0, 16, true),
        ("m-salad", "Smoked Citrus Salad", "Greens", 12.0, 6, true),
        ("m-brulee", "Cold Brew Crème Brûlée", "Dessert", 11.0, 10, false),
    ];

    for (id, name, category, price, prep_time, available) in menu {
        sqlx::query(
            "INSERT INTO menu (id, name, category, price, prep_time, available) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(name)
        .bind(category)
        .bind(price)
        .bind(prep_time)
        .bind(available)
        .execute(pool)
        .await?;
    }
    tracing::info!("Seeded {} menu items", menu.len());
    Ok(())
}

async fn seed_reservations(pool: &SqlitePool) -> RepoResult<()> {
    if !is_empty(pool, "reservations").await? {
        return Ok(());
    }

    // Evening slots relative to the current minute
    let base = (now_millis() / MINUTE_MS) * MINUTE_MS;
    let reservations: [(&str, &str, i64, i64, i64, &str, &str); 3] = [
        (
            "r-anna",
            "Anna Price",
            2,
            4,
            base + 18 * HOUR_MS,
            "booked",
            "Anniversary, quiet corner",
        ),
        ("r-omid", "Omid R.", 5, 7, base + 19 * HOUR_MS + 30 * MINUTE_MS, "seated", ""),
        (
            "r-liz",
            "Liz & Kai",
            3,
            2,
            base + 20 * HOUR_MS + 15 * MINUTE_MS,
            "completed",
            "Vegan dessert",
        ),
    ];

    for (id, name, party_size, table_number, time_ms, status, notes) in reservations {
        sqlx::query(
            "INSERT INTO reservations (id, name, party_size, table_number, time_ms, status, notes) VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(name)
        .bind(party_size)
        .bind(table_number)
        .bind(time_ms)
        .bind(status)
        .bind(notes)
        .execute(pool)
        .await?;
    }
    tracing::info!("Seeded {} reservations", reservations.len());
    Ok(())
}

async fn seed_orders(pool: &SqlitePool) -> RepoResult<()> {
    if !is_empty(pool, "orders").await? {
        return Ok(());
    }

    let now = now_millis();
    let orders: [(&str, i64, &str, &str, f64, i64, &[(&str, i64)]); 2] = [
        (
            "o-101",
            7,
            "r-omid",
            "fired",
            8.5,
            now - 25 * MINUTE_MS,
            &[("m-burrata", 2), ("m-pasta", 3)],
        ),
        (
            "o-102",
            2,
            "r-liz",
            "paid",
            8.5,
            now - 80 * MINUTE_MS,
            &[("m-halibut", 2), ("m-brulee", 3)],
        ),
    ];

    for (id, table_number, reservation_id, status, tax_rate, created_at, items) in orders {
        sqlx::query(
            "INSERT INTO orders (id, table_number, reservation_id, status, tax_rate, created_at) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(table_number)
        .bind(reservation_id)
        .bind(status)
        .bind(tax_rate)
        .bind(created_at)
        .execute(pool)
        .await?;

        for &(menu_id, qty) in items {
            sqlx::query("INSERT INTO order_items (order_id, menu_id, qty) VALUES (?, ?, ?)")
                .bind(id)
                .bind(menu_id)
                .bind(qty)
                .execute(pool)
                .await?;
        }
    }
    tracing::info!("Seeded {} orders", orders.len());
    Ok(())
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

    #[tokio::test]
    async fn seeds_empty_database_once() {
        let pool = test_pool().await;
        seed_if_empty(&pool).await.unwrap();

        let menu = crate::db::repository::menu::count(&pool).await.unwrap();
        assert_eq!(menu, 5);

        // A second run must not duplicate anything
        seed_if_empty(&pool).await.unwrap();
        let menu = crate::db::repository::menu::count(&pool).await.unwrap();
        assert_eq!(menu, 5);

        let orders = crate::db::repository::order::find_all(&pool).await.unwrap();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].id, "o-101"); // newest first
        assert_eq!(orders[0].items.len(), 2);
    }

    #[tokio::test]
    async fn does_not_touch_populated_tables() {
        let pool = test_pool().await;
        sqlx::query("INSERT INTO menu (id, name, category, price) VALUES ('m-solo', 'Soup', 'Mains', 9.0)")
            .execute(&pool)
            .await
            .unwrap();

        seed_if_empty(&pool).await.unwrap();

        let menu = crate::db::repository::menu::count(&pool).await.unwrap();
        assert_eq!(menu, 1);
        // other tables were still empty, so they do get fixtures
        let reservations = crate::db::repository::reservation::find_all(&pool).await.unwrap();
        assert_eq!(reservations.len(), 3);
    }
}
