//! Reservation Repository

use super::{RepoError, RepoResult};
use shared::models::{Reservation, ReservationUpdate};
use sqlx::SqlitePool;

const COLUMNS: &str =
    "id, name, party_size, table_number, time_ms, status, COALESCE(notes, '') AS notes";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Reservation>> {
    let reservations = sqlx::query_as::<_, Reservation>(&format!(
        "SELECT {COLUMNS} FROM reservations ORDER BY time_ms ASC"
    ))
    .fetch_all(pool)
    .await?;
    Ok(reservations)
}

pub async fn find_by_id(pool: &SqlitePool, id: &str) -> RepoResult<Option<Reservation>> {
    let reservation = sqlx::query_as::<_, Reservation>(&format!(
        "SELECT {COLUMNS} FROM reservations WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(reservation)
}

pub async fn create(pool: &SqlitePool, reservation: Reservation) -> RepoResult<Reservation> {
    sqlx::query(
        "INSERT INTO reservations (id, name, party_size, table_number, time_ms, status, notes) VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&reservation.id)
    .bind(&reservation.name)
    .bind(reservation.party_size)
    .bind(reservation.table_number)
    .bind(reservation.time_ms)
    .bind(&reservation.status)
    .bind(&reservation.notes)
    .execute(pool)
    .await?;

    find_by_id(pool, &reservation.id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create reservation".into()))
}

pub async fn update(
    pool: &SqlitePool,
    id: &str,
    data: ReservationUpdate,
) -> RepoResult<Reservation> {
    let rows = sqlx::query(
        "UPDATE reservations SET name = COALESCE(?1, name), party_size = COALESCE(?2, party_size), table_number = COALESCE(?3, table_number), time_ms = COALESCE(?4, time_ms), status = COALESCE(?5, status), notes = COALESCE(?6, notes) WHERE id = ?7",
    )
    .bind(data.name)
    .bind(data.party_size)
    .bind(data.table_number)
    .bind(data.time_ms)
    .bind(data.status)
    .bind(data.notes)
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Reservation {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Reservation {id} not found")))
}

/// Delete a reservation, clearing the link on any orders referencing it.
///
/// The orders themselves persist; their `reservation_id` goes NULL first,
/// then the reservation row is removed, atomically.
pub async fn delete(pool: &SqlitePool, id: &str) -> RepoResult<()> {
    let mut tx = pool.begin().await?;
    sqlx::query("UPDATE orders SET reservation_id = NULL WHERE reservation_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM reservations WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;
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

    fn anna(time_ms: i64) -> Reservation {
        Reservation {
            id: "r-anna".into(),
            name: "Anna Price".into(),
            party_size: 2,
            table_number: 4,
            time_ms,
            status: "booked".into(),
            notes: "Anniversary, quiet corner".into(),
        }
    }

    #[tokio::test]
    async fn create_and_fetch() {
        let pool = test_pool().await;
        let created = create(&pool, anna(1000)).await.unwrap();
        assert_eq!(created.id, "r-anna");
        assert_eq!(created.party_size, 2);
        assert_eq!(created.notes, "Anniversary, quiet corner");
    }

    #[tokio::test]
    async fn find_all_sorts_by_time_ascending() {
        let pool = test_pool().await;
        for (id, time_ms) in [("r-late", 3000_i64), ("r-early", 1000), ("r-mid", 2000)] {
            let mut r = anna(time_ms);
            r.id = id.into();
            create(&pool, r).await.unwrap();
        }

        let reservations = find_all(&pool).await.unwrap();
        let ids: Vec<&str> = reservations.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["r-early", "r-mid", "r-late"]);
    }

    #[tokio::test]
    async fn null_notes_surface_as_empty_string() {
        let pool = test_pool().await;
        sqlx::query("INSERT INTO reservations (id, name, party_size, table_number, time_ms, status, notes) VALUES ('r-1', 'Omid R.', 5, 7, 0, 'seated', NULL)")
            .execute(&pool)
            .await
            .unwrap();

        let r = find_by_id(&pool, "r-1").await.unwrap().unwrap();
        assert_eq!(r.notes, "");
    }

    #[tokio::test]
    async fn update_missing_id_is_not_found() {
        let pool = test_pool().await;
        let err = update(
            &pool,
            "r-nope",
            ReservationUpdate {
                name: None,
                party_size: None,
                table_number: None,
                time_ms: None,
                status: Some("seated".into()),
                notes: None,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_clears_order_references_but_keeps_orders() {
        let pool = test_pool().await;
        create(&pool, anna(1000)).await.unwrap();

        sqlx::query("INSERT INTO orders (id, table_number, reservation_id, status, tax_rate, created_at) VALUES ('o-1', 4, 'r-anna', 'fired', 8.5, 0)")
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query("INSERT INTO orders (id, table_number, reservation_id, status, tax_rate, created_at) VALUES ('o-2', 9, 'r-other', 'fired', 8.5, 0)")
            .execute(&pool)
            .await
            .unwrap();

        delete(&pool, "r-anna").await.unwrap();

        assert!(find_by_id(&pool, "r-anna").await.unwrap().is_none());
        let cleared: Option<String> =
            sqlx::query_scalar("SELECT reservation_id FROM orders WHERE id = 'o-1'")
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(cleared, None);
        let untouched: Option<String> =
            sqlx::query_scalar("SELECT reservation_id FROM orders WHERE id = 'o-2'")
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(untouched.as_deref(), Some("r-other"));
    }
}
