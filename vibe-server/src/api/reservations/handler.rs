//! Reservation API Handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::core::ServerState;
use crate::db::repository::reservation;
use crate::utils::{AppError, AppResult};
use shared::models::{Reservation, ReservationCreate, ReservationUpdate};
use shared::util::uid;

/// GET /api/reservations - List reservations, earliest first
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Reservation>>> {
    let reservations = reservation::find_all(&state.pool).await?;
    Ok(Json(reservations))
}

/// GET /api/reservations/{id} - Fetch one reservation
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Reservation>> {
    let reservation = reservation::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Reservation {id} not found")))?;
    Ok(Json(reservation))
}

/// POST /api/reservations - Create a reservation
///
/// `name`, `partySize`, `table`, `time` and `status` must be present; the
/// status value itself is not validated beyond presence.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ReservationCreate>,
) -> AppResult<(StatusCode, Json<Reservation>)> {
    let (Some(name), Some(party_size), Some(table_number), Some(time_ms), Some(status)) = (
        payload.name,
        payload.party_size,
        payload.table_number,
        payload.time_ms,
        payload.status,
    ) else {
        return Err(AppError::bad_request("Missing fields"));
    };

    let reservation = Reservation {
        id: payload.id.unwrap_or_else(|| uid("r")),
        name,
        party_size,
        table_number,
        time_ms,
        status,
        notes: payload.notes.unwrap_or_default(),
    };

    tracing::info!(
        id = %reservation.id,
        party_size = reservation.party_size,
        table = reservation.table_number,
        "Creating reservation"
    );

    let created = reservation::create(&state.pool, reservation).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/reservations/{id} - Update a reservation
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ReservationUpdate>,
) -> AppResult<Json<Reservation>> {
    tracing::info!(id = %id, "Updating reservation");

    let reservation = reservation::update(&state.pool, &id, payload).await?;
    Ok(Json(reservation))
}

/// DELETE /api/reservations/{id} - Delete a reservation
///
/// Orders referencing it keep existing with the link cleared.
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    tracing::info!(id = %id, "Deleting reservation");

    reservation::delete(&state.pool, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
