//! Reservation Model

use serde::{Deserialize, Serialize};

/// Reservation entity
///
/// `status` is an open string set (booked | seated | completed | cancelled);
/// only presence is validated, never membership.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: String,
    pub name: String,
    pub party_size: i64,
    #[serde(rename = "table")]
    pub table_number: i64,
    /// Reservation time, milliseconds since epoch
    #[serde(rename = "time")]
    pub time_ms: i64,
    pub status: String,
    /// Empty string when no notes were given
    pub notes: String,
}

/// Create reservation payload
///
/// Required fields (`name`, `partySize`, `table`, `time`, `status`) are
/// optional on the wire; the handler enforces presence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationCreate {
    pub id: Option<String>,
    pub name: Option<String>,
    pub party_size: Option<i64>,
    #[serde(rename = "table")]
    pub table_number: Option<i64>,
    #[serde(rename = "time")]
    pub time_ms: Option<i64>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

/// Update reservation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationUpdate {
    pub name: Option<String>,
    pub party_size: Option<i64>,
    #[serde(rename = "table")]
    pub table_number: Option<i64>,
    #[serde(rename = "time")]
    pub time_ms: Option<i64>,
    pub status: Option<String>,
    pub notes: Option<String>,
}
