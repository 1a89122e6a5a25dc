//! Data models
//!
//! Shared between the server and the browser client (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! Entity ids are short prefixed strings (`m-…`, `r-…`, `o-…`) stored as
//! TEXT primary keys; all timestamps are milliseconds since the epoch.

pub mod menu_item;
pub mod order;
pub mod reservation;

// Re-exports
pub use menu_item::*;
pub use order::*;
pub use reservation::*;
