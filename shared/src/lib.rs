//! Shared types for the Vibe Bistro service
//!
//! Wire/DB model types and small utilities used by the server crate.
//! DB row types derive `sqlx::FromRow` behind the `db` feature so the
//! crate stays database-free for consumers that only need the wire shapes.

pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
