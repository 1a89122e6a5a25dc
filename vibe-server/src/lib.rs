//! Vibe Bistro Server - restaurant operations service
//!
//! # Architecture overview
//!
//! A small REST/JSON service over a single SQLite file: menu items, table
//! reservations and orders with line items, plus derived order totals.
//!
//! # Module structure
//!
//! ```text
//! vibe-server/src/
//! ├── core/      # Config, state, HTTP server
//! ├── api/       # HTTP routes and handlers
//! ├── db/        # Connection pool, schema, repositories, seed fixtures
//! ├── pricing/   # Order totals computation
//! └── utils/     # Errors, logging
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod pricing;
pub mod utils;

// Re-export public types
pub use crate::core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::init_logger;

pub fn print_banner() {
    println!(
        r#"
 __     ___ _          ____  _     _
 \ \   / (_) |__   ___| __ )(_)___| |_ _ __ ___
  \ \ / /| | '_ \ / _ \  _ \| / __| __| '__/ _ \
   \ V / | | |_) |  __/ |_) | \__ \ |_| | | (_) |
    \_/  |_|_.__/ \___|____/|_|___/\__|_|  \___/
    "#
    );
}
