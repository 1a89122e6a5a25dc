use sqlx::SqlitePool;

use crate::core::Config;
use crate::db::{DbService, seed};

/// Server state - the configuration plus the storage handle.
///
/// Constructed once at startup and cloned into every handler; the pool is
/// reference-counted internally so clones are cheap. Handlers receive the
/// pool through this state rather than a module-level singleton.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// SQLite connection pool
    pub pool: SqlitePool,
}

impl ServerState {
    /// Create server state from an already-open pool
    ///
    /// Tests inject an in-memory pool here.
    pub fn new(config: Config, pool: SqlitePool) -> Self {
        Self { config, pool }
    }

    /// Initialize server state
    ///
    /// 1. Ensure the data directory exists
    /// 2. Open the database (schema applied idempotently)
    /// 3. Load seed fixtures into any empty tables
    pub async fn initialize(config: &Config) -> anyhow::Result<Self> {
        std::fs::create_dir_all(&config.data_dir)?;

        let db_path = config.db_path();
        let db = DbService::new(&db_path.to_string_lossy()).await?;

        seed::seed_if_empty(&db.pool).await?;

        Ok(Self::new(config.clone(), db.pool))
    }
}
