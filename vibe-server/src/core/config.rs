/// Server configuration
///
/// All values can be overridden through environment variables:
///
/// | Env var | Default | Meaning |
/// |---------|---------|---------|
/// | PORT | 4000 | HTTP listen port |
/// | DATA_DIR | data | Directory holding the SQLite file |
/// | ASSETS_DIR | assets | Static assets served at the root |
/// | LIVE_URL | (empty) | Externally reachable base URL |
/// | API_BASE | /api, or LIVE_URL + /api | API base path handed to the browser |
/// | LOG_LEVEL | info | tracing level filter |
/// | LOG_DIR | (none) | Daily-rolling log file directory |
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API service port
    pub port: u16,
    /// Directory holding the SQLite database file
    pub data_dir: String,
    /// Directory served as static assets
    pub assets_dir: String,
    /// Externally reachable base URL, empty when not deployed behind one
    pub live_url: String,
    /// API base path delivered to the browser client via /config.js
    pub api_base: String,
    /// tracing level filter
    pub log_level: String,
    /// Optional log file directory
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults when unset
    pub fn from_env() -> Self {
        let live_url = std::env::var("LIVE_URL").unwrap_or_default();
        let api_base = std::env::var("API_BASE").unwrap_or_else(|_| {
            if live_url.is_empty() {
                "/api".into()
            } else {
                format!("{}/api", live_url.trim_end_matches('/'))
            }
        });

        Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(4000),
            data_dir: std::env::var("DATA_DIR").unwrap_or_else(|_| "data".into()),
            assets_dir: std::env::var("ASSETS_DIR").unwrap_or_else(|_| "assets".into()),
            live_url,
            api_base,
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }

    /// Override data directory and port
    ///
    /// Used by tests
    pub fn with_overrides(data_dir: impl Into<String>, port: u16) -> Self {
        let mut config = Self::from_env();
        config.data_dir = data_dir.into();
        config.port = port;
        config
    }

    /// Path of the SQLite database file
    pub fn db_path(&self) -> std::path::PathBuf {
        std::path::Path::new(&self.data_dir).join("vibe.db")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_overrides_sets_data_dir_and_port() {
        let config = Config::with_overrides("/tmp/vibe-test", 0);
        assert_eq!(config.data_dir, "/tmp/vibe-test");
        assert_eq!(config.port, 0);
        assert!(config.db_path().ends_with("vibe.db"));
    }
}
