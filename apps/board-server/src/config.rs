//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use board_infra::JwtConfig;
use board_infra::store::SqliteConfig;

/// Which storage backend the composition root should build.
#[derive(Debug, Clone)]
pub enum StorageChoice {
    /// Flat-file JSON collections under a data directory.
    JsonFile { data_dir: PathBuf },
    /// SQLite table store.
    Sqlite(SqliteConfig),
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub storage: StorageChoice,
    pub jwt: JwtConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// `STORAGE_BACKEND` selects the strategy: `sqlite` (default) or
    /// `json`. `DATA_DIR` and `DATABASE_URL` locate the respective stores.
    pub fn from_env() -> Self {
        let storage = match env::var("STORAGE_BACKEND").as_deref() {
            Ok("json") => StorageChoice::JsonFile {
                data_dir: env::var("DATA_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from("data")),
            },
            _ => StorageChoice::Sqlite(SqliteConfig {
                url: env::var("DATABASE_URL")
                    .unwrap_or_else(|_| "sqlite://data/board.db?mode=rwc".to_string()),
                max_connections: env::var("DB_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(5),
            }),
        };

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            storage,
            jwt: JwtConfig::from_env(),
        }
    }
}
