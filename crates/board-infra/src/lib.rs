//! # Board Infrastructure
//!
//! Concrete implementations of the ports defined in `board-core`: the two
//! storage backend strategies (flat-file JSON and SQLite) plus the Argon2
//! password service and the JWT token service.

pub mod auth;
pub mod store;

pub use auth::{Argon2PasswordService, JwtConfig, JwtTokenService};
pub use store::{JsonPostStore, JsonUserStore, SqliteConfig, SqlitePostStore, SqliteUserStore};
