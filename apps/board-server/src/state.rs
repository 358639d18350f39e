//! Application state - the composition root.
//!
//! The storage backend is constructed exactly once here and passed into the
//! repositories by reference; nothing else in the process holds an ambient
//! storage handle.

use std::sync::Arc;

use board_core::StoreError;
use board_core::auth::AuthFlow;
use board_core::ports::{PasswordService, PostStore, TokenService, UserStore};
use board_core::repo::{PostRepository, UserRepository};
use board_infra::auth::{Argon2PasswordService, JwtTokenService};
use board_infra::store::{json_file, sqlite};

use crate::config::{AppConfig, StorageChoice};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostRepository,
    pub users: UserRepository,
    pub auth: AuthFlow,
    pub tokens: Arc<dyn TokenService>,
}

impl AppState {
    /// Build the state for the configured storage backend. Both strategies
    /// come out of here behind the same trait objects.
    pub async fn new(config: &AppConfig) -> Result<Self, StoreError> {
        let passwords: Arc<dyn PasswordService> = Arc::new(Argon2PasswordService::new());

        let (post_store, user_store): (Arc<dyn PostStore>, Arc<dyn UserStore>) =
            match &config.storage {
                StorageChoice::JsonFile { data_dir } => {
                    tracing::info!(dir = %data_dir.display(), "using flat-file JSON storage");
                    let (posts, users) = json_file::init(data_dir, passwords.as_ref()).await?;
                    (Arc::new(posts), Arc::new(users))
                }
                StorageChoice::Sqlite(sqlite_config) => {
                    tracing::info!("using sqlite storage");
                    let (posts, users) = sqlite::init(sqlite_config, passwords.as_ref()).await?;
                    (Arc::new(posts), Arc::new(users))
                }
            };

        let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(config.jwt.clone()));

        let posts = PostRepository::new(post_store);
        let users = UserRepository::new(user_store, passwords.clone());
        let auth = AuthFlow::new(users.clone(), passwords, tokens.clone());

        tracing::info!("application state initialized");

        Ok(Self {
            posts,
            users,
            auth,
            tokens,
        })
    }
}
