//! User repository.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::{Provider, User};
use crate::error::{DomainError, StoreError};
use crate::ports::{PasswordService, UserStore};

/// CRUD + credential operations over user records.
///
/// Everything except `get_by_email` strips the password hash before
/// returning; `get_by_email` backs credential verification and is the only
/// op that hands the hash to its caller.
#[derive(Clone)]
pub struct UserRepository {
    store: Arc<dyn UserStore>,
    passwords: Arc<dyn PasswordService>,
}

impl UserRepository {
    pub fn new(store: Arc<dyn UserStore>, passwords: Arc<dyn PasswordService>) -> Self {
        Self { store, passwords }
    }

    pub async fn list_all(&self) -> Result<Vec<User>, StoreError> {
        let users = self.store.load_all().await?;
        Ok(users.into_iter().map(User::stripped).collect())
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<User>, StoreError> {
        Ok(self.store.load_by_id(id).await?.map(User::stripped))
    }

    /// Lookup by email, password hash included. Callers that do not need
    /// the hash must strip it before passing the record outward.
    pub async fn get_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        self.store.load_by_email(email).await
    }

    /// Register a credential-based account. Email comparison is exact
    /// (case-sensitive).
    pub async fn register(
        &self,
        name: String,
        email: String,
        password: &str,
    ) -> Result<User, DomainError> {
        if self.store.load_by_email(&email).await?.is_some() {
            return Err(DomainError::EmailTaken(email));
        }

        let hash = self
            .passwords
            .hash(password)
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let user = User::new_credential(name, email, hash);
        tracing::debug!(user_id = %user.id, "registering user");
        let saved = self.store.insert(user).await?;
        Ok(saved.stripped())
    }

    /// Insert-or-update keyed by email, for externally-verified social
    /// identities. An existing account keeps its id, email and created_at;
    /// name and provider are refreshed, and the image is replaced only when
    /// a new one is supplied.
    pub async fn upsert_social_user(
        &self,
        email: String,
        name: String,
        provider: Provider,
        image: Option<String>,
    ) -> Result<User, StoreError> {
        match self.store.load_by_email(&email).await? {
            Some(mut user) => {
                user.name = name;
                user.provider = provider;
                if image.is_some() {
                    user.image = image;
                }
                user.updated_at = Utc::now();
                self.store.update(user).await
            }
            None => {
                let user = User::new_social(name, email, provider, image);
                tracing::debug!(user_id = %user.id, provider = %provider, "creating social user");
                self.store.insert(user).await
            }
        }
    }
}
