//! Storage backend ports.
//!
//! Both backing strategies (flat-file JSON and the relational table store)
//! implement these contracts identically from the caller's perspective. The
//! backend instance is constructed by the composition root and handed to the
//! repositories - there is no ambient global handle.

use async_trait::async_trait;

use crate::domain::{Post, User};
use crate::error::StoreError;

/// Durable keyed storage for the posts collection.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Every currently stored post, in insertion order.
    async fn load_all(&self) -> Result<Vec<Post>, StoreError>;

    /// Exact match on the primary key.
    async fn load_by_id(&self, id: &str) -> Result<Option<Post>, StoreError>;

    /// Insert a new post. Fails with `Constraint` if the id already exists.
    async fn insert(&self, post: Post) -> Result<Post, StoreError>;

    /// Replace the stored record with the same id. Fails with `NotFound`
    /// if the id is absent.
    async fn update(&self, post: Post) -> Result<Post, StoreError>;

    /// Remove a post. Returns whether a record was actually deleted.
    async fn delete(&self, id: &str) -> Result<bool, StoreError>;
}

/// Durable keyed storage for the users collection.
///
/// Records returned here still carry the password hash; stripping is the
/// repository's job. Users are never deleted by any exposed operation.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn load_all(&self) -> Result<Vec<User>, StoreError>;

    async fn load_by_id(&self, id: &str) -> Result<Option<User>, StoreError>;

    /// Exact-match lookup on the unique email field.
    async fn load_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    async fn insert(&self, user: User) -> Result<User, StoreError>;

    async fn update(&self, user: User) -> Result<User, StoreError>;
}
