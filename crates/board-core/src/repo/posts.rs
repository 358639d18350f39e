//! Post repository.

use std::sync::Arc;

use crate::domain::{NewPost, Post, PostPatch};
use crate::error::StoreError;
use crate::ports::PostStore;

/// CRUD operations over post records, built on a storage backend.
#[derive(Clone)]
pub struct PostRepository {
    store: Arc<dyn PostStore>,
}

impl PostRepository {
    pub fn new(store: Arc<dyn PostStore>) -> Self {
        Self { store }
    }

    /// All posts, newest first. The backend's natural order is insertion
    /// order, so the sort is applied here explicitly.
    pub async fn list_all(&self) -> Result<Vec<Post>, StoreError> {
        let mut posts = self.store.load_all().await?;
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Post>, StoreError> {
        self.store.load_by_id(id).await
    }

    /// Create a post with a freshly assigned id and both timestamps set to
    /// now.
    pub async fn create(&self, input: NewPost) -> Result<Post, StoreError> {
        let posts = self.store.load_all().await?;
        let id = next_id(&posts);

        let post = Post::new(id, input);
        tracing::debug!(post_id = %post.id, "creating post");
        self.store.insert(post).await
    }

    /// Merge the patch into the stored record. Returns `None` when the id
    /// does not exist; the caller decides how to surface that.
    pub async fn update(&self, id: &str, patch: PostPatch) -> Result<Option<Post>, StoreError> {
        let Some(mut post) = self.store.load_by_id(id).await? else {
            return Ok(None);
        };

        post.apply(patch);
        let saved = self.store.update(post).await?;
        Ok(Some(saved))
    }

    /// Hard delete. Returns `false` for an absent id (no-op).
    pub async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        self.store.delete(id).await
    }
}

/// One greater than the current maximum numeric id; non-numeric ids are
/// ignored and an empty collection starts at "1".
///
/// This mirrors the stored contract and assumes a single writer; see
/// DESIGN.md for the concurrency caveat.
fn next_id(posts: &[Post]) -> String {
    let max = posts
        .iter()
        .filter_map(|p| p.id.parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    (max + 1).to_string()
}
