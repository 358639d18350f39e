//! Flat-file JSON storage backend.
//!
//! Each collection lives in one JSON document (`posts.json`, `users.json`)
//! under the data directory. Every read deserializes the whole file; every
//! write re-serializes and overwrites it wholesale. There is no atomic
//! rename and no write-write mutual exclusion: concurrent writers race and
//! the last full snapshot wins. That hazard is part of the contract of this
//! variant, not a bug to paper over here.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::fs;

use board_core::domain::{Post, User};
use board_core::error::StoreError;
use board_core::ports::{PasswordService, PostStore, UserStore};

use super::seed;

/// Create the data directory, build both stores and seed any empty
/// collection with the example records.
pub async fn init(
    data_dir: &Path,
    passwords: &dyn PasswordService,
) -> Result<(JsonPostStore, JsonUserStore), StoreError> {
    fs::create_dir_all(data_dir)
        .await
        .map_err(|e| StoreError::Io(e.to_string()))?;

    let posts = JsonPostStore {
        path: data_dir.join("posts.json"),
    };
    let users = JsonUserStore {
        path: data_dir.join("users.json"),
    };

    if read_collection::<Post>(&posts.path).await?.is_empty() {
        write_collection(&posts.path, &seed::example_posts()).await?;
        tracing::info!(path = %posts.path.display(), "seeded example posts");
    }

    if read_collection::<User>(&users.path).await?.is_empty() {
        let admin = seed::admin_user(passwords)
            .map_err(|e| StoreError::Io(format!("seed admin hashing failed: {e}")))?;
        write_collection(&users.path, &[admin]).await?;
        tracing::info!(path = %users.path.display(), "seeded admin user");
    }

    Ok((posts, users))
}

async fn read_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
    match fs::read(path).await {
        Ok(bytes) if bytes.is_empty() => Ok(Vec::new()),
        Ok(bytes) => {
            serde_json::from_slice(&bytes).map_err(|e| StoreError::Serialization(e.to_string()))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(StoreError::Io(e.to_string())),
    }
}

async fn write_collection<T: Serialize>(path: &Path, records: &[T]) -> Result<(), StoreError> {
    let bytes =
        serde_json::to_vec_pretty(records).map_err(|e| StoreError::Serialization(e.to_string()))?;
    fs::write(path, bytes)
        .await
        .map_err(|e| StoreError::Io(e.to_string()))
}

/// Posts collection backed by a single JSON file.
pub struct JsonPostStore {
    path: PathBuf,
}

#[async_trait]
impl PostStore for JsonPostStore {
    async fn load_all(&self) -> Result<Vec<Post>, StoreError> {
        read_collection(&self.path).await
    }

    async fn load_by_id(&self, id: &str) -> Result<Option<Post>, StoreError> {
        let posts: Vec<Post> = read_collection(&self.path).await?;
        Ok(posts.into_iter().find(|p| p.id == id))
    }

    async fn insert(&self, post: Post) -> Result<Post, StoreError> {
        let mut posts: Vec<Post> = read_collection(&self.path).await?;
        if posts.iter().any(|p| p.id == post.id) {
            return Err(StoreError::Constraint(format!(
                "post id {} already exists",
                post.id
            )));
        }
        posts.push(post.clone());
        write_collection(&self.path, &posts).await?;
        Ok(post)
    }

    async fn update(&self, post: Post) -> Result<Post, StoreError> {
        let mut posts: Vec<Post> = read_collection(&self.path).await?;
        let slot = posts
            .iter_mut()
            .find(|p| p.id == post.id)
            .ok_or(StoreError::NotFound)?;
        *slot = post.clone();
        write_collection(&self.path, &posts).await?;
        Ok(post)
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let mut posts: Vec<Post> = read_collection(&self.path).await?;
        let before = posts.len();
        posts.retain(|p| p.id != id);
        if posts.len() == before {
            return Ok(false);
        }
        write_collection(&self.path, &posts).await?;
        Ok(true)
    }
}

/// Users collection backed by a single JSON file.
///
/// Email uniqueness is not enforced at this layer; the repository checks it
/// before inserting.
pub struct JsonUserStore {
    path: PathBuf,
}

#[async_trait]
impl UserStore for JsonUserStore {
    async fn load_all(&self) -> Result<Vec<User>, StoreError> {
        read_collection(&self.path).await
    }

    async fn load_by_id(&self, id: &str) -> Result<Option<User>, StoreError> {
        let users: Vec<User> = read_collection(&self.path).await?;
        Ok(users.into_iter().find(|u| u.id == id))
    }

    async fn load_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let users: Vec<User> = read_collection(&self.path).await?;
        Ok(users.into_iter().find(|u| u.email == email))
    }

    async fn insert(&self, user: User) -> Result<User, StoreError> {
        let mut users: Vec<User> = read_collection(&self.path).await?;
        if users.iter().any(|u| u.id == user.id) {
            return Err(StoreError::Constraint(format!(
                "user id {} already exists",
                user.id
            )));
        }
        users.push(user.clone());
        write_collection(&self.path, &users).await?;
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, StoreError> {
        let mut users: Vec<User> = read_collection(&self.path).await?;
        let slot = users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or(StoreError::NotFound)?;
        *slot = user.clone();
        write_collection(&self.path, &users).await?;
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Argon2PasswordService;
    use board_core::domain::NewPost;

    async fn fresh() -> (tempfile::TempDir, JsonPostStore, JsonUserStore) {
        let dir = tempfile::tempdir().unwrap();
        let (posts, users) = init(dir.path(), &Argon2PasswordService::new())
            .await
            .unwrap();
        (dir, posts, users)
    }

    #[tokio::test]
    async fn init_seeds_posts_and_admin_once() {
        let (dir, posts, users) = fresh().await;

        assert_eq!(posts.load_all().await.unwrap().len(), 3);
        let admin = users.load_by_email(seed::ADMIN_EMAIL).await.unwrap().unwrap();
        assert!(admin.password.is_some());

        // Re-running init against the same directory must not duplicate.
        let (posts, users) = init(dir.path(), &Argon2PasswordService::new())
            .await
            .unwrap();
        assert_eq!(posts.load_all().await.unwrap().len(), 3);
        assert_eq!(users.load_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn insert_load_update_delete_round_trip() {
        let (_dir, posts, _) = fresh().await;

        let mut post = Post::new(
            "10".to_string(),
            NewPost {
                title: "new".to_string(),
                content: "body".to_string(),
                author: "alice".to_string(),
            },
        );
        posts.insert(post.clone()).await.unwrap();

        let loaded = posts.load_by_id("10").await.unwrap().unwrap();
        assert_eq!(loaded, post);

        post.title = "edited".to_string();
        posts.update(post.clone()).await.unwrap();
        assert_eq!(posts.load_by_id("10").await.unwrap().unwrap().title, "edited");

        assert!(posts.delete("10").await.unwrap());
        assert!(!posts.delete("10").await.unwrap());
        assert!(posts.load_by_id("10").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_post_id_is_rejected() {
        let (_dir, posts, _) = fresh().await;

        let post = Post::new(
            "1".to_string(), // collides with a seed post
            NewPost {
                title: "dup".to_string(),
                content: "dup".to_string(),
                author: "dup".to_string(),
            },
        );

        let err = posts.insert(post).await.unwrap_err();
        assert!(matches!(err, StoreError::Constraint(_)));
    }

    #[tokio::test]
    async fn update_of_missing_record_is_not_found() {
        let (_dir, posts, _) = fresh().await;

        let ghost = Post::new(
            "999".to_string(),
            NewPost {
                title: "ghost".to_string(),
                content: "ghost".to_string(),
                author: "ghost".to_string(),
            },
        );

        let err = posts.update(ghost).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound));
    }

    #[tokio::test]
    async fn persisted_file_uses_wire_field_names() {
        let (dir, _, _) = fresh().await;

        let raw = tokio::fs::read_to_string(dir.path().join("posts.json"))
            .await
            .unwrap();
        assert!(raw.contains("\"createdAt\""));
        assert!(raw.contains("\"updatedAt\""));
    }
}
