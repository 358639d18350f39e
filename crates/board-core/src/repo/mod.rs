//! Repositories - CRUD operations built on a storage backend.
//!
//! Repositories never cache records across calls; every operation re-reads
//! current state from the backend it was constructed with.

mod posts;
mod users;

pub use posts::PostRepository;
pub use users::UserRepository;

#[cfg(test)]
pub(crate) mod testing {
    //! Minimal in-memory stores for exercising repository logic without a
    //! real backend.

    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::domain::{Post, User};
    use crate::error::StoreError;
    use crate::ports::{PostStore, UserStore};

    #[derive(Default)]
    pub struct MemoryPostStore {
        posts: Mutex<Vec<Post>>,
    }

    #[async_trait]
    impl PostStore for MemoryPostStore {
        async fn load_all(&self) -> Result<Vec<Post>, StoreError> {
            Ok(self.posts.lock().unwrap().clone())
        }

        async fn load_by_id(&self, id: &str) -> Result<Option<Post>, StoreError> {
            Ok(self.posts.lock().unwrap().iter().find(|p| p.id == id).cloned())
        }

        async fn insert(&self, post: Post) -> Result<Post, StoreError> {
            let mut posts = self.posts.lock().unwrap();
            if posts.iter().any(|p| p.id == post.id) {
                return Err(StoreError::Constraint(format!("duplicate id {}", post.id)));
            }
            posts.push(post.clone());
            Ok(post)
        }

        async fn update(&self, post: Post) -> Result<Post, StoreError> {
            let mut posts = self.posts.lock().unwrap();
            let slot = posts
                .iter_mut()
                .find(|p| p.id == post.id)
                .ok_or(StoreError::NotFound)?;
            *slot = post.clone();
            Ok(post)
        }

        async fn delete(&self, id: &str) -> Result<bool, StoreError> {
            let mut posts = self.posts.lock().unwrap();
            let before = posts.len();
            posts.retain(|p| p.id != id);
            Ok(posts.len() < before)
        }
    }

    #[derive(Default)]
    pub struct MemoryUserStore {
        users: Mutex<Vec<User>>,
    }

    #[async_trait]
    impl UserStore for MemoryUserStore {
        async fn load_all(&self) -> Result<Vec<User>, StoreError> {
            Ok(self.users.lock().unwrap().clone())
        }

        async fn load_by_id(&self, id: &str) -> Result<Option<User>, StoreError> {
            Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
        }

        async fn load_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.email == email)
                .cloned())
        }

        async fn insert(&self, user: User) -> Result<User, StoreError> {
            let mut users = self.users.lock().unwrap();
            if users.iter().any(|u| u.id == user.id || u.email == user.email) {
                return Err(StoreError::Constraint(format!("duplicate user {}", user.email)));
            }
            users.push(user.clone());
            Ok(user)
        }

        async fn update(&self, user: User) -> Result<User, StoreError> {
            let mut users = self.users.lock().unwrap();
            let slot = users
                .iter_mut()
                .find(|u| u.id == user.id)
                .ok_or(StoreError::NotFound)?;
            *slot = user.clone();
            Ok(user)
        }
    }

    /// Transparent "hash" so tests can assert on what was stored.
    pub struct PlainPasswordService;

    impl crate::ports::PasswordService for PlainPasswordService {
        fn hash(&self, password: &str) -> Result<String, crate::ports::AuthError> {
            Ok(format!("hashed:{password}"))
        }

        fn verify(&self, password: &str, hash: &str) -> Result<bool, crate::ports::AuthError> {
            Ok(hash == format!("hashed:{password}"))
        }
    }
}
