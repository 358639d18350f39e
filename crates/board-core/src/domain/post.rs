use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post entity - a single bulletin board entry.
///
/// Serialized field names (`createdAt`/`updatedAt`) match the persisted
/// layout, so the same shape goes over the wire and into storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to create a post. The id and timestamps are assigned by
/// the repository.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author: String,
}

/// Partial update for a post. Fields left as `None` keep their prior value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

impl Post {
    /// Create a new post with the given id and both timestamps set to now.
    pub fn new(id: String, input: NewPost) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: input.title,
            content: input.content,
            author: input.author,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a patch in place, overwriting only the fields the patch carries,
    /// and stamp `updated_at`.
    pub fn apply(&mut self, patch: PostPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(author) = patch.author {
            self.author = author;
        }
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Post {
        Post::new(
            "1".to_string(),
            NewPost {
                title: "Hello".to_string(),
                content: "First post".to_string(),
                author: "alice".to_string(),
            },
        )
    }

    #[test]
    fn new_post_has_equal_timestamps() {
        let post = sample();
        assert_eq!(post.created_at, post.updated_at);
    }

    #[test]
    fn apply_overwrites_only_patched_fields() {
        let mut post = sample();
        let before = post.updated_at;

        post.apply(PostPatch {
            title: Some("Edited".to_string()),
            ..Default::default()
        });

        assert_eq!(post.title, "Edited");
        assert_eq!(post.content, "First post");
        assert_eq!(post.author, "alice");
        assert!(post.updated_at >= before);
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let value = serde_json::to_value(sample()).unwrap();
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
        assert!(value.get("created_at").is_none());
    }
}
