//! Bootstrap records inserted when a collection is empty at startup.
//!
//! Both backends seed the same three example posts and one admin account,
//! so a fresh store behaves identically regardless of the selected
//! strategy. Seeding is idempotent: a non-empty collection is left alone.

use chrono::{TimeZone, Utc};

use board_core::domain::{Post, User};
use board_core::ports::{AuthError, PasswordService};

pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "admin123";

/// The three example posts every fresh board starts with.
pub fn example_posts() -> Vec<Post> {
    let post = |id: &str, title: &str, content: &str, author: &str, (y, m, d): (i32, u32, u32)| {
        let ts = Utc.with_ymd_and_hms(y, m, d, 15, 0, 0).unwrap();
        Post {
            id: id.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            author: author.to_string(),
            created_at: ts,
            updated_at: ts,
        }
    };

    vec![
        post(
            "1",
            "Welcome to the board",
            "This is the very first post on the board. Welcome!",
            "admin",
            (2024, 2, 29),
        ),
        post(
            "2",
            "How to use this board",
            "This is a simple community bulletin board. Feel free to write posts and share your thoughts.",
            "admin",
            (2024, 3, 1),
        ),
        post(
            "3",
            "Today's weather",
            "It's a sunny day today. Have a great one!",
            "weatherman",
            (2024, 3, 2),
        ),
    ]
}

/// The seed admin account. The password is hashed through the real
/// password service at seed time, so credential login works against a
/// fresh store.
pub fn admin_user(passwords: &dyn PasswordService) -> Result<User, AuthError> {
    let hash = passwords.hash(ADMIN_PASSWORD)?;
    let now = Utc::now();
    Ok(User {
        id: "1".to_string(),
        name: "Administrator".to_string(),
        email: ADMIN_EMAIL.to_string(),
        password: Some(hash),
        image: None,
        provider: board_core::domain::Provider::Email,
        created_at: now,
        updated_at: now,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_posts_have_stable_ids_and_equal_timestamps() {
        let posts = example_posts();
        let ids: Vec<_> = posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
        assert!(posts.iter().all(|p| p.created_at == p.updated_at));
    }
}
