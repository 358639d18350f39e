use chrono::{TimeZone, Utc};
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

use board_core::domain::{Post, Provider};
use board_core::ports::{PostStore, UserStore};

use crate::store::entity::{post, user};
use crate::store::sqlite::{SqlitePostStore, SqliteUserStore};

fn post_row(id: &str, title: &str) -> post::Model {
    post::Model {
        id: id.to_owned(),
        title: title.to_owned(),
        content: "Content".to_owned(),
        author: "admin".to_owned(),
        created_at: "2024-03-01T15:00:00.000Z".to_owned(),
        updated_at: "2024-03-01T15:00:00.000Z".to_owned(),
    }
}

#[tokio::test]
async fn find_post_by_id_maps_text_row_to_domain() {
    let db = MockDatabase::new(DatabaseBackend::Sqlite)
        .append_query_results(vec![vec![post_row("2", "How to use this board")]])
        .into_connection();

    let store = SqlitePostStore::new(db);

    let result: Option<Post> = store.load_by_id("2").await.unwrap();

    let post = result.unwrap();
    assert_eq!(post.id, "2");
    assert_eq!(post.title, "How to use this board");
    assert_eq!(
        post.created_at,
        Utc.with_ymd_and_hms(2024, 3, 1, 15, 0, 0).unwrap()
    );
}

#[tokio::test]
async fn find_user_by_email_keeps_hash_and_provider() {
    let db = MockDatabase::new(DatabaseBackend::Sqlite)
        .append_query_results(vec![vec![user::Model {
            id: "u-1".to_owned(),
            name: "Alice".to_owned(),
            email: "a@x.com".to_owned(),
            password: Some("$argon2id$...".to_owned()),
            image: None,
            provider: "github".to_owned(),
            created_at: "2024-03-01T15:00:00.000Z".to_owned(),
            updated_at: "2024-03-01T15:00:00.000Z".to_owned(),
        }]])
        .into_connection();

    let store = SqliteUserStore::new(db);

    let found = store.load_by_email("a@x.com").await.unwrap().unwrap();
    assert_eq!(found.password.as_deref(), Some("$argon2id$..."));
    assert_eq!(found.provider, Provider::Github);
}

#[tokio::test]
async fn find_by_email_handles_multibyte_local_part() {
    // The lookup logs a masked address; a local part starting with a
    // multi-byte character must not trip the masking.
    let db = MockDatabase::new(DatabaseBackend::Sqlite)
        .append_query_results(vec![Vec::<user::Model>::new()])
        .into_connection();

    let store = SqliteUserStore::new(db);

    assert!(store.load_by_email("ü@x.com").await.unwrap().is_none());
}

#[tokio::test]
async fn delete_reports_zero_rows_as_false() {
    let db = MockDatabase::new(DatabaseBackend::Sqlite)
        .append_exec_results(vec![
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            },
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            },
        ])
        .into_connection();

    let store = SqlitePostStore::new(db);

    assert!(!store.delete("999").await.unwrap());
    assert!(store.delete("1").await.unwrap());
}
