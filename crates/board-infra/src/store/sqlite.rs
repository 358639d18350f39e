//! SQLite storage backend.
//!
//! Each operation is a single parameterized statement; durability comes
//! from the engine's statement-level atomicity. No multi-statement
//! transactions are used here - the repository's read-merge-write update
//! path is deliberately not isolated.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectOptions, ConnectionTrait, Database, DbConn, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, Schema,
};

use board_core::domain::{Post, User};
use board_core::error::StoreError;
use board_core::ports::{PasswordService, PostStore, UserStore};

use super::entity::post::{self, Entity as PostEntity};
use super::entity::user::{self, Entity as UserEntity};
use super::seed;

/// Connection settings for the SQLite backend.
#[derive(Debug, Clone)]
pub struct SqliteConfig {
    /// e.g. `sqlite://data/board.db?mode=rwc`
    pub url: String,
    pub max_connections: u32,
}

impl Default for SqliteConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://data/board.db?mode=rwc".to_string(),
            max_connections: 5,
        }
    }
}

/// Connect, create the tables if missing and seed empty collections.
/// Returns both stores sharing one pool.
pub async fn init(
    config: &SqliteConfig,
    passwords: &dyn PasswordService,
) -> Result<(SqlitePostStore, SqliteUserStore), StoreError> {
    let db = connect(config).await?;
    create_tables(&db).await?;
    seed_if_empty(&db, passwords).await?;
    // DatabaseConnection is not Clone under every feature set; share it
    // behind an Arc instead.
    let db = Arc::new(db);
    Ok((
        SqlitePostStore { db: db.clone() },
        SqliteUserStore { db },
    ))
}

async fn connect(config: &SqliteConfig) -> Result<DbConn, StoreError> {
    // Make sure the directory holding the database file exists.
    if let Some(file) = config.url.strip_prefix("sqlite://") {
        let file = file.split('?').next().unwrap_or(file);
        if file != ":memory:" {
            if let Some(parent) = Path::new(file).parent() {
                if !parent.as_os_str().is_empty() {
                    tokio::fs::create_dir_all(parent)
                        .await
                        .map_err(|e| StoreError::Io(e.to_string()))?;
                }
            }
        }
    }

    let opts = ConnectOptions::new(&config.url)
        .max_connections(config.max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(false)
        .to_owned();

    let db = Database::connect(opts)
        .await
        .map_err(|e| StoreError::Connection(e.to_string()))?;
    tracing::info!(url = %config.url, "sqlite backend connected");
    Ok(db)
}

async fn create_tables(db: &DbConn) -> Result<(), StoreError> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    for mut stmt in [
        schema.create_table_from_entity(PostEntity),
        schema.create_table_from_entity(UserEntity),
    ] {
        stmt.if_not_exists();
        db.execute(builder.build(&stmt)).await.map_err(map_db_err)?;
    }
    Ok(())
}

async fn seed_if_empty(db: &DbConn, passwords: &dyn PasswordService) -> Result<(), StoreError> {
    let post_count = PostEntity::find().count(db).await.map_err(map_db_err)?;
    if post_count == 0 {
        let models: Vec<post::ActiveModel> = seed::example_posts()
            .into_iter()
            .map(Into::into)
            .collect();
        PostEntity::insert_many(models)
            .exec(db)
            .await
            .map_err(map_db_err)?;
        tracing::info!("seeded example posts");
    }

    let user_count = UserEntity::find().count(db).await.map_err(map_db_err)?;
    if user_count == 0 {
        let admin = seed::admin_user(passwords)
            .map_err(|e| StoreError::Io(format!("seed admin hashing failed: {e}")))?;
        user::ActiveModel::from(admin)
            .insert(db)
            .await
            .map_err(map_db_err)?;
        tracing::info!("seeded admin user");
    }

    Ok(())
}

fn map_db_err(e: DbErr) -> StoreError {
    if matches!(e, DbErr::RecordNotUpdated) {
        return StoreError::NotFound;
    }
    let msg = e.to_string();
    if msg.to_lowercase().contains("unique") {
        StoreError::Constraint(msg)
    } else {
        StoreError::Query(msg)
    }
}

/// Mask the local part so lookups never log a full address. Keeps at most
/// the first character (not byte - local parts may start multi-byte).
fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let first: String = local.chars().take(1).collect();
            format!("{first}***@{domain}")
        }
        None => "***".to_string(),
    }
}

/// Posts table store.
pub struct SqlitePostStore {
    db: Arc<DbConn>,
}

impl SqlitePostStore {
    pub fn new(db: DbConn) -> Self {
        Self { db: Arc::new(db) }
    }
}

#[async_trait]
impl PostStore for SqlitePostStore {
    async fn load_all(&self) -> Result<Vec<Post>, StoreError> {
        let rows = PostEntity::find().all(self.db.as_ref()).await.map_err(map_db_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn load_by_id(&self, id: &str) -> Result<Option<Post>, StoreError> {
        let row = PostEntity::find_by_id(id.to_string())
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)?;
        Ok(row.map(Into::into))
    }

    async fn insert(&self, post: Post) -> Result<Post, StoreError> {
        let model = post::ActiveModel::from(post)
            .insert(self.db.as_ref())
            .await
            .map_err(map_db_err)?;
        Ok(model.into())
    }

    async fn update(&self, post: Post) -> Result<Post, StoreError> {
        let model = post::ActiveModel::from(post)
            .update(self.db.as_ref())
            .await
            .map_err(map_db_err)?;
        Ok(model.into())
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let result = PostEntity::delete_by_id(id.to_string())
            .exec(self.db.as_ref())
            .await
            .map_err(map_db_err)?;
        Ok(result.rows_affected > 0)
    }
}

/// Users table store.
pub struct SqliteUserStore {
    db: Arc<DbConn>,
}

impl SqliteUserStore {
    pub fn new(db: DbConn) -> Self {
        Self { db: Arc::new(db) }
    }
}

#[async_trait]
impl UserStore for SqliteUserStore {
    async fn load_all(&self) -> Result<Vec<User>, StoreError> {
        let rows = UserEntity::find().all(self.db.as_ref()).await.map_err(map_db_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn load_by_id(&self, id: &str) -> Result<Option<User>, StoreError> {
        let row = UserEntity::find_by_id(id.to_string())
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)?;
        Ok(row.map(Into::into))
    }

    async fn load_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        tracing::debug!(user_email = %mask_email(email), "finding user by email");

        let row = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)?;
        Ok(row.map(Into::into))
    }

    async fn insert(&self, user: User) -> Result<User, StoreError> {
        let model = user::ActiveModel::from(user)
            .insert(self.db.as_ref())
            .await
            .map_err(map_db_err)?;
        Ok(model.into())
    }

    async fn update(&self, user: User) -> Result<User, StoreError> {
        let model = user::ActiveModel::from(user)
            .update(self.db.as_ref())
            .await
            .map_err(map_db_err)?;
        Ok(model.into())
    }
}

#[cfg(test)]
mod tests {
    use super::mask_email;

    #[test]
    fn mask_keeps_one_character_of_the_local_part() {
        assert_eq!(mask_email("admin@example.com"), "a***@example.com");
        assert_eq!(mask_email("ü@x.com"), "ü***@x.com");
        assert_eq!(mask_email("@x.com"), "***@x.com");
        assert_eq!(mask_email("not-an-email"), "***");
    }
}
