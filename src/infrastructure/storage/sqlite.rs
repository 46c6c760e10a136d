//! SQLite-backed user store.

use crate::core::errors::CrudError;
use crate::core::models::user::User;
use crate::infrastructure::storage::UserStorage;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use tracing::info;
use uuid::Uuid;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

#[derive(Clone)]
pub struct SqliteStorage {
    pool: SqlitePool,
}

#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    username: String,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            username: row.username,
            email: row.email,
            password_hash: row.password_hash,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl SqliteStorage {
    /// Wraps an existing pool. Migrations are not run.
    pub fn new(pool: SqlitePool) -> Self {
        SqliteStorage { pool }
    }

    /// Opens a pool for `database_url` and brings the schema up to date.
    ///
    /// An in-memory database lives only as long as its connection, so the
    /// pool is pinned to a single connection that never expires.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, CrudError> {
        if !database_url.starts_with("sqlite:") {
            return Err(CrudError::DatabaseError(
                "database url must use the sqlite: scheme".to_string(),
            ));
        }
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| CrudError::DatabaseError(format!("invalid database url: {}", e)))?
            .create_if_missing(true);

        let mut pool_options = SqlitePoolOptions::new().max_connections(max_connections);
        if database_url.contains(":memory:") {
            pool_options = pool_options
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|e| CrudError::DatabaseError(format!("failed to open database: {}", e)))?;

        let storage = SqliteStorage::new(pool);
        storage.migrate().await?;
        Ok(storage)
    }

    pub async fn migrate(&self) -> Result<(), CrudError> {
        MIGRATOR
            .run(&self.pool)
            .await
            .map_err(|e| CrudError::DatabaseError(format!("failed to run migrations: {}", e)))?;
        info!("database migrations applied");
        Ok(())
    }
}

#[async_trait]
impl UserStorage for SqliteStorage {
    async fn save(&self, user: User) -> Result<User, CrudError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, username, email, password_hash, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            ON CONFLICT (id) DO UPDATE SET
                username = excluded.username,
                email = excluded.email,
                password_hash = excluded.password_hash,
                created_at = excluded.created_at,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(user.id)
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| CrudError::DatabaseError(format!("failed to save user: {}", e)))?;

        Ok(user)
    }

    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, CrudError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, email, password_hash, created_at, updated_at
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CrudError::DatabaseError(format!("failed to find user by id: {}", e)))?;

        Ok(row.map(User::from))
    }

    async fn find_all(&self) -> Result<Vec<User>, CrudError> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, email, password_hash, created_at, updated_at
            FROM users
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CrudError::DatabaseError(format!("failed to list users: {}", e)))?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn exists_by_id(&self, user_id: Uuid) -> Result<bool, CrudError> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE id = ?)")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| CrudError::DatabaseError(format!("failed to check user existence: {}", e)))?;

        Ok(exists)
    }

    async fn delete_by_id(&self, user_id: Uuid) -> Result<(), CrudError> {
        sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| CrudError::DatabaseError(format!("failed to delete user: {}", e)))?;

        Ok(())
    }
}
