use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use validator::Validate;

use crate::core::suggestion::{validate_suggestion, ValidationError};
use crate::models::{NewSuggestion, Suggestion};

/// Errors that can occur when talking to the suggestion database
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Refusing to store invalid suggestion: {0}")]
    InvalidInput(#[from] validator::ValidationErrors),
}

/// Outcome of a failed submission
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Append-only log of visitor suggestions backed by SQLite
///
/// Ids come from SQLite's AUTOINCREMENT, so concurrent inserts always get
/// unique, increasing ids.
#[derive(Debug, Clone)]
pub struct SuggestionStore {
    pool: SqlitePool,
}

impl SuggestionStore {
    /// Connect to the database and run pending migrations
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
        acquire_timeout: Duration,
    ) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(acquire_timeout)
            .connect_with(options)
            .await?;

        Self::from_pool(pool).await
    }

    /// Create a store from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
        acquire_timeout_secs: Option<u64>,
    ) -> Result<Self, StoreError> {
        tracing::info!("Opening suggestion database: {}", url);

        Self::new(
            url,
            max_connections.unwrap_or(5),
            min_connections.unwrap_or(1),
            Duration::from_secs(acquire_timeout_secs.unwrap_or(5)),
        )
        .await
    }

    /// Private in-memory database, used by tests
    ///
    /// Every SQLite in-memory connection is its own database, so the pool is
    /// pinned to a single connection that never expires.
    pub async fn in_memory() -> Result<Self, StoreError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;

        Self::from_pool(pool).await
    }

    async fn from_pool(pool: SqlitePool) -> Result<Self, StoreError> {
        sqlx::migrate!("./migrations").run(&pool).await?;
        Ok(Self { pool })
    }

    /// Validate raw visitor text and append it to the log
    pub async fn submit(&self, raw: Option<&str>) -> Result<Suggestion, SubmitError> {
        let text = validate_suggestion(raw)?;
        let suggestion = self.insert(NewSuggestion { text }).await?;
        Ok(suggestion)
    }

    /// Insert an already sanitized suggestion, stamped with the current time
    pub async fn insert(&self, new: NewSuggestion) -> Result<Suggestion, StoreError> {
        new.validate()?;

        let query = r#"
            INSERT INTO suggestions (text, created_at)
            VALUES (?, ?)
            RETURNING id, text, created_at
        "#;

        let suggestion = sqlx::query_as::<_, Suggestion>(query)
            .bind(&new.text)
            .bind(chrono::Utc::now())
            .fetch_one(&self.pool)
            .await?;

        tracing::debug!(
            "Stored suggestion {} ({} chars)",
            suggestion.id,
            suggestion.text.chars().count()
        );

        Ok(suggestion)
    }

    /// All suggestions, newest first
    ///
    /// Equal timestamps fall back to insertion order, latest insert first.
    pub async fn list_all(&self) -> Result<Vec<Suggestion>, StoreError> {
        let query = r#"
            SELECT id, text, created_at
            FROM suggestions
            ORDER BY created_at DESC, id DESC
        "#;

        let suggestions = sqlx::query_as::<_, Suggestion>(query)
            .fetch_all(&self.pool)
            .await?;

        Ok(suggestions)
    }

    pub async fn count(&self) -> Result<i64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM suggestions")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, StoreError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}
