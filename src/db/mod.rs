//! Database connection and operations

pub mod authors;
pub mod books;
pub mod error;
pub mod schema;
pub mod sqlite_helpers;
pub mod store;

use std::str::FromStr;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub use authors::{AuthorRecord, AuthorRepository, NewAuthor};
pub use books::{BookFilter, BookRecord, BookRepository, MIN_TITLE_LEN, NewBook};
pub use error::StoreError;
pub use store::{EntityStore, SharedStore};

/// Database wrapper providing connection pool access
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Create a new database connection pool, creating the file if missing
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)
            .with_context(|| format!("Invalid database URL: {}", url))?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .with_context(|| format!("Failed to open database at {}", url))?;

        Ok(Self { pool })
    }

    /// Create a new database connection pool with retry logic.
    /// Retries every second until `timeout` has elapsed.
    pub async fn connect_with_retry(
        url: &str,
        max_connections: u32,
        timeout: Duration,
    ) -> Result<Self> {
        let started = Instant::now();
        let retry_interval = Duration::from_secs(1);
        loop {
            match Self::connect(url, max_connections).await {
                Ok(db) => return Ok(db),
                Err(e) if started.elapsed() + retry_interval < timeout => {
                    tracing::warn!(
                        error = %e,
                        retry_in_secs = retry_interval.as_secs(),
                        "Database connection failed, retrying"
                    );
                    tokio::time::sleep(retry_interval).await;
                }
                Err(e) => {
                    return Err(e.context(format!(
                        "Database unavailable after {}s",
                        timeout.as_secs()
                    )));
                }
            }
        }
    }

    /// Private in-memory database. A single connection that never expires, so
    /// the data lives as long as the pool.
    pub async fn in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .context("Failed to open in-memory database")?;

        Ok(Self { pool })
    }

    /// Get the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Get a book repository
    pub fn books(&self) -> BookRepository {
        BookRepository::new(self.pool.clone())
    }

    /// Get an author repository
    pub fn authors(&self) -> AuthorRepository {
        AuthorRepository::new(self.pool.clone())
    }

    /// Create missing tables; safe to call on every start
    pub async fn ensure_schema(&self) -> Result<()> {
        let created = schema::ensure_schema(&self.pool)
            .await
            .context("Failed to bootstrap catalog tables")?;
        if !created.is_empty() {
            tracing::info!(tables = ?created, "Created tables");
        }
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}
