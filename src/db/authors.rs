//! Author database repository

use sqlx::SqlitePool;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

use crate::db::StoreError;
use crate::db::sqlite_helpers::{decode_uuid, now_iso8601, uuid_to_str};

/// Author record from database
#[derive(Debug, Clone, PartialEq)]
pub struct AuthorRecord {
    pub id: Uuid,
    pub name: String,
    pub born: i32,
}

impl sqlx::FromRow<'_, SqliteRow> for AuthorRecord {
    fn from_row(row: &SqliteRow) -> sqlx::Result<Self> {
        use sqlx::Row;

        let id_str: String = row.try_get("id")?;
        Ok(Self {
            id: decode_uuid(&id_str)?,
            name: row.try_get("name")?,
            born: row.try_get("born")?,
        })
    }
}

/// Input for creating an author
#[derive(Debug, Clone)]
pub struct NewAuthor {
    pub name: String,
    pub born: i32,
}

impl NewAuthor {
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.name.is_empty() {
            return Err(StoreError::validation("name must not be empty"));
        }
        Ok(())
    }
}

pub struct AuthorRepository {
    pool: SqlitePool,
}

impl AuthorRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get an author by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<AuthorRecord>, StoreError> {
        let record = sqlx::query_as::<_, AuthorRecord>(
            "SELECT id, name, born FROM authors WHERE id = ?1",
        )
        .bind(uuid_to_str(id))
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    /// Insert a new author
    pub async fn create(&self, input: &NewAuthor) -> Result<AuthorRecord, StoreError> {
        let id = Uuid::new_v4();

        sqlx::query(
            r#"
            INSERT INTO authors (id, name, born, created_at)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(uuid_to_str(id))
        .bind(&input.name)
        .bind(input.born)
        .bind(now_iso8601())
        .execute(&self.pool)
        .await?;

        self.get_by_id(id)
            .await?
            .ok_or(StoreError::Database(sqlx::Error::RowNotFound))
    }

    /// List all authors in insertion order
    pub async fn list(&self) -> Result<Vec<AuthorRecord>, StoreError> {
        let records = sqlx::query_as::<_, AuthorRecord>(
            "SELECT id, name, born FROM authors ORDER BY rowid",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    /// First author (by insertion order) carrying this exact name.
    /// Names are not unique; later duplicates are never returned here.
    pub async fn find_first_by_name(&self, name: &str) -> Result<Option<AuthorRecord>, StoreError> {
        let record = sqlx::query_as::<_, AuthorRecord>(
            "SELECT id, name, born FROM authors WHERE name = ?1 ORDER BY rowid LIMIT 1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    /// Total number of authors
    pub async fn count(&self) -> Result<i64, StoreError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM authors")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Write the mutable fields of an existing record back
    pub async fn save(&self, record: &AuthorRecord) -> Result<AuthorRecord, StoreError> {
        let result = sqlx::query("UPDATE authors SET name = ?2, born = ?3 WHERE id = ?1")
            .bind(uuid_to_str(record.id))
            .bind(&record.name)
            .bind(record.born)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::Database(sqlx::Error::RowNotFound));
        }

        self.get_by_id(record.id)
            .await?
            .ok_or(StoreError::Database(sqlx::Error::RowNotFound))
    }
}
