//! Book database repository

use std::collections::HashMap;

use sqlx::SqlitePool;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

use crate::db::StoreError;
use crate::db::sqlite_helpers::{
    decode_uuid, json_array_contains_sql, json_to_vec, now_iso8601, numbered_placeholders,
    uuid_to_str, vec_to_json,
};

/// Shortest title the catalog accepts, in characters
pub const MIN_TITLE_LEN: usize = 2;

const BOOK_COLUMNS: &str = "id, title, published, author, genres";

/// Book record from database
#[derive(Debug, Clone, PartialEq)]
pub struct BookRecord {
    pub id: Uuid,
    pub title: String,
    pub published: Option<i32>,
    pub author: String,
    pub genres: Vec<String>,
}

impl sqlx::FromRow<'_, SqliteRow> for BookRecord {
    fn from_row(row: &SqliteRow) -> sqlx::Result<Self> {
        use sqlx::Row;

        let id_str: String = row.try_get("id")?;
        let genres_json: String = row.try_get("genres")?;

        Ok(Self {
            id: decode_uuid(&id_str)?,
            title: row.try_get("title")?,
            published: row.try_get("published")?,
            author: row.try_get("author")?,
            genres: json_to_vec(&genres_json),
        })
    }
}

/// Input for creating a book
#[derive(Debug, Clone)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub published: Option<i32>,
    pub genres: Vec<String>,
}

impl NewBook {
    /// Reject titles the store would refuse anyway, before a round-trip
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.title.chars().count() < MIN_TITLE_LEN {
            return Err(StoreError::validation(format!(
                "title must be at least {} characters",
                MIN_TITLE_LEN
            )));
        }
        Ok(())
    }
}

/// Optional filters for listing books. Filters combine with AND.
#[derive(Debug, Clone, Default)]
pub struct BookFilter {
    /// Exact match on the author's display name
    pub author: Option<String>,
    /// Book must list this genre
    pub genre: Option<String>,
}

pub struct BookRepository {
    pool: SqlitePool,
}

impl BookRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a book by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<BookRecord>, StoreError> {
        let record = sqlx::query_as::<_, BookRecord>(&format!(
            "SELECT {} FROM books WHERE id = ?1",
            BOOK_COLUMNS
        ))
        .bind(uuid_to_str(id))
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    /// Insert a new book
    pub async fn create(&self, input: &NewBook) -> Result<BookRecord, StoreError> {
        let id = Uuid::new_v4();

        sqlx::query(
            r#"
            INSERT INTO books (id, title, published, author, genres, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(uuid_to_str(id))
        .bind(&input.title)
        .bind(input.published)
        .bind(&input.author)
        .bind(vec_to_json(&input.genres))
        .bind(now_iso8601())
        .execute(&self.pool)
        .await?;

        self.get_by_id(id)
            .await?
            .ok_or(StoreError::Database(sqlx::Error::RowNotFound))
    }

    /// List books in insertion order, narrowed by the filter
    pub async fn list(&self, filter: &BookFilter) -> Result<Vec<BookRecord>, StoreError> {
        let mut conditions = Vec::new();
        if filter.author.is_some() {
            conditions.push("author = ?".to_string());
        }
        if filter.genre.is_some() {
            conditions.push(json_array_contains_sql("genres"));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", conditions.join(" AND "))
        };
        let sql = format!(
            "SELECT {} FROM books{} ORDER BY rowid",
            BOOK_COLUMNS, where_clause
        );

        let mut query = sqlx::query_as::<_, BookRecord>(&sql);
        if let Some(author) = &filter.author {
            query = query.bind(author);
        }
        if let Some(genre) = &filter.genre {
            query = query.bind(genre);
        }

        Ok(query.fetch_all(&self.pool).await?)
    }

    /// Total number of books
    pub async fn count(&self) -> Result<i64, StoreError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM books")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Count books per author name in one grouped query.
    /// Names without books are present in the result with a count of 0.
    pub async fn count_by_authors(
        &self,
        names: &[String],
    ) -> Result<HashMap<String, i64>, StoreError> {
        let mut counts: HashMap<String, i64> = names.iter().map(|n| (n.clone(), 0)).collect();
        if names.is_empty() {
            return Ok(counts);
        }

        let sql = format!(
            "SELECT author, COUNT(*) FROM books WHERE author IN ({}) GROUP BY author",
            numbered_placeholders(names.len())
        );
        let mut query = sqlx::query_as::<_, (String, i64)>(&sql);
        for name in names {
            query = query.bind(name);
        }

        for (author, count) in query.fetch_all(&self.pool).await? {
            counts.insert(author, count);
        }

        Ok(counts)
    }
}
