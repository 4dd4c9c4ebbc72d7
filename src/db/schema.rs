//! Table bootstrap
//!
//! Creates the `books` and `authors` tables when they are missing. Existing
//! tables are never altered.

use sqlx::SqlitePool;
use tracing::{debug, info};

struct TableDef {
    name: &'static str,
    create_sql: &'static str,
}

const TABLES: &[TableDef] = &[
    TableDef {
        name: "books",
        create_sql: r#"
            CREATE TABLE IF NOT EXISTS books (
                id TEXT PRIMARY KEY NOT NULL,
                title TEXT NOT NULL UNIQUE
                    CONSTRAINT title_min_length CHECK (length(title) >= 2),
                published INTEGER,
                author TEXT NOT NULL,
                genres TEXT NOT NULL DEFAULT '[]',
                created_at TEXT NOT NULL
            )
        "#,
    },
    TableDef {
        name: "authors",
        create_sql: r#"
            CREATE TABLE IF NOT EXISTS authors (
                id TEXT PRIMARY KEY NOT NULL,
                name TEXT NOT NULL
                    CONSTRAINT name_not_empty CHECK (length(name) >= 1),
                born INTEGER NOT NULL,
                created_at TEXT NOT NULL
            )
        "#,
    },
];

const INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_books_author ON books (author)",
    "CREATE INDEX IF NOT EXISTS idx_authors_name ON authors (name)",
];

/// Check if a table exists in the database
async fn table_exists(pool: &SqlitePool, table_name: &str) -> Result<bool, sqlx::Error> {
    let result: Option<(String,)> =
        sqlx::query_as("SELECT name FROM sqlite_master WHERE type='table' AND name = ?")
            .bind(table_name)
            .fetch_optional(pool)
            .await?;

    Ok(result.is_some())
}

/// Create any missing tables and indexes. Returns the names of tables created.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<Vec<String>, sqlx::Error> {
    let mut created = Vec::new();

    for table in TABLES {
        if table_exists(pool, table.name).await? {
            debug!(table = table.name, "Table already present");
            continue;
        }
        sqlx::query(table.create_sql).execute(pool).await?;
        info!(table = table.name, "Created table");
        created.push(table.name.to_string());
    }

    for index in INDEXES {
        sqlx::query(index).execute(pool).await?;
    }

    Ok(created)
}
