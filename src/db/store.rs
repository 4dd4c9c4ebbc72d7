//! The entity store contract the resolvers are written against.
//!
//! Resolvers only ever see a [`SharedStore`], so tests can swap the SQLite
//! [`Database`] for a double.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use super::{AuthorRecord, BookFilter, BookRecord, Database, NewAuthor, NewBook, StoreError};

pub type SharedStore = Arc<dyn EntityStore>;

#[async_trait]
pub trait EntityStore: Send + Sync {
    async fn create_book(&self, input: NewBook) -> Result<BookRecord, StoreError>;

    async fn create_author(&self, input: NewAuthor) -> Result<AuthorRecord, StoreError>;

    async fn find_books(&self, filter: &BookFilter) -> Result<Vec<BookRecord>, StoreError>;

    async fn find_authors(&self) -> Result<Vec<AuthorRecord>, StoreError>;

    /// First match by insertion order, or `None`
    async fn find_author_by_name(&self, name: &str) -> Result<Option<AuthorRecord>, StoreError>;

    async fn count_books(&self) -> Result<i64, StoreError>;

    async fn count_authors(&self) -> Result<i64, StoreError>;

    /// Book counts keyed by author name; every requested name is present
    async fn count_books_by_authors(
        &self,
        names: &[String],
    ) -> Result<HashMap<String, i64>, StoreError>;

    async fn save_author(&self, record: &AuthorRecord) -> Result<AuthorRecord, StoreError>;
}

#[async_trait]
impl EntityStore for Database {
    async fn create_book(&self, input: NewBook) -> Result<BookRecord, StoreError> {
        self.books().create(&input).await
    }

    async fn create_author(&self, input: NewAuthor) -> Result<AuthorRecord, StoreError> {
        self.authors().create(&input).await
    }

    async fn find_books(&self, filter: &BookFilter) -> Result<Vec<BookRecord>, StoreError> {
        self.books().list(filter).await
    }

    async fn find_authors(&self) -> Result<Vec<AuthorRecord>, StoreError> {
        self.authors().list().await
    }

    async fn find_author_by_name(&self, name: &str) -> Result<Option<AuthorRecord>, StoreError> {
        self.authors().find_first_by_name(name).await
    }

    async fn count_books(&self) -> Result<i64, StoreError> {
        self.books().count().await
    }

    async fn count_authors(&self) -> Result<i64, StoreError> {
        self.authors().count().await
    }

    async fn count_books_by_authors(
        &self,
        names: &[String],
    ) -> Result<HashMap<String, i64>, StoreError> {
        self.books().count_by_authors(names).await
    }

    async fn save_author(&self, record: &AuthorRecord) -> Result<AuthorRecord, StoreError> {
        self.authors().save(record).await
    }
}
