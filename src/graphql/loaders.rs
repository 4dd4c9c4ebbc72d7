//! GraphQL DataLoaders for batching database queries
//!
//! `allAuthors { bookCount }` would otherwise issue one count query per
//! author. [`BookCountLoader`] collects every author name requested in the
//! same tick and answers them with a single grouped count:
//! `SELECT author, COUNT(*) FROM books WHERE author IN (...) GROUP BY author`.
//!
//! The loader is registered without a cache, so each resolution reads the
//! current book collection.

use std::collections::HashMap;
use std::sync::Arc;

use async_graphql::dataloader::Loader;

use crate::db::{SharedStore, StoreError};

pub struct BookCountLoader {
    store: SharedStore,
}

impl BookCountLoader {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }
}

impl Loader<String> for BookCountLoader {
    type Value = i64;
    type Error = Arc<StoreError>;

    async fn load(&self, keys: &[String]) -> Result<HashMap<String, Self::Value>, Self::Error> {
        tracing::debug!(author_count = keys.len(), "Batch loading book counts");

        let counts = self
            .store
            .count_books_by_authors(keys)
            .await
            .map_err(Arc::new)?;

        Ok(counts)
    }
}
