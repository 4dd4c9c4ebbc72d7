use super::prelude::*;

#[derive(Default)]
pub struct BookQueries;

#[Object]
impl BookQueries {
    /// Total number of books in the catalog
    async fn book_count(&self, ctx: &Context<'_>) -> Result<i64> {
        let store = ctx.data_unchecked::<SharedStore>();
        store.count_books().await.or_internal()
    }

    /// Books in insertion order. `author` matches the author name exactly,
    /// `genre` keeps books listing that genre; both must hold when given.
    async fn all_books(
        &self,
        ctx: &Context<'_>,
        author: Option<String>,
        genre: Option<String>,
    ) -> Result<Vec<Book>> {
        let store = ctx.data_unchecked::<SharedStore>();
        let filter = BookFilter { author, genre };

        let records = store.find_books(&filter).await.or_internal()?;
        tracing::debug!(
            author = ?filter.author,
            genre = ?filter.genre,
            count = records.len(),
            "Listed books"
        );

        Ok(records.into_iter().map(Book::from).collect())
    }
}
