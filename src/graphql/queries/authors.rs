use super::prelude::*;

#[derive(Default)]
pub struct AuthorQueries;

#[Object]
impl AuthorQueries {
    /// Total number of authors in the catalog
    async fn author_count(&self, ctx: &Context<'_>) -> Result<i64> {
        let store = ctx.data_unchecked::<SharedStore>();
        store.count_authors().await.or_internal()
    }

    /// All authors; `bookCount` is resolved in one batch per request
    async fn all_authors(&self, ctx: &Context<'_>) -> Result<Vec<Author>> {
        let store = ctx.data_unchecked::<SharedStore>();
        let records = store.find_authors().await.or_internal()?;
        Ok(records.into_iter().map(Author::from).collect())
    }
}
