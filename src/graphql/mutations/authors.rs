use super::prelude::*;

#[derive(Default)]
pub struct AuthorMutations;

#[Object]
impl AuthorMutations {
    /// Add an author
    async fn add_author(&self, ctx: &Context<'_>, name: String, born: i32) -> Result<Author> {
        let store = ctx.data_unchecked::<SharedStore>();
        let args = AddAuthorArgs { name, born };

        let input = args.to_new_author();
        input.validate().or_input_error(&args)?;

        let record = store.create_author(input).await.or_input_error(&args)?;

        tracing::info!(author_id = %record.id, name = %record.name, "Author added");

        Ok(Author::from(record))
    }

    /// Set the birth year of the first author with this name.
    /// Returns null when no author has the name.
    async fn edit_author(
        &self,
        ctx: &Context<'_>,
        name: String,
        born: i32,
    ) -> Result<Option<Author>> {
        let store = ctx.data_unchecked::<SharedStore>();
        let args = EditAuthorArgs { name, born };

        let Some(mut record) = store.find_author_by_name(&args.name).await.or_internal()? else {
            tracing::debug!(name = %args.name, "No author to edit");
            return Ok(None);
        };

        record.born = args.born;
        let saved = store.save_author(&record).await.or_input_error(&args)?;

        tracing::info!(author_id = %saved.id, born = saved.born, "Author edited");

        Ok(Some(Author::from(saved)))
    }
}
