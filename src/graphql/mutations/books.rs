use super::prelude::*;

#[derive(Default)]
pub struct BookMutations;

#[Object]
impl BookMutations {
    /// Add a book. Rejected input comes back as `BAD_USER_INPUT` with the
    /// submitted arguments under `invalidArgs`.
    async fn add_book(
        &self,
        ctx: &Context<'_>,
        title: String,
        author: String,
        published: i32,
        genres: Option<Vec<String>>,
    ) -> Result<Book> {
        let store = ctx.data_unchecked::<SharedStore>();
        let args = AddBookArgs {
            title,
            author,
            published,
            genres,
        };

        let input = args.to_new_book();
        input.validate().or_input_error(&args)?;

        let record = store.create_book(input).await.or_input_error(&args)?;

        tracing::info!(
            book_id = %record.id,
            title = %record.title,
            author = %record.author,
            "Book added"
        );

        Ok(Book::from(record))
    }
}
