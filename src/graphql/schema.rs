//! GraphQL schema definition with queries and mutations

use async_graphql::dataloader::DataLoader;
use async_graphql::extensions::Tracing;
use async_graphql::{EmptySubscription, MergedObject, Schema};

use crate::db::SharedStore;

use super::loaders::BookCountLoader;
use super::mutations::{AuthorMutations, BookMutations};
use super::queries::{AuthorQueries, BookQueries};

/// The GraphQL schema type
pub type CatalogSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

#[derive(MergedObject, Default)]
pub struct QueryRoot(BookQueries, AuthorQueries);

#[derive(MergedObject, Default)]
pub struct MutationRoot(BookMutations, AuthorMutations);

/// Build the GraphQL schema over the given store
pub fn build_schema(store: SharedStore) -> CatalogSchema {
    let book_counts = DataLoader::new(BookCountLoader::new(store.clone()), tokio::spawn);

    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(store)
    .data(book_counts)
    .extension(Tracing)
    .finish()
}
