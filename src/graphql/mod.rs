//! GraphQL API for the catalog
//!
//! Queries and mutations are split per entity under `queries/` and
//! `mutations/`, each a `#[derive(Default)]` struct with an `#[Object]` impl,
//! merged into [`QueryRoot`](schema::QueryRoot) and
//! [`MutationRoot`](schema::MutationRoot).

pub mod errors;
pub mod loaders;
pub mod mutations;
pub mod queries;
mod schema;
pub mod types;

pub use schema::{CatalogSchema, MutationRoot, QueryRoot, build_schema};
