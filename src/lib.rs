//! Catalog backend: books and authors over GraphQL, persisted in SQLite.

pub mod api;
pub mod app;
pub mod config;
pub mod db;
pub mod graphql;
pub mod logging;

pub use app::{AppState, build_app};
