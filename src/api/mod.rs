//! API route definitions
//!
//! The primary API is GraphQL at /graphql. Health probes live beside it.

pub mod graphql;
pub mod health;
