//! Translation of store failures into client-facing GraphQL errors.
//!
//! A rejected create or update becomes a `BAD_USER_INPUT` error carrying the
//! arguments the client sent under `invalidArgs`. Anything systemic is
//! surfaced as `INTERNAL_SERVER_ERROR` with no argument payload.

use async_graphql::{ErrorExtensions, Result};
use serde::Serialize;

use crate::db::StoreError;

pub const BAD_USER_INPUT: &str = "BAD_USER_INPUT";
pub const INTERNAL_SERVER_ERROR: &str = "INTERNAL_SERVER_ERROR";

/// Input error with the offending arguments attached
pub fn user_input_error<A: Serialize>(message: &str, args: &A) -> async_graphql::Error {
    let payload = match async_graphql::to_value(args) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(error = %e, "Could not serialize invalid arguments");
            None
        }
    };

    async_graphql::Error::new(message).extend_with(|_, ext| {
        ext.set("code", BAD_USER_INPUT);
        if let Some(payload) = payload {
            ext.set("invalidArgs", payload);
        }
    })
}

pub fn internal_error(err: &StoreError) -> async_graphql::Error {
    tracing::error!(error = %err, "Store operation failed");
    async_graphql::Error::new(err.to_string())
        .extend_with(|_, ext| ext.set("code", INTERNAL_SERVER_ERROR))
}

/// Route a store error to the right client error
pub fn to_input_error<A: Serialize>(err: StoreError, args: &A) -> async_graphql::Error {
    match err {
        StoreError::Validation { message } => user_input_error(&message, args),
        other => internal_error(&other),
    }
}

pub trait StoreResultExt<T> {
    /// Validation failures become input errors carrying `args`
    fn or_input_error<A: Serialize>(self, args: &A) -> Result<T>;

    /// Every failure is treated as systemic
    fn or_internal(self) -> Result<T>;
}

impl<T> StoreResultExt<T> for std::result::Result<T, StoreError> {
    fn or_input_error<A: Serialize>(self, args: &A) -> Result<T> {
        self.map_err(|e| to_input_error(e, args))
    }

    fn or_internal(self) -> Result<T> {
        self.map_err(|e| internal_error(&e))
    }
}
