//! Store error classification
//!
//! Constraint rejections are the user's fault and come back as
//! [`StoreError::Validation`]; everything else (pool exhaustion, I/O, decode
//! failures) stays a [`StoreError::Database`].

use sqlx::error::ErrorKind;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store refused the record (uniqueness, required field, length)
    #[error("{message}")]
    Validation { message: String },

    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),
}

impl StoreError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            let message = match db_err.kind() {
                ErrorKind::UniqueViolation => Some(describe_column(db_err.message(), "must be unique")),
                ErrorKind::NotNullViolation => Some(describe_column(db_err.message(), "is required")),
                ErrorKind::CheckViolation => Some(describe_check(db_err.message())),
                _ => None,
            };
            if let Some(message) = message {
                return Self::Validation { message };
            }
        }
        Self::Database(err)
    }
}

/// SQLite reports `UNIQUE constraint failed: books.title`; turn that into
/// `title must be unique`.
fn describe_column(raw: &str, what: &str) -> String {
    let target = raw.rsplit(": ").next().unwrap_or(raw);
    let column = target.rsplit('.').next().unwrap_or(target);
    format!("{} {}", column, what)
}

/// Named CHECK constraints from the table definitions in [`super::schema`]
fn describe_check(raw: &str) -> String {
    let name = raw.rsplit(": ").next().unwrap_or(raw);
    match name {
        "title_min_length" => "title must be at least 2 characters".to_string(),
        "name_not_empty" => "name must not be empty".to_string(),
        other => format!("constraint {} violated", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_describe_unique_violation() {
        assert_eq!(
            describe_column("UNIQUE constraint failed: books.title", "must be unique"),
            "title must be unique"
        );
    }

    #[test]
    fn test_describe_not_null_violation() {
        assert_eq!(
            describe_column("NOT NULL constraint failed: authors.born", "is required"),
            "born is required"
        );
    }

    #[test]
    fn test_describe_named_checks() {
        assert_eq!(
            describe_check("CHECK constraint failed: title_min_length"),
            "title must be at least 2 characters"
        );
        assert_eq!(
            describe_check("CHECK constraint failed: something_else"),
            "constraint something_else violated"
        );
    }

    #[test]
    fn test_non_database_errors_are_systemic() {
        let err = StoreError::from(sqlx::Error::PoolTimedOut);
        assert_matches!(err, StoreError::Database(sqlx::Error::PoolTimedOut));
    }
}
