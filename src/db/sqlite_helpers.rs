//! SQLite helper utilities for type conversion
//!
//! SQLite doesn't natively support UUIDs or arrays. Ids are stored as TEXT and
//! genre lists as JSON strings; this module converts between the two worlds.

use anyhow::{Result, anyhow};
use chrono::Utc;
use serde::{Serialize, de::DeserializeOwned};
use uuid::Uuid;

// ============================================================================
// UUID Helpers
// ============================================================================

/// Convert a UUID to a SQLite-compatible string
#[inline]
pub fn uuid_to_str(id: Uuid) -> String {
    id.to_string()
}

/// Parse a SQLite string back to a UUID
#[inline]
pub fn str_to_uuid(s: &str) -> Result<Uuid> {
    Uuid::parse_str(s).map_err(|e| anyhow!("Invalid UUID '{}': {}", s, e))
}

/// Decode a UUID column, surfacing parse failures as a sqlx decode error
pub fn decode_uuid(s: &str) -> sqlx::Result<Uuid> {
    str_to_uuid(s).map_err(|e| sqlx::Error::Decode(e.into()))
}

// ============================================================================
// Array/Vec Helpers (stored as JSON strings in SQLite)
// ============================================================================

/// Serialize a Vec to a JSON string for SQLite storage
#[inline]
pub fn vec_to_json<T: Serialize>(v: &[T]) -> String {
    serde_json::to_string(v).unwrap_or_else(|_| "[]".to_string())
}

/// Deserialize a JSON string from SQLite to a Vec
#[inline]
pub fn json_to_vec<T: DeserializeOwned>(s: &str) -> Vec<T> {
    serde_json::from_str(s).unwrap_or_default()
}

// ============================================================================
// Timestamp Helpers (stored as ISO8601 TEXT in SQLite)
// ============================================================================

/// Get current UTC timestamp as ISO8601 string for SQLite
#[inline]
pub fn now_iso8601() -> String {
    Utc::now().to_rfc3339()
}

// ============================================================================
// Query Building Helpers
// ============================================================================

/// Build a SQL fragment to check if a value exists in a JSON array column
pub fn json_array_contains_sql(column: &str) -> String {
    format!(
        "EXISTS (SELECT 1 FROM json_each({}) WHERE value = ?)",
        column
    )
}

/// Numbered placeholders `?1, ?2, ...` for an `IN (...)` list
pub fn numbered_placeholders(count: usize) -> String {
    (1..=count)
        .map(|i| format!("?{}", i))
        .collect::<Vec<_>>()
        .join(", ")
}
