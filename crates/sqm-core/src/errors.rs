//! Error types for sqmark's pure transforms.
//!
//! Storage errors live in `sqm-store` and configuration errors in
//! `sqm-config`. They converge into `anyhow` in `sqm-cli`.

use thiserror::Error;

/// Errors raised by core value parsing.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (unknown format name, bad value).
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Whole-payload import failures. Any of these leaves the store untouched.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The payload is not valid JSON.
    #[error("Import payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload parsed, but the top level is not an array.
    #[error("Import payload must be a JSON array, got {found}")]
    NotAnArray { found: &'static str },

    /// An element of the array is not an object.
    #[error("Import element {index} must be an object, got {found}")]
    NotAnObject { index: usize, found: &'static str },
}

/// Name of a JSON value's kind, for error messages.
#[must_use]
pub const fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
