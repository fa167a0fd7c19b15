//! AQL building blocks shared by every generated query.
//!
//! - Bind parameter maps (`BindVars`)
//! - String literal escaping for quoted attribute names and object keys
//! - The error type returned by query generation

mod escape;
mod query;

pub use escape::{escape_string, escape_string_for_quote, quote_string};
pub use query::BindVars;

use thiserror::Error;

use crate::schema::SchemaError;

/// Query generation error types
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Invalid collection name '{name}': {reason}")]
    InvalidCollection { name: String, reason: &'static str },

    #[error("Unknown result type '{value}' (expected one of KEY, SHAPE, DATA, MIN, AVG, MAX, STD, VAR)")]
    UnknownResultType { value: String },

    #[error("Unknown sort '{value}' (expected one of NO, ASC, DESC)")]
    UnknownSort { value: String },

    #[error("Invalid distance range: {message}")]
    InvalidDistanceRange { message: String },

    #[error(transparent)]
    InvalidSchema(#[from] SchemaError),

    #[error("Failed to serialize bind parameter '{name}': {source}")]
    Serialization {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}
