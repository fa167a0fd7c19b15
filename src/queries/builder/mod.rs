//! Query building infrastructure.
//!
//! This module provides the trait and helpers every WorldClim query is built
//! with.
//!
//! # Architecture
//!
//! The query building system has three layers:
//!
//! 1. **Query Definition** - `QueryBuilder` trait defines what a query is
//! 2. **Composition** - `GeoQuery` combines a geo predicate, a result type and paging
//! 3. **Output** - `AqlQuery` carries the query text and its bind parameters
//!
//! # Example
//!
//! ```ignore
//! let query = GeoQuery {
//!     collection: &collection,
//!     geometry: &geometry,
//!     predicate: GeoPredicate::Contains,
//!     result_type: ResultType::Key,
//!     paging: Paging::default(),
//!     layout: &layout,
//!     schema: &schema,
//! };
//!
//! let compiled = AqlQuery::from_builder(&query)?;
//! ```

pub mod helpers;
pub mod params;
pub mod patterns;

use serde::Serialize;

use crate::aql::{BindVars, QueryError};

/// AQL query definition.
pub trait QueryBuilder: Send + Sync {
    /// Compile this query to AQL text.
    ///
    /// Caller-supplied values never appear in the text; they are referenced
    /// through `@name` and `@@name` placeholders.
    fn compile(&self) -> Result<String, QueryError>;

    /// Get the bind parameters referenced by the compiled text.
    fn parameters(&self) -> Result<BindVars, QueryError>;

    /// Get the number of parameters.
    fn param_count(&self) -> Result<usize, QueryError> {
        Ok(self.parameters()?.len())
    }
}

/// A compiled query ready to be sent to the database.
///
/// Serializes to `{"query": ..., "bindVars": ...}`, the body ArangoDB's
/// cursor API accepts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AqlQuery {
    pub query: String,
    #[serde(rename = "bindVars")]
    pub bind_vars: BindVars,
}

impl AqlQuery {
    /// Create a compiled query from a builder.
    pub fn from_builder(builder: &dyn QueryBuilder) -> Result<Self, QueryError> {
        Ok(AqlQuery {
            query: builder.compile()?,
            bind_vars: builder.parameters()?,
        })
    }

    /// Get the number of parameters in this query.
    pub fn param_count(&self) -> usize {
        self.bind_vars.len()
    }
}
