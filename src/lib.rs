//! worldclim_aql library - AQL query generation for WorldClim grid cells
//!
//! Builds parameterized ArangoDB queries that select climate grid cells by
//! their relation to a GeoJSON geometry (distance, containment or
//! intersection) and either return the cells or aggregate their climate
//! values.

pub mod aql;
pub mod cli;
pub mod commands;
pub mod config;
pub mod output;
pub mod queries;
pub mod schema;
pub mod types;

#[macro_use]
pub mod test_macros;

pub use aql::{BindVars, QueryError};
pub use queries::{
    AqlQuery, WorldClimQueries, worldclim_contains_aql, worldclim_distance_aql,
    worldclim_intersects_aql,
};
pub use schema::{ClimateSchema, DocumentLayout, SchemaError};
pub use types::{Aggregate, Collection, DistanceRange, Paging, ResultType, Sort};
