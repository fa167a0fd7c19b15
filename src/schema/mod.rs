//! Climate schema and document layout definitions.
//!
//! The quantitative properties an aggregate query summarises are described
//! here as data rather than written into query text, so every aggregate
//! result type is generated from a single source of truth.
//!
//! # Overview
//!
//! 1. **Core Types** (`definition.rs`):
//!    - `VariableLayout` - Monthly (12 values), indexed series, or a single scalar
//!    - `ClimateVariable` - A named variable with its layout
//!    - `ClimatePeriod` - A nested property path (`2021-2040.MPI-ESM1-2-HR.ssp370`) and its variables
//!    - `ClimateSchema` - All periods, with validation and leaf-field iteration
//!    - `SchemaField` - One quantitative leaf (`1970-2000.tavg[0]`)
//!
//! 2. **Built-in Schema** (`worldclim.rs`):
//!    - `ClimateSchema::worldclim()` - WorldClim 2.1 historical normals plus one CMIP6 projection
//!
//! 3. **Document Layout** (`layout.rs`):
//!    - `DocumentLayout` - Attribute names of the cell shape, centroid and climate properties
//!
//! # Document Shape
//!
//! ```text
//! {
//!   "_key": "...",
//!   "geometry": { GeoJSON Polygon of the grid cell },
//!   "geometry_point": { GeoJSON Point at the cell centroid },
//!   "properties": {
//!     "1970-2000": { "tavg": [12 values], ..., "bio": [19 values], "elev": 312 },
//!     "2021-2040": { "MPI-ESM1-2-HR": { "ssp370": { "tmin": [12 values], ... } } }
//!   }
//! }
//! ```

mod definition;
mod layout;
mod worldclim;

pub use definition::{ClimatePeriod, ClimateSchema, ClimateVariable, SchemaField, VariableLayout};
pub use layout::DocumentLayout;
pub use worldclim::{
    BIOCLIM_VARIABLES, FUTURE_MONTHLY_VARIABLES, FUTURE_PROJECTIONS, HISTORICAL_MONTHLY_VARIABLES,
    HISTORICAL_PERIOD, MONTHS,
};

use thiserror::Error;

/// Schema validation error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("Period path must not be empty")]
    EmptyPeriodPath,

    #[error("Period '{period}' contains an empty path segment")]
    EmptyPathSegment { period: String },

    #[error("Period '{period}' has a variable with an empty name")]
    EmptyVariableName { period: String },

    #[error("Variable '{variable}' in period '{period}' is a series of length zero")]
    EmptySeries { period: String, variable: String },

    #[error("Period '{period}' is defined more than once")]
    DuplicatePeriod { period: String },

    #[error("Variable '{variable}' is defined more than once in period '{period}'")]
    DuplicateVariable { period: String, variable: String },

    #[error("Path '{path}' is used both as a value and as a nested object")]
    PathCollision { path: String },

    #[error("Document attribute for {role} must not be empty")]
    EmptyAttribute { role: &'static str },
}
