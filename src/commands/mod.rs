//! Command definitions and implementations.
//!
//! Each command is defined in its own module with:
//! - The command struct with clap attributes for CLI parsing
//! - `execute.rs` building the command result from a `QueryContext`
//! - `*_tests.rs` files for CLI parsing and execution

mod contains;
mod distance;
mod generated;
mod intersects;
mod schema_cmd;

pub use contains::ContainsCmd;
pub use distance::DistanceCmd;
pub use generated::GeneratedQuery;
pub use intersects::IntersectsCmd;
pub use schema_cmd::SchemaCmd;

use clap::{Args, Subcommand};
use geojson::Geometry;
use std::error::Error;
use std::fs;

use crate::config::{ConfigError, ConfigFile};
use crate::output::{OutputFormat, Outputable};
use crate::queries::WorldClimQueries;
use crate::types::{Collection, Paging, ResultType};

/// Everything a command needs besides its own arguments.
#[derive(Debug, Clone, Default)]
pub struct QueryContext {
    pub queries: WorldClimQueries,
    /// Paging applied when the command line leaves it out
    pub paging: Paging,
}

impl QueryContext {
    pub fn from_config(config: &ConfigFile) -> Result<Self, ConfigError> {
        Ok(Self {
            queries: config.queries()?,
            paging: config.paging,
        })
    }
}

/// Trait for executing commands with command-specific result types.
pub trait Execute {
    type Output: Outputable;

    fn execute(self, context: &QueryContext) -> Result<Self::Output, Box<dyn Error>>;
}

/// Common trait for command dispatch.
pub trait CommandRunner {
    fn run(self, context: &QueryContext, format: OutputFormat) -> Result<String, Box<dyn Error>>;
}

/// Arguments shared by the query-generating commands.
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Collection holding the grid cells
    #[arg(short, long)]
    pub collection: String,

    /// Reference GeoJSON geometry, inline or `@path/to/file.geojson`
    #[arg(short, long)]
    pub geometry: String,

    /// Result type: KEY, SHAPE, DATA, MIN, AVG, MAX, STD or VAR
    #[arg(short, long, default_value = "KEY")]
    pub result_type: ResultType,

    /// Index of the first record (record result types only)
    #[arg(long)]
    pub start: Option<u64>,

    /// Maximum number of records (record result types only)
    #[arg(short, long, conflicts_with = "no_limit")]
    pub limit: Option<u64>,

    /// Return every matching record
    #[arg(long, default_value_t = false)]
    pub no_limit: bool,
}

impl CommonArgs {
    pub fn collection(&self) -> Result<Collection, Box<dyn Error>> {
        Ok(Collection::new(self.collection.as_str())?)
    }

    /// Parse the reference geometry, reading it from a file for `@path` values.
    pub fn geometry(&self) -> Result<Geometry, Box<dyn Error>> {
        let text = match self.geometry.strip_prefix('@') {
            Some(path) => fs::read_to_string(path)
                .map_err(|e| format!("Failed to read geometry file '{}': {}", path, e))?,
            None => self.geometry.clone(),
        };

        let geometry: Geometry = serde_json::from_str(&text)
            .map_err(|e| format!("Invalid GeoJSON geometry: {}", e))?;
        Ok(geometry)
    }

    /// Paging from the command line, falling back to `defaults` per field.
    pub fn paging(&self, defaults: &Paging) -> Paging {
        let start = self.start.or(defaults.start);
        if self.no_limit {
            Paging::new(start, None)
        } else {
            Paging::new(start, self.limit.or(defaults.limit))
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Cells whose centroid lies within a distance range of a geometry
    Distance(DistanceCmd),

    /// Cells whose centroid lies inside a geometry
    Contains(ContainsCmd),

    /// Cells whose shape intersects a geometry
    Intersects(IntersectsCmd),

    /// List the climate fields covered by aggregate result types
    Schema(SchemaCmd),
}

impl Command {
    /// Execute the command and return formatted output
    pub fn run(self, context: &QueryContext, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        match self {
            Command::Distance(cmd) => cmd.run(context, format),
            Command::Contains(cmd) => cmd.run(context, format),
            Command::Intersects(cmd) => cmd.run(context, format),
            Command::Schema(cmd) => cmd.run(context, format),
        }
    }
}
