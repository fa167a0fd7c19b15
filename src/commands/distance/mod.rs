mod cli_tests;
mod execute;

use std::error::Error;

use clap::Args;

use crate::commands::{CommandRunner, CommonArgs, Execute, QueryContext};
use crate::output::{OutputFormat, Outputable};
use crate::types::Sort;

/// Generate a query for cells whose centroid lies within a distance range
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  worldclim_aql distance -c worldclim -g '{\"type\":\"Point\",\"coordinates\":[10,45]}' --max 5000
  worldclim_aql distance -c worldclim -g @site.geojson --max 5000 -s ASC   # Nearest first
  worldclim_aql distance -c worldclim -g @site.geojson --min 1000 --max 9000 -r SHAPE
  worldclim_aql distance -c worldclim -g @site.geojson --max 5000 -r AVG    # Averages over the cells")]
pub struct DistanceCmd {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Minimum centroid distance in meters
    #[arg(long)]
    pub min: Option<f64>,

    /// Maximum centroid distance in meters
    #[arg(long)]
    pub max: Option<f64>,

    /// Sort records by distance: NO, ASC or DESC
    #[arg(short, long, default_value = "NO")]
    pub sort: Sort,
}

impl CommandRunner for DistanceCmd {
    fn run(self, context: &QueryContext, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let result = self.execute(context)?;
        Ok(result.format(format))
    }
}
