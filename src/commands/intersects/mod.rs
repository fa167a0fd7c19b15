mod cli_tests;
mod execute;

use std::error::Error;

use clap::Args;

use crate::commands::{CommandRunner, CommonArgs, Execute, QueryContext};
use crate::output::{OutputFormat, Outputable};

/// Generate a query for cells whose shape intersects a geometry
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  worldclim_aql intersects -c worldclim -g @track.geojson              # Cells touched by a track
  worldclim_aql intersects -c worldclim -g @track.geojson -r SHAPE --start 10
  worldclim_aql intersects -c worldclim -g @track.geojson -r STD")]
pub struct IntersectsCmd {
    #[command(flatten)]
    pub common: CommonArgs,
}

impl CommandRunner for IntersectsCmd {
    fn run(self, context: &QueryContext, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let result = self.execute(context)?;
        Ok(result.format(format))
    }
}
