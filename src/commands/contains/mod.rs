mod execute;

use std::error::Error;

use clap::Args;

use crate::commands::{CommandRunner, CommonArgs, Execute, QueryContext};
use crate::output::{OutputFormat, Outputable};

/// Generate a query for cells whose centroid lies inside a geometry
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  worldclim_aql contains -c worldclim -g @region.geojson              # First 10 cell keys
  worldclim_aql contains -c worldclim -g @region.geojson -r DATA -l 50
  worldclim_aql contains -c worldclim -g @region.geojson --no-limit
  worldclim_aql contains -c worldclim -g @region.geojson -r MAX        # Maxima over the region")]
pub struct ContainsCmd {
    #[command(flatten)]
    pub common: CommonArgs,
}

impl CommandRunner for ContainsCmd {
    fn run(self, context: &QueryContext, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let result = self.execute(context)?;
        Ok(result.format(format))
    }
}
