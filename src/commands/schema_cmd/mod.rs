mod cli_tests;
mod execute;
mod output;

use std::error::Error;

use clap::Args;

use crate::commands::{CommandRunner, Execute, QueryContext};
use crate::output::{OutputFormat, Outputable};

pub use execute::{PeriodEntry, SchemaResult, VariableEntry};

/// List the climate fields covered by aggregate result types
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  worldclim_aql schema                          # Periods and variables
  worldclim_aql schema --fields                 # Every aggregated field path
  worldclim_aql --config cells.json schema      # Schema overridden by a config file")]
pub struct SchemaCmd {
    /// Also list every field path, one per aggregated value
    #[arg(long, default_value_t = false)]
    pub fields: bool,
}

impl CommandRunner for SchemaCmd {
    fn run(self, context: &QueryContext, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let result = self.execute(context)?;
        Ok(result.format(format))
    }
}
