use clap::Parser;

use worldclim_aql::cli::Args;
use worldclim_aql::commands::QueryContext;
use worldclim_aql::config::ConfigFile;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    let args = Args::parse();
    let config = ConfigFile::load(args.config.as_deref())?;
    let context = QueryContext::from_config(&config)?;
    let output = args.command.run(&context, args.format)?;
    println!("{}", output);
    Ok(())
}
