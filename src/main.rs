use anyhow::Context;
use clap::Parser;
use log::info;

use citydensity::conf::Config;
use citydensity::core::{CliArgs, setup_logging};
use citydensity::sample::SAMPLE_CSV;
use citydensity::table::CityDataProcessor;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    setup_logging(args.verbose);
    info!(args = &args; "Citydensity started.");

    let config = Config::from_args(&args).context("failed to load config")?;

    let mut processor = CityDataProcessor::with_config(SAMPLE_CSV, &config)
        .context("failed to parse sample dataset")?;
    let stdout = std::io::stdout();
    processor
        .process(&mut stdout.lock())
        .context("failed to write table")?;
    Ok(())
}
