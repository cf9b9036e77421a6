use clap::Parser;
use log::kv::{ToValue, Value};

/// Renders the ten-city sample as a density table.
#[derive(Parser, Debug, PartialEq)]
#[command(version, about)]
pub struct CliArgs {
    /// Path to a TOML config file.
    #[arg(short, long)]
    pub config: Option<String>,
    /// Reject blank lines in the input instead of skipping them.
    #[arg(long)]
    pub strict: bool,
    /// Log parsing details.
    #[arg(short, long)]
    pub verbose: bool,
}

impl ToValue for CliArgs {
    fn to_value(&self) -> Value<'_> {
        Value::from_debug(self)
    }
}
