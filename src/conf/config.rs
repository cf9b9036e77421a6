use crate::{
    conf::{InputConfig, LayoutConfig},
    core::{
        CliArgs,
        CityError::{self, ConfigParsingError},
    },
};
use config::{Config as CConfig, ConfigBuilder, Environment, builder::DefaultState};
use serde::{Deserialize, Serialize};

const ENV_PREFIX: &str = "CITYDENSITY";

#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
}

impl Config {
    pub fn from_str(toml_str: &str) -> Result<Config, CityError> {
        let builder = CConfig::builder()
            .add_source(config::File::from_str(toml_str, config::FileFormat::Toml));
        Self::build(builder)
    }

    /// Loads the optional TOML file at `path`, then applies `CITYDENSITY__*` overrides.
    pub fn load(path: Option<&str>) -> Result<Config, CityError> {
        let mut builder = CConfig::builder();
        if let Some(path) = path {
            builder = builder.add_source(
                config::File::new(path, config::FileFormat::Toml).required(true),
            );
        }
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );
        Self::build(builder)
    }

    /// Config for a CLI run: `--config` file plus env overrides, with `--strict` applied last.
    pub fn from_args(args: &CliArgs) -> Result<Config, CityError> {
        let mut config = Self::load(args.config.as_deref())?;
        if args.strict {
            config.input.skip_blank_lines = false;
        }
        Ok(config)
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Config, CityError> {
        let config = builder
            .build()
            .map_err(|e| ConfigParsingError(e.to_string()))?
            .try_deserialize::<Config>()
            .map_err(|e| ConfigParsingError(e.to_string()))?;
        return Ok(config);
    }
}
