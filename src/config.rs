use crate::domain::constants::generation::{DEFAULT_EVENT_COUNT, DEFAULT_OUTPUT_PATH};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

pub const ENV_PREFIX: &str = "PERF_FIXTURES";

/// Config files, relative to the working directory; the extension picks the format
pub const CONFIG_FILE: &str = "config/perf_fixtures";
pub const LOCAL_CONFIG_FILE: &str = "config/perf_fixtures_local";

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub generator: GeneratorSettings,
    pub output: OutputSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeneratorSettings {
    pub event_count: usize,
    /// Fixed seed for reproducible fixtures; entropy when absent
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputSettings {
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: String,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::layered(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
    }

    fn layered(environment: Environment) -> Result<Self, ConfigError> {
        let config = Config::builder()
            // Start with default values
            .set_default("generator.event_count", DEFAULT_EVENT_COUNT as i64)?
            .set_default("output.path", DEFAULT_OUTPUT_PATH)?
            .set_default("logging.level", "warn")?
            // Add configuration files if they exist
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(File::with_name(LOCAL_CONFIG_FILE).required(false))
            // Add environment variables with prefix
            .add_source(environment)
            .build()?;

        config.try_deserialize()
    }
}
