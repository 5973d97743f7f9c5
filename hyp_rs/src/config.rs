//! Configuration of the demo application.

use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::LevelFilter;
use semver::Version;
use thiserror::Error;

/// Name of environment variable which overrides the log level.
pub const LOG_LEVEL_VAR: &str = "HYP_LOG";

/// Name of environment variable which overrides the directory of log files.
pub const LOG_DIR_VAR: &str = "HYP_LOG_DIR";

const DEFAULT_LOG_DIR: &str = "logs";

const APP_NAME: &str = env!("CARGO_CRATE_NAME", "application must be compiled by Cargo");
const APP_VERSION_STR: &str = env!("CARGO_PKG_VERSION", "application must be compiled by Cargo");

/// Error that can happen when the configuration is built.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("application version is not a semver: {0}")]
    Version(#[from] semver::Error),

    #[error("unknown log level `{0}` in HYP_LOG")]
    LogLevel(String),
}

/// Configuration of the application.
#[derive(Debug, Clone)]
pub struct Config {
    name: String,
    version: Version,
    log_level: LevelFilter,
    log_dir: PathBuf,
}

impl Config {
    pub const fn new(
        name: String,
        version: Version,
        log_level: LevelFilter,
        log_dir: PathBuf,
    ) -> Self {
        Self {
            name,
            version,
            log_level,
            log_dir,
        }
    }

    /// Creates configuration from the build of this crate and the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let version = APP_VERSION_STR.parse()?;
        let log_level = match env::var(LOG_LEVEL_VAR) {
            Ok(level) => parse_level(&level)?,
            Err(_) => LevelFilter::Debug,
        };
        let log_dir = env::var_os(LOG_DIR_VAR)
            .filter(|dir| !dir.is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_LOG_DIR), PathBuf::from);
        Ok(Self::new(APP_NAME.to_string(), version, log_level, log_dir))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &Version {
        &self.version
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }
}

fn parse_level(level: &str) -> Result<LevelFilter, ConfigError> {
    LevelFilter::from_str(level.trim()).map_err(|_| ConfigError::LogLevel(level.to_string()))
}
