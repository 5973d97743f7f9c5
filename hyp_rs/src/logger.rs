//! Logging of the demo: console for humans, one file per run for the record.
//!
//! Records of `hyp_ecs` are verbose (every write to an entity is traced),
//! so they go to the file only.

use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::append::file::FileAppender;
use log4rs::config::runtime::ConfigErrors;
use log4rs::config::{Appender, Logger, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::Handle;
use thiserror::Error;

const CONSOLE: &str = "console";
const RUN_FILE: &str = "run_file";
const ECS_TARGET: &str = "hyp_ecs";

const CONSOLE_PATTERN: &str = "{d(%H:%M:%S%.3f)} {h({l:>5})} {m}{n}";
const FILE_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.6f)} {l:<5} [{T}] {t}: {m}{n}";

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("cannot open log file `{path}`: {source}")]
    File { path: PathBuf, source: io::Error },

    #[error("invalid logger configuration: {0}")]
    Config(#[from] ConfigErrors),

    #[error("global logger is already set: {0}")]
    SetLogger(#[from] log::SetLoggerError),
}

/// Installs the global logger, writing the run file into `dir`.
pub fn init(level: LevelFilter, dir: &Path) -> Result<Handle, LoggerError> {
    let config = build_config(level, &run_file_path(dir, Local::now()))?;
    Ok(log4rs::init_config(config)?)
}

fn build_config(level: LevelFilter, path: &Path) -> Result<log4rs::Config, LoggerError> {
    let config = log4rs::Config::builder()
        .appender(Appender::builder().build(CONSOLE, Box::new(console())))
        .appender(Appender::builder().build(RUN_FILE, Box::new(run_file(path)?)))
        .logger(
            Logger::builder()
                .appender(RUN_FILE)
                .additive(false)
                .build(ECS_TARGET, level),
        )
        .build(
            Root::builder()
                .appender(CONSOLE)
                .appender(RUN_FILE)
                .build(level),
        )?;
    Ok(config)
}

fn console() -> ConsoleAppender {
    ConsoleAppender::builder()
        .target(Target::Stdout)
        .encoder(Box::new(PatternEncoder::new(CONSOLE_PATTERN)))
        .build()
}

fn run_file(path: &Path) -> Result<FileAppender, LoggerError> {
    FileAppender::builder()
        .append(false)
        .encoder(Box::new(PatternEncoder::new(FILE_PATTERN)))
        .build(path)
        .map_err(|source| LoggerError::File {
            path: path.to_path_buf(),
            source,
        })
}

// Sortable and free of characters forbidden in Windows file names.
fn run_file_path(dir: &Path, started: DateTime<Local>) -> PathBuf {
    dir.join(format!("hyp_{}.log", started.format("%Y%m%d_%H%M%S%.3f")))
}
