// src/logging/mod.rs
use std::fs::{self, OpenOptions};
use std::io;

use thiserror::Error;

use crate::core::Config;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Logger already initialised: {0}")]
    AlreadyInitialised(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, LoggingError>;

/// Build the `env_logger` backend described by `config`.
///
/// Output goes to stderr unless a log file is configured, in which case
/// records are appended to it. `RUST_LOG` still overrides the level.
pub fn builder(config: &Config) -> Result<env_logger::Builder> {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .format_module_path(true)
        .parse_env("RUST_LOG");

    if let Some(path) = &config.log_file {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    Ok(builder)
}

/// Install the global logger. Call once at startup.
pub fn init(config: &Config) -> Result<()> {
    builder(config)?.try_init()?;
    log::debug!("Logging initialised at {}", config.log_level);
    Ok(())
}
