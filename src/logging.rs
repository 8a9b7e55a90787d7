//! Logger setup for the binaries.
//!
//! The game owns the terminal, so records go to `PONG_LOG_FILE` when it is
//! set. Without a file, logging stays off unless `RUST_LOG` asks for it.

use std::fs::OpenOptions;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

use crate::config::AppConfig;

pub fn init(config: &AppConfig) -> Result<()> {
    let mut builder = match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening log file {}", path.display()))?;
            let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
            builder.target(Target::Pipe(Box::new(file)));
            builder
        }
        None => Builder::from_env(Env::default().default_filter_or("off")),
    };

    builder.format_timestamp_millis();
    builder.try_init().context("installing logger")?;
    Ok(())
}
