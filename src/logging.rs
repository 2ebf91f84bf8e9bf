//! Logger setup.
//!
//! The game owns the terminal, so log records go to the file named by
//! `SNAKE_TETRIS_LOG`. Without one, logging stays off. Level filtering follows
//! `RUST_LOG` and defaults to `info`.

use std::fs::OpenOptions;

use anyhow::{Context, Result};

use crate::config::Config;

pub fn init(config: &Config) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("install logger")?;
    Ok(())
}
