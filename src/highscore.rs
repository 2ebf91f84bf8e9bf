//! JSON-file high score store.
//!
//! The file holds a single object, `{"high_score": N}`. A missing file is a
//! fresh install (0). Anything unreadable is logged and also treated as 0, so
//! a bad file never stops the game; the next new record overwrites it.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::core::HighScoreStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct HighScoreFile {
    pub high_score: u32,
}

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored value. Missing file reads as 0.
    pub fn read(&self) -> Result<u32> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(0),
            Err(err) => {
                return Err(err).with_context(|| format!("read {}", self.path.display()))
            }
        };
        let file: HighScoreFile = serde_json::from_str(&text)
            .with_context(|| format!("parse {}", self.path.display()))?;
        Ok(file.high_score)
    }

    /// Replace the stored value (write to a sibling temp file, then rename).
    pub fn write(&self, high_score: u32) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
        }
        let json = serde_json::to_string(&HighScoreFile { high_score })?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).with_context(|| format!("write {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("rename {} -> {}", tmp.display(), self.path.display()))?;
        Ok(())
    }
}

impl HighScoreStore for JsonFileStore {
    fn load(&mut self) -> u32 {
        match self.read() {
            Ok(value) => {
                info!("high score {} from {}", value, self.path.display());
                value
            }
            Err(err) => {
                warn!("ignoring high score file: {:#}", err);
                0
            }
        }
    }

    fn save(&mut self, high_score: u32) {
        if let Err(err) = self.write(high_score) {
            warn!("could not save high score: {:#}", err);
        }
    }
}
