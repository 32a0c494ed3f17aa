//! Score history file.
//!
//! The whole file is rewritten on every save: sorted by score, capped at
//! `MAX_HISTORY`, written to a sibling temp file and renamed into place so a
//! crash mid-write never truncates the history.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::core::{format_history, parse_history, ScoreRecord};
use crate::types::MAX_HISTORY;

#[derive(Debug, Clone)]
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every record. A missing file is an empty history.
    pub fn load(&self) -> Result<Vec<ScoreRecord>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no score file yet");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("failed to read {}", self.path.display()))
            }
        };

        let records = parse_history(&text)
            .with_context(|| format!("failed to parse {}", self.path.display()))?;
        info!(path = %self.path.display(), count = records.len(), "scores loaded");
        Ok(records)
    }

    /// Replace the file with `records`, best first.
    pub fn save(&self, records: &[ScoreRecord]) -> Result<()> {
        let mut sorted = records.to_vec();
        sorted.sort_by(|a, b| b.score.cmp(&a.score));
        sorted.truncate(MAX_HISTORY);

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let tmp = self.temp_path();
        fs::write(&tmp, format_history(&sorted))
            .with_context(|| format!("failed to write {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("failed to replace {}", self.path.display()))?;

        info!(path = %self.path.display(), count = sorted.len(), "scores saved");
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}
