use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::Result;

const APP_DIR: &str = "blockfall";
const FILE_NAME: &str = "highscore.json";

/// Where the best score lives between games.
pub trait HighScoreStore {
    /// The stored best score, or `None` when nothing usable is stored.
    fn load(&self) -> Option<u32>;
    fn save(&mut self, high_score: u32) -> Result<()>;
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct HighScoreRecord {
    high_score: u32,
}

/// JSON file backed store.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data dir>/blockfall/highscore.json`, or the working directory when the
    /// platform has no data directory.
    pub fn default_path() -> PathBuf {
        match dirs_next::data_dir() {
            Some(dir) => dir.join(APP_DIR).join(FILE_NAME),
            None => PathBuf::from(FILE_NAME),
        }
    }
}

impl HighScoreStore for FileStore {
    fn load(&self) -> Option<u32> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("no high score file at {}", self.path.display());
                return None;
            }
            Err(e) => {
                warn!("cannot read high score file {}: {}", self.path.display(), e);
                return None;
            }
        };

        match serde_json::from_str::<HighScoreRecord>(&data) {
            Ok(record) => Some(record.high_score),
            Err(e) => {
                warn!("ignoring corrupt high score file {}: {}", self.path.display(), e);
                None
            }
        }
    }

    fn save(&mut self, high_score: u32) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let data = serde_json::to_string_pretty(&HighScoreRecord { high_score })?;
        fs::write(&self.path, data)?;
        debug!("saved high score {} to {}", high_score, self.path.display());
        Ok(())
    }
}

/// Keeps the best score for the lifetime of the process only.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    high_score: Option<u32>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_high_score(high_score: u32) -> Self {
        Self {
            high_score: Some(high_score),
        }
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> Option<u32> {
        self.high_score
    }

    fn save(&mut self, high_score: u32) -> Result<()> {
        self.high_score = Some(high_score);
        Ok(())
    }
}
