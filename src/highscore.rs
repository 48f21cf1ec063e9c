//! Max-score persistence.
//!
//! The engine forgets its score on every `start()`; the host keeps the best
//! one here and rewrites the file when it is beaten.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// On-disk record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HighScore {
    #[serde(default)]
    pub max_score: u32,
}

#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: Option<PathBuf>,
    best: HighScore,
    save_error: Option<String>,
}

impl HighScoreStore {
    /// Open a store. A missing or malformed file counts as a max score of 0.
    pub fn open(path: Option<PathBuf>) -> Self {
        let best = path.as_deref().and_then(read_record).unwrap_or_default();
        Self {
            path,
            best,
            save_error: None,
        }
    }

    /// A store that never touches the disk.
    pub fn in_memory() -> Self {
        Self::open(None)
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn max_score(&self) -> u32 {
        self.best.max_score
    }

    /// Message from the last failed write, cleared by the next good one.
    pub fn save_error(&self) -> Option<&str> {
        self.save_error.as_deref()
    }

    /// Fold a finished game's score in. Returns `true` when it set a new
    /// maximum; the file is only written then.
    pub fn record(&mut self, score: u32) -> Result<bool> {
        if score <= self.best.max_score {
            return Ok(false);
        }
        self.best.max_score = score;
        self.save()?;
        Ok(true)
    }

    /// [`record`](Self::record) for the game loop: a failed write is kept in
    /// [`save_error`](Self::save_error) and the in-memory maximum stands.
    pub fn submit(&mut self, score: u32) -> bool {
        match self.record(score) {
            Ok(improved) => {
                if improved {
                    self.save_error = None;
                }
                improved
            }
            Err(err) => {
                self.save_error = Some(format!("{err:#}"));
                true
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        let Some(path) = self.path.as_deref() else {
            return Ok(());
        };
        let json = serde_json::to_string_pretty(&self.best).context("encode high score")?;
        fs::write(path, json)
            .with_context(|| format!("write high score to {}", path.display()))?;
        Ok(())
    }
}

fn read_record(path: &Path) -> Option<HighScore> {
    let text = fs::read_to_string(path).ok()?;
    serde_json::from_str(&text).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("blockfall-test-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        let _ = fs::remove_file(&path);
        path
    }

    #[test]
    fn test_missing_file_starts_at_zero() {
        let store = HighScoreStore::open(Some(temp_path("missing.json")));
        assert_eq!(store.max_score(), 0);
    }

    #[test]
    fn test_record_persists_only_improvements() {
        let path = temp_path("record.json");
        let mut store = HighScoreStore::open(Some(path.clone()));

        assert!(store.record(1200).unwrap());
        assert!(!store.record(300).unwrap());
        assert_eq!(store.max_score(), 1200);

        let reopened = HighScoreStore::open(Some(path.clone()));
        assert_eq!(reopened.max_score(), 1200);

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"max_score\": 1200"));
    }

    #[test]
    fn test_malformed_file_counts_as_zero() {
        let path = temp_path("garbage.json");
        fs::write(&path, "not json").unwrap();
        let mut store = HighScoreStore::open(Some(path.clone()));
        assert_eq!(store.max_score(), 0);

        // Overwritten with a valid record on the next improvement.
        assert!(store.record(40).unwrap());
        assert_eq!(HighScoreStore::open(Some(path)).max_score(), 40);
    }

    #[test]
    fn test_submit_keeps_max_when_write_fails() {
        let dir = temp_path("no-such-dir");
        let _ = fs::remove_dir_all(&dir);
        let path = dir.join("hs.json");
        let mut store = HighScoreStore::open(Some(path.clone()));

        assert!(store.record(40).is_err());
        assert_eq!(store.max_score(), 40);

        assert!(store.submit(90));
        assert_eq!(store.max_score(), 90);
        let message = store.save_error().unwrap();
        assert!(message.contains("write high score"), "{message}");
        assert!(!path.exists());

        // Lower scores still lose to the kept maximum.
        assert!(!store.submit(50));
        assert_eq!(store.max_score(), 90);

        // Once the directory exists the next improvement is written.
        fs::create_dir_all(&dir).unwrap();
        assert!(store.submit(120));
        assert!(store.save_error().is_none());
        assert_eq!(HighScoreStore::open(Some(path)).max_score(), 120);
    }

    #[test]
    fn test_in_memory_store() {
        let mut store = HighScoreStore::in_memory();
        assert!(store.record(10).unwrap());
        assert_eq!(store.max_score(), 10);
        assert!(store.path().is_none());
    }
}
