//! Runtime configuration for the terminal host.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::core::Distribution;

pub const HIGHSCORE_FILE: &str = "blockfall-highscore.json";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub seed: u32,
    pub distribution: Distribution,
    /// `None` disables max-score persistence.
    pub highscore_path: Option<PathBuf>,
    pub bell: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Unset or unparsable values fall back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let seed = get("BLOCKFALL_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let distribution = get("BLOCKFALL_RANDOM")
            .and_then(|s| Distribution::from_str(s.trim()))
            .unwrap_or_default();

        let highscore_path = match get("BLOCKFALL_HIGHSCORE_PATH") {
            Some(s) => {
                let s = s.trim();
                if s.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(s))
                }
            }
            None => Some(default_highscore_path(get("HOME"))),
        };

        let bell = get("BLOCKFALL_BELL")
            .map(|s| matches!(s.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
            .unwrap_or(false);

        Self {
            seed,
            distribution,
            highscore_path,
            bell,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn default_highscore_path(home: Option<String>) -> PathBuf {
    match home.filter(|h| !h.trim().is_empty()) {
        Some(home) => PathBuf::from(home).join(HIGHSCORE_FILE),
        None => PathBuf::from(HIGHSCORE_FILE),
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32 ^ d.as_secs() as u32)
        .unwrap_or(1)
}
