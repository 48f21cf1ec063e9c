//! Blockfall (workspace facade crate).
//!
//! Re-exports the engine, input and terminal crates under one name and adds
//! the host-side pieces: environment configuration and max-score storage.

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;

pub mod config;
pub mod highscore;

pub use config::Config;
pub use highscore::{HighScore, HighScoreStore};
