//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Command`]s and provides a
//! soft-drop latch for terminals that never report key releases.

pub mod map;
pub mod soft_drop;

pub use blockfall_types as types;

pub use map::{handle_key_event, is_soft_drop_key, resolve_rotate, should_quit, KeyIntent};
pub use soft_drop::SoftDropLatch;
