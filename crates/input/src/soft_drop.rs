//! Soft-drop hold tracking for terminals without key-release events.
//!
//! Keyboard auto-repeat keeps re-pressing a held key. If no press arrives for
//! `grace_ms` the key is treated as released.

use crate::types::{Command, SOFT_DROP_GRACE_MS};

#[derive(Debug, Clone)]
pub struct SoftDropLatch {
    held: bool,
    since_press_ms: u32,
    grace_ms: u32,
}

impl SoftDropLatch {
    pub fn new() -> Self {
        Self::with_grace_ms(SOFT_DROP_GRACE_MS)
    }

    pub fn with_grace_ms(grace_ms: u32) -> Self {
        Self {
            held: false,
            since_press_ms: 0,
            grace_ms,
        }
    }

    pub fn grace_ms(&self) -> u32 {
        self.grace_ms
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Record a press (first or auto-repeat). The engine drops its soft-drop
    /// flag when a piece locks, so every press re-asserts it.
    pub fn press(&mut self) -> Command {
        self.held = true;
        self.since_press_ms = 0;
        Command::SoftDrop(true)
    }

    /// Explicit key-up, on terminals that report it.
    pub fn release(&mut self) -> Option<Command> {
        if self.held {
            self.held = false;
            self.since_press_ms = 0;
            Some(Command::SoftDrop(false))
        } else {
            None
        }
    }

    /// Advance the grace timer; returns the release command once it runs out.
    pub fn update(&mut self, elapsed_ms: u32) -> Option<Command> {
        if !self.held {
            return None;
        }
        self.since_press_ms = self.since_press_ms.saturating_add(elapsed_ms);
        if self.since_press_ms > self.grace_ms {
            self.release()
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        self.held = false;
        self.since_press_ms = 0;
    }
}

impl Default for SoftDropLatch {
    fn default() -> Self {
        Self::new()
    }
}
