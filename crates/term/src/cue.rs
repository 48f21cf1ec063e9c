//! Audio cue mapping.
//!
//! Terminals can't play tone sequences, so a cue is a name plus
//! a flag saying whether it is worth the terminal bell.

use crate::types::{Event, FIELD_HEIGHT};

/// Empty rows above the stack at or below which the music speeds up.
pub const DANGER_ROWS: u8 = FIELD_HEIGHT / 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    Move,
    Rotate,
    Drop,
    Clear,
    Tetris,
    LevelUp,
    /// Game over
    Final,
}

impl Cue {
    /// Cue for an engine event. `Frame` has none.
    pub fn for_event(event: Event) -> Option<Cue> {
        match event {
            Event::Frame => None,
            Event::Move => Some(Cue::Move),
            Event::Rotate => Some(Cue::Rotate),
            Event::Drop => Some(Cue::Drop),
            Event::Clear => Some(Cue::Clear),
            Event::Tetris => Some(Cue::Tetris),
            Event::LevelUp => Some(Cue::LevelUp),
            Event::Final => Some(Cue::Final),
        }
    }

    /// Rare cues that get the terminal bell.
    pub fn rings_bell(self) -> bool {
        matches!(self, Cue::Tetris | Cue::LevelUp | Cue::Final)
    }
}

/// Playback speed for the background music given the engine's stack height.
pub fn music_tempo(stack_height: u8) -> f32 {
    if stack_height <= DANGER_ROWS {
        1.4
    } else {
        1.0
    }
}
