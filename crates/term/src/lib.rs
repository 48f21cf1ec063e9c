//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the engine snapshot is drawn into
//! a framebuffer by a pure [`GameView`], and [`TerminalRenderer`] flushes it
//! to the terminal with crossterm. No ratatui widgets or layout.
//!
//! Also holds the presentation-side reactions to engine events: level
//! palettes and the audio cue mapping.

pub mod cue;
pub mod fb;
pub mod game_view;
pub mod palette;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use cue::{music_tempo, Cue};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, FieldRect, GameView, HudInfo, Viewport, IDLE_PROMPT};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
