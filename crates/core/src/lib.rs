//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the whole simulation: field, pieces, gravity, line
//! clearing, scoring and leveling. It has **zero dependencies** on UI, audio,
//! input or I/O, making it:
//!
//! - **Deterministic**: the same piece source produces identical games
//! - **Testable**: tests call [`Engine::tick`] directly, no wall clock involved
//! - **Portable**: runs under the terminal host or headless
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 field with collision checks and line clearing
//! - [`pieces`]: canonical shapes in explicit 3x3 / 4x4 boxes, quarter-turn remap
//! - [`rng`]: seedable piece sources (uniform, rounded-float, scripted)
//! - [`scoring`]: line-clear points and the level speed curve
//! - [`engine`]: the state machine tying it all together
//! - [`listeners`]: per-event subscriber lists
//! - [`clock`]: fixed-step conversion of wall time into ticks
//! - [`snapshot`]: one-read view for renderers
//!
//! # Game Rules
//!
//! Classic rules, no modern extras:
//!
//! - **No kicks**: a rotation that collides is rejected
//! - **No lock delay**: a grounded piece locks on its next gravity step
//! - **Top-out**: a piece that locks without leaving the spawn row ends the game
//! - **Soft drop**: one row per tick while held, one point per row on lock
//!
//! # Example
//!
//! ```
//! use blockfall_core::Engine;
//! use blockfall_types::Event;
//!
//! let mut engine = Engine::new(12345);
//! engine.subscribe(Event::Final, || println!("game over"));
//! engine.start();
//!
//! engine.move_left();
//! engine.rotate();
//! engine.set_soft_drop(true);
//! for _ in 0..50 {
//!     engine.tick();
//! }
//!
//! assert!(engine.score() > 0);
//! ```
//!
//! # Timing
//!
//! The engine counts ticks, not milliseconds. Call [`Engine::tick`] at
//! [`TICKS_PER_SECOND`](types::TICKS_PER_SECOND); [`FixedStep`] does the
//! bookkeeping for real-time hosts.

pub mod board;
pub mod clock;
pub mod engine;
pub mod listeners;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Field};
pub use clock::FixedStep;
pub use engine::{ActivePiece, Engine, Statistics};
pub use listeners::Listeners;
pub use pieces::Shape;
pub use rng::{Distribution, PieceSource, RandomPieces, ScriptedPieces, SimpleRng};
pub use scoring::{frames_per_row, level_for_lines, line_clear_score, ClearKind};
pub use snapshot::GameSnapshot;
