//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, so they can be used
//! by the engine, the terminal renderer and the input layer alike.
//!
//! # Field Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//!
//! # Timing
//!
//! The engine advances in fixed ticks. Gravity is expressed in ticks per row,
//! looked up by level from [`FRAMES_PER_ROW`]:
//!
//! | Level | Ticks/row | At 50 Hz |
//! |-------|-----------|----------|
//! | 0 | 48 | 0.96s |
//! | 1 | 43 | 0.86s |
//! | 8 | 8 | 0.16s |
//! | 19-28 | 2 | 0.04s |
//! | 29+ | 1 | 0.02s |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Event, PieceKind, Pixel, FIELD_HEIGHT, FIELD_WIDTH};
//!
//! let piece = PieceKind::T;
//! assert_eq!(piece.box_size(), 3);
//! assert_eq!(piece.pixel(), Pixel::C);
//!
//! assert_eq!(Event::Tetris.as_str(), "tetris");
//!
//! assert_eq!(FIELD_WIDTH, 10);
//! assert_eq!(FIELD_HEIGHT, 20);
//! ```

/// Field width in cells (10 columns)
pub const FIELD_WIDTH: u8 = 10;

/// Field height in cells (20 rows)
pub const FIELD_HEIGHT: u8 = 20;

/// Fixed tick rate driving the engine.
pub const TICKS_PER_SECOND: u32 = 50;

/// Duration of one tick in milliseconds (20ms at 50 Hz).
pub const TICK_MS: u32 = 1000 / TICKS_PER_SECOND;

/// Classic marathon speed curve: ticks per gravity row, indexed by level.
///
/// Levels past the end of the table use the last entry.
pub const FRAMES_PER_ROW: [u32; 30] = [
    48, 43, 38, 33, 28, 23, 18, 13, 8, 6, 5, 5, 5, 4, 4, 4, 3, 3, 3, 2, 2, 2, 2, 2, 2, 2, 2, 2,
    2, 1,
];

/// Lines needed to advance one level.
pub const LINES_PER_LEVEL: u32 = 10;

/// Line clear base points, indexed by rows cleared (4 means "4 or more").
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Soft drop release timeout for terminals without key-release events.
pub const SOFT_DROP_GRACE_MS: u32 = 150;


/// The seven piece kinds, in the order used by the random draw.
///
/// Box sizes:
/// - **I**, **O**: 4x4
/// - **S**, **Z**, **T**, **L**, **J**: 3x3
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    O,
    S,
    Z,
    I,
    T,
    L,
    J,
}

impl PieceKind {
    /// All kinds in draw order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::O,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::I,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
    ];

    /// Position in [`PieceKind::ALL`].
    pub fn index(self) -> usize {
        match self {
            PieceKind::O => 0,
            PieceKind::S => 1,
            PieceKind::Z => 2,
            PieceKind::I => 3,
            PieceKind::T => 4,
            PieceKind::L => 5,
            PieceKind::J => 6,
        }
    }

    /// Side of the square bounding box the canonical shape lives in.
    pub fn box_size(self) -> u8 {
        match self {
            PieceKind::I | PieceKind::O => 4,
            PieceKind::S | PieceKind::Z | PieceKind::T | PieceKind::L | PieceKind::J => 3,
        }
    }

    /// Render tag carried by every cell of this kind.
    pub fn pixel(self) -> Pixel {
        match self {
            PieceKind::S | PieceKind::J => Pixel::A,
            PieceKind::Z | PieceKind::L => Pixel::B,
            PieceKind::O | PieceKind::I | PieceKind::T => Pixel::C,
        }
    }

    /// Upper-case letter, as shown in the statistics panel.
    pub fn letter(self) -> &'static str {
        match self {
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::I => "I",
            PieceKind::T => "T",
            PieceKind::L => "L",
            PieceKind::J => "J",
        }
    }
}

/// Render grouping tag of a filled cell. Carries no gameplay meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pixel {
    A,
    B,
    C,
}

impl Pixel {
    /// 1-based tag value (0 is reserved for "empty" in u8 grids).
    pub fn value(self) -> u8 {
        match self {
            Pixel::A => 1,
            Pixel::B => 2,
            Pixel::C => 3,
        }
    }
}

/// Cell on the field (None = empty)
pub type Cell = Option<Pixel>;

/// Commands a host can send to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Reset everything and begin a new session
    Start,
    /// Freeze the session, keeping the field visible
    Stop,
    MoveLeft,
    MoveRight,
    /// Quarter-turn the active piece (no kicks)
    Rotate,
    /// Hold or release soft drop
    SoftDrop(bool),
}

/// Notifications emitted by the engine, in tick order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    /// A running tick completed (render-relevant)
    Frame,
    /// The active piece shifted sideways
    Move,
    /// The active piece rotated
    Rotate,
    /// A piece locked and the next one spawned
    Drop,
    /// One to three rows were cleared
    Clear,
    /// Four or more rows were cleared at once
    Tetris,
    /// The level changed
    LevelUp,
    /// Top-out: the session ended
    Final,
}

impl Event {
    pub const COUNT: usize = 8;

    pub const ALL: [Event; Event::COUNT] = [
        Event::Frame,
        Event::Move,
        Event::Rotate,
        Event::Drop,
        Event::Clear,
        Event::Tetris,
        Event::LevelUp,
        Event::Final,
    ];

    pub fn index(self) -> usize {
        match self {
            Event::Frame => 0,
            Event::Move => 1,
            Event::Rotate => 2,
            Event::Drop => 3,
            Event::Clear => 4,
            Event::Tetris => 5,
            Event::LevelUp => 6,
            Event::Final => 7,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Event::Frame => "frame",
            Event::Move => "move",
            Event::Rotate => "rotate",
            Event::Drop => "drop",
            Event::Clear => "clear",
            Event::Tetris => "tetris",
            Event::LevelUp => "levelUp",
            Event::Final => "final",
        }
    }
}
