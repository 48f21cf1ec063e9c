//! Scoring module - classic line-clear points and the level speed curve
//!
//! - Line clears score `base(n) * (level + 1)` with base 40/100/300/1200.
//! - Soft-dropped rows are added one point each when the piece locks.
//! - Level is `lines / 10`; gravity comes from [`FRAMES_PER_ROW`].

use crate::types::{FRAMES_PER_ROW, LINES_PER_LEVEL, LINE_SCORES};

/// What a lock's line clear is worth, and which event announces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearKind {
    None,
    /// One to three rows
    Lines,
    /// Four or more rows
    Tetris,
}

impl ClearKind {
    pub fn for_rows(rows: usize) -> Self {
        match rows {
            0 => ClearKind::None,
            1..=3 => ClearKind::Lines,
            _ => ClearKind::Tetris,
        }
    }
}

/// Calculate line clear score (classic rules)
/// rows: number of rows cleared by one lock (4 or more count as 4)
/// level: level before the rows are added
pub fn line_clear_score(rows: usize, level: u32) -> u32 {
    let base = LINE_SCORES[rows.min(LINE_SCORES.len() - 1)];
    base.saturating_mul(level.saturating_add(1))
}

/// Level reached after clearing `lines` in total.
pub fn level_for_lines(lines: u32) -> u32 {
    lines / LINES_PER_LEVEL
}

/// Ticks between gravity steps at `level`, clamped to the last table entry.
pub fn frames_per_row(level: u32) -> u32 {
    let index = (level as usize).min(FRAMES_PER_ROW.len() - 1);
    let frames = FRAMES_PER_ROW[index];
    debug_assert!(frames >= 1, "gravity interval must be at least one tick");
    frames
}
