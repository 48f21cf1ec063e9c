use crate::board::Field;
use crate::engine::{ActivePiece, Statistics};
use crate::pieces::Shape;
use crate::types::{PieceKind, FIELD_HEIGHT, FIELD_WIDTH};

/// Everything a renderer needs from one engine read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Locked cells with the active piece overlaid.
    pub field: Field,
    pub active: Option<ActivePiece>,
    pub next: PieceKind,
    pub next_shape: Shape,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub statistics: Statistics,
    pub running: bool,
    /// Empty rows above the stack.
    pub stack_height: u8,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Field as u8 tags (0 = empty, 1..=3 = A..C), for hashing and tests.
    pub fn field_u8(&self) -> [[u8; FIELD_WIDTH as usize]; FIELD_HEIGHT as usize] {
        let mut out = [[0u8; FIELD_WIDTH as usize]; FIELD_HEIGHT as usize];
        for (dst, src) in out.iter_mut().zip(self.field.iter()) {
            for (d, s) in dst.iter_mut().zip(src.iter()) {
                *d = s.map(|p| p.value()).unwrap_or(0);
            }
        }
        out
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            field: [[None; FIELD_WIDTH as usize]; FIELD_HEIGHT as usize],
            active: None,
            next: PieceKind::T,
            next_shape: Shape::canonical(PieceKind::T),
            score: 0,
            level: 0,
            lines: 0,
            statistics: Statistics::default(),
            running: false,
            stack_height: FIELD_HEIGHT,
        }
    }
}
