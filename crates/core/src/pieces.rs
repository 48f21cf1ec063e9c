//! Pieces module - canonical shapes and the quarter-turn remap
//!
//! Each kind lives in a square bounding box with an explicit side (3 or 4).
//! Rotation remaps the whole box in place; there are no kick tables, a
//! rotation that collides is simply rejected by the engine.

use crate::types::{Cell, PieceKind, Pixel};

/// Largest bounding box side of any kind.
pub const MAX_BOX: usize = 4;

/// Canonical occupancy, row-major over the kind's own box size.
const O_CELLS: [u8; 16] = [0, 0, 0, 0, 0, 1, 1, 0, 0, 1, 1, 0, 0, 0, 0, 0];
const S_CELLS: [u8; 9] = [0, 0, 0, 0, 1, 1, 1, 1, 0];
const Z_CELLS: [u8; 9] = [0, 0, 0, 1, 1, 0, 0, 1, 1];
const I_CELLS: [u8; 16] = [0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0];
const T_CELLS: [u8; 9] = [0, 0, 0, 1, 1, 1, 0, 1, 0];
const L_CELLS: [u8; 9] = [0, 1, 0, 0, 1, 0, 0, 1, 1];
const J_CELLS: [u8; 9] = [0, 1, 0, 0, 1, 0, 1, 1, 0];

fn occupancy(kind: PieceKind) -> &'static [u8] {
    match kind {
        PieceKind::O => &O_CELLS,
        PieceKind::S => &S_CELLS,
        PieceKind::Z => &Z_CELLS,
        PieceKind::I => &I_CELLS,
        PieceKind::T => &T_CELLS,
        PieceKind::L => &L_CELLS,
        PieceKind::J => &J_CELLS,
    }
}

/// A piece's bounding box: `size` x `size` cells, each empty or tagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    size: u8,
    /// Row-major with stride `size`; entries past `size * size` stay empty.
    cells: [Cell; MAX_BOX * MAX_BOX],
}

impl Shape {
    /// The spawn orientation of `kind`.
    pub fn canonical(kind: PieceKind) -> Self {
        let pixel = kind.pixel();
        let mut cells = [None; MAX_BOX * MAX_BOX];
        for (cell, &filled) in cells.iter_mut().zip(occupancy(kind)) {
            if filled != 0 {
                *cell = Some(pixel);
            }
        }
        Self {
            size: kind.box_size(),
            cells,
        }
    }

    /// Side of the bounding box.
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Cell at box column `x`, row `y`; empty when outside the box.
    pub fn get(&self, x: u8, y: u8) -> Cell {
        if x >= self.size || y >= self.size {
            return None;
        }
        self.cells[(y as usize) * (self.size as usize) + (x as usize)]
    }

    /// Occupied cells as `(dx, dy, pixel)` offsets from the box's top-left corner.
    pub fn occupied(&self) -> impl Iterator<Item = (i8, i8, Pixel)> + '_ {
        let size = self.size as usize;
        self.cells[..size * size]
            .iter()
            .enumerate()
            .filter_map(move |(i, cell)| cell.map(|p| ((i % size) as i8, (i / size) as i8, p)))
    }

    /// Quarter turn of the whole box.
    ///
    /// The cell at (column `c`, row `r`) moves to (column `r`, row `size - 1 - c`).
    /// With row 0 at the top this turns the picture counter-clockwise on screen.
    pub fn rotated(&self) -> Self {
        let size = self.size as usize;
        let mut cells = [None; MAX_BOX * MAX_BOX];
        for r in 0..size {
            for c in 0..size {
                cells[(size - 1 - c) * size + r] = self.cells[r * size + c];
            }
        }
        Self {
            size: self.size,
            cells,
        }
    }

    /// Number of A, B and C cells, in that order.
    pub fn pixel_counts(&self) -> [usize; 3] {
        let mut counts = [0; 3];
        for (_, _, pixel) in self.occupied() {
            counts[(pixel.value() - 1) as usize] += 1;
        }
        counts
    }
}

/// Anchor column that centers a box of `size` in a field of `width` (rounding half up).
pub fn spawn_column(width: u8, size: u8) -> i8 {
    ((width as i16 - size as i16 + 1) / 2) as i8
}
