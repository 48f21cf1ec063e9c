//! Board module - manages the playing field
//!
//! The board is a 10x20 grid where each cell is empty or holds the render tag
//! of a locked piece fragment. Uses a flat array for cache locality and
//! zero-allocation line clears.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use arrayvec::ArrayVec;

use crate::types::{Cell, FIELD_HEIGHT, FIELD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (FIELD_WIDTH as usize) * (FIELD_HEIGHT as usize);

/// Upper bound on rows a single clear can report.
pub const MAX_CLEARED_ROWS: usize = FIELD_HEIGHT as usize;

/// Full-field grid of cells, row-major (`field[y][x]`).
pub type Field = [[Cell; FIELD_WIDTH as usize]; FIELD_HEIGHT as usize];

/// The locked cells - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= FIELD_WIDTH as i8 || y < 0 || y >= FIELD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (FIELD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        FIELD_WIDTH
    }

    pub fn height(&self) -> u8 {
        FIELD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_valid(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= FIELD_HEIGHT as usize {
            return false;
        }
        let start = y * FIELD_WIDTH as usize;
        let end = start + FIELD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Clear all full rows and return the row indices that were cleared (sorted bottom to top)
    ///
    /// Rows above a cleared row cascade down; the vacated top rows become empty.
    /// Uses a two-pointer pass with zero allocation, which leaves the board in the
    /// same state as removing each full row top-to-bottom one at a time.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, MAX_CLEARED_ROWS> {
        let mut cleared_rows = ArrayVec::new();
        let width = FIELD_WIDTH as usize;
        let mut write_y = FIELD_HEIGHT as usize;

        for read_y in (0..FIELD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }

        cleared_rows
    }

    /// Write every occupied cell of `shape` with its box's top-left corner at (x, y).
    ///
    /// Cells falling outside the field are skipped; returns false if any were.
    pub fn lock_shape(&mut self, shape: &crate::pieces::Shape, x: i8, y: i8) -> bool {
        let mut all_inside = true;
        for (dx, dy, pixel) in shape.occupied() {
            all_inside &= self.set(x + dx, y + dy, Some(pixel));
        }
        all_inside
    }

    /// Index of the topmost row holding any locked cell.
    pub fn highest_occupied_row(&self) -> Option<usize> {
        self.cells
            .chunks_exact(FIELD_WIDTH as usize)
            .position(|row| row.iter().any(|cell| cell.is_some()))
    }

    /// Empty rows above the stack; the full height when the board is empty.
    pub fn stack_height(&self) -> u8 {
        match self.highest_occupied_row() {
            Some(y) => y as u8,
            None => FIELD_HEIGHT,
        }
    }

    /// Copy the board into a 2D grid.
    pub fn write_field(&self, out: &mut Field) {
        for (row, src) in out
            .iter_mut()
            .zip(self.cells.chunks_exact(FIELD_WIDTH as usize))
        {
            row.copy_from_slice(src);
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Create from a 2D grid (converts to flat array)
    pub fn from_field(field: &Field) -> Self {
        let mut board = Self::new();
        for (y, row) in field.iter().enumerate() {
            let start = y * FIELD_WIDTH as usize;
            board.cells[start..start + FIELD_WIDTH as usize].copy_from_slice(row);
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Pixel;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_board_flat_array() {
        let mut board = Board::new();

        board.set(0, 0, Some(Pixel::A));
        board.set(5, 10, Some(Pixel::C));

        assert_eq!(board.get(0, 0), Some(Some(Pixel::A)));
        assert_eq!(board.get(5, 10), Some(Some(Pixel::C)));

        assert_eq!(board.cells[0], Some(Pixel::A));
        assert_eq!(board.cells[10 * 10 + 5], Some(Pixel::C));
    }

    #[test]
    fn test_board_field_roundtrip() {
        let mut field: Field = [[None; 10]; 20];
        field[5][3] = Some(Pixel::B);
        field[10][7] = Some(Pixel::C);

        let board = Board::from_field(&field);

        let mut back: Field = [[None; 10]; 20];
        board.write_field(&mut back);

        assert_eq!(field, back);
    }

    #[test]
    fn test_stack_height_boundaries() {
        let mut board = Board::new();
        assert_eq!(board.stack_height(), 20);

        board.set(4, 19, Some(Pixel::A));
        assert_eq!(board.stack_height(), 19);

        board.set(0, 7, Some(Pixel::B));
        assert_eq!(board.stack_height(), 7);

        board.cells.fill(Some(Pixel::C));
        assert_eq!(board.stack_height(), 0);
    }

    #[test]
    fn test_clear_top_row_only() {
        let mut board = Board::new();
        for x in 0..10 {
            board.set(x, 0, Some(Pixel::A));
        }
        let cleared = board.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[0]);
        assert!(board.cells.iter().all(|c| c.is_none()));
    }
}
