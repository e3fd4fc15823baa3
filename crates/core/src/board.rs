//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is empty or filled with the color of
//! the piece that locked there. Uses a flat array for cache locality and zero
//! allocation.
//! Coordinates are `(row, col)`: row 0 is the top, row 19 the bottom; col 0 is the left.

use arrayvec::ArrayVec;

use crate::types::{Cell, Color, BOARD_HEIGHT, BOARD_WIDTH, MAX_LINES_PER_LOCK};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// The game board - 20 rows x 10 columns using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * WIDTH + col)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_SIZE],
        }
    }

    /// Flat index of an in-bounds `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics when the coordinate is outside the board.
    #[inline(always)]
    fn index(row: usize, col: usize) -> usize {
        assert!(
            row < HEIGHT && col < WIDTH,
            "board access out of bounds: ({row}, {col})"
        );
        row * WIDTH + col
    }

    /// Flat index for signed coordinates, `None` when off the board
    #[inline(always)]
    fn checked_index(row: i8, col: i8) -> Option<usize> {
        if Self::in_bounds(row, col) {
            Some(Self::index(row as usize, col as usize))
        } else {
            None
        }
    }

    /// Whether `(row, col)` lies on the visible board
    pub fn in_bounds(row: i8, col: i8) -> bool {
        row >= 0 && (row as usize) < HEIGHT && col >= 0 && (col as usize) < WIDTH
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get the cell at `(row, col)`, `None` if out of bounds
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::checked_index(row, col).map(|idx| self.cells[idx])
    }

    /// Whether the in-bounds cell at `(row, col)` is filled.
    ///
    /// # Panics
    ///
    /// Out-of-bounds access is a programming error: callers bounds-check through
    /// the collision detector first.
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.cells[Self::index(row, col)].is_filled()
    }

    /// Lock a cell with a color.
    ///
    /// Returns false without writing when `(row, col)` is off the board. A negative
    /// row means the piece locked above the visible board; the caller turns that
    /// into game over.
    pub fn set_cell(&mut self, row: i8, col: i8, color: Color) -> bool {
        match Self::checked_index(row, col) {
            Some(idx) => {
                self.cells[idx] = Cell::Filled(color);
                true
            }
            None => false,
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= HEIGHT {
            return false;
        }
        self.row(row).iter().all(Cell::is_filled)
    }

    /// Remove a row, shifting every row above it down by one.
    ///
    /// Row 0 keeps its old contents afterwards; always follow with
    /// [`Board::insert_empty_row_at_top`].
    pub fn remove_row(&mut self, row: usize) {
        if row >= HEIGHT {
            return;
        }

        // copy_within handles the overlapping ranges
        for r in (1..=row).rev() {
            let src_start = (r - 1) * WIDTH;
            let dst_start = r * WIDTH;
            self.cells.copy_within(src_start..src_start + WIDTH, dst_start);
        }
    }

    /// Empty the top row
    pub fn insert_empty_row_at_top(&mut self) {
        self.cells[..WIDTH].fill(Cell::Empty);
    }

    /// Clear a row and compact the rows above it downward
    pub fn clear_row(&mut self, row: usize) {
        if row >= HEIGHT {
            return;
        }
        self.remove_row(row);
        self.insert_empty_row_at_top();
    }

    /// Clear every full row and return the cleared indices, top to bottom.
    ///
    /// Rows are cleared in ascending order. Clearing row `r` only moves rows above
    /// `r`, so the remaining (lower) indices stay valid and the whole set is
    /// handled in one pass.
    ///
    /// At most [`MAX_LINES_PER_LOCK`] rows are cleared per call, since one lock
    /// can complete no more than that. Any further full rows (only reachable by
    /// editing the board directly) are left in place for the next call.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, MAX_LINES_PER_LOCK> {
        let mut cleared = ArrayVec::new();
        for row in 0..HEIGHT {
            if self.is_row_full(row) {
                if cleared.try_push(row).is_err() {
                    break;
                }
            }
        }

        for &row in &cleared {
            self.clear_row(row);
        }

        cleared
    }

    /// Whether any cell of row 0 is filled (game-over condition)
    pub fn top_row_has_any_occupied(&self) -> bool {
        self.row(0).iter().any(Cell::is_filled)
    }

    /// Cells of one row, left to right.
    ///
    /// # Panics
    ///
    /// Panics if `row` is outside the board.
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = Self::index(row, 0);
        &self.cells[start..start + WIDTH]
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(WIDTH)
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of filled cells on the board
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_filled()).count()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Copy the board into a 2D array (for snapshots)
    pub fn write_grid(&self, out: &mut [[Cell; WIDTH]; HEIGHT]) {
        for (dst, src) in out.iter_mut().zip(self.rows()) {
            dst.copy_from_slice(src);
        }
    }

    /// Fill an entire row with one color (test and benchmark helper)
    pub fn fill_row(&mut self, row: usize, color: Color) {
        let start = Self::index(row, 0);
        self.cells[start..start + WIDTH].fill(Cell::Filled(color));
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
