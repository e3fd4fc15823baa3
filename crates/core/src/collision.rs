//! Collision detection - the single authority for every committed move
//!
//! A placement is a candidate shape at an absolute origin. Moves, rotations and
//! gravity all build a candidate and ask [`collides`] before committing it.

use crate::board::Board;
use crate::shapes::Shape;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Check a candidate placement of `shape` with its origin at `(row, col)`.
///
/// For each filled cell:
/// - a column outside `[0, BOARD_WIDTH)` collides
/// - a row at or below `BOARD_HEIGHT` collides
/// - a negative row never collides (the cell is above the visible board)
/// - an in-bounds cell collides when the board cell is occupied
pub fn collides(board: &Board, shape: &Shape, row: i8, col: i8) -> bool {
    shape.filled_cells().any(|(dr, dc)| {
        let r = row + dr;
        let c = col + dc;

        if c < 0 || c >= BOARD_WIDTH as i8 {
            return true;
        }
        if r >= BOARD_HEIGHT as i8 {
            return true;
        }
        if r < 0 {
            return false;
        }
        board.is_occupied(r as usize, c as usize)
    })
}
