//! Active piece - the falling tetromino
//!
//! The piece itself never validates anything: `translate` and `set_shape` are plain
//! updates. Callers build the candidate, check it with [`crate::collision::collides`]
//! and only then commit.

use crate::board::Board;
use crate::collision::collides;
use crate::shapes::{shape_def, Shape};
use crate::types::{Color, PieceKind, SPAWN_COLUMN, SPAWN_ROW};

/// Falling piece: current rotation state, origin and color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub row: i8,
    pub col: i8,
    pub color: Color,
}

impl ActivePiece {
    /// Create a piece in spawn orientation at the spawn position
    pub fn spawn(kind: PieceKind) -> Self {
        let def = shape_def(kind);
        Self {
            kind,
            shape: def.shape,
            row: SPAWN_ROW,
            col: SPAWN_COLUMN,
            color: def.color,
        }
    }

    /// Move the origin. No validation.
    pub fn translate(&mut self, d_col: i8, d_row: i8) {
        self.col += d_col;
        self.row += d_row;
    }

    /// The clockwise rotation of the current shape, without changing the piece
    pub fn rotated(&self) -> Shape {
        self.shape.rotated()
    }

    /// Replace the shape (commit a rotation that was already checked)
    pub fn set_shape(&mut self, shape: Shape) {
        self.shape = shape;
    }

    /// Absolute `(row, col)` of every filled cell
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .filled_cells()
            .map(move |(dr, dc)| (self.row + dr, self.col + dc))
    }

    /// Whether the piece, moved by `(d_col, d_row)`, would collide
    pub fn collides_at(&self, board: &Board, d_col: i8, d_row: i8) -> bool {
        collides(board, &self.shape, self.row + d_row, self.col + d_col)
    }

    /// Whether the rotated shape would collide at the current origin
    pub fn rotation_collides(&self, board: &Board) -> bool {
        collides(board, &self.rotated(), self.row, self.col)
    }

    /// Topmost absolute row covered by a filled cell
    pub fn top_row(&self) -> i8 {
        self.cells().map(|(r, _)| r).min().unwrap_or(self.row)
    }
}
