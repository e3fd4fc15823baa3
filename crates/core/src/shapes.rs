//! Shapes module - the seven tetromino matrices and their colors
//!
//! A shape is a small rectangular boolean matrix (at most 4x4). Filled cells are
//! offsets from the piece origin: `(row, col)` with row 0 at the top.
//!
//! Rotation is the simple "reverse rows, then transpose" transform, which turns
//! the matrix 90 degrees clockwise around its bounding box. There are no wall
//! kicks and no rotation-state tables.

use crate::types::{Color, PieceKind, MAX_SHAPE_SIZE};

/// A rectangular boolean matrix stored in a fixed 4x4 array.
///
/// Cells outside `rows x cols` are always `false`, so two shapes compare equal
/// exactly when their dimensions and filled cells match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    /// Build a shape from rows of 0/1 values.
    ///
    /// # Panics
    ///
    /// Panics if the matrix is empty, larger than 4x4, or ragged.
    pub const fn from_rows<const R: usize, const C: usize>(matrix: [[u8; C]; R]) -> Self {
        assert!(R > 0 && R <= MAX_SHAPE_SIZE);
        assert!(C > 0 && C <= MAX_SHAPE_SIZE);

        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        let mut r = 0;
        while r < R {
            let mut c = 0;
            while c < C {
                cells[r][c] = matrix[r][c] != 0;
                c += 1;
            }
            r += 1;
        }

        Self {
            rows: R as u8,
            cols: C as u8,
            cells,
        }
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether the cell at local `(row, col)` is filled. Out of range is `false`.
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.rows as usize && col < self.cols as usize && self.cells[row][col]
    }

    /// Local `(row, col)` offsets of every filled cell, in row-major order.
    pub fn filled_cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let cols = self.cols as usize;
        (0..self.rows as usize).flat_map(move |r| {
            (0..cols)
                .filter(move |&c| self.cells[r][c])
                .map(move |c| (r as i8, c as i8))
        })
    }

    /// Number of filled cells
    pub fn count(&self) -> usize {
        self.filled_cells().count()
    }

    /// The shape turned 90 degrees clockwise.
    ///
    /// Computed as the transpose of the vertically reversed matrix:
    /// `out[i][j] = self[rows - 1 - j][i]`, with dimensions swapped.
    pub fn rotated(&self) -> Shape {
        let rows = self.rows as usize;
        let cols = self.cols as usize;
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];

        for (i, out_row) in cells.iter_mut().enumerate().take(cols) {
            for (j, out) in out_row.iter_mut().enumerate().take(rows) {
                *out = self.cells[rows - 1 - j][i];
            }
        }

        Shape {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }
}

/// A catalog entry: piece kind, spawn orientation and color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeDef {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color: Color,
}

const CATALOG: [ShapeDef; 7] = [
    ShapeDef {
        kind: PieceKind::I,
        shape: Shape::from_rows([[1, 1, 1, 1]]),
        color: Color::new(0, 240, 240),
    },
    ShapeDef {
        kind: PieceKind::O,
        shape: Shape::from_rows([[1, 1], [1, 1]]),
        color: Color::new(240, 240, 0),
    },
    ShapeDef {
        kind: PieceKind::T,
        shape: Shape::from_rows([[0, 1, 0], [1, 1, 1]]),
        color: Color::new(160, 0, 240),
    },
    ShapeDef {
        kind: PieceKind::S,
        shape: Shape::from_rows([[0, 1, 1], [1, 1, 0]]),
        color: Color::new(0, 240, 0),
    },
    ShapeDef {
        kind: PieceKind::Z,
        shape: Shape::from_rows([[1, 1, 0], [0, 1, 1]]),
        color: Color::new(240, 0, 0),
    },
    ShapeDef {
        kind: PieceKind::J,
        shape: Shape::from_rows([[1, 0, 0], [1, 1, 1]]),
        color: Color::new(0, 0, 240),
    },
    ShapeDef {
        kind: PieceKind::L,
        shape: Shape::from_rows([[0, 0, 1], [1, 1, 1]]),
        color: Color::new(240, 160, 0),
    },
];

/// All seven shapes in the fixed order I, O, T, S, Z, J, L
pub fn all_shapes() -> &'static [ShapeDef; 7] {
    &CATALOG
}

/// Catalog entry for a single kind
pub fn shape_def(kind: PieceKind) -> &'static ShapeDef {
    &CATALOG[kind.index()]
}
