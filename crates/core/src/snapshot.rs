use crate::piece::ActivePiece;
use crate::shapes::Shape;
use crate::types::{Cell, Color, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, HIGH_SCORE_SLOTS};

/// Read-only view of a piece for renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub row: i8,
    pub col: i8,
    pub color: Color,
}

impl From<ActivePiece> for PieceSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            row: value.row,
            col: value.col,
            color: value.color,
        }
    }
}

impl PieceSnapshot {
    /// Absolute `(row, col)` of every filled cell
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .filled_cells()
            .map(move |(dr, dc)| (self.row + dr, self.col + dc))
    }
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<PieceSnapshot>,
    pub next: Option<PieceSnapshot>,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub paused: bool,
    pub game_over: bool,
    pub high_scores: [u32; HIGH_SCORE_SLOTS],
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[Cell::Empty; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            next: None,
            score: 0,
            lines: 0,
            level: 1,
            paused: false,
            game_over: false,
            high_scores: [0; HIGH_SCORE_SLOTS],
        }
    }
}
