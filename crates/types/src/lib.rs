//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine logic, terminal rendering, persistence).
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//! - **Spawn column**: 5, spawn row 0
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 33 | Frame period of the control loop (~30 FPS) |
//! | `GRAVITY_DELAY_MS` | 500 | Gravity interval at level 1 |
//! | `TETRIS_FLASH_MS` | 300 | Flash duration after a four-line clear |
//!
//! Gravity speeds up linearly with level: the interval is `GRAVITY_DELAY_MS / level`.
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Cell, Color, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::ALL[2], PieceKind::T);
//! assert_eq!(PieceKind::T.as_str(), "T");
//!
//! let cell = Cell::Filled(Color::new(240, 0, 0));
//! assert!(cell.is_filled());
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Column of the piece origin at spawn
pub const SPAWN_COLUMN: i8 = (BOARD_WIDTH / 2) as i8;

/// Row of the piece origin at spawn
pub const SPAWN_ROW: i8 = 0;

/// Largest side of any shape matrix
pub const MAX_SHAPE_SIZE: usize = 4;

/// Number of entries kept in the high-score ledger
pub const HIGH_SCORE_SLOTS: usize = 5;

/// Most rows a single lock can clear (a "tetris")
pub const MAX_LINES_PER_LOCK: usize = 4;

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Control loop frame period in milliseconds (~30 FPS)
pub const FRAME_MS: u32 = 33;

/// Gravity interval at level 1, in milliseconds
pub const GRAVITY_DELAY_MS: u32 = 500;

/// Flash duration after a four-line clear, in milliseconds
pub const TETRIS_FLASH_MS: u32 = 300;

/// Tetromino piece kinds, in catalog order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Convert to uppercase letter
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }

    /// Position in [`PieceKind::ALL`]
    pub fn index(&self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::S => 3,
            PieceKind::Z => 4,
            PieceKind::J => 5,
            PieceKind::L => 6,
        }
    }
}

/// 24-bit color of a piece and of the cells it locks into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A board cell: empty, or locked with the color of the piece that filled it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled(Color),
}

impl Cell {
    pub fn is_filled(&self) -> bool {
        matches!(self, Cell::Filled(_))
    }
}

/// Game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Rotate,
    MoveLeft,
    MoveRight,
    SoftDrop,
    Pause,
    Restart,
}

/// Session lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Running,
    Paused,
    GameOver,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Running => "running",
            GameStatus::Paused => "paused",
            GameStatus::GameOver => "gameOver",
        }
    }
}
