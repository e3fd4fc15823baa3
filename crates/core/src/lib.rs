//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules, state management, and simulation logic.
//! It has **no dependencies** on terminal I/O or the file system, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: The engine runs headless in unit and integration tests
//! - **Portable**: Any renderer can drive it through [`GameSnapshot`]
//!
//! # Module Structure
//!
//! - [`shapes`]: the seven tetromino matrices, colors and the clockwise rotation
//! - [`board`]: 10x20 grid, full-row detection and compaction
//! - [`piece`]: the falling piece (origin, shape, color)
//! - [`collision`]: placement check used before every committed move
//! - [`scoring`]: `n²` line scores, levels and gravity speed
//! - [`high_scores`]: top-five ledger
//! - [`session`]: the state machine tying it all together
//! - [`rng`]: seeded uniform piece generation
//!
//! # Game Rules
//!
//! - Gravity moves the piece one row every `500ms / level`
//! - A piece that cannot fall locks immediately (no lock delay, no hard drop)
//! - Rotation is a plain clockwise matrix turn, without wall kicks
//! - Clearing `n` rows at once scores `n²`; every 10 lines raise the level
//! - The game ends when a lock leaves a block in the top row, or a piece locks
//!   above the board
//!
//! # Example
//!
//! ```
//! use blockfall_core::{HighScores, Session};
//! use blockfall_types::GameAction;
//!
//! let mut game = Session::new(12345, HighScores::new());
//!
//! game.apply_action(GameAction::MoveLeft);
//! game.apply_action(GameAction::Rotate);
//!
//! // 500ms at level 1 is one gravity step.
//! assert!(game.tick(500));
//! assert_eq!(game.active().row, 1);
//! ```

pub mod board;
pub mod collision;
pub mod high_scores;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod shapes;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use collision::collides;
pub use high_scores::HighScores;
pub use piece::ActivePiece;
pub use rng::{PieceGenerator, SimpleRng};
pub use scoring::{calculate_level, gravity_interval_ms, line_clear_score};
pub use session::{LockEvent, Session};
pub use shapes::{all_shapes, shape_def, Shape, ShapeDef};
pub use snapshot::{GameSnapshot, PieceSnapshot};
