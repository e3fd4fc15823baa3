//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget/layout libraries and instead renders a [`core::GameSnapshot`]
//! into a simple framebuffer that is flushed to the terminal with crossterm.
//!
//! - `core` stays deterministic and testable
//! - the view is pure and unit-testable
//! - 2 characters per board cell compensate for the glyph aspect ratio

pub mod fb;
pub mod flash;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use flash::FlashTimer;
pub use game_view::{AnchorY, GameView, ViewEffects, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
