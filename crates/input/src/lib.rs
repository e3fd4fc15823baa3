//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Every key press
//! is an independent command: there is no DAS/ARR and no debounce, and key
//! release or auto-repeat events are left to the caller to ignore.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, is_press, should_quit};
