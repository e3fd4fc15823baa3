//! Scoring module - line-clear points, levels and gravity speed
//!
//! - A lock that clears `n` rows scores `n * n` (1, 4, 9, 16).
//! - Level starts at 1 and rises by one every 10 cleared lines.
//! - Gravity interval is `GRAVITY_DELAY_MS / level`, so speed grows linearly.

use crate::types::{GRAVITY_DELAY_MS, LINES_PER_LEVEL, MAX_LINES_PER_LOCK};

/// Points for clearing `lines` rows with one lock
pub fn line_clear_score(lines: usize) -> u32 {
    let n = lines as u32;
    n * n
}

/// Level for a cumulative line count (1-based)
pub fn calculate_level(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Gravity interval for a level, in milliseconds (never below 1ms)
pub fn gravity_interval_ms(level: u32) -> u32 {
    (GRAVITY_DELAY_MS / level.max(1)).max(1)
}

/// Whether a clear is the four-line maximum
pub fn is_tetris(lines: usize) -> bool {
    lines == MAX_LINES_PER_LOCK
}
