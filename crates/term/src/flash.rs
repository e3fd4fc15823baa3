//! Tetris flash timing.
//!
//! Purely visual: the engine only reports the clear, the runner arms this timer
//! and the view inverts the board while it runs.

/// Countdown for the board flash shown after a four-line clear.
#[derive(Debug, Clone, Default)]
pub struct FlashTimer {
    remaining_ms: u32,
}

impl FlashTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) the flash
    pub fn trigger(&mut self, duration_ms: u32) {
        self.remaining_ms = duration_ms;
    }

    pub fn advance(&mut self, elapsed_ms: u32) {
        self.remaining_ms = self.remaining_ms.saturating_sub(elapsed_ms);
    }

    pub fn active(&self) -> bool {
        self.remaining_ms > 0
    }

    /// Blink phase, alternating every 50ms while the flash runs
    pub fn lit(&self) -> bool {
        self.active() && (self.remaining_ms / 50) % 2 == 1
    }

    pub fn remaining_ms(&self) -> u32 {
        self.remaining_ms
    }
}
