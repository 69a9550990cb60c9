//! Drop clock for the poll loop.
//!
//! The front end polls input at a fixed interval and charges each iteration
//! to the clock. Once the accumulated time exceeds the engine's current drop
//! interval, the clock fires and the loop issues a soft tick.

/// Default poll interval in milliseconds
pub const DEFAULT_POLL_MS: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DropClock {
    elapsed_ms: u32,
}

impl DropClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }

    /// Charge `dt_ms` to the clock. Returns true when a tick is due.
    ///
    /// Fires only once the total is strictly greater than `speed_ms`, then
    /// starts over from zero.
    pub fn advance(&mut self, dt_ms: u32, speed_ms: u32) -> bool {
        self.elapsed_ms = self.elapsed_ms.saturating_add(dt_ms);
        if self.elapsed_ms > speed_ms {
            self.elapsed_ms = 0;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.elapsed_ms = 0;
    }
}
