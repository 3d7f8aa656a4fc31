//! Simulation clock.

use serde::{Deserialize, Serialize};

/// The single simulated time source.
///
/// Monotonically non-decreasing: it either advances by an executed slice or
/// jumps forward over idle time. It never moves backwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationClock {
    now: i64,
}

impl SimulationClock {
    /// Creates a clock reading `start`.
    pub fn start_at(start: i64) -> Self {
        Self { now: start }
    }

    /// Current time.
    #[inline]
    pub fn now(&self) -> i64 {
        self.now
    }

    /// Advances by `delta` time units (negative deltas are ignored).
    pub fn advance_by(&mut self, delta: i64) {
        self.now += delta.max(0);
    }

    /// Moves forward to `t` if `t` is later than now; otherwise no-op.
    ///
    /// Returns the amount of time skipped.
    pub fn advance_to(&mut self, t: i64) -> i64 {
        let skipped = (t - self.now).max(0);
        self.now += skipped;
        skipped
    }
}
