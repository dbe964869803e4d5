//! Calendar system for simulation time tracking
//!
//! The calendar is the single source of simulated time. Components never
//! advance time themselves; they read it through the `TimeSource` trait,
//! which keeps them deterministic under test.

use serde::{Deserialize, Serialize};

use crate::core::types::{Day, Tick};

/// Read-only view of simulated time
///
/// Implemented by `Calendar` for live simulations and by trivial fixed
/// clocks in tests. Time is monotonic except for explicit administrative
/// rewinds (`Calendar::set_tick`), which consumers tolerate defensively.
pub trait TimeSource {
    fn current_tick(&self) -> Tick;
    fn current_day(&self) -> Day;
}

/// Calendar tracks simulation time with tick/day granularity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Calendar {
    tick: Tick,
    ticks_per_day: Tick,
}

/// One simulated day at 20 ticks/second
pub const DEFAULT_TICKS_PER_DAY: Tick = 24_000;

impl Calendar {
    pub fn new(ticks_per_day: Tick) -> Self {
        Self {
            tick: 0,
            ticks_per_day,
        }
    }

    pub fn advance(&mut self) {
        self.tick += 1;
    }

    pub fn advance_by(&mut self, ticks: Tick) {
        self.tick += ticks;
    }

    /// Administrative override. May move time backwards; condition and
    /// breeding components clamp rather than misbehave when it does.
    pub fn set_tick(&mut self, tick: Tick) {
        self.tick = tick;
    }

    pub fn ticks_per_day(&self) -> Tick {
        self.ticks_per_day
    }
}

impl TimeSource for Calendar {
    fn current_tick(&self) -> Tick {
        self.tick
    }

    fn current_day(&self) -> Day {
        self.tick / self.ticks_per_day
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self::new(DEFAULT_TICKS_PER_DAY)
    }
}
