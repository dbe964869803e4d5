//! Breeding capability: gestation timing for any actor
//!
//! Composition, not inheritance: attach a `BreedingCapability` to an actor
//! to give it gestation state. The capability only tracks timing; what a
//! completed birth spawns is the caller's business, driven by the returned
//! `BirthEvent`.

use serde::{Deserialize, Serialize};

use crate::core::calendar::TimeSource;
use crate::core::types::{AnimalKind, Day};

/// Emitted when a gestation completes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthEvent {
    pub kind: AnimalKind,
    pub day: Day,
}

/// Gestation state machine for one breeding-capable actor
#[derive(Debug, Clone)]
pub struct BreedingCapability {
    kind: AnimalKind,
    gestation_days: Day,
    /// Day fertilization happened; `None` = idle
    pregnant_since: Option<Day>,
}

impl BreedingCapability {
    pub fn new(kind: AnimalKind) -> Self {
        Self {
            kind,
            gestation_days: kind.gestation_days(),
            pregnant_since: None,
        }
    }

    /// Override the species gestation length for this individual
    pub fn with_gestation_days(mut self, days: Day) -> Self {
        self.gestation_days = days;
        self
    }

    pub fn kind(&self) -> AnimalKind {
        self.kind
    }

    pub fn gestation_days(&self) -> Day {
        self.gestation_days
    }

    pub fn is_pregnant(&self) -> bool {
        self.pregnant_since.is_some()
    }

    pub fn pregnant_since(&self) -> Option<Day> {
        self.pregnant_since
    }

    /// Mark the day this actor became pregnant
    pub fn on_fertilized(&mut self, time: &impl TimeSource) {
        self.pregnant_since = Some(time.current_day());
    }

    /// Per-step gestation check
    ///
    /// Returns a `BirthEvent` and clears the pregnancy once the full
    /// gestation period has elapsed. If the calendar was rewound past the
    /// fertilization day, the stamp clamps down to today without a birth.
    pub fn update(&mut self, time: &impl TimeSource) -> Option<BirthEvent> {
        let today = time.current_day();
        let since = self.pregnant_since?;

        if since > today {
            // Calendar went backwards by admin command
            self.pregnant_since = Some(today);
            return None;
        }
        if today >= since + self.gestation_days {
            self.pregnant_since = None;
            return Some(BirthEvent {
                kind: self.kind,
                day: today,
            });
        }
        None
    }

    /// Flat persisted view
    pub fn snapshot(&self) -> BreedingSnapshot {
        BreedingSnapshot {
            pregnant_since: self.pregnant_since.map_or(-1, |day| day as i64),
        }
    }

    /// Overwrite gestation state from a snapshot
    pub fn restore(&mut self, snapshot: &BreedingSnapshot) {
        self.pregnant_since = if snapshot.pregnant_since < 0 {
            None
        } else {
            Some(snapshot.pregnant_since as Day)
        };
    }
}

/// Persisted gestation state: a signed day with -1 meaning not pregnant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreedingSnapshot {
    #[serde(default = "not_pregnant")]
    pub pregnant_since: i64,
}

fn not_pregnant() -> i64 {
    -1
}
