//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for actors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub Uuid);

impl EntityId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

/// Simulation tick counter (finest-grained time unit)
pub type Tick = u64;

/// Simulation day counter (tick / ticks_per_day)
pub type Day = u64;

/// Breeding-capable animal species
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimalKind {
    Pig,
    Sheep,
    Cow,
    Horse,
    Bear,
}

impl AnimalKind {
    /// Days from fertilization to birth for this species
    pub fn gestation_days(&self) -> Day {
        match self {
            AnimalKind::Pig => 19,
            AnimalKind::Sheep => 22,
            AnimalKind::Cow => 28,
            AnimalKind::Horse => 31,
            AnimalKind::Bear => 30,
        }
    }
}
