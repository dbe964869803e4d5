//! Tick driver - advances every attached capability one step
//!
//! All work is synchronous and single-threaded: each actor's capabilities
//! are updated exactly once per call, and anything notable is returned as
//! an event for the caller's log. The driver never advances time itself;
//! the calendar belongs to the caller.

use crate::core::calendar::TimeSource;
use crate::core::config::ConditionConfig;
use crate::core::types::{AnimalKind, Day, EntityId};
use crate::simulation::registry::CapabilityRegistry;

/// Events generated during a simulation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationEvent {
    /// A gestation completed; the caller decides what gets spawned
    Birth {
        entity: EntityId,
        kind: AnimalKind,
        day: Day,
    },
}

/// Update every condition tracker and breeding capability for the current
/// step, returning the events produced
pub fn run_condition_tick(
    registry: &mut CapabilityRegistry,
    config: &ConditionConfig,
    time: &impl TimeSource,
) -> Vec<SimulationEvent> {
    let mut events = Vec::new();

    for (_, state) in registry.conditions_iter_mut() {
        state.update(config, time);
    }

    for (entity, capability) in registry.breeding_iter_mut() {
        if let Some(birth) = capability.update(time) {
            tracing::debug!("{:?} gave birth ({:?}) on day {}", entity, birth.kind, birth.day);
            events.push(SimulationEvent::Birth {
                entity: *entity,
                kind: birth.kind,
                day: birth.day,
            });
        }
    }

    events
}
