//! Capability registry - typed per-actor capability storage
//!
//! Replaces host-style capability lookup with plain typed maps keyed by
//! `EntityId`. Each capability is exclusively owned by its actor; removing
//! an actor drops everything attached to it.

use ahash::AHashMap;

use crate::core::types::EntityId;
use crate::entity::breeding::BreedingCapability;
use crate::entity::condition::ConditionState;

/// Per-actor capability storage for the simulation
#[derive(Debug, Default)]
pub struct CapabilityRegistry {
    conditions: AHashMap<EntityId, ConditionState>,
    breeding: AHashMap<EntityId, BreedingCapability>,
}

impl CapabilityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach_condition(&mut self, entity: EntityId, state: ConditionState) {
        self.conditions.insert(entity, state);
    }

    pub fn attach_breeding(&mut self, entity: EntityId, capability: BreedingCapability) {
        self.breeding.insert(entity, capability);
    }

    pub fn condition(&self, entity: EntityId) -> Option<&ConditionState> {
        self.conditions.get(&entity)
    }

    pub fn condition_mut(&mut self, entity: EntityId) -> Option<&mut ConditionState> {
        self.conditions.get_mut(&entity)
    }

    pub fn breeding(&self, entity: EntityId) -> Option<&BreedingCapability> {
        self.breeding.get(&entity)
    }

    pub fn breeding_mut(&mut self, entity: EntityId) -> Option<&mut BreedingCapability> {
        self.breeding.get_mut(&entity)
    }

    /// Drop every capability attached to a despawned actor
    pub fn remove(&mut self, entity: EntityId) {
        self.conditions.remove(&entity);
        self.breeding.remove(&entity);
    }

    pub fn condition_count(&self) -> usize {
        self.conditions.len()
    }

    pub fn breeding_count(&self) -> usize {
        self.breeding.len()
    }

    pub(crate) fn conditions_iter_mut(
        &mut self,
    ) -> impl Iterator<Item = (&EntityId, &mut ConditionState)> {
        self.conditions.iter_mut()
    }

    pub(crate) fn breeding_iter_mut(
        &mut self,
    ) -> impl Iterator<Item = (&EntityId, &mut BreedingCapability)> {
        self.breeding.iter_mut()
    }
}
