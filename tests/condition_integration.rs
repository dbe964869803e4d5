//! Integration tests for the condition and breeding lifecycle
//!
//! These tests drive the public surface the way a host simulation would:
//! - a calendar owned by the caller, advanced tick by tick
//! - capabilities attached through the registry
//! - decay, drinking, births, persistence, and despawn

use wildstead::core::calendar::{Calendar, TimeSource};
use wildstead::core::config::ConditionConfig;
use wildstead::core::types::{AnimalKind, EntityId};
use wildstead::entity::breeding::BreedingCapability;
use wildstead::entity::condition::{ConditionState, Nutrient, MAX_NUTRIENT};
use wildstead::simulation::registry::CapabilityRegistry;
use wildstead::simulation::tick::{run_condition_tick, SimulationEvent};

#[test]
fn test_thirst_drains_over_half_a_day() {
    let mut calendar = Calendar::new(24_000);
    let config = ConditionConfig::default();
    let mut registry = CapabilityRegistry::new();

    let actor = EntityId::new();
    registry.attach_condition(actor, ConditionState::new(&calendar));

    // Update every 100 ticks for half a day (12 000 ticks = 50 thirst)
    for _ in 0..120 {
        calendar.advance_by(100);
        run_condition_tick(&mut registry, &config, &calendar);
    }

    let thirst = registry.condition(actor).unwrap().thirst();
    assert!(
        (thirst - 20.0).abs() < 0.5,
        "thirst should drain ~50 points over half a day, got {}",
        thirst
    );
}

#[test]
fn test_drinking_through_a_day_keeps_actor_hydrated() {
    let mut calendar = Calendar::new(24_000);
    let config = ConditionConfig::default();
    let mut registry = CapabilityRegistry::new();

    let actor = EntityId::new();
    registry.attach_condition(actor, ConditionState::new(&calendar));

    // Sip 2.5 points every 500 ticks; that outpaces the ~2.08-point drain
    for _ in 0..48 {
        calendar.advance_by(500);
        run_condition_tick(&mut registry, &config, &calendar);
        registry
            .condition_mut(actor)
            .unwrap()
            .drink(&calendar, 2.5);
    }

    let thirst = registry.condition(actor).unwrap().thirst();
    assert!(
        thirst >= 70.0,
        "regular drinking should hold thirst at or above start, got {}",
        thirst
    );
}

#[test]
fn test_zero_decay_modifier_freezes_nutrients() {
    let mut calendar = Calendar::new(24_000);
    let config = ConditionConfig::parse_toml("decay_modifier = 0.0\n").unwrap();
    let mut registry = CapabilityRegistry::new();

    let actor = EntityId::new();
    registry.attach_condition(actor, ConditionState::new(&calendar));

    calendar.advance_by(5 * 24_000);
    run_condition_tick(&mut registry, &config, &calendar);

    let state = registry.condition_mut(actor).unwrap();
    let grain = state.nutrient(&config, &calendar, Nutrient::Grain);
    assert_eq!(grain, 0.8 * MAX_NUTRIENT);
}

#[test]
fn test_starvation_lowers_max_vitality() {
    let mut calendar = Calendar::new(24_000);
    let config = ConditionConfig::default();
    let mut registry = CapabilityRegistry::new();

    let actor = EntityId::new();
    registry.attach_condition(actor, ConditionState::new(&calendar));

    let fed_vitality = registry.condition(actor).unwrap().max_vitality(&config);

    // Three starved weeks
    calendar.advance_by(21 * 24_000);
    run_condition_tick(&mut registry, &config, &calendar);

    let starved_vitality = registry.condition(actor).unwrap().max_vitality(&config);
    assert!(
        starved_vitality < fed_vitality,
        "vitality should fall with nutrition: {} -> {}",
        fed_vitality,
        starved_vitality
    );
    assert!(starved_vitality >= config.min_vitality);
}

#[test]
fn test_gestation_lifecycle_with_calendar() {
    let mut calendar = Calendar::new(1_000);
    let config = ConditionConfig::default();
    let mut registry = CapabilityRegistry::new();

    let sow = EntityId::new();
    registry.attach_condition(sow, ConditionState::new(&calendar));
    registry.attach_breeding(sow, BreedingCapability::new(AnimalKind::Pig).with_gestation_days(5));

    // Fertilize on day 10
    calendar.set_tick(10 * 1_000);
    registry.breeding_mut(sow).unwrap().on_fertilized(&calendar);

    // Days 10..14: pregnant, no birth
    let mut events = Vec::new();
    while calendar.current_day() < 15 {
        calendar.advance_by(1_000);
        events.extend(run_condition_tick(&mut registry, &config, &calendar));
        if calendar.current_day() < 15 {
            assert!(events.is_empty(), "no birth before day 15");
        }
    }

    assert_eq!(
        events,
        vec![SimulationEvent::Birth {
            entity: sow,
            kind: AnimalKind::Pig,
            day: 15,
        }]
    );
    assert!(!registry.breeding(sow).unwrap().is_pregnant());
}

#[test]
fn test_calendar_rewind_spares_pregnancy() {
    let mut calendar = Calendar::new(1_000);
    let config = ConditionConfig::default();
    let mut registry = CapabilityRegistry::new();

    let mare = EntityId::new();
    registry.attach_breeding(mare, BreedingCapability::new(AnimalKind::Horse).with_gestation_days(5));

    calendar.set_tick(10 * 1_000);
    registry.breeding_mut(mare).unwrap().on_fertilized(&calendar);

    // Admin rewind to day 5
    calendar.set_tick(5 * 1_000);
    let events = run_condition_tick(&mut registry, &config, &calendar);
    assert!(events.is_empty());

    let breeding = registry.breeding(mare).unwrap();
    assert!(breeding.is_pregnant());
    assert_eq!(breeding.pregnant_since(), Some(5));
}

#[test]
fn test_persistence_across_reload() {
    let mut calendar = Calendar::new(24_000);
    let config = ConditionConfig::default();
    let mut registry = CapabilityRegistry::new();

    let actor = EntityId::new();
    registry.attach_condition(actor, ConditionState::new(&calendar));
    let mut breeding = BreedingCapability::new(AnimalKind::Cow);
    breeding.on_fertilized(&calendar);
    registry.attach_breeding(actor, breeding);

    calendar.advance_by(6_000);
    run_condition_tick(&mut registry, &config, &calendar);

    // Save both capabilities through their flat snapshots
    let condition_json = serde_json::to_string(
        &registry
            .condition_mut(actor)
            .unwrap()
            .snapshot(&config, &calendar),
    )
    .unwrap();
    let breeding_json = serde_json::to_string(&registry.breeding(actor).unwrap().snapshot()).unwrap();
    let saved_thirst = registry.condition(actor).unwrap().thirst();

    // Reload into a fresh registry
    let mut reloaded = CapabilityRegistry::new();
    reloaded.attach_condition(
        actor,
        ConditionState::from_snapshot(&serde_json::from_str(&condition_json).unwrap()),
    );
    let mut restored_breeding = BreedingCapability::new(AnimalKind::Cow);
    restored_breeding.restore(&serde_json::from_str(&breeding_json).unwrap());
    reloaded.attach_breeding(actor, restored_breeding);

    assert_eq!(reloaded.condition(actor).unwrap().thirst(), saved_thirst);
    assert_eq!(reloaded.breeding(actor).unwrap().pregnant_since(), Some(0));

    // A reloaded tracker picks up decay from where the save left off
    calendar.advance_by(2_400);
    run_condition_tick(&mut reloaded, &config, &calendar);
    let thirst = reloaded.condition(actor).unwrap().thirst();
    assert!((thirst - (saved_thirst - 10.0)).abs() < 1e-2);
}

#[test]
fn test_despawn_removes_capabilities() {
    let calendar = Calendar::default();
    let mut registry = CapabilityRegistry::new();

    let pig = EntityId::new();
    registry.attach_condition(pig, ConditionState::new(&calendar));
    registry.attach_breeding(pig, BreedingCapability::new(AnimalKind::Pig));

    registry.remove(pig);
    assert_eq!(registry.condition_count(), 0);
    assert_eq!(registry.breeding_count(), 0);
}
