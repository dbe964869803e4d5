//! Wildstead - Survival Simulation Condition Core

pub mod core;
pub mod entity;
pub mod simulation;
