pub mod registry;
pub mod tick;

pub use registry::CapabilityRegistry;
pub use tick::{run_condition_tick, SimulationEvent};
