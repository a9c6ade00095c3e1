// src/config/mod.rs

pub mod parameters;
pub mod presets;
pub mod scenario;

pub use parameters::VehicleParameters;
pub use scenario::{Scenario, VehicleEntry};
