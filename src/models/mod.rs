// src/models/mod.rs

pub mod drive_cycle;
pub mod half_car;
pub mod longitudinal;

pub use drive_cycle::{DriveCommand, DriveCycle, DriveCycleRunner};
pub use half_car::HalfCarModel;
pub use longitudinal::LongitudinalState;
