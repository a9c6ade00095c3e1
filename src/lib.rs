// src/lib.rs

//! ハーフカーモデルによる車体の上下・ピッチ挙動シミュレーション
//!
//! 縦加速度の入力に対し、ばね上の上下変位とピッチ角、前後ばね下の上下変位を
//! 固定ステップの RK4 で求める。

pub mod config;
pub mod math;
pub mod models;
pub mod simulation;

pub use config::{Scenario, VehicleParameters};
pub use math::{rk4_step, State, StateDerivative};
pub use models::{DriveCycle, DriveCycleRunner, HalfCarModel};
pub use simulation::error::SimError;
pub use simulation::{OutputRecord, SimulationRun};
