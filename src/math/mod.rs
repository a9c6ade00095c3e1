// src/math/mod.rs

pub mod integrator;
pub mod state;

pub use integrator::{rk4_step, StateDerivative};
pub use state::{join_state, split_state, Coordinates, Matrix4, State};
