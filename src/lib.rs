//! Slingshot - Orbital Sandbox Simulator
//!
//! A library crate providing the gravitational slingshot game core (bodies,
//! rocket, goal and the per-tick physics state machine) plus the Bevy
//! plugins that render and drive it.

pub mod collision;
pub mod config;
pub mod error;
pub mod input;
pub mod outcome;
pub mod physics;
pub mod plugin;
pub mod render;
pub mod sandbox;
pub mod scenarios;
pub mod simulation;
pub mod types;
pub mod ui;

pub use config::SimulationConfig;
pub use error::SlingshotError;
pub use outcome::{FlightOutcome, Mode, SimulationState};
pub use sandbox::Tool;
pub use simulation::Simulation;

#[cfg(test)]
pub mod test_utils;
