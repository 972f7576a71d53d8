//! Physics for the slingshot rocket.
//!
//! Gravity from fixed bodies plus a one-tick integrator. In the app the
//! step runs in Bevy's FixedUpdate schedule, one tick per fixed frame.

mod gravity;
mod integrator;

#[cfg(test)]
mod proptest_physics;

use bevy::prelude::*;

pub use gravity::{Contact, GravityField};
pub use integrator::{Integrator, step};

use crate::simulation::Simulation;

/// Physics ticks per second.
pub const TICK_RATE_HZ: f64 = 60.0;

/// Plugin running the simulation tick on a fixed timestep.
pub struct PhysicsPlugin;

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(TICK_RATE_HZ))
            .add_systems(FixedUpdate, physics_step);
    }
}

/// Advance the simulation by one tick. Does nothing outside of flight.
fn physics_step(mut simulation: ResMut<Simulation>) {
    simulation.tick();
}
