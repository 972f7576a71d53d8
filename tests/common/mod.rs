//! Common test utilities for integration tests.

#![allow(dead_code)]

use bevy::color::palettes::tailwind::BLUE_500;
use bevy::math::DVec2;
use slingshot::scenarios::presets::EMPTY_SPACE;
use slingshot::types::{Body, BodyKind};
use slingshot::{Simulation, SimulationConfig};

/// World width used by the integration tests.
pub const WIDTH: f64 = 800.0;
/// World height used by the integration tests.
pub const HEIGHT: f64 = 600.0;

/// An 800×600 world with no bodies: launch at (100, 500), goal at (700, 100).
pub fn empty_world() -> Simulation {
    empty_world_with(SimulationConfig::default())
}

/// [`empty_world`] with a custom configuration.
pub fn empty_world_with(config: SimulationConfig) -> Simulation {
    Simulation::new(config, &EMPTY_SPACE, WIDTH, HEIGHT).expect("valid empty world")
}

/// A planet at `pos`.
pub fn planet(pos: DVec2, radius: f64, mass: f64) -> Body {
    Body::new(pos, radius, mass, BLUE_500, BodyKind::Planet).expect("valid test body")
}

/// Press at a fixed point and release at `drag` away from it.
pub fn drag_and_release(sim: &mut Simulation, drag: DVec2) {
    let start = DVec2::new(400.0, 300.0);
    sim.press(start);
    sim.move_to(start + drag * 0.5);
    sim.release(start + drag);
}

/// Tick until the flight ends or `max_ticks` is reached.
pub fn run_flight(sim: &mut Simulation, max_ticks: usize) {
    for _ in 0..max_ticks {
        if sim.tick().is_some() {
            return;
        }
    }
}

/// Reference Euler integration, written independently of the library:
/// v += Σ G·M·d/|d|³, then x += v. Returns the position after each tick.
pub fn reference_trajectory(
    mut pos: DVec2,
    mut vel: DVec2,
    bodies: &[(DVec2, f64)],
    g: f64,
    ticks: usize,
) -> Vec<DVec2> {
    let mut path = Vec::with_capacity(ticks);

    for _ in 0..ticks {
        for &(body_pos, mass) in bodies {
            let d = body_pos - pos;
            let r = d.length();
            vel += d * (g * mass / (r * r * r));
        }
        pos += vel;
        path.push(pos);
    }

    path
}
