//! Headless Bevy integration tests.
//!
//! These tests verify the simulation resource and physics plugin work
//! without a window or GPU.

mod common;

use bevy::math::DVec2;
use bevy::prelude::*;
use slingshot::physics::{PhysicsPlugin, TICK_RATE_HZ};
use slingshot::{Simulation, SimulationState};

fn create_minimal_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app
}

#[test]
fn test_simulation_resource_initializes() {
    let mut app = create_minimal_app();
    app.insert_resource(Simulation::with_defaults(800.0, 600.0).unwrap());

    app.update();

    let simulation = app.world().resource::<Simulation>();
    assert_eq!(simulation.state(), SimulationState::Aiming);
    assert_eq!(simulation.bodies().len(), 2);
}

#[test]
fn test_physics_plugin_sets_fixed_rate() {
    let mut app = create_minimal_app();
    app.insert_resource(common::empty_world());
    app.add_plugins(PhysicsPlugin);

    let fixed = app.world().resource::<Time<Fixed>>();
    let expected = 1.0 / TICK_RATE_HZ;
    assert!((fixed.timestep().as_secs_f64() - expected).abs() < 1e-6);
}

#[test]
fn test_fixed_update_advances_flight() {
    let mut app = create_minimal_app();
    let mut simulation = common::empty_world();
    common::drag_and_release(&mut simulation, DVec2::new(-20.0, 0.0));
    app.insert_resource(simulation);
    app.add_plugins(PhysicsPlugin);

    for _ in 0..3 {
        app.world_mut().run_schedule(FixedUpdate);
    }

    let simulation = app.world().resource::<Simulation>();
    assert_eq!(simulation.state(), SimulationState::Flight);
    assert_eq!(simulation.flight_ticks(), 3);
    assert_eq!(simulation.rocket().pos, DVec2::new(103.0, 500.0));
    assert_eq!(simulation.rocket().trail.len(), 3);
}

#[test]
fn test_fixed_update_idle_while_aiming() {
    let mut app = create_minimal_app();
    app.insert_resource(common::empty_world());
    app.add_plugins(PhysicsPlugin);

    app.world_mut().run_schedule(FixedUpdate);

    let simulation = app.world().resource::<Simulation>();
    assert_eq!(simulation.state(), SimulationState::Aiming);
    assert_eq!(simulation.flight_ticks(), 0);
    assert!(simulation.rocket().trail.is_empty());
}
