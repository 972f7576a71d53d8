//! Tunable simulation parameters.

use bevy::prelude::Resource;

use crate::error::{SlingshotError, is_positive};
use crate::physics::Integrator;
use crate::types::{
    G, GOAL_RADIUS, LAUNCH_POWER, MAX_TRAIL_CAPACITY, MIN_DISTANCE_SQUARED, ROCKET_RADIUS,
    TRAIL_CAPACITY,
};

/// Configuration for a [`Simulation`](crate::simulation::Simulation).
///
/// Defaults reproduce the classic game feel. Insert as a resource before
/// [`SlingshotPlugin`](crate::plugin::SlingshotPlugin) to override.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Gravitational constant.
    pub gravity_constant: f64,
    /// Drag-to-velocity scale factor.
    pub launch_power: f64,
    /// Maximum trail length, at most [`MAX_TRAIL_CAPACITY`].
    pub trail_capacity: usize,
    /// Rocket collision radius.
    pub rocket_radius: f64,
    /// Goal region radius.
    pub goal_radius: f64,
    /// Squared distances below this count as contact.
    pub min_distance_squared: f64,
    /// Time-stepping method.
    pub integrator: Integrator,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravity_constant: G,
            launch_power: LAUNCH_POWER,
            trail_capacity: TRAIL_CAPACITY,
            rocket_radius: ROCKET_RADIUS,
            goal_radius: GOAL_RADIUS,
            min_distance_squared: MIN_DISTANCE_SQUARED,
            integrator: Integrator::default(),
        }
    }
}

impl SimulationConfig {
    /// Check every numeric field, returning the first offender.
    pub fn validate(&self) -> Result<(), SlingshotError> {
        let checks = [
            ("gravity_constant", self.gravity_constant),
            ("launch_power", self.launch_power),
            ("rocket_radius", self.rocket_radius),
            ("goal_radius", self.goal_radius),
            ("min_distance_squared", self.min_distance_squared),
        ];

        for (field, value) in checks {
            if !is_positive(value) {
                return Err(SlingshotError::InvalidConfig { field, value });
            }
        }

        if self.trail_capacity > MAX_TRAIL_CAPACITY {
            return Err(SlingshotError::InvalidConfig {
                field: "trail_capacity",
                value: self.trail_capacity as f64,
            });
        }

        Ok(())
    }

    /// Replace the integrator, keeping the other fields.
    pub fn with_integrator(mut self, integrator: Integrator) -> Self {
        self.integrator = integrator;
        self
    }
}
