//! Termination tests run after the rocket moves.
//!
//! Checked in a fixed order each tick: body contact, then world bounds,
//! then the goal. The first hit wins.

use bevy::math::DVec2;

use crate::error::{SlingshotError, is_positive};
use crate::outcome::FlightOutcome;
use crate::physics::GravityField;
use crate::types::{Body, Goal, Rocket};

/// Rectangular world extent `[0, width] × [0, height]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldBounds {
    width: f64,
    height: f64,
}

impl WorldBounds {
    pub fn new(width: f64, height: f64) -> Result<Self, SlingshotError> {
        if !is_positive(width) || !is_positive(height) {
            return Err(SlingshotError::InvalidWorldSize { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn size(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }

    /// Inclusive on every edge.
    pub fn contains(&self, pos: DVec2) -> bool {
        (0.0..=self.width).contains(&pos.x) && (0.0..=self.height).contains(&pos.y)
    }
}

/// Classify the rocket's position after a move.
///
/// Returns `None` while the flight should continue.
pub fn check_termination(
    rocket: &Rocket,
    bodies: &[Body],
    goal: &Goal,
    bounds: &WorldBounds,
    min_distance_squared: f64,
) -> Option<FlightOutcome> {
    // The field is only used for its contact test here
    let field = GravityField::new(bodies, 0.0, min_distance_squared);

    if let Some(contact) = field.contact(rocket.pos, rocket.radius) {
        return Some(FlightOutcome::Crashed { body: contact.body });
    }

    if !bounds.contains(rocket.pos) {
        return Some(FlightOutcome::Lost);
    }

    if goal.contains(rocket.pos) {
        return Some(FlightOutcome::Won);
    }

    None
}
