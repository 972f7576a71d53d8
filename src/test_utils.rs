//! Test utilities for slingshot simulation tests.
//!
//! Provides body and orbit fixtures plus helpers for checking physical
//! invariants.

use bevy::color::palettes::tailwind::BLUE_500;
use bevy::math::DVec2;

use crate::types::{Body, BodyKind, G};

/// Fixtures for building bodies and initial rocket states.
pub mod fixtures {
    use super::*;

    /// A planet at `pos`. Panics on invalid mass or radius.
    pub fn planet(pos: DVec2, radius: f64, mass: f64) -> Body {
        Body::new(pos, radius, mass, BLUE_500, BodyKind::Planet).expect("valid test body")
    }

    /// A body at (500, 500) and a rocket state `distance` to its right,
    /// moving perpendicular at `speed_factor` times the circular speed.
    ///
    /// `speed_factor = 1.0` gives a circular orbit; below 1 the rocket starts
    /// at apoapsis of an ellipse.
    pub fn orbit(distance: f64, mass: f64, speed_factor: f64) -> (Body, DVec2, DVec2) {
        let center = DVec2::new(500.0, 500.0);
        let body = planet(center, 10.0, mass);
        let pos = center + DVec2::new(distance, 0.0);
        let v_circular = (G * mass / distance).sqrt();
        (body, pos, DVec2::new(0.0, -v_circular * speed_factor))
    }
}

/// Assertions for verifying physical invariants.
pub mod assertions {
    /// Relative change between two values, falling back to absolute change
    /// when the initial value is near zero.
    pub fn relative_drift(initial: f64, current: f64) -> f64 {
        if initial.abs() > 1e-10 {
            ((current - initial) / initial).abs()
        } else {
            (current - initial).abs()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_circular_orbit_speed() {
        let (_, pos, vel) = fixtures::orbit(100.0, 2000.0, 1.0);
        assert_eq!(pos, DVec2::new(600.0, 500.0));
        assert_relative_eq!(vel.length(), (G * 2000.0 / 100.0).sqrt());
    }

    #[test]
    fn test_relative_drift() {
        assert_relative_eq!(assertions::relative_drift(-2.0, -2.2), 0.1, epsilon = 1e-12);
        assert_relative_eq!(assertions::relative_drift(0.0, 0.5), 0.5);
    }
}
