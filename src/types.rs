//! Core simulation types and constants for the slingshot sandbox.
//!
//! All positions are in world units with the origin at the top-left corner
//! and the y axis pointing down, so pointer coordinates map 1:1.

use std::collections::VecDeque;

use bevy::color::Srgba;
use bevy::math::DVec2;

use crate::error::{SlingshotError, is_positive};

/// Gravitational constant used by the simulation (world units, per tick).
pub const G: f64 = 0.5;

/// Drag-to-velocity scale factor applied on launch.
pub const LAUNCH_POWER: f64 = 0.05;

/// Maximum number of past rocket positions kept for the motion streak.
pub const TRAIL_CAPACITY: usize = 50;

/// Largest trail length a configuration may ask for.
pub const MAX_TRAIL_CAPACITY: usize = 10_000;

/// Rocket collision radius.
pub const ROCKET_RADIUS: f64 = 6.0;

/// Goal region radius.
pub const GOAL_RADIUS: f64 = 20.0;

/// Squared separation below which the rocket is considered to be inside a
/// body center. Keeps `1/r²` finite.
pub const MIN_DISTANCE_SQUARED: f64 = 1e-6;

/// Physical variant of a body. Both variants share the same physics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyKind {
    Planet,
    BlackHole,
}

/// A fixed, massive object exerting gravity on the rocket.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    pos: DVec2,
    radius: f64,
    mass: f64,
    color: Srgba,
    kind: BodyKind,
}

impl Body {
    /// Create a body, rejecting non-positive or non-finite mass and radius.
    pub fn new(
        pos: DVec2,
        radius: f64,
        mass: f64,
        color: Srgba,
        kind: BodyKind,
    ) -> Result<Self, SlingshotError> {
        if !is_positive(mass) || !is_positive(radius) {
            return Err(SlingshotError::InvalidBody { mass, radius });
        }
        Ok(Self {
            pos,
            radius,
            mass,
            color,
            kind,
        })
    }

    pub fn pos(&self) -> DVec2 {
        self.pos
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn color(&self) -> Srgba {
        self.color
    }

    pub fn kind(&self) -> BodyKind {
        self.kind
    }
}

/// Bounded FIFO history of rocket positions.
///
/// Pushing beyond capacity evicts the oldest entry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Trail {
    points: VecDeque<DVec2>,
    capacity: usize,
}

impl Trail {
    /// Storage grows on demand; `capacity` only bounds the length.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: VecDeque::new(),
            capacity,
        }
    }

    pub fn push(&mut self, point: DVec2) {
        if self.capacity == 0 {
            return;
        }
        self.points.push_back(point);
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points from oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &DVec2> + ExactSizeIterator {
        self.points.iter()
    }
}

/// The single projectile under simulation.
#[derive(Clone, Debug, PartialEq)]
pub struct Rocket {
    /// Current position.
    pub pos: DVec2,
    /// Velocity in world units per tick.
    pub vel: DVec2,
    /// Position restored by [`Rocket::reset`].
    pub launch_pos: DVec2,
    /// Collision radius.
    pub radius: f64,
    /// Recent positions, oldest first.
    pub trail: Trail,
}

impl Rocket {
    pub fn new(launch_pos: DVec2, radius: f64, trail_capacity: usize) -> Self {
        Self {
            pos: launch_pos,
            vel: DVec2::ZERO,
            launch_pos,
            radius,
            trail: Trail::with_capacity(trail_capacity),
        }
    }

    /// Return to the launch point at rest with an empty trail.
    pub fn reset(&mut self) {
        self.pos = self.launch_pos;
        self.vel = DVec2::ZERO;
        self.trail.clear();
    }

    pub fn speed(&self) -> f64 {
        self.vel.length()
    }
}

/// Circular target region.
#[derive(Clone, Debug, PartialEq)]
pub struct Goal {
    pos: DVec2,
    radius: f64,
}

impl Goal {
    pub fn new(pos: DVec2, radius: f64) -> Result<Self, SlingshotError> {
        if !is_positive(radius) {
            return Err(SlingshotError::InvalidGoal { radius });
        }
        Ok(Self { pos, radius })
    }

    pub fn pos(&self) -> DVec2 {
        self.pos
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Move the goal center, keeping its radius.
    pub fn relocate(&mut self, pos: DVec2) {
        self.pos = pos;
    }

    /// Strict containment: a point on the rim is outside.
    pub fn contains(&self, point: DVec2) -> bool {
        self.pos.distance(point) < self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::color::palettes::tailwind::BLUE_500;

    #[test]
    fn test_body_rejects_non_positive_mass() {
        let err = Body::new(DVec2::ZERO, 10.0, 0.0, BLUE_500, BodyKind::Planet).unwrap_err();
        assert_eq!(
            err,
            SlingshotError::InvalidBody {
                mass: 0.0,
                radius: 10.0
            }
        );
    }

    #[test]
    fn test_body_rejects_nan_radius() {
        assert!(Body::new(DVec2::ZERO, f64::NAN, 100.0, BLUE_500, BodyKind::Planet).is_err());
        assert!(Body::new(DVec2::ZERO, -1.0, 100.0, BLUE_500, BodyKind::BlackHole).is_err());
    }

    #[test]
    fn test_trail_evicts_oldest() {
        let mut trail = Trail::with_capacity(3);
        for i in 0..5 {
            trail.push(DVec2::new(i as f64, 0.0));
        }
        assert_eq!(trail.len(), 3);
        let xs: Vec<f64> = trail.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_huge_capacity_trail_does_not_preallocate() {
        let mut trail = Trail::with_capacity(usize::MAX);
        trail.push(DVec2::ONE);
        trail.push(DVec2::ZERO);
        assert_eq!(trail.len(), 2);
    }

    #[test]
    fn test_zero_capacity_trail_stays_empty() {
        let mut trail = Trail::with_capacity(0);
        trail.push(DVec2::ONE);
        assert!(trail.is_empty());
    }

    #[test]
    fn test_rocket_reset() {
        let mut rocket = Rocket::new(DVec2::new(100.0, 500.0), ROCKET_RADIUS, TRAIL_CAPACITY);
        rocket.pos = DVec2::new(300.0, 200.0);
        rocket.vel = DVec2::new(-5.0, 2.0);
        rocket.trail.push(DVec2::new(100.0, 500.0));

        rocket.reset();

        assert_eq!(rocket.pos, DVec2::new(100.0, 500.0));
        assert_eq!(rocket.vel, DVec2::ZERO);
        assert!(rocket.trail.is_empty());
    }

    #[test]
    fn test_goal_contains_is_strict() {
        let goal = Goal::new(DVec2::new(50.0, 50.0), GOAL_RADIUS).unwrap();
        assert!(goal.contains(DVec2::new(50.0, 50.0)));
        assert!(goal.contains(DVec2::new(69.9, 50.0)));
        assert!(!goal.contains(DVec2::new(70.0, 50.0)));
    }

    #[test]
    fn test_goal_rejects_zero_radius() {
        assert_eq!(
            Goal::new(DVec2::ZERO, 0.0),
            Err(SlingshotError::InvalidGoal { radius: 0.0 })
        );
    }
}
