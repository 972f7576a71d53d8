//! Level layouts.
//!
//! A level places bodies, the launch point and the goal relative to the
//! world size, so the same layout works for any window.

pub mod presets;

use bevy::color::Srgba;
use bevy::math::DVec2;

use crate::collision::WorldBounds;
use crate::error::SlingshotError;
use crate::types::{Body, BodyKind, Goal};

pub use presets::LEVELS;

/// A point expressed as a fraction of the world size plus a fixed offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
    pub fraction: DVec2,
    pub offset: DVec2,
}

impl Anchor {
    /// Purely proportional position.
    pub const fn fraction(x: f64, y: f64) -> Self {
        Self {
            fraction: DVec2::new(x, y),
            offset: DVec2::ZERO,
        }
    }

    /// Proportional position shifted by a fixed offset.
    pub const fn offset_from(fx: f64, fy: f64, dx: f64, dy: f64) -> Self {
        Self {
            fraction: DVec2::new(fx, fy),
            offset: DVec2::new(dx, dy),
        }
    }

    pub fn resolve(&self, bounds: &WorldBounds) -> DVec2 {
        self.fraction * bounds.size() + self.offset
    }
}

/// A body in a level layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodySpec {
    pub at: Anchor,
    pub radius: f64,
    pub mass: f64,
    pub color: Srgba,
    pub kind: BodyKind,
}

/// A predefined level.
#[derive(Clone, Copy, Debug)]
pub struct Level {
    /// Unique identifier.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Brief description.
    pub description: &'static str,
    /// Bodies, in gravity-accumulation order.
    pub bodies: &'static [BodySpec],
    /// Rocket launch point.
    pub launch: Anchor,
    /// Goal center.
    pub goal: Anchor,
}

/// A level resolved against concrete world bounds.
#[derive(Clone, Debug, PartialEq)]
pub struct LevelLayout {
    pub bodies: Vec<Body>,
    pub launch: DVec2,
    pub goal: Goal,
}

impl Level {
    /// Resolve every anchor and validate the resulting entities.
    pub fn build(&self, bounds: &WorldBounds, goal_radius: f64) -> Result<LevelLayout, SlingshotError> {
        let bodies = self
            .bodies
            .iter()
            .map(|body| {
                Body::new(
                    body.at.resolve(bounds),
                    body.radius,
                    body.mass,
                    body.color,
                    body.kind,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(LevelLayout {
            bodies,
            launch: self.launch.resolve(bounds),
            goal: Goal::new(self.goal.resolve(bounds), goal_radius)?,
        })
    }
}

/// Find a level by id.
#[cfg(test)]
pub(crate) fn find_level(id: &str) -> Option<&'static Level> {
    LEVELS.iter().find(|level| level.id == id)
}
