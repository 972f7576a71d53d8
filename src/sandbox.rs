//! Sandbox editing tools.
//!
//! In sandbox mode a press either drops a new body from the active tool's
//! template or moves the goal. There is no cap on the number of bodies.

use bevy::color::Srgba;
use bevy::color::palettes::tailwind::EMERALD_500;
use bevy::math::DVec2;

use crate::error::SlingshotError;
use crate::types::{Body, BodyKind};

/// Active sandbox tool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tool {
    #[default]
    Planet,
    BlackHole,
    Goal,
}

impl Tool {
    pub const ALL: [Tool; 3] = [Tool::Planet, Tool::BlackHole, Tool::Goal];

    pub fn label(&self) -> &'static str {
        match self {
            Tool::Planet => "Planet",
            Tool::BlackHole => "Black Hole",
            Tool::Goal => "Goal",
        }
    }

    /// Template for body-placing tools; `None` for the goal tool.
    pub fn template(&self) -> Option<BodyTemplate> {
        match self {
            Tool::Planet => Some(BodyTemplate::PLANET),
            Tool::BlackHole => Some(BodyTemplate::BLACK_HOLE),
            Tool::Goal => None,
        }
    }
}

/// Radius, mass and look of a body dropped by a tool.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyTemplate {
    pub radius: f64,
    pub mass: f64,
    pub color: Srgba,
    pub kind: BodyKind,
}

impl BodyTemplate {
    pub const PLANET: BodyTemplate = BodyTemplate {
        radius: 30.0,
        mass: 1000.0,
        color: EMERALD_500,
        kind: BodyKind::Planet,
    };

    pub const BLACK_HOLE: BodyTemplate = BodyTemplate {
        radius: 15.0,
        mass: 3000.0,
        color: Srgba::BLACK,
        kind: BodyKind::BlackHole,
    };

    /// Instantiate the template at `pos`.
    pub fn place(&self, pos: DVec2) -> Result<Body, SlingshotError> {
        Body::new(pos, self.radius, self.mass, self.color, self.kind)
    }
}

/// What a sandbox press did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SandboxEdit {
    /// A body was appended at this index.
    BodyPlaced(usize),
    /// The goal moved to this position.
    GoalMoved(DVec2),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planet_template() {
        let body = Tool::Planet
            .template()
            .unwrap()
            .place(DVec2::new(10.0, 20.0))
            .unwrap();
        assert_eq!(body.pos(), DVec2::new(10.0, 20.0));
        assert_eq!(body.radius(), 30.0);
        assert_eq!(body.mass(), 1000.0);
        assert_eq!(body.kind(), BodyKind::Planet);
    }

    #[test]
    fn test_black_hole_template() {
        let body = Tool::BlackHole.template().unwrap().place(DVec2::ZERO).unwrap();
        assert_eq!(body.radius(), 15.0);
        assert_eq!(body.mass(), 3000.0);
        assert_eq!(body.kind(), BodyKind::BlackHole);
    }

    #[test]
    fn test_goal_tool_has_no_template() {
        assert_eq!(Tool::Goal.template(), None);
        assert_eq!(Tool::default(), Tool::Planet);
    }
}
