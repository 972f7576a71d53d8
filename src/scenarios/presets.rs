//! Preset level definitions.

use bevy::color::palettes::tailwind::{AMBER_500, BLUE_500};

use crate::types::BodyKind;

use super::{Anchor, BodySpec, Level};

/// All available levels. The first one is loaded at startup.
pub static LEVELS: &[Level] = &[CLASSIC, EMPTY_SPACE];

/// Launch point shared by the presets: 100 units in from the bottom-left.
const LAUNCH: Anchor = Anchor::offset_from(0.0, 1.0, 100.0, -100.0);

/// Goal shared by the presets: 100 units in from the top-right.
const GOAL: Anchor = Anchor::offset_from(1.0, 0.0, -100.0, 100.0);

/// The classic two-planet level: launch bottom-left, goal top-right, a
/// heavy planet in the middle and a smaller one guarding the goal.
pub const CLASSIC: Level = Level {
    id: "classic",
    name: "Classic",
    description: "Slingshot around two planets to reach the target.",
    bodies: &[
        BodySpec {
            at: Anchor::fraction(0.5, 0.5),
            radius: 40.0,
            mass: 1500.0,
            color: BLUE_500,
            kind: BodyKind::Planet,
        },
        BodySpec {
            at: Anchor::fraction(0.75, 0.3),
            radius: 25.0,
            mass: 800.0,
            color: AMBER_500,
            kind: BodyKind::Planet,
        },
    ],
    launch: LAUNCH,
    goal: GOAL,
};

/// No bodies at all, for building levels from scratch in sandbox mode.
pub const EMPTY_SPACE: Level = Level {
    id: "empty",
    name: "Empty Space",
    description: "Nothing but the rocket and the target. Build your own level.",
    bodies: &[],
    launch: LAUNCH,
    goal: GOAL,
};
