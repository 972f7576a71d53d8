//! Gizmo rendering of the simulation.
//!
//! Draws the goal, bodies, trail, rocket and aim line every frame straight
//! from the [`Simulation`] resource. Nothing is spawned as an entity.

use bevy::color::palettes::tailwind::{EMERALD_500, PURPLE_500, RED_500};
use bevy::math::DVec2;
use bevy::prelude::*;

use crate::simulation::Simulation;
use crate::types::BodyKind;

/// Plugin providing the 2D camera and world drawing.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_camera)
            .add_systems(Update, draw_world);
    }
}

/// Aim line dash pattern: drawn length, then gap length.
const AIM_DASH: (f32, f32) = (5.0, 5.0);

const ROCKET_COLOR: Color = Color::srgb(0.973, 0.98, 0.988);
const TRAIL_COLOR: Color = Color::srgba(1.0, 1.0, 1.0, 0.4);

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Convert a simulation position (top-left origin, y down) into 2D world
/// space for a camera centered on the window (y up).
pub fn to_render(pos: DVec2, world_size: DVec2) -> Vec2 {
    Vec2::new(
        (pos.x - world_size.x * 0.5) as f32,
        (world_size.y * 0.5 - pos.y) as f32,
    )
}

/// Split the segment `from → to` into dashes of length `on` separated by
/// gaps of length `off`. The last dash is clipped at `to`.
pub fn dash_segments(from: Vec2, to: Vec2, on: f32, off: f32) -> Vec<(Vec2, Vec2)> {
    let length = from.distance(to);
    if length <= f32::EPSILON || on <= 0.0 {
        return Vec::new();
    }

    let dir = (to - from) / length;
    let period = on + off.max(0.0);
    let mut dashes = Vec::new();
    let mut start = 0.0;

    while start < length {
        let end = (start + on).min(length);
        dashes.push((from + dir * start, from + dir * end));
        start += period;
    }

    dashes
}

fn draw_world(mut gizmos: Gizmos, simulation: Res<Simulation>) {
    let size = simulation.bounds().size();
    let at = |pos: DVec2| Isometry2d::from_translation(to_render(pos, size));

    let goal = simulation.goal();
    gizmos.circle_2d(at(goal.pos()), goal.radius() as f32, EMERALD_500);
    gizmos.circle_2d(
        at(goal.pos()),
        goal.radius() as f32 * 0.6,
        EMERALD_500.with_alpha(0.3),
    );

    for body in simulation.bodies() {
        let radius = body.radius() as f32;
        match body.kind() {
            BodyKind::Planet => {
                gizmos.circle_2d(at(body.pos()), radius, body.color());
            }
            BodyKind::BlackHole => {
                // Black on black is invisible; draw the glowing rim instead
                gizmos.circle_2d(at(body.pos()), radius, PURPLE_500);
                gizmos.circle_2d(at(body.pos()), radius + 4.0, PURPLE_500.with_alpha(0.3));
            }
        }
    }

    let rocket = simulation.rocket();
    if !rocket.trail.is_empty() {
        let points = rocket
            .trail
            .iter()
            .chain(std::iter::once(&rocket.pos))
            .map(|&p| to_render(p, size));
        gizmos.linestrip_2d(points, TRAIL_COLOR);
    }
    gizmos.circle_2d(at(rocket.pos), rocket.radius as f32, ROCKET_COLOR);

    if let Some((from, to)) = simulation.aim_line() {
        let (on, off) = AIM_DASH;
        for (a, b) in dash_segments(to_render(from, size), to_render(to, size), on, off) {
            gizmos.line_2d(a, b, RED_500);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_render_flips_y_and_centers() {
        let size = DVec2::new(800.0, 600.0);
        assert_eq!(to_render(DVec2::new(400.0, 300.0), size), Vec2::ZERO);
        assert_eq!(to_render(DVec2::new(0.0, 0.0), size), Vec2::new(-400.0, 300.0));
        assert_eq!(to_render(DVec2::new(800.0, 600.0), size), Vec2::new(400.0, -300.0));
    }

    #[test]
    fn test_dash_segments_cover_line() {
        let dashes = dash_segments(Vec2::ZERO, Vec2::new(23.0, 0.0), 5.0, 5.0);
        assert_eq!(dashes.len(), 3);
        assert_eq!(dashes[0], (Vec2::ZERO, Vec2::new(5.0, 0.0)));
        assert_eq!(dashes[1], (Vec2::new(10.0, 0.0), Vec2::new(15.0, 0.0)));
        // Last dash clipped at the end point
        assert_eq!(dashes[2], (Vec2::new(20.0, 0.0), Vec2::new(23.0, 0.0)));
    }

    #[test]
    fn test_dash_segments_degenerate() {
        assert!(dash_segments(Vec2::ONE, Vec2::ONE, 5.0, 5.0).is_empty());
        assert!(dash_segments(Vec2::ZERO, Vec2::X, 0.0, 5.0).is_empty());
    }
}
