//! Pointer tracking for the slingshot gesture, plus the Bevy systems that
//! feed window mouse and keyboard input into the simulation.
//!
//! The window cursor uses a top-left origin with y pointing down, the same
//! frame as the simulation, so cursor positions are passed through as-is.

use bevy::math::DVec2;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::{EguiContexts, EguiPrimaryContextPass};

use crate::outcome::Mode;
use crate::plugin::SlingshotSet;
use crate::simulation::Simulation;

/// Pointer position and drag origin.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pointer {
    /// Last known pointer position.
    pub current: DVec2,
    /// Where the active drag started.
    pub origin: DVec2,
    /// Whether a drag is in progress.
    pub pressed: bool,
}

impl Pointer {
    /// Start a drag at `pos`.
    pub fn press(&mut self, pos: DVec2) {
        self.current = pos;
        self.origin = pos;
        self.pressed = true;
    }

    /// Track the pointer whether or not a drag is active.
    pub fn move_to(&mut self, pos: DVec2) {
        self.current = pos;
    }

    /// Finish the drag at `pos`, returning its displacement
    /// (`release - press`). `None` if no drag was active.
    pub fn release(&mut self, pos: DVec2) -> Option<DVec2> {
        self.current = pos;
        if !self.pressed {
            return None;
        }
        self.pressed = false;
        Some(pos - self.origin)
    }

    /// Abandon any drag in progress.
    pub fn cancel(&mut self) {
        self.pressed = false;
    }

    /// Current drag displacement while pressed.
    pub fn drag(&self) -> Option<DVec2> {
        self.pressed.then(|| self.current - self.origin)
    }
}

/// Slingshot launch velocity: the drag displacement, reversed and scaled.
pub fn launch_velocity(drag: DVec2, power: f64) -> DVec2 {
    -drag * power
}

/// Plugin wiring window input into the simulation.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (sync_world_size, keyboard_shortcuts))
            // Runs in the egui pass, after the panels, so toolbar clicks
            // can be filtered out
            .add_systems(
                EguiPrimaryContextPass,
                pointer_input.in_set(SlingshotSet::Pointer),
            );
    }
}

/// Keep the world bounds equal to the window's logical size.
fn sync_world_size(
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut simulation: ResMut<Simulation>,
) {
    let Ok(window) = window_query.single() else {
        return;
    };

    let size = DVec2::new(window.width() as f64, window.height() as f64);
    if size == simulation.bounds().size() {
        return;
    }

    if let Err(err) = simulation.resize(size.x, size.y) {
        // Minimized windows report a zero size
        debug!("Ignoring window resize: {err}");
    }
}

/// R: reset the rocket. Escape: back to play mode.
fn keyboard_shortcuts(keys: Res<ButtonInput<KeyCode>>, mut simulation: ResMut<Simulation>) {
    if keys.just_pressed(KeyCode::KeyR) {
        simulation.reset();
    }

    if keys.just_pressed(KeyCode::Escape) {
        simulation.set_mode(Mode::Play);
    }
}

/// Forward left-button press/move/release to the simulation.
fn pointer_input(
    mouse: Res<ButtonInput<MouseButton>>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut simulation: ResMut<Simulation>,
    mut contexts: EguiContexts,
) {
    // Only check egui when no drag is active; a release over the toolbar
    // must still reach the simulation.
    if !simulation.pointer().pressed
        && let Ok(ctx) = contexts.ctx_mut()
        && ctx.wants_pointer_input()
    {
        return;
    }

    let cursor = window_query
        .single()
        .ok()
        .and_then(|window| window.cursor_position())
        .map(|cursor| DVec2::new(cursor.x as f64, cursor.y as f64));

    forward_pointer(
        &mut simulation,
        cursor,
        mouse.just_pressed(MouseButton::Left),
        mouse.just_released(MouseButton::Left),
    );
}

/// Apply one frame of left-button state to the simulation.
///
/// Without a cursor (pointer outside the window) presses and moves are
/// dropped, but a release still lands at the last known position so a drag
/// never outlives the button.
pub fn forward_pointer(
    simulation: &mut Simulation,
    cursor: Option<DVec2>,
    just_pressed: bool,
    just_released: bool,
) {
    let Some(pos) = cursor else {
        if just_released {
            let last = simulation.pointer().current;
            simulation.release(last);
        }
        return;
    };

    if just_pressed {
        simulation.press(pos);
    }

    simulation.move_to(pos);

    if just_released {
        simulation.release(pos);
    }
}
