//! Bevy wiring for the slingshot game.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiPrimaryContextPass;

use crate::config::SimulationConfig;
use crate::input::InputPlugin;
use crate::physics::PhysicsPlugin;
use crate::render::RenderPlugin;
use crate::scenarios::LEVELS;
use crate::simulation::Simulation;
use crate::ui::UiPlugin;

/// World size used until the primary window reports its real size.
const INITIAL_WORLD_SIZE: (f64, f64) = (1280.0, 720.0);

/// System sets for ordering egui-pass systems.
///
/// Panels must run before pointer input so that `wants_pointer_input`
/// reflects this frame's toolbar.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SlingshotSet {
    /// Toolbar and overlay drawing.
    Panels,
    /// Pointer forwarding into the simulation.
    Pointer,
}

/// Plugin aggregating simulation, input, rendering and UI.
///
/// Reads [`SimulationConfig`] if it was inserted beforehand; an invalid
/// configuration falls back to the defaults.
pub struct SlingshotPlugin;

impl Plugin for SlingshotPlugin {
    fn build(&self, app: &mut App) {
        let config = effective_config(app.world().get_resource::<SimulationConfig>().cloned());

        let (width, height) = INITIAL_WORLD_SIZE;
        let simulation = match Simulation::new(config.clone(), &LEVELS[0], width, height) {
            Ok(simulation) => simulation,
            Err(err) => {
                error!("Cannot build simulation: {err}");
                return;
            }
        };

        app.insert_resource(config)
            .insert_resource(simulation)
            .configure_sets(
                EguiPrimaryContextPass,
                SlingshotSet::Pointer.after(SlingshotSet::Panels),
            )
            .add_plugins((PhysicsPlugin, InputPlugin, RenderPlugin, UiPlugin))
            .add_systems(Startup, fit_level_to_window);
    }
}

/// The inserted configuration if it validates, otherwise the defaults.
pub fn effective_config(inserted: Option<SimulationConfig>) -> SimulationConfig {
    let config = inserted.unwrap_or_default();

    match config.validate() {
        Ok(()) => config,
        Err(err) => {
            warn!("{err}; falling back to default configuration");
            SimulationConfig::default()
        }
    }
}

/// Lay the level out again for the actual window size.
fn fit_level_to_window(
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut simulation: ResMut<Simulation>,
) {
    let Ok(window) = window_query.single() else {
        return;
    };

    let result = simulation
        .resize(window.width() as f64, window.height() as f64)
        .and_then(|()| simulation.reload_level());

    if let Err(err) = result {
        warn!("Keeping initial layout: {err}");
    }
}
