//! Slingshot - Orbital Sandbox Simulator
//!
//! Drag to aim, release to launch, and bend the rocket's path around
//! planets and black holes to reach the target.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use slingshot::plugin::SlingshotPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Space Slingshot".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        .insert_resource(ClearColor(Color::srgb_u8(15, 23, 42)))
        .add_plugins(SlingshotPlugin)
        .run();
}
