//! UI module providing the egui toolbar, outcome overlay and guide window.

mod help;
mod icons;
mod outcome_overlay;
mod toolbar;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::plugin::SlingshotSet;

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<icons::FontsInitialized>()
            .init_resource::<help::HelpState>()
            .add_systems(Update, help::help_shortcut)
            // Font initialization must run before any panel that uses icons
            .add_systems(EguiPrimaryContextPass, icons::setup_fonts)
            .add_systems(
                EguiPrimaryContextPass,
                (
                    toolbar::toolbar_system,
                    outcome_overlay::outcome_overlay_system,
                    help::help_system,
                )
                    .chain()
                    .after(icons::setup_fonts)
                    .run_if(|init: Res<icons::FontsInitialized>| init.0)
                    .in_set(SlingshotSet::Panels),
            );
    }
}

/// Colors shared by the UI panels.
mod colors {
    use bevy_egui::egui::Color32;

    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(15, 23, 42, 230);
    pub const ACTIVE: Color32 = Color32::from_rgb(16, 185, 129);
    pub const INACTIVE: Color32 = Color32::from_rgb(148, 163, 184);
    pub const TEXT: Color32 = Color32::from_rgb(226, 232, 240);
    pub const WON: Color32 = Color32::from_rgb(16, 185, 129);
    pub const CRASHED: Color32 = Color32::from_rgb(239, 68, 68);
    pub const LOST: Color32 = Color32::from_rgb(148, 163, 184);
}
