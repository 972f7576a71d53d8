//! Phosphor icon definitions for the toolbar.
//!
//! Icons are initialized via `setup_fonts` on the first egui pass.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::outcome::Mode;
use crate::sandbox::Tool;

/// Resource to track if fonts have been initialized.
#[derive(Resource, Default)]
pub struct FontsInitialized(pub bool);

/// System to initialize Phosphor icon fonts.
pub fn setup_fonts(mut contexts: EguiContexts, mut initialized: ResMut<FontsInitialized>) {
    if initialized.0 {
        return;
    }

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);

    ctx.set_fonts(fonts);
    initialized.0 = true;

    info!("Phosphor icon fonts initialized");
}

// Browse all icons at https://phosphoricons.com/

pub const PLAY: &str = egui_phosphor::regular::ROCKET;
pub const SANDBOX: &str = egui_phosphor::regular::WRENCH;
pub const PLANET: &str = egui_phosphor::regular::GLOBE;
/// Black hole tool (dashed circle)
pub const BLACK_HOLE: &str = egui_phosphor::regular::CIRCLE_DASHED;
pub const GOAL: &str = egui_phosphor::regular::CROSSHAIR;
pub const RESET: &str = egui_phosphor::regular::ARROW_COUNTER_CLOCKWISE;
pub const HELP: &str = egui_phosphor::regular::QUESTION;

pub fn mode_icon(mode: Mode) -> &'static str {
    match mode {
        Mode::Play => PLAY,
        Mode::Sandbox => SANDBOX,
    }
}

pub fn tool_icon(tool: Tool) -> &'static str {
    match tool {
        Tool::Planet => PLANET,
        Tool::BlackHole => BLACK_HOLE,
        Tool::Goal => GOAL,
    }
}
