//! Flight outcome overlay.
//!
//! Shown while the simulation is in a terminal state:
//! - Won (green): "Target Reached!"
//! - Crashed (red): "Ship Destroyed!"
//! - Lost (gray): "Lost in Deep Space..."
//!
//! The overlay does not take pointer input, so a click anywhere reaches the
//! simulation and restarts aiming.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::outcome::FlightOutcome;
use crate::simulation::Simulation;

use super::colors;

/// System to render the outcome overlay.
pub fn outcome_overlay_system(mut contexts: EguiContexts, simulation: Res<Simulation>) -> Result {
    let Some(outcome) = simulation.state().outcome() else {
        return Ok(());
    };

    let ctx = contexts.ctx_mut()?;

    let color = match outcome {
        FlightOutcome::Won => colors::WON,
        FlightOutcome::Crashed { .. } => colors::CRASHED,
        FlightOutcome::Lost => colors::LOST,
    };

    egui::Area::new(egui::Id::new("outcome_overlay"))
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(egui::Color32::from_black_alpha(180))
                .inner_margin(egui::Margin::same(24))
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(
                            egui::RichText::new(outcome.headline())
                                .size(40.0)
                                .color(color)
                                .strong(),
                        );
                        ui.add_space(8.0);
                        ui.label(
                            egui::RichText::new("Click anywhere to reset")
                                .size(20.0)
                                .color(colors::TEXT),
                        );
                    });
                });
        });

    Ok(())
}
