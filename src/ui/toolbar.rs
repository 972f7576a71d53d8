//! Top toolbar with mode, tool and level controls.
//!
//! Layout, left to right:
//! - Play / Sandbox mode toggle
//! - Sandbox tools (sandbox mode only)
//! - Level picker and reset button
//! - Guide toggle and status readout, right-aligned

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::outcome::Mode;
use crate::sandbox::Tool;
use crate::scenarios::LEVELS;
use crate::simulation::Simulation;

use super::help::HelpState;
use super::{colors, icons};

/// System that renders the toolbar at the top of the window.
pub fn toolbar_system(
    mut contexts: EguiContexts,
    mut simulation: ResMut<Simulation>,
    mut help: ResMut<HelpState>,
) -> Result {
    let ctx = contexts.ctx_mut()?;

    egui::TopBottomPanel::top("toolbar")
        .frame(
            egui::Frame::new()
                .fill(colors::PANEL_BG)
                .inner_margin(egui::Margin::symmetric(16, 8)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 8.0;

                render_mode_buttons(ui, &mut simulation);

                if simulation.mode() == Mode::Sandbox {
                    ui.separator();
                    render_tool_buttons(ui, &mut simulation);
                }

                ui.separator();
                render_level_picker(ui, &mut simulation);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if toggle_button(ui, &format!("{} Guide", icons::HELP), help.open) {
                        help.toggle();
                    }
                    let status = format!(
                        "{}  |  speed {:.2}  |  energy {:.1}",
                        simulation.state().label(),
                        simulation.rocket().speed(),
                        simulation.rocket_energy()
                    );
                    ui.label(egui::RichText::new(status).monospace().color(colors::TEXT));
                });
            });

            ui.label(egui::RichText::new(simulation.mode().instructions()).color(colors::INACTIVE));
        });

    Ok(())
}

/// A button that is framed and highlighted while `active`.
fn toggle_button(ui: &mut egui::Ui, label: &str, active: bool) -> bool {
    let color = if active { colors::ACTIVE } else { colors::INACTIVE };
    let text = egui::RichText::new(label).size(14.0).color(color);
    ui.add(egui::Button::new(text).frame(active)).clicked()
}

fn render_mode_buttons(ui: &mut egui::Ui, simulation: &mut Simulation) {
    for (mode, label) in [(Mode::Play, "Play"), (Mode::Sandbox, "Sandbox")] {
        let label = format!("{} {label}", icons::mode_icon(mode));
        if toggle_button(ui, &label, simulation.mode() == mode) && simulation.mode() != mode {
            simulation.set_mode(mode);
        }
    }
}

fn render_tool_buttons(ui: &mut egui::Ui, simulation: &mut Simulation) {
    for tool in Tool::ALL {
        let label = format!("{} {}", icons::tool_icon(tool), tool.label());
        if toggle_button(ui, &label, simulation.tool() == tool) {
            simulation.set_tool(tool);
        }
    }
}

fn render_level_picker(ui: &mut egui::Ui, simulation: &mut Simulation) {
    let current = simulation.level();

    egui::ComboBox::from_id_salt("level_picker")
        .selected_text(current.name)
        .show_ui(ui, |ui| {
            for level in LEVELS {
                let selected = level.id == current.id;
                if ui
                    .add(egui::Button::new(level.name).frame(selected))
                    .on_hover_text(level.description)
                    .clicked()
                    && !selected
                    && let Err(err) = simulation.load_level(level)
                {
                    warn!("Cannot load level '{}': {err}", level.id);
                }
            }
        });

    if ui
        .button(format!("{} Reset level", icons::RESET))
        .on_hover_text("Rebuild the level, removing placed bodies")
        .clicked()
        && let Err(err) = simulation.reload_level()
    {
        warn!("Cannot reload level: {err}");
    }
}
