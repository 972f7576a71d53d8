//! "How to play" guide window, toggled from the toolbar or with F1.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use super::colors;

/// Whether the guide window is showing.
#[derive(Resource, Default, Debug)]
pub struct HelpState {
    pub open: bool,
}

impl HelpState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }
}

/// Guide sections: heading, then body text.
pub const GUIDE: &[(&str, &str)] = &[
    (
        "Aim and launch",
        "Press anywhere and drag away from where you want to fly, like pulling \
         back a slingshot. The dashed red line shows the launch direction; a \
         longer drag launches faster. Release to fire.",
    ),
    (
        "Gravity",
        "Every planet and black hole pulls on the rocket. Black holes are small \
         but three times heavier than a sandbox planet.",
    ),
    (
        "Winning and losing",
        "Fly into the green target to win. Touching a body destroys the ship, \
         and leaving the screen loses it. Click anywhere to try again.",
    ),
    (
        "Sandbox",
        "Switch to Sandbox to place planets or black holes and to move the \
         target, then switch back to Play to fly through your level.",
    ),
    (
        "Keys",
        "R resets the rocket, Esc returns to Play mode, F1 toggles this guide.",
    ),
];

/// F1 toggles the guide.
pub fn help_shortcut(keys: Res<ButtonInput<KeyCode>>, mut help: ResMut<HelpState>) {
    if keys.just_pressed(KeyCode::F1) {
        help.toggle();
    }
}

/// System to render the guide window while it is open.
pub fn help_system(mut contexts: EguiContexts, mut help: ResMut<HelpState>) -> Result {
    if !help.open {
        return Ok(());
    }

    let ctx = contexts.ctx_mut()?;
    let mut open = help.open;

    egui::Window::new("How to play")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .default_width(360.0)
        .show(ctx, |ui| {
            for (heading, body) in GUIDE {
                ui.label(
                    egui::RichText::new(*heading)
                        .strong()
                        .color(colors::ACTIVE),
                );
                ui.label(egui::RichText::new(*body).color(colors::TEXT));
                ui.add_space(6.0);
            }
        });

    help.open = open;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut help = HelpState::default();
        assert!(!help.open);
        help.toggle();
        assert!(help.open);
        help.toggle();
        assert!(!help.open);
    }

    #[test]
    fn test_guide_covers_controls() {
        let text: String = GUIDE.iter().map(|(_, body)| *body).collect();
        for key in ["drag", "Release", "Sandbox", "R resets", "F1"] {
            assert!(text.contains(key), "guide is missing '{key}'");
        }
    }
}
