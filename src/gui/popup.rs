//! Popup message window
//!
//! Confirmation and error messages from add/delete operations are shown in a
//! small centered window with an OK button.

use eframe::egui::{self, Align2};

use super::app::TodoApp;

impl TodoApp {
    /// Render the current popup message, if any
    pub(super) fn render_message_popup(&mut self, ctx: &egui::Context) {
        let Some(message) = self.popup_message.clone() else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new("Message")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.label(message);
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });

        if dismissed {
            self.popup_message = None;
        }
    }
}
