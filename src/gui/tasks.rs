//! Task list rendering and input controls

use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

use super::app::{TodoApp, ACCENT_GREEN, ACCENT_RED, TEXT_DIM};

impl TodoApp {
    /// Input row: task name, deadline, add/delete buttons
    pub(super) fn render_input_row(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add(
                egui::TextEdit::singleline(&mut self.name_input)
                    .hint_text("Enter a new task...")
                    .desired_width(280.0),
            );
            ui.add(
                egui::TextEdit::singleline(&mut self.deadline_input)
                    .hint_text("Deadline (YYYY-MM-DD)...")
                    .desired_width(160.0),
            );

            let add_clicked = ui
                .button(RichText::new("Add Task").color(ACCENT_GREEN))
                .clicked();

            let delete_clicked = ui
                .add_enabled(
                    self.selected.is_some(),
                    egui::Button::new(RichText::new("Delete Task").color(ACCENT_RED)),
                )
                .clicked();

            if add_clicked {
                self.add_task();
            }
            if delete_clicked {
                self.delete_selected();
            }
        });
    }

    /// The №/Task/Deadline table with single row selection
    pub(super) fn render_task_table(&mut self, ui: &mut egui::Ui) {
        if self.tasks.is_empty() {
            ui.add_space(16.0);
            ui.label(RichText::new("No tasks yet. Add one above or say \"add task\".").color(TEXT_DIM));
            return;
        }

        let mut clicked_row = None;

        TableBuilder::new(ui)
            .striped(true)
            .sense(egui::Sense::click())
            .column(Column::auto().at_least(36.0))
            .column(Column::remainder())
            .column(Column::auto().at_least(110.0))
            .header(22.0, |mut header| {
                header.col(|ui| {
                    ui.strong("№");
                });
                header.col(|ui| {
                    ui.strong("Task");
                });
                header.col(|ui| {
                    ui.strong("Deadline");
                });
            })
            .body(|mut body| {
                for (row_index, task) in self.tasks.iter().enumerate() {
                    body.row(20.0, |mut row| {
                        row.set_selected(self.selected == Some(row_index));
                        row.col(|ui| {
                            ui.label(RichText::new((row_index + 1).to_string()).color(TEXT_DIM));
                        });
                        row.col(|ui| {
                            ui.label(&task.name);
                        });
                        row.col(|ui| {
                            ui.label(
                                RichText::new(task.deadline.format("%Y-%m-%d").to_string())
                                    .color(TEXT_DIM),
                            );
                        });
                        if row.response().clicked() {
                            clicked_row = Some(row_index);
                        }
                    });
                }
            });

        if let Some(row) = clicked_row {
            // Clicking the selected row again deselects it
            self.selected = if self.selected == Some(row) {
                None
            } else {
                Some(row)
            };
        }
    }
}
