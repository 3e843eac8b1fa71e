//! eframe::App implementation for TodoApp
//!
//! Contains the main update loop that runs every frame.

use eframe::egui::{self, RichText};

use super::app::{TodoApp, ACCENT_CYAN, TEXT_DIM};
use crate::domain::LogEventKind;

impl eframe::App for TodoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Drain assistant events first so this frame renders fresh state
        self.handle_assistant_events(ctx);

        // Periodically truncate logs (every 60 seconds)
        if self.last_log_cleanup.elapsed().as_secs() >= 60 {
            self.truncate_logs();
            self.last_log_cleanup = std::time::Instant::now();
        }

        self.apply_theme(ctx);

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            self.render_header(ui);
        });

        egui::TopBottomPanel::bottom("activity_log")
            .resizable(true)
            .default_height(120.0)
            .show(ctx, |ui| {
                self.render_log_panel(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_input_row(ui);
            ui.separator();
            self.render_task_table(ui);
        });

        // Popup message on top of everything when visible
        self.render_message_popup(ctx);

        // Assistant events arrive asynchronously; keep polling
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}

impl TodoApp {
    fn render_header(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("JustDoIT");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if self.voice_active() {
                    ui.label(RichText::new("🎤 assistant listening").color(ACCENT_CYAN));
                } else {
                    ui.label(RichText::new(&self.voice_status).color(TEXT_DIM));
                }
            });
        });
    }

    fn render_log_panel(&self, ui: &mut egui::Ui) {
        ui.label(RichText::new("Activity").color(TEXT_DIM).small());
        egui::ScrollArea::vertical()
            .stick_to_bottom(true)
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for entry in &self.logs {
                    let color = match entry.kind {
                        LogEventKind::System => TEXT_DIM,
                        LogEventKind::Voice => ACCENT_CYAN,
                        LogEventKind::Error => super::app::ACCENT_RED,
                    };
                    ui.label(
                        RichText::new(format!(
                            "{} [{}] {}",
                            entry.timestamp.format("%H:%M:%S"),
                            entry.kind,
                            entry.summary
                        ))
                        .color(color)
                        .monospace(),
                    );
                }
            });
    }
}
