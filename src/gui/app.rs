//! Main GUI application state using egui
//!
//! Window layout:
//! - Header with the app title and voice assistant status
//! - Input row (task name, deadline, add/delete buttons)
//! - Task table (№, Task, Deadline)
//! - Activity log panel at the bottom

use std::sync::mpsc::Receiver;
use std::time::Instant;

use chrono::NaiveDate;
use eframe::egui::{self, Color32};

use crate::assistant::AssistantEvent;
use crate::config::Config;
use crate::domain::{LogEvent, Task, TaskListView};
use crate::store::TaskDb;

/// Background: deep charcoal with a subtle blue tint
pub(super) const BG_PRIMARY: Color32 = Color32::from_rgb(18, 20, 24);
/// Secondary background for panels and popups
pub(super) const BG_SECONDARY: Color32 = Color32::from_rgb(24, 28, 34);
/// Selected row background
pub(super) const BG_SELECTED: Color32 = Color32::from_rgb(40, 50, 65);

/// Primary text
pub(super) const TEXT_PRIMARY: Color32 = Color32::from_rgb(220, 223, 228);
/// Muted text (deadlines, indices)
pub(super) const TEXT_DIM: Color32 = Color32::from_rgb(140, 148, 158);

/// Accent colors
pub(super) const ACCENT_GREEN: Color32 = Color32::from_rgb(80, 255, 120);
pub(super) const ACCENT_RED: Color32 = Color32::from_rgb(255, 80, 80);
pub(super) const ACCENT_CYAN: Color32 = Color32::from_rgb(0, 255, 200);

/// Keep at most this many log entries before truncating
const MAX_LOG_EVENTS: usize = 500;

/// Main application state
pub struct TodoApp {
    /// Configuration
    #[allow(dead_code)]
    config: Config,
    /// Task store (shared with the assistant worker)
    db: TaskDb,
    /// Displayed task list capability (shared with the assistant worker)
    view: TaskListView,
    /// Cached tasks for rendering, deadline-ascending
    pub(super) tasks: Vec<Task>,
    /// Task name input field
    pub(super) name_input: String,
    /// Deadline input field (YYYY-MM-DD)
    pub(super) deadline_input: String,
    /// Selected table row (0-based), None when nothing is selected
    pub(super) selected: Option<usize>,
    /// Activity log entries
    pub(super) logs: Vec<LogEvent>,
    /// Current popup message, if any
    pub(super) popup_message: Option<String>,
    /// Receiver for assistant events (None when voice is disabled)
    assistant_rx: Option<Receiver<AssistantEvent>>,
    /// Status line for the voice assistant shown in the header
    pub(super) voice_status: String,
    /// Last periodic log truncation
    pub(super) last_log_cleanup: Instant,
}

impl TodoApp {
    /// Create the app and load the initial task list
    pub fn new(
        config: Config,
        db: TaskDb,
        view: TaskListView,
        assistant_rx: Option<Receiver<AssistantEvent>>,
        voice_status: String,
    ) -> Self {
        let mut app = Self {
            config,
            db,
            view,
            tasks: Vec::new(),
            name_input: String::new(),
            deadline_input: String::new(),
            selected: None,
            logs: vec![LogEvent::system("JustDoIT started")],
            popup_message: None,
            assistant_rx,
            voice_status,
            last_log_cleanup: Instant::now(),
        };
        app.reload_tasks();
        app
    }

    /// Reload the displayed list from the store.
    ///
    /// Updates both the render cache and the shared view the assistant
    /// resolves task numbers against; display indices are recomputed here.
    pub(super) fn reload_tasks(&mut self) {
        match self.db.list() {
            Ok(tasks) => {
                self.view.replace(tasks.clone());
                self.tasks = tasks;
                if self.selected.is_some_and(|row| row >= self.tasks.len()) {
                    self.selected = None;
                }
            }
            Err(e) => {
                self.logs.push(LogEvent::error(format!("Error loading tasks: {}", e)));
                self.show_message(format!("Error loading tasks: {}", e));
            }
        }
    }

    /// Add a task from the input fields
    pub(super) fn add_task(&mut self) {
        let name = self.name_input.trim().to_string();
        let deadline = self.deadline_input.trim().to_string();

        if name.is_empty() || deadline.is_empty() {
            self.show_message("Please enter both task and deadline.");
            return;
        }

        let deadline = match NaiveDate::parse_from_str(&deadline, "%Y-%m-%d") {
            Ok(date) => date,
            Err(_) => {
                self.show_message("Invalid date format. Use YYYY-MM-DD.");
                return;
            }
        };

        match self.db.insert(&Task::new(name.clone(), deadline)) {
            Ok(()) => {
                self.name_input.clear();
                self.deadline_input.clear();
                self.reload_tasks();
                self.logs.push(LogEvent::system(format!("Added task \"{}\"", name)));
                self.show_message("Task added successfully.");
            }
            Err(e) => self.show_message(format!("Database error: {}", e)),
        }
    }

    /// Delete the currently selected task
    pub(super) fn delete_selected(&mut self) {
        let Some(row) = self.selected else { return };
        let Some(task) = self.tasks.get(row).cloned() else {
            return;
        };

        match self.db.delete_by_name(&task.name) {
            Ok(_) => {
                self.selected = None;
                self.reload_tasks();
                self.logs
                    .push(LogEvent::system(format!("Deleted task \"{}\"", task.name)));
                self.show_message("Task deleted successfully.");
            }
            Err(e) => self.show_message(format!("Database error: {}", e)),
        }
    }

    /// Show a popup message (dismissed with its OK button)
    pub(super) fn show_message(&mut self, message: impl Into<String>) {
        self.popup_message = Some(message.into());
    }

    /// Drain pending assistant events
    pub(super) fn handle_assistant_events(&mut self, ctx: &egui::Context) {
        let Some(rx) = &self.assistant_rx else { return };

        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }

        for event in events {
            match event {
                AssistantEvent::TasksChanged => self.reload_tasks(),
                AssistantEvent::Log(entry) => self.logs.push(entry),
                AssistantEvent::Shutdown => {
                    self.logs.push(LogEvent::system("Assistant requested shutdown"));
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            }
        }
    }

    /// True when the voice assistant worker is running
    pub(super) fn voice_active(&self) -> bool {
        self.assistant_rx.is_some()
    }

    /// Drop old log entries so the log panel stays bounded
    pub(super) fn truncate_logs(&mut self) {
        if self.logs.len() > MAX_LOG_EVENTS {
            let excess = self.logs.len() - MAX_LOG_EVENTS / 2;
            self.logs.drain(..excess);
        }
    }

    /// Apply the dark theme
    pub(super) fn apply_theme(&self, ctx: &egui::Context) {
        let mut visuals = egui::Visuals::dark();
        visuals.panel_fill = BG_PRIMARY;
        visuals.window_fill = BG_SECONDARY;
        visuals.selection.bg_fill = BG_SELECTED;
        visuals.override_text_color = Some(TEXT_PRIMARY);
        ctx.set_visuals(visuals);
    }
}
