//! JustDoIT - a voice-assisted to-do list
//!
//! JustDoIT keeps a list of tasks (name + deadline) in a SQLite database and
//! presents it in a desktop window. A background voice assistant listens for
//! spoken commands ("add task", "delete task", "who are you", ...) and drives
//! the same create/delete operations as the graphical controls.
//!
//! ## Surfaces
//!
//! 1. **GUI (primary)**: an eframe/egui window with the task table, input
//!    fields, and an activity log. Reloads the displayed list after every
//!    mutation.
//!
//! 2. **Voice assistant**: a worker thread running a blocking
//!    listen → interpret → act loop against the same store, reporting back
//!    to the GUI over a channel.

pub mod assistant;
pub mod config;
pub mod domain;
pub mod gui;
pub mod store;

pub use domain::*;
