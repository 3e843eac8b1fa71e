//! Core domain types for JustDoIT

mod log_event;
mod task;

pub use log_event::{LogEvent, LogEventKind};
pub use task::{Task, TaskListView};
