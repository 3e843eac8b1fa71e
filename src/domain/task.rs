use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

/// One to-do item.
///
/// The name doubles as the deletion handle; there is no surrogate id.
/// Uniqueness of names is assumed, not enforced - the store deletes the
/// earliest-inserted match when names collide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Task name (non-empty)
    pub name: String,

    /// Calendar deadline, no time component
    pub deadline: NaiveDate,
}

impl Task {
    /// Create a new task
    pub fn new(name: impl Into<String>, deadline: NaiveDate) -> Self {
        Self {
            name: name.into(),
            deadline,
        }
    }
}

/// Shared snapshot of the task list as currently displayed.
///
/// Both the GUI and the voice assistant hold a handle. The GUI replaces the
/// snapshot on every reload (deadline-ascending order); the assistant
/// resolves spoken task numbers against it. Display indices are 1-based and
/// only valid until the next reload.
#[derive(Clone, Default)]
pub struct TaskListView {
    inner: Arc<Mutex<Vec<Task>>>,
}

impl TaskListView {
    /// Create an empty view
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole snapshot (called by whoever reloaded from the store)
    pub fn replace(&self, tasks: Vec<Task>) {
        *self.lock() = tasks;
    }

    /// Number of currently displayed tasks
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// True when no tasks are displayed
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Look up a task by its 1-based display index
    pub fn get(&self, display_index: usize) -> Option<Task> {
        if display_index == 0 {
            return None;
        }
        self.lock().get(display_index - 1).cloned()
    }

    /// Copy of the current snapshot
    pub fn snapshot(&self) -> Vec<Task> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Task>> {
        self.inner.lock().expect("Task list lock poisoned")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_display_index_is_one_based() {
        let view = TaskListView::new();
        view.replace(vec![
            Task::new("pay rent", date(2026, 9, 1)),
            Task::new("dentist", date(2026, 9, 14)),
        ]);

        assert_eq!(view.get(1).unwrap().name, "pay rent");
        assert_eq!(view.get(2).unwrap().name, "dentist");
        assert!(view.get(0).is_none());
        assert!(view.get(3).is_none());
    }

    #[test]
    fn test_replace_invalidates_old_indices() {
        let view = TaskListView::new();
        view.replace(vec![Task::new("a", date(2026, 1, 1))]);
        assert_eq!(view.len(), 1);

        view.replace(Vec::new());
        assert!(view.is_empty());
        assert!(view.get(1).is_none());
    }
}
