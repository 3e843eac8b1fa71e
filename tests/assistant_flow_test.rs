//! End-to-end voice dialog tests: scripted speech against a real store

mod common;

use std::sync::mpsc;

use chrono::NaiveDate;
use tempfile::{tempdir, TempDir};

use common::{ScriptedInput, SpokenLog};
use justdoit::assistant::{Assistant, AssistantEvent};
use justdoit::domain::{Task, TaskListView};
use justdoit::store::TaskDb;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

struct Session {
    db: TaskDb,
    spoken: SpokenLog,
    events: Vec<AssistantEvent>,
    _dir: TempDir,
}

/// Seed a store, run a scripted session to completion, collect the results
fn run_session(seed: Vec<Task>, script: Vec<&'static str>) -> Session {
    let dir = tempdir().unwrap();
    let db = TaskDb::open(&dir.path().join("tasks.db")).unwrap();
    for task in &seed {
        db.insert(task).unwrap();
    }

    let view = TaskListView::new();
    view.replace(db.list().unwrap());

    let spoken = SpokenLog::new();
    let (tx, rx) = mpsc::channel();
    let mut assistant = Assistant::new(
        db.clone(),
        view,
        ScriptedInput::new(script),
        spoken.clone(),
        tx,
    );
    assistant.run();

    Session {
        db,
        spoken,
        events: rx.try_iter().collect(),
        _dir: dir,
    }
}

fn tasks_changed(events: &[AssistantEvent]) -> bool {
    events
        .iter()
        .any(|e| matches!(e, AssistantEvent::TasksChanged))
}

#[test]
fn test_voice_create_task_persists_and_notifies() {
    let session = run_session(
        Vec::new(),
        vec!["add task please", "buy milk", "march 3rd 2099", "quit"],
    );

    let tasks = session.db.list().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].name, "buy milk");
    assert_eq!(tasks[0].deadline, date(2099, 3, 3));

    assert!(session.spoken.contains("Task added successfully"));
    assert!(tasks_changed(&session.events));
    assert!(session
        .events
        .iter()
        .any(|e| matches!(e, AssistantEvent::Shutdown)));
}

#[test]
fn test_invalid_date_aborts_creation() {
    let session = run_session(
        Vec::new(),
        vec!["create task", "buy milk", "sometime nice", "quit"],
    );

    assert_eq!(session.db.count().unwrap(), 0);
    assert!(session.spoken.contains("Invalid month. Please try again."));
    assert!(session
        .spoken
        .contains("Invalid date provided. Task creation canceled."));
    assert!(!tasks_changed(&session.events));
}

#[test]
fn test_empty_task_name_aborts_creation() {
    let session = run_session(Vec::new(), vec!["add task", "", "quit"]);

    assert_eq!(session.db.count().unwrap(), 0);
    assert!(session.spoken.contains("didn't catch a task name"));
}

#[test]
fn test_voice_delete_by_display_index() {
    let seed = vec![
        Task::new("pay rent", date(2099, 1, 1)),
        Task::new("dentist", date(2099, 6, 1)),
        Task::new("service car", date(2099, 12, 31)),
    ];
    let session = run_session(seed, vec!["delete task", "task number two", "quit"]);

    let names: Vec<String> = session
        .db
        .list()
        .unwrap()
        .into_iter()
        .map(|t| t.name)
        .collect();
    assert_eq!(names, ["pay rent", "service car"]);
    assert!(session
        .spoken
        .contains("Task number 2 deleted successfully."));
    assert!(tasks_changed(&session.events));
}

#[test]
fn test_out_of_range_number_leaves_store_untouched() {
    let seed = vec![
        Task::new("a", date(2099, 1, 1)),
        Task::new("b", date(2099, 2, 2)),
    ];
    let session = run_session(seed, vec!["remove task", "five", "quit"]);

    assert_eq!(session.db.count().unwrap(), 2);
    assert!(session.spoken.contains("Task number 5 is invalid"));
    assert!(!tasks_changed(&session.events));
}

#[test]
fn test_unmatched_utterances_draw_the_fallback() {
    let session = run_session(Vec::new(), vec!["", "mumble grumble", "quit"]);

    // Recognition failure (empty) and gibberish both fall through
    assert_eq!(session.spoken.count("I'm sorry, I don't understand"), 2);
}

#[test]
fn test_greeting_fires_alongside_creation() {
    let session = run_session(
        Vec::new(),
        vec!["add task hi there", "water plants", "today", "quit"],
    );

    // The creation dialog ran to completion...
    assert_eq!(session.db.count().unwrap(), 1);
    // ...and the greeting fired afterwards from the same utterance
    assert!(session
        .spoken
        .contains("welcome to the JustDoIT application. How can I help you?"));
}
