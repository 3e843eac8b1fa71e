//! Voice assistant worker
//!
//! Runs the blocking listen → classify → act loop, normally on its own
//! thread, and reports back to the GUI over a channel. The worker never
//! calls into the GUI directly; the GUI polls [`AssistantEvent`]s each
//! frame.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};

use chrono::Local;
use tracing::{info, warn};

use super::command::{classify, Command};
use super::date::parse_spoken_date;
use super::number::resolve_task_number;
use super::speech::{SpeechInput, SpeechOutput};
use crate::domain::{LogEvent, Task, TaskListView};
use crate::store::TaskDb;

/// Messages from the assistant worker to the GUI
#[derive(Debug, Clone)]
pub enum AssistantEvent {
    /// The store changed; displayed lists should reload
    TasksChanged,

    /// Something worth showing in the activity log
    Log(LogEvent),

    /// The user asked the assistant to quit; the host window should close
    Shutdown,
}

// Fixed responses
const WELCOME: &str = "Welcome to the JustDoIT application. \
    Assistant is now active and listening. How can I help you?";
const IDENTITY: &str = "My name is Jimmy, your personal assistant. \
    I'm here to help you manage your tasks and keep things organized. \
    If there's anything you need, just ask!";
const HELP: &str = "I'm here to assist you! You can ask me to create tasks, \
    set deadlines, or even just have a friendly chat. Simply tell me what you need, \
    and I'll do my best to help. If you need detailed guidance, feel free to ask!";
const GREETING: &str = "Hi, welcome to the JustDoIT application. How can I help you?";
const ACKNOWLEDGMENT: &str = "Yes, I hear you! How can I assist you today?";
const FAREWELL: &str = "Stopping the assistant.";
const FALLBACK: &str =
    "I'm sorry, I don't understand. Can you please rephrase your request?";

const ASK_TASK_NAME: &str = "Okay, creating a new task. What is the task name?";
const ASK_DEADLINE: &str =
    "What is the task deadline? Please specify in the format 'day month year'.";
const ASK_TASK_NUMBER: &str = "Which task do you want to delete? Please say the task number.";

/// The voice assistant loop.
///
/// Generic over speech I/O so tests can script both sides of the dialog.
pub struct Assistant<I: SpeechInput, O: SpeechOutput> {
    db: TaskDb,
    view: TaskListView,
    input: I,
    output: O,
    events: Sender<AssistantEvent>,
    running: bool,
}

impl<I: SpeechInput, O: SpeechOutput> Assistant<I, O> {
    /// Create an assistant bound to the shared store and displayed list
    pub fn new(
        db: TaskDb,
        view: TaskListView,
        input: I,
        output: O,
        events: Sender<AssistantEvent>,
    ) -> Self {
        Self {
            db,
            view,
            input,
            output,
            events,
            running: true,
        }
    }

    /// Run the loop until an exit phrase is heard
    pub fn run(&mut self) {
        self.speak(WELCOME);

        while self.running {
            let utterance = self.listen();
            let commands = classify(&utterance);

            if commands.is_empty() {
                self.speak(FALLBACK);
                continue;
            }

            for command in commands {
                self.dispatch(command);
            }
        }
    }

    fn dispatch(&mut self, command: Command) {
        match command {
            Command::CreateTask => self.create_task(),
            Command::Identity => self.speak(IDENTITY),
            Command::Help => self.speak(HELP),
            Command::RemoveTask => self.delete_task(),
            Command::Greet => self.speak(GREETING),
            Command::Acknowledge => self.speak(ACKNOWLEDGMENT),
            Command::Quit => self.shutdown(),
        }
    }

    /// Capture one utterance, lowercased. Recognition failure becomes an
    /// empty utterance, which matches no command and draws the fallback.
    fn listen(&mut self) -> String {
        match self.input.listen() {
            Ok(text) => {
                let text = text.trim().to_lowercase();
                if !text.is_empty() {
                    self.emit(AssistantEvent::Log(LogEvent::voice(format!(
                        "Heard: \"{}\"",
                        text
                    ))));
                }
                text
            }
            Err(e) => {
                warn!("Speech recognition failed: {}", e);
                String::new()
            }
        }
    }

    fn speak(&mut self, text: &str) {
        self.emit(AssistantEvent::Log(LogEvent::voice(text)));
        self.output.speak(text);
    }

    fn emit(&self, event: AssistantEvent) {
        // The GUI may already be gone during shutdown; that is fine
        let _ = self.events.send(event);
    }

    fn shutdown(&mut self) {
        self.speak(FAREWELL);
        self.running = false;
        self.emit(AssistantEvent::Shutdown);
        info!("Assistant stopped by voice command");
    }

    /// Multi-turn task creation: ask for a name, then a deadline. Any
    /// failure aborts the whole flow; no partial task is created.
    fn create_task(&mut self) {
        self.speak(ASK_TASK_NAME);
        let name = self.listen();
        if name.is_empty() {
            self.speak("I didn't catch a task name. Task creation canceled.");
            return;
        }

        self.speak(ASK_DEADLINE);
        let spoken = self.listen();
        let parsed = parse_spoken_date(&spoken, Local::now().date_naive());
        for notice in &parsed.notices {
            let notice = notice.to_string();
            self.speak(&notice);
        }

        let deadline = match parsed.resolved {
            Ok(date) => date,
            Err(e) => {
                let reason = e.to_string();
                self.speak(&reason);
                self.speak("Invalid date provided. Task creation canceled.");
                return;
            }
        };

        match self.db.insert(&Task::new(name.clone(), deadline)) {
            Ok(()) => {
                self.emit(AssistantEvent::TasksChanged);
                self.speak(&format!(
                    "Task added successfully. Task name: {}, due {}.",
                    name, deadline
                ));
            }
            Err(e) => self.speak(&format!("Failed to add the task. Error: {}", e)),
        }
    }

    /// Multi-turn task deletion: ask for the display number, resolve it
    /// against the currently displayed list, delete by name.
    fn delete_task(&mut self) {
        self.speak(ASK_TASK_NUMBER);
        let answer = self.listen();

        let index = match resolve_task_number(&answer, self.view.len()) {
            Ok(index) => index,
            Err(e) => {
                let reason = e.to_string();
                self.speak(&reason);
                return;
            }
        };

        // The list can shrink between validation and lookup if the GUI
        // deleted concurrently; treat that like an invalid number
        let Some(task) = self.view.get(index) else {
            self.speak("The task list changed. Please try again.");
            return;
        };

        match self.db.delete_by_name(&task.name) {
            Ok(_) => {
                self.emit(AssistantEvent::TasksChanged);
                self.speak(&format!("Task number {} deleted successfully.", index));
            }
            Err(e) => self.speak(&format!(
                "An error occurred while deleting the task: {}",
                e
            )),
        }
    }
}

/// Spawn the assistant loop on a background thread.
///
/// Returns the event receiver for the GUI to poll and the thread handle.
/// The thread ends when the user speaks an exit phrase.
pub fn spawn<I, O>(
    db: TaskDb,
    view: TaskListView,
    input: I,
    output: O,
) -> (Receiver<AssistantEvent>, JoinHandle<()>)
where
    I: SpeechInput + Send + 'static,
    O: SpeechOutput + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    let handle = thread::spawn(move || {
        let mut assistant = Assistant::new(db, view, input, output, tx);
        assistant.run();
    });
    (rx, handle)
}
