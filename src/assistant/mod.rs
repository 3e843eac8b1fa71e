//! Voice assistant for JustDoIT
//!
//! This module provides:
//! 1. A command interpreter mapping recognized utterances to actions
//! 2. A spoken-date parser ("march 3rd 2030", "today")
//! 3. A spoken task-number resolver ("twenty two", "delete task three")
//! 4. A worker loop that listens, interprets, and mutates the task store
//!
//! Architecture:
//! - [`SpeechInput`] / [`SpeechOutput`]: blocking speech capture and playback
//!   behind traits, so dialogs are testable with scripted doubles
//! - [`Assistant`]: the listen → classify → act loop, run on its own thread
//! - [`AssistantEvent`]: worker → GUI channel messages (never direct calls)
//!
//! Implementation:
//! - Uses `rec` (sox) for audio capture
//! - Uses `whisper-cli` (from whisper-cpp) for transcription
//! - Uses the platform `say`/`espeak` command for speech synthesis

pub mod command;
pub mod date;
pub mod number;
pub mod speech;
mod worker;

pub use command::{classify, Command};
pub use date::{parse_spoken_date, DateError, SpokenDate};
pub use number::{resolve_task_number, TaskNumberError};
pub use speech::{check_availability, Microphone, SpeechInput, SpeechOutput, SystemVoice};
pub use worker::{spawn, Assistant, AssistantEvent};
