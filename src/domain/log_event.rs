use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The kind of entry in the activity log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogEventKind {
    /// System message (startup, config, store)
    System,
    /// Voice assistant activity (utterances, spoken responses)
    Voice,
    /// Something went wrong
    Error,
}

impl std::fmt::Display for LogEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogEventKind::System => write!(f, "system"),
            LogEventKind::Voice => write!(f, "voice"),
            LogEventKind::Error => write!(f, "error"),
        }
    }
}

/// One entry in the GUI activity log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEvent {
    /// When this event occurred
    pub timestamp: DateTime<Utc>,

    /// The kind of event
    pub kind: LogEventKind,

    /// Short human-readable summary
    pub summary: String,
}

impl LogEvent {
    /// Create a new log event
    pub fn new(kind: LogEventKind, summary: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
            summary: summary.into(),
        }
    }

    /// Create a system event
    pub fn system(summary: impl Into<String>) -> Self {
        Self::new(LogEventKind::System, summary)
    }

    /// Create a voice event
    pub fn voice(summary: impl Into<String>) -> Self {
        Self::new(LogEventKind::Voice, summary)
    }

    /// Create an error event
    pub fn error(summary: impl Into<String>) -> Self {
        Self::new(LogEventKind::Error, summary)
    }
}
