//! Shared helpers for integration tests

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use justdoit::assistant::{SpeechInput, SpeechOutput};

/// Speech input that replays a fixed script of utterances.
///
/// Panics when the script runs out before an exit phrase, so a test that
/// forgets to end with "quit" fails instead of looping forever.
pub struct ScriptedInput {
    script: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'static str>,
    {
        Self {
            script: lines.into_iter().map(String::from).collect(),
        }
    }
}

impl SpeechInput for ScriptedInput {
    fn listen(&mut self) -> Result<String> {
        Ok(self
            .script
            .pop_front()
            .expect("scripted input exhausted before an exit phrase"))
    }
}

/// Speech output that records everything spoken
#[derive(Clone, Default)]
pub struct SpokenLog {
    lines: Arc<Mutex<Vec<String>>>,
}

impl SpokenLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    /// True when any spoken line contains the given fragment
    pub fn contains(&self, fragment: &str) -> bool {
        self.lines().iter().any(|line| line.contains(fragment))
    }

    /// How many spoken lines contain the given fragment
    pub fn count(&self, fragment: &str) -> usize {
        self.lines()
            .iter()
            .filter(|line| line.contains(fragment))
            .count()
    }
}

impl SpeechOutput for SpokenLog {
    fn speak(&mut self, text: &str) {
        self.lines.lock().unwrap().push(text.to_string());
    }
}
