//! Settings configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// General settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Task database settings
    #[serde(default)]
    pub database: DatabaseSettings,

    /// GUI settings
    #[serde(default)]
    pub gui: GuiSettings,

    /// Voice assistant settings
    #[serde(default)]
    pub voice: VoiceSettings,
}

/// Task database settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatabaseSettings {
    /// Database file path (defaults to ~/.justdoit/tasks.db)
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// GUI settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuiSettings {
    /// Initial window width
    #[serde(default = "default_window_width")]
    pub window_width: f32,

    /// Initial window height
    #[serde(default = "default_window_height")]
    pub window_height: f32,
}

fn default_window_width() -> f32 {
    1000.0
}

fn default_window_height() -> f32 {
    600.0
}

impl Default for GuiSettings {
    fn default() -> Self {
        Self {
            window_width: default_window_width(),
            window_height: default_window_height(),
        }
    }
}

/// Voice assistant settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceSettings {
    /// Start the voice assistant with the GUI
    #[serde(default = "default_voice_enabled")]
    pub enabled: bool,

    /// Whisper model for transcription (tiny, base, small, medium, large)
    #[serde(default = "default_whisper_model")]
    pub whisper_model: String,

    /// Language for transcription (auto, en, de, fr, etc.)
    #[serde(default = "default_voice_language")]
    pub language: String,

    /// Silence threshold to stop recording (0.0-1.0)
    #[serde(default = "default_silence_threshold")]
    pub silence_threshold: f32,

    /// Silence duration to stop recording (in seconds)
    #[serde(default = "default_silence_duration")]
    pub silence_duration: f32,

    /// Maximum recording duration per utterance (in seconds)
    #[serde(default = "default_max_duration")]
    pub max_duration: f32,

    /// TTS voice name passed to say/espeak (platform default when unset)
    #[serde(default)]
    pub tts_voice: Option<String>,
}

fn default_voice_enabled() -> bool {
    true
}

fn default_whisper_model() -> String {
    "base".to_string()
}

fn default_voice_language() -> String {
    "en".to_string()
}

fn default_silence_threshold() -> f32 {
    0.1 // 10% - higher value = less sensitive to background noise
}

fn default_silence_duration() -> f32 {
    2.0 // seconds of trailing pause that end an utterance
}

fn default_max_duration() -> f32 {
    30.0 // safety limit for one utterance
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            enabled: default_voice_enabled(),
            whisper_model: default_whisper_model(),
            language: default_voice_language(),
            silence_threshold: default_silence_threshold(),
            silence_duration: default_silence_duration(),
            max_duration: default_max_duration(),
            tts_voice: None,
        }
    }
}
