//! Speech input and output
//!
//! Capture and playback are blocking calls behind two small traits so the
//! dialog flows can be driven by scripted doubles in tests.
//!
//! The process-backed implementations use `rec` (sox) for capture,
//! `whisper-cli` (whisper-cpp) for transcription, and the platform
//! `say`/`espeak` command for synthesis.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use anyhow::{bail, Context, Result};

use crate::config::VoiceSettings;

/// Converts microphone audio to recognized text.
///
/// Blocks until one utterance has been captured and transcribed. An empty
/// string means nothing intelligible was heard; callers treat that the same
/// as an unmatched command.
pub trait SpeechInput {
    fn listen(&mut self) -> Result<String>;
}

/// Converts text to spoken audio. Blocks until playback completes.
///
/// Playback problems are logged, never propagated: a response the user
/// cannot hear must not abort the dialog that produced it.
pub trait SpeechOutput {
    fn speak(&mut self, text: &str);
}

/// Microphone capture via sox + whisper-cpp
pub struct Microphone {
    model_path: PathBuf,
    recording_path: PathBuf,
    language: String,
    max_duration: f32,
    silence_threshold: f32,
    silence_duration: f32,
}

impl Microphone {
    /// Create a microphone using the given voice settings and data directory
    pub fn new(settings: &VoiceSettings, data_dir: &Path) -> Self {
        Self {
            model_path: whisper_model_path(data_dir, &settings.whisper_model),
            recording_path: data_dir.join("voice_recording.wav"),
            language: settings.language.clone(),
            max_duration: settings.max_duration,
            silence_threshold: settings.silence_threshold,
            silence_duration: settings.silence_duration,
        }
    }
}

impl SpeechInput for Microphone {
    fn listen(&mut self) -> Result<String> {
        if let Some(parent) = self.recording_path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create recording dir: {}", parent.display())
            })?;
        }

        record_utterance(
            &self.recording_path,
            self.max_duration,
            self.silence_threshold,
            self.silence_duration,
        )?;

        let text = run_whisper(&self.recording_path, &self.model_path, &self.language);
        let _ = std::fs::remove_file(&self.recording_path);
        text
    }
}

/// Record one utterance with sox/rec.
///
/// The silence effect stops capture after a trailing pause; trim caps the
/// recording length as a safety limit.
fn record_utterance(
    recording_path: &Path,
    max_duration: f32,
    silence_threshold: f32,
    silence_duration: f32,
) -> Result<()> {
    let threshold = format!("{}%", (silence_threshold * 100.0).round() as u32);
    let status = Command::new("rec")
        .args([
            "-q",
            "-r",
            "16000", // 16kHz sample rate (whisper requirement)
            "-c",
            "1", // Mono
            "-b",
            "16", // 16-bit
            recording_path.to_str().unwrap_or("recording.wav"),
            "trim",
            "0",
            &format!("{}", max_duration),
            "silence",
            "1",
            "0.1",
            &threshold,
            "1",
            &format!("{}", silence_duration),
            &threshold,
        ])
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .context("Failed to start recording (is sox installed?)")?;

    if !status.success() {
        bail!("Recording exited with {}", status);
    }
    Ok(())
}

/// Run whisper-cpp on the captured audio.
///
/// An empty transcription is returned as an empty string, not an error.
fn run_whisper(audio_path: &Path, model_path: &Path, language: &str) -> Result<String> {
    let output = Command::new("whisper-cli")
        .args([
            "-m",
            model_path.to_str().unwrap_or("model.bin"),
            "-f",
            audio_path.to_str().unwrap_or("audio.wav"),
            "--no-timestamps",
            // Whisper defaults to English unless told otherwise; "auto" asks
            // it to detect the language
            "-l",
            language,
        ])
        .output()
        .context("Failed to run whisper-cli (is whisper-cpp installed?)")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("Whisper failed: {}", stderr);
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Speech synthesis through the platform TTS command
pub struct SystemVoice {
    voice: Option<String>,
}

impl SystemVoice {
    /// Create a system voice, optionally naming a specific TTS voice
    pub fn new(voice: Option<String>) -> Self {
        Self { voice }
    }

    fn command(&self) -> Command {
        #[cfg(target_os = "macos")]
        let mut cmd = Command::new("say");
        #[cfg(not(target_os = "macos"))]
        let mut cmd = Command::new("espeak");

        if let Some(voice) = &self.voice {
            cmd.args(["-v", voice]);
        }
        cmd
    }
}

impl SpeechOutput for SystemVoice {
    fn speak(&mut self, text: &str) {
        let result = self
            .command()
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match result {
            Ok(status) if status.success() => {}
            Ok(status) => tracing::warn!("TTS exited with {}", status),
            Err(e) => tracing::warn!("Failed to speak: {}", e),
        }
    }
}

/// Path of the whisper model file under the data directory
pub fn whisper_model_path(data_dir: &Path, model: &str) -> PathBuf {
    data_dir
        .join("whisper-models")
        .join(format!("ggml-{}.bin", model))
}

/// Check that the speech toolchain is usable and return a status message
pub fn check_availability(data_dir: &Path, settings: &VoiceSettings) -> (bool, String) {
    // Check for sox/rec
    let sox_check = Command::new("which").arg("rec").output();
    if sox_check.is_err() || !sox_check.unwrap().status.success() {
        return (
            false,
            "sox not found. Install with: brew install sox".to_string(),
        );
    }

    // Check for whisper (whisper-cli is the binary name from homebrew whisper-cpp)
    let whisper_check = Command::new("which").arg("whisper-cli").output();
    if whisper_check.is_err() || !whisper_check.unwrap().status.success() {
        return (
            false,
            "whisper-cli not found. Install with: brew install whisper-cpp".to_string(),
        );
    }

    // Check for the whisper model
    let model_path = whisper_model_path(data_dir, &settings.whisper_model);
    if !model_path.exists() {
        return (
            false,
            format!("Whisper model not found at {}", model_path.display()),
        );
    }

    // Check for a TTS command
    #[cfg(target_os = "macos")]
    let tts_binary = "say";
    #[cfg(not(target_os = "macos"))]
    let tts_binary = "espeak";

    let tts_check = Command::new("which").arg(tts_binary).output();
    if tts_check.is_err() || !tts_check.unwrap().status.success() {
        return (false, format!("{} not found for speech output", tts_binary));
    }

    (true, "Voice assistant ready".to_string())
}
