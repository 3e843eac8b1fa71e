//! GUI runner - launches the JustDoIT window and the voice assistant

use std::path::PathBuf;

use anyhow::Result;
use eframe::egui;
use tracing::{info, warn};

use super::app::TodoApp;
use crate::assistant::{self, check_availability, Microphone, SystemVoice};
use crate::config::Config;
use crate::domain::TaskListView;
use crate::store::TaskDb;

/// Run the main GUI application
pub fn run_gui(config_override: Option<PathBuf>) -> Result<()> {
    let config_path = config_override.unwrap_or_else(Config::global_config_path);

    // Load config, falling back to defaults on parse problems
    let config = if config_path.exists() {
        match Config::from_file(&config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!(
                    "[justdoit] Failed to parse config ({}): {}. Falling back to defaults.",
                    config_path.display(),
                    e
                );
                Config::with_defaults()
            }
        }
    } else {
        Config::with_defaults()
    };

    let db = TaskDb::open(&config.database_path())?;
    let view = TaskListView::new();

    // Start the voice assistant worker when enabled and the speech
    // toolchain is present; the GUI works fine without it
    let data_dir = Config::global_config_dir();
    let (assistant_rx, voice_status) = if config.settings.voice.enabled {
        let (available, status) = check_availability(&data_dir, &config.settings.voice);
        if available {
            let input = Microphone::new(&config.settings.voice, &data_dir);
            let output = SystemVoice::new(config.settings.voice.tts_voice.clone());
            let (rx, _handle) = assistant::spawn(db.clone(), view.clone(), input, output);
            info!("[justdoit] Voice assistant started");
            (Some(rx), status)
        } else {
            warn!("[justdoit] Voice assistant unavailable: {}", status);
            (None, status)
        }
    } else {
        (None, "Voice assistant disabled".to_string())
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([
                config.settings.gui.window_width,
                config.settings.gui.window_height,
            ])
            .with_min_inner_size([800.0, 400.0])
            .with_resizable(true),
        centered: true,
        ..Default::default()
    };

    let app = TodoApp::new(config, db, view, assistant_rx, voice_status);

    eframe::run_native("JustDoIT", options, Box::new(|_cc| Ok(Box::new(app))))
        .map_err(|e| anyhow::anyhow!("Failed to run GUI: {}", e))?;

    Ok(())
}
