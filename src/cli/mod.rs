//! CLI command implementations

pub mod add;
pub mod init;
pub mod list;

use std::path::Path;

use anyhow::Result;
use justdoit::config::Config;

/// Load config from the override path or the global location
pub(crate) fn load_config(config_override: Option<&Path>) -> Result<Config> {
    match config_override {
        Some(path) => Config::from_file(path),
        None => Config::load(),
    }
}
