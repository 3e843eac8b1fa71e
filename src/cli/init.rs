//! Init command implementation

use std::path::Path;

use anyhow::Result;
use justdoit::config::Config;

/// Write a default config file
pub async fn init_command(config_override: Option<&Path>, force: bool) -> Result<()> {
    let path = match config_override {
        Some(path) => path.to_path_buf(),
        None => Config::global_config_path(),
    };

    if path.exists() && !force {
        println!(
            "Config file already exists: {} (use --force to overwrite)",
            path.display()
        );
        return Ok(());
    }

    let config = Config::with_defaults();
    config.save_to_file(&path)?;
    println!("Created {}", path.display());

    Ok(())
}
