//! Add command implementation

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use justdoit::domain::Task;
use justdoit::store::TaskDb;

/// Add a task directly from the command line
pub async fn add_command(
    config_override: Option<&Path>,
    name: &str,
    deadline: &str,
) -> Result<()> {
    let name = name.trim();
    if name.is_empty() {
        anyhow::bail!("Task name must not be empty");
    }

    let deadline = NaiveDate::parse_from_str(deadline.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid deadline '{}'. Use YYYY-MM-DD.", deadline))?;

    let config = super::load_config(config_override)?;
    let db = TaskDb::open(&config.database_path())?;
    db.insert(&Task::new(name, deadline))?;

    println!("Added task \"{}\" (due {})", name, deadline);
    Ok(())
}
