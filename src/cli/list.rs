//! List command implementation

use std::path::Path;

use anyhow::Result;
use justdoit::store::TaskDb;

/// Print all tasks ordered by deadline, with their display indices
pub async fn list_command(config_override: Option<&Path>) -> Result<()> {
    let config = super::load_config(config_override)?;
    let db = TaskDb::open(&config.database_path())?;
    let tasks = db.list()?;

    if tasks.is_empty() {
        println!("No tasks found.");
        return Ok(());
    }

    println!("Tasks ({}):\n", tasks.len());
    for (index, task) in tasks.iter().enumerate() {
        println!("  {:>3}. {}  (due {})", index + 1, task.name, task.deadline);
    }

    Ok(())
}
