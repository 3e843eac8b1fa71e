//! SQLite database connection and schema management for tasks
//!
//! Manages the `~/.justdoit/tasks.db` database. The connection is the single
//! serialization point for store mutations: both the GUI and the voice
//! assistant go through the same mutex.

use std::path::Path;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rusqlite::Connection;

use crate::config::Config;
use crate::domain::Task;

/// Deadline column storage format (ISO, sorts lexicographically by date)
const DATE_FMT: &str = "%Y-%m-%d";

/// Database wrapper shared between the GUI thread and the assistant worker
#[derive(Clone)]
pub struct TaskDb {
    conn: Arc<Mutex<Connection>>,
}

impl TaskDb {
    /// Open or create the task database at the default location (~/.justdoit/tasks.db)
    pub fn open_default() -> Result<Self> {
        let db_path = Config::global_config_dir().join("tasks.db");
        Self::open(&db_path)
    }

    /// Open or create the task database at a specific path
    pub fn open(path: &Path) -> Result<Self> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data dir: {}", parent.display()))?;
        }

        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open task db: {}", path.display()))?;

        // WAL so the GUI and the assistant worker can interleave access
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;

        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        db.init_schema()?;
        Ok(db)
    }

    /// Get a reference to the connection (for queries)
    pub fn conn(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.conn.lock().expect("Task DB lock poisoned")
    }

    /// Initialize the database schema
    fn init_schema(&self) -> Result<()> {
        let conn = self.conn();
        conn.execute_batch(SCHEMA_SQL)?;
        Ok(())
    }

    /// Insert a task
    pub fn insert(&self, task: &Task) -> Result<()> {
        let conn = self.conn();
        conn.execute(
            "INSERT INTO tasks (task, deadline) VALUES (?1, ?2)",
            rusqlite::params![task.name, task.deadline.format(DATE_FMT).to_string()],
        )
        .with_context(|| format!("Failed to insert task '{}'", task.name))?;
        Ok(())
    }

    /// Delete a task by name.
    ///
    /// Names are not unique; when several rows share the name, only the
    /// earliest-inserted one is removed. Returns true if a row was deleted.
    pub fn delete_by_name(&self, name: &str) -> Result<bool> {
        let conn = self.conn();
        let affected = conn
            .execute(
                "DELETE FROM tasks WHERE rowid = \
                 (SELECT rowid FROM tasks WHERE task = ?1 ORDER BY rowid LIMIT 1)",
                [name],
            )
            .with_context(|| format!("Failed to delete task '{}'", name))?;
        Ok(affected > 0)
    }

    /// All tasks, ordered by deadline ascending (insertion order breaks ties)
    pub fn list(&self) -> Result<Vec<Task>> {
        let conn = self.conn();
        let mut stmt =
            conn.prepare("SELECT task, deadline FROM tasks ORDER BY deadline ASC, rowid ASC")?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut tasks = Vec::new();
        for row in rows {
            let (name, deadline) = row?;
            let deadline = NaiveDate::parse_from_str(&deadline, DATE_FMT)
                .with_context(|| format!("Corrupt deadline '{}' for task '{}'", deadline, name))?;
            tasks.push(Task { name, deadline });
        }
        Ok(tasks)
    }

    /// Number of stored tasks
    pub fn count(&self) -> Result<usize> {
        let conn = self.conn();
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM tasks", [], |r| r.get(0))?;
        Ok(count as usize)
    }
}

/// SQL schema for the task database
const SCHEMA_SQL: &str = r#"
-- To-do items (name doubles as the deletion handle)
CREATE TABLE IF NOT EXISTS tasks (
    task TEXT NOT NULL,
    deadline DATE NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_tasks_deadline ON tasks(deadline);

-- Schema version
CREATE TABLE IF NOT EXISTS schema_version (version INTEGER PRIMARY KEY);
INSERT OR IGNORE INTO schema_version VALUES (1);
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_open_and_init() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test_tasks.db");
        let db = TaskDb::open(&db_path).unwrap();

        // Verify tables exist
        let conn = db.conn();
        let mut stmt = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table'")
            .unwrap();
        let tables: Vec<String> = stmt
            .query_map([], |row| row.get(0))
            .unwrap()
            .filter_map(|r| r.ok())
            .collect();

        assert!(tables.contains(&"tasks".to_string()));
        assert!(tables.contains(&"schema_version".to_string()));
    }

    #[test]
    fn test_list_is_sorted_by_deadline() {
        let dir = tempdir().unwrap();
        let db = TaskDb::open(&dir.path().join("tasks.db")).unwrap();

        db.insert(&Task::new("later", date(2030, 12, 1))).unwrap();
        db.insert(&Task::new("soon", date(2030, 1, 15))).unwrap();
        db.insert(&Task::new("middle", date(2030, 6, 3))).unwrap();

        let names: Vec<String> = db.list().unwrap().into_iter().map(|t| t.name).collect();
        assert_eq!(names, ["soon", "middle", "later"]);
    }

    #[test]
    fn test_delete_by_name_removes_earliest_duplicate() {
        let dir = tempdir().unwrap();
        let db = TaskDb::open(&dir.path().join("tasks.db")).unwrap();

        db.insert(&Task::new("laundry", date(2030, 1, 1))).unwrap();
        db.insert(&Task::new("laundry", date(2030, 2, 2))).unwrap();

        assert!(db.delete_by_name("laundry").unwrap());
        let remaining = db.list().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].deadline, date(2030, 2, 2));
    }

    #[test]
    fn test_delete_missing_name_is_noop() {
        let dir = tempdir().unwrap();
        let db = TaskDb::open(&dir.path().join("tasks.db")).unwrap();

        db.insert(&Task::new("only", date(2030, 1, 1))).unwrap();
        assert!(!db.delete_by_name("nope").unwrap());
        assert_eq!(db.count().unwrap(), 1);
    }
}
