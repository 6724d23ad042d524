// src/db.rs

use crate::error::{Result, WorklogError};
use crate::models::{LogEntry, NewEntry};
use rusqlite::{params, Connection, Row, ToSql};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DB_ENV_VAR: &str = "WORKLOG_DB";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const SCHEMA_LOGS: &str = "CREATE TABLE IF NOT EXISTS logs (
    id INTEGER PRIMARY KEY,
    task_name TEXT NOT NULL,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    time_spent INTEGER NOT NULL,
    notes TEXT NOT NULL DEFAULT '',
    timestamp TEXT NOT NULL
)";
const INSERT_LOG: &str = "INSERT INTO logs (task_name, first_name, last_name, time_spent, notes, timestamp)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const SELECT_LOGS: &str =
    "SELECT id, task_name, first_name, last_name, time_spent, notes, timestamp FROM logs";

/// Resolve the database file: explicit path, then `WORKLOG_DB`, then ~/.config/worklog/worklog.db
pub fn get_db_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    if let Some(path) = std::env::var_os(DB_ENV_VAR).filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    let home_dir = dirs::home_dir().ok_or(WorklogError::HomeDirNotFound)?;
    Ok(home_dir.join(".config/worklog/worklog.db"))
}

/// The log table and the connection that owns it.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open (creating if needed) the database file and make sure the table exists.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        debug!(path = %path.display(), "opened database");
        Self::with_connection(conn)
    }

    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        let store = Store { conn };
        store.initialize()?;
        Ok(store)
    }

    /// Idempotent: safe to call on every start.
    pub fn initialize(&self) -> Result<()> {
        self.conn.execute(SCHEMA_LOGS, [])?;
        Ok(())
    }

    /// Check and persist a new record, stamping it with the current local time.
    pub fn insert(&self, entry: &NewEntry) -> Result<LogEntry> {
        let time_spent = parse_time_spent(&entry.time_spent)?;
        for (field, value) in [
            ("task name", &entry.task_name),
            ("first name", &entry.first_name),
            ("last name", &entry.last_name),
        ] {
            if value.trim().is_empty() {
                return Err(WorklogError::Validation(format!("{} is required", field)));
            }
        }

        let timestamp = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();
        self.conn.execute(
            INSERT_LOG,
            params![
                entry.task_name,
                entry.first_name,
                entry.last_name,
                time_spent,
                entry.notes,
                timestamp
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        debug!(id, "inserted log entry");

        Ok(LogEntry {
            id,
            task_name: entry.task_name.clone(),
            first_name: entry.first_name.clone(),
            last_name: entry.last_name.clone(),
            time_spent,
            notes: entry.notes.clone(),
            timestamp,
        })
    }

    /// Case-sensitive substring match on first or last name.
    pub fn find_by_employee(&self, name: &str) -> Result<Vec<LogEntry>> {
        self.fetch(
            "WHERE instr(first_name, ?1) > 0 OR instr(last_name, ?1) > 0",
            &[&name],
        )
    }

    /// Substring match on the stored timestamp text.
    pub fn find_by_date(&self, date: &str) -> Result<Vec<LogEntry>> {
        self.fetch("WHERE instr(timestamp, ?1) > 0", &[&date])
    }

    pub fn find_by_time_spent(&self, minutes: i64) -> Result<Vec<LogEntry>> {
        self.fetch("WHERE time_spent = ?1", &[&minutes])
    }

    /// Substring match on task name or notes.
    pub fn find_by_term(&self, term: &str) -> Result<Vec<LogEntry>> {
        self.fetch(
            "WHERE instr(task_name, ?1) > 0 OR instr(notes, ?1) > 0",
            &[&term],
        )
    }

    pub fn count(&self) -> Result<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM logs", [], |row| row.get(0))?;
        Ok(count)
    }

    fn fetch(&self, filter: &str, params: &[&dyn ToSql]) -> Result<Vec<LogEntry>> {
        let query = format!("{} {} ORDER BY id", SELECT_LOGS, filter);
        debug!(%query, "fetching log entries");
        let mut stmt = self.conn.prepare(&query)?;
        let logs = stmt
            .query_map(params, row_to_entry)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(logs)
    }
}

fn row_to_entry(row: &Row<'_>) -> rusqlite::Result<LogEntry> {
    Ok(LogEntry {
        id: row.get(0)?,
        task_name: row.get(1)?,
        first_name: row.get(2)?,
        last_name: row.get(3)?,
        time_spent: row.get(4)?,
        notes: row.get(5)?,
        timestamp: row.get(6)?,
    })
}

fn parse_time_spent(raw: &str) -> Result<i64> {
    let minutes: i64 = raw.trim().parse().map_err(|_| {
        WorklogError::Validation(format!("time spent must be a whole number, got '{}'", raw))
    })?;
    if minutes < 0 {
        return Err(WorklogError::Validation(
            "time spent cannot be negative".to_string(),
        ));
    }
    Ok(minutes)
}
