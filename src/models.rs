// src/models.rs

/// A stored work record. Rows are never updated once written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub id: i64,
    pub task_name: String,
    pub first_name: String,
    pub last_name: String,
    pub time_spent: i64,
    pub notes: String,
    pub timestamp: String, // local time, "%Y-%m-%d %H:%M:%S"
}

impl LogEntry {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// The calendar-date part of the timestamp.
    pub fn date(&self) -> &str {
        self.timestamp.split(' ').next().unwrap_or(&self.timestamp)
    }
}

/// Field values as captured from the user, before storage checks them.
#[derive(Debug, Clone, Default)]
pub struct NewEntry {
    pub task_name: String,
    pub first_name: String,
    pub last_name: String,
    pub time_spent: String,
    pub notes: String,
}
