// src/error.rs

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorklogError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database Error: {0}")]
    Sql(#[from] rusqlite::Error),

    #[error("Home directory not found")]
    HomeDirNotFound,

    /// A search query that failed its format check before reaching storage.
    #[error("{0}")]
    InvalidInput(String),

    /// A record rejected at the storage boundary.
    #[error("Invalid entry: {0}")]
    Validation(String),

    #[error("Input stream closed")]
    InputClosed,
}

impl WorklogError {
    /// Whether the menu loop can report this error and keep going.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            WorklogError::InvalidInput(_) | WorklogError::Validation(_) | WorklogError::Sql(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, WorklogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_errors_are_recoverable() {
        assert!(WorklogError::InvalidInput("You must enter a value".into()).is_recoverable());
        assert!(WorklogError::Validation("bad".into()).is_recoverable());
    }

    #[test]
    fn closed_input_ends_the_session() {
        assert!(!WorklogError::InputClosed.is_recoverable());
        assert!(!WorklogError::HomeDirNotFound.is_recoverable());
    }

    #[test]
    fn validation_display_names_the_problem() {
        let err = WorklogError::Validation("time spent must be a whole number".into());
        assert_eq!(err.to_string(), "Invalid entry: time spent must be a whole number");
    }
}
