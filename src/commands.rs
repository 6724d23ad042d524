// src/commands.rs

use crate::db::Store;
use crate::display;
use crate::error::{Result, WorklogError};
use crate::models::{LogEntry, NewEntry};
use crate::terminal::Terminal;
use crate::validation::{parse_time_spent, validate_date, validate_time_spent};
use std::io::{BufRead, Write};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Employee,
    Date,
    TimeSpent,
    Term,
}

impl SearchKind {
    fn prompt(self) -> &'static str {
        match self {
            SearchKind::Employee => "Enter the employee's first or last name: ",
            SearchKind::Date => "Enter the date to search (YYYY-MM-DD): ",
            SearchKind::TimeSpent => "Enter the time spent in minutes: ",
            SearchKind::Term => "Enter a term to search task names and notes: ",
        }
    }
}

const EMPTY_QUERY: &str = "You must enter a value.";
const BAD_DATE: &str = "You must enter a date in the format YYYY-MM-DD.";
const BAD_TIME_SPENT: &str = "Enter a numeric value for time spent.";

/// A search that has passed its format check and can be sent to storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    Employee(String),
    Date(String),
    TimeSpent(i64),
    Term(String),
}

/// Check raw search text for the given kind. Nothing here touches storage.
pub fn parse_query(kind: SearchKind, text: &str) -> Result<SearchQuery> {
    let text = text.trim();
    let invalid = |msg: &str| WorklogError::InvalidInput(msg.to_string());
    match kind {
        SearchKind::Employee | SearchKind::Term if text.is_empty() => Err(invalid(EMPTY_QUERY)),
        SearchKind::Employee => Ok(SearchQuery::Employee(text.to_string())),
        SearchKind::Term => Ok(SearchQuery::Term(text.to_string())),
        SearchKind::Date if !validate_date(text) => Err(invalid(BAD_DATE)),
        SearchKind::Date => Ok(SearchQuery::Date(text.to_string())),
        SearchKind::TimeSpent => parse_time_spent(text)
            .map(SearchQuery::TimeSpent)
            .ok_or_else(|| invalid(BAD_TIME_SPENT)),
    }
}

pub fn run_query(store: &Store, query: &SearchQuery) -> Result<Vec<LogEntry>> {
    debug!(?query, "running search");
    match query {
        SearchQuery::Employee(name) => store.find_by_employee(name),
        SearchQuery::Date(date) => store.find_by_date(date),
        SearchQuery::TimeSpent(minutes) => store.find_by_time_spent(*minutes),
        SearchQuery::Term(term) => store.find_by_term(term),
    }
}

/// Ask for a query of `kind`, then page through the matches.
pub fn handle_search<R: BufRead, W: Write>(
    term: &mut Terminal<R, W>,
    store: &Store,
    kind: SearchKind,
) -> Result<()> {
    let text = term.prompt(kind.prompt())?;
    let query = match parse_query(kind, &text) {
        Ok(query) => query,
        Err(WorklogError::InvalidInput(msg)) => {
            term.line(&msg)?;
            return term.pause();
        }
        Err(e) => return Err(e),
    };

    let entries = run_query(store, &query)?;
    info!(?kind, results = entries.len(), "search finished");
    display::show_entries(term, &entries)
}

/// Capture the fields of a new entry in order and save it.
pub fn handle_add<R: BufRead, W: Write>(term: &mut Terminal<R, W>, store: &Store) -> Result<()> {
    let entry = NewEntry {
        task_name: term.prompt("Enter a name for this task: ")?,
        first_name: term.prompt("Enter your first name: ")?,
        last_name: term.prompt("Enter your last name: ")?,
        time_spent: term.prompt("Enter the time spent on this task (minutes): ")?,
        notes: term.prompt("Enter any additional notes: ")?,
    };
    if !validate_time_spent(entry.time_spent.trim()) {
        return Err(WorklogError::Validation(format!(
            "time spent must be a whole number, got '{}'",
            entry.time_spent
        )));
    }

    let saved = store.insert(&entry)?;
    info!(id = saved.id, "entry recorded");
    term.line("✓ Entry saved.")?;
    term.pause()
}
