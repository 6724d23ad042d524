// src/display.rs

use crate::error::Result;
use crate::models::LogEntry;
use crate::terminal::Terminal;
use std::io::{BufRead, Write};

/// Step through `entries` one screen at a time until they run out or the user quits.
pub fn show_entries<R: BufRead, W: Write>(
    term: &mut Terminal<R, W>,
    entries: &[LogEntry],
) -> Result<()> {
    if entries.is_empty() {
        term.line("No results found.")?;
        return term.pause();
    }

    let total = entries.len();
    for (index, entry) in entries.iter().enumerate() {
        term.clear()?;
        render_entry(term, entry, index + 1, total)?;

        loop {
            match term.choice("Please make a selection: ")?.as_str() {
                "n" => break,
                "q" => {
                    term.clear()?;
                    return Ok(());
                }
                _ => term.line("Enter n for the next entry or q to return.")?,
            }
        }
    }
    Ok(())
}

fn render_entry<R: BufRead, W: Write>(
    term: &mut Terminal<R, W>,
    entry: &LogEntry,
    position: usize,
    total: usize,
) -> Result<()> {
    let rule = "=".repeat(20);
    term.line(&format!("Result {} of {}", position, total))?;
    term.line(&format!("Date: {}", entry.date()))?;
    term.line(&rule)?;
    term.line(&format!("Task Name: {}", entry.task_name))?;
    term.line(&format!("Employee Name: {}", entry.full_name()))?;
    term.line(&format!("Time Spent: {} minutes", entry.time_spent))?;
    term.line(&format!("Notes: {}", entry.notes))?;
    term.line(&format!("Logged At: {}", entry.timestamp))?;
    term.line(&rule)?;
    term.line("[n] Next Entry")?;
    term.line("[q] Main Menu")?;
    term.line(&rule)
}
