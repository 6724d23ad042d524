// src/cli.rs

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "worklog - record and search work entries from the terminal",
    long_about = "worklog runs an interactive menu for logging tasks (name, employee, minutes spent, notes) into a local SQLite database and paging through them by employee, date, time spent or free-text term."
)]
pub struct Cli {
    /// Database file to use. Falls back to $WORKLOG_DB, then ~/.config/worklog/worklog.db
    #[arg(long, value_name = "PATH")]
    pub db: Option<PathBuf>,
}
