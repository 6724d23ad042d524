// src/main.rs

mod cli;
mod commands;
mod db;
mod display;
mod error;
mod menu;
mod models;
mod terminal;
mod validation;

use clap::Parser;
use cli::Cli;
use db::Store;
use error::{Result, WorklogError};
use menu::MenuId;
use std::io;
use std::process::ExitCode;
use terminal::Terminal;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    let store = match open_store(&cli) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Error: could not open the work log database: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run_session(&store) {
        Ok(()) | Err(WorklogError::InputClosed) => {
            info!("session ended");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn open_store(cli: &Cli) -> Result<Store> {
    let db_path = db::get_db_path(cli.db.as_deref())?;
    let store = Store::open(&db_path)?;
    info!(path = %db_path.display(), entries = store.count()?, "work log opened");
    Ok(store)
}

fn run_session(store: &Store) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut term = Terminal::new(stdin.lock(), stdout.lock());
    menu::run(MenuId::Main, &mut term, store)
}
