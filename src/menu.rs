// src/menu.rs

use crate::commands::{self, SearchKind};
use crate::db::Store;
use crate::error::Result;
use crate::terminal::Terminal;
use std::io::{BufRead, Write};
use tracing::debug;

/// Which menu table is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuId {
    Main,
    Search,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    AddEntry,
    OpenSearch,
    Search(SearchKind),
}

#[derive(Debug, Clone, Copy)]
pub struct MenuItem {
    pub key: &'static str,
    pub label: &'static str,
    pub action: Action,
}

const MAIN_MENU: &[MenuItem] = &[
    MenuItem {
        key: "a",
        label: "Add Entry",
        action: Action::AddEntry,
    },
    MenuItem {
        key: "s",
        label: "Search Entries",
        action: Action::OpenSearch,
    },
];

const SEARCH_MENU: &[MenuItem] = &[
    MenuItem {
        key: "e",
        label: "Search by Employee",
        action: Action::Search(SearchKind::Employee),
    },
    MenuItem {
        key: "d",
        label: "Search by Date",
        action: Action::Search(SearchKind::Date),
    },
    MenuItem {
        key: "t",
        label: "Search by Time Spent",
        action: Action::Search(SearchKind::TimeSpent),
    },
    MenuItem {
        key: "m",
        label: "Search by Term",
        action: Action::Search(SearchKind::Term),
    },
];

impl MenuId {
    pub fn items(self) -> &'static [MenuItem] {
        match self {
            MenuId::Main => MAIN_MENU,
            MenuId::Search => SEARCH_MENU,
        }
    }

    /// The key that leaves this menu: quit for the main menu, return for the search menu.
    pub fn exit_key(self) -> &'static str {
        match self {
            MenuId::Main => "q",
            MenuId::Search => "r",
        }
    }

    fn exit_hint(self) -> &'static str {
        match self {
            MenuId::Main => "Please select an option\nor enter q to quit: ",
            MenuId::Search => "Please select an option\nor enter r to return to the main menu: ",
        }
    }

    pub fn lookup(self, key: &str) -> Option<&'static MenuItem> {
        self.items().iter().find(|item| item.key == key)
    }

    pub fn is_valid_choice(self, key: &str) -> bool {
        key == self.exit_key() || self.lookup(key).is_some()
    }
}

/// Run `menu` until its exit key is chosen.
pub fn run<R: BufRead, W: Write>(
    menu: MenuId,
    term: &mut Terminal<R, W>,
    store: &Store,
) -> Result<()> {
    loop {
        term.clear()?;
        render(menu, term)?;
        let choice = match term.choice(menu.exit_hint()) {
            Ok(choice) => choice,
            Err(e) if e.is_recoverable() => {
                term.line(&e.to_string())?;
                term.pause()?;
                continue;
            }
            Err(e) => return Err(e),
        };

        if !menu.is_valid_choice(&choice) {
            term.line(&format!("'{}' is not a valid option.", choice))?;
            term.pause()?;
            continue;
        }
        let Some(item) = menu.lookup(&choice) else {
            return Ok(());
        };

        term.clear()?;
        if let Err(e) = dispatch(item.action, term, store) {
            if !e.is_recoverable() {
                return Err(e);
            }
            debug!(error = %e, "action failed");
            term.line(&format!("Error: {}", e))?;
            term.pause()?;
        }
    }
}

fn dispatch<R: BufRead, W: Write>(
    action: Action,
    term: &mut Terminal<R, W>,
    store: &Store,
) -> Result<()> {
    match action {
        Action::AddEntry => commands::handle_add(term, store),
        Action::OpenSearch => run(MenuId::Search, term, store),
        Action::Search(kind) => commands::handle_search(term, store, kind),
    }
}

fn render<R: BufRead, W: Write>(menu: MenuId, term: &mut Terminal<R, W>) -> Result<()> {
    let rule = "=".repeat(40);
    match menu {
        MenuId::Main => {
            term.line(&chrono::Local::now().format("%A %B %d, %Y %I:%M%p").to_string())?
        }
        MenuId::Search => term.line("Search Entries")?,
    }
    term.line(&rule)?;
    for item in menu.items() {
        term.line(&format!("[{}] {}", item.key, item.label))?;
    }
    term.line(&rule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WorklogError;
    use std::io::Cursor;

    fn session(input: &str) -> (Result<()>, String, Store) {
        session_bytes(input.as_bytes())
    }

    fn session_bytes(input: &[u8]) -> (Result<()>, String, Store) {
        let store = Store::open_in_memory().unwrap();
        let mut term = Terminal::new(Cursor::new(input.to_vec()), Vec::new());
        let result = run(MenuId::Main, &mut term, &store);
        (result, String::from_utf8(term.into_output()).unwrap(), store)
    }

    #[test]
    fn main_menu_binds_add_and_search() {
        assert_eq!(MenuId::Main.lookup("a").unwrap().action, Action::AddEntry);
        assert_eq!(MenuId::Main.lookup("s").unwrap().action, Action::OpenSearch);
        assert_eq!(
            MenuId::Search.lookup("t").unwrap().action,
            Action::Search(SearchKind::TimeSpent)
        );
    }

    #[test]
    fn choice_validation_follows_the_active_menu() {
        assert!(MenuId::Main.is_valid_choice("a"));
        assert!(MenuId::Main.is_valid_choice("q"));
        assert!(!MenuId::Main.is_valid_choice("z"));
        assert!(!MenuId::Main.is_valid_choice("e"));
        assert!(MenuId::Search.is_valid_choice("e"));
        assert!(MenuId::Search.is_valid_choice("r"));
        assert!(!MenuId::Search.is_valid_choice("q"));
    }

    #[test]
    fn quit_ends_the_session() {
        let (result, out, _) = session("q\n");
        assert!(result.is_ok());
        assert!(out.contains("[a] Add Entry"));
        assert!(out.contains("[s] Search Entries"));

        let rule = "=".repeat(40);
        let lines: Vec<&str> = out.lines().collect();
        let rule_at = lines.iter().position(|l| *l == rule).unwrap();
        let header = lines[rule_at - 1];
        let weekdays = [
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday",
            "Sunday",
        ];
        assert!(weekdays.iter().any(|day| header.contains(day)));
        assert!(header.ends_with("AM") || header.ends_with("PM"));
    }

    #[test]
    fn invalid_utf8_choice_is_reported_and_the_loop_continues() {
        let mut input = b"s\ne\n".to_vec();
        input.extend_from_slice(&[0xff, 0xfe, b'\n']);
        input.extend_from_slice(b"\nr\n");
        input.extend_from_slice(&[0xff, 0xfe, b'\n']);
        input.extend_from_slice(b"\nq\n");

        let (result, out, _) = session_bytes(&input);
        assert!(result.is_ok());
        assert_eq!(out.matches("Input must be valid UTF-8.").count(), 2);
    }

    #[test]
    fn unknown_key_reports_and_rerenders() {
        let (result, out, store) = session("z\n\nq\n");
        assert!(result.is_ok());
        assert!(out.contains("'z' is not a valid option."));
        assert_eq!(out.matches("[a] Add Entry").count(), 2);
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn return_key_goes_back_to_main_menu() {
        let (result, out, _) = session("s\nr\nq\n");
        assert!(result.is_ok());
        assert!(out.contains("[m] Search by Term"));
        assert_eq!(out.matches("[a] Add Entry").count(), 2);
    }

    #[test]
    fn storage_rejection_does_not_end_the_session() {
        let (result, out, store) = session("a\nTask\nGarrett\nKucinski\nforty\n\n\nq\n");
        assert!(result.is_ok());
        assert!(out.contains("Error: Invalid entry"));
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn add_then_search_by_time_spent() {
        let (result, out, store) =
            session("a\nDeploy\nGrace\nHopper\n40\n\n\ns\nt\n40\nn\nr\nq\n");
        assert!(result.is_ok());
        assert_eq!(store.count().unwrap(), 1);
        assert!(out.contains("Employee Name: Grace Hopper"));
    }

    #[test]
    fn closed_input_propagates() {
        let (result, _, _) = session("s\n");
        assert!(matches!(result, Err(WorklogError::InputClosed)));
    }
}
