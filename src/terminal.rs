// src/terminal.rs

use crate::error::{Result, WorklogError};
use std::io::{self, BufRead, Write};

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// Line-oriented prompts over any reader/writer pair.
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Terminal { input, output }
    }

    /// Print `label` and read one line without its line ending.
    pub fn prompt(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => return Err(WorklogError::InputClosed),
            Ok(_) => {}
            // read_line has already consumed the offending bytes
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                return Err(WorklogError::InvalidInput(
                    "Input must be valid UTF-8.".to_string(),
                ));
            }
            Err(e) => return Err(e.into()),
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// A prompt whose answer is trimmed and lowercased.
    pub fn choice(&mut self, label: &str) -> Result<String> {
        Ok(self.prompt(label)?.trim().to_lowercase())
    }

    pub fn pause(&mut self) -> Result<()> {
        match self.prompt("Press enter to continue...") {
            Ok(_) | Err(WorklogError::InvalidInput(_)) => Ok(()),
            Err(e) => Err(e),
        }
    }

    pub fn clear(&mut self) -> Result<()> {
        write!(self.output, "{}", CLEAR_SCREEN)?;
        self.output.flush()?;
        Ok(())
    }

    pub fn line(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}
