//! Interactive Commands
//!
//! One line of operator input maps to one command.

use crate::domain::camera::{BoolField, TextField};
use crate::error::{Error, Result};
use std::str::FromStr;

/// Operator command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the form
    Show,
    /// Replace a text field; the value is kept verbatim
    Set { field: TextField, value: String },
    /// Set a boolean field, or invert it when no state is given
    Toggle { field: BoolField, checked: Option<bool> },
    /// Validate and save
    Commit,
    /// Discard edits and load again
    Reload,
    Help,
    Quit,
}

fn parse_switch(value: &str) -> Result<bool> {
    match value {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        other => Err(Error::Invalid {
            message: format!("Expected on or off, got: {other}"),
        }),
    }
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim_end_matches(['\r', '\n']).trim_start();
        let (word, rest) = line.split_once(' ').unwrap_or((line, ""));

        match word {
            "show" | "" => Ok(Command::Show),
            "commit" | "save" | "update" => Ok(Command::Commit),
            "reload" => Ok(Command::Reload),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            "set" => {
                // Everything after the first space following the field name is the value
                let rest = rest.trim_start();
                let (field, value) = rest.split_once(' ').unwrap_or((rest, ""));
                Ok(Command::Set {
                    field: field.parse()?,
                    value: value.to_string(),
                })
            }
            "toggle" => {
                let mut parts = rest.split_whitespace();
                let field = parts.next().unwrap_or_default().parse()?;
                let checked = parts.next().map(parse_switch).transpose()?;
                Ok(Command::Toggle { field, checked })
            }
            other => Err(Error::Invalid {
                message: format!("Unknown command: {other}"),
            }),
        }
    }
}
