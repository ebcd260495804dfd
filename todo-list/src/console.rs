//! Line-oriented console surface.
//!
//! Stands in for the text field and the per-row buttons: each input line is
//! parsed into a [`Command`], and the list is rendered as plain text. Rows are
//! numbered from 1 on screen and mapped to 0-based indices here.

use crate::controller::{LoadStatus, TodoListAction, TodoListState};
use std::fmt::Write as _;
use thiserror::Error;

/// Help text printed by `help` and after a parse error
pub const HELP: &str = "\
commands:
  add <text>      add a todo
  edit <n>        start editing row n
  text <title>    change the title being edited
  save            save the edit
  cancel          cancel the edit
  delete <n>      delete row n
  list            show the list
  quit            exit";

/// One parsed input line
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Forward an intent to the controller
    Intent(TodoListAction),
    /// Re-render the list
    List,
    /// Print [`HELP`]
    Help,
    /// Leave the console
    Quit,
}

/// Errors produced while parsing an input line
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// First word is not a known command
    #[error("unknown command: {0}")]
    Unknown(String),

    /// Row number is missing or not a positive integer
    #[error("expected a row number, got {0:?}")]
    InvalidRow(String),
}

/// Parse one input line
///
/// Blank lines re-render the list.
///
/// # Errors
///
/// Returns a [`CommandError`] for unknown commands and bad row numbers.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim_start();
    let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

    let command = match word {
        "" | "list" | "ls" => Command::List,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        "add" => Command::Intent(TodoListAction::SubmitNewTodo {
            text: rest.to_string(),
        }),
        "edit" => Command::Intent(TodoListAction::BeginEdit {
            index: parse_row(rest)?,
        }),
        "text" => Command::Intent(TodoListAction::UpdateEditBuffer {
            text: rest.to_string(),
        }),
        "save" => Command::Intent(TodoListAction::SaveEdit),
        "cancel" => Command::Intent(TodoListAction::CancelEdit),
        "delete" | "rm" => Command::Intent(TodoListAction::RequestDelete {
            index: parse_row(rest)?,
        }),
        other => return Err(CommandError::Unknown(other.to_string())),
    };

    Ok(command)
}

fn parse_row(text: &str) -> Result<usize, CommandError> {
    let text = text.trim();
    match text.parse::<usize>() {
        Ok(row) if row > 0 => Ok(row - 1),
        _ => Err(CommandError::InvalidRow(text.to_string())),
    }
}

/// Render the list as plain text
#[must_use]
pub fn render(state: &TodoListState) -> String {
    let mut out = String::new();

    match &state.load {
        LoadStatus::Loading => out.push_str("(loading…)\n"),
        LoadStatus::Failed { error } => {
            let _ = writeln!(out, "(could not load todos: {error})");
        },
        LoadStatus::Idle | LoadStatus::Loaded { .. } => {},
    }

    if state.todos.is_empty() {
        out.push_str("no todos\n");
    }

    for row in state.rows() {
        let mark = if row.item.completed { 'x' } else { ' ' };
        let _ = write!(out, "{:>3}. [{mark}] {}", row.index + 1, row.item.title);
        if row.editing {
            if let Some(session) = &state.edit {
                let _ = write!(out, "  -> editing: {:?}", session.title);
            }
        }
        out.push('\n');
    }

    out
}
