//! The line-oriented command language of the terminal front end.

use crate::error::CommandError;
use crate::types::{TodoAction, TodoId};
use std::path::PathBuf;

/// Usage text printed by `help`
pub const HELP: &str = "\
commands:
  add <text>          add a todo (a pending draft is kept)
  draft <text>        type into the new-todo input without adding
  submit              add the drafted text
  edit <id> <text>    replace a todo's text
  toggle <id>         mark a todo done or not done
  remove <id>         delete a todo (also: rm, delete)
  load <path>         replace the list with a JSON file
  list                show the list (also: ls)
  dump                print the list as JSON
  help                show this help
  quit                leave (also: exit)";

/// A parsed line of user input
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Add a todo with this text
    Add(String),
    /// Replace the pending input
    Draft(String),
    /// Add the pending input
    Submit,
    /// Replace the text of a todo
    Edit {
        /// Todo to edit
        id: TodoId,
        /// Replacement text
        text: String,
    },
    /// Flip a todo's done flag
    Toggle(TodoId),
    /// Delete a todo
    Remove(TodoId),
    /// Replace the list from a JSON file
    Load(PathBuf),
    /// Print the list
    List,
    /// Print the list as JSON
    Dump,
    /// Print usage
    Help,
    /// End the session
    Quit,
}

impl Command {
    /// Parse one line of input
    ///
    /// Returns `Ok(None)` for a blank line. Text arguments are trimmed and
    /// may be empty.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError`] for unknown commands, missing ids or paths,
    /// and ids that are not numbers.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(word, rest)| (word, rest.trim()));

        let command = match word.to_ascii_lowercase().as_str() {
            "add" => Self::Add(rest.to_string()),
            "draft" => Self::Draft(rest.to_string()),
            "submit" => Self::Submit,
            "edit" => {
                let (id, text) = rest
                    .split_once(char::is_whitespace)
                    .map_or((rest, ""), |(id, text)| (id, text.trim()));
                Self::Edit {
                    id: parse_id("edit", id)?,
                    text: text.to_string(),
                }
            }
            "toggle" => Self::Toggle(parse_id("toggle", rest)?),
            "remove" | "rm" | "delete" => Self::Remove(parse_id("remove", rest)?),
            "load" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "load",
                        argument: "a file path",
                    });
                }
                Self::Load(PathBuf::from(rest))
            }
            "list" | "ls" => Self::List,
            "dump" => Self::Dump,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            _ => return Err(CommandError::Unknown(word.to_string())),
        };

        Ok(Some(command))
    }

    /// The reducer actions this command stands for
    ///
    /// Commands that only read state or touch the filesystem yield none.
    #[must_use]
    pub fn into_actions(self) -> Vec<TodoAction> {
        match self {
            Self::Add(text) => vec![TodoAction::SetNewTodo { text }, TodoAction::AddTodo],
            Self::Draft(text) => vec![TodoAction::SetNewTodo { text }],
            Self::Submit => vec![TodoAction::AddTodo],
            Self::Edit { id, text } => vec![TodoAction::UpdateTodo { id, text }],
            Self::Toggle(id) => vec![TodoAction::ToggleTodo { id }],
            Self::Remove(id) => vec![TodoAction::RemoveTodo { id }],
            Self::Load(_) | Self::List | Self::Dump | Self::Help | Self::Quit => Vec::new(),
        }
    }
}

fn parse_id(command: &'static str, raw: &str) -> Result<TodoId, CommandError> {
    if raw.is_empty() {
        return Err(CommandError::MissingArgument {
            command,
            argument: "a todo id",
        });
    }
    raw.strip_prefix('#')
        .unwrap_or(raw)
        .parse::<u64>()
        .map(TodoId::new)
        .map_err(|_| CommandError::InvalidId(raw.to_string()))
}
