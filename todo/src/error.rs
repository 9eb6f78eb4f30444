//! Error types for the outer edges of the todo application.
//!
//! The collection functions and the reducer cannot fail; errors only arise
//! while reading configuration, seed files, user commands, or the terminal.

use crate::types::TodoId;
use std::path::PathBuf;
use thiserror::Error;

/// Invalid configuration values
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A boolean setting held something other than a recognised flag
    #[error("invalid value `{value}` for {name}: expected true or false")]
    InvalidBool {
        /// Environment variable name
        name: &'static str,
        /// Offending value
        value: String,
    },

    /// The tracing filter directive could not be parsed
    #[error("invalid log filter `{value}`: {source}")]
    InvalidLogFilter {
        /// Offending directive
        value: String,
        /// Parser error
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },
}

/// Failures while reading a seed collection
#[derive(Error, Debug)]
pub enum SeedError {
    /// The seed file could not be read
    #[error("failed to read seed file {}: {source}", .path.display())]
    Io {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The seed data was not a JSON array of todos
    #[error("malformed seed data: {0}")]
    Json(#[from] serde_json::Error),

    /// A todo carried the reserved identifier 0
    #[error("todo ids must be positive, found 0")]
    ZeroId,

    /// Two todos shared an identifier
    #[error("duplicate todo id {0}")]
    DuplicateId(TodoId),
}

/// A line of user input that is not a valid command
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    /// The first word is not a known command
    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),

    /// A required argument was left out
    #[error("`{command}` needs {argument}")]
    MissingArgument {
        /// Command that was typed
        command: &'static str,
        /// Description of what is missing
        argument: &'static str,
    },

    /// An identifier argument was not a number
    #[error("invalid todo id `{0}`")]
    InvalidId(String),
}

/// Fatal errors from the interactive session
#[derive(Error, Debug)]
pub enum AppError {
    /// Reading input or writing output failed
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The list could not be encoded for `dump`
    #[error("failed to encode todos: {0}")]
    Encode(#[from] serde_json::Error),
}
