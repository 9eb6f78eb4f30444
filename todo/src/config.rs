//! Configuration management for the todo application.
//!
//! Loads configuration from environment variables with sensible defaults.
//! A `.env` file in the working directory is read first when present.

use crate::error::ConfigError;
use crate::view::ViewOptions;
use std::env;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Tracing filter used when neither `TODO_LOG` nor `RUST_LOG` is set
pub const DEFAULT_LOG_FILTER: &str = "todo=info,composable_todo_runtime=info";

/// Prompt printed before each line of input
pub const DEFAULT_PROMPT: &str = "todo> ";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// JSON file loaded into the list at startup (`TODO_SEED_FILE`)
    pub seed_file: Option<PathBuf>,
    /// Tracing filter directive (`TODO_LOG`, then `RUST_LOG`)
    pub log_filter: String,
    /// Input prompt (`TODO_PROMPT`)
    pub prompt: String,
    /// Whether finished todos are listed (`TODO_SHOW_DONE`)
    pub show_done: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_file: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
            show_done: true,
        }
    }
}

impl Config {
    /// Load configuration from a `.env` file (if any) and the environment.
    ///
    /// Variables already set in the process take precedence over the file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a boolean variable holds an unrecognised value.
    pub fn load() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_env()
    }

    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a boolean variable holds an unrecognised value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a boolean variable holds an unrecognised value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let show_done = match lookup("TODO_SHOW_DONE") {
            Some(value) => parse_bool("TODO_SHOW_DONE", &value)?,
            None => defaults.show_done,
        };

        Ok(Self {
            seed_file: lookup("TODO_SEED_FILE")
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
            log_filter: lookup("TODO_LOG")
                .or_else(|| lookup("RUST_LOG"))
                .unwrap_or(defaults.log_filter),
            prompt: lookup("TODO_PROMPT").unwrap_or(defaults.prompt),
            show_done,
        })
    }

    /// Tracing filter built from `log_filter`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLogFilter`] if the directive does not parse.
    pub fn env_filter(&self) -> Result<EnvFilter, ConfigError> {
        EnvFilter::try_new(&self.log_filter).map_err(|source| ConfigError::InvalidLogFilter {
            value: self.log_filter.clone(),
            source,
        })
    }

    /// View options derived from this configuration
    #[must_use]
    pub const fn view_options(&self) -> ViewOptions {
        ViewOptions {
            show_done: self.show_done,
        }
    }
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            name,
            value: value.to_string(),
        }),
    }
}
