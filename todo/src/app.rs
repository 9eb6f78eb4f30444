//! The interactive model-update loop.
//!
//! [`App`] owns the one [`TodoStore`]. Each input line becomes a
//! [`Command`]; the command's actions go through the store, and the view is
//! handed the resulting state to draw.

use crate::command::{Command, HELP};
use crate::config::{Config, DEFAULT_PROMPT};
use crate::error::{AppError, SeedError};
use crate::reducer::TodoReducer;
use crate::seed;
use crate::types::{TodoAction, TodoState};
use crate::view::{self, ViewOptions};
use composable_todo_runtime::Store;
use std::io::{BufRead, Write};

/// Store specialised to the todo list
pub type TodoStore = Store<TodoState, TodoAction, TodoReducer>;

/// Whether the session should keep reading input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line
    Continue,
    /// Stop the session
    Quit,
}

/// Terminal front end for the todo list
#[derive(Debug)]
pub struct App {
    store: TodoStore,
    view: ViewOptions,
    prompt: String,
}

impl App {
    /// Creates an app around an existing store
    #[must_use]
    pub fn new(store: TodoStore, view: ViewOptions) -> Self {
        Self {
            store,
            view,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }

    /// Creates an app from configuration, loading the seed file if one is set
    ///
    /// # Errors
    ///
    /// Returns [`SeedError`] if the configured seed file cannot be loaded.
    pub fn from_config(config: &Config) -> Result<Self, SeedError> {
        let mut store = Store::new(TodoState::new(), TodoReducer::new());
        if let Some(path) = &config.seed_file {
            let todos = seed::load_seed(path)?;
            store.send(TodoAction::Load { todos });
        }

        Ok(Self::new(store, config.view_options()).with_prompt(config.prompt.clone()))
    }

    /// Replace the input prompt
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// The store driving this app
    #[must_use]
    pub const fn store(&self) -> &TodoStore {
        &self.store
    }

    /// A copy of the current state
    #[must_use]
    pub fn state(&self) -> TodoState {
        self.store.state(Clone::clone)
    }

    /// Execute one command, writing any output to `out`
    ///
    /// Failures to load a file are reported on `out` and do not end the
    /// session.
    ///
    /// # Errors
    ///
    /// Returns [`AppError`] if writing to `out` fails or the list cannot be
    /// encoded.
    pub fn handle<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Flow, AppError> {
        match command {
            Command::Quit => return Ok(Flow::Quit),
            Command::Help => writeln!(out, "{HELP}")?,
            Command::List => self.render(out)?,
            Command::Dump => {
                let json = self.store.state(|s| serde_json::to_string_pretty(&s.todos))?;
                writeln!(out, "{json}")?;
            }
            Command::Load(path) => match seed::load_seed(&path) {
                Ok(todos) => {
                    self.store.send(TodoAction::Load { todos });
                    self.render(out)?;
                }
                Err(err) => {
                    tracing::warn!(error = %err, "Load failed");
                    writeln!(out, "error: {err}")?;
                }
            },
            Command::Add(text) => {
                // `add` goes through the input field; put back what was being drafted
                let draft = self.store.state(|s| s.new_todo.clone());
                self.store.send_all(Command::Add(text).into_actions());
                if !draft.is_empty() {
                    self.store.send(TodoAction::SetNewTodo { text: draft });
                }
                self.render(out)?;
            }
            command => {
                self.store.send_all(command.into_actions());
                self.render(out)?;
            }
        }
        Ok(Flow::Continue)
    }

    /// Run the session until `quit` or end of input
    ///
    /// # Errors
    ///
    /// Returns [`AppError`] if reading `input` or writing `out` fails.
    pub fn run<I, W>(&mut self, mut input: I, out: &mut W) -> Result<(), AppError>
    where
        I: BufRead,
        W: Write,
    {
        tracing::info!(todos = self.store.state(TodoState::count), "Session started");
        self.render(out)?;

        let mut line = String::new();
        loop {
            write!(out, "{}", self.prompt)?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                break;
            }

            let command = match Command::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(err) => {
                    tracing::warn!(error = %err, "Rejected command");
                    writeln!(out, "error: {err}")?;
                    continue;
                }
            };

            if self.handle(command, out)? == Flow::Quit {
                break;
            }
        }

        tracing::info!(
            actions = self.store.actions_processed(),
            "Session ended"
        );
        Ok(())
    }

    fn render<W: Write>(&self, out: &mut W) -> Result<(), AppError> {
        let rendered = self.store.state(|s| view::render(s, self.view));
        write!(out, "{rendered}")?;
        Ok(())
    }
}
