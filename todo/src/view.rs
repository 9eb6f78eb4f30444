//! Text rendering of the todo list.
//!
//! Views take the state they draw as an argument; they never reach for it.

use crate::types::{Todo, TodoState};
use std::fmt::Write as _;

/// Title line printed above the list
pub const HEADING: &str = "Todo List";

/// Options controlling what the list view shows
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewOptions {
    /// Render finished todos (otherwise they are summarised in one line)
    pub show_done: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self { show_done: true }
    }
}

/// One list row: `[x] #3 text`
#[must_use]
pub fn render_item(todo: &Todo) -> String {
    let mark = if todo.done { 'x' } else { ' ' };
    format!("[{mark}] #{} {}", todo.id, todo.text)
}

/// The rows of the list, in collection order
#[must_use]
pub fn render_items(todos: &[Todo], options: ViewOptions) -> String {
    let mut out = String::new();
    let mut hidden = 0usize;

    for todo in todos {
        if todo.done && !options.show_done {
            hidden += 1;
            continue;
        }
        let _ = writeln!(out, "  {}", render_item(todo));
    }

    if todos.is_empty() {
        out.push_str("  (no todos)\n");
    } else if hidden > 0 {
        let _ = writeln!(out, "  ({hidden} done hidden)");
    }
    out
}

/// The whole widget: heading, rows and the pending input
#[must_use]
pub fn render(state: &TodoState, options: ViewOptions) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{HEADING}");
    let _ = writeln!(out, "{}", "=".repeat(HEADING.len()));
    out.push_str(&render_items(&state.todos, options));
    if !state.new_todo.is_empty() {
        let _ = writeln!(out, "new: {}", state.new_todo);
    }
    out
}
