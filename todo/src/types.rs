//! Domain types for the todo list.
//!
//! A todo list is an ordered collection of [`Todo`] records. Records are
//! values: changing one means building a new record and a new collection
//! (see [`crate::collection`]).

use serde::{Deserialize, Serialize};

/// Unique identifier for a todo item
///
/// Identifiers are positive and unique within a collection. New ones are
/// allocated as one past the largest identifier in use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(u64);

impl TodoId {
    /// Identifier given to the first todo of an empty collection
    pub const FIRST: Self = Self(1);

    /// Creates a `TodoId` from a raw value
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw value
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// The identifier after this one, or `None` once `u64::MAX` is reached
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(id) => Some(Self(id)),
            None => None,
        }
    }
}

impl From<u64> for TodoId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier
    pub id: TodoId,
    /// What needs doing
    pub text: String,
    /// Whether the todo is finished
    pub done: bool,
}

impl Todo {
    /// Creates a new, unfinished todo
    #[must_use]
    pub fn new(id: TodoId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            done: false,
        }
    }

    /// A copy of this todo with its text replaced
    #[must_use]
    pub fn with_text(&self, text: &str) -> Self {
        Self {
            id: self.id,
            text: text.to_owned(),
            done: self.done,
        }
    }

    /// A copy of this todo with `done` inverted
    #[must_use]
    pub fn toggled(&self) -> Self {
        Self {
            id: self.id,
            text: self.text.clone(),
            done: !self.done,
        }
    }
}

/// State held by the presentation layer
///
/// The list itself plus the text currently typed into the "new todo" input.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoState {
    /// All todos in insertion order
    pub todos: Vec<Todo>,
    /// Pending text for the next todo to add
    pub new_todo: String,
}

impl TodoState {
    /// Creates a new empty state
    #[must_use]
    pub const fn new() -> Self {
        Self {
            todos: Vec::new(),
            new_todo: String::new(),
        }
    }

    /// Creates a state holding `todos` and no pending input
    #[must_use]
    pub const fn with_todos(todos: Vec<Todo>) -> Self {
        Self {
            todos,
            new_todo: String::new(),
        }
    }

    /// Returns the number of todos
    #[must_use]
    pub fn count(&self) -> usize {
        self.todos.len()
    }

    /// Returns the number of finished todos
    #[must_use]
    pub fn done_count(&self) -> usize {
        self.todos.iter().filter(|t| t.done).count()
    }

    /// Returns a todo by ID
    #[must_use]
    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }
}

/// Everything the presentation layer can ask of the todo list
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TodoAction {
    /// Replace the pending "new todo" text
    SetNewTodo {
        /// Text typed so far
        text: String,
    },

    /// Add the pending text as a new todo and clear the input
    AddTodo,

    /// Replace the text of a todo
    UpdateTodo {
        /// Todo to edit
        id: TodoId,
        /// Replacement text
        text: String,
    },

    /// Flip the done flag of a todo
    ToggleTodo {
        /// Todo to toggle
        id: TodoId,
    },

    /// Delete a todo
    RemoveTodo {
        /// Todo to delete
        id: TodoId,
    },

    /// Replace the whole list, e.g. when seeding from a file
    Load {
        /// The new list
        todos: Vec<Todo>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_id_display() {
        assert_eq!(TodoId::new(42).to_string(), "42");
    }

    #[test]
    fn todo_id_next_stops_at_max() {
        assert_eq!(TodoId::FIRST.next(), Some(TodoId::new(2)));
        assert_eq!(TodoId::new(u64::MAX).next(), None);
    }

    #[test]
    fn todo_new_is_not_done() {
        let todo = Todo::new(TodoId::FIRST, "Buy milk");
        assert_eq!(todo.id, TodoId::FIRST);
        assert_eq!(todo.text, "Buy milk");
        assert!(!todo.done);
    }

    #[test]
    fn todo_copies_leave_original_alone() {
        let todo = Todo::new(TodoId::FIRST, "a");

        let edited = todo.with_text("b");
        let toggled = todo.toggled();

        assert_eq!(todo, Todo::new(TodoId::FIRST, "a"));
        assert_eq!(edited.text, "b");
        assert!(!edited.done);
        assert!(toggled.done);
        assert_eq!(toggled.text, "a");
    }

    #[test]
    fn todo_json_shape() {
        let todo = Todo::new(TodoId::new(3), "x");
        let json = serde_json::to_value(&todo).unwrap_or_default();
        assert_eq!(json, serde_json::json!({"id": 3, "text": "x", "done": false}));
    }

    #[test]
    fn todo_state_counts() {
        let mut state = TodoState::new();
        assert_eq!(state.count(), 0);
        assert_eq!(state.done_count(), 0);

        state.todos.push(Todo::new(TodoId::new(1), "one"));
        state.todos.push(Todo::new(TodoId::new(2), "two").toggled());

        assert_eq!(state.count(), 2);
        assert_eq!(state.done_count(), 1);
        assert_eq!(state.get(TodoId::new(2)).map(|t| t.text.as_str()), Some("two"));
        assert!(state.get(TodoId::new(3)).is_none());
    }
}
