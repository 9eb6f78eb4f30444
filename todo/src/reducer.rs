//! Reducer logic for the todo list.
//!
//! Each action is answered by calling the matching pure function in
//! [`crate::collection`] and storing its return value as the new list.

use crate::collection;
use crate::types::{TodoAction, TodoId, TodoState};
use composable_todo_core::reducer::Reducer;

/// Reducer for the todo list
#[derive(Clone, Copy, Debug, Default)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Logs id-targeted actions that will fall through as no-ops
    fn note_unknown(state: &TodoState, id: TodoId, action: &'static str) {
        if !collection::contains(&state.todos, id) {
            tracing::debug!(%id, action, "No todo with this id, leaving list unchanged");
        }
    }
}

impl Reducer for TodoReducer {
    type State = TodoState;
    type Action = TodoAction;

    fn reduce(&self, state: &mut Self::State, action: Self::Action) {
        match action {
            TodoAction::SetNewTodo { text } => {
                state.new_todo = text;
            }

            TodoAction::AddTodo => {
                let Some(id) = collection::next_id(&state.todos) else {
                    tracing::warn!("Todo identifiers exhausted, keeping pending text");
                    return;
                };
                let text = std::mem::take(&mut state.new_todo);
                state.todos = collection::add(&state.todos, text);
                tracing::debug!(%id, count = state.todos.len(), "Added todo");
            }

            TodoAction::UpdateTodo { id, text } => {
                Self::note_unknown(state, id, "update");
                state.todos = collection::set_text(&state.todos, id, &text);
            }

            TodoAction::ToggleTodo { id } => {
                Self::note_unknown(state, id, "toggle");
                state.todos = collection::toggle_done(&state.todos, id);
            }

            TodoAction::RemoveTodo { id } => {
                Self::note_unknown(state, id, "remove");
                state.todos = collection::remove(&state.todos, id);
            }

            TodoAction::Load { todos } => {
                tracing::info!(count = todos.len(), "Loaded todos");
                state.todos = todos;
            }
        }
    }
}
