//! Pure state transitions over a todo collection.
//!
//! Every function takes the current collection by shared reference and
//! returns a fresh `Vec`; the input and its elements are never touched.
//! Operations aimed at an identifier that is not present return an
//! unchanged copy rather than an error.

use crate::types::{Todo, TodoId};

/// The identifier the next added todo will receive
///
/// One past the largest identifier in use, or [`TodoId::FIRST`] for an
/// empty collection. `None` when `u64::MAX` is already taken.
#[must_use]
pub fn next_id(todos: &[Todo]) -> Option<TodoId> {
    todos
        .iter()
        .map(|todo| todo.id)
        .max()
        .map_or(Some(TodoId::FIRST), TodoId::next)
}

/// Whether a todo with `id` is present
#[must_use]
pub fn contains(todos: &[Todo], id: TodoId) -> bool {
    todos.iter().any(|todo| todo.id == id)
}

/// Append a new unfinished todo with a fresh identifier
///
/// Any text is accepted, including the empty string. If the identifier
/// space is exhausted the collection is returned unchanged.
#[must_use]
pub fn add(todos: &[Todo], text: impl Into<String>) -> Vec<Todo> {
    let Some(id) = next_id(todos) else {
        return todos.to_vec();
    };

    let mut next = Vec::with_capacity(todos.len() + 1);
    next.extend_from_slice(todos);
    next.push(Todo::new(id, text));
    next
}

/// Replace the text of the todo with `id`
#[must_use]
pub fn set_text(todos: &[Todo], id: TodoId, text: &str) -> Vec<Todo> {
    todos
        .iter()
        .map(|todo| {
            if todo.id == id {
                todo.with_text(text)
            } else {
                todo.clone()
            }
        })
        .collect()
}

/// Invert the done flag of the todo with `id`
#[must_use]
pub fn toggle_done(todos: &[Todo], id: TodoId) -> Vec<Todo> {
    todos
        .iter()
        .map(|todo| {
            if todo.id == id {
                todo.toggled()
            } else {
                todo.clone()
            }
        })
        .collect()
}

/// Drop the todo with `id`, keeping the rest in order
#[must_use]
pub fn remove(todos: &[Todo], id: TodoId) -> Vec<Todo> {
    todos.iter().filter(|todo| todo.id != id).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: u64, text: &str, done: bool) -> Todo {
        Todo {
            id: TodoId::new(id),
            text: text.to_string(),
            done,
        }
    }

    #[test]
    fn test_add_to_empty_starts_at_one() {
        assert_eq!(add(&[], "first"), vec![todo(1, "first", false)]);
    }

    #[test]
    fn test_add_toggle_remove_scenario() {
        let start = vec![todo(1, "a", false)];

        let added = add(&start, "b");
        assert_eq!(added, vec![todo(1, "a", false), todo(2, "b", false)]);

        let toggled = toggle_done(&added, TodoId::new(1));
        assert_eq!(toggled, vec![todo(1, "a", true), todo(2, "b", false)]);

        let removed = remove(&toggled, TodoId::new(1));
        assert_eq!(removed, vec![todo(2, "b", false)]);

        // Inputs are untouched
        assert_eq!(start, vec![todo(1, "a", false)]);
        assert_eq!(added, vec![todo(1, "a", false), todo(2, "b", false)]);
    }

    #[test]
    fn test_add_uses_max_not_length() {
        let todos = vec![todo(7, "x", false), todo(3, "y", true)];
        let added = add(&todos, "");
        assert_eq!(added.last(), Some(&todo(8, "", false)));
    }

    #[test]
    fn test_add_after_remove_does_not_reuse_live_ids() {
        let todos = add(&add(&add(&[], "a"), "b"), "c");
        let todos = remove(&todos, TodoId::new(2));
        let todos = add(&todos, "d");
        let ids: Vec<u64> = todos.iter().map(|t| t.id.get()).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn test_add_with_exhausted_ids_is_noop() {
        let todos = vec![todo(u64::MAX, "last", false)];
        assert_eq!(next_id(&todos), None);
        assert_eq!(add(&todos, "overflow"), todos);
    }

    #[test]
    fn test_set_text_only_touches_match() {
        let todos = vec![todo(1, "a", true), todo(2, "b", false)];
        assert_eq!(
            set_text(&todos, TodoId::new(1), "changed"),
            vec![todo(1, "changed", true), todo(2, "b", false)]
        );
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let todos = vec![todo(1, "a", false)];
        let missing = TodoId::new(9);

        assert!(!contains(&todos, missing));
        assert_eq!(set_text(&todos, missing, "z"), todos);
        assert_eq!(toggle_done(&todos, missing), todos);
        assert_eq!(remove(&todos, missing), todos);
    }

    #[test]
    fn test_double_toggle_restores() {
        let todos = vec![todo(1, "a", false), todo(2, "b", true)];
        let id = TodoId::new(2);
        assert_eq!(toggle_done(&toggle_done(&todos, id), id), todos);
    }
}
