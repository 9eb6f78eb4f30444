//! Seeding the list from JSON.
//!
//! A seed is a JSON array of todos, e.g.
//! `[{"id": 1, "text": "Buy milk", "done": false}]`. Seeds come from
//! outside the collection functions, so they are checked for the
//! identifier invariants before being handed to the reducer.

use crate::error::SeedError;
use crate::types::Todo;
use std::collections::HashSet;
use std::path::Path;

/// Parse and validate a seed from a JSON string
///
/// # Errors
///
/// Returns [`SeedError::Json`] for malformed input, [`SeedError::ZeroId`]
/// if any id is 0 and [`SeedError::DuplicateId`] if two todos share an id.
pub fn parse_seed(json: &str) -> Result<Vec<Todo>, SeedError> {
    let todos: Vec<Todo> = serde_json::from_str(json)?;
    validate(&todos)?;
    Ok(todos)
}

/// Read, parse and validate a seed file
///
/// # Errors
///
/// Returns [`SeedError::Io`] if the file cannot be read, otherwise the
/// errors of [`parse_seed`].
pub fn load_seed(path: &Path) -> Result<Vec<Todo>, SeedError> {
    let json = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let todos = parse_seed(&json)?;
    tracing::info!(path = %path.display(), count = todos.len(), "Read seed file");
    Ok(todos)
}

fn validate(todos: &[Todo]) -> Result<(), SeedError> {
    let mut seen = HashSet::with_capacity(todos.len());
    for todo in todos {
        if todo.id.get() == 0 {
            return Err(SeedError::ZeroId);
        }
        if !seen.insert(todo.id) {
            return Err(SeedError::DuplicateId(todo.id));
        }
    }
    Ok(())
}
