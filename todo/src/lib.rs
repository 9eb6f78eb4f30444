//! Todo list built on the Composable Todo architecture.
//!
//! - [`collection`]: pure transitions over the list (add, edit, toggle, remove)
//! - [`reducer`]: maps [`TodoAction`]s onto those transitions
//! - [`app`]: terminal front end owning the store, with [`command`] parsing
//!   and [`view`] rendering
//!
//! # Quick Start
//!
//! ```
//! use composable_todo_runtime::Store;
//! use todo::{TodoAction, TodoId, TodoReducer, TodoState};
//!
//! let mut store = Store::new(TodoState::new(), TodoReducer::new());
//!
//! store.send(TodoAction::SetNewTodo { text: "Buy milk".to_string() });
//! store.send(TodoAction::AddTodo);
//! store.send(TodoAction::ToggleTodo { id: TodoId::FIRST });
//!
//! let state = store.state(Clone::clone);
//! assert_eq!(state.count(), 1);
//! assert_eq!(state.done_count(), 1);
//! ```

pub mod app;
pub mod collection;
pub mod command;
pub mod config;
pub mod error;
pub mod reducer;
pub mod seed;
pub mod types;
pub mod view;

// Re-export commonly used types
pub use app::{App, Flow, TodoStore};
pub use command::Command;
pub use config::Config;
pub use error::{AppError, CommandError, ConfigError, SeedError};
pub use reducer::TodoReducer;
pub use types::{Todo, TodoAction, TodoId, TodoState};
pub use view::ViewOptions;
