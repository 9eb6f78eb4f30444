//! # Composable Todo Core
//!
//! Core abstraction for the Composable Todo architecture.
//!
//! ## Core Concepts
//!
//! - **State**: Domain state owned by the presentation layer
//! - **Action**: Every input that can change state
//! - **Reducer**: Pure function `(State, Action) → State`
//!
//! The runtime crate wraps a reducer in a `Store`, which owns the single
//! state value and serializes every action through the reducer.
//!
//! ## Example
//!
//! ```
//! use composable_todo_core::reducer::Reducer;
//!
//! #[derive(Clone, Debug, Default)]
//! struct CounterState {
//!     count: i64,
//! }
//!
//! enum CounterAction {
//!     Increment,
//!     Reset,
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!
//!     fn reduce(&self, state: &mut CounterState, action: CounterAction) {
//!         match action {
//!             CounterAction::Increment => state.count += 1,
//!             CounterAction::Reset => state.count = 0,
//!         }
//!     }
//! }
//!
//! let mut state = CounterState::default();
//! CounterReducer.reduce(&mut state, CounterAction::Increment);
//! assert_eq!(state.count, 1);
//! ```

/// Reducer module - The core trait for business logic
///
/// Reducers are deterministic: `(State, Action) → State`. They perform no
/// I/O and never suspend, so the runtime can call them synchronously.
pub mod reducer {
    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// Reduce an action into a state change
        ///
        /// Implementations compute the next value from the current one and
        /// store it back into `state`. Actions that do not apply to the
        /// current state leave it unchanged.
        fn reduce(&self, state: &mut Self::State, action: Self::Action);

        /// Reduce a sequence of actions in order
        fn reduce_all<I>(&self, state: &mut Self::State, actions: I)
        where
            I: IntoIterator<Item = Self::Action>,
        {
            for action in actions {
                self.reduce(state, action);
            }
        }
    }

    impl<R: Reducer + ?Sized> Reducer for &R {
        type State = R::State;
        type Action = R::Action;

        fn reduce(&self, state: &mut Self::State, action: Self::Action) {
            (**self).reduce(state, action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::reducer::Reducer;

    struct Append;

    impl Reducer for Append {
        type State = Vec<u8>;
        type Action = u8;

        fn reduce(&self, state: &mut Vec<u8>, action: u8) {
            state.push(action);
        }
    }

    #[test]
    fn reduce_all_applies_in_order() {
        let mut state = Vec::new();
        Append.reduce_all(&mut state, [3, 1, 2]);
        assert_eq!(state, vec![3, 1, 2]);
    }

    #[test]
    fn reference_is_a_reducer() {
        let reducer = &Append;
        let mut state = vec![1];
        reducer.reduce(&mut state, 9);
        assert_eq!(state, vec![1, 9]);
    }
}
