//! # Composable Todo Runtime
//!
//! Runtime implementation for the Composable Todo architecture.
//!
//! This crate provides the [`Store`]: the single owner of application
//! state. It feeds every action through the reducer, one at a time, and
//! notifies listeners after each change.
//!
//! ## Example
//!
//! ```ignore
//! use composable_todo_runtime::Store;
//!
//! let mut store = Store::new(initial_state, my_reducer);
//!
//! // Send an action
//! store.send(Action::DoSomething);
//!
//! // Read state
//! let value = store.state(|s| s.some_field);
//! ```

use composable_todo_core::reducer::Reducer;

/// Metric names emitted by the store
pub mod metrics {
    /// Counter incremented once per action sent to a store
    pub const ACTIONS_TOTAL: &str = "store.actions.total";

    /// Histogram of reducer execution time in seconds
    pub const REDUCER_DURATION_SECONDS: &str = "store.reducer.duration_seconds";

    /// Register descriptions for the store metrics with the installed recorder
    pub fn describe() {
        metrics::describe_counter!(ACTIONS_TOTAL, "Total number of actions sent to stores");
        metrics::describe_histogram!(
            REDUCER_DURATION_SECONDS,
            metrics::Unit::Seconds,
            "Time spent inside reducers"
        );
    }
}

/// Store module - owns state and drives the reducer
pub mod store {
    use super::{Reducer, metrics as names};
    use std::marker::PhantomData;

    /// Callback invoked with the new state after each action
    type Listener<S> = Box<dyn FnMut(&S)>;

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (owned outright, there is exactly one copy)
    /// 2. Reducer (business logic)
    /// 3. Listeners (notified after every action)
    ///
    /// Dispatch takes `&mut self`: the owner serializes every action, so
    /// no lock is needed around the state.
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `R`: Reducer implementation
    pub struct Store<S, A, R>
    where
        R: Reducer<State = S, Action = A>,
    {
        state: S,
        reducer: R,
        listeners: Vec<Listener<S>>,
        actions_processed: u64,
        _action: PhantomData<fn(A)>,
    }

    impl<S, A, R> Store<S, A, R>
    where
        R: Reducer<State = S, Action = A>,
    {
        /// Create a new store with initial state and reducer
        #[must_use]
        pub fn new(initial_state: S, reducer: R) -> Self {
            Self {
                state: initial_state,
                reducer,
                listeners: Vec::new(),
                actions_processed: 0,
                _action: PhantomData,
            }
        }

        /// Send an action through the reducer
        ///
        /// The reducer runs to completion before this returns; listeners
        /// are then called in registration order with the new state.
        #[tracing::instrument(skip(self, action), name = "store_send")]
        pub fn send(&mut self, action: A) {
            tracing::trace!("Processing action");
            metrics::counter!(names::ACTIONS_TOTAL).increment(1);

            let start = std::time::Instant::now();
            self.reducer.reduce(&mut self.state, action);
            metrics::histogram!(names::REDUCER_DURATION_SECONDS)
                .record(start.elapsed().as_secs_f64());

            self.actions_processed += 1;

            for listener in &mut self.listeners {
                listener(&self.state);
            }
            tracing::trace!(
                listeners = self.listeners.len(),
                "Action processing completed"
            );
        }

        /// Send several actions in order
        pub fn send_all<I>(&mut self, actions: I)
        where
            I: IntoIterator<Item = A>,
        {
            for action in actions {
                self.send(action);
            }
        }

        /// Read current state via a closure
        ///
        /// ```ignore
        /// let count = store.state(|s| s.todos.len());
        /// ```
        pub fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            f(&self.state)
        }

        /// Register a listener called with the state after every action
        pub fn subscribe<F>(&mut self, listener: F)
        where
            F: FnMut(&S) + 'static,
        {
            self.listeners.push(Box::new(listener));
        }

        /// Number of actions this store has processed
        #[must_use]
        pub const fn actions_processed(&self) -> u64 {
            self.actions_processed
        }

        /// Consume the store, returning the final state
        #[must_use]
        pub fn into_state(self) -> S {
            self.state
        }
    }

    impl<S, A, R> std::fmt::Debug for Store<S, A, R>
    where
        S: std::fmt::Debug,
        R: Reducer<State = S, Action = A>,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("Store")
                .field("state", &self.state)
                .field("listeners", &self.listeners.len())
                .field("actions_processed", &self.actions_processed)
                .finish_non_exhaustive()
        }
    }
}

pub use store::Store;
