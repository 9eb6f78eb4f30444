//! # Composable Todo Testing
//!
//! Testing utilities and helpers for the Composable Todo architecture.
//!
//! This crate provides:
//! - [`ReducerTest`]: Given-When-Then builder for reducers
//! - [`StateRecorder`]: captures every state a store passes through
//! - Assertion helpers for collections held in state
//! - Property-based testing strategies
//!
//! ## Example
//!
//! ```ignore
//! use composable_todo_testing::StateRecorder;
//! use composable_todo_runtime::Store;
//!
//! let mut store = Store::new(TodoState::new(), TodoReducer::new());
//! let recorder = StateRecorder::attach(&mut store);
//!
//! store.send(TodoAction::ToggleTodo { id });
//!
//! assert_eq!(recorder.len(), 1);
//! ```

use composable_todo_core::reducer::Reducer;
use composable_todo_runtime::Store;
use std::cell::RefCell;
use std::rc::Rc;


pub use reducer_test::ReducerTest;

/// Records a clone of the store state after every action
///
/// Cloning the recorder shares the same underlying history.
#[derive(Debug)]
pub struct StateRecorder<S> {
    history: Rc<RefCell<Vec<S>>>,
}

impl<S> Clone for StateRecorder<S> {
    fn clone(&self) -> Self {
        Self {
            history: Rc::clone(&self.history),
        }
    }
}

impl<S: Clone + 'static> StateRecorder<S> {
    /// Subscribe a new recorder to `store`
    pub fn attach<A, R>(store: &mut Store<S, A, R>) -> Self
    where
        R: Reducer<State = S, Action = A>,
    {
        let recorder = Self {
            history: Rc::new(RefCell::new(Vec::new())),
        };
        let sink = Rc::clone(&recorder.history);
        store.subscribe(move |state: &S| sink.borrow_mut().push(state.clone()));
        recorder
    }

    /// All recorded states, oldest first
    #[must_use]
    pub fn snapshots(&self) -> Vec<S> {
        self.history.borrow().clone()
    }

    /// The most recently recorded state
    #[must_use]
    pub fn last(&self) -> Option<S> {
        self.history.borrow().last().cloned()
    }

    /// Number of recorded states
    #[must_use]
    pub fn len(&self) -> usize {
        self.history.borrow().len()
    }

    /// Whether nothing has been recorded yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.history.borrow().is_empty()
    }
}

/// Helper assertions for collections held in state
pub mod assertions {
    use std::collections::HashSet;
    use std::fmt::Debug;
    use std::hash::Hash;

    /// Assert that no two items share a key
    ///
    /// # Panics
    ///
    /// Panics naming the first repeated key.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_unique_by<T, K, F>(items: &[T], key: F)
    where
        K: Eq + Hash + Debug,
        F: Fn(&T) -> K,
    {
        let mut seen = HashSet::with_capacity(items.len());
        for item in items {
            let k = key(item);
            if seen.contains(&k) {
                panic!("Expected unique keys, but {k:?} appears more than once");
            }
            seen.insert(k);
        }
    }

    /// Assert that `after` is `before` with some items removed, order kept
    ///
    /// # Panics
    ///
    /// Panics if `after` has an item not found, in order, in `before`.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_ordered_subset<T: PartialEq + Debug>(before: &[T], after: &[T]) {
        let mut remaining = before.iter();
        for item in after {
            assert!(
                remaining.any(|candidate| candidate == item),
                "Expected {item:?} to appear in order within {before:?}"
            );
        }
    }
}

/// Property-based testing utilities using proptest.
pub mod properties {
    use proptest::prelude::*;

    /// Distinct positive identifiers in a random order
    ///
    /// Produces up to `max_len` values drawn from `1..=max_id`, no two
    /// equal, shuffled so that insertion order differs from numeric order.
    pub fn unique_ids(max_id: u64, max_len: usize) -> impl Strategy<Value = Vec<u64>> {
        prop::collection::btree_set(1..=max_id.max(1), 0..=max_len)
            .prop_map(|ids| ids.into_iter().collect::<Vec<_>>())
            .prop_shuffle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    struct Push;

    impl Reducer for Push {
        type State = Vec<u8>;
        type Action = u8;

        fn reduce(&self, state: &mut Vec<u8>, action: u8) {
            state.push(action);
        }
    }

    #[test]
    fn test_recorder_captures_each_state() {
        let mut store = Store::new(Vec::new(), Push);
        let recorder = StateRecorder::attach(&mut store);
        assert!(recorder.is_empty());

        store.send(1);
        store.send(2);

        assert_eq!(recorder.len(), 2);
        assert_eq!(recorder.snapshots(), vec![vec![1], vec![1, 2]]);
        assert_eq!(recorder.last(), Some(vec![1, 2]));
    }

    #[test]
    fn test_assert_unique_by_accepts_distinct() {
        assertions::assert_unique_by(&[(1, 'a'), (2, 'a')], |pair| pair.0);
        assertions::assert_unique_by::<u8, u8, _>(&[], |x| *x);
    }

    #[test]
    #[should_panic(expected = "appears more than once")]
    fn test_assert_unique_by_rejects_repeat() {
        assertions::assert_unique_by(&[(1, 'a'), (1, 'b')], |pair| pair.0);
    }

    #[test]
    fn test_assert_ordered_subset() {
        assertions::assert_ordered_subset(&[1, 2, 3, 4], &[1, 3, 4]);
        assertions::assert_ordered_subset(&[1, 2], &[]);
    }

    #[test]
    #[should_panic(expected = "to appear in order")]
    fn test_assert_ordered_subset_rejects_reorder() {
        assertions::assert_ordered_subset(&[1, 2, 3], &[3, 1]);
    }

    proptest! {
        #[test]
        fn unique_ids_are_distinct_and_positive(ids in properties::unique_ids(50, 20)) {
            let distinct: HashSet<_> = ids.iter().copied().collect();
            prop_assert_eq!(distinct.len(), ids.len());
            prop_assert!(ids.iter().all(|&id| (1..=50).contains(&id)));
            prop_assert!(ids.len() <= 20);
        }
    }
}
