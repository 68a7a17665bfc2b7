//! # Unistate Testing
//!
//! Testing utilities and helpers for unidirectional state containers.
//!
//! This crate provides:
//! - Mock implementations of Environment traits
//! - A Given-When-Then harness for reducers
//! - Property-based testing strategies
//! - A subscriber probe for store notification tests
//!
//! ## Example
//!
//! ```ignore
//! use unistate_testing::{ReducerTest, test_ids};
//!
//! ReducerTest::new(TodosReducer::new())
//!     .with_env(TodosEnvironment::new(test_ids()))
//!     .given_state(TodosState::default())
//!     .when_action(Action::create("buy milk"))
//!     .then_state(|state| assert_eq!(state.len(), 1))
//!     .run();
//! ```

use std::sync::Arc;
use unistate_core::environment::{IdGenerator, SequentialIdGenerator};

mod reducer_test;

pub use reducer_test::ReducerTest;

/// Mock implementations of Environment traits
pub mod mocks {
    use super::{Arc, IdGenerator, SequentialIdGenerator};
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Mutex, PoisonError};

    /// Fresh id generator for one test case, starting at 0
    ///
    /// Every test builds its own generator, so ids never leak between cases.
    ///
    /// # Example
    ///
    /// ```
    /// use unistate_core::environment::IdGenerator;
    /// use unistate_testing::test_ids;
    ///
    /// let ids = test_ids();
    /// assert_eq!(ids.next_id(), 0);
    /// ```
    #[must_use]
    pub fn test_ids() -> Arc<SequentialIdGenerator> {
        Arc::new(SequentialIdGenerator::new())
    }

    /// Id generator that replays a fixed script of ids
    ///
    /// Useful for building states that a sequential generator never would,
    /// such as two items sharing an id. Once the script is exhausted it
    /// keeps counting up from one past the largest scripted id.
    ///
    /// # Example
    ///
    /// ```
    /// use unistate_core::environment::IdGenerator;
    /// use unistate_testing::mocks::ScriptedIdGenerator;
    ///
    /// let ids = ScriptedIdGenerator::new([7, 7]);
    /// assert_eq!(ids.next_id(), 7);
    /// assert_eq!(ids.next_id(), 7);
    /// assert_eq!(ids.next_id(), 8);
    /// ```
    #[derive(Debug)]
    pub struct ScriptedIdGenerator {
        script: Mutex<VecDeque<i64>>,
        fallback: SequentialIdGenerator,
    }

    impl ScriptedIdGenerator {
        /// Create a generator that hands out `ids` in order
        #[must_use]
        pub fn new(ids: impl IntoIterator<Item = i64>) -> Self {
            let script: VecDeque<i64> = ids.into_iter().collect();
            let next = script.iter().max().map_or(0, |max| max.saturating_add(1));
            Self {
                script: Mutex::new(script),
                fallback: SequentialIdGenerator::starting_at(next),
            }
        }
    }

    impl IdGenerator for ScriptedIdGenerator {
        fn next_id(&self) -> i64 {
            self.script
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .pop_front()
                .unwrap_or_else(|| self.fallback.next_id())
        }
    }

    /// Counts how many times a store notified it
    ///
    /// # Example
    ///
    /// ```
    /// use unistate_testing::SubscriberProbe;
    ///
    /// let probe = SubscriberProbe::new();
    /// let callback = probe.callback();
    /// callback();
    /// callback();
    /// assert_eq!(probe.calls(), 2);
    /// ```
    #[derive(Debug, Clone, Default)]
    pub struct SubscriberProbe {
        calls: Arc<AtomicUsize>,
    }

    impl SubscriberProbe {
        /// Create a probe with zero recorded calls
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Callback to register with `Store::subscribe`
        #[must_use]
        pub fn callback(&self) -> impl Fn() + Send + Sync + 'static {
            let calls = Arc::clone(&self.calls);
            move || {
                calls.fetch_add(1, Ordering::SeqCst);
            }
        }

        /// Number of notifications received so far
        #[must_use]
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }
}

/// Property-based testing utilities using proptest.
pub mod properties {
    use proptest::prelude::*;

    /// Draft text as a user might type it, including the empty string
    pub fn draft_text() -> impl Strategy<Value = String> {
        prop_oneof![
            1 => Just(String::new()),
            8 => "[a-zA-Z0-9 ]{1,24}",
        ]
    }

    /// Ids in a small range, so generated lookups hit existing items often
    ///
    /// Includes `-1`, an id that no generated item ever has.
    pub fn small_id(max: i64) -> impl Strategy<Value = i64> {
        -1..=max
    }
}

/// Install a test-friendly tracing subscriber
///
/// Safe to call from many tests; only the first call installs anything.
/// Output is captured by the test harness and shown for failing tests.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_test_writer()
        .try_init();
}

// Re-export commonly used items
pub use mocks::{ScriptedIdGenerator, SubscriberProbe, test_ids};
