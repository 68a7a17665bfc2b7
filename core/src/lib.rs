//! # Unistate Core
//!
//! Core traits and types for unidirectional state containers.
//!
//! This crate provides the fundamental abstractions for building applications
//! around a single state tree that only changes through dispatched actions.
//!
//! ## Core Concepts
//!
//! - **State**: Owned, cloneable domain data for a feature
//! - **Action**: A closed set of inputs describing intended state transitions
//! - **Reducer**: Pure function `(State, Action, Environment) → State`
//! - **Environment**: Injected dependencies (id generation) instead of ambient globals
//!
//! ## Architecture Principles
//!
//! - Unidirectional Data Flow
//! - Immutable snapshots, replaced wholesale on every change
//! - Dependency Injection via Environment
//! - Composition of small reducers into one root reducer
//!
//! ## Example
//!
//! ```
//! use unistate_core::reducer::Reducer;
//!
//! #[derive(Clone, Debug, Default)]
//! struct CounterState {
//!     value: i64,
//! }
//!
//! enum CounterAction {
//!     Increment,
//!     Decrement,
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!     type Environment = ();
//!
//!     fn reduce(&self, state: &mut CounterState, action: CounterAction, _env: &()) {
//!         match action {
//!             CounterAction::Increment => state.value += 1,
//!             CounterAction::Decrement => state.value -= 1,
//!         }
//!     }
//! }
//!
//! let mut state = CounterState::default();
//! CounterReducer.reduce(&mut state, CounterAction::Increment, &());
//! assert_eq!(state.value, 1);
//! ```

/// Reducer composition utilities (`combine_reducers`, `scope_reducer`)
pub mod composition;

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → State`
///
/// They contain all business logic and are deterministic and testable.
pub mod reducer {
    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    ///
    /// The reducer works on a private copy of the state handed to it by the
    /// store. Snapshots already handed out to readers are never touched.
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for TodosReducer {
    ///     type State = TodosState;
    ///     type Action = Action;
    ///     type Environment = TodosEnvironment;
    ///
    ///     fn reduce(&self, state: &mut TodosState, action: Action, env: &TodosEnvironment) {
    ///         match action {
    ///             Action::ChangeInput(text) => state.input = text,
    ///             _ => {}
    ///         }
    ///     }
    /// }
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into the next state
        ///
        /// Actions the reducer does not handle must leave `state` untouched.
        ///
        /// # Arguments
        ///
        /// - `state`: Working copy of the current state, updated in place
        /// - `action`: The action to process
        /// - `env`: Reference to injected dependencies
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        );
    }
}

/// Environment module - Dependency injection traits
///
/// All process-wide mutable resources are abstracted behind traits and
/// injected via the Environment parameter, so each store (and each test)
/// owns its own instance.
pub mod environment {
    use std::sync::atomic::{AtomicI64, Ordering};

    /// `IdGenerator` trait - abstracts identifier allocation for testability
    ///
    /// # Examples
    ///
    /// ```
    /// use unistate_core::environment::{IdGenerator, SequentialIdGenerator};
    ///
    /// let ids = SequentialIdGenerator::new();
    /// assert_eq!(ids.next_id(), 0);
    /// assert_eq!(ids.next_id(), 1);
    /// ```
    pub trait IdGenerator: Send + Sync {
        /// Allocate the next identifier
        ///
        /// Every call advances the generator; identifiers are never handed out twice.
        /// Generated ids are never negative.
        fn next_id(&self) -> i64;
    }

    /// Monotonic id generator starting at zero
    ///
    /// The counter advances by exactly one per call and has no reset
    /// operation. Overflow is not handled: call volume is assumed to stay far
    /// below `i64::MAX`.
    #[derive(Debug, Default)]
    pub struct SequentialIdGenerator {
        next: AtomicI64,
    }

    impl SequentialIdGenerator {
        /// Create a generator whose first id is 0
        #[must_use]
        pub const fn new() -> Self {
            Self::starting_at(0)
        }

        /// Create a generator whose first id is `first`
        #[must_use]
        pub const fn starting_at(first: i64) -> Self {
            Self {
                next: AtomicI64::new(first),
            }
        }

        /// The id the next call to [`IdGenerator::next_id`] will return
        #[must_use]
        pub fn peek(&self) -> i64 {
            self.next.load(Ordering::Acquire)
        }
    }

    impl IdGenerator for SequentialIdGenerator {
        fn next_id(&self) -> i64 {
            self.next.fetch_add(1, Ordering::AcqRel)
        }
    }
}
