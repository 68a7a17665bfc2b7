//! Reducer composition utilities
//!
//! This module provides utilities for composing reducers in various ways:
//! - **`combine_reducers`**: Run multiple reducers on the same state/action
//! - **`scope_reducer`**: Focus a reducer on a subset of state and environment
//!
//! Together they build a root reducer out of feature reducers: each feature
//! reducer is scoped to its own slice of the root state, and the scoped
//! reducers are combined so every action reaches every slice.
//!
//! # Examples
//!
//! ```
//! use unistate_core::composition::{combine_reducers, scope_reducer};
//! use unistate_core::reducer::Reducer;
//!
//! #[derive(Clone)]
//! enum AppAction {
//!     Increment,
//!     Rename(String),
//! }
//!
//! #[derive(Default)]
//! struct Count(i64);
//!
//! #[derive(Default)]
//! struct Name(String);
//!
//! #[derive(Default)]
//! struct AppState {
//!     count: Count,
//!     name: Name,
//! }
//!
//! struct CountReducer;
//! struct NameReducer;
//!
//! impl Reducer for CountReducer {
//!     type State = Count;
//!     type Action = AppAction;
//!     type Environment = ();
//!
//!     fn reduce(&self, state: &mut Count, action: AppAction, _env: &()) {
//!         if let AppAction::Increment = action {
//!             state.0 += 1;
//!         }
//!     }
//! }
//!
//! impl Reducer for NameReducer {
//!     type State = Name;
//!     type Action = AppAction;
//!     type Environment = ();
//!
//!     fn reduce(&self, state: &mut Name, action: AppAction, _env: &()) {
//!         if let AppAction::Rename(name) = action {
//!             state.0 = name;
//!         }
//!     }
//! }
//!
//! let root = combine_reducers(vec![
//!     Box::new(scope_reducer(CountReducer, |s: &mut AppState| &mut s.count, |e: &()| e)),
//!     Box::new(scope_reducer(NameReducer, |s: &mut AppState| &mut s.name, |e: &()| e)),
//! ]);
//!
//! let mut state = AppState::default();
//! root.reduce(&mut state, AppAction::Increment, &());
//! root.reduce(&mut state, AppAction::Rename("lucas".to_string()), &());
//! assert_eq!(state.count.0, 1);
//! assert_eq!(state.name.0, "lucas");
//! ```

use crate::reducer::Reducer;
use std::marker::PhantomData;

/// Boxed reducer trait object accepted by [`combine_reducers`]
pub type BoxedReducer<S, A, E> = Box<dyn Reducer<State = S, Action = A, Environment = E> + Send + Sync>;

/// Combines multiple reducers that operate on the same state and action types.
///
/// Each reducer is run in sequence with its own clone of the action. There is
/// no coupling between them: an action that means nothing to one reducer is a
/// no-op there.
///
/// # Type Parameters
///
/// - `S`: The state type
/// - `A`: The action type
/// - `E`: The environment type
#[must_use]
pub fn combine_reducers<S, A, E>(reducers: Vec<BoxedReducer<S, A, E>>) -> CombinedReducer<S, A, E>
where
    A: Clone,
{
    CombinedReducer { reducers }
}

/// A combined reducer that runs multiple reducers in sequence.
///
/// Created by [`combine_reducers`].
pub struct CombinedReducer<S, A, E> {
    reducers: Vec<BoxedReducer<S, A, E>>,
}

impl<S, A, E> CombinedReducer<S, A, E> {
    /// Number of reducers being combined
    #[must_use]
    pub fn len(&self) -> usize {
        self.reducers.len()
    }

    /// Whether no reducers are combined
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reducers.is_empty()
    }
}

impl<S, A, E> std::fmt::Debug for CombinedReducer<S, A, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CombinedReducer")
            .field("reducers", &self.reducers.len())
            .finish()
    }
}

impl<S, A, E> Reducer for CombinedReducer<S, A, E>
where
    A: Clone,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(&self, state: &mut Self::State, action: Self::Action, env: &Self::Environment) {
        for reducer in &self.reducers {
            reducer.reduce(state, action.clone(), env);
        }
    }
}

/// Scopes a reducer to operate on a subset of a larger state.
///
/// This allows you to reuse reducers designed for smaller state types
/// within a larger application state. The environment is narrowed the same
/// way, so a child reducer only sees the dependencies it declares.
///
/// # Type Parameters
///
/// - `S`: The parent state type
/// - `SubS`: The child state type (field of `S`)
/// - `E`: The parent environment type
/// - `SubE`: The child environment type (part of `E`)
/// - `R`: The child reducer
pub fn scope_reducer<S, SubS, A, E, SubE, R>(
    reducer: R,
    state_lens: fn(&mut S) -> &mut SubS,
    env_lens: fn(&E) -> &SubE,
) -> ScopedReducer<S, SubS, A, E, SubE, R>
where
    R: Reducer<State = SubS, Action = A, Environment = SubE>,
{
    ScopedReducer {
        reducer,
        state_lens,
        env_lens,
        _action: PhantomData,
    }
}

/// A scoped reducer that operates on a subset of state.
///
/// Created by [`scope_reducer`].
pub struct ScopedReducer<S, SubS, A, E, SubE, R>
where
    R: Reducer<State = SubS, Action = A, Environment = SubE>,
{
    reducer: R,
    state_lens: fn(&mut S) -> &mut SubS,
    env_lens: fn(&E) -> &SubE,
    _action: PhantomData<fn(A)>,
}

impl<S, SubS, A, E, SubE, R> Reducer for ScopedReducer<S, SubS, A, E, SubE, R>
where
    R: Reducer<State = SubS, Action = A, Environment = SubE>,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(&self, state: &mut Self::State, action: Self::Action, env: &Self::Environment) {
        self.reducer
            .reduce((self.state_lens)(state), action, (self.env_lens)(env));
    }
}
