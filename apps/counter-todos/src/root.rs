//! The root of the state tree and the store that owns it.
//!
//! The root reducer is the counter reducer scoped to `counter` combined with
//! the todos reducer scoped to `todos`. Every action reaches both; each one
//! ignores what it does not handle.

use crate::action::Action;
use crate::counter::{CounterReducer, CounterState};
use crate::todos::{TodosEnvironment, TodosReducer, TodosState};
use serde::Serialize;
use std::sync::Arc;
use unistate_core::composition::{CombinedReducer, combine_reducers, scope_reducer};
use unistate_core::environment::{IdGenerator, SequentialIdGenerator};
use unistate_core::reducer::Reducer;
use unistate_runtime::{Store, StoreConfig};

/// The whole application state
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RootState {
    /// Counter slice
    pub counter: CounterState,
    /// Todo list slice
    pub todos: TodosState,
}

/// Dependencies for the root reducer
#[derive(Clone, Debug)]
pub struct RootEnvironment {
    /// Dependencies of the todos reducer
    pub todos: TodosEnvironment,
}

impl RootEnvironment {
    /// Environment drawing todo ids from `ids`
    #[must_use]
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            todos: TodosEnvironment::new(ids),
        }
    }
}

impl Default for RootEnvironment {
    /// Todo ids start at 0
    fn default() -> Self {
        Self::new(Arc::new(SequentialIdGenerator::new()))
    }
}

/// Reducer for [`RootState`]
pub struct RootReducer {
    inner: CombinedReducer<RootState, Action, RootEnvironment>,
}

impl RootReducer {
    /// Build the root reducer from the counter and todos reducers
    #[must_use]
    pub fn new() -> Self {
        let inner = combine_reducers(vec![
            Box::new(scope_reducer(
                CounterReducer::new(),
                |state: &mut RootState| &mut state.counter,
                |_env: &RootEnvironment| &(),
            )),
            Box::new(scope_reducer(
                TodosReducer::new(),
                |state: &mut RootState| &mut state.todos,
                |env: &RootEnvironment| &env.todos,
            )),
        ]);
        Self { inner }
    }
}

impl Default for RootReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RootReducer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RootReducer").field("inner", &self.inner).finish()
    }
}

impl Reducer for RootReducer {
    type State = RootState;
    type Action = Action;
    type Environment = RootEnvironment;

    fn reduce(&self, state: &mut Self::State, action: Self::Action, env: &Self::Environment) {
        self.inner.reduce(state, action, env);
    }
}

/// The application store
pub type AppStore = Store<RootState, Action, RootEnvironment, RootReducer>;

/// Create a store at the initial state: counter at 0, empty draft, no todos
#[must_use]
pub fn create_store(env: RootEnvironment, config: StoreConfig) -> AppStore {
    Store::with_config(RootState::default(), RootReducer::new(), env, config)
}
