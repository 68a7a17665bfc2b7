//! Reducer logic for the todo list.

use super::types::{TodoId, TodoItem, TodosState};
use crate::action::Action;
use std::sync::Arc;
use unistate_core::{environment::IdGenerator, reducer::Reducer};

/// Environment dependencies for the todos reducer
#[derive(Clone)]
pub struct TodosEnvironment {
    /// Source of ids for newly created items
    pub ids: Arc<dyn IdGenerator>,
}

impl TodosEnvironment {
    /// Creates a new `TodosEnvironment`
    #[must_use]
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self { ids }
    }
}

impl std::fmt::Debug for TodosEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodosEnvironment").finish_non_exhaustive()
    }
}

/// Reducer for the todo list
///
/// Handles the four `todos/*` actions. Counter actions leave the state
/// untouched. Removing or toggling an id that is not in the list is a
/// silent no-op.
#[derive(Clone, Debug, Default)]
pub struct TodosReducer;

impl TodosReducer {
    /// Creates a new `TodosReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn remove(state: &mut TodosState, id: TodoId) {
        let before = state.todo_items.len();
        state.todo_items.retain(|item| item.id() != id);
        if state.todo_items.len() == before {
            tracing::trace!(%id, "remove: no item with this id");
        }
    }

    fn toggle(state: &mut TodosState, id: TodoId) {
        // Not found must leave every item alone
        let Some(item) = state.todo_items.iter_mut().find(|item| item.id() == id) else {
            tracing::trace!(%id, "toggle: no item with this id");
            return;
        };
        item.toggle();
    }
}

impl Reducer for TodosReducer {
    type State = TodosState;
    type Action = Action;
    type Environment = TodosEnvironment;

    fn reduce(&self, state: &mut Self::State, action: Self::Action, env: &Self::Environment) {
        match action {
            Action::ChangeInput(text) => {
                state.input = text;
            },
            Action::Create(text) => {
                // Payload-driven: `input` is cleared but never read
                let item = TodoItem::create(text, env.ids.as_ref());
                tracing::debug!(id = %item.id(), "todo created");
                state.input.clear();
                state.todo_items.push(item);
            },
            Action::Remove(id) => Self::remove(state, id),
            Action::Toggle(id) => Self::toggle(state, id),
            Action::Increment | Action::Decrement => {},
        }
    }
}
