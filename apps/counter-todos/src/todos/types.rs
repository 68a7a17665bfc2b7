//! Domain types for the todo list.

use serde::{Deserialize, Serialize};
use unistate_core::environment::IdGenerator;

/// Identifier of a todo item
///
/// Assigned by the store's [`IdGenerator`] when the item is created. Ids are
/// unique within one store and never reused, even after the item is removed.
///
/// Generated ids are never negative, but any integer is a valid id to ask
/// for: a negative one simply matches no item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(i64);

impl TodoId {
    /// Wrap a raw id, e.g. one parsed from user input
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw id
    #[must_use]
    pub const fn as_i64(self) -> i64 {
        self.0
    }
}

impl From<i64> for TodoId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo item
///
/// Fields are read-only outside this crate: the id always comes from the
/// id generator and `done` only changes through a `TOGGLE` action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TodoItem {
    id: TodoId,
    text: String,
    done: bool,
}

impl TodoItem {
    /// Create a new, not yet done, item with the next id from `ids`
    #[must_use]
    pub fn create(text: impl Into<String>, ids: &dyn IdGenerator) -> Self {
        Self {
            id: TodoId(ids.next_id()),
            text: text.into(),
            done: false,
        }
    }

    /// The item's id
    #[must_use]
    pub const fn id(&self) -> TodoId {
        self.id
    }

    /// The item's text
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the item has been marked done
    #[must_use]
    pub const fn done(&self) -> bool {
        self.done
    }

    pub(crate) fn toggle(&mut self) {
        self.done = !self.done;
    }
}

/// State of the todo list
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodosState {
    /// Current draft text of the input box
    pub input: String,
    /// Items in creation order
    pub todo_items: Vec<TodoItem>,
}

impl TodosState {
    /// Number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.todo_items.len()
    }

    /// Whether the list has no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.todo_items.is_empty()
    }

    /// First item with the given id
    #[must_use]
    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.todo_items.iter().find(|item| item.id == id)
    }

    /// Number of items marked done
    #[must_use]
    pub fn done_count(&self) -> usize {
        self.todo_items.iter().filter(|item| item.done).count()
    }
}
