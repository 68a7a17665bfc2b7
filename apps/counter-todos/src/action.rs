//! The action vocabulary shared by every reducer in the application.
//!
//! These six variants are the whole contract between the view layer and the
//! store. Each reducer handles its own variants and ignores the rest.

use crate::error::ActionDecodeError;
use crate::todos::TodoId;
use serde::{Deserialize, Serialize};

/// Actions that can be dispatched to the root store
///
/// The serialized form is `{"type": "...", "payload": ...}` with namespaced
/// type strings, e.g. `{"type": "todos/CREATE", "payload": "buy milk"}`.
/// Payload-less actions omit `payload`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum Action {
    /// Add one to the counter
    #[serde(rename = "counter/INCREMENT")]
    Increment,

    /// Subtract one from the counter
    #[serde(rename = "counter/DECREMENT")]
    Decrement,

    /// Replace the draft text of the todo input
    #[serde(rename = "todos/CHANGE_INPUT")]
    ChangeInput(String),

    /// Append a new todo with this text and clear the draft
    #[serde(rename = "todos/CREATE")]
    Create(String),

    /// Remove every todo with this id
    #[serde(rename = "todos/REMOVE")]
    Remove(TodoId),

    /// Flip the `done` flag of the todo with this id
    #[serde(rename = "todos/TOGGLE")]
    Toggle(TodoId),
}

impl Action {
    /// `todos/CHANGE_INPUT` action creator
    #[must_use]
    pub fn change_input(text: impl Into<String>) -> Self {
        Self::ChangeInput(text.into())
    }

    /// `todos/CREATE` action creator
    #[must_use]
    pub fn create(text: impl Into<String>) -> Self {
        Self::Create(text.into())
    }

    /// `todos/REMOVE` action creator
    #[must_use]
    pub const fn remove(id: TodoId) -> Self {
        Self::Remove(id)
    }

    /// `todos/TOGGLE` action creator
    #[must_use]
    pub const fn toggle(id: TodoId) -> Self {
        Self::Toggle(id)
    }

    /// The wire type string of this action
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Increment => "counter/INCREMENT",
            Self::Decrement => "counter/DECREMENT",
            Self::ChangeInput(_) => "todos/CHANGE_INPUT",
            Self::Create(_) => "todos/CREATE",
            Self::Remove(_) => "todos/REMOVE",
            Self::Toggle(_) => "todos/TOGGLE",
        }
    }

    /// Decode one action from its JSON wire form
    ///
    /// # Errors
    ///
    /// Returns [`ActionDecodeError`] if the input is not valid JSON, names an
    /// unknown action type, or carries a payload of the wrong type.
    pub fn from_json(input: &str) -> Result<Self, ActionDecodeError> {
        serde_json::from_str(input).map_err(ActionDecodeError::from)
    }

    /// Encode this action in its JSON wire form
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if serialization fails, which cannot
    /// happen for the current variants.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
