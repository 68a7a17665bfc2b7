//! The view layer: props mapped from state, UI events mapped to actions, and
//! a plain-text rendering of the whole app.
//!
//! Components never touch the store. They receive props built from a
//! [`RootState`] snapshot and report what the user did as a [`UiEvent`];
//! [`to_action`] turns that event into the action to dispatch.

use crate::action::Action;
use crate::root::RootState;
use crate::todos::{TodoId, TodoItem};
use std::fmt::Write as _;

/// Header shown above the counter
pub const COUNTER_TITLE: &str = "카운터";

/// Header shown above the todo list
pub const TODOS_TITLE: &str = "what's going on?";

/// Static profile header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    /// Display name
    pub name: String,
    /// Job title
    pub job: String,
}

impl Profile {
    /// Create a profile header
    #[must_use]
    pub fn new(name: impl Into<String>, job: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            job: job.into(),
        }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::new("lucas", "developer")
    }
}

/// What the counter component needs from the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterProps {
    /// Current counter value
    pub value: i64,
}

impl CounterProps {
    /// Map the root state to counter props
    #[must_use]
    pub const fn from_state(state: &RootState) -> Self {
        Self {
            value: state.counter.value,
        }
    }
}

/// What the todo list component needs from the state
///
/// Borrows from the snapshot it was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TodoListProps<'a> {
    /// Current draft text
    pub input: &'a str,
    /// Items in creation order
    pub todo_items: &'a [TodoItem],
}

impl<'a> TodoListProps<'a> {
    /// Map the root state to todo list props
    #[must_use]
    pub fn from_state(state: &'a RootState) -> Self {
        Self {
            input: &state.todos.input,
            todo_items: &state.todos.todo_items,
        }
    }
}

/// Something the user did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The `+` button
    IncrementClicked,
    /// The `-` button
    DecrementClicked,
    /// The todo input now holds this text
    InputChanged(String),
    /// The todo form was submitted
    Submitted,
    /// A todo item was clicked
    ToggleClicked(TodoId),
    /// A todo item's remove control was clicked
    RemoveClicked(TodoId),
}

/// Map a UI event to the action to dispatch
///
/// `Submitted` creates a todo from the current draft as found in `state`.
/// Nothing is validated here, so an empty draft creates an empty todo.
#[must_use]
pub fn to_action(state: &RootState, event: UiEvent) -> Action {
    match event {
        UiEvent::IncrementClicked => Action::Increment,
        UiEvent::DecrementClicked => Action::Decrement,
        UiEvent::InputChanged(text) => Action::ChangeInput(text),
        UiEvent::Submitted => Action::create(state.todos.input.clone()),
        UiEvent::ToggleClicked(id) => Action::toggle(id),
        UiEvent::RemoveClicked(id) => Action::remove(id),
    }
}

/// Render the profile header
#[must_use]
pub fn render_profile(profile: &Profile) -> String {
    format!("{} ({})", profile.name, profile.job)
}

/// Render the counter component
#[must_use]
pub fn render_counter(props: CounterProps) -> String {
    format!("{COUNTER_TITLE}\n  {}\n  [+] [-]", props.value)
}

/// Render the todo list component
#[must_use]
pub fn render_todo_list(props: TodoListProps<'_>) -> String {
    let mut out = format!("{TODOS_TITLE}\n  > {}", props.input);
    for item in props.todo_items {
        let mark = if item.done() { 'x' } else { ' ' };
        // Writing to a String cannot fail
        let _ = write!(out, "\n  [{mark}] #{} {}", item.id(), item.text());
    }
    out
}

/// Render the whole app for one snapshot
#[must_use]
pub fn render_app(profile: &Profile, state: &RootState) -> String {
    [
        render_profile(profile),
        render_counter(CounterProps::from_state(state)),
        render_todo_list(TodoListProps::from_state(state)),
    ]
    .join("\n\n")
}
