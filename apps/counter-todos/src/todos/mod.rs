//! The todo list: item model, state and reducer.

mod reducer;
mod types;

pub use reducer::{TodosEnvironment, TodosReducer};
pub use types::{TodoId, TodoItem, TodosState};
