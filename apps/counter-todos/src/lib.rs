//! # Counter + Todos
//!
//! A counter and a todo list sharing one store.
//!
//! - [`action`]: the six actions that make up the whole UI contract
//! - [`counter`] and [`todos`]: one reducer per slice of state
//! - [`root`]: the composed state tree and the store that owns it
//! - [`view`]: props, UI events and plain-text rendering
//! - [`cli`]: the terminal front-end's command parser
//!
//! ## Example
//!
//! ```
//! use counter_todos::action::Action;
//! use counter_todos::root::{RootEnvironment, create_store};
//! use counter_todos::todos::TodoId;
//! use unistate_runtime::StoreConfig;
//!
//! let store = create_store(RootEnvironment::default(), StoreConfig::default());
//!
//! store.dispatch(Action::change_input("buy milk"));
//! store.dispatch(Action::create("buy milk"));
//! store.dispatch(Action::toggle(TodoId::new(0)));
//!
//! let state = store.get_state();
//! assert_eq!(state.todos.input, "");
//! assert!(state.todos.todo_items[0].done());
//! ```

pub mod action;
pub mod cli;
pub mod config;
pub mod counter;
pub mod error;
pub mod root;
pub mod todos;
pub mod view;

pub use action::Action;
pub use config::Config;
pub use error::{ActionDecodeError, CommandError};
pub use root::{AppStore, RootEnvironment, RootState, create_store};
