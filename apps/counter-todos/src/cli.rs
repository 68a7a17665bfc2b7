//! Line-oriented commands for the terminal front-end.
//!
//! Each line typed at the prompt becomes one [`Command`]. Most commands are
//! UI events (clicks and typing); a line starting with `{` is decoded as a
//! raw action in its JSON wire form.

use crate::action::Action;
use crate::error::CommandError;
use crate::root::AppStore;
use crate::todos::TodoId;
use crate::view::{UiEvent, to_action};
use unistate_runtime::metrics::MetricsServer;

/// Help text listing every command
pub const HELP: &str = "\
commands:
  + | inc          increment the counter
  - | dec          decrement the counter
  type <text>      set the todo draft
  submit           create a todo from the draft
  add <text>       type then submit
  toggle <id>      flip a todo's done flag
  rm <id>          remove a todo
  {\"type\": ...}    dispatch a raw action
  state            print the state as JSON
  metrics          print store metrics
  help             show this text
  quit             exit";

/// A parsed terminal command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Something the user did in the view
    Ui(UiEvent),
    /// Set the draft then submit it
    Add(String),
    /// Dispatch an action as given
    Raw(Action),
    /// Print the current state as JSON
    State,
    /// Print the metrics exposition
    Metrics,
    /// Print [`HELP`]
    Help,
    /// Leave the loop
    Quit,
}

impl Command {
    /// Parse one input line
    ///
    /// Returns `Ok(None)` for a blank line.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError`] for an unknown command, a missing or invalid
    /// argument, or a raw action that does not decode.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        if line.starts_with('{') {
            return Ok(Some(Self::Raw(Action::from_json(line)?)));
        }

        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(word, rest)| (word, rest.trim()));

        let command = match word {
            "+" | "inc" => Self::Ui(UiEvent::IncrementClicked),
            "-" | "dec" => Self::Ui(UiEvent::DecrementClicked),
            // An empty draft is allowed: it clears the input
            "type" => Self::Ui(UiEvent::InputChanged(rest.to_string())),
            "submit" => Self::Ui(UiEvent::Submitted),
            "add" => Self::Add(rest.to_string()),
            "toggle" => Self::Ui(UiEvent::ToggleClicked(parse_id("toggle", rest)?)),
            "rm" => Self::Ui(UiEvent::RemoveClicked(parse_id("rm", rest)?)),
            "state" => Self::State,
            "metrics" => Self::Metrics,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => return Err(CommandError::UnknownCommand(other.to_string())),
        };

        Ok(Some(command))
    }
}

/// What the front-end should do after a command ran
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// One or more actions were dispatched; subscribers have re-rendered
    Dispatched,
    /// Print this text
    Output(String),
    /// Leave the loop
    Quit,
}

/// Run one command against the store
#[tracing::instrument(skip(store, metrics))]
pub fn execute(store: &AppStore, metrics: &MetricsServer, command: Command) -> Outcome {
    match command {
        Command::Ui(event) => {
            let action = to_action(&store.get_state(), event);
            store.dispatch(action);
            Outcome::Dispatched
        },
        Command::Add(text) => {
            store.dispatch(Action::change_input(text));
            let action = to_action(&store.get_state(), UiEvent::Submitted);
            store.dispatch(action);
            Outcome::Dispatched
        },
        Command::Raw(action) => {
            store.dispatch(action);
            Outcome::Dispatched
        },
        Command::State => Outcome::Output(
            serde_json::to_string_pretty(&*store.get_state())
                .unwrap_or_else(|e| format!("failed to encode state: {e}")),
        ),
        Command::Metrics => Outcome::Output(
            metrics
                .render()
                .unwrap_or_else(|| "metrics are disabled (set METRICS_ENABLED=true)".to_string()),
        ),
        Command::Help => Outcome::Output(HELP.to_string()),
        Command::Quit => Outcome::Quit,
    }
}

fn parse_id(command: &'static str, arg: &str) -> Result<TodoId, CommandError> {
    if arg.is_empty() {
        return Err(CommandError::MissingArgument(command));
    }
    arg.parse::<i64>()
        .map(TodoId::new)
        .map_err(|_| CommandError::InvalidId(arg.to_string()))
}
