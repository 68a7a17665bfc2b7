//! Errors raised at the edges of the application.
//!
//! Reducers and dispatch are total; nothing in here is produced inside a
//! state transition. These types cover decoding actions from their wire form
//! and parsing terminal commands.

use thiserror::Error;

/// An action could not be decoded from its JSON wire form
#[derive(Error, Debug)]
#[error("invalid action: {source}")]
pub struct ActionDecodeError {
    #[from]
    source: serde_json::Error,
}

/// A line typed at the terminal could not be turned into a command
#[derive(Error, Debug)]
pub enum CommandError {
    /// The first word is not a known command
    #[error("unknown command `{0}` (type `help` for a list)")]
    UnknownCommand(String),

    /// A command that needs an argument was given none
    #[error("`{0}` expects an argument")]
    MissingArgument(&'static str),

    /// A todo id was not an integer
    #[error("invalid todo id `{0}`")]
    InvalidId(String),

    /// A raw JSON line was not a valid action
    #[error(transparent)]
    Decode(#[from] ActionDecodeError),
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn decode_error_keeps_serde_message() {
        let source = serde_json::from_str::<i64>("\"x\"").unwrap_err();
        let expected = source.to_string();
        let err = ActionDecodeError::from(source);
        assert!(err.to_string().starts_with("invalid action: "));
        assert!(err.to_string().contains(&expected));
    }

    #[test]
    fn command_error_messages() {
        assert_eq!(
            CommandError::InvalidId("abc".to_string()).to_string(),
            "invalid todo id `abc`"
        );
        assert_eq!(
            CommandError::MissingArgument("toggle").to_string(),
            "`toggle` expects an argument"
        );
    }
}
