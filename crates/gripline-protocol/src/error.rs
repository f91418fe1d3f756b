//! Protocol-level error types.

use thiserror::Error;

/// Errors raised while encoding or parsing protocol frames.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    /// A GET response did not carry the expected `<name> <value>` shape.
    #[error("malformed response, expected `<name> <value>`: '{line}'")]
    TooFewTokens {
        /// The offending line, terminator stripped.
        line: String,
    },

    /// A value token was not an integer in the 0-255 range.
    #[error("invalid value token '{token}', expected an integer in 0-255")]
    InvalidValue {
        /// The offending token.
        token: String,
    },

    /// A parameter name was not recognized.
    #[error("unknown parameter name '{name}'")]
    UnknownParam {
        /// The offending name.
        name: String,
    },

    /// A command line could not be interpreted as SET or GET.
    #[error("invalid command line: '{line}'")]
    InvalidCommand {
        /// The offending line, terminator stripped.
        line: String,
    },
}

/// Result alias for protocol operations.
pub type ProtocolResult<T> = Result<T, ProtocolError>;
