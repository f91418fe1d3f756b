//! Client error types.

use std::io;
use std::net::SocketAddr;
use std::time::Duration;

use gripline_protocol::ProtocolError;
use thiserror::Error;

/// Errors surfaced by gripper client operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Establishing the TCP connection failed.
    #[error("failed to connect to gripper at {addr}: {source}")]
    ConnectFailed {
        /// Address the client attempted to reach.
        addr: SocketAddr,
        /// Underlying socket error.
        #[source]
        source: io::Error,
    },

    /// An operation that needs a connection was called while disconnected.
    #[error("not connected to gripper")]
    NotConnected,

    /// The peer closed the connection mid-operation.
    #[error("connection to gripper lost")]
    ConnectionLost,

    /// An I/O error occurred on an established connection.
    #[error("socket i/o error: {0}")]
    Io(#[from] io::Error),

    /// No response line arrived within the configured read timeout.
    #[error("timed out waiting for gripper response")]
    ResponseTimeout,

    /// A response line arrived but could not be parsed.
    #[error("malformed response: {0}")]
    Protocol(#[from] ProtocolError),

    /// The gripper did not report active within the activation deadline.
    #[error("gripper did not activate within {waited:?}")]
    ActivationTimeout {
        /// Time spent waiting before giving up.
        waited: Duration,
    },

    /// A bounded confirmation poll ran out of time.
    #[error("gripper did not confirm command within {waited:?}")]
    ConfirmationTimeout {
        /// Time spent waiting before giving up.
        waited: Duration,
    },
}

/// Result alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
