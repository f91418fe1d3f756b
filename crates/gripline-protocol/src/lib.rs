//! Gripline Wire Protocol
//!
//! This crate provides types and utilities for the line-based ASCII control
//! protocol spoken by two-finger parallel gripper controllers over a TCP
//! socket. The protocol is a strict request/response exchange:
//!
//! - **`SET <NAME> <value>`** (client → device): write a parameter. The
//!   device sends no response to writes.
//! - **`GET <NAME>`** (client → device): read a status parameter.
//! - **`<name> <value> ...`** (device → client): one line answering a GET,
//!   at least two whitespace tokens with the second carrying the value.
//!
//! All frames are ASCII and newline-terminated. The protocol has no
//! pipelining: exactly one request may be outstanding at a time.
//!
//! # Example
//!
//! ```rust
//! use gripline_protocol::{parse_get_response, Command, WriteParam};
//!
//! // Build a command
//! let cmd = Command::Set { param: WriteParam::Pos, value: 128 };
//! assert_eq!(cmd.encode(), b"SET POS 128\n".to_vec());
//!
//! // Parse a response
//! let value = parse_get_response("pos 128").unwrap();
//! assert_eq!(value, 128);
//! ```

mod codec;
mod commands;
mod error;
mod params;
mod responses;

pub use codec::*;
pub use commands::*;
pub use error::*;
pub use params::*;
pub use responses::*;
