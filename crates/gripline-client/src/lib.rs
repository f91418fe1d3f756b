//! Gripline Client
//!
//! A blocking TCP control client for two-finger parallel grippers speaking
//! the line-based ASCII SET/GET protocol. One client owns one connection;
//! the protocol has no pipelining, so all commands are issued sequentially
//! with a pacing delay between them.
//!
//! The client covers the full device lifecycle:
//!
//! - **Transport**: connect, disconnect, automatic cleanup on drop.
//! - **Activation**: reset and activate state machines, with an activation
//!   deadline and optional reset deadline.
//! - **Motion**: clamped position moves with optional speed/force, blocking
//!   or non-blocking completion, and grip/release conveniences.
//!
//! # Example
//!
//! ```rust,no_run
//! use gripline_client::{GripperClient, GripperConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = GripperConfig::default()
//!         .with_addr("192.168.1.11:63352".parse()?)
//!         .with_auto_init(false);
//!     let mut gripper = GripperClient::new(config);
//!
//!     gripper.connect()?;
//!     gripper.activate()?;
//!     gripper.grip(true)?;
//!     gripper.release(true)?;
//!     Ok(())
//! }
//! ```

mod activation;
mod client;
mod config;
mod error;
mod motion;
mod timing;
mod transport;

pub use client::GripperClient;
pub use config::GripperConfig;
pub use error::{ClientError, ClientResult};
pub use motion::MoveOptions;
pub use timing::Timing;

// Protocol types that appear in the public API.
pub use gripline_protocol::{ActivationStatus, ObjectStatus, ReadParam, WriteParam};
