//! Gripline Simulator
//!
//! A simulated gripper controller for exercising the client without
//! hardware. [`DeviceModel`] is a pure state machine implementing the
//! SET/GET register file, with scriptable activation behavior and
//! injectable faults. [`SimGripper`] serves a model over a real TCP
//! listener on a background thread, so tests run against an actual socket.

mod device;
mod server;

pub use device::{ActivationBehavior, DeviceModel, DeviceReply, DeviceStats, Fault};
pub use server::SimGripper;
