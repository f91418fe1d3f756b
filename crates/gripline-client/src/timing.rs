//! Timing profile for command pacing and poll loops.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Delays and deadlines governing the client's interaction rhythm.
///
/// The defaults match the conservative values used against real hardware.
/// Tests against a simulated device use [`Timing::fast`] to keep poll loops
/// from dominating the test run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Timing {
    /// Settle delay after the TCP connection is established.
    pub connect_settle: Duration,
    /// Minimum gap between consecutive commands on the wire.
    pub command_pacing: Duration,
    /// Interval between polls of slow status registers (reset, activation).
    pub status_poll: Duration,
    /// Interval between polls of motion registers (PRE, OBJ).
    pub motion_poll: Duration,
    /// Settle delay after a state machine completes.
    pub settle: Duration,
    /// Fixed wait after issuing the activation command, before polling.
    pub activation_settle: Duration,
    /// Deadline for the activation poll loop.
    pub activation_deadline: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Timing {
            connect_settle: Duration::from_millis(200),
            command_pacing: Duration::from_millis(50),
            status_poll: Duration::from_millis(100),
            motion_poll: Duration::from_millis(10),
            settle: Duration::from_millis(500),
            activation_settle: Duration::from_millis(1000),
            activation_deadline: Duration::from_secs(10),
        }
    }
}

impl Timing {
    /// Timing profile for tests against a simulated device.
    ///
    /// All delays collapse to 1ms. The activation deadline keeps its
    /// hardware default so activation failure tests can override it
    /// explicitly.
    pub fn fast() -> Self {
        Timing {
            connect_settle: Duration::from_millis(1),
            command_pacing: Duration::from_millis(1),
            status_poll: Duration::from_millis(1),
            motion_poll: Duration::from_millis(1),
            settle: Duration::from_millis(1),
            activation_settle: Duration::from_millis(1),
            activation_deadline: Duration::from_secs(10),
        }
    }
}
