//! Client configuration.

use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::timing::Timing;

/// Configuration for a [`GripperClient`](crate::GripperClient).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GripperConfig {
    /// Address of the gripper controller's TCP endpoint.
    pub addr: SocketAddr,
    /// Socket read timeout applied to every response wait.
    pub read_timeout: Duration,
    /// Connect, open and activate the gripper during construction.
    pub auto_init: bool,
    /// Delays and deadlines for pacing and poll loops.
    pub timing: Timing,
}

impl Default for GripperConfig {
    fn default() -> Self {
        GripperConfig {
            // Factory-default controller address on the robot subnet.
            addr: SocketAddr::from((Ipv4Addr::new(172, 22, 22, 2), 63352)),
            read_timeout: Duration::from_secs(5),
            auto_init: true,
            timing: Timing::default(),
        }
    }
}

impl GripperConfig {
    /// Set the controller address.
    pub fn with_addr(mut self, addr: SocketAddr) -> Self {
        self.addr = addr;
        self
    }

    /// Set the socket read timeout.
    pub fn with_read_timeout(mut self, read_timeout: Duration) -> Self {
        self.read_timeout = read_timeout;
        self
    }

    /// Enable or disable auto-initialization on construction.
    pub fn with_auto_init(mut self, auto_init: bool) -> Self {
        self.auto_init = auto_init;
        self
    }

    /// Set the timing profile.
    pub fn with_timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }
}
