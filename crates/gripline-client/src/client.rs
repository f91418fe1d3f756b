//! Gripper client core: connection lifecycle and the SET/GET primitives.

use std::thread;

use gripline_protocol::{parse_get_response, Command, ReadParam, WriteParam};
use tracing::{trace, warn};

use crate::config::GripperConfig;
use crate::error::ClientResult;
use crate::transport::Transport;

/// Blocking control client for one gripper.
///
/// All operations run on the caller's thread and issue commands
/// sequentially; the device answers at most one outstanding GET.
pub struct GripperClient {
    pub(crate) config: GripperConfig,
    pub(crate) transport: Transport,
    /// Emit advisory warnings for nonzero speed/force requests.
    pub(crate) show_warnings: bool,
}

impl GripperClient {
    /// Create a client for the configured gripper.
    ///
    /// With `auto_init` enabled this also connects, fully opens the fingers
    /// and activates the gripper. A failure during that sequence is logged
    /// and swallowed so construction itself never fails; the client is left
    /// disconnected and the caller can retry with [`connect`](Self::connect)
    /// and [`activate`](Self::activate) explicitly.
    pub fn new(config: GripperConfig) -> GripperClient {
        let auto_init = config.auto_init;
        let read_timeout = config.read_timeout;
        let mut client = GripperClient {
            config,
            transport: Transport::new(read_timeout),
            show_warnings: auto_init,
        };

        if auto_init {
            if let Err(e) = client.auto_init() {
                warn!("auto-initialization failed: {}", e);
                client.disconnect();
            }
        }
        client
    }

    fn auto_init(&mut self) -> ClientResult<()> {
        self.connect()?;
        self.set_param(WriteParam::Pos, 0)?;
        self.activate()
    }

    /// Connect to the gripper. A no-op when already connected.
    pub fn connect(&mut self) -> ClientResult<()> {
        self.transport
            .connect(self.config.addr, self.config.timing.connect_settle)
    }

    /// Disconnect from the gripper. Safe to call when already disconnected.
    pub fn disconnect(&mut self) {
        self.transport.disconnect();
    }

    /// Whether the client currently holds a connection.
    pub fn is_connected(&self) -> bool {
        self.transport.is_connected()
    }

    /// Get the active configuration.
    pub fn config(&self) -> &GripperConfig {
        &self.config
    }

    /// Write a parameter. The device sends no response to writes.
    ///
    /// Sleeps for the command pacing interval after transmission so
    /// back-to-back commands do not overrun the controller.
    pub fn set_param(&mut self, param: WriteParam, value: u8) -> ClientResult<()> {
        let cmd = Command::Set { param, value };
        trace!("sending {}", cmd.to_command_string());
        self.transport.send(&cmd.encode())?;
        thread::sleep(self.config.timing.command_pacing);
        Ok(())
    }

    /// Read a status parameter and return its value.
    pub fn get_param(&mut self, param: ReadParam) -> ClientResult<u8> {
        let cmd = Command::Get { param };
        trace!("sending {}", cmd.to_command_string());
        self.transport.send(&cmd.encode())?;
        thread::sleep(self.config.timing.command_pacing);
        let line = self.transport.receive_line()?;
        let value = parse_get_response(&line)?;
        trace!("{} = {}", param.as_str(), value);
        Ok(value)
    }

    /// Read the current finger position (0 fully open, 255 fully closed).
    pub fn position(&mut self) -> ClientResult<u8> {
        self.get_param(ReadParam::Pos)
    }
}

impl Drop for GripperClient {
    fn drop(&mut self) {
        self.disconnect();
    }
}
