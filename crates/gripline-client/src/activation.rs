//! Reset and activation state machines.

use std::thread;
use std::time::{Duration, Instant};

use gripline_protocol::{ActivationStatus, ReadParam, WriteParam};
use tracing::{debug, info};

use crate::client::GripperClient;
use crate::error::{ClientError, ClientResult};

impl GripperClient {
    /// Reset the gripper to its deactivated state.
    ///
    /// Polls until both the activation request register (ACT) and the
    /// activation status (STA) read back zero, re-issuing the reset command
    /// each round. Blocks indefinitely; use
    /// [`reset_within`](Self::reset_within) to bound the wait.
    pub fn reset(&mut self) -> ClientResult<()> {
        self.reset_within(None)
    }

    /// Reset the gripper, giving up after `deadline` when one is supplied.
    pub fn reset_within(&mut self, deadline: Option<Duration>) -> ClientResult<()> {
        debug!("resetting gripper");
        let started = Instant::now();
        self.set_param(WriteParam::Act, 0)?;

        while self.get_param(ReadParam::Act)? != 0 || self.get_param(ReadParam::Sta)? != 0 {
            if let Some(deadline) = deadline {
                let waited = started.elapsed();
                if waited >= deadline {
                    return Err(ClientError::ConfirmationTimeout { waited });
                }
            }
            self.set_param(WriteParam::Act, 0)?;
            thread::sleep(self.config.timing.status_poll);
        }

        thread::sleep(self.config.timing.settle);
        debug!("gripper reset complete");
        Ok(())
    }

    /// Activate the gripper, running its calibration cycle.
    ///
    /// Returns immediately when the gripper already reports active, issuing
    /// no further commands. Otherwise resets first, requests activation and
    /// polls STA until it reports active or the activation deadline passes.
    pub fn activate(&mut self) -> ClientResult<()> {
        let status = ActivationStatus::from(self.get_param(ReadParam::Sta)?);
        if status.is_active() {
            debug!("gripper already active");
            return Ok(());
        }

        info!("activating gripper");
        self.reset()?;
        self.set_param(WriteParam::Act, 1)?;
        thread::sleep(self.config.timing.activation_settle);

        let started = Instant::now();
        loop {
            let status = ActivationStatus::from(self.get_param(ReadParam::Sta)?);
            if status.is_active() {
                break;
            }
            let waited = started.elapsed();
            if waited >= self.config.timing.activation_deadline {
                return Err(ClientError::ActivationTimeout { waited });
            }
            thread::sleep(self.config.timing.status_poll);
        }

        thread::sleep(self.config.timing.settle);
        info!("gripper active");
        Ok(())
    }
}
