//! Position moves and grip/release conveniences.

use std::thread;
use std::time::{Duration, Instant};

use gripline_protocol::{clamp_value, ObjectStatus, ReadParam, WriteParam};
use tracing::{debug, warn};

use crate::client::GripperClient;
use crate::error::{ClientError, ClientResult};

/// Options for a position move.
#[derive(Debug, Clone, Copy)]
pub struct MoveOptions {
    /// Speed to set before the move, clamped to 0-255. `None` leaves the
    /// device's current speed untouched.
    pub speed: Option<i32>,
    /// Force to set before the move, clamped to 0-255. `None` leaves the
    /// device's current force untouched.
    pub force: Option<i32>,
    /// Wait for the fingers to stop before returning.
    pub block: bool,
    /// Deadline for the confirmation and completion poll loops. `None`
    /// polls indefinitely.
    pub confirm_deadline: Option<Duration>,
}

impl Default for MoveOptions {
    fn default() -> Self {
        MoveOptions {
            speed: None,
            force: None,
            block: true,
            confirm_deadline: None,
        }
    }
}

impl MoveOptions {
    /// Set the speed for the move.
    pub fn with_speed(mut self, speed: i32) -> Self {
        self.speed = Some(speed);
        self
    }

    /// Set the force for the move.
    pub fn with_force(mut self, force: i32) -> Self {
        self.force = Some(force);
        self
    }

    /// Choose blocking or non-blocking completion.
    pub fn with_block(mut self, block: bool) -> Self {
        self.block = block;
        self
    }

    /// Bound the confirmation and completion poll loops.
    pub fn with_confirm_deadline(mut self, deadline: Duration) -> Self {
        self.confirm_deadline = Some(deadline);
        self
    }
}

impl GripperClient {
    /// Move the fingers to `position`, 0 fully open through 255 fully
    /// closed. Out-of-range values are clamped.
    ///
    /// The move is confirmed by polling the position request echo (PRE)
    /// until the device acknowledges the commanded target. With
    /// `options.block` the call then polls the object register (OBJ) until
    /// the fingers stop, either at the target or on an object.
    ///
    /// Returns the position reported by the device after the move.
    pub fn move_to(&mut self, position: i32, options: MoveOptions) -> ClientResult<u8> {
        if let Some(speed) = options.speed {
            let speed = clamp_value(speed);
            if speed != 0 && self.show_warnings {
                warn!("speed setting has limited effect on this controller");
            }
            self.set_param(WriteParam::Speed, speed)?;
        }
        if let Some(force) = options.force {
            let force = clamp_value(force);
            if force != 0 && self.show_warnings {
                warn!("force setting has limited effect on this controller");
            }
            self.set_param(WriteParam::Force, force)?;
        }

        let target = clamp_value(position);
        debug!("moving to position {}", target);
        self.set_param(WriteParam::Pos, target)?;
        self.set_param(WriteParam::Gto, 1)?;

        let started = Instant::now();
        while self.get_param(ReadParam::Pre)? != target {
            check_deadline(options.confirm_deadline, started)?;
            thread::sleep(self.config.timing.motion_poll);
        }

        if options.block {
            while ObjectStatus::from(self.get_param(ReadParam::Obj)?).is_moving() {
                check_deadline(options.confirm_deadline, started)?;
                thread::sleep(self.config.timing.motion_poll);
            }
        }

        let reached = self.get_param(ReadParam::Pos)?;
        debug!("move finished at position {}", reached);
        Ok(reached)
    }

    /// Fully close the fingers.
    pub fn grip(&mut self, block: bool) -> ClientResult<u8> {
        self.move_to(255, MoveOptions::default().with_block(block))
    }

    /// Fully open the fingers.
    pub fn release(&mut self, block: bool) -> ClientResult<u8> {
        self.move_to(0, MoveOptions::default().with_block(block))
    }
}

fn check_deadline(deadline: Option<Duration>, started: Instant) -> ClientResult<()> {
    if let Some(deadline) = deadline {
        let waited = started.elapsed();
        if waited >= deadline {
            return Err(ClientError::ConfirmationTimeout { waited });
        }
    }
    Ok(())
}
