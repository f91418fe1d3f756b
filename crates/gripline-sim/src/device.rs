//! The simulated gripper state machine.

use std::collections::VecDeque;

use gripline_protocol::{Command, ReadParam, WriteParam};
use tracing::trace;

const STA_RESET: u8 = 0;
const STA_ACTIVE: u8 = 3;
const OBJ_AT_REST: u8 = 3;

/// How the simulated gripper responds to an activation request.
#[derive(Debug, Clone, Default)]
pub enum ActivationBehavior {
    /// Report active on the first STA read after activation is requested.
    #[default]
    Immediate,
    /// Answer successive STA reads with this sequence, holding the last
    /// value once exhausted.
    Scripted(Vec<u8>),
    /// Never leave the activating state.
    Never,
}

/// Fault injected into an otherwise well-behaved device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// Never answer GET commands.
    NoReply,
    /// Answer GET commands with only the parameter name, no value.
    TruncatedReply,
    /// Close the connection on the first GET command.
    CloseOnGet,
    /// Never update PRE when a new target position is set.
    StalePre,
    /// Ignore reset commands, leaving ACT stuck at 1.
    IgnoreReset,
}

/// What the device wants sent back for one received line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceReply {
    /// Send nothing.
    None,
    /// Send this line, terminator appended by the server.
    Line(String),
    /// Close the connection.
    Close,
}

/// Counters recording what the device has observed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeviceStats {
    /// Total SET commands accepted.
    pub set_commands: u64,
    /// Total GET commands received.
    pub get_commands: u64,
    /// GET ACT reads.
    pub act_reads: u64,
    /// GET STA reads.
    pub sta_reads: u64,
    /// GET PRE reads.
    pub pre_reads: u64,
    /// GET OBJ reads.
    pub obj_reads: u64,
    /// GET POS reads.
    pub pos_reads: u64,
}

/// Pure state machine for one simulated gripper.
///
/// Holds the register file, the activation script and any injected fault.
/// Transport concerns live in [`SimGripper`](crate::SimGripper); the model
/// only maps received lines to replies.
#[derive(Debug, Default)]
pub struct DeviceModel {
    act: u8,
    gto: u8,
    speed: u8,
    force: u8,
    target: u8,
    pre: u8,
    position: u8,
    sta: u8,
    sta_script: VecDeque<u8>,
    obj_script: VecDeque<u8>,
    activation: ActivationBehavior,
    fault: Option<Fault>,
    stats: DeviceStats,
}

impl DeviceModel {
    /// Create a gripper in the factory reset state.
    pub fn new() -> DeviceModel {
        DeviceModel::default()
    }

    /// Create a gripper that is already activated.
    pub fn activated() -> DeviceModel {
        DeviceModel {
            act: 1,
            sta: STA_ACTIVE,
            ..DeviceModel::default()
        }
    }

    /// Set the activation behavior.
    pub fn with_activation(mut self, activation: ActivationBehavior) -> Self {
        self.activation = activation;
        self
    }

    /// Inject a fault.
    pub fn with_fault(mut self, fault: Fault) -> Self {
        self.fault = Some(fault);
        self
    }

    /// Script the answers to successive OBJ reads. Once exhausted, OBJ
    /// reads report at-rest.
    pub fn with_obj_script(mut self, script: &[u8]) -> Self {
        self.obj_script = script.iter().copied().collect();
        self
    }

    /// Counters of commands observed so far.
    pub fn stats(&self) -> DeviceStats {
        self.stats
    }

    /// Current activation status register value.
    pub fn sta(&self) -> u8 {
        self.sta
    }

    /// Current finger position.
    pub fn position(&self) -> u8 {
        self.position
    }

    /// Last commanded target position.
    pub fn target(&self) -> u8 {
        self.target
    }

    /// Last accepted speed setting.
    pub fn speed(&self) -> u8 {
        self.speed
    }

    /// Last accepted force setting.
    pub fn force(&self) -> u8 {
        self.force
    }

    /// Process one received line and decide the reply.
    ///
    /// Unparseable lines are dropped without a reply, mirroring a real
    /// controller that ignores garbage.
    pub fn handle_line(&mut self, line: &str) -> DeviceReply {
        let cmd = match Command::parse(line) {
            Ok(cmd) => cmd,
            Err(e) => {
                trace!("ignoring unparseable line '{}': {}", line, e);
                return DeviceReply::None;
            }
        };

        match cmd {
            Command::Set { param, value } => {
                self.stats.set_commands += 1;
                self.apply_set(param, value);
                DeviceReply::None
            }
            Command::Get { param } => {
                self.stats.get_commands += 1;
                match self.fault {
                    Some(Fault::NoReply) => DeviceReply::None,
                    Some(Fault::CloseOnGet) => DeviceReply::Close,
                    Some(Fault::TruncatedReply) => {
                        // Consume the read so counters stay truthful.
                        let _ = self.read(param);
                        DeviceReply::Line(param.as_str().to_ascii_lowercase())
                    }
                    _ => {
                        let value = self.read(param);
                        DeviceReply::Line(format!(
                            "{} {}",
                            param.as_str().to_ascii_lowercase(),
                            value
                        ))
                    }
                }
            }
        }
    }

    fn apply_set(&mut self, param: WriteParam, value: u8) {
        match param {
            WriteParam::Act => {
                if value == 0 {
                    if self.fault == Some(Fault::IgnoreReset) {
                        return;
                    }
                    self.act = 0;
                    self.gto = 0;
                    self.sta = STA_RESET;
                    self.sta_script.clear();
                } else {
                    self.act = 1;
                    match &self.activation {
                        ActivationBehavior::Immediate => self.sta = STA_ACTIVE,
                        ActivationBehavior::Scripted(script) => {
                            self.sta_script = script.iter().copied().collect();
                        }
                        ActivationBehavior::Never => self.sta = 1,
                    }
                }
            }
            WriteParam::Gto => {
                self.gto = value;
                if value != 0 {
                    // Moves complete instantly in the model.
                    self.position = self.target;
                }
            }
            WriteParam::Force => self.force = value,
            WriteParam::Speed => self.speed = value,
            WriteParam::Pos => {
                self.target = value;
                if self.fault != Some(Fault::StalePre) {
                    self.pre = value;
                }
            }
        }
    }

    fn read(&mut self, param: ReadParam) -> u8 {
        match param {
            ReadParam::Act => {
                self.stats.act_reads += 1;
                self.act
            }
            ReadParam::Sta => {
                self.stats.sta_reads += 1;
                if let Some(next) = self.sta_script.pop_front() {
                    self.sta = next;
                }
                self.sta
            }
            ReadParam::Pre => {
                self.stats.pre_reads += 1;
                self.pre
            }
            ReadParam::Obj => {
                self.stats.obj_reads += 1;
                self.obj_script.pop_front().unwrap_or(OBJ_AT_REST)
            }
            ReadParam::Pos => {
                self.stats.pos_reads += 1;
                self.position
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_has_no_reply() {
        let mut model = DeviceModel::new();
        assert_eq!(model.handle_line("SET POS 100"), DeviceReply::None);
        assert_eq!(model.target(), 100);
    }

    #[test]
    fn test_get_replies_with_lowercase_name_and_value() {
        let mut model = DeviceModel::new();
        model.handle_line("SET POS 42");
        model.handle_line("SET GTO 1");
        assert_eq!(
            model.handle_line("GET POS"),
            DeviceReply::Line("pos 42".to_string())
        );
    }

    #[test]
    fn test_garbage_is_ignored() {
        let mut model = DeviceModel::new();
        assert_eq!(model.handle_line("FROB POS 1"), DeviceReply::None);
        assert_eq!(model.stats().set_commands, 0);
        assert_eq!(model.stats().get_commands, 0);
    }

    #[test]
    fn test_immediate_activation() {
        let mut model = DeviceModel::new();
        model.handle_line("SET ACT 1");
        assert_eq!(model.handle_line("GET STA"), DeviceReply::Line("sta 3".to_string()));
    }

    #[test]
    fn test_scripted_activation_holds_last_value() {
        let mut model =
            DeviceModel::new().with_activation(ActivationBehavior::Scripted(vec![0, 1, 3]));
        model.handle_line("SET ACT 1");
        assert_eq!(model.handle_line("GET STA"), DeviceReply::Line("sta 0".to_string()));
        assert_eq!(model.handle_line("GET STA"), DeviceReply::Line("sta 1".to_string()));
        assert_eq!(model.handle_line("GET STA"), DeviceReply::Line("sta 3".to_string()));
        assert_eq!(model.handle_line("GET STA"), DeviceReply::Line("sta 3".to_string()));
    }

    #[test]
    fn test_reset_clears_state_and_script() {
        let mut model =
            DeviceModel::new().with_activation(ActivationBehavior::Scripted(vec![1, 3]));
        model.handle_line("SET ACT 1");
        model.handle_line("SET ACT 0");
        assert_eq!(model.handle_line("GET ACT"), DeviceReply::Line("act 0".to_string()));
        assert_eq!(model.handle_line("GET STA"), DeviceReply::Line("sta 0".to_string()));
    }

    #[test]
    fn test_ignore_reset_fault_keeps_act_set() {
        let mut model = DeviceModel::activated().with_fault(Fault::IgnoreReset);
        model.handle_line("SET ACT 0");
        assert_eq!(model.handle_line("GET ACT"), DeviceReply::Line("act 1".to_string()));
    }

    #[test]
    fn test_move_completes_on_gto() {
        let mut model = DeviceModel::activated();
        model.handle_line("SET POS 200");
        assert_eq!(model.position(), 0);
        model.handle_line("SET GTO 1");
        assert_eq!(model.position(), 200);
        assert_eq!(model.handle_line("GET PRE"), DeviceReply::Line("pre 200".to_string()));
    }

    #[test]
    fn test_stale_pre_fault() {
        let mut model = DeviceModel::activated().with_fault(Fault::StalePre);
        model.handle_line("SET POS 200");
        assert_eq!(model.handle_line("GET PRE"), DeviceReply::Line("pre 0".to_string()));
    }

    #[test]
    fn test_obj_script_then_at_rest() {
        let mut model = DeviceModel::activated().with_obj_script(&[0, 0, 2]);
        assert_eq!(model.handle_line("GET OBJ"), DeviceReply::Line("obj 0".to_string()));
        assert_eq!(model.handle_line("GET OBJ"), DeviceReply::Line("obj 0".to_string()));
        assert_eq!(model.handle_line("GET OBJ"), DeviceReply::Line("obj 2".to_string()));
        assert_eq!(model.handle_line("GET OBJ"), DeviceReply::Line("obj 3".to_string()));
    }

    #[test]
    fn test_fault_no_reply() {
        let mut model = DeviceModel::activated().with_fault(Fault::NoReply);
        assert_eq!(model.handle_line("GET POS"), DeviceReply::None);
    }

    #[test]
    fn test_fault_truncated_reply() {
        let mut model = DeviceModel::activated().with_fault(Fault::TruncatedReply);
        assert_eq!(model.handle_line("GET POS"), DeviceReply::Line("pos".to_string()));
    }

    #[test]
    fn test_fault_close_on_get() {
        let mut model = DeviceModel::activated().with_fault(Fault::CloseOnGet);
        assert_eq!(model.handle_line("GET POS"), DeviceReply::Close);
    }

    #[test]
    fn test_stats_count_per_param() {
        let mut model = DeviceModel::activated();
        model.handle_line("SET POS 10");
        model.handle_line("GET STA");
        model.handle_line("GET OBJ");
        model.handle_line("GET OBJ");
        let stats = model.stats();
        assert_eq!(stats.set_commands, 1);
        assert_eq!(stats.get_commands, 3);
        assert_eq!(stats.sta_reads, 1);
        assert_eq!(stats.obj_reads, 2);
    }
}
