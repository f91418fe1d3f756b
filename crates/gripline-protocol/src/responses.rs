//! GET response parsing and status value interpretation.

use crate::error::{ProtocolError, ProtocolResult};

/// Parse the value out of a GET response line.
///
/// The device answers a GET with a line of at least two whitespace-separated
/// tokens. The first echoes the parameter name, the second carries the value.
/// Any further tokens are permitted and ignored. The line must already be
/// stripped of its terminator.
pub fn parse_get_response(line: &str) -> ProtocolResult<u8> {
    let mut tokens = line.split_whitespace();
    let _name = tokens.next().ok_or_else(|| too_few(line))?;
    let value = tokens.next().ok_or_else(|| too_few(line))?;
    value.parse::<u8>().map_err(|_| ProtocolError::InvalidValue {
        token: value.to_string(),
    })
}

fn too_few(line: &str) -> ProtocolError {
    ProtocolError::TooFewTokens {
        line: line.to_string(),
    }
}

/// Interpreted value of the `STA` activation status register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationStatus {
    /// Gripper is in the reset state.
    Reset,
    /// Activation is in progress.
    Activating,
    /// Gripper is activated and ready for motion commands.
    Active,
    /// A value outside the documented set.
    Unknown(u8),
}

impl From<u8> for ActivationStatus {
    fn from(value: u8) -> Self {
        match value {
            0 => ActivationStatus::Reset,
            1 => ActivationStatus::Activating,
            3 => ActivationStatus::Active,
            other => ActivationStatus::Unknown(other),
        }
    }
}

impl From<ActivationStatus> for u8 {
    fn from(status: ActivationStatus) -> u8 {
        match status {
            ActivationStatus::Reset => 0,
            ActivationStatus::Activating => 1,
            ActivationStatus::Active => 3,
            ActivationStatus::Unknown(other) => other,
        }
    }
}

impl ActivationStatus {
    /// Whether the gripper has completed activation.
    pub fn is_active(&self) -> bool {
        matches!(self, ActivationStatus::Active)
    }
}

/// Interpreted value of the `OBJ` object detection register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectStatus {
    /// Fingers are moving toward the target, no object detected yet.
    Moving,
    /// Fingers stopped on an object while opening.
    StoppedWhileOpening,
    /// Fingers stopped on an object while closing.
    StoppedWhileClosing,
    /// Fingers are at rest at the requested position, no object detected.
    AtRest,
    /// A value outside the documented set.
    Unknown(u8),
}

impl From<u8> for ObjectStatus {
    fn from(value: u8) -> Self {
        match value {
            0 => ObjectStatus::Moving,
            1 => ObjectStatus::StoppedWhileOpening,
            2 => ObjectStatus::StoppedWhileClosing,
            3 => ObjectStatus::AtRest,
            other => ObjectStatus::Unknown(other),
        }
    }
}

impl From<ObjectStatus> for u8 {
    fn from(status: ObjectStatus) -> u8 {
        match status {
            ObjectStatus::Moving => 0,
            ObjectStatus::StoppedWhileOpening => 1,
            ObjectStatus::StoppedWhileClosing => 2,
            ObjectStatus::AtRest => 3,
            ObjectStatus::Unknown(other) => other,
        }
    }
}

impl ObjectStatus {
    /// Whether the fingers are still in motion.
    pub fn is_moving(&self) -> bool {
        matches!(self, ObjectStatus::Moving)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_get_response() {
        assert_eq!(parse_get_response("POS 128").unwrap(), 128);
        assert_eq!(parse_get_response("sta 3").unwrap(), 3);
    }

    #[test]
    fn test_parse_tolerates_extra_tokens() {
        assert_eq!(parse_get_response("POS 42 extra tokens").unwrap(), 42);
    }

    #[test]
    fn test_parse_tolerates_extra_whitespace() {
        assert_eq!(parse_get_response("  OBJ   3  ").unwrap(), 3);
    }

    #[test]
    fn test_parse_rejects_single_token() {
        assert!(matches!(
            parse_get_response("POS"),
            Err(ProtocolError::TooFewTokens { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_empty_line() {
        assert!(matches!(
            parse_get_response(""),
            Err(ProtocolError::TooFewTokens { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_non_integer_value() {
        assert!(matches!(
            parse_get_response("POS abc"),
            Err(ProtocolError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_out_of_range_value() {
        assert!(matches!(
            parse_get_response("POS 300"),
            Err(ProtocolError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_activation_status_from_value() {
        assert_eq!(ActivationStatus::from(0), ActivationStatus::Reset);
        assert_eq!(ActivationStatus::from(1), ActivationStatus::Activating);
        assert_eq!(ActivationStatus::from(3), ActivationStatus::Active);
        assert_eq!(ActivationStatus::from(7), ActivationStatus::Unknown(7));
        assert!(ActivationStatus::from(3).is_active());
        assert!(!ActivationStatus::from(1).is_active());
    }

    #[test]
    fn test_object_status_from_value() {
        assert_eq!(ObjectStatus::from(0), ObjectStatus::Moving);
        assert_eq!(ObjectStatus::from(2), ObjectStatus::StoppedWhileClosing);
        assert_eq!(ObjectStatus::from(3), ObjectStatus::AtRest);
        assert_eq!(ObjectStatus::from(9), ObjectStatus::Unknown(9));
        assert!(ObjectStatus::from(0).is_moving());
        assert!(!ObjectStatus::from(3).is_moving());
    }
}
