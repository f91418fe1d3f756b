//! Parameter names for the SET/GET command set.
//!
//! The gripper controller exposes a small register file addressed by
//! three-letter names. Write parameters are set with `SET`, status
//! parameters are read with `GET`. Every value on the wire is an integer in
//! the 0-255 range.

/// Write parameters accepted by `SET` commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WriteParam {
    /// Activate (1) or reset (0) the gripper (`ACT`).
    Act,
    /// "Go to" - commit a move using the last set position/speed/force (`GTO`).
    Gto,
    /// Force setting, 0-255 (`FOR`).
    Force,
    /// Speed setting, 0-255 (`SPE`).
    Speed,
    /// Target position, 0-255 where 0 is fully open (`POS`).
    Pos,
}

impl WriteParam {
    /// Get the wire name used in commands.
    pub fn as_str(&self) -> &'static str {
        match self {
            WriteParam::Act => "ACT",
            WriteParam::Gto => "GTO",
            WriteParam::Force => "FOR",
            WriteParam::Speed => "SPE",
            WriteParam::Pos => "POS",
        }
    }

    /// Parse a write parameter from its wire name (case-insensitive).
    pub fn from_str(s: &str) -> Option<WriteParam> {
        match s.to_ascii_uppercase().as_str() {
            "ACT" => Some(WriteParam::Act),
            "GTO" => Some(WriteParam::Gto),
            "FOR" => Some(WriteParam::Force),
            "SPE" => Some(WriteParam::Speed),
            "POS" => Some(WriteParam::Pos),
            _ => None,
        }
    }
}

/// Status parameters accepted by `GET` commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReadParam {
    /// Activation register read-back (`ACT`).
    ///
    /// The controller documentation lists only STA/PRE/OBJ/POS as readable,
    /// but the reset sequence confirms deactivation by polling `GET ACT`
    /// and controllers do answer it.
    Act,
    /// Activation status: 0 reset, 1 activating, 3 active (`STA`).
    Sta,
    /// Echo of the last accepted target position (`PRE`).
    Pre,
    /// Object detection / motion status (`OBJ`).
    Obj,
    /// Measured current position (`POS`).
    Pos,
}

impl ReadParam {
    /// Get the wire name used in commands.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadParam::Act => "ACT",
            ReadParam::Sta => "STA",
            ReadParam::Pre => "PRE",
            ReadParam::Obj => "OBJ",
            ReadParam::Pos => "POS",
        }
    }

    /// Parse a status parameter from its wire name (case-insensitive).
    pub fn from_str(s: &str) -> Option<ReadParam> {
        match s.to_ascii_uppercase().as_str() {
            "ACT" => Some(ReadParam::Act),
            "STA" => Some(ReadParam::Sta),
            "PRE" => Some(ReadParam::Pre),
            "OBJ" => Some(ReadParam::Obj),
            "POS" => Some(ReadParam::Pos),
            _ => None,
        }
    }
}

/// Clamp a caller-supplied value into the 0-255 wire range.
///
/// The client clamps every position, speed and force value before
/// transmission, so an out-of-range value never reaches the device.
pub fn clamp_value(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_param_round_trip() {
        for param in [
            WriteParam::Act,
            WriteParam::Gto,
            WriteParam::Force,
            WriteParam::Speed,
            WriteParam::Pos,
        ] {
            assert_eq!(WriteParam::from_str(param.as_str()), Some(param));
        }
    }

    #[test]
    fn test_read_param_round_trip() {
        for param in [
            ReadParam::Act,
            ReadParam::Sta,
            ReadParam::Pre,
            ReadParam::Obj,
            ReadParam::Pos,
        ] {
            assert_eq!(ReadParam::from_str(param.as_str()), Some(param));
        }
    }

    #[test]
    fn test_param_parse_is_case_insensitive() {
        assert_eq!(WriteParam::from_str("pos"), Some(WriteParam::Pos));
        assert_eq!(ReadParam::from_str("sta"), Some(ReadParam::Sta));
    }

    #[test]
    fn test_unknown_param_name() {
        assert_eq!(WriteParam::from_str("XYZ"), None);
        assert_eq!(ReadParam::from_str(""), None);
    }

    #[test]
    fn test_clamp_value() {
        assert_eq!(clamp_value(-5), 0);
        assert_eq!(clamp_value(0), 0);
        assert_eq!(clamp_value(128), 128);
        assert_eq!(clamp_value(255), 255);
        assert_eq!(clamp_value(400), 255);
    }
}
