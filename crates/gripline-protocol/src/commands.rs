//! Commands that can be sent to the gripper controller.
//!
//! Two forms exist on the wire:
//!
//! - `SET <NAME> <value>` - write a parameter; no response is sent
//! - `GET <NAME>` - read a status parameter, answered with one line

use crate::error::{ProtocolError, ProtocolResult};
use crate::params::{ReadParam, WriteParam};

/// A single outbound command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Write a parameter value.
    Set {
        /// Parameter to write.
        param: WriteParam,
        /// Value to write (already clamped to 0-255).
        value: u8,
    },
    /// Read a status parameter.
    Get {
        /// Parameter to read.
        param: ReadParam,
    },
}

impl Command {
    /// Get the command line without the terminator (for logging).
    pub fn to_command_string(&self) -> String {
        match self {
            Command::Set { param, value } => format!("SET {} {}", param.as_str(), value),
            Command::Get { param } => format!("GET {}", param.as_str()),
        }
    }

    /// Encode the command for transmission, appending the newline terminator.
    pub fn encode(&self) -> Vec<u8> {
        let mut frame = self.to_command_string().into_bytes();
        frame.push(b'\n');
        frame
    }

    /// Parse a command line, as the device receives it.
    ///
    /// The line should already be stripped of its terminator. Used by the
    /// simulated device to interpret incoming frames.
    pub fn parse(line: &str) -> ProtocolResult<Command> {
        let mut tokens = line.split_whitespace();
        let verb = tokens.next().ok_or_else(|| invalid(line))?;

        match verb.to_ascii_uppercase().as_str() {
            "SET" => {
                let name = tokens.next().ok_or_else(|| invalid(line))?;
                let value = tokens.next().ok_or_else(|| invalid(line))?;
                let param = WriteParam::from_str(name).ok_or_else(|| ProtocolError::UnknownParam {
                    name: name.to_string(),
                })?;
                let value = value.parse::<u8>().map_err(|_| ProtocolError::InvalidValue {
                    token: value.to_string(),
                })?;
                Ok(Command::Set { param, value })
            }
            "GET" => {
                let name = tokens.next().ok_or_else(|| invalid(line))?;
                let param = ReadParam::from_str(name).ok_or_else(|| ProtocolError::UnknownParam {
                    name: name.to_string(),
                })?;
                Ok(Command::Get { param })
            }
            _ => Err(invalid(line)),
        }
    }
}

fn invalid(line: &str) -> ProtocolError {
    ProtocolError::InvalidCommand {
        line: line.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_set_command() {
        let cmd = Command::Set {
            param: WriteParam::Pos,
            value: 128,
        };
        assert_eq!(cmd.encode(), b"SET POS 128\n".to_vec());
    }

    #[test]
    fn test_encode_get_command() {
        let cmd = Command::Get {
            param: ReadParam::Sta,
        };
        assert_eq!(cmd.encode(), b"GET STA\n".to_vec());
    }

    #[test]
    fn test_command_string_has_no_terminator() {
        let cmd = Command::Set {
            param: WriteParam::Act,
            value: 1,
        };
        assert_eq!(cmd.to_command_string(), "SET ACT 1");
    }

    #[test]
    fn test_parse_set_command() {
        let cmd = Command::parse("SET POS 200").unwrap();
        assert_eq!(
            cmd,
            Command::Set {
                param: WriteParam::Pos,
                value: 200
            }
        );
    }

    #[test]
    fn test_parse_get_command() {
        let cmd = Command::parse("GET OBJ").unwrap();
        assert_eq!(
            cmd,
            Command::Get {
                param: ReadParam::Obj
            }
        );
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        let cmd = Command::parse("set spe 40").unwrap();
        assert_eq!(
            cmd,
            Command::Set {
                param: WriteParam::Speed,
                value: 40
            }
        );
    }

    #[test]
    fn test_parse_rejects_unknown_verb() {
        assert!(matches!(
            Command::parse("PUT POS 1"),
            Err(ProtocolError::InvalidCommand { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_unknown_param() {
        assert!(matches!(
            Command::parse("SET XYZ 1"),
            Err(ProtocolError::UnknownParam { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_missing_value() {
        assert!(matches!(
            Command::parse("SET POS"),
            Err(ProtocolError::InvalidCommand { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_out_of_range_value() {
        assert!(matches!(
            Command::parse("SET POS 300"),
            Err(ProtocolError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_empty_line() {
        assert!(matches!(
            Command::parse(""),
            Err(ProtocolError::InvalidCommand { .. })
        ));
    }
}
