use crate::types::{ByteValue, Color, Mode};
use enum_dispatch::enum_dispatch;
use int_enum::IntEnum;

/// First byte of every staged command.
/// 0x04 is reserved by klmd and deliberately left out.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, IntEnum)]
pub enum Opcode {
    SetColor = 0x01,
    AddColor = 0x02,
    SetBrightness = 0x03,
    SetMode = 0x05,
    SetPower = 0x07,
    Toggle = 0x08,
}

#[enum_dispatch]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Command {
    SetColor,
    AddColor,
    SetBrightness,
    SetMode,
    SetPower,
    Toggle,
}

#[enum_dispatch(Command)]
pub trait WireCommand {
    fn opcode(&self) -> Opcode;
    /// Fixed for a given opcode.
    fn payload_len(&self) -> usize;
    fn write_payload(&self, buffer: &mut Vec<u8>);
}

impl Command {
    pub fn encoded_len(&self) -> usize {
        1 + self.payload_len()
    }

    pub fn encode_into(&self, buffer: &mut Vec<u8>) {
        buffer.push(self.opcode().int_value());
        self.write_payload(buffer);
    }
}

// Colors
// <editor-fold>
/// Replaces the color list with a single color.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SetColor(pub Color);

impl WireCommand for SetColor {
    fn opcode(&self) -> Opcode {
        Opcode::SetColor
    }

    fn payload_len(&self) -> usize {
        3
    }

    fn write_payload(&self, buffer: &mut Vec<u8>) {
        buffer.extend_from_slice(&self.0.to_bytes());
    }
}

/// Appends a color to the list, used by breathing and colorshift.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct AddColor(pub Color);

impl WireCommand for AddColor {
    fn opcode(&self) -> Opcode {
        Opcode::AddColor
    }

    fn payload_len(&self) -> usize {
        3
    }

    fn write_payload(&self, buffer: &mut Vec<u8>) {
        buffer.extend_from_slice(&self.0.to_bytes());
    }
}
// </editor-fold>

// Single byte settings
// <editor-fold>
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SetBrightness(pub ByteValue);

impl WireCommand for SetBrightness {
    fn opcode(&self) -> Opcode {
        Opcode::SetBrightness
    }

    fn payload_len(&self) -> usize {
        1
    }

    fn write_payload(&self, buffer: &mut Vec<u8>) {
        buffer.push(self.0.get());
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SetMode(pub Mode);

impl WireCommand for SetMode {
    fn opcode(&self) -> Opcode {
        Opcode::SetMode
    }

    fn payload_len(&self) -> usize {
        1
    }

    fn write_payload(&self, buffer: &mut Vec<u8>) {
        buffer.push(self.0.int_value());
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SetPower(pub bool);

impl WireCommand for SetPower {
    fn opcode(&self) -> Opcode {
        Opcode::SetPower
    }

    fn payload_len(&self) -> usize {
        1
    }

    fn write_payload(&self, buffer: &mut Vec<u8>) {
        buffer.push(self.0 as u8);
    }
}
// </editor-fold>

// Toggle
// <editor-fold>
/// Flips the lighting power, no payload.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Toggle;

impl WireCommand for Toggle {
    fn opcode(&self) -> Opcode {
        Opcode::Toggle
    }

    fn payload_len(&self) -> usize {
        0
    }

    fn write_payload(&self, _: &mut Vec<u8>) {}
}
// </editor-fold>

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(command: impl Into<Command>) -> Vec<u8> {
        let command = command.into();
        let mut buffer = Vec::new();
        command.encode_into(&mut buffer);
        assert_eq!(buffer.len(), command.encoded_len());
        buffer
    }

    #[test]
    fn opcode_table() {
        assert_eq!(encode(SetColor(Color::from_rgb(1, 2, 3))), [0x01, 1, 2, 3]);
        assert_eq!(encode(AddColor(Color::from_rgb(4, 5, 6))), [0x02, 4, 5, 6]);
        assert_eq!(encode(SetBrightness(ByteValue::from(10))), [0x03, 0x0A]);
        assert_eq!(encode(SetMode(Mode::Breathing)), [0x05, 0x02]);
        assert_eq!(encode(SetPower(false)), [0x07, 0x00]);
        assert_eq!(encode(SetPower(true)), [0x07, 0x01]);
        assert_eq!(encode(Toggle), [0x08]);
    }

    #[test]
    fn reserved_opcode_is_unassigned() {
        assert!(Opcode::from_int(0x04).is_err());
        assert!(Opcode::from_int(0x00).is_err());
    }

    #[test]
    fn encoding_appends() {
        let mut buffer = vec![0xAA];
        Command::from(Toggle).encode_into(&mut buffer);
        Command::from(SetMode(Mode::Off)).encode_into(&mut buffer);
        assert_eq!(buffer, [0xAA, 0x08, 0x05, 0x00]);
    }
}
