use crate::errors::{self, KlmError};
use int_enum::IntEnum;
use std::convert::TryFrom;

/// An integer that is known to fit in a single protocol byte.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct ByteValue(u8);

impl ByteValue {
    /// Fails with [`KlmError::OutOfRange`] instead of truncating.
    pub fn new(value: impl Into<i64>) -> errors::Result<Self> {
        let value = value.into();
        u8::try_from(value)
            .map(Self)
            .map_err(|_| KlmError::OutOfRange { value })
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for ByteValue {
    type Error = KlmError;

    fn try_from(value: i64) -> errors::Result<Self> {
        Self::new(value)
    }
}

impl From<u8> for ByteValue {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<ByteValue> for u8 {
    fn from(value: ByteValue) -> Self {
        value.0
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Color {
    r: ByteValue,
    g: ByteValue,
    b: ByteValue,
}

impl Color {
    /// Every channel goes through [`ByteValue::new`].
    pub fn new(
        r: impl Into<i64>,
        g: impl Into<i64>,
        b: impl Into<i64>,
    ) -> errors::Result<Self> {
        Ok(Self {
            r: ByteValue::new(r)?,
            g: ByteValue::new(g)?,
            b: ByteValue::new(b)?,
        })
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: ByteValue(r),
            g: ByteValue(g),
            b: ByteValue(b),
        }
    }

    pub const fn r(&self) -> u8 {
        self.r.0
    }

    pub const fn g(&self) -> u8 {
        self.g.0
    }

    pub const fn b(&self) -> u8 {
        self.b.0
    }

    pub const fn to_bytes(&self) -> [u8; 3] {
        [self.r.0, self.g.0, self.b.0]
    }
}

/// Lighting modes understood by klmd.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, IntEnum)]
pub enum Mode {
    Off = 0x00,
    Steady = 0x01,
    Breathing = 0x02,
    ColorShift = 0x03,
}

/// Status byte sent back by klmd after each frame.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, IntEnum)]
pub enum ResultStatus {
    Ok = 0x00,
    Error = 0x01,
    BadRequest = 0x02,
}

impl ResultStatus {
    pub fn decode(byte: u8) -> errors::Result<Self> {
        Self::from_int(byte).map_err(|_| KlmError::ProtocolViolation { status: byte })
    }

    pub fn is_ok(self) -> bool {
        self == Self::Ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_value_accepts_whole_range() {
        for n in 0..=255i64 {
            assert_eq!(ByteValue::new(n).unwrap().get() as i64, n);
        }
    }

    #[test]
    fn byte_value_rejects_outside_range() {
        for &n in &[-1i64, 256, 1000, i64::MIN, i64::MAX] {
            match ByteValue::new(n) {
                Err(KlmError::OutOfRange { value }) => assert_eq!(value, n),
                other => panic!("expected OutOfRange for {}, got {:?}", n, other),
            }
        }
        assert!(ByteValue::try_from(-20i64).is_err());
    }

    #[test]
    fn color_bytes_keep_channel_order() {
        let color = Color::new(0x12, 0x34, 0x56).unwrap();
        assert_eq!(color.to_bytes(), [0x12, 0x34, 0x56]);
        assert_eq!((color.r(), color.g(), color.b()), (0x12, 0x34, 0x56));
        assert_eq!(color, Color::from_rgb(0x12, 0x34, 0x56));
    }

    #[test]
    fn color_rejects_any_bad_channel() {
        assert!(matches!(
            Color::new(256, 0, 0),
            Err(KlmError::OutOfRange { value: 256 })
        ));
        assert!(matches!(
            Color::new(0, -1, 0),
            Err(KlmError::OutOfRange { value: -1 })
        ));
        assert!(matches!(
            Color::new(0, 0, 300),
            Err(KlmError::OutOfRange { value: 300 })
        ));
    }

    #[test]
    fn mode_codes() {
        assert_eq!(Mode::Off.int_value(), 0x00);
        assert_eq!(Mode::Steady.int_value(), 0x01);
        assert_eq!(Mode::Breathing.int_value(), 0x02);
        assert_eq!(Mode::ColorShift.int_value(), 0x03);
        assert!(Mode::from_int(0x04).is_err());
    }

    #[test]
    fn decode_known_statuses() {
        assert_eq!(ResultStatus::decode(0x00).unwrap(), ResultStatus::Ok);
        assert_eq!(ResultStatus::decode(0x01).unwrap(), ResultStatus::Error);
        assert_eq!(ResultStatus::decode(0x02).unwrap(), ResultStatus::BadRequest);
        assert!(ResultStatus::Ok.is_ok());
        assert!(!ResultStatus::BadRequest.is_ok());
    }

    #[test]
    fn decode_rejects_every_other_byte() {
        let mut valid = 0;
        for byte in 0..=u8::MAX {
            match ResultStatus::decode(byte) {
                Ok(_) => valid += 1,
                Err(KlmError::ProtocolViolation { status }) => assert_eq!(status, byte),
                Err(err) => panic!("unexpected error {:?}", err),
            }
        }
        assert_eq!(valid, 3);
    }
}
