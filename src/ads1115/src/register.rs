use crate::error::Error;

/// Address pointer values of the four device registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Register {
    Conversion = 0x00,
    Config = 0x01,
    LowThreshold = 0x02,
    HighThreshold = 0x03,
}

impl Register {
    pub fn pointer(self) -> u8 {
        self as u8
    }

    /// The conversion register is read-only.
    pub fn is_writable(self) -> bool {
        !matches!(self, Register::Conversion)
    }

    pub fn is_threshold(self) -> bool {
        matches!(self, Register::LowThreshold | Register::HighThreshold)
    }
}

impl TryFrom<u8> for Register {
    type Error = Error;

    fn try_from(pointer: u8) -> Result<Self, Self::Error> {
        match pointer {
            0x00 => Ok(Register::Conversion),
            0x01 => Ok(Register::Config),
            0x02 => Ok(Register::LowThreshold),
            0x03 => Ok(Register::HighThreshold),
            _ => Err(Error::InvalidArgument("register pointer out of range")),
        }
    }
}

impl From<Register> for u8 {
    fn from(register: Register) -> u8 {
        register.pointer()
    }
}

/// Split a register value into the two bytes sent on the wire, high byte first.
pub fn encode_word(value: u16) -> [u8; 2] {
    value.to_be_bytes()
}

pub fn decode_word(bytes: [u8; 2]) -> u16 {
    u16::from_be_bytes(bytes)
}

/// Interpret the conversion register as a two's-complement sample.
pub fn decode_conversion(bytes: [u8; 2]) -> i16 {
    i16::from_be_bytes(bytes)
}

/// Read side of the operational status bit.
///
/// Writing 1 starts a conversion; reading 1 means the device is idle and the
/// conversion register holds a finished result. Returns `true` when the
/// conversion is complete. Only bit 15 is inspected.
pub fn decode_status(bytes: [u8; 2]) -> bool {
    bytes[0] & 0x80 != 0
}

/// Threshold values are sent as-is. The device only compares the top 12 bits.
pub fn encode_threshold(value: i16) -> [u8; 2] {
    value.to_be_bytes()
}

pub fn decode_threshold(bytes: [u8; 2]) -> i16 {
    i16::from_be_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_decode_conversion_extremes() {
        assert_eq!(decode_conversion([0x7F, 0xFF]), 32767);
        assert_eq!(decode_conversion([0x80, 0x00]), -32768);
        assert_eq!(decode_conversion([0xFF, 0xFF]), -1);
        assert_eq!(decode_conversion([0x00, 0x00]), 0);
        assert_eq!(decode_conversion([0x01, 0x00]), 256);
    }

    #[test]
    fn test_decode_status() {
        assert!(decode_status([0x80, 0x00]));
        assert!(decode_status([0x85, 0x83]));
        assert!(!decode_status([0x00, 0x00]));
        assert!(!decode_status([0x7F, 0xFF]));
    }

    #[test]
    fn test_encode_threshold_is_big_endian() {
        assert_eq!(encode_threshold(0x7FF0), [0x7F, 0xF0]);
        assert_eq!(encode_threshold(-16), [0xFF, 0xF0]);
        // Low nibble is passed through untouched
        assert_eq!(encode_threshold(0x1234), [0x12, 0x34]);
    }

    #[test]
    fn test_register_pointers() {
        assert_eq!(u8::from(Register::Conversion), 0x00);
        assert_eq!(u8::from(Register::Config), 0x01);
        assert_eq!(u8::from(Register::LowThreshold), 0x02);
        assert_eq!(u8::from(Register::HighThreshold), 0x03);
        assert_eq!(Register::try_from(0x02), Ok(Register::LowThreshold));
        assert!(Register::try_from(0x04).is_err());
        assert!(!Register::Conversion.is_writable());
        assert!(Register::Config.is_writable());
        assert!(!Register::Config.is_threshold());
    }

    proptest! {
        #[test]
        fn word_survives_the_wire(value: u16) {
            prop_assert_eq!(decode_word(encode_word(value)), value);
        }

        #[test]
        fn threshold_survives_the_wire(value: i16) {
            prop_assert_eq!(decode_threshold(encode_threshold(value)), value);
        }

        #[test]
        fn status_only_looks_at_bit_15(high: u8, low: u8) {
            prop_assert_eq!(decode_status([high | 0x80, low]), true);
            prop_assert_eq!(decode_status([high & 0x7F, low]), false);
        }
    }
}
