//! Pattern cell decoder
//!
//! Each channel of each row is a 4-byte packed record:
//!
//! ```text
//! byte 0: ssss pppp   s = sample high nibble, p = period bits 11-8
//! byte 1: pppp pppp   period bits 7-0
//! byte 2: ssss eeee   s = sample low nibble, e = effect
//! byte 3: aaaa aaaa   effect parameter
//! ```

use serde::Serialize;

use super::effects::Effect;

/// One decoded pattern cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ModCell {
    /// Sample number (0 = none; 1-31 in practice)
    pub sample: u8,
    /// Raw 12-bit Amiga period (0 = no note)
    pub period: u16,
    /// Effect number (0-15)
    pub effect: u8,
    /// Effect parameter
    pub param: u8,
}

impl ModCell {
    /// Decode a cell from its 4 packed bytes
    pub fn from_bytes(bytes: &[u8; 4]) -> Self {
        decode_cell(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// No sample, no note, no effect
    pub fn is_empty(&self) -> bool {
        *self == ModCell::default()
    }

    /// Effect as a named command
    pub fn effect_kind(&self) -> Effect {
        Effect::from_nibble(self.effect)
    }
}

/// Decode one packed cell. Every byte combination is valid.
pub fn decode_cell(b0: u8, b1: u8, b2: u8, b3: u8) -> ModCell {
    ModCell {
        sample: (b0 & 0xF0) | ((b2 & 0xF0) >> 4),
        period: (((b0 & 0x0F) as u16) << 8) | b1 as u16,
        effect: b2 & 0x0F,
        param: b3,
    }
}
