//! Encoding of the single configuration byte that starts a conversion.
//!
//! ```text
//! S/D O/S S1 S0 UNI SLP X X
//! ```
//! `S/D` selects single-ended inputs, `O/S S1 S0` select the input and `UNI`
//! selects unipolar conversion. Sleep mode is never requested.

use crate::channel::{PolarityMode, CHANNEL_COUNT};

/// input selection bits for the single-ended channels 0..7.
/// The odd/sign bit is the msb of the nibble, so the pattern is not the channel index shifted.
const CHANNEL_TABLE: [u8; CHANNEL_COUNT as usize] = [
    0x80, // 1 0 0 0
    0xC0, // 1 1 0 0
    0x90, // 1 0 0 1
    0xD0, // 1 1 0 1
    0xA0, // 1 0 1 0
    0xE0, // 1 1 1 0
    0xB0, // 1 0 1 1
    0xF0, // 1 1 1 1
];

/// bit selecting unipolar conversion; cleared for bipolar
pub const UNIPOLAR_BIT: u8 = 0x08;

/// A command byte as written to the converter.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CommandByte(u8);

impl CommandByte {
    pub fn bits(self) -> u8 {
        self.0
    }

    /// Polarity mode encoded in this command
    pub fn mode(self) -> PolarityMode {
        if self.0 & UNIPOLAR_BIT == UNIPOLAR_BIT {
            PolarityMode::Unipolar
        } else {
            PolarityMode::Bipolar
        }
    }
}

impl From<CommandByte> for u8 {
    fn from(command: CommandByte) -> u8 {
        command.0
    }
}

/// Build the command byte for a single-ended conversion of `channel`.
///
/// Indices >= 8 wrap around instead of failing, `encode(8, mode) == encode(0, mode)`.
/// Use [`Channel`](crate::Channel) to reject them up front.
pub fn encode(channel: u8, mode: PolarityMode) -> CommandByte {
    let channel_selection_bits = CHANNEL_TABLE[(channel % CHANNEL_COUNT) as usize];
    let mode_bits = match mode {
        PolarityMode::Unipolar => UNIPOLAR_BIT,
        PolarityMode::Bipolar => 0,
    };
    CommandByte(channel_selection_bits | mode_bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unipolar_sets_mode_bit() {
        for channel in 0..CHANNEL_COUNT {
            let command = encode(channel, PolarityMode::Unipolar);
            assert_eq!(command.bits(), CHANNEL_TABLE[channel as usize] | 0x08);
            assert_eq!(command.mode(), PolarityMode::Unipolar);
        }
    }

    #[test]
    fn bipolar_clears_mode_bit() {
        for channel in 0..CHANNEL_COUNT {
            let command = encode(channel, PolarityMode::Bipolar);
            assert_eq!(command.bits() & UNIPOLAR_BIT, 0);
            assert_eq!(command.bits() & 0xF0, CHANNEL_TABLE[channel as usize]);
            assert_eq!(command.mode(), PolarityMode::Bipolar);
        }
    }

    #[test]
    fn datasheet_patterns() {
        assert_eq!(encode(0, PolarityMode::Unipolar).bits(), 0x88);
        assert_eq!(encode(1, PolarityMode::Unipolar).bits(), 0xC8);
        assert_eq!(encode(3, PolarityMode::Bipolar).bits(), 0xD0);
        assert_eq!(encode(7, PolarityMode::Unipolar).bits(), 0xF8);
    }

    #[test]
    fn channel_index_wraps() {
        for mode in [PolarityMode::Unipolar, PolarityMode::Bipolar].iter() {
            assert_eq!(encode(8, *mode), encode(0, *mode));
            assert_eq!(encode(13, *mode), encode(5, *mode));
            assert_eq!(encode(255, *mode), encode(7, *mode));
        }
    }
}
