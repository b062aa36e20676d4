use crate::channel::PolarityMode;

/// resolution of the adc in bits
const SAMPLE_BIT_COUNT: u8 = 12;

/// the 12-bit result is left-justified within the 16-bit frame
const FRAME_PADDING_BIT_COUNT: u8 = 16 - SAMPLE_BIT_COUNT; // 4

/// full scale of a unipolar code, 2^12 - 1
const UNIPOLAR_SCALE: f32 = ((1u16 << SAMPLE_BIT_COUNT) - 1) as f32; // 4095

/// full scale of the magnitude of a bipolar code, 2^11 - 1
const BIPOLAR_SCALE: f32 = ((1u16 << (SAMPLE_BIT_COUNT - 1)) - 1) as f32; // 2047

/// sign bit of a bipolar code
const SIGN_BIT: u16 = 1 << (SAMPLE_BIT_COUNT - 1); // 0x800

/// Extract the 12-bit code from the two bytes read back from the converter (msb first).
pub fn code_from_frame(frame: [u8; 2]) -> u16 {
    u16::from_be_bytes(frame) >> FRAME_PADDING_BIT_COUNT
}

/// Convert a 12-bit result code into volts.
///
/// Unipolar codes span `0..=vref`. Bipolar codes are two's complement over
/// `vref / 2`; the code `0x800` (sign bit set, zero magnitude) converts to `+0.0`.
pub fn to_voltage(code: u16, vref: f32, mode: PolarityMode) -> f32 {
    match mode {
        PolarityMode::Unipolar => (code as f32 / UNIPOLAR_SCALE) * vref,
        PolarityMode::Bipolar => {
            let (magnitude, sign) = if code & SIGN_BIT == SIGN_BIT {
                let magnitude = code - SIGN_BIT;
                (magnitude, if magnitude == 0 { 1.0 } else { -1.0 })
            } else {
                (code, 1.0)
            };
            sign * (magnitude as f32 / BIPOLAR_SCALE) * (vref / 2.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VREF: f32 = 4.096;

    fn assert_close(actual: f32, expected: f32) {
        assert!((actual - expected).abs() < 1e-5, "{} != {}", actual, expected);
    }

    #[test]
    fn unipolar_bounds() {
        assert_eq!(to_voltage(0, VREF, PolarityMode::Unipolar), 0.0);
        assert_close(to_voltage(4095, VREF, PolarityMode::Unipolar), 4.096);
        assert_close(to_voltage(2048, VREF, PolarityMode::Unipolar), 2048.0 / 4095.0 * 4.096);
    }

    #[test]
    fn bipolar_midpoint_and_boundaries() {
        assert_eq!(to_voltage(0, VREF, PolarityMode::Bipolar), 0.0);
        assert_close(to_voltage(0x7FF, VREF, PolarityMode::Bipolar), 2.048);
        assert_close(to_voltage(0xFFF, VREF, PolarityMode::Bipolar), -2.048);
        assert_close(to_voltage(0x801, VREF, PolarityMode::Bipolar), -2.048 / 2047.0);
    }

    #[test]
    fn bipolar_sign_bit_with_zero_magnitude_is_positive_zero() {
        let voltage = to_voltage(0x800, VREF, PolarityMode::Bipolar);
        assert_eq!(voltage, 0.0);
        assert!(voltage.is_sign_positive());
    }

    #[test]
    fn frame_is_left_justified() {
        assert_eq!(code_from_frame([0x80, 0x00]), 2048);
        assert_eq!(code_from_frame([0xFF, 0xF0]), 4095);
        // low nibble is padding
        assert_eq!(code_from_frame([0x12, 0x3F]), 0x123);
    }
}
