//! Raw count to temperature conversion
//!
//! Each 13-bit field is a temperature count on a fixed linear scale:
//! 0.05 degrees Celsius per count, offset by -20.0. The constants are part of
//! the probe's wire format and must not be folded or reordered; the
//! multiply-then-subtract order fixes the floating-point rounding.

use crate::packed::{FieldSet, FIELD_COUNT};

/// Degrees Celsius per raw count
pub const SCALE: f64 = 0.05;

/// Temperature of a zero count, in degrees Celsius
pub const OFFSET: f64 = -20.0;

/// Convert a raw 13-bit count to degrees Celsius
///
/// `0` maps to `-20.0` and `8191` to `389.55`.
#[inline]
pub fn physical_value(raw: u16) -> f64 {
    raw as f64 * SCALE + OFFSET
}

#[inline]
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 1.8 + 32.0
}

/// Physical values for all eight fields, in field order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Temperatures(pub [f64; FIELD_COUNT]);

impl Temperatures {
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }

    pub fn to_fahrenheit(&self) -> Self {
        Self(self.0.map(celsius_to_fahrenheit))
    }
}

impl From<&FieldSet> for Temperatures {
    fn from(fields: &FieldSet) -> Self {
        Self(fields.as_array().map(physical_value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packed::{decode, PackedBuffer, FIELD_MAX};

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_physical_value_bounds() {
        assert_eq!(physical_value(0), -20.0);
        assert!((physical_value(FIELD_MAX) - 389.55).abs() < EPSILON);
    }

    #[test]
    fn test_physical_value_step_is_constant() {
        for raw in 0..FIELD_MAX {
            let step = physical_value(raw + 1) - physical_value(raw);
            assert!(step > 0.0, "not increasing at {}", raw);
            assert!((step - 0.05).abs() < EPSILON, "step {} at {}", step, raw);
        }
    }

    #[test]
    fn test_physical_value_typical_readings() {
        let test_cases = [(400, 0.0), (823, 21.15), (772, 18.6), (2400, 100.0)];

        for (raw, expected) in test_cases {
            let actual = physical_value(raw);
            assert!(
                (actual - expected).abs() < EPSILON,
                "raw {}: expected {}, got {}",
                raw,
                expected,
                actual
            );
        }
    }

    #[test]
    fn test_celsius_to_fahrenheit() {
        assert_eq!(celsius_to_fahrenheit(0.0), 32.0);
        assert_eq!(celsius_to_fahrenheit(100.0), 212.0);
        assert_eq!(celsius_to_fahrenheit(-40.0), -40.0);
    }

    #[test]
    fn test_temperatures_from_fields() {
        let buffer = PackedBuffer::new([
            0x37, 0xc3, 0x64, 0x74, 0x8c, 0x8a, 0xf1, 0x30, 0x10, 0x06, 0xc2, 0x20, 0x18,
        ]);
        let temps = Temperatures::from(&decode(&buffer));
        let expected = [21.15, 20.3, 19.85, 19.45, 19.15, 18.8, 18.8, 18.6];

        for (actual, expected) in temps.iter().zip(expected) {
            assert!((actual - expected).abs() < EPSILON);
        }

        let fahrenheit = temps.to_fahrenheit();
        assert!((fahrenheit.0[0] - 70.07).abs() < EPSILON);
    }
}
