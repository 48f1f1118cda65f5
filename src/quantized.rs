//! Grid coordinates quantization

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fixed point image of a coordinate, `round(value * 10^exponent)`.
/// Used wherever grid coordinates need exact comparison or arithmetic.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Quantized {
    pub exponent: u8,
    pub quantized: i64,
}

impl Quantized {
    /// Builds new [Quantized] value
    pub fn new(value: f64, exponent: u8) -> Self {
        let quantized = (value * Self::scaling(exponent)).round() as i64;
        Self {
            quantized,
            exponent,
        }
    }

    /// Returns true if `value` has an [i64] image with `exponent` digits
    pub fn fits(value: f64, exponent: u8) -> bool {
        let scaled = (value * Self::scaling(exponent)).round();
        scaled.is_finite() && scaled.abs() < i64::MAX as f64
    }

    /// Returns real [f64] value
    pub fn real_value(&self) -> f64 {
        self.quantized as f64 / Self::scaling(self.exponent)
    }

    /// Rounds given value to `exponent` decimal digits
    pub fn round(value: f64, exponent: u8) -> f64 {
        Self::new(value, exponent).real_value()
    }

    fn scaling(exponent: u8) -> f64 {
        10.0_f64.powi(exponent as i32)
    }
}
