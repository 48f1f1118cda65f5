//! Spatial grid definitions
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::quantized::Quantized;

/// Decimal digits used by IONEX grid definitions
pub const DEFAULT_DECIMAL: u8 = 1;

/// Grid definition Error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Range does not contain an integer number of steps,
    /// for example step 3 on [0, 10]
    #[error("step count {0} is not an integer")]
    NonIntegerStepCount(f64),
    /// Null step on a finite range
    #[error("null step on finite range [{min}, {max}]")]
    FiniteRangeZeroStep { min: f64, max: f64 },
    /// Value can't be written with the declared decimal digits
    /// without accuracy loss. For example 0.25 with a single decimal digit.
    #[error("{key} {value} can't be stored with {decimal} decimal digits (would be {rounded})")]
    PrecisionLoss {
        key: &'static str,
        value: f64,
        rounded: f64,
        decimal: u8,
    },
    /// Value has no fixed point image with that many decimal digits
    #[error("{key} {value} overflows with {decimal} decimal digits")]
    QuantizationOverflow {
        key: &'static str,
        value: f64,
        decimal: u8,
    },
    /// Step does not lead from min to max
    #[error("step {step} does not lead from {min} to {max}")]
    InvertedStep { min: f64, max: f64, step: f64 },
}

/// Closed interval from `min` to `max` (both included), browsed with
/// a fixed `step`, and written with `decimal` digits.
/// `min` may be greater than `max`, in which case `step` is negative.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpatialRange {
    min: f64,
    max: f64,
    step: f64,
    decimal: u8,
}

impl SpatialRange {
    /// Builds a new [SpatialRange] written with a single decimal digit
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self, Error> {
        Self::with_decimal(min, max, step, DEFAULT_DECIMAL)
    }

    /// Builds a new [SpatialRange] written with `decimal` digits
    pub fn with_decimal(min: f64, max: f64, step: f64, decimal: u8) -> Result<Self, Error> {
        let range = Self {
            min,
            max,
            step,
            decimal,
        };
        range.verify()?;
        Ok(range)
    }

    /// Builds a single point range, as used by 2D maps height definition
    pub fn single_point(value: f64) -> Result<Self, Error> {
        Self::new(value, value, 0.0)
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn decimal(&self) -> u8 {
        self.decimal
    }

    /// Verifies this definition:
    /// - min, max and step have a fixed point image
    /// - min, max and step are written without accuracy loss
    /// - there is an integer number of steps from min to max
    /// - null step is only permitted on single point ranges
    pub fn verify(&self) -> Result<(), Error> {
        for (key, value) in [
            ("range step", self.step),
            ("range minimum", self.min),
            ("range maximum", self.max),
        ] {
            if !Quantized::fits(value, self.decimal) {
                return Err(Error::QuantizationOverflow {
                    key,
                    value,
                    decimal: self.decimal,
                });
            }
            let rounded = Quantized::round(value, self.decimal);
            if rounded != value {
                return Err(Error::PrecisionLoss {
                    key,
                    value,
                    rounded,
                    decimal: self.decimal,
                });
            }
        }

        let (min, max, step) = self.quantized();

        if step == 0 {
            if max != min {
                return Err(Error::FiniteRangeZeroStep {
                    min: self.min,
                    max: self.max,
                });
            }
            return Ok(());
        }

        if (max - min) % step != 0 {
            return Err(Error::NonIntegerStepCount(
                (self.max - self.min) / self.step,
            ));
        }

        if (max - min) / step < 0 {
            return Err(Error::InvertedStep {
                min: self.min,
                max: self.max,
                step: self.step,
            });
        }

        Ok(())
    }

    /// Returns true if this is a single point range
    pub fn is_single_point(&self) -> bool {
        self.step == 0.0
    }

    /// Number of nodes in this range, edges included
    pub fn node_count(&self) -> usize {
        let (min, max, step) = self.quantized();
        if step == 0 {
            1
        } else {
            ((max - min) / step) as usize + 1
        }
    }

    /// Returns the i-th node coordinates
    pub fn node(&self, i: usize) -> f64 {
        let (min, _, step) = self.quantized();
        Quantized {
            quantized: min + step * i as i64,
            exponent: self.decimal,
        }
        .real_value()
    }

    /// Iterates all nodes from min to max
    pub fn nodes(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.node_count()).map(|i| self.node(i))
    }

    /// Returns the index of the node located at `value`, if it belongs to this range
    pub fn node_index(&self, value: f64) -> Option<usize> {
        let (min, _, step) = self.quantized();
        let q = Quantized::new(value, self.decimal).quantized;
        if step == 0 {
            return if q == min { Some(0) } else { None };
        }
        let offset = q - min;
        if offset % step != 0 {
            return None;
        }
        let index = offset / step;
        if index < 0 || index as usize >= self.node_count() {
            None
        } else {
            Some(index as usize)
        }
    }

    /// Returns the index of the node closest to `value`,
    /// if `value` lies within half a step of this range
    pub fn nearest_index(&self, value: f64) -> Option<usize> {
        let (min, _, step) = self.quantized();
        if step == 0 {
            return self.node_index(value);
        }
        let offset = Quantized::new(value, self.decimal).quantized - min;
        let index = (offset as f64 / step as f64).round();
        if index < 0.0 || index >= self.node_count() as f64 {
            None
        } else {
            Some(index as usize)
        }
    }

    /// Splits the node indexes into contiguous `(start, end)` windows
    /// of `size` nodes. The last window holds the remainder.
    /// A null or negative size returns a single window.
    pub fn chunks(&self, size: isize) -> Vec<(usize, usize)> {
        let count = self.node_count();
        if size <= 0 {
            return vec![(0, count)];
        }
        let size = size as usize;
        (0..count)
            .step_by(size)
            .map(|start| (start, std::cmp::min(start + size, count)))
            .collect()
    }

    fn quantized(&self) -> (i64, i64, i64) {
        (
            Quantized::new(self.min, self.decimal).quantized,
            Quantized::new(self.max, self.decimal).quantized,
            Quantized::new(self.step, self.decimal).quantized,
        )
    }
}

/// Reference grid, defined in terms of latitude, longitude and altitude.
/// 2D maps are defined at a fixed altitude: single point height range.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Grid {
    /// Latitude in decimal degrees
    pub latitude: SpatialRange,
    /// Longitude in decimal degrees
    pub longitude: SpatialRange,
    /// Altitude in km
    pub height: SpatialRange,
}

impl Default for Grid {
    /// Global grid: 2.5° latitude and 5° longitude spacing, at 450 km
    fn default() -> Self {
        Self {
            latitude: SpatialRange {
                min: 87.5,
                max: -87.5,
                step: -2.5,
                decimal: DEFAULT_DECIMAL,
            },
            longitude: SpatialRange {
                min: -180.0,
                max: 180.0,
                step: 5.0,
                decimal: DEFAULT_DECIMAL,
            },
            height: SpatialRange {
                min: 450.0,
                max: 450.0,
                step: 0.0,
                decimal: DEFAULT_DECIMAL,
            },
        }
    }
}

impl Grid {
    /// Returns true if self is defined for 2D maps
    pub fn is_2d_grid(&self) -> bool {
        self.height.is_single_point()
    }
    /// Returns true if self is defined for 3D maps
    pub fn is_3d_grid(&self) -> bool {
        !self.is_2d_grid()
    }
}
