//! Values handed to the fixed width encoder
use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::FormattingError;

/// [Value] is a single datum to be encoded in a fixed width field
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    Integer(i64),
    Float(f64),
    Text(String),
}

/// Numerical interpretation of a [Value]
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) enum Number {
    Integer(i64),
    Real(f64),
}

impl Value {
    /// Interprets self as a number. Text is accepted when it reads as a number.
    pub(crate) fn number(&self) -> Result<Number, FormattingError> {
        match self {
            Self::Integer(i) => Ok(Number::Integer(*i)),
            Self::Float(f) => Ok(Number::Real(*f)),
            Self::Text(s) => {
                let trimmed = s.trim();
                if let Ok(i) = trimmed.parse::<i64>() {
                    Ok(Number::Integer(i))
                } else if trimmed.parse::<i128>().is_ok() {
                    // integer text out of i64 range has no exact image
                    Err(FormattingError::LossyRoundTrip {
                        formatted: trimmed.to_string(),
                        value: s.clone(),
                    })
                } else if let Ok(f) = trimmed.parse::<f64>() {
                    Ok(Number::Real(f))
                } else {
                    Err(FormattingError::NotNumeric(s.clone()))
                }
            },
        }
    }

    /// Returns true if self is a finite number, or text that reads as one
    pub(crate) fn is_numeric(&self) -> bool {
        match self.number() {
            Ok(Number::Integer(_)) => true,
            Ok(Number::Real(f)) => f.is_finite(),
            Err(_) => false,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{}", i),
            Self::Float(v) => write!(f, "{}", v),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

macro_rules! from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Self::Integer(v as i64)
                }
            }
        )*
    };
}

from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<usize> for Value {
    /// Sizes beyond [i64::MAX] are kept as text
    fn from(v: usize) -> Self {
        match i64::try_from(v) {
            Ok(i) => Self::Integer(i),
            Err(_) => Self::Text(v.to_string()),
        }
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float(v as f64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Self::Text(s.clone())
    }
}
