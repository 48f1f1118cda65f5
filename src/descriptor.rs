//! Fixed width format descriptors, like `2X, 3F6.1, I3, A2`.
use std::{fmt::Display, str::FromStr};

use itertools::Itertools;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::DescriptorError;

/// Descriptor tokens separator
pub const SEPARATOR: &str = ", ";

/// [FormatToken] describes a single fixed width field
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FormatToken {
    /// `nX`: n blank characters
    Literal(usize),
    /// `Fw.d`: real number, `w` wide with `d` decimal digits
    Float(usize, usize),
    /// `Iw`: integer number, `w` wide
    Integer(usize),
    /// `Aw`: text, `w` wide
    Text(usize),
}

impl FormatToken {
    /// Field width, in characters
    pub fn width(&self) -> usize {
        match self {
            Self::Literal(w) | Self::Float(w, _) | Self::Integer(w) | Self::Text(w) => *w,
        }
    }

    /// Returns true if this token consumes a value
    pub fn is_data(&self) -> bool {
        !matches!(self, Self::Literal(_))
    }
}

impl Display for FormatToken {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Literal(w) => write!(f, "{}X", w),
            Self::Float(w, d) => write!(f, "F{}.{}", w, d),
            Self::Integer(w) => write!(f, "I{}", w),
            Self::Text(w) => write!(f, "A{}", w),
        }
    }
}

impl FromStr for FormatToken {
    type Err = DescriptorError;
    /// Parses a single token, without repeat count
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match parse_token(token)? {
            (1, token) => Ok(token),
            _ => Err(DescriptorError::UnknownFormatSpecifier(token.to_string())),
        }
    }
}

/// Parses a raw token into (repeat count, token)
fn parse_token(raw: &str) -> Result<(usize, FormatToken), DescriptorError> {
    let token = raw.trim();
    let error = || DescriptorError::UnknownFormatSpecifier(token.to_string());

    let parse_count = |count: &str| -> Result<usize, DescriptorError> {
        match count.parse::<usize>() {
            Ok(0) | Err(_) => Err(error()),
            Ok(n) => Ok(n),
        }
    };

    if let Some(width) = token.strip_suffix('X') {
        // nX: the count is the width
        let width = if width.is_empty() {
            1
        } else {
            parse_count(width)?
        };
        return Ok((1, FormatToken::Literal(width)));
    }

    let offset = token.find(|c: char| !c.is_ascii_digit()).ok_or_else(error)?;
    let (repeat, rem) = token.split_at(offset);

    let repeat = if repeat.is_empty() {
        1
    } else {
        parse_count(repeat)?
    };

    let mut chars = rem.chars();
    let kind = chars.next().ok_or_else(error)?;
    let size = chars.as_str();

    let token = match kind {
        'F' => {
            let (width, decimals) = size.split_once('.').ok_or_else(error)?;
            if decimals.is_empty() || !decimals.chars().all(|c| c.is_ascii_digit()) {
                return Err(error());
            }
            let decimals = decimals.parse::<usize>().map_err(|_| error())?;
            FormatToken::Float(parse_count(width)?, decimals)
        },
        'I' => FormatToken::Integer(parse_count(size)?),
        'A' => FormatToken::Text(parse_count(size)?),
        _ => return Err(error()),
    };

    Ok((repeat, token))
}

/// Expands given descriptor into a flat list of [FormatToken]s,
/// repeated tokens being unrolled: `3F6.1` gives three `F6.1`.
/// An empty descriptor gives an empty list.
pub fn expand(descriptor: &str) -> Result<Vec<FormatToken>, DescriptorError> {
    let mut tokens = Vec::new();
    if descriptor.trim().is_empty() {
        return Ok(tokens);
    }
    for raw in descriptor.split(',') {
        let (repeat, token) = parse_token(raw)?;
        tokens.extend(std::iter::repeat(token).take(repeat));
    }
    Ok(tokens)
}

/// Expands given descriptor and returns its textual form
pub fn unwrap_descriptor(descriptor: &str) -> Result<String, DescriptorError> {
    Ok(expand(descriptor)?.iter().join(SEPARATOR))
}

/// Number of value consuming fields in this descriptor
pub fn data_fields(tokens: &[FormatToken]) -> usize {
    tokens.iter().filter(|t| t.is_data()).count()
}
