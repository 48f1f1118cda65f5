//! Fixed width line encoder
use itertools::Itertools;

use crate::{
    descriptor::{data_fields, expand, FormatToken},
    error::FormattingError,
    value::{Number, Value},
};

/// Width of the data section of header lines: labels start at this column
pub const HEADER_DATA_WIDTH: usize = 60;

/// Total width of every IONEX line
pub const LINE_WIDTH: usize = 80;

/// Encodes `values` following `descriptor`, for example `"I3, 2X, F7.3, 3X, A2, 10X"`.
/// Every data field is verified: it must fit in its width and numerical fields must
/// read back as the original value. Resulting line is not padded.
/// ```
/// use ionex_formatter::{formatter::format_line, values};
/// let line = format_line(&values![1, 2, "3"], "I3, 2X, F7.3, 3X, A2, 10X")
///     .unwrap();
/// assert_eq!(line, "  1    2.000    3          ");
/// ```
pub fn format_line(values: &[Value], descriptor: &str) -> Result<String, FormattingError> {
    let tokens = expand(descriptor)?;

    let expected = data_fields(&tokens);
    let arity_error = || FormattingError::ArityMismatch {
        expected,
        found: values.len(),
        descriptor: descriptor.to_string(),
        values: values.iter().join(", "),
    };

    if expected != values.len() {
        return Err(arity_error());
    }

    let mut values = values.iter();
    let mut line = String::with_capacity(tokens.iter().map(|t| t.width()).sum());

    for token in tokens.iter() {
        if token.is_data() {
            let value = values.next().ok_or_else(arity_error)?;
            line.push_str(&format_field(token, value)?);
        } else {
            line.push_str(&" ".repeat(token.width()));
        }
    }

    Ok(line)
}

/// Encodes a single field, verifying its width and that it
/// reads back as the original value.
pub fn format_field(token: &FormatToken, value: &Value) -> Result<String, FormattingError> {
    let width = token.width();

    let (formatted, number, decimals) = match token {
        FormatToken::Literal(width) => return Ok(" ".repeat(*width)),
        FormatToken::Float(_, decimals) => {
            let number = value.number()?;
            let formatted = match number {
                Number::Integer(i) => format!("{:.*}", *decimals, i as f64),
                Number::Real(f) => format!("{:.*}", *decimals, f),
            };
            (formatted, Some(number), *decimals)
        },
        FormatToken::Integer(_) => {
            let number = value.number()?;
            let formatted = match number {
                Number::Integer(i) => i.to_string(),
                Number::Real(f) => format!("{:.0}", f),
            };
            (formatted, Some(number), 0)
        },
        FormatToken::Text(_) => (value.to_string(), None, 0),
    };

    // numbers are right-justified, even in text fields
    let right_justified = number.is_some() || value.is_numeric();

    if formatted.chars().count() > width {
        return Err(FormattingError::WidthOverflow {
            value: value.to_string(),
            width,
            decimals,
        });
    }

    if let Some(number) = number {
        if !reads_back_as(&formatted, number) {
            return Err(FormattingError::LossyRoundTrip {
                formatted,
                value: value.to_string(),
            });
        }
    }

    if right_justified {
        Ok(format!("{:>width$}", formatted, width = width))
    } else {
        Ok(format!("{:<width$}", formatted, width = width))
    }
}

/// Returns true if formatted text represents `number` exactly.
/// Integers are compared as integers, never through their [f64] image.
fn reads_back_as(formatted: &str, number: Number) -> bool {
    match number {
        Number::Integer(i) => match formatted.split_once('.') {
            None => formatted.parse::<i64>() == Ok(i),
            Some((integer, fraction)) => {
                fraction.chars().all(|c| c == '0')
                    && integer.parse::<i128>() == Ok(i as i128)
            },
        },
        Number::Real(f) => formatted.parse::<f64>() == Ok(f),
    }
}

/// Pads (or truncates) given content to exactly [LINE_WIDTH] characters
pub fn fmt_record(content: &str) -> String {
    let length = content.chars().count();
    if length > LINE_WIDTH {
        content.chars().take(LINE_WIDTH).collect()
    } else {
        format!("{:<width$}", content, width = LINE_WIDTH)
    }
}

/// Formats an IONEX labeled line: content spans the first
/// [HEADER_DATA_WIDTH] columns, followed by the label
pub fn fmt_ionex(content: &str, label: &str) -> String {
    fmt_record(&format!(
        "{:<padding$}{}",
        content,
        label,
        padding = HEADER_DATA_WIDTH
    ))
}

/// Greedily packs the words of `text` into lines at most `width` wide.
/// Each word is followed by its separator, which is kept on the last word
/// of each line unless it would exceed `width`. Blank text gives no lines.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let length = current.chars().count() + word.chars().count() + 1;
        if length > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        current.push_str(word);
        if current.chars().count() < width {
            current.push(' ');
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
