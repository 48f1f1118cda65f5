use thiserror::Error;

use crate::{label::Label, spatial::Error as SpatialError};

/// Errors that may rise when interpreting a format descriptor
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DescriptorError {
    /// Token kind is not one of X, F, I, A or its counts are invalid
    #[error("unknown format specifier \"{0}\"")]
    UnknownFormatSpecifier(String),
}

/// Errors that may rise in Formatting process
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormattingError {
    #[error("invalid descriptor: {0}")]
    Descriptor(#[from] DescriptorError),
    /// Rendered field does not fit in its declared width
    #[error("value {value} does not fit in {width} columns ({decimals} decimals)")]
    WidthOverflow {
        value: String,
        width: usize,
        decimals: usize,
    },
    /// Rendered field does not read back as the source value
    #[error("\"{formatted}\" does not represent {value}")]
    LossyRoundTrip { formatted: String, value: String },
    /// Number of values does not match the data fields of the descriptor
    #[error("\"{descriptor}\" expects {expected} values, got {found}: {values}")]
    ArityMismatch {
        expected: usize,
        found: usize,
        descriptor: String,
        values: String,
    },
    /// Text value handed to a numeric field
    #[error("\"{0}\" is not a numeric value")]
    NotNumeric(String),
}

/// Errors that may rise when loading the header description table
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Label is either missing a description or is not a known label
    #[error("no format/description pair for label \"{0}\"")]
    MissingDescription(String),
    /// Description table is not a mapping of text to text
    #[error("description for \"{key}\" should be text, found {found}")]
    TypeMismatch { key: String, found: String },
    #[error("description table parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid builtin descriptor: {0}")]
    Descriptor(#[from] DescriptorError),
}

/// Header production errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HeaderError {
    /// Line order does not start with the version line
    /// or does not conclude with the end of header
    #[error("header line order should start with \"{first}\" and end with \"{last}\"")]
    MalformedOrder { first: Label, last: Label },
    #[error("unknown header label \"{0}\"")]
    UnknownLabel(String),
    /// Single instance label was already formatted
    #[error("duplicate header line \"{0}\"")]
    DuplicateLine(Label),
    #[error("header formatting error: {0}")]
    Formatting(#[from] FormattingError),
}

/// Map production errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MapError {
    /// Latitudes do not match the latitude grid
    #[error("some latitudes are missing, got {0:?}")]
    MissingLatitudes(Vec<f64>),
    /// Longitudes of one latitude row do not match the longitude grid
    #[error("check longitudes {longitudes:?} for latitude {lat}: some values are missing")]
    MissingLongitudeCell { lat: f64, longitudes: Vec<f64> },
    #[error("cell ({lat}, {lon}) defined more than once")]
    DuplicateCell { lat: f64, lon: f64 },
    #[error("no {map_type} map at {epoch}")]
    NoSuchMap { map_type: String, epoch: String },
    #[error("map formatting error: {0}")]
    Formatting(#[from] FormattingError),
}

/// Top level error
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Descriptor(#[from] DescriptorError),
    #[error(transparent)]
    Formatting(#[from] FormattingError),
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Header(#[from] HeaderError),
    #[error(transparent)]
    Spatial(#[from] SpatialError),
    #[error(transparent)]
    Map(#[from] MapError),
}
