#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
mod macros;

pub mod descriptor;
pub mod epoch;
pub mod formatter;
pub mod header;
pub mod ionex;
pub mod label;
pub mod map;
pub mod registry;
pub mod spatial;

mod error;
mod quantized;
mod value;

#[cfg(test)]
mod tests;

pub use error::{
    DescriptorError, Error, FormattingError, HeaderError, MapError, RegistryError,
};
pub use quantized::Quantized;
pub use value::Value;

/// Package to include all basic structures
pub mod prelude {
    // export
    pub use crate::{
        descriptor::{expand, unwrap_descriptor, FormatToken},
        error::{DescriptorError, Error, FormattingError, HeaderError, MapError, RegistryError},
        formatter::{fmt_ionex, fmt_record, format_line},
        header::{HeaderBuilder, HeaderFields, MappingFunction},
        ionex::IonexFile,
        label::Label,
        map::{GridCell, GridMap, MapType},
        registry::HeaderRegistry,
        spatial::{Grid, SpatialRange},
        value::Value,
    };

    // pub re-export
    pub use hifitime::{Duration, Epoch};
}
