//! IONEX header production
use std::collections::HashMap;

use hifitime::Epoch;

#[cfg(feature = "log")]
use log::{debug, error};

use crate::{
    epoch::{epoch_values, fmt_pgm_date},
    error::HeaderError,
    formatter::{fmt_ionex, format_line, wrap_words, HEADER_DATA_WIDTH},
    label::Label,
    registry::HeaderRegistry,
    spatial::{Grid, SpatialRange},
    value::Value,
};

mod fields;

pub use fields::{HeaderFields, MappingFunction};

/// Type character of IONEX files, written in the version line
pub const IONEX_TYPE: &str = "I";

/// [HeaderBuilder] accumulates formatted header lines per [Label]
/// and assembles them following a line order.
/// Every call is validated entirely before any line is stored.
#[derive(Debug, Clone)]
pub struct HeaderBuilder<'a> {
    registry: &'a HeaderRegistry,
    lines: HashMap<Label, Vec<String>>,
    order: Vec<Label>,
}

impl<'a> HeaderBuilder<'a> {
    /// Creates a new [HeaderBuilder] using the default line order
    pub fn new(registry: &'a HeaderRegistry) -> Self {
        Self {
            registry,
            lines: HashMap::new(),
            order: Label::default_header_order(),
        }
    }

    /// Defines the order of header lines. [None] restores the default order.
    /// Custom orders must start with [Label::FIRST] and conclude with [Label::LAST].
    pub fn set_line_order(&mut self, order: Option<Vec<Label>>) -> Result<(), HeaderError> {
        let order = order.unwrap_or_else(Label::default_header_order);
        if order.first() != Some(&Label::FIRST) || order.last() != Some(&Label::LAST) {
            #[cfg(feature = "log")]
            error!("invalid header line order: {:?}", order);
            return Err(HeaderError::MalformedOrder {
                first: Label::FIRST,
                last: Label::LAST,
            });
        }
        #[cfg(feature = "log")]
        debug!("header line order: {} labels", order.len());
        self.order = order;
        Ok(())
    }

    /// Defines the order of header lines from label texts
    pub fn set_line_order_by_name(&mut self, order: &[&str]) -> Result<(), HeaderError> {
        let labels = order
            .iter()
            .map(|text| self.registry.label(text))
            .collect::<Result<Vec<_>, _>>()?;
        self.set_line_order(Some(labels))
    }

    /// Current line order
    pub fn line_order(&self) -> &[Label] {
        &self.order
    }

    /// Lines formatted so far for this [Label]
    pub fn lines(&self, label: Label) -> &[String] {
        self.lines
            .get(&label)
            .map(|lines| lines.as_slice())
            .unwrap_or_default()
    }

    /// Formats `values` with the [Label] descriptor and appends the resulting line
    pub fn update_label(&mut self, label: Label, values: &[Value]) -> Result<(), HeaderError> {
        let line = self.format(label, values)?;
        self.commit(label, vec![line])
    }

    /// Wraps long text into as many lines as needed, each carrying this [Label].
    /// Blank text does not produce any line.
    pub fn append_long_text(&mut self, label: Label, text: &str) -> Result<(), HeaderError> {
        let lines = wrap_words(text, HEADER_DATA_WIDTH)
            .iter()
            .map(|line| self.format(label, &[Value::from(line)]))
            .collect::<Result<Vec<_>, _>>()?;
        if lines.is_empty() {
            return Ok(());
        }
        self.commit(label, lines)
    }

    /// Formats the `IONEX VERSION / TYPE` line
    pub fn set_version_type(
        &mut self,
        version: f64,
        file_type: &str,
        system: &str,
    ) -> Result<(), HeaderError> {
        self.update_label(
            Label::VersionType,
            &values![version, file_type, system],
        )
    }

    /// Formats the `PGM / RUN BY / DATE` line
    pub fn set_program(
        &mut self,
        program: &str,
        run_by: &str,
        date: Epoch,
    ) -> Result<(), HeaderError> {
        self.update_label(
            Label::ProgramRunByDate,
            &values![program, run_by, fmt_pgm_date(date)],
        )
    }

    /// Word wraps a free text description
    pub fn set_description(&mut self, description: &str) -> Result<(), HeaderError> {
        self.append_long_text(Label::Description, description)
    }

    /// Formats one description line per element, blank lines included
    pub fn set_description_lines<S: AsRef<str>>(&mut self, lines: &[S]) -> Result<(), HeaderError> {
        self.update_lines(Label::Description, lines)
    }

    /// Formats one comment line per element
    pub fn add_comments<S: AsRef<str>>(&mut self, comments: &[S]) -> Result<(), HeaderError> {
        self.update_lines(Label::Comment, comments)
    }

    /// Lists contributing sites, as comments
    pub fn set_sites<S: AsRef<str>>(&mut self, sites: &[S]) -> Result<(), HeaderError> {
        let sites = sites.iter().map(|site| site.as_ref()).collect::<Vec<_>>();
        self.append_long_text(Label::Comment, &sites.join(" "))
    }

    /// Formats both `EPOCH OF FIRST MAP` and `EPOCH OF LAST MAP`
    pub fn set_epoch_range(&mut self, first: Epoch, last: Epoch) -> Result<(), HeaderError> {
        let first = self.format(Label::EpochOfFirstMap, &epoch_values(first))?;
        let last = self.format(Label::EpochOfLastMap, &epoch_values(last))?;
        self.check_duplicate(Label::EpochOfFirstMap)?;
        self.check_duplicate(Label::EpochOfLastMap)?;
        self.commit(Label::EpochOfFirstMap, vec![first])?;
        self.commit(Label::EpochOfLastMap, vec![last])
    }

    /// Formats the height, latitude and longitude grid definitions
    pub fn set_spatial_grid(&mut self, grid: &Grid) -> Result<(), HeaderError> {
        let definitions = [
            (Label::HeightGrid, &grid.height),
            (Label::LatitudeGrid, &grid.latitude),
            (Label::LongitudeGrid, &grid.longitude),
        ];

        let mut formatted = Vec::with_capacity(definitions.len());
        for (label, range) in definitions {
            self.check_duplicate(label)?;
            formatted.push((label, self.format(label, &range_values(range))?));
        }

        for (label, line) in formatted {
            self.commit(label, vec![line])?;
        }
        Ok(())
    }

    /// Assembles all lines following the line order.
    /// Labels that were never formatted do not contribute.
    pub fn assemble(&self) -> Vec<String> {
        self.order
            .iter()
            .flat_map(|label| self.lines(*label).iter().cloned())
            .collect()
    }

    fn update_lines<S: AsRef<str>>(&mut self, label: Label, texts: &[S]) -> Result<(), HeaderError> {
        let lines = texts
            .iter()
            .map(|text| self.format(label, &[Value::from(text.as_ref())]))
            .collect::<Result<Vec<_>, _>>()?;
        if lines.is_empty() {
            return Ok(());
        }
        self.commit(label, lines)
    }

    fn format(&self, label: Label, values: &[Value]) -> Result<String, HeaderError> {
        let content = format_line(values, self.registry.descriptor(label))?;
        Ok(fmt_ionex(&content, label.as_ref()))
    }

    fn check_duplicate(&self, label: Label) -> Result<(), HeaderError> {
        if !label.is_multiline() && !self.lines(label).is_empty() {
            return Err(HeaderError::DuplicateLine(label));
        }
        Ok(())
    }

    fn commit(&mut self, label: Label, lines: Vec<String>) -> Result<(), HeaderError> {
        self.check_duplicate(label)?;
        self.lines.entry(label).or_default().extend(lines);
        Ok(())
    }
}

fn range_values(range: &SpatialRange) -> Vec<Value> {
    values![range.min(), range.max(), range.step()]
}
