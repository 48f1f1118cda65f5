//! Gridded IONEX maps
use std::collections::BTreeMap;

use hifitime::Epoch;
use itertools::Itertools;

#[cfg(feature = "log")]
use log::{debug, error};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    epoch::epoch_values,
    error::MapError,
    formatter::{fmt_ionex, fmt_record, format_line},
    label::Label,
    quantized::Quantized,
    spatial::SpatialRange,
    value::Value,
};

/// Number of values per map line
pub const VALUES_PER_LINE: isize = 16;

/// Descriptor of a single map value
const VALUE_DESCRIPTOR: &str = "I5";

/// Single map sample
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridCell {
    /// Latitude in decimal degrees
    pub lat: f64,
    /// Longitude in decimal degrees
    pub lon: f64,
    /// Scaled value
    pub value: i64,
}

impl From<(f64, f64, i64)> for GridCell {
    fn from(cell: (f64, f64, i64)) -> Self {
        Self {
            lat: cell.0,
            lon: cell.1,
            value: cell.2,
        }
    }
}

/// Kind of map, defining its delimiters
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MapType {
    /// Total Electron Content maps
    Tec,
    /// TEC Root Mean Square maps
    Rms,
    /// Height maps
    Height,
}

impl std::fmt::Display for MapType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Tec => write!(f, "TEC"),
            Self::Rms => write!(f, "RMS"),
            Self::Height => write!(f, "HEIGHT"),
        }
    }
}

impl MapType {
    /// Label opening maps of this kind
    pub fn start_label(&self) -> Label {
        match self {
            Self::Tec => Label::StartOfTecMap,
            Self::Rms => Label::StartOfRmsMap,
            Self::Height => Label::StartOfHeightMap,
        }
    }

    /// Label closing maps of this kind
    pub fn end_label(&self) -> Label {
        match self {
            Self::Tec => Label::EndOfTecMap,
            Self::Rms => Label::EndOfRmsMap,
            Self::Height => Label::EndOfHeightMap,
        }
    }
}

/// [GridMap] is one map at a single epoch and altitude.
/// Rows are stored from first to last latitude node, each row
/// holds the values from first to last longitude node.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridMap {
    lat_range: SpatialRange,
    lon_range: SpatialRange,
    height: f64,
    epoch: Epoch,
    rows: Vec<Vec<i64>>,
}

impl GridMap {
    /// Builds an empty [GridMap]
    pub fn new(lat_range: SpatialRange, lon_range: SpatialRange, height: f64, epoch: Epoch) -> Self {
        Self {
            lat_range,
            lon_range,
            height,
            epoch,
            rows: Vec::new(),
        }
    }

    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn lat_range(&self) -> &SpatialRange {
        &self.lat_range
    }

    pub fn lon_range(&self) -> &SpatialRange {
        &self.lon_range
    }

    /// Returns true if no data has been set yet
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Defines all values of this map. Every node of the grid must be
    /// given exactly once, in any order. Map is left untouched on error.
    pub fn set_data<I: IntoIterator<Item = GridCell>>(&mut self, cells: I) -> Result<(), MapError> {
        let decimal = self.lat_range.decimal();

        // group by latitude, preserving the order of appearance
        let mut grouped = BTreeMap::<i64, (usize, f64, Vec<(f64, i64)>)>::new();
        for cell in cells {
            let key = Quantized::new(cell.lat, decimal).quantized;
            let order = grouped.len();
            grouped
                .entry(key)
                .or_insert_with(|| (order, cell.lat, Vec::new()))
                .2
                .push((cell.lon, cell.value));
        }

        let groups = grouped
            .into_values()
            .sorted_by_key(|(order, _, _)| *order)
            .map(|(_, lat, row)| (lat, row))
            .collect::<Vec<_>>();

        let lat_count = self.lat_range.node_count();
        let lat_indexes = groups
            .iter()
            .map(|(lat, _)| self.lat_range.node_index(*lat))
            .collect::<Option<Vec<_>>>();

        let lat_indexes = match lat_indexes {
            Some(indexes) if indexes.len() == lat_count => indexes,
            _ => {
                let latitudes = groups.iter().map(|(lat, _)| *lat).collect::<Vec<_>>();
                #[cfg(feature = "log")]
                error!("{}: latitudes {:?} do not match the grid", self.epoch, latitudes);
                return Err(MapError::MissingLatitudes(latitudes));
            },
        };

        let mut rows = vec![Vec::new(); lat_count];
        for ((lat, samples), lat_index) in groups.into_iter().zip(lat_indexes) {
            rows[lat_index] = self.row(lat, &samples)?;
        }

        #[cfg(feature = "log")]
        debug!(
            "{}: {}x{} map",
            self.epoch,
            lat_count,
            self.lon_range.node_count()
        );

        self.rows = rows;
        Ok(())
    }

    /// Places the samples of a single latitude in longitude node order
    fn row(&self, lat: f64, samples: &[(f64, i64)]) -> Result<Vec<i64>, MapError> {
        let missing = || MapError::MissingLongitudeCell {
            lat,
            longitudes: samples.iter().map(|(lon, _)| *lon).collect(),
        };

        let mut row = vec![None; self.lon_range.node_count()];
        for (lon, value) in samples {
            let index = self.lon_range.node_index(*lon).ok_or_else(missing)?;
            if row[index].is_some() {
                return Err(MapError::DuplicateCell { lat, lon: *lon });
            }
            row[index] = Some(*value);
        }

        row.into_iter()
            .collect::<Option<Vec<_>>>()
            .ok_or_else(missing)
    }

    /// Returns value at given latitude node, for the longitude node closest to `lon`.
    /// None if latitude is not a node or longitude lies outside the grid.
    pub fn get_cell(&self, lat: f64, lon: f64) -> Option<i64> {
        let lat_index = self.lat_range.node_index(lat)?;
        let lon_index = self.lon_range.nearest_index(lon)?;
        self.rows.get(lat_index)?.get(lon_index).copied()
    }

    /// Latitudes of this map, in the order they are written
    pub fn latitudes(&self) -> Vec<f64> {
        self.lat_range.nodes().collect()
    }

    /// Formats map content: for each latitude, the grid locator line
    /// followed by its values, [VALUES_PER_LINE] per line.
    pub fn render_body(&self) -> Result<Vec<String>, MapError> {
        if self.rows.is_empty() {
            return Err(MapError::MissingLatitudes(Vec::new()));
        }

        let chunks = self.lon_range.chunks(VALUES_PER_LINE);
        let mut lines = Vec::with_capacity(self.rows.len() * (chunks.len() + 1));

        for (lat, row) in self.lat_range.nodes().zip(self.rows.iter()) {
            let locator = format_line(
                &values![
                    lat,
                    self.lon_range.min(),
                    self.lon_range.max(),
                    self.lon_range.step(),
                    self.height
                ],
                Label::GridLocator.descriptor(),
            )?;
            lines.push(fmt_ionex(&locator, Label::GridLocator.as_ref()));

            for (start, end) in chunks.iter() {
                let values = row[*start..*end]
                    .iter()
                    .map(|value| Value::from(*value))
                    .collect::<Vec<_>>();
                let descriptor = format!("{}{}", end - start, VALUE_DESCRIPTOR);
                lines.push(fmt_record(&format_line(&values, &descriptor)?));
            }
        }

        Ok(lines)
    }

    /// Formats the complete map section, delimited by the `map_type` labels
    /// carrying the 1-based map `index`.
    pub fn format_lines(&self, map_type: MapType, index: usize) -> Result<Vec<String>, MapError> {
        let sentinel = |label: Label| -> Result<String, MapError> {
            let content = format_line(&values![index], label.descriptor())?;
            Ok(fmt_ionex(&content, label.as_ref()))
        };

        let epoch = format_line(
            &epoch_values(self.epoch),
            Label::EpochOfCurrentMap.descriptor(),
        )?;

        let mut lines = vec![
            sentinel(map_type.start_label())?,
            fmt_ionex(&epoch, Label::EpochOfCurrentMap.as_ref()),
        ];
        lines.extend(self.render_body()?);
        lines.push(sentinel(map_type.end_label())?);
        Ok(lines)
    }
}
