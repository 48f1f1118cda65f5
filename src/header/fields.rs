//! Typed IONEX header definition

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use hifitime::{Duration, Epoch};

use crate::{
    error::HeaderError,
    header::{HeaderBuilder, IONEX_TYPE},
    label::Label,
    registry::HeaderRegistry,
    spatial::Grid,
};

/// Mapping function used in TEC determination
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MappingFunction {
    /// 1/cos(z)
    CosZ,
    /// Q-factor
    QFac,
}

impl std::fmt::Display for MappingFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::CosZ => write!(f, "COSZ"),
            Self::QFac => write!(f, "QFAC"),
        }
    }
}

/// [HeaderFields] gathers everything written in an IONEX header
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HeaderFields {
    /// IONEX revision
    pub version: f64,
    /// Satellite system or theoretical model, for example "GPS" or "MIX"
    pub system: String,
    /// Name of the program that created this file
    pub program: String,
    /// Agency that created this file
    pub run_by: String,
    /// Date of file creation
    pub date: Epoch,
    /// Description lines, formatted as is
    pub description: Vec<String>,
    /// Epoch of first map
    pub epoch_of_first_map: Epoch,
    /// Epoch of last map
    pub epoch_of_last_map: Epoch,
    /// Time between maps, written in whole seconds
    pub interval: Duration,
    /// Total number of maps (TEC, RMS and HEIGHT)
    pub nb_maps: u32,
    /// Mapping function adopted for TEC determination,
    /// None for theoretical models
    pub mapping: Option<MappingFunction>,
    /// Minimum elevation angle, in degrees
    pub elevation_cutoff: f64,
    /// Verbose description of observables used in determination
    pub observables: Option<String>,
    /// Number of stations that contributed to following data
    pub nb_stations: u32,
    /// Number of satellites that contributed to following data
    pub nb_satellites: u32,
    /// Mean earth radius or bottom of height grid, in km
    pub base_radius: f64,
    /// 2D or 3D maps
    pub map_dimension: u8,
    /// Grid definition
    pub grid: Grid,
    /// Scaling applied to all map values
    pub exponent: i8,
    /// Comment lines, formatted as is
    pub comments: Vec<String>,
    /// Contributing site names, listed in comments
    pub sites: Vec<String>,
    /// Name of the auxiliary data block, for example "DIFFERENTIAL CODE BIASES"
    pub aux_data: Option<String>,
    /// Custom line order. Default order applies when None.
    pub line_order: Option<Vec<Label>>,
}

impl Default for HeaderFields {
    fn default() -> Self {
        Self {
            version: 1.0,
            system: String::from("GPS"),
            program: String::new(),
            run_by: String::new(),
            date: Epoch::default(),
            description: Vec::new(),
            epoch_of_first_map: Epoch::default(),
            epoch_of_last_map: Epoch::default(),
            interval: Duration::from_seconds(3600.0),
            nb_maps: 0,
            mapping: None,
            elevation_cutoff: 0.0,
            observables: None,
            nb_stations: 0,
            nb_satellites: 0,
            // Standard Earth radius [km]
            base_radius: 6371.0,
            map_dimension: 2,
            grid: Grid::default(),
            exponent: -1,
            comments: Vec::new(),
            sites: Vec::new(),
            aux_data: None,
            line_order: None,
        }
    }
}

impl HeaderFields {
    /// Formats all header lines, concluded by `END OF HEADER`
    pub fn format_lines(&self, registry: &HeaderRegistry) -> Result<Vec<String>, HeaderError> {
        let mut builder = HeaderBuilder::new(registry);
        builder.set_line_order(self.line_order.clone())?;

        builder.set_version_type(self.version, IONEX_TYPE, &self.system)?;
        builder.set_program(&self.program, &self.run_by, self.date)?;
        builder.set_description_lines(&self.description)?;
        builder.set_epoch_range(self.epoch_of_first_map, self.epoch_of_last_map)?;

        builder.update_label(Label::Interval, &values![self.interval.to_seconds()])?;
        builder.update_label(Label::NumberOfMaps, &values![self.nb_maps])?;

        let mapping = match self.mapping {
            Some(mapf) => mapf.to_string(),
            None => String::from("NONE"),
        };
        builder.update_label(Label::MappingFunction, &values![mapping])?;
        builder.update_label(Label::ElevationCutoff, &values![self.elevation_cutoff])?;

        if let Some(observables) = &self.observables {
            builder.append_long_text(Label::ObservablesUsed, observables)?;
        }

        builder.update_label(Label::NumberOfStations, &values![self.nb_stations])?;
        builder.update_label(Label::NumberOfSatellites, &values![self.nb_satellites])?;
        builder.update_label(Label::BaseRadius, &values![self.base_radius])?;
        builder.update_label(Label::MapDimension, &values![self.map_dimension])?;
        builder.set_spatial_grid(&self.grid)?;
        builder.update_label(Label::Exponent, &values![self.exponent])?;

        builder.add_comments(&self.comments)?;
        builder.set_sites(&self.sites)?;

        if let Some(aux) = &self.aux_data {
            builder.update_label(Label::StartOfAuxData, &values![aux])?;
            builder.update_label(Label::EndOfAuxData, &values![aux])?;
        }

        builder.update_label(Label::EndOfHeader, &[])?;
        Ok(builder.assemble())
    }

    /// Copies and sets IONEX revision
    pub fn with_version(&self, version: f64) -> Self {
        let mut s = self.clone();
        s.version = version;
        s
    }

    /// Copies and sets satellite system
    pub fn with_system(&self, system: &str) -> Self {
        let mut s = self.clone();
        s.system = system.to_string();
        s
    }

    /// Copies and sets program, agency and creation date
    pub fn with_general_infos(&self, program: &str, run_by: &str, date: Epoch) -> Self {
        let mut s = self.clone();
        s.program = program.to_string();
        s.run_by = run_by.to_string();
        s.date = date;
        s
    }

    /// Copies and appends one description line
    pub fn with_description(&self, line: &str) -> Self {
        let mut s = self.clone();
        s.description.push(line.to_string());
        s
    }

    /// Copies self with given time of first map
    pub fn with_epoch_of_first_map(&self, t: Epoch) -> Self {
        let mut s = self.clone();
        s.epoch_of_first_map = t;
        s
    }

    /// Copies self with given time of last map
    pub fn with_epoch_of_last_map(&self, t: Epoch) -> Self {
        let mut s = self.clone();
        s.epoch_of_last_map = t;
        s
    }

    pub fn with_interval(&self, interval: Duration) -> Self {
        let mut s = self.clone();
        s.interval = interval;
        s
    }

    pub fn with_nb_maps(&self, n: u32) -> Self {
        let mut s = self.clone();
        s.nb_maps = n;
        s
    }

    pub fn with_mapping_function(&self, mf: MappingFunction) -> Self {
        let mut s = self.clone();
        s.mapping = Some(mf);
        s
    }

    /// Copies & sets minimum elevation angle used.
    pub fn with_elevation_cutoff(&self, e: f64) -> Self {
        let mut s = self.clone();
        s.elevation_cutoff = e;
        s
    }

    pub fn with_observables(&self, o: &str) -> Self {
        let mut s = self.clone();
        if !o.is_empty() {
            s.observables = Some(o.to_string())
        }
        s
    }

    /// Copies self and set number of stations
    pub fn with_nb_stations(&self, n: u32) -> Self {
        let mut s = self.clone();
        s.nb_stations = n;
        s
    }

    /// Copies self and set number of satellites
    pub fn with_nb_satellites(&self, n: u32) -> Self {
        let mut s = self.clone();
        s.nb_satellites = n;
        s
    }

    /// Copies & set Base Radius in km
    pub fn with_base_radius(&self, b: f64) -> Self {
        let mut s = self.clone();
        s.base_radius = b;
        s
    }

    pub fn with_map_dimension(&self, dim: u8) -> Self {
        let mut s = self.clone();
        s.map_dimension = dim;
        s
    }

    /// Copies and sets grid definition
    pub fn with_grid(&self, grid: Grid) -> Self {
        let mut s = self.clone();
        s.grid = grid;
        s
    }

    /// Copies and sets exponent / scaling to currently use
    pub fn with_exponent(&self, e: i8) -> Self {
        let mut s = self.clone();
        s.exponent = e;
        s
    }

    /// Copies and appends one comment line
    pub fn with_comment(&self, c: &str) -> Self {
        let mut s = self.clone();
        s.comments.push(c.to_string());
        s
    }

    /// Copies and sets contributing site names
    pub fn with_sites(&self, sites: &[&str]) -> Self {
        let mut s = self.clone();
        s.sites = sites.iter().map(|site| site.to_string()).collect();
        s
    }

    /// Copies and sets auxiliary data block name
    pub fn with_aux_data(&self, name: &str) -> Self {
        let mut s = self.clone();
        s.aux_data = Some(name.to_string());
        s
    }

    /// Copies and sets a custom line order
    pub fn with_line_order(&self, order: Vec<Label>) -> Self {
        let mut s = self.clone();
        s.line_order = Some(order);
        s
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::spatial::SpatialRange;

    #[test]
    fn mapping_function() {
        assert_eq!(MappingFunction::CosZ.to_string(), "COSZ");
        assert_eq!(MappingFunction::QFac.to_string(), "QFAC");
    }

    #[test]
    fn default_header() {
        let registry = HeaderRegistry::builtin().unwrap();
        let lines = HeaderFields::default().format_lines(&registry).unwrap();
        assert_eq!(lines.len(), 17);
        assert!(lines.iter().all(|line| line.len() == 80));
        assert!(lines[0].ends_with("IONEX VERSION / TYPE"));
        assert!(lines.iter().any(|line| line.starts_with("  NONE")));
        assert!(lines[16].ends_with("END OF HEADER       "));
    }

    #[test]
    fn optional_lines() {
        let registry = HeaderRegistry::builtin().unwrap();
        let fields = HeaderFields::default()
            .with_mapping_function(MappingFunction::QFac)
            .with_observables("TEC")
            .with_aux_data("DIFFERENTIAL CODE BIASES");
        let lines = fields.format_lines(&registry).unwrap();
        assert_eq!(lines.len(), 20);
        assert!(lines.iter().any(|line| line.starts_with("  QFAC")));
        assert!(lines
            .iter()
            .any(|line| line.starts_with("TEC ") && line.ends_with("OBSERVABLES USED    ")));
    }

    #[test]
    fn custom_order() {
        let registry = HeaderRegistry::builtin().unwrap();
        let fields = HeaderFields::default()
            .with_grid(Grid {
                latitude: SpatialRange::new(87.5, -87.5, -87.5).unwrap(),
                longitude: SpatialRange::new(-180.0, 180.0, 5.0).unwrap(),
                height: SpatialRange::single_point(450.0).unwrap(),
            })
            .with_line_order(vec![
                Label::VersionType,
                Label::LatitudeGrid,
                Label::EndOfHeader,
            ]);
        let lines = fields.format_lines(&registry).unwrap();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("    87.5 -87.5 -87.5"));

        let fields = fields.with_line_order(vec![Label::VersionType]);
        assert!(matches!(
            fields.format_lines(&registry),
            Err(HeaderError::MalformedOrder { .. })
        ));
    }

    #[test]
    fn fractional_interval() {
        let registry = HeaderRegistry::builtin().unwrap();
        let fields = HeaderFields::default().with_interval(Duration::from_seconds(0.5));
        assert!(matches!(
            fields.format_lines(&registry),
            Err(HeaderError::Formatting(_))
        ));
    }
}
