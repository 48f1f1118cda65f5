//! IONEX file assembly
use std::collections::{BTreeMap, HashMap};

use hifitime::Epoch;

#[cfg(feature = "log")]
use log::debug;

use crate::{
    error::{Error, MapError},
    formatter::fmt_ionex,
    header::HeaderFields,
    label::Label,
    map::{GridMap, MapType},
    registry::HeaderRegistry,
};

/// Map types, in the order they are written
pub const MAP_TYPES: [MapType; 3] = [MapType::Tec, MapType::Rms, MapType::Height];

/// [IonexFile] gathers a header definition and maps of each [MapType],
/// and produces the complete file as 80 column lines.
#[derive(Debug, Clone)]
pub struct IonexFile<'a> {
    registry: &'a HeaderRegistry,
    /// Header definition
    pub header: HeaderFields,
    maps: HashMap<MapType, BTreeMap<Epoch, GridMap>>,
}

impl<'a> IonexFile<'a> {
    pub fn new(registry: &'a HeaderRegistry, header: HeaderFields) -> Self {
        Self {
            registry,
            header,
            maps: HashMap::new(),
        }
    }

    /// Defines all maps of given [MapType], replacing previous ones.
    /// Maps are indexed by epoch: last map wins when epochs are shared.
    pub fn set_maps<I: IntoIterator<Item = GridMap>>(&mut self, maps: I, map_type: MapType) {
        let maps = maps
            .into_iter()
            .map(|map| (map.epoch(), map))
            .collect::<BTreeMap<_, _>>();
        #[cfg(feature = "log")]
        debug!("{} {} maps", maps.len(), map_type);
        self.maps.insert(map_type, maps);
    }

    /// Returns [GridMap] of given type at given epoch
    pub fn map(&self, map_type: MapType, epoch: Epoch) -> Option<&GridMap> {
        self.maps.get(&map_type)?.get(&epoch)
    }

    /// Number of maps of given type
    pub fn nb_maps(&self, map_type: MapType) -> usize {
        self.maps.get(&map_type).map(|maps| maps.len()).unwrap_or(0)
    }

    /// Formats a single map section. Maps are numbered from 1,
    /// by increasing epoch within their type.
    pub fn map_lines(&self, map_type: MapType, epoch: Epoch) -> Result<Vec<String>, MapError> {
        let no_such_map = || MapError::NoSuchMap {
            map_type: map_type.to_string(),
            epoch: epoch.to_string(),
        };
        let maps = self.maps.get(&map_type).ok_or_else(no_such_map)?;
        let (index, map) = maps
            .iter()
            .enumerate()
            .find(|(_, (t, _))| **t == epoch)
            .map(|(index, (_, map))| (index, map))
            .ok_or_else(no_such_map)?;
        map.format_lines(map_type, index + 1)
    }

    /// Formats all maps of given types, types in given order,
    /// maps by increasing epoch.
    pub fn maps_lines(&self, map_types: &[MapType]) -> Result<Vec<String>, MapError> {
        let mut lines = Vec::new();
        for map_type in map_types {
            if let Some(maps) = self.maps.get(map_type) {
                for (index, map) in maps.values().enumerate() {
                    lines.extend(map.format_lines(*map_type, index + 1)?);
                }
            }
        }
        Ok(lines)
    }

    /// Formats the complete file: header, TEC, RMS then HEIGHT maps,
    /// concluded by `END OF FILE`.
    pub fn lines(&self) -> Result<Vec<String>, Error> {
        let mut lines = self.header.format_lines(self.registry)?;
        lines.extend(self.maps_lines(&MAP_TYPES)?);
        lines.push(fmt_ionex("", Label::EndOfFile.as_ref()));
        #[cfg(feature = "log")]
        debug!("ionex file: {} lines", lines.len());
        Ok(lines)
    }
}
