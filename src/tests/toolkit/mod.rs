//! Test tools
use std::path::{Path, PathBuf};

use rand::Rng;

use crate::prelude::{Epoch, GridCell, GridMap, Label, SpatialRange};

mod header;
pub use header::{reference_grid, reference_header, COMMENTS, DESCRIPTION, SITES};

/// Path to an IONEX test resource
pub fn ionex_resource(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("test_resources")
        .join("IONEX")
        .join(name)
}

/// Loads all lines of an IONEX test resource
pub fn resource_lines(name: &str) -> Vec<String> {
    let path = ionex_resource(name);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {}", path.display(), e));
    content.lines().map(|line| line.to_string()).collect()
}

/// Recovers the cells of formatted map lines, using the longitude grid
/// to locate each value.
pub fn cells_from_map_lines(lines: &[String], lon_range: &SpatialRange) -> Vec<GridCell> {
    let mut cells = Vec::new();
    let mut latitude = None;
    let mut longitudes = lon_range.nodes().collect::<Vec<_>>().into_iter();

    for line in lines {
        if line.ends_with(Label::GridLocator.as_ref()) {
            latitude = Some(line[2..8].trim().parse::<f64>().unwrap());
            longitudes = lon_range.nodes().collect::<Vec<_>>().into_iter();
        } else if line.len() > 60 && line[60..].trim().parse::<Label>().is_ok() {
            latitude = None;
        } else if let Some(lat) = latitude {
            for value in line.split_whitespace() {
                let lon = longitudes.next().expect("too many values for this grid");
                cells.push(GridCell::from((lat, lon, value.parse::<i64>().unwrap())));
            }
        }
    }
    cells
}

/// Builds a complete map made of random values
pub fn random_map(lat_range: SpatialRange, lon_range: SpatialRange, epoch: Epoch) -> GridMap {
    let mut rng = rand::thread_rng();
    let mut map = GridMap::new(lat_range, lon_range, 450.0, epoch);
    let cells = lat_range
        .nodes()
        .flat_map(|lat| lon_range.nodes().map(move |lon| (lat, lon)))
        .map(|(lat, lon)| GridCell::from((lat, lon, rng.gen_range(0..9999))))
        .collect::<Vec<_>>();
    map.set_data(cells).unwrap();
    map
}
