//! Benchmarking IONEX line encoding & map formatting
extern crate criterion;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ionex_formatter::{
    formatter::format_line,
    prelude::{Epoch, GridCell, GridMap, MapType, SpatialRange},
    values, Value,
};

fn global_map() -> GridMap {
    let lat_range = SpatialRange::new(87.5, -87.5, -2.5).unwrap();
    let lon_range = SpatialRange::new(-180.0, 180.0, 5.0).unwrap();
    let cells = lat_range
        .nodes()
        .enumerate()
        .flat_map(|(i, lat)| {
            lon_range
                .nodes()
                .enumerate()
                .map(move |(j, lon)| GridCell::from((lat, lon, ((i * 73 + j) % 9999) as i64)))
        })
        .collect::<Vec<_>>();

    let mut map = GridMap::new(
        lat_range,
        lon_range,
        450.0,
        Epoch::from_gregorian_utc(2010, 12, 28, 0, 0, 0, 0),
    );
    map.set_data(cells).unwrap();
    map
}

fn benchmark(c: &mut Criterion) {
    let mut formatting_grp = c.benchmark_group("formatting");

    let values = values![1.0, "I", "GPS"];
    formatting_grp.bench_function("line/version", |b| {
        b.iter(|| {
            let _ = format_line(black_box(&values), "F8.1, 12X, A1, 19X, A3, 17X").unwrap();
        })
    });

    let values = (0..16).map(|i| Value::from(i * 100)).collect::<Vec<_>>();
    formatting_grp.bench_function("line/16I5", |b| {
        b.iter(|| {
            let _ = format_line(black_box(&values), "16I5").unwrap();
        })
    });

    let map = global_map();
    formatting_grp.bench_function("map/71x73", |b| {
        b.iter(|| {
            let _ = black_box(&map).format_lines(MapType::Tec, 1).unwrap();
        })
    });

    formatting_grp.finish();
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
