//! Epoch formatting helpers
use hifitime::Epoch;

use crate::value::Value;

/// Decomposes [Epoch] into the six integer fields of
/// `EPOCH OF ... MAP` lines: year, month, day, hours, minutes, seconds.
/// Nanoseconds are not represented.
pub fn epoch_values(epoch: Epoch) -> Vec<Value> {
    let (y, m, d, hh, mm, ss, _) = epoch.to_gregorian_utc();
    vec![
        Value::from(y),
        Value::from(m),
        Value::from(d),
        Value::from(hh),
        Value::from(mm),
        Value::from(ss),
    ]
}

/// Formats the creation date of `PGM / RUN BY / DATE` lines,
/// for example `11/14/18  411UT`.
pub fn fmt_pgm_date(epoch: Epoch) -> String {
    let (y, m, d, hh, mm, _, _) = epoch.to_gregorian_utc();
    format!(
        "{:02}/{:02}/{:02}{:3}{:02}UT",
        m,
        d,
        y.rem_euclid(100),
        hh,
        mm
    )
}
