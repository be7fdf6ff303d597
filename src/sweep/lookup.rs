//! Linear record lookup by (temperature, power).
//!
//! Analysis code often needs the one record behind a grid cell, e.g. to
//! re-inspect the underlying fit. The collection is small (one record per
//! setpoint), so a linear scan is fine.

use crate::domain::MeasurementRecord;

/// Which temperature field the lookup compares against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TempKey {
    /// Compare against the binned temperature key (`itemp`).
    Binned,
    /// Compare against the actual measured temperature (`temp`).
    Actual,
}

/// Position of the first record matching `(temp, pwr)` exactly.
///
/// Comparison is exact floating-point equality, so `temp` must be one of
/// the values actually stored in the records (an axis key for
/// `TempKey::Binned`, a measured value for `TempKey::Actual`). Returns
/// `None` when no record matches. Uniqueness of the key pair is the
/// caller's responsibility and is not verified.
pub fn find_record(
    records: &[MeasurementRecord],
    temp: f64,
    pwr: f64,
    key: TempKey,
) -> Option<usize> {
    records.iter().position(|r| {
        let t = match key {
            TempKey::Binned => r.itemp,
            TempKey::Actual => r.temp,
        };
        t == temp && r.pwr == pwr
    })
}
