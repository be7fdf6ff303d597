//! Axis extraction for a sweep.
//!
//! A sweep is measured over a grid of (temperature, power) setpoints, but
//! the records arrive as a flat, unordered collection. `SweepIndex` derives
//! the two axis vectors:
//!
//! - `tvec`: sorted unique binned temperatures (`itemp`)
//! - `pvec`: sorted unique powers (`pwr`)
//!
//! Both are strictly increasing with no duplicates. Axis membership is by
//! exact float equality; axis keys are quantized upstream, so equal
//! setpoints compare bitwise equal.

use crate::domain::MeasurementRecord;
use crate::error::SweepError;

/// The two axis vectors of a sweep grid.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepIndex {
    tvec: Vec<f64>,
    pvec: Vec<f64>,
}

impl SweepIndex {
    /// Derive the axes from a record collection.
    ///
    /// Fails with an empty-input error on zero records, and with a numeric
    /// domain error if any axis key is non-finite.
    pub fn from_records(records: &[MeasurementRecord]) -> Result<Self, SweepError> {
        if records.is_empty() {
            return Err(SweepError::empty_input(
                "no measurement records to derive sweep axes from",
            ));
        }

        for (i, r) in records.iter().enumerate() {
            if !(r.itemp.is_finite() && r.pwr.is_finite()) {
                return Err(SweepError::numeric_domain(format!(
                    "record {i} has non-finite axis key (itemp={}, pwr={})",
                    r.itemp, r.pwr
                )));
            }
        }

        let tvec = sorted_unique(records.iter().map(|r| r.itemp));
        let pvec = sorted_unique(records.iter().map(|r| r.pwr));
        Ok(Self { tvec, pvec })
    }

    /// Sorted unique binned temperatures.
    pub fn tvec(&self) -> &[f64] {
        &self.tvec
    }

    /// Sorted unique powers.
    pub fn pvec(&self) -> &[f64] {
        &self.pvec
    }

    /// Grid shape as `(tvec.len(), pvec.len())`.
    pub fn shape(&self) -> (usize, usize) {
        (self.tvec.len(), self.pvec.len())
    }

    /// Row position of a binned temperature (exact match).
    pub fn temp_position(&self, itemp: f64) -> Option<usize> {
        self.tvec.iter().position(|&t| t == itemp)
    }

    /// Column position of a power (exact match).
    pub fn pwr_position(&self, pwr: f64) -> Option<usize> {
        self.pvec.iter().position(|&p| p == pwr)
    }
}

fn sorted_unique(values: impl Iterator<Item = f64>) -> Vec<f64> {
    let mut out: Vec<f64> = values.collect();
    out.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    out.dedup_by(|a, b| a == b);
    out
}
