//! Per-parameter table assembly.
//!
//! `ResonatorSweep` reorganizes a flat record collection into one dense 2D
//! table per interesting parameter, all sharing the axes of a `SweepIndex`:
//! rows are binned temperatures, columns are powers. The table set is the
//! fit-parameter names of the first record (the sweep is assumed
//! homogeneous) plus a fixed set of derived scalars.
//!
//! Cells with no backing record hold `f64::NAN` as the missing sentinel.
//! The missing-aware accessors (`value`, `temperature_cut`, `power_cut`)
//! map non-finite cells to `None` so "no data" can never be read as zero.

use std::collections::BTreeMap;

use nalgebra::DMatrix;

use crate::domain::MeasurementRecord;
use crate::error::SweepError;
use crate::sweep::index::SweepIndex;

/// Table holding each record's actual (unbinned) temperature.
pub const TEMPS: &str = "temps";
/// Table holding the frequency at the |S21| magnitude minimum.
pub const FMIN: &str = "fmin";
/// Table holding the fit chi-squared.
pub const CHISQ: &str = "chisq";
/// Table holding the fit reduced chi-squared.
pub const REDCHI: &str = "redchi";
/// Table holding the fit function-evaluation count.
pub const FEVAL: &str = "feval";

/// Derived tables present in every sweep, in addition to the fit parameters.
pub const DERIVED_NAMES: [&str; 5] = [TEMPS, FMIN, CHISQ, REDCHI, FEVAL];

/// A full sweep: shared axes plus one table per parameter name.
///
/// Constructed once from a finalized record collection and read-only
/// afterwards. If two records share an `(itemp, pwr)` key, the later one
/// wins silently; uniqueness is the producer's responsibility.
#[derive(Debug, Clone, PartialEq)]
pub struct ResonatorSweep {
    index: SweepIndex,
    names: Vec<String>,
    tables: BTreeMap<String, DMatrix<f64>>,
}

impl ResonatorSweep {
    /// Assemble the per-parameter tables from a record collection.
    pub fn from_records(records: &[MeasurementRecord]) -> Result<Self, SweepError> {
        let index = SweepIndex::from_records(records)?;

        // Ordered table-name set: the first record's fit parameters, then
        // the derived scalars. A fit parameter that collides with a derived
        // name is kept once; the fit value wins at fill time.
        let mut names: Vec<String> = records[0].params.keys().cloned().collect();
        for derived in DERIVED_NAMES {
            if !names.iter().any(|n| n == derived) {
                names.push(derived.to_string());
            }
        }

        let (n_temps, n_pwrs) = index.shape();
        let mut tables = BTreeMap::new();
        for name in &names {
            let mut table = DMatrix::from_element(n_temps, n_pwrs, f64::NAN);
            for r in records {
                // Axis membership is guaranteed: the axes were derived from
                // this same collection.
                let Some(i) = index.temp_position(r.itemp) else {
                    continue;
                };
                let Some(j) = index.pwr_position(r.pwr) else {
                    continue;
                };
                if let Some(value) = resolve_cell(name, r) {
                    table[(i, j)] = value;
                }
            }
            tables.insert(name.clone(), table);
        }

        Ok(Self {
            index,
            names,
            tables,
        })
    }

    /// Shared axes.
    pub fn index(&self) -> &SweepIndex {
        &self.index
    }

    /// Sorted unique binned temperatures (row axis).
    pub fn tvec(&self) -> &[f64] {
        self.index.tvec()
    }

    /// Sorted unique powers (column axis).
    pub fn pvec(&self) -> &[f64] {
        self.index.pvec()
    }

    /// Table names in construction order: fit parameters, then derived.
    pub fn parameter_names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// The raw NaN-filled table for a parameter.
    pub fn table(&self, name: &str) -> Option<&DMatrix<f64>> {
        self.tables.get(name)
    }

    /// Missing-aware cell read by axis value.
    ///
    /// Returns `None` for an unknown table, an off-grid key, or a missing
    /// (non-finite) cell.
    pub fn value(&self, name: &str, itemp: f64, pwr: f64) -> Option<f64> {
        let i = self.index.temp_position(itemp)?;
        let j = self.index.pwr_position(pwr)?;
        let v = *self.tables.get(name)?.get((i, j))?;
        v.is_finite().then_some(v)
    }

    /// One table column against `tvec`, at fixed power.
    pub fn temperature_cut(&self, name: &str, pwr: f64) -> Option<Vec<Option<f64>>> {
        let j = self.index.pwr_position(pwr)?;
        let table = self.tables.get(name)?;
        Some(
            (0..table.nrows())
                .map(|i| {
                    let v = table[(i, j)];
                    v.is_finite().then_some(v)
                })
                .collect(),
        )
    }

    /// One table row against `pvec`, at fixed binned temperature.
    pub fn power_cut(&self, name: &str, itemp: f64) -> Option<Vec<Option<f64>>> {
        let i = self.index.temp_position(itemp)?;
        let table = self.tables.get(name)?;
        Some(
            (0..table.ncols())
                .map(|j| {
                    let v = table[(i, j)];
                    v.is_finite().then_some(v)
                })
                .collect(),
        )
    }
}

/// Resolve a cell value for one record under the fill precedence:
/// fit parameter first, then the derived scalars.
fn resolve_cell(name: &str, r: &MeasurementRecord) -> Option<f64> {
    if let Some(v) = r.params.get(name) {
        return Some(*v);
    }
    match name {
        TEMPS => Some(r.temp),
        FMIN => Some(r.fmin),
        CHISQ => Some(r.stats.chisq),
        REDCHI => Some(r.stats.redchi),
        FEVAL => Some(f64::from(r.stats.nfev)),
        _ => None,
    }
}
