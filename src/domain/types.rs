//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they
//! can be:
//!
//! - produced by an external S21 lineshape fitter
//! - held in memory while a sweep is assembled
//! - exported later for comparisons across cooldowns

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::SweepError;

/// Default temperature bin width (K). Sweep temperatures are quantized to
/// 5 mK bins so nearby setpoints collapse onto one grid row.
pub const DEFAULT_TEMP_BIN: f64 = 5e-3;

/// Scalar diagnostics of the underlying S21 fit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitStats {
    /// Chi-squared of the fit.
    pub chisq: f64,
    /// Reduced chi-squared.
    pub redchi: f64,
    /// Number of function evaluations the fit took to converge.
    pub nfev: u32,
}

/// One fitted measurement of the resonator at a single (temperature, power)
/// setpoint.
///
/// `itemp` is the grid axis key; `temp` is the actual measured temperature
/// and is carried as a data value only. The `(itemp, pwr)` pair is expected
/// to be unique across a sweep; duplicates are not detected, and a later
/// record silently overwrites an earlier one in the assembled tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementRecord {
    /// Binned temperature key (K).
    pub itemp: f64,
    /// Actual temperature (K).
    pub temp: f64,
    /// Applied readout power (dBm).
    pub pwr: f64,
    /// Frequency at the |S21| magnitude minimum (Hz).
    pub fmin: f64,
    /// Fitted parameter name -> value. Ordered so the first record of a
    /// sweep yields a deterministic table-name set.
    pub params: BTreeMap<String, f64>,
    /// Fit-quality diagnostics.
    pub stats: FitStats,
}

/// Quantize a temperature to the nearest bin center.
///
/// `bin_width` must be finite and positive.
pub fn bin_temperature(temp: f64, bin_width: f64) -> Result<f64, SweepError> {
    if !(bin_width.is_finite() && bin_width > 0.0) {
        return Err(SweepError::numeric_domain(format!(
            "temperature bin width must be finite and > 0, got {bin_width}"
        )));
    }
    if !temp.is_finite() {
        return Err(SweepError::numeric_domain(format!(
            "cannot bin non-finite temperature {temp}"
        )));
    }
    Ok((temp / bin_width).round() * bin_width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bin_temperature_rounds_to_nearest_center() {
        let binned = bin_temperature(0.1074, DEFAULT_TEMP_BIN).unwrap();
        assert!((binned - 0.105).abs() < 1e-12);

        let binned = bin_temperature(0.1076, DEFAULT_TEMP_BIN).unwrap();
        assert!((binned - 0.110).abs() < 1e-12);
    }

    #[test]
    fn bin_temperature_rejects_bad_width() {
        assert!(bin_temperature(0.1, 0.0).is_err());
        assert!(bin_temperature(0.1, -1e-3).is_err());
        assert!(bin_temperature(0.1, f64::NAN).is_err());
    }

    #[test]
    fn bin_temperature_rejects_non_finite_temp() {
        assert!(bin_temperature(f64::INFINITY, DEFAULT_TEMP_BIN).is_err());
    }
}
