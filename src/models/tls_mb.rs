//! TLS + Mattis–Bardeen resonant-frequency model.
//!
//! Predicts the resonant frequency of a superconducting resonator versus
//! temperature as the sum of two mechanisms:
//!
//! - two-level-system (TLS) dielectric loss, which pulls the frequency via
//!   the real part of the digamma function
//! - quasiparticle (Mattis–Bardeen) kinetic-inductance shift, exponentially
//!   activated in the gap energy
//!
//! `residual` matches the calling convention of a nonlinear least-squares
//! driver: `(parameters, temperatures, data, weights) -> vector`. With no
//! data it returns the bare model (prediction mode, e.g. for plotting a
//! fitted curve); with data it returns the (optionally
//! uncertainty-weighted) residual.

use serde::{Deserialize, Serialize};

use num_complex::Complex64;

use crate::error::SweepError;
use crate::math::{digamma, i0e, BOLTZMANN, PLANCK};

use std::f64::consts::PI;

/// Parameters of the TLS + Mattis–Bardeen frequency model.
///
/// `f0` is the authoritative reference frequency used by the formula and
/// is also the value the shift terms scale with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShiftParams {
    /// TLS fractional frequency-shift coefficient (fill factor × loss
    /// tangent), dimensionless.
    pub fd: f64,
    /// Reference resonant frequency (Hz).
    pub f0: f64,
    /// Kinetic-inductance fraction, dimensionless.
    pub alpha: f64,
    /// Superconducting gap energy (J).
    pub delta0: f64,
}

impl ShiftParams {
    /// Unpack from a flat parameter vector in `[fd, f0, alpha, delta0]`
    /// order, the layout an optimizer varies each iteration.
    pub fn from_slice(values: &[f64]) -> Result<Self, SweepError> {
        let &[fd, f0, alpha, delta0] = values else {
            return Err(SweepError::numeric_domain(format!(
                "expected 4 model parameters [fd, f0, alpha, delta0], got {}",
                values.len()
            )));
        };
        let params = Self {
            fd,
            f0,
            alpha,
            delta0,
        };
        params.validate()?;
        Ok(params)
    }

    /// Check the parameter domain: all finite, `f0 > 0`, `delta0 > 0`.
    pub fn validate(&self) -> Result<(), SweepError> {
        if !(self.fd.is_finite() && self.alpha.is_finite()) {
            return Err(SweepError::numeric_domain(format!(
                "non-finite model parameter (fd={}, alpha={})",
                self.fd, self.alpha
            )));
        }
        if !(self.f0.is_finite() && self.f0 > 0.0) {
            return Err(SweepError::numeric_domain(format!(
                "reference frequency must be finite and > 0, got {}",
                self.f0
            )));
        }
        if !(self.delta0.is_finite() && self.delta0 > 0.0) {
            return Err(SweepError::numeric_domain(format!(
                "gap energy must be finite and > 0, got {}",
                self.delta0
            )));
        }
        Ok(())
    }
}

/// Model vector over `temps` (prediction mode).
pub fn model(params: &ShiftParams, temps: &[f64]) -> Result<Vec<f64>, SweepError> {
    residual(params, temps, None, None)
}

/// Model or residual vector over `temps`.
///
/// Output policy:
/// - `data = None`: the model vector
/// - `data = Some`, `eps = None`: `model - data`
/// - both present: `(model - data) / eps`
///
/// `eps` is only consulted when `data` is present. All temperatures must be
/// finite and strictly positive; `data`/`eps` must match `temps` in length.
pub fn residual(
    params: &ShiftParams,
    temps: &[f64],
    data: Option<&[f64]>,
    eps: Option<&[f64]>,
) -> Result<Vec<f64>, SweepError> {
    params.validate()?;
    if temps.is_empty() {
        return Err(SweepError::empty_input(
            "no temperatures to evaluate the model at",
        ));
    }
    for (i, &t) in temps.iter().enumerate() {
        if !(t.is_finite() && t > 0.0) {
            return Err(SweepError::numeric_domain(format!(
                "temperature {i} must be finite and > 0, got {t}"
            )));
        }
    }
    if let Some(data) = data {
        if data.len() != temps.len() {
            return Err(SweepError::numeric_domain(format!(
                "data length {} does not match temperature length {}",
                data.len(),
                temps.len()
            )));
        }
        if let Some((i, &d)) = data.iter().enumerate().find(|(_, d)| !d.is_finite()) {
            return Err(SweepError::numeric_domain(format!(
                "data value {i} is non-finite ({d})"
            )));
        }
    }
    if let Some(eps) = eps {
        if eps.len() != temps.len() {
            return Err(SweepError::numeric_domain(format!(
                "uncertainty length {} does not match temperature length {}",
                eps.len(),
                temps.len()
            )));
        }
        if let Some((i, &e)) = eps.iter().enumerate().find(|(_, e)| !e.is_finite() || **e == 0.0) {
            return Err(SweepError::numeric_domain(format!(
                "uncertainty value {i} must be finite and non-zero, got {e}"
            )));
        }
    }

    let out = temps
        .iter()
        .enumerate()
        .map(|(i, &t)| {
            let y = predict(params, t);
            match data {
                None => y,
                Some(data) => match eps {
                    None => y - data[i],
                    Some(eps) => (y - data[i]) / eps[i],
                },
            }
        })
        .collect();
    Ok(out)
}

/// Model value at a single temperature.
///
/// `temp` must be positive and the parameters valid; the vector entry
/// points (`model`, `residual`) enforce this before dispatching here.
fn predict(params: &ShiftParams, temp: f64) -> f64 {
    let kt = BOLTZMANN * temp;

    // TLS contribution. xi = h f0 / (2 pi k T); the digamma argument is
    // 1/2 + h f0 / (i 2 pi k T) = 1/2 - i xi.
    let xi = PLANCK * params.f0 / (2.0 * PI * kt);
    let tls = (params.fd / PI) * (digamma(Complex64::new(0.5, -xi)).re - xi.ln());

    // Mattis–Bardeen contribution. exp(-x)·I0(x) is evaluated as the
    // scaled Bessel form so large x stays finite.
    let gap_factor = (-params.delta0 / kt).exp();
    let x = PLANCK * params.f0 / (2.0 * kt);
    let mb = (params.alpha / 4.0)
        * ((2.0 * PI * kt / params.delta0).sqrt() * gap_factor + 2.0 * gap_factor * i0e(x));

    params.f0 + params.f0 * (tls - mb)
}
