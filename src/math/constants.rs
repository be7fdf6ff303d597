//! Physical constants used by the frequency-shift model.
//!
//! Values are the exact 2019 SI definitions, in SI units throughout:
//! frequencies in Hz, temperatures in K, energies in J.

/// Planck constant (J·s).
pub const PLANCK: f64 = 6.626_070_15e-34;

/// Boltzmann constant (J/K).
pub const BOLTZMANN: f64 = 1.380_649e-23;
