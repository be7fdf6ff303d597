//! Data generation helpers.
//!
//! Real sweeps come from an external S21 fitter. The synthetic generator
//! here produces record collections with a known ground truth so the sweep
//! container and the frequency-shift model can be exercised without one.

pub mod synthetic;

pub use synthetic::*;
