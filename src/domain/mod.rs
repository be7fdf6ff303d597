//! Domain types shared across the crate.
//!
//! This module defines:
//!
//! - the per-measurement fit record consumed by the sweep container
//!   (`MeasurementRecord`, `FitStats`)
//! - temperature binning helpers used to derive grid axis keys

pub mod types;

pub use types::*;
