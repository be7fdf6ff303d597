//! Reporting utilities: formatted sweep summaries.

pub mod format;

pub use format::*;
