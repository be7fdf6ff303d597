//! Sweep indexing and table assembly.
//!
//! Responsibilities:
//!
//! - derive the unique, sorted axis vectors from a record collection
//!   (`SweepIndex`)
//! - populate one dense 2D table per parameter over those axes
//!   (`ResonatorSweep`)
//! - locate a single record by (temperature, power) (`find_record`)

pub mod index;
pub mod lookup;
pub mod table;

pub use index::*;
pub use lookup::*;
pub use table::*;
