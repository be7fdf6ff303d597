//! Mathematical utilities: physical constants and special functions.

pub mod constants;
pub mod special;

pub use constants::*;
pub use special::*;
