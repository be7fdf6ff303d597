//! Frequency-shift model implementations.
//!
//! Models are implemented as small, pure functions so an external
//! least-squares optimizer can call them once per iteration with a varying
//! parameter vector.

pub mod tls_mb;

pub use tls_mb::*;
