//! Pre-validation checks and helpers.
//!
//! This module provides the pure collision predicate used by the higher-level
//! API. Keeping it free of I/O makes the decision trivially testable against
//! any listing.

pub mod checks;

pub use checks::find_name_collision;
