//! Test helpers shared across crates.
//!
//! This crate currently provides RAII guards for mutating flag values.

pub mod flags;
