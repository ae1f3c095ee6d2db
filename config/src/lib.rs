//! # Config Crate
//!
//! Centralized configuration constants for the modeling kernel and the
//! fluent object layer built on top of it. Tolerances, default tessellation
//! resolutions and recursion stack sizes live here so every crate agrees on
//! the same values.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPS, DEFAULT_SEGMENTS};
//!
//! // Geometry epsilon grows with the size of the model
//! let dimensions = [3.0, 5.0, 7.0];
//! let epsilon = EPS * dimensions.iter().sum::<f64>() / 3.0;
//! assert!((epsilon - 5e-5).abs() < 1e-12);
//!
//! // Circular primitives default to 32 segments
//! assert_eq!(DEFAULT_SEGMENTS, 32);
//! ```

pub mod constants;

#[cfg(test)]
mod tests;
