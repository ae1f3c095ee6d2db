//! # Modeling
//!
//! CSG modeling kernel over three immutable geometry values.
//!
//! ## Geometry
//!
//! - [`Geom2`]: a 2D region bounded by directed sides
//! - [`Geom3`]: a 3D solid bounded by planar convex polygons
//! - [`Path2`]: an ordered list of 2D points, open or closed
//!
//! Operations never mutate their inputs; each returns a new value.
//!
//! ## Algorithms
//!
//! - **Booleans**: BSP trees (csg.js algorithm)
//! - **Triangulation**: earcut, with Hertel-Mehlhorn convex partitioning
//! - **Hulls**: monotone chain in 2D, QuickHull in 3D
//! - **Offsets**: per-edge offsets joined by mitre, chamfer or arc corners
//!
//! ## Usage
//!
//! ```rust,ignore
//! use modeling::booleans::subtract;
//! use modeling::extrusions::{extrude_linear, ExtrudeLinearOptions};
//! use modeling::primitives::{circle, square, CircleOptions, SquareOptions};
//!
//! let plate = square(&SquareOptions { size: 10.0, ..Default::default() })?;
//! let hole = circle(&CircleOptions { radius: 2.0, ..Default::default() })?;
//! let block = extrude_linear(&ExtrudeLinearOptions::default(), &subtract(&[&plate, &hole])?)?;
//! ```

pub mod booleans;
pub mod colors;
pub mod error;
pub mod expansions;
pub mod extrusions;
pub mod geometries;
pub mod hulls;
pub mod measurements;
pub mod modifiers;
pub mod primitives;
pub mod transforms;

mod tessellation;

pub use error::{ModelingError, Result};
pub use geometries::{Geom2, Geom3, Path2, Poly3, Rgba};
