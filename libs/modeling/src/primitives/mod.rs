//! # Primitives
//!
//! Generators for the basic shapes, each configured by an options struct
//! whose `Default` gives the conventional unit-sized shape.
//!
//! - Regions: [`circle`], [`ellipse`], [`polygon`], [`rectangle`],
//!   [`rounded_rectangle`], [`square`], [`star`]
//! - Solids: [`cube`], [`cuboid`], [`cylinder`], [`cylinder_elliptic`],
//!   [`ellipsoid`], [`geodesic_sphere`], [`polyhedron`], [`rounded_cuboid`],
//!   [`rounded_cylinder`], [`sphere`], [`torus`]
//! - Paths: [`arc`], [`line`]
//!
//! Every generator validates its options and fails with
//! [`ModelingError::InvalidOption`](crate::error::ModelingError::InvalidOption)
//! naming the offending field.
//!
//! ## Example
//!
//! ```rust,ignore
//! use modeling::primitives::{cuboid, star, CuboidOptions, StarOptions};
//!
//! let block = cuboid(&CuboidOptions { size: DVec3::new(3.0, 5.0, 7.0), ..Default::default() })?;
//! let badge = star(&StarOptions { vertices: 6, ..Default::default() })?;
//! ```

mod curve;
mod planar;
mod solid;

pub use curve::{arc, line, ArcOptions};
pub use planar::{
    circle, ellipse, polygon, rectangle, rounded_rectangle, square, star, CircleOptions,
    EllipseOptions, PolygonOptions, RectangleOptions, RoundedRectangleOptions, SquareOptions,
    StarOptions,
};
pub use solid::{
    cube, cuboid, cylinder, cylinder_elliptic, ellipsoid, geodesic_sphere, polyhedron,
    rounded_cuboid, rounded_cylinder, sphere, torus, CubeOptions, CuboidOptions,
    CylinderEllipticOptions, CylinderOptions, EllipsoidOptions, GeodesicSphereOptions,
    Orientation, PolyhedronOptions, RoundedCuboidOptions, RoundedCylinderOptions, SphereOptions,
    TorusOptions,
};

pub(crate) use solid::sphere_points;

use crate::error::{ModelingError, Result};
use config::constants::MIN_SEGMENTS;

// =============================================================================
// VALIDATION
// =============================================================================

fn check_positive(option: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ModelingError::invalid_option(option, "must be greater than 0"))
    }
}

fn check_non_negative(option: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ModelingError::invalid_option(option, "must be 0 or more"))
    }
}

fn check_segments(option: &'static str, segments: usize, minimum: usize) -> Result<()> {
    if segments >= minimum.max(MIN_SEGMENTS) {
        Ok(())
    } else {
        Err(ModelingError::invalid_option(
            option,
            format!("must be {} or more", minimum.max(MIN_SEGMENTS)),
        ))
    }
}

#[cfg(test)]
mod tests;
