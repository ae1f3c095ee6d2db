//! # Transforms
//!
//! Affine transforms over geometry values: translate, rotate, scale,
//! mirror, center and align.
//!
//! Every transform reduces to a 4x4 matrix applied through [`Transform`].
//! Matrices that mirror keep 2D regions and 3D solids facing outward; paths
//! keep their point order.

use crate::error::{ModelingError, Result};
use crate::geometries::{Geom2, Geom3, Path2};
use crate::measurements::Measure;
use glam::{DMat3, DMat4, DVec3, EulerRot};

/// Geometry values that can be transformed by a matrix.
pub trait Transform: Sized {
    /// Applies `matrix`, returning a new value.
    fn transform(&self, matrix: &DMat4) -> Self;
}

impl Transform for Geom2 {
    fn transform(&self, matrix: &DMat4) -> Self {
        Geom2::transform(self, matrix)
    }
}

impl Transform for Geom3 {
    fn transform(&self, matrix: &DMat4) -> Self {
        Geom3::transform(self, matrix)
    }
}

impl Transform for Path2 {
    fn transform(&self, matrix: &DMat4) -> Self {
        Path2::transform(self, matrix)
    }
}

// =============================================================================
// OPTIONS
// =============================================================================

/// Plane to mirror about.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MirrorOptions {
    /// A point on the mirror plane.
    pub origin: DVec3,
    /// Normal of the mirror plane; need not be unit length.
    pub normal: DVec3,
}

impl Default for MirrorOptions {
    fn default() -> Self {
        Self {
            origin: DVec3::ZERO,
            normal: DVec3::Z,
        }
    }
}

/// Axes to center on and the point to center about.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenterOptions {
    pub axes: [bool; 3],
    pub relative_to: DVec3,
}

impl Default for CenterOptions {
    fn default() -> Self {
        Self {
            axes: [true, true, true],
            relative_to: DVec3::ZERO,
        }
    }
}

/// How one axis of the bounding box is aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignMode {
    /// Bounding box center moves to the reference.
    Center,
    /// Bounding box minimum moves to the reference.
    Min,
    /// Bounding box maximum moves to the reference.
    Max,
    /// Axis is left alone.
    None,
}

/// Per-axis alignment of the bounding box against a reference point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignOptions {
    pub modes: [AlignMode; 3],
    pub relative_to: DVec3,
}

impl Default for AlignOptions {
    fn default() -> Self {
        Self {
            modes: [AlignMode::Center, AlignMode::Center, AlignMode::Min],
            relative_to: DVec3::ZERO,
        }
    }
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Applies an arbitrary matrix.
pub fn transform<G: Transform>(matrix: &DMat4, geometry: &G) -> G {
    geometry.transform(matrix)
}

/// Moves the geometry by `offset`.
pub fn translate<G: Transform>(offset: DVec3, geometry: &G) -> G {
    geometry.transform(&DMat4::from_translation(offset))
}

/// Rotates by Tait-Bryan angles in radians, applied about X, then Y, then Z.
///
/// # Example
///
/// ```rust,ignore
/// let turned = rotate(DVec3::new(0.0, 0.0, FRAC_PI_2), &geometry);
/// ```
pub fn rotate<G: Transform>(angles: DVec3, geometry: &G) -> G {
    let matrix = DMat4::from_euler(EulerRot::ZYX, angles.z, angles.y, angles.x);
    geometry.transform(&matrix)
}

/// Scales about the origin.
///
/// # Errors
///
/// Factors must be positive; use [`mirror`] to flip.
pub fn scale<G: Transform>(factors: DVec3, geometry: &G) -> Result<G> {
    if factors.min_element() <= 0.0 {
        return Err(ModelingError::invalid_option(
            "factors",
            format!("scale factors must be positive, got {factors}"),
        ));
    }
    Ok(geometry.transform(&DMat4::from_scale(factors)))
}

/// Mirrors about the plane through `origin` with the given `normal`.
///
/// # Errors
///
/// Fails for a zero normal.
pub fn mirror<G: Transform>(options: &MirrorOptions, geometry: &G) -> Result<G> {
    let normal = options
        .normal
        .try_normalize()
        .ok_or_else(|| ModelingError::invalid_option("normal", "mirror normal must not be zero"))?;
    let reflection = DMat3::IDENTITY - 2.0 * outer(normal, normal);
    let matrix = DMat4::from_translation(options.origin)
        * DMat4::from_mat3(reflection)
        * DMat4::from_translation(-options.origin);
    Ok(geometry.transform(&matrix))
}

/// Moves the bounding box center onto `relative_to` along the selected axes.
pub fn center<G: Transform + Measure>(options: &CenterOptions, geometry: &G) -> G {
    let bounds_center = geometry.measure_center();
    let mut offset = DVec3::ZERO;
    for axis in 0..3 {
        if options.axes[axis] {
            offset[axis] = options.relative_to[axis] - bounds_center[axis];
        }
    }
    translate(offset, geometry)
}

/// Aligns the bounding box against `relative_to`, axis by axis.
pub fn align<G: Transform + Measure>(options: &AlignOptions, geometry: &G) -> G {
    let [min, max] = geometry.measure_bounding_box();
    let mut offset = DVec3::ZERO;
    for axis in 0..3 {
        let reference = options.relative_to[axis];
        offset[axis] = match options.modes[axis] {
            AlignMode::Center => reference - (min[axis] + max[axis]) * 0.5,
            AlignMode::Min => reference - min[axis],
            AlignMode::Max => reference - max[axis],
            AlignMode::None => 0.0,
        };
    }
    translate(offset, geometry)
}

fn outer(a: DVec3, b: DVec3) -> DMat3 {
    DMat3::from_cols(a * b.x, a * b.y, a * b.z)
}

#[cfg(test)]
mod tests;
