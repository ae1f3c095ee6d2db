//! # Extrusions
//!
//! Conversions between 2D and 3D geometry.
//!
//! - [`extrude_linear`]: straight up along Z, optionally twisted
//! - [`extrude_rectangular`]: a rectangle swept along paths or outlines
//! - [`extrude_rotate`]: revolved about the Z axis
//! - [`extrude_helical`]: revolved while rising along Z
//! - [`project`]: the shadow of a solid on a plane
//!
//! Walls between consecutive copies of the region are triangles; caps are
//! convex outlines kept whole or triangulated. Results keep the color of
//! their input.
//!
//! ## Example
//!
//! ```rust,ignore
//! use modeling::extrusions::{extrude_linear, project, ExtrudeLinearOptions, ProjectOptions};
//!
//! let block = extrude_linear(&ExtrudeLinearOptions { height: 5.0, ..Default::default() }, &square)?;
//! let shadow = project(&ProjectOptions::default(), &block)?;
//! ```

mod linear;
mod project;
mod rotate;
mod slices;

use crate::error::{ModelingError, Result};
use crate::geometries::geom2::signed_area;
use crate::geometries::{Geom2, Geom3, Path2, Rgba};
use config::constants::{DEFAULT_ROTATE_SEGMENTS, DEFAULT_SEGMENTS};
use glam::DVec3;
use std::f64::consts::TAU;

// =============================================================================
// OPTIONS
// =============================================================================

/// Parameters for [`extrude_linear`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtrudeLinearOptions {
    /// Distance along Z; negative extrudes downwards.
    pub height: f64,
    /// Rotation about Z over the full height, in radians.
    pub twist_angle: f64,
    /// Number of slices the twist is spread over.
    pub twist_steps: usize,
}

impl Default for ExtrudeLinearOptions {
    fn default() -> Self {
        Self {
            height: 1.0,
            twist_angle: 0.0,
            twist_steps: 1,
        }
    }
}

/// Parameters for [`extrude_rectangular`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtrudeRectangularOptions {
    /// Distance from the path to each side of the rectangle.
    pub size: f64,
    pub height: f64,
}

impl Default for ExtrudeRectangularOptions {
    fn default() -> Self {
        Self {
            size: 1.0,
            height: 1.0,
        }
    }
}

/// Parameters for [`extrude_rotate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtrudeRotateOptions {
    /// Angle to revolve through, in radians; clamped to one full turn.
    pub angle: f64,
    pub start_angle: f64,
    /// Segments of a full turn.
    pub segments: usize,
}

impl Default for ExtrudeRotateOptions {
    fn default() -> Self {
        Self {
            angle: TAU,
            start_angle: 0.0,
            segments: DEFAULT_ROTATE_SEGMENTS,
        }
    }
}

/// Parameters for [`extrude_helical`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtrudeHelicalOptions {
    /// Angle to revolve through, in radians; may exceed a full turn.
    pub angle: f64,
    pub start_angle: f64,
    /// Rise along Z per full turn.
    pub pitch: f64,
    /// Radial distance added by the end of the helix.
    pub end_offset: f64,
    pub segments_per_rotation: usize,
}

impl Default for ExtrudeHelicalOptions {
    fn default() -> Self {
        Self {
            angle: TAU,
            start_angle: 0.0,
            pitch: 10.0,
            end_offset: 0.0,
            segments_per_rotation: DEFAULT_SEGMENTS,
        }
    }
}

/// Plane to project onto.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectOptions {
    /// Projection direction and plane normal.
    pub axis: DVec3,
    /// A point on the plane.
    pub origin: DVec3,
}

impl Default for ProjectOptions {
    fn default() -> Self {
        Self {
            axis: DVec3::Z,
            origin: DVec3::ZERO,
        }
    }
}

// =============================================================================
// SOURCES
// =============================================================================

/// 2D values that can be extruded.
pub trait ExtrusionSource {
    /// The region swept by linear extrusion.
    ///
    /// # Errors
    ///
    /// Paths must be closed.
    fn extrusion_base(&self) -> Result<Geom2>;

    /// Paths a rectangle is swept along.
    fn extrusion_paths(&self) -> Vec<Path2>;

    fn source_color(&self) -> Option<Rgba>;
}

impl ExtrusionSource for Geom2 {
    fn extrusion_base(&self) -> Result<Geom2> {
        Ok(self.clone())
    }

    /// One closed path per outline.
    fn extrusion_paths(&self) -> Vec<Path2> {
        self.to_outlines()
            .iter()
            .map(|outline| Path2::from_points(outline, true))
            .collect()
    }

    fn source_color(&self) -> Option<Rgba> {
        self.color
    }
}

impl ExtrusionSource for Path2 {
    /// The area enclosed by the path, counter-clockwise. An open path whose
    /// ends meet is closed first.
    fn extrusion_base(&self) -> Result<Geom2> {
        if !self.is_closed && !self.ends_meet() {
            return Err(ModelingError::OpenPath { operation: "extrude" });
        }
        let mut points = self.close().points;
        if signed_area(&points) < 0.0 {
            points.reverse();
        }
        let mut base = Geom2::from_points(&points)?;
        base.color = self.color;
        Ok(base)
    }

    fn extrusion_paths(&self) -> Vec<Path2> {
        if self.points.is_empty() {
            Vec::new()
        } else {
            vec![self.clone()]
        }
    }

    fn source_color(&self) -> Option<Rgba> {
        self.color
    }
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Extrudes along Z by `options.height`, twisting as it rises.
///
/// # Errors
///
/// Fails on a zero or non-finite height, zero twist steps, or an open path.
pub fn extrude_linear<G: ExtrusionSource>(
    options: &ExtrudeLinearOptions,
    geometry: &G,
) -> Result<Geom3> {
    let base = geometry.extrusion_base()?;
    linear::extrude_linear(options, &base)
}

/// Sweeps a rectangle `2 * size` wide and `height` tall along the paths of
/// `geometry`.
///
/// # Errors
///
/// Fails on a non-positive size, a zero height, or an empty path.
pub fn extrude_rectangular<G: ExtrusionSource>(
    options: &ExtrudeRectangularOptions,
    geometry: &G,
) -> Result<Geom3> {
    linear::extrude_rectangular(options, geometry)
}

/// Revolves `geometry` about the Z axis.
///
/// The region is stood up in the XZ plane first. Regions mostly left of the
/// Y axis are mirrored; parts still left of it are flattened onto it.
///
/// # Errors
///
/// Fails on fewer than three segments or a zero angle.
pub fn extrude_rotate(options: &ExtrudeRotateOptions, geometry: &Geom2) -> Result<Geom3> {
    rotate::extrude_rotate(options, geometry)
}

/// Revolves `geometry` about the Z axis while rising by `options.pitch` per
/// turn.
///
/// # Errors
///
/// Fails on fewer than three segments per turn, a zero angle, or a region
/// on both sides of the Y axis.
pub fn extrude_helical(options: &ExtrudeHelicalOptions, geometry: &Geom2) -> Result<Geom3> {
    rotate::extrude_helical(options, geometry)
}

/// Projects `geometry` onto a plane.
///
/// # Errors
///
/// Fails on a zero axis.
pub fn project(options: &ProjectOptions, geometry: &Geom3) -> Result<Geom2> {
    project::project(options, geometry)
}

#[cfg(test)]
mod tests;
