//! # Expansions
//!
//! Growing and shrinking geometry by a distance.
//!
//! - [`offset`] moves the boundary of regions and paths, keeping the kind
//! - [`expand`] grows regions and solids, and turns paths into regions of
//!   the given half width
//!
//! Positive distances grow, negative distances shrink. Expansions keep the
//! color of their input.
//!
//! ## Example
//!
//! ```rust,ignore
//! use modeling::expansions::{expand, offset, ExpandOptions, OffsetOptions};
//!
//! let border = offset(&OffsetOptions { delta: 2.0, ..Default::default() }, &square)?;
//! let stroke = expand(&ExpandOptions { delta: 0.5, ..Default::default() }, &path)?;
//! ```

mod expand;
mod offset;

use crate::error::{ModelingError, Result};
use crate::geometries::{Geom2, Geom3, Path2};
use config::constants::{DEFAULT_CURVE_SEGMENTS, MIN_ARC_SEGMENTS};
use offset::{keeps_orientation, OffsetPass};
use tracing::debug;

/// How the gap at a convex corner is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Corners {
    /// Extend the neighbouring sides until they meet.
    #[default]
    Edge,
    /// Join the neighbouring sides with a straight cut.
    Chamfer,
    /// Join the neighbouring sides with a circular arc.
    Round,
}

/// Parameters for [`offset`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetOptions {
    /// Signed distance; negative shrinks.
    pub delta: f64,
    pub corners: Corners,
    /// Segments of a full circle for round corners.
    pub segments: usize,
}

impl Default for OffsetOptions {
    fn default() -> Self {
        Self {
            delta: 1.0,
            corners: Corners::Edge,
            segments: DEFAULT_CURVE_SEGMENTS,
        }
    }
}

/// Parameters for [`expand`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpandOptions {
    /// Signed distance; negative shrinks. Paths need a positive half width.
    pub delta: f64,
    pub corners: Corners,
    /// Segments of a full circle for round corners and solid rounding.
    pub segments: usize,
}

impl Default for ExpandOptions {
    fn default() -> Self {
        Self {
            delta: 1.0,
            corners: Corners::Edge,
            segments: DEFAULT_CURVE_SEGMENTS,
        }
    }
}

fn validate(delta: f64, segments: usize) -> Result<()> {
    if !delta.is_finite() {
        return Err(ModelingError::invalid_option("delta", "must be a finite number"));
    }
    if segments < MIN_ARC_SEGMENTS {
        return Err(ModelingError::invalid_option(
            "segments",
            format!("must be {MIN_ARC_SEGMENTS} or more"),
        ));
    }
    Ok(())
}

// =============================================================================
// OFFSET
// =============================================================================

/// Geometry values whose boundary can be offset.
pub trait Offset: Sized {
    fn offset(&self, options: &OffsetOptions) -> Result<Self>;
}

impl Offset for Geom2 {
    /// Offsets every outline. Holes shrink as the region grows; outlines
    /// that collapse are dropped.
    fn offset(&self, options: &OffsetOptions) -> Result<Self> {
        validate(options.delta, options.segments)?;
        Ok(offset_region(self, options.delta, options.corners, options.segments))
    }
}

impl Offset for Path2 {
    /// Moves every point to the right of travel by `delta`; the closed flag
    /// is kept.
    fn offset(&self, options: &OffsetOptions) -> Result<Self> {
        validate(options.delta, options.segments)?;
        let pass = OffsetPass {
            delta: options.delta,
            corners: options.corners,
            segments: options.segments,
            keep_side_ends: false,
        };
        let points = pass.apply(&self.points, self.is_closed);
        let mut result = Path2::from_points(&points, self.is_closed);
        result.color = self.color;
        Ok(result)
    }
}

fn offset_region(region: &Geom2, delta: f64, corners: Corners, segments: usize) -> Geom2 {
    let pass = OffsetPass {
        delta,
        corners,
        segments,
        keep_side_ends: true,
    };
    let outlines: Vec<_> = region
        .to_outlines()
        .into_iter()
        .filter_map(|outline| {
            let moved = pass.apply(&outline, true);
            (moved.len() >= 3 && keeps_orientation(&outline, &moved)).then_some(moved)
        })
        .collect();
    Geom2 {
        color: region.color,
        ..Geom2::from_outlines(&outlines)
    }
}

/// Offsets the boundary of `geometry` by `options.delta`.
///
/// # Errors
///
/// Fails on a non-finite delta or fewer than four segments.
pub fn offset<G: Offset>(options: &OffsetOptions, geometry: &G) -> Result<G> {
    debug!(delta = options.delta, corners = ?options.corners, "offset");
    geometry.offset(options)
}

// =============================================================================
// EXPAND
// =============================================================================

/// Geometry values that can be expanded.
pub trait Expand {
    /// Kind of the expanded value.
    type Output;

    fn expand(&self, options: &ExpandOptions) -> Result<Self::Output>;
}

impl Expand for Geom2 {
    type Output = Geom2;

    /// Same as offsetting every outline by `delta`.
    fn expand(&self, options: &ExpandOptions) -> Result<Geom2> {
        validate(options.delta, options.segments)?;
        Ok(offset_region(self, options.delta, options.corners, options.segments))
    }
}

impl Expand for Path2 {
    type Output = Geom2;

    /// The region within `delta` of the path. Closed paths become rings;
    /// open paths get flat ends, or round ends with [`Corners::Round`].
    fn expand(&self, options: &ExpandOptions) -> Result<Geom2> {
        validate(options.delta, options.segments)?;
        if options.delta <= 0.0 {
            return Err(ModelingError::invalid_option(
                "delta",
                "expanding a path needs a positive half width",
            ));
        }
        let mut region = expand::stroke(self, options);
        region.color = self.color;
        Ok(region)
    }
}

impl Expand for Geom3 {
    type Output = Geom3;

    /// Rounds the solid with a sphere of radius `|delta|`: the sphere swept
    /// over the surface is added for positive deltas and removed for
    /// negative ones.
    fn expand(&self, options: &ExpandOptions) -> Result<Geom3> {
        validate(options.delta, options.segments)?;
        let mut solid = expand::round_solid(self, options.delta, options.segments)?;
        solid.color = self.color;
        Ok(solid)
    }
}

/// Expands `geometry` by `options.delta`.
///
/// # Errors
///
/// Fails on a non-finite delta, fewer than four segments, or a path with a
/// non-positive delta.
pub fn expand<G: Expand>(options: &ExpandOptions, geometry: &G) -> Result<G::Output> {
    debug!(delta = options.delta, corners = ?options.corners, "expand");
    geometry.expand(options)
}
