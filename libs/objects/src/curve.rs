//! # Curve2D
//!
//! A 2D path: the fluent wrapper over [`Path2`].
//!
//! Unlike regions and solids, paths have no boolean operations. Their hull
//! is a closed convex path, and a chained hull keeps only its first link.

use crate::region::PlanarRegion;
use crate::solid::SolidMesh;
use crate::traits::{GeometryWrapper, HullCombinable, Measurable, Transformable};
use glam::DVec2;
use modeling::expansions::{self, ExpandOptions, OffsetOptions};
use modeling::extrusions::{self, ExtrudeLinearOptions, ExtrudeRectangularOptions};
use modeling::geometries::path2::{AppendArcOptions, AppendBezierOptions};
use modeling::primitives::{self, ArcOptions};
use modeling::{Path2, Result};
use std::fmt;
use tracing::trace;

/// An immutable sequence of 2D points, open or closed.
///
/// # Example
///
/// ```rust,ignore
/// use modeling_objects::prelude::*;
///
/// let outline = Curve2D::line(&[DVec2::ZERO, DVec2::new(10.0, 0.0)])?
///     .append_arc(&AppendArcOptions { radius: DVec2::splat(5.0), ..AppendArcOptions::new(DVec2::new(10.0, 10.0)) })?
///     .close();
/// let plate = outline.extrude_linear(&ExtrudeLinearOptions::default())?;
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Curve2D {
    geometry: Path2,
}

impl GeometryWrapper for Curve2D {
    type Geometry = Path2;

    fn geometry(&self) -> &Path2 {
        &self.geometry
    }

    fn into_geometry(self) -> Path2 {
        self.geometry
    }

    fn from_geometry(geometry: Path2) -> Self {
        Self { geometry }
    }
}

impl Transformable for Curve2D {}
impl Measurable for Curve2D {}
impl HullCombinable for Curve2D {}

// =============================================================================
// CONSTRUCTION
// =============================================================================

impl Curve2D {
    /// An empty open path.
    pub fn new() -> Self {
        Self::default()
    }

    /// A path through `points`, closed only when `closed` is set.
    pub fn from_points(points: &[DVec2], closed: bool) -> Self {
        Self::from_geometry(Path2::from_points(points, closed))
    }

    /// A circular arc; closed for a full turn, open otherwise.
    ///
    /// # Errors
    ///
    /// Fails on a non-positive radius or fewer than four segments.
    pub fn arc(options: &ArcOptions) -> Result<Self> {
        primitives::arc(options).map(Self::from_geometry)
    }

    /// An open polyline.
    ///
    /// # Errors
    ///
    /// Fails on fewer than two points.
    pub fn line(points: &[DVec2]) -> Result<Self> {
        primitives::line(points).map(Self::from_geometry)
    }
}

// =============================================================================
// ACCESSORS AND PRODUCERS
// =============================================================================

impl Curve2D {
    pub fn is_closed(&self) -> bool {
        self.geometry.is_closed
    }

    /// The points, borrowed.
    pub fn to_points(&self) -> &[DVec2] {
        self.geometry.to_points()
    }

    /// Appends a point; the result is open.
    pub fn append_point(&self, point: DVec2) -> Self {
        Self::from_geometry(self.geometry.append_point(point))
    }

    /// Appends points; the result is open.
    pub fn append_points(&self, points: &[DVec2]) -> Self {
        Self::from_geometry(self.geometry.append_points(points))
    }

    /// Appends an SVG style elliptical arc.
    ///
    /// # Errors
    ///
    /// Fails on closed or empty paths and fewer than four segments.
    pub fn append_arc(&self, options: &AppendArcOptions) -> Result<Self> {
        self.geometry.append_arc(options).map(Self::from_geometry)
    }

    /// Appends a bezier curve through `options.control_points`.
    ///
    /// # Errors
    ///
    /// Fails on closed or empty paths, missing control points, or a `None`
    /// anywhere but first.
    pub fn append_bezier(&self, options: &AppendBezierOptions) -> Result<Self> {
        self.geometry.append_bezier(options).map(Self::from_geometry)
    }

    /// Joins `other` to the end of this path, dropping a shared junction
    /// point. The result is closed when its ends meet.
    ///
    /// # Errors
    ///
    /// Fails when this path is closed.
    pub fn concat(&self, other: &Curve2D) -> Result<Self> {
        Path2::concat(&[&self.geometry, &other.geometry]).map(Self::from_geometry)
    }

    pub fn close(&self) -> Self {
        Self::from_geometry(self.geometry.close())
    }

    /// Moves the path sideways by `options.delta`, to the right of its
    /// direction for positive deltas.
    ///
    /// # Errors
    ///
    /// Fails on a non-finite delta or too few segments.
    pub fn offset(&self, options: &OffsetOptions) -> Result<Self> {
        expansions::offset(options, &self.geometry).map(Self::from_geometry)
    }

    pub fn reverse(&self) -> Self {
        Self::from_geometry(self.geometry.reverse())
    }
}

// =============================================================================
// CONVERSIONS
// =============================================================================

impl Curve2D {
    /// The region within `options.delta` of the path.
    ///
    /// # Errors
    ///
    /// Fails on a non-positive delta or too few segments.
    pub fn expand(&self, options: &ExpandOptions) -> Result<PlanarRegion> {
        trace!(delta = options.delta, "path to region by expansion");
        expansions::expand(options, &self.geometry).map(PlanarRegion::from_geometry)
    }

    /// Extrudes the area enclosed by the path.
    ///
    /// # Errors
    ///
    /// Fails on an open path or a zero height.
    pub fn extrude_linear(&self, options: &ExtrudeLinearOptions) -> Result<SolidMesh> {
        trace!(height = options.height, "path to solid by linear extrusion");
        extrusions::extrude_linear(options, &self.geometry).map(SolidMesh::from_geometry)
    }

    /// Sweeps a rectangle along the path.
    ///
    /// # Errors
    ///
    /// Fails on a non-positive size or an empty path.
    pub fn extrude_rectangular(&self, options: &ExtrudeRectangularOptions) -> Result<SolidMesh> {
        trace!(size = options.size, "path to solid by rectangular extrusion");
        extrusions::extrude_rectangular(options, &self.geometry).map(SolidMesh::from_geometry)
    }
}

impl fmt::Display for Curve2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Curve2D: {}", self.geometry)
    }
}
