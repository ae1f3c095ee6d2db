//! # PlanarRegion
//!
//! A 2D region: the fluent wrapper over [`Geom2`].

use crate::solid::SolidMesh;
use crate::traits::{
    BooleanCombinable, GeometryWrapper, HullCombinable, Measurable, Transformable,
};
use glam::DVec2;
use modeling::expansions::{self, ExpandOptions, OffsetOptions};
use modeling::extrusions::{
    self, ExtrudeHelicalOptions, ExtrudeLinearOptions, ExtrudeRectangularOptions,
    ExtrudeRotateOptions,
};
use modeling::geometries::Side;
use modeling::primitives::{
    self, CircleOptions, EllipseOptions, PolygonOptions, RectangleOptions,
    RoundedRectangleOptions, SquareOptions, StarOptions,
};
use modeling::{Geom2, Result};
use std::fmt;
use tracing::trace;

/// An immutable 2D region bounded by directed sides.
///
/// # Example
///
/// ```rust,ignore
/// use modeling_objects::prelude::*;
///
/// let plate = PlanarRegion::square(&SquareOptions { size: 10.0, ..Default::default() })?;
/// let hole = PlanarRegion::circle(&CircleOptions::default())?;
/// let block = plate.subtract([&hole])?.extrude_linear(&ExtrudeLinearOptions::default())?;
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanarRegion {
    geometry: Geom2,
}

impl GeometryWrapper for PlanarRegion {
    type Geometry = Geom2;

    fn geometry(&self) -> &Geom2 {
        &self.geometry
    }

    fn into_geometry(self) -> Geom2 {
        self.geometry
    }

    fn from_geometry(geometry: Geom2) -> Self {
        Self { geometry }
    }
}

impl Transformable for PlanarRegion {}
impl Measurable for PlanarRegion {}
impl BooleanCombinable for PlanarRegion {}
impl HullCombinable for PlanarRegion {}

// =============================================================================
// CONSTRUCTION
// =============================================================================

impl PlanarRegion {
    /// An empty region.
    pub fn new() -> Self {
        Self::default()
    }

    /// A region bounded by one closed outline of `points`.
    ///
    /// # Errors
    ///
    /// Fails on fewer than three points.
    pub fn from_points(points: &[DVec2]) -> Result<Self> {
        Geom2::from_points(points).map(Self::from_geometry)
    }

    pub fn circle(options: &CircleOptions) -> Result<Self> {
        primitives::circle(options).map(Self::from_geometry)
    }

    pub fn ellipse(options: &EllipseOptions) -> Result<Self> {
        primitives::ellipse(options).map(Self::from_geometry)
    }

    pub fn polygon(options: &PolygonOptions) -> Result<Self> {
        primitives::polygon(options).map(Self::from_geometry)
    }

    pub fn rectangle(options: &RectangleOptions) -> Result<Self> {
        primitives::rectangle(options).map(Self::from_geometry)
    }

    pub fn rounded_rectangle(options: &RoundedRectangleOptions) -> Result<Self> {
        primitives::rounded_rectangle(options).map(Self::from_geometry)
    }

    pub fn square(options: &SquareOptions) -> Result<Self> {
        primitives::square(options).map(Self::from_geometry)
    }

    pub fn star(options: &StarOptions) -> Result<Self> {
        primitives::star(options).map(Self::from_geometry)
    }
}

// =============================================================================
// ACCESSORS AND PRODUCERS
// =============================================================================

impl PlanarRegion {
    /// The directed sides, borrowed.
    pub fn to_sides(&self) -> &[Side] {
        self.geometry.to_sides()
    }

    /// Closed outlines recovered by chaining the sides.
    pub fn to_outlines(&self) -> Vec<Vec<DVec2>> {
        self.geometry.to_outlines()
    }

    /// Grows or shrinks the region by `options.delta`.
    ///
    /// # Errors
    ///
    /// Fails on a non-finite delta or too few segments.
    pub fn expand(&self, options: &ExpandOptions) -> Result<Self> {
        expansions::expand(options, &self.geometry).map(Self::from_geometry)
    }

    /// Moves every outline by `options.delta`.
    ///
    /// # Errors
    ///
    /// Fails on a non-finite delta or too few segments.
    pub fn offset(&self, options: &OffsetOptions) -> Result<Self> {
        expansions::offset(options, &self.geometry).map(Self::from_geometry)
    }

    /// Flips the winding of every side.
    pub fn reverse(&self) -> Self {
        Self::from_geometry(self.geometry.reverse())
    }
}

// =============================================================================
// EXTRUSIONS
// =============================================================================

impl PlanarRegion {
    /// # Errors
    ///
    /// Fails on a zero height or zero twist steps.
    pub fn extrude_linear(&self, options: &ExtrudeLinearOptions) -> Result<SolidMesh> {
        trace!(height = options.height, "region to solid by linear extrusion");
        extrusions::extrude_linear(options, &self.geometry).map(SolidMesh::from_geometry)
    }

    /// Sweeps a rectangle along every outline.
    ///
    /// # Errors
    ///
    /// Fails on a non-positive size or an empty region.
    pub fn extrude_rectangular(&self, options: &ExtrudeRectangularOptions) -> Result<SolidMesh> {
        trace!(size = options.size, "region to solid by rectangular extrusion");
        extrusions::extrude_rectangular(options, &self.geometry).map(SolidMesh::from_geometry)
    }

    /// # Errors
    ///
    /// Fails on fewer than three segments or a zero angle.
    pub fn extrude_rotate(&self, options: &ExtrudeRotateOptions) -> Result<SolidMesh> {
        trace!(angle = options.angle, "region to solid by rotation");
        extrusions::extrude_rotate(options, &self.geometry).map(SolidMesh::from_geometry)
    }

    /// # Errors
    ///
    /// Fails on too few segments, a zero angle, or a region on both sides of
    /// the Y axis.
    pub fn extrude_helical(&self, options: &ExtrudeHelicalOptions) -> Result<SolidMesh> {
        trace!(pitch = options.pitch, "region to solid by helical extrusion");
        extrusions::extrude_helical(options, &self.geometry).map(SolidMesh::from_geometry)
    }
}

impl fmt::Display for PlanarRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PlanarRegion: {}", self.geometry)
    }
}
