//! # SolidMesh
//!
//! A 3D solid: the fluent wrapper over [`Geom3`].

use crate::region::PlanarRegion;
use crate::traits::{
    BooleanCombinable, GeometryWrapper, HullCombinable, Measurable, Transformable,
};
use glam::DVec3;
use modeling::booleans;
use modeling::expansions::{self, ExpandOptions};
use modeling::extrusions::{self, ProjectOptions};
use modeling::primitives::{
    self, CubeOptions, CuboidOptions, CylinderEllipticOptions, CylinderOptions, EllipsoidOptions,
    GeodesicSphereOptions, PolyhedronOptions, RoundedCuboidOptions, RoundedCylinderOptions,
    SphereOptions, TorusOptions,
};
use modeling::{Geom3, Poly3, Result};
use std::fmt;
use tracing::trace;

/// An immutable solid bounded by planar convex polygons.
///
/// # Example
///
/// ```rust,ignore
/// use modeling_objects::prelude::*;
///
/// let block = SolidMesh::cuboid(&CuboidOptions { size: DVec3::new(3.0, 5.0, 7.0), ..Default::default() })?;
/// assert_eq!(block.measure_volume(), 105.0);
/// let shadow = block.project(&ProjectOptions::default())?;
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SolidMesh {
    geometry: Geom3,
}

impl GeometryWrapper for SolidMesh {
    type Geometry = Geom3;

    fn geometry(&self) -> &Geom3 {
        &self.geometry
    }

    fn into_geometry(self) -> Geom3 {
        self.geometry
    }

    fn from_geometry(geometry: Geom3) -> Self {
        Self { geometry }
    }
}

impl Transformable for SolidMesh {}
impl Measurable for SolidMesh {}
impl BooleanCombinable for SolidMesh {}
impl HullCombinable for SolidMesh {}

// =============================================================================
// CONSTRUCTION
// =============================================================================

impl SolidMesh {
    /// An empty solid.
    pub fn new() -> Self {
        Self::default()
    }

    /// A solid with one polygon per list of points.
    pub fn from_points(lists: &[Vec<DVec3>]) -> Self {
        Self::from_geometry(Geom3::from_points(lists))
    }

    pub fn cube(options: &CubeOptions) -> Result<Self> {
        primitives::cube(options).map(Self::from_geometry)
    }

    pub fn cuboid(options: &CuboidOptions) -> Result<Self> {
        primitives::cuboid(options).map(Self::from_geometry)
    }

    pub fn cylinder(options: &CylinderOptions) -> Result<Self> {
        primitives::cylinder(options).map(Self::from_geometry)
    }

    pub fn cylinder_elliptic(options: &CylinderEllipticOptions) -> Result<Self> {
        primitives::cylinder_elliptic(options).map(Self::from_geometry)
    }

    pub fn ellipsoid(options: &EllipsoidOptions) -> Result<Self> {
        primitives::ellipsoid(options).map(Self::from_geometry)
    }

    pub fn geodesic_sphere(options: &GeodesicSphereOptions) -> Result<Self> {
        primitives::geodesic_sphere(options).map(Self::from_geometry)
    }

    pub fn polyhedron(options: &PolyhedronOptions) -> Result<Self> {
        primitives::polyhedron(options).map(Self::from_geometry)
    }

    pub fn rounded_cuboid(options: &RoundedCuboidOptions) -> Result<Self> {
        primitives::rounded_cuboid(options).map(Self::from_geometry)
    }

    pub fn rounded_cylinder(options: &RoundedCylinderOptions) -> Result<Self> {
        primitives::rounded_cylinder(options).map(Self::from_geometry)
    }

    pub fn sphere(options: &SphereOptions) -> Result<Self> {
        primitives::sphere(options).map(Self::from_geometry)
    }

    pub fn torus(options: &TorusOptions) -> Result<Self> {
        primitives::torus(options).map(Self::from_geometry)
    }
}

// =============================================================================
// ACCESSORS AND PRODUCERS
// =============================================================================

impl SolidMesh {
    /// The polygons, borrowed.
    pub fn to_polygons(&self) -> &[Poly3] {
        self.geometry.to_polygons()
    }

    /// The vertices of every polygon.
    pub fn to_points(&self) -> Vec<Vec<DVec3>> {
        self.geometry.to_points()
    }

    /// Rounds the solid with a sphere of radius `|options.delta|`; negative
    /// deltas carve it away instead.
    ///
    /// # Errors
    ///
    /// Fails on a non-finite delta or too few segments.
    pub fn expand(&self, options: &ExpandOptions) -> Result<Self> {
        expansions::expand(options, &self.geometry).map(Self::from_geometry)
    }

    /// Turns the solid inside out.
    pub fn invert(&self) -> Self {
        Self::from_geometry(self.geometry.invert())
    }

    /// One solid per island of polygons connected through shared vertices.
    pub fn scission(&self) -> Vec<SolidMesh> {
        booleans::scission(&self.geometry)
            .into_iter()
            .map(Self::from_geometry)
            .collect()
    }

    /// The shadow of the solid on a plane.
    ///
    /// # Errors
    ///
    /// Fails on a zero axis.
    pub fn project(&self, options: &ProjectOptions) -> Result<PlanarRegion> {
        trace!(axis = %options.axis, "solid to region by projection");
        extrusions::project(options, &self.geometry).map(PlanarRegion::from_geometry)
    }
}

impl fmt::Display for SolidMesh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SolidMesh: {}", self.geometry)
    }
}
