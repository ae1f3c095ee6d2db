//! Solid primitives.
//!
//! Flat faces are emitted whole where they are convex; curved surfaces are
//! latitude and longitude bands, closed at the poles with triangles.

use super::{check_non_negative, check_positive, check_segments};
use crate::error::{ModelingError, Result};
use crate::extrusions::{extrude_rotate, ExtrudeRotateOptions};
use crate::geometries::{Geom2, Geom3, Poly3};
use crate::hulls::hull_of_points;
use config::constants::{DEFAULT_SEGMENTS, EPS};
use glam::{DMat4, DVec2, DVec3};
use std::f64::consts::{FRAC_PI_2, PI, TAU};
use tracing::debug;

// =============================================================================
// BOXES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubeOptions {
    pub center: DVec3,
    pub size: f64,
}

impl Default for CubeOptions {
    fn default() -> Self {
        Self {
            center: DVec3::ZERO,
            size: 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CuboidOptions {
    pub center: DVec3,
    pub size: DVec3,
}

impl Default for CuboidOptions {
    fn default() -> Self {
        Self {
            center: DVec3::ZERO,
            size: DVec3::splat(2.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedCuboidOptions {
    pub center: DVec3,
    pub size: DVec3,
    pub round_radius: f64,
    pub segments: usize,
}

impl Default for RoundedCuboidOptions {
    fn default() -> Self {
        Self {
            center: DVec3::ZERO,
            size: DVec3::splat(2.0),
            round_radius: 0.2,
            segments: DEFAULT_SEGMENTS,
        }
    }
}

/// Corner indices of each face; bit 0 selects +X, bit 1 +Y, bit 2 +Z.
const CUBOID_FACES: [[usize; 4]; 6] = [
    [0, 4, 6, 2],
    [1, 3, 7, 5],
    [0, 1, 5, 4],
    [2, 6, 7, 3],
    [0, 2, 3, 1],
    [4, 5, 7, 6],
];

/// A cube with edges of `options.size`.
///
/// # Errors
///
/// Fails when the size is not positive.
pub fn cube(options: &CubeOptions) -> Result<Geom3> {
    check_positive("size", options.size)?;
    cuboid(&CuboidOptions {
        center: options.center,
        size: DVec3::splat(options.size),
    })
}

/// An axis-aligned box of six quadrilateral faces.
///
/// # Errors
///
/// Fails when any size is not positive.
pub fn cuboid(options: &CuboidOptions) -> Result<Geom3> {
    for size in options.size.to_array() {
        check_positive("size", size)?;
    }
    let half = options.size / 2.0;
    let corner = |index: usize| {
        let sign = |bit: usize| if index & bit == 0 { -1.0 } else { 1.0 };
        options.center + DVec3::new(sign(1), sign(2), sign(4)) * half
    };
    let polygons = CUBOID_FACES
        .iter()
        .map(|face| Poly3::new(face.iter().map(|&index| corner(index)).collect()))
        .collect();
    Ok(Geom3::from_polygons(polygons))
}

/// A box whose edges and corners are rounded by `options.round_radius`.
///
/// # Errors
///
/// Fails when any size is not positive, the round radius does not fit
/// within half of every size, or there are fewer than four segments.
pub fn rounded_cuboid(options: &RoundedCuboidOptions) -> Result<Geom3> {
    for size in options.size.to_array() {
        check_positive("size", size)?;
    }
    check_non_negative("round_radius", options.round_radius)?;
    let half = options.size / 2.0;
    if options.round_radius > half.min_element() - EPS {
        return Err(ModelingError::invalid_option(
            "round_radius",
            "must be smaller than half of every size",
        ));
    }
    check_segments("segments", options.segments, 4)?;
    if options.round_radius == 0.0 {
        return cuboid(&CuboidOptions {
            center: options.center,
            size: options.size,
        });
    }

    let ball = sphere_points(options.round_radius, options.segments);
    let inner = half - DVec3::splat(options.round_radius);
    let points: Vec<DVec3> = (0..8)
        .flat_map(|index: usize| {
            let sign = |bit: usize| if index & bit == 0 { -1.0 } else { 1.0 };
            let corner = options.center + DVec3::new(sign(1), sign(2), sign(4)) * inner;
            ball.iter().map(move |&offset| corner + offset)
        })
        .collect();
    debug!(points = points.len(), "rounded_cuboid");
    Ok(hull_of_points(&points))
}

// =============================================================================
// CYLINDERS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CylinderOptions {
    pub center: DVec3,
    pub height: f64,
    pub radius: f64,
    pub segments: usize,
}

impl Default for CylinderOptions {
    fn default() -> Self {
        Self {
            center: DVec3::ZERO,
            height: 2.0,
            radius: 1.0,
            segments: DEFAULT_SEGMENTS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CylinderEllipticOptions {
    pub center: DVec3,
    pub height: f64,
    /// Radii along X and Y at the bottom.
    pub start_radius: DVec2,
    /// Radii along X and Y at the top.
    pub end_radius: DVec2,
    pub segments: usize,
}

impl Default for CylinderEllipticOptions {
    fn default() -> Self {
        Self {
            center: DVec3::ZERO,
            height: 2.0,
            start_radius: DVec2::ONE,
            end_radius: DVec2::ONE,
            segments: DEFAULT_SEGMENTS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedCylinderOptions {
    pub center: DVec3,
    pub height: f64,
    pub radius: f64,
    pub round_radius: f64,
    pub segments: usize,
}

impl Default for RoundedCylinderOptions {
    fn default() -> Self {
        Self {
            center: DVec3::ZERO,
            height: 2.0,
            radius: 1.0,
            round_radius: 0.2,
            segments: DEFAULT_SEGMENTS,
        }
    }
}

/// A cylinder along Z, centered on `options.center`.
///
/// # Errors
///
/// Fails on a non-positive height or radius, or fewer than three segments.
pub fn cylinder(options: &CylinderOptions) -> Result<Geom3> {
    check_positive("radius", options.radius)?;
    cylinder_elliptic(&CylinderEllipticOptions {
        center: options.center,
        height: options.height,
        start_radius: DVec2::splat(options.radius),
        end_radius: DVec2::splat(options.radius),
        segments: options.segments,
    })
}

/// A cylinder along Z with elliptic ends of independent radii; a zero end
/// radius gives a cone.
///
/// Each end is a single convex cap and each segment of the wall a
/// quadrilateral, or a triangle where one end is a point.
///
/// # Errors
///
/// Fails on a non-positive height, negative radii, two point ends, or fewer
/// than three segments.
pub fn cylinder_elliptic(options: &CylinderEllipticOptions) -> Result<Geom3> {
    check_positive("height", options.height)?;
    for radius in [options.start_radius, options.end_radius] {
        check_non_negative("radius", radius.x)?;
        check_non_negative("radius", radius.y)?;
    }
    let start_is_point = options.start_radius.min_element() == 0.0;
    let end_is_point = options.end_radius.min_element() == 0.0;
    if start_is_point && end_is_point {
        return Err(ModelingError::invalid_option(
            "radius",
            "at most one end may have a zero radius",
        ));
    }
    check_segments("segments", options.segments, 0)?;

    let segments = options.segments;
    let half = options.height / 2.0;
    let ring = |radius: DVec2, z: f64| -> Vec<DVec3> {
        (0..segments)
            .map(|i| {
                let (sin, cos) = (TAU * i as f64 / segments as f64).sin_cos();
                options.center + DVec3::new(radius.x * cos, radius.y * sin, z)
            })
            .collect()
    };
    let bottom = ring(options.start_radius, -half);
    let top = ring(options.end_radius, half);
    let bottom_center = options.center - DVec3::Z * half;
    let top_center = options.center + DVec3::Z * half;

    let mut polygons = Vec::with_capacity(segments + 2);
    if !start_is_point {
        polygons.push(Poly3::new(bottom.iter().rev().copied().collect()));
    }
    for i in 0..segments {
        let j = (i + 1) % segments;
        let wall = if start_is_point {
            vec![bottom_center, top[j], top[i]]
        } else if end_is_point {
            vec![bottom[i], bottom[j], top_center]
        } else {
            vec![bottom[i], bottom[j], top[j], top[i]]
        };
        polygons.push(Poly3::new(wall));
    }
    if !end_is_point {
        polygons.push(Poly3::new(top));
    }
    Ok(Geom3::from_polygons(polygons))
}

/// A cylinder along Z whose rims are rounded by `options.round_radius`.
///
/// # Errors
///
/// Fails on a non-positive height or radius, a round radius larger than the
/// radius or half the height, or fewer than four segments.
pub fn rounded_cylinder(options: &RoundedCylinderOptions) -> Result<Geom3> {
    check_positive("height", options.height)?;
    check_positive("radius", options.radius)?;
    check_non_negative("round_radius", options.round_radius)?;
    let half = options.height / 2.0;
    if options.round_radius > options.radius || options.round_radius > half {
        return Err(ModelingError::invalid_option(
            "round_radius",
            "must not exceed the radius or half the height",
        ));
    }
    check_segments("segments", options.segments, 4)?;
    if options.round_radius == 0.0 {
        return cylinder(&CylinderOptions {
            center: options.center,
            height: options.height,
            radius: options.radius,
            segments: options.segments,
        });
    }

    // half profile in the XZ plane, revolved about Z
    let quarter = (options.segments / 4).max(1);
    let radius = options.round_radius;
    let reach = options.radius - radius;
    let rim = half - radius;
    let mut profile = vec![DVec2::new(0.0, -half)];
    for (corner, start) in [(DVec2::new(reach, -rim), -FRAC_PI_2), (DVec2::new(reach, rim), 0.0)] {
        for step in 0..=quarter {
            let angle = start + FRAC_PI_2 * step as f64 / quarter as f64;
            profile.push(corner + DVec2::from_angle(angle) * radius);
        }
    }
    profile.push(DVec2::new(0.0, half));
    profile.dedup();

    let solid = extrude_rotate(
        &ExtrudeRotateOptions {
            segments: options.segments,
            ..Default::default()
        },
        &Geom2::from_points(&profile)?,
    )?;
    Ok(solid.transform(&DMat4::from_translation(options.center)))
}

// =============================================================================
// SPHERES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereOptions {
    pub center: DVec3,
    pub radius: f64,
    pub segments: usize,
}

impl Default for SphereOptions {
    fn default() -> Self {
        Self {
            center: DVec3::ZERO,
            radius: 1.0,
            segments: DEFAULT_SEGMENTS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipsoidOptions {
    pub center: DVec3,
    pub radius: DVec3,
    /// Segments around the equator; a quarter of them span each quadrant
    /// of latitude.
    pub segments: usize,
}

impl Default for EllipsoidOptions {
    fn default() -> Self {
        Self {
            center: DVec3::ZERO,
            radius: DVec3::ONE,
            segments: DEFAULT_SEGMENTS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeodesicSphereOptions {
    pub radius: f64,
    /// Subdivision frequency; every multiple of six splits each
    /// icosahedron edge once more.
    pub frequency: usize,
}

impl Default for GeodesicSphereOptions {
    fn default() -> Self {
        Self {
            radius: 1.0,
            frequency: 6,
        }
    }
}

/// A sphere of latitude and longitude bands.
///
/// # Errors
///
/// Fails on a non-positive radius or fewer than four segments.
pub fn sphere(options: &SphereOptions) -> Result<Geom3> {
    check_positive("radius", options.radius)?;
    ellipsoid(&EllipsoidOptions {
        center: options.center,
        radius: DVec3::splat(options.radius),
        segments: options.segments,
    })
}

/// An ellipsoid of latitude and longitude bands.
///
/// # Errors
///
/// Fails on a non-positive radius or fewer than four segments.
pub fn ellipsoid(options: &EllipsoidOptions) -> Result<Geom3> {
    for radius in options.radius.to_array() {
        check_positive("radius", radius)?;
    }
    check_segments("segments", options.segments, 4)?;

    let segments = options.segments;
    let rings = latitude_rings(segments);
    let point = |step: usize, ring: usize| {
        let (sin_theta, cos_theta) = (TAU * step as f64 / segments as f64).sin_cos();
        let (sin_phi, cos_phi) = (PI * ring as f64 / rings as f64).sin_cos();
        options.center
            + DVec3::new(sin_phi * cos_theta, sin_phi * sin_theta, cos_phi) * options.radius
    };

    let mut polygons = Vec::with_capacity(segments * rings);
    for ring in 0..rings {
        for step in 0..segments {
            let next = step + 1;
            let vertices = if ring == 0 {
                vec![point(step, 0), point(step, 1), point(next, 1)]
            } else if ring + 1 == rings {
                vec![point(step, ring), point(step, rings), point(next, ring)]
            } else {
                vec![
                    point(step, ring),
                    point(step, ring + 1),
                    point(next, ring + 1),
                    point(next, ring),
                ]
            };
            polygons.push(Poly3::new(vertices));
        }
    }
    Ok(Geom3::from_polygons(polygons))
}

/// A sphere built from a subdivided icosahedron.
///
/// # Errors
///
/// Fails on a non-positive radius or a frequency below six.
pub fn geodesic_sphere(options: &GeodesicSphereOptions) -> Result<Geom3> {
    check_positive("radius", options.radius)?;
    if options.frequency < 6 {
        return Err(ModelingError::invalid_option("frequency", "must be 6 or more"));
    }

    let splits = options.frequency / 6;
    let corners = icosahedron();
    let mut polygons = Vec::with_capacity(ICOSAHEDRON_FACES.len() * splits * splits);
    for face in ICOSAHEDRON_FACES {
        let [a, b, c] = face.map(|index| corners[index]);
        let point = |i: usize, j: usize| {
            let along = (b - a) * (i as f64 / splits as f64) + (c - a) * (j as f64 / splits as f64);
            (a + along).normalize() * options.radius
        };
        for i in 0..splits {
            for j in 0..splits - i {
                polygons.push(Poly3::new(vec![point(i, j), point(i + 1, j), point(i, j + 1)]));
                if i + j + 1 < splits {
                    polygons.push(Poly3::new(vec![
                        point(i + 1, j),
                        point(i + 1, j + 1),
                        point(i, j + 1),
                    ]));
                }
            }
        }
    }
    debug!(splits, polygons = polygons.len(), "geodesic_sphere");
    Ok(Geom3::from_polygons(polygons))
}

/// Counter-clockwise from outside.
const ICOSAHEDRON_FACES: [[usize; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

fn icosahedron() -> [DVec3; 12] {
    let phi = (1.0 + 5.0_f64.sqrt()) / 2.0;
    [
        DVec3::new(-1.0, phi, 0.0),
        DVec3::new(1.0, phi, 0.0),
        DVec3::new(-1.0, -phi, 0.0),
        DVec3::new(1.0, -phi, 0.0),
        DVec3::new(0.0, -1.0, phi),
        DVec3::new(0.0, 1.0, phi),
        DVec3::new(0.0, -1.0, -phi),
        DVec3::new(0.0, 1.0, -phi),
        DVec3::new(phi, 0.0, -1.0),
        DVec3::new(phi, 0.0, 1.0),
        DVec3::new(-phi, 0.0, -1.0),
        DVec3::new(-phi, 0.0, 1.0),
    ]
}

/// Latitude bands from pole to pole for `segments` around the equator.
fn latitude_rings(segments: usize) -> usize {
    2 * ((segments as f64 / 4.0).round() as usize).max(1)
}

/// Points of a latitude and longitude sphere around the origin, including
/// both poles.
pub(crate) fn sphere_points(radius: f64, segments: usize) -> Vec<DVec3> {
    let rings = latitude_rings(segments);
    let mut points = vec![DVec3::Z * radius, DVec3::NEG_Z * radius];
    for ring in 1..rings {
        let (sin_phi, cos_phi) = (PI * ring as f64 / rings as f64).sin_cos();
        for step in 0..segments {
            let (sin_theta, cos_theta) = (TAU * step as f64 / segments as f64).sin_cos();
            points.push(DVec3::new(sin_phi * cos_theta, sin_phi * sin_theta, cos_phi) * radius);
        }
    }
    points
}

// =============================================================================
// TORUS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TorusOptions {
    /// Radius of the tube.
    pub inner_radius: f64,
    pub inner_segments: usize,
    /// Distance from the Z axis to the center of the tube.
    pub outer_radius: f64,
    pub outer_segments: usize,
    /// Rotation of the tube cross section about its own center.
    pub inner_rotation: f64,
}

impl Default for TorusOptions {
    fn default() -> Self {
        Self {
            inner_radius: 1.0,
            inner_segments: DEFAULT_SEGMENTS,
            outer_radius: 4.0,
            outer_segments: DEFAULT_SEGMENTS,
            inner_rotation: 0.0,
        }
    }
}

/// A ring torus about the Z axis.
///
/// # Errors
///
/// Fails on non-positive radii, a tube that reaches the axis, or fewer than
/// three segments in either direction.
pub fn torus(options: &TorusOptions) -> Result<Geom3> {
    check_positive("inner_radius", options.inner_radius)?;
    check_positive("outer_radius", options.outer_radius)?;
    if options.inner_radius >= options.outer_radius {
        return Err(ModelingError::invalid_option(
            "inner_radius",
            "must be smaller than the outer radius",
        ));
    }
    check_segments("inner_segments", options.inner_segments, 0)?;
    check_segments("outer_segments", options.outer_segments, 0)?;
    if !options.inner_rotation.is_finite() {
        return Err(ModelingError::invalid_option("inner_rotation", "must be finite"));
    }

    let center = DVec2::new(options.outer_radius, 0.0);
    let tube: Vec<DVec2> = (0..options.inner_segments)
        .map(|i| {
            let angle = options.inner_rotation + TAU * i as f64 / options.inner_segments as f64;
            center + DVec2::from_angle(angle) * options.inner_radius
        })
        .collect();
    extrude_rotate(
        &ExtrudeRotateOptions {
            segments: options.outer_segments,
            ..Default::default()
        },
        &Geom2::from_points(&tube)?,
    )
}

// =============================================================================
// POLYHEDRA
// =============================================================================

/// Winding of polyhedron faces seen from outside.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Orientation {
    /// Counter-clockwise from outside.
    #[default]
    Outward,
    /// Clockwise from outside.
    Inward,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolyhedronOptions {
    pub points: Vec<DVec3>,
    /// Faces as indices into `points`.
    pub faces: Vec<Vec<usize>>,
    pub orientation: Orientation,
}

/// A solid from explicit points and faces.
///
/// # Errors
///
/// Fails when there are no points or faces, a face has fewer than three
/// indices, or an index is out of range.
pub fn polyhedron(options: &PolyhedronOptions) -> Result<Geom3> {
    if options.points.is_empty() {
        return Err(ModelingError::invalid_option("points", "must not be empty"));
    }
    if options.faces.is_empty() {
        return Err(ModelingError::invalid_option("faces", "must not be empty"));
    }

    let polygons = options
        .faces
        .iter()
        .map(|face| {
            if face.len() < 3 {
                return Err(ModelingError::invalid_option(
                    "faces",
                    "every face needs three or more indices",
                ));
            }
            let mut vertices = face
                .iter()
                .map(|&index| {
                    options.points.get(index).copied().ok_or_else(|| {
                        ModelingError::invalid_option(
                            "faces",
                            format!("index {index} is out of range"),
                        )
                    })
                })
                .collect::<Result<Vec<DVec3>>>()?;
            if options.orientation == Orientation::Inward {
                vertices.reverse();
            }
            Ok(Poly3::new(vertices))
        })
        .collect::<Result<Vec<Poly3>>>()?;
    Ok(Geom3::from_polygons(polygons))
}
