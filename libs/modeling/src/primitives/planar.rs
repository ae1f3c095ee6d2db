//! Region primitives.

use super::{check_non_negative, check_positive, check_segments};
use crate::error::{ModelingError, Result};
use crate::geometries::geom2::outline_sides;
use crate::geometries::Geom2;
use config::constants::{DEFAULT_SEGMENTS, EPS};
use glam::DVec2;
use std::f64::consts::{PI, TAU};

// =============================================================================
// CIRCLES AND ELLIPSES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleOptions {
    pub center: DVec2,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub segments: usize,
}

impl Default for CircleOptions {
    fn default() -> Self {
        Self {
            center: DVec2::ZERO,
            radius: 1.0,
            start_angle: 0.0,
            end_angle: TAU,
            segments: DEFAULT_SEGMENTS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipseOptions {
    pub center: DVec2,
    /// Radius along X and along Y.
    pub radius: DVec2,
    pub start_angle: f64,
    pub end_angle: f64,
    /// Segments of the full ellipse; partial ellipses get their share.
    pub segments: usize,
}

impl Default for EllipseOptions {
    fn default() -> Self {
        Self {
            center: DVec2::ZERO,
            radius: DVec2::ONE,
            start_angle: 0.0,
            end_angle: TAU,
            segments: DEFAULT_SEGMENTS,
        }
    }
}

/// A circle, or a pie slice when the angles span less than a full turn.
///
/// # Errors
///
/// Fails on a non-positive radius, fewer than three segments, or angles
/// that span nothing.
pub fn circle(options: &CircleOptions) -> Result<Geom2> {
    check_positive("radius", options.radius)?;
    ellipse(&EllipseOptions {
        center: options.center,
        radius: DVec2::splat(options.radius),
        start_angle: options.start_angle,
        end_angle: options.end_angle,
        segments: options.segments,
    })
}

/// An ellipse, or an elliptic pie slice through the center when the angles
/// span less than a full turn.
///
/// # Errors
///
/// Fails on a non-positive radius, fewer than three segments, or angles
/// that span nothing.
pub fn ellipse(options: &EllipseOptions) -> Result<Geom2> {
    check_positive("radius", options.radius.x)?;
    check_positive("radius", options.radius.y)?;
    check_segments("segments", options.segments, 0)?;

    let rotation = angular_span(options.start_angle, options.end_angle)?;
    if rotation < EPS / options.radius.min_element() {
        return Err(ModelingError::invalid_option(
            "end_angle",
            "start and end angles do not span a significant rotation",
        ));
    }

    let full = rotation >= TAU;
    let segments = if full {
        options.segments
    } else {
        ((options.segments as f64 * rotation / TAU).floor() as usize).max(1)
    };
    let step = rotation / segments as f64;
    let count = if full { segments } else { segments + 1 };

    let mut points: Vec<DVec2> = (0..count)
        .map(|i| {
            let (sin, cos) = (options.start_angle + step * i as f64).sin_cos();
            options.center + DVec2::new(options.radius.x * cos, options.radius.y * sin)
        })
        .collect();
    if !full {
        points.push(options.center);
    }
    Geom2::from_points(&points)
}

/// Angle swept counter-clockwise from `start` to `end`, a full turn when
/// they coincide modulo a turn.
fn angular_span(start: f64, end: f64) -> Result<f64> {
    if !start.is_finite() {
        return Err(ModelingError::invalid_option("start_angle", "must be finite"));
    }
    if !end.is_finite() {
        return Err(ModelingError::invalid_option("end_angle", "must be finite"));
    }
    let start = start % TAU;
    let end = end % TAU;
    Ok(if start < end {
        end - start
    } else if start > end {
        end + TAU - start
    } else {
        TAU
    })
}

// =============================================================================
// POLYGONS
// =============================================================================

/// Outlines given directly, or as index lists into the flattened points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolygonOptions {
    /// One or more lists of points.
    pub points: Vec<Vec<DVec2>>,
    /// Outlines as indices into `points` flattened in order.
    pub paths: Option<Vec<Vec<usize>>>,
}

/// A region bounded by the given outlines, taken as wound.
///
/// Counter-clockwise outlines add area and clockwise outlines are holes.
///
/// # Errors
///
/// Fails when there are no points, an outline has fewer than three points,
/// or a path index is out of range.
pub fn polygon(options: &PolygonOptions) -> Result<Geom2> {
    let all_points: Vec<DVec2> = options.points.iter().flatten().copied().collect();
    if all_points.is_empty() {
        return Err(ModelingError::invalid_option("points", "must not be empty"));
    }

    let outlines: Vec<Vec<DVec2>> = match &options.paths {
        Some(paths) => paths
            .iter()
            .map(|path| {
                path.iter()
                    .map(|&index| {
                        all_points.get(index).copied().ok_or_else(|| {
                            ModelingError::invalid_option(
                                "paths",
                                format!("index {index} is out of range"),
                            )
                        })
                    })
                    .collect::<Result<Vec<DVec2>>>()
            })
            .collect::<Result<_>>()?,
        None => options.points.clone(),
    };

    let mut sides = Vec::new();
    for outline in &outlines {
        let mut outline = outline.as_slice();
        if outline.len() > 1 && outline.first() == outline.last() {
            outline = &outline[..outline.len() - 1];
        }
        if outline.len() < 3 {
            return Err(ModelingError::invalid_option(
                "points",
                "every outline needs three or more points",
            ));
        }
        sides.extend(outline_sides(outline));
    }
    Ok(Geom2::from_sides(sides))
}

// =============================================================================
// RECTANGLES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectangleOptions {
    pub center: DVec2,
    pub size: DVec2,
}

impl Default for RectangleOptions {
    fn default() -> Self {
        Self {
            center: DVec2::ZERO,
            size: DVec2::splat(2.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedRectangleOptions {
    pub center: DVec2,
    pub size: DVec2,
    pub round_radius: f64,
    /// Segments of a full circle; each corner gets a quarter.
    pub segments: usize,
}

impl Default for RoundedRectangleOptions {
    fn default() -> Self {
        Self {
            center: DVec2::ZERO,
            size: DVec2::splat(2.0),
            round_radius: 0.2,
            segments: DEFAULT_SEGMENTS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquareOptions {
    pub center: DVec2,
    pub size: f64,
}

impl Default for SquareOptions {
    fn default() -> Self {
        Self {
            center: DVec2::ZERO,
            size: 2.0,
        }
    }
}

/// An axis-aligned rectangle.
///
/// # Errors
///
/// Fails when either size is not positive.
pub fn rectangle(options: &RectangleOptions) -> Result<Geom2> {
    check_positive("size", options.size.x)?;
    check_positive("size", options.size.y)?;
    let half = options.size / 2.0;
    Geom2::from_points(&[
        options.center + DVec2::new(-half.x, -half.y),
        options.center + DVec2::new(half.x, -half.y),
        options.center + DVec2::new(half.x, half.y),
        options.center + DVec2::new(-half.x, half.y),
    ])
}

/// A rectangle with quarter circle corners.
///
/// # Errors
///
/// Fails when either size is not positive, the round radius does not fit
/// within half of both sizes, or there are fewer than four segments.
pub fn rounded_rectangle(options: &RoundedRectangleOptions) -> Result<Geom2> {
    check_positive("size", options.size.x)?;
    check_positive("size", options.size.y)?;
    check_non_negative("round_radius", options.round_radius)?;
    let half = options.size / 2.0;
    let radius = options.round_radius;
    if radius > half.x - EPS || radius > half.y - EPS {
        return Err(ModelingError::invalid_option(
            "round_radius",
            "must be smaller than half of every size",
        ));
    }
    check_segments("segments", options.segments, 4)?;
    if radius == 0.0 {
        return rectangle(&RectangleOptions {
            center: options.center,
            size: options.size,
        });
    }

    let quarter = options.segments / 4;
    let inner = half - DVec2::splat(radius);
    let corners = [
        DVec2::new(inner.x, inner.y),
        DVec2::new(-inner.x, inner.y),
        DVec2::new(-inner.x, -inner.y),
        DVec2::new(inner.x, -inner.y),
    ];
    let mut points = Vec::with_capacity(4 * (quarter + 1));
    for (index, corner) in corners.iter().enumerate() {
        for step in 0..=quarter {
            let angle = PI / 2.0 * (index as f64 + step as f64 / quarter as f64);
            points.push(options.center + *corner + DVec2::from_angle(angle) * radius);
        }
    }
    Geom2::from_points(&points)
}

/// A square with sides of `options.size`.
///
/// # Errors
///
/// Fails when the size is not positive.
pub fn square(options: &SquareOptions) -> Result<Geom2> {
    check_positive("size", options.size)?;
    rectangle(&RectangleOptions {
        center: options.center,
        size: DVec2::splat(options.size),
    })
}

// =============================================================================
// STARS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarOptions {
    pub center: DVec2,
    /// Number of outer points.
    pub vertices: usize,
    /// Outer points skipped by each edge of the star figure.
    pub density: usize,
    pub outer_radius: f64,
    /// Zero derives the radius from `vertices` and `density`.
    pub inner_radius: f64,
    pub start_angle: f64,
}

impl Default for StarOptions {
    fn default() -> Self {
        Self {
            center: DVec2::ZERO,
            vertices: 5,
            density: 2,
            outer_radius: 1.0,
            inner_radius: 0.0,
            start_angle: 0.0,
        }
    }
}

/// A star alternating between outer and inner points.
///
/// # Errors
///
/// Fails on fewer than two vertices, a density below two, a non-positive
/// outer radius, or a density that leaves no inner radius to derive.
pub fn star(options: &StarOptions) -> Result<Geom2> {
    if options.vertices < 2 {
        return Err(ModelingError::invalid_option("vertices", "must be 2 or more"));
    }
    if options.density < 2 {
        return Err(ModelingError::invalid_option("density", "must be 2 or more"));
    }
    check_positive("outer_radius", options.outer_radius)?;
    check_non_negative("inner_radius", options.inner_radius)?;
    if !options.start_angle.is_finite() {
        return Err(ModelingError::invalid_option("start_angle", "must be finite"));
    }

    let inner_radius = if options.inner_radius == 0.0 {
        radius_ratio(options.vertices, options.density) * options.outer_radius
    } else {
        options.inner_radius
    };
    if inner_radius == 0.0 {
        return Err(ModelingError::invalid_option(
            "density",
            "must be less than half the vertices to derive an inner radius",
        ));
    }

    let step = TAU / options.vertices as f64;
    let point = |angle: f64, radius: f64| options.center + DVec2::from_angle(angle) * radius;
    let points: Vec<DVec2> = (0..options.vertices)
        .flat_map(|i| {
            let angle = options.start_angle + step * i as f64;
            [
                point(angle, options.outer_radius),
                point(angle + step / 2.0, inner_radius),
            ]
        })
        .collect();
    Geom2::from_points(&points)
}

/// Inner to outer radius ratio of a regular star polygon `{vertices/density}`.
fn radius_ratio(vertices: usize, density: usize) -> f64 {
    let (n, d) = (vertices as f64, density as f64);
    if density > 1 && d < n / 2.0 {
        (PI * d / n).cos() / (PI * (d - 1.0) / n).cos()
    } else {
        0.0
    }
}
