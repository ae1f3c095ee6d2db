//! Path primitives.

use super::{check_positive, check_segments};
use crate::error::{ModelingError, Result};
use crate::geometries::Path2;
use config::constants::{DEFAULT_SEGMENTS, EPS, MIN_ARC_SEGMENTS};
use glam::DVec2;
use std::f64::consts::TAU;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcOptions {
    pub center: DVec2,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    /// Segments of a full circle.
    pub segments: usize,
    /// Adds short steps at both ends so the arc leaves and arrives along
    /// its tangents.
    pub make_tangent: bool,
}

impl Default for ArcOptions {
    fn default() -> Self {
        Self {
            center: DVec2::ZERO,
            radius: 1.0,
            start_angle: 0.0,
            end_angle: TAU,
            segments: DEFAULT_SEGMENTS,
            make_tangent: false,
        }
    }
}

/// A circular arc from `options.start_angle` counter-clockwise to
/// `options.end_angle`.
///
/// A full turn comes back closed, without repeating its first point;
/// shorter arcs are open. Angles too close together give a single point.
///
/// # Errors
///
/// Fails on a non-positive radius, non-finite angles, or fewer than four
/// segments.
pub fn arc(options: &ArcOptions) -> Result<Path2> {
    check_positive("radius", options.radius)?;
    check_segments("segments", options.segments, MIN_ARC_SEGMENTS)?;
    if !options.start_angle.is_finite() || !options.end_angle.is_finite() {
        return Err(ModelingError::invalid_option("end_angle", "angles must be finite"));
    }

    let mut rotation = options.end_angle - options.start_angle;
    if rotation < 0.0 {
        rotation = rotation.rem_euclid(TAU);
    }
    let rotation = rotation.min(TAU);
    let full_turn = rotation >= TAU;
    let point = |angle: f64| options.center + DVec2::from_angle(angle) * options.radius;

    // smallest angle whose chord is still EPS long
    let min_angle = (1.0 - EPS * EPS / (2.0 * options.radius * options.radius)).acos();
    if rotation < min_angle {
        return Ok(Path2::from_points(&[point(options.start_angle)], false));
    }

    let steps = ((options.segments as f64 * rotation / TAU).floor() as usize).max(1) + 1;
    let step_angle = rotation / steps as f64;
    let points: Vec<DVec2> = if options.make_tangent {
        let edge = (steps as f64 * 0.5 / rotation).min(0.25);
        (0..=steps + 2)
            .map(|i| {
                let step = ((i as f64 - 1.0) * (steps as f64 - 2.0 * edge) / steps as f64 + edge)
                    .clamp(0.0, steps as f64);
                point(options.start_angle + step * step_angle)
            })
            .collect()
    } else {
        (0..=steps)
            .map(|i| point(options.start_angle + i as f64 * step_angle))
            .collect()
    };
    Ok(Path2::from_points(&points, full_turn))
}

/// An open polyline through `points`.
///
/// # Errors
///
/// Fails on fewer than two points.
pub fn line(points: &[DVec2]) -> Result<Path2> {
    if points.len() < 2 {
        return Err(ModelingError::invalid_option("points", "a line needs two or more points"));
    }
    Ok(Path2::from_points(points, false))
}
