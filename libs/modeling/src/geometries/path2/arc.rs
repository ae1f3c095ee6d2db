//! Elliptical arcs appended to the end of a path, parameterized the way SVG
//! arc commands are: by endpoint, radii, axis rotation and the two arc flags.

use super::Path2;
use crate::error::{ModelingError, Result};
use config::constants::{DEFAULT_CURVE_SEGMENTS, MIN_ARC_SEGMENTS};
use glam::DVec2;
use std::f64::consts::TAU;

/// Rounding grid applied to intermediate arc values so that arcs meeting at
/// the same point produce identical coordinates.
const DECIMALS: f64 = 100_000.0;

fn round_to_grid(value: f64) -> f64 {
    (value * DECIMALS).round() / DECIMALS
}

/// Parameters for [`Path2::append_arc`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppendArcOptions {
    /// End of the arc.
    pub endpoint: DVec2,
    /// Radii of the ellipse; a zero radius draws a straight line.
    pub radius: DVec2,
    /// Rotation of the ellipse X axis in radians.
    pub x_axis_rotation: f64,
    /// Sweep clockwise instead of counter-clockwise.
    pub clockwise: bool,
    /// Take the arc spanning more than 180 degrees.
    pub large: bool,
    /// Segments for a full revolution; at least four.
    pub segments: usize,
}

impl AppendArcOptions {
    /// Options for an arc ending at `endpoint` with default flags.
    pub fn new(endpoint: DVec2) -> Self {
        Self {
            endpoint,
            ..Self::default()
        }
    }
}

impl Default for AppendArcOptions {
    fn default() -> Self {
        Self {
            endpoint: DVec2::ZERO,
            radius: DVec2::ZERO,
            x_axis_rotation: 0.0,
            clockwise: false,
            large: false,
            segments: DEFAULT_CURVE_SEGMENTS,
        }
    }
}

impl Path2 {
    /// Appends an elliptical arc from the current end to `options.endpoint`.
    ///
    /// Radii too small to reach the endpoint are scaled up uniformly.
    ///
    /// # Errors
    ///
    /// Fails on closed or empty paths and when fewer than four segments are
    /// requested.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let path = Path2::from_points(&[DVec2::new(27.0, -22.0), DVec2::new(27.0, -3.0)], false);
    /// let mut options = AppendArcOptions::new(DVec2::new(12.0, -22.0));
    /// options.radius = DVec2::new(15.0, -20.0);
    /// let arc = path.append_arc(&options)?;
    /// ```
    pub fn append_arc(&self, options: &AppendArcOptions) -> Result<Self> {
        if options.segments < MIN_ARC_SEGMENTS {
            return Err(ModelingError::invalid_option(
                "segments",
                format!("must be {MIN_ARC_SEGMENTS} or more"),
            ));
        }
        let start = self.last_point("append an arc to")?;
        let end = DVec2::new(
            round_to_grid(options.endpoint.x),
            round_to_grid(options.endpoint.y),
        );

        let new_points = if options.radius.x == 0.0 || options.radius.y == 0.0 {
            vec![end]
        } else {
            arc_points(start, end, options)
        };

        let mut joined = self.points.clone();
        joined.extend(new_points);
        let mut result = Path2::from_points(&joined, false);
        result.color = self.color;
        Ok(result)
    }
}

/// Points after `start` along the arc, ending exactly at the requested
/// endpoint.
fn arc_points(start: DVec2, end: DVec2, options: &AppendArcOptions) -> Vec<DVec2> {
    let mut rx = options.radius.x.abs();
    let mut ry = options.radius.y.abs();
    let mut new_points = Vec::new();
    let sweep = !options.clockwise;
    let (sin_phi, cos_phi) = options.x_axis_rotation.sin_cos();

    // endpoint to center conversion
    let half = (start - end) * 0.5;
    let start_rotated = DVec2::new(
        round_to_grid(cos_phi * half.x + sin_phi * half.y),
        round_to_grid(-sin_phi * half.x + cos_phi * half.y),
    );
    let lambda = (start_rotated.x * start_rotated.x) / (rx * rx)
        + (start_rotated.y * start_rotated.y) / (ry * ry);
    if lambda > 1.0 {
        let scale = lambda.sqrt();
        rx = round_to_grid(rx * scale);
        ry = round_to_grid(ry * scale);
    }

    let numerator = rx * rx * ry * ry
        - rx * rx * start_rotated.y * start_rotated.y
        - ry * ry * start_rotated.x * start_rotated.x;
    let denominator =
        rx * rx * start_rotated.y * start_rotated.y + ry * ry * start_rotated.x * start_rotated.x;
    let mut multiplier = if denominator > 0.0 {
        (numerator / denominator).max(0.0).sqrt()
    } else {
        0.0
    };
    if sweep == options.large {
        multiplier = -multiplier;
    }
    let center_rotated =
        DVec2::new(rx * start_rotated.y / ry, -ry * start_rotated.x / rx) * multiplier;
    let center = DVec2::new(
        cos_phi * center_rotated.x - sin_phi * center_rotated.y,
        sin_phi * center_rotated.x + cos_phi * center_rotated.y,
    ) + (start + end) * 0.5;

    let v1 = DVec2::new(
        (start_rotated.x - center_rotated.x) / rx,
        (start_rotated.y - center_rotated.y) / ry,
    );
    let v2 = DVec2::new(
        (-start_rotated.x - center_rotated.x) / rx,
        (-start_rotated.y - center_rotated.y) / ry,
    );
    let theta1 = v1.y.atan2(v1.x);
    let theta2 = v2.y.atan2(v2.x);
    let mut delta = (theta2 - theta1) % TAU;
    if !sweep && delta > 0.0 {
        delta -= TAU;
    } else if sweep && delta < 0.0 {
        delta += TAU;
    }

    let steps = ((delta.abs() / TAU * options.segments as f64).ceil() as usize + 1).max(1);
    for step in 1..steps {
        let theta = theta1 + step as f64 / steps as f64 * delta;
        let (sin_theta, cos_theta) = theta.sin_cos();
        let point = DVec2::new(
            cos_phi * rx * cos_theta - sin_phi * ry * sin_theta,
            sin_phi * rx * cos_theta + cos_phi * ry * sin_theta,
        );
        new_points.push(point + center);
    }
    new_points.push(options.endpoint);
    new_points
}
