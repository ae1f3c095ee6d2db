//! Bezier curves of any order appended to the end of a path.

use super::Path2;
use crate::error::{ModelingError, Result};
use config::constants::{DEFAULT_CURVE_SEGMENTS, MIN_ARC_SEGMENTS};
use glam::DVec2;
use std::f64::consts::TAU;

/// Cusps stop subdividing once the parameter interval gets this small.
const MIN_PARAMETER_SPAN: f64 = 1e-9;

/// Parameters for [`Path2::append_bezier`].
#[derive(Debug, Clone, PartialEq)]
pub struct AppendBezierOptions {
    /// Control points after the current path end. The last one is the end of
    /// the curve. Only the first entry may be `None`, which mirrors the last
    /// control point of the previous curve through the current end.
    pub control_points: Vec<Option<DVec2>>,
    /// Segments for a full turn; bounds the angle between output segments.
    pub segments: usize,
}

impl Default for AppendBezierOptions {
    fn default() -> Self {
        Self {
            control_points: Vec::new(),
            segments: DEFAULT_CURVE_SEGMENTS,
        }
    }
}

impl AppendBezierOptions {
    /// Options with the given control points and default segments.
    pub fn new(control_points: Vec<Option<DVec2>>) -> Self {
        Self {
            control_points,
            ..Self::default()
        }
    }
}

/// Evaluates a bezier curve with Bernstein polynomials.
struct Bezier {
    control_points: Vec<DVec2>,
    binomials: Vec<f64>,
}

impl Bezier {
    fn new(control_points: Vec<DVec2>) -> Self {
        let order = control_points.len() - 1;
        let mut binomials = Vec::with_capacity(order + 1);
        let mut coefficient = 1.0;
        for k in 0..=order {
            binomials.push(coefficient);
            coefficient = coefficient * (order - k) as f64 / (k + 1) as f64;
        }
        Self {
            control_points,
            binomials,
        }
    }

    fn point_at(&self, t: f64) -> DVec2 {
        let order = self.control_points.len() - 1;
        self.control_points
            .iter()
            .enumerate()
            .map(|(k, &p)| {
                let basis = self.binomials[k]
                    * t.powi(k as i32)
                    * (1.0 - t).powi((order - k) as i32);
                p * basis
            })
            .sum()
    }
}

impl Path2 {
    /// Appends a bezier curve starting at the current end of the path.
    ///
    /// The curve is sampled at its control parameters and then subdivided
    /// until no two consecutive output segments turn by more than
    /// `TAU / segments`.
    ///
    /// # Errors
    ///
    /// Fails on closed or empty paths, without control points, with fewer
    /// than four segments, or with a `None` control point that is not first
    /// or has nothing to mirror.
    pub fn append_bezier(&self, options: &AppendBezierOptions) -> Result<Self> {
        if options.control_points.is_empty() {
            return Err(ModelingError::invalid_option(
                "control_points",
                "must contain one or more points",
            ));
        }
        if options.segments < MIN_ARC_SEGMENTS {
            return Err(ModelingError::invalid_option(
                "segments",
                format!("must be {MIN_ARC_SEGMENTS} or more"),
            ));
        }
        let end = self.last_point("append a bezier curve to")?;

        let mut control_points = Vec::with_capacity(options.control_points.len() + 1);
        control_points.push(end);
        for (index, point) in options.control_points.iter().enumerate() {
            match (index, point) {
                (_, Some(point)) => control_points.push(*point),
                (0, None) => {
                    if options.control_points.len() < 2 {
                        return Err(ModelingError::invalid_option(
                            "control_points",
                            "a mirrored control point needs at least one more control point",
                        ));
                    }
                    let previous = self.last_bezier_control.or_else(|| {
                        let n = self.points.len();
                        (n >= 2).then(|| self.points[n - 2])
                    });
                    let previous = previous.ok_or_else(|| {
                        ModelingError::degenerate(
                            "mirroring a control point needs two or more path points",
                        )
                    })?;
                    control_points.push(end * 2.0 - previous);
                }
                (_, None) => {
                    return Err(ModelingError::invalid_option(
                        "control_points",
                        "only the first control point may be mirrored",
                    ));
                }
            }
        }

        let last_control = control_points[control_points.len() - 2];
        let bezier = Bezier::new(control_points);
        let samples = bezier.control_points.len();
        let mut params: Vec<f64> = (0..samples)
            .map(|i| i as f64 / (samples - 1) as f64)
            .collect();
        let mut points: Vec<DVec2> = params.iter().map(|&t| bezier.point_at(t)).collect();

        let max_sin = (TAU / options.segments as f64).sin();
        let mut base = 1;
        while base + 1 < points.len() {
            let incoming = (points[base] - points[base - 1]).normalize_or_zero();
            let outgoing = (points[base + 1] - points[base]).normalize_or_zero();
            let span = params[base + 1] - params[base - 1];
            if incoming.perp_dot(outgoing).abs() > max_sin && span > MIN_PARAMETER_SPAN {
                let t0 = params[base - 1];
                let t1 = params[base + 1];
                let new_t0 = t0 + (t1 - t0) / 3.0;
                let new_t1 = t0 + (t1 - t0) * 2.0 / 3.0;
                points.splice(base..=base, [bezier.point_at(new_t0), bezier.point_at(new_t1)]);
                params.splice(base..=base, [new_t0, new_t1]);
                base = (base - 1).max(1);
            } else {
                base += 1;
            }
        }

        points.remove(0);
        let mut result = self.append_points(&points);
        result.last_bezier_control = Some(last_control);
        Ok(result)
    }
}
