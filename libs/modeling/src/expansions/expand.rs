//! Path strokes and solid rounding.

use super::offset::{arc_between, keeps_orientation, OffsetPass};
use super::{Corners, ExpandOptions};
use crate::booleans::{subtract, union};
use crate::error::Result;
use crate::geometries::geom2::signed_area;
use crate::geometries::{Geom2, Geom3, Path2};
use crate::hulls::hull_of_points;
use crate::primitives::sphere_points;
use glam::{DVec2, DVec3};
use std::f64::consts::TAU;
use tracing::debug;

/// Region within `options.delta` of `path`.
///
/// A single point has no direction to end flat against, so it becomes a
/// disc of `options.segments` sides whatever the corner style.
pub(super) fn stroke(path: &Path2, options: &ExpandOptions) -> Geom2 {
    let mut points = path.points.clone();
    points.dedup();
    if path.is_closed {
        while points.len() > 1 && points.first() == points.last() {
            points.pop();
        }
    }
    match points.as_slice() {
        [] => return Geom2::new(),
        [point] => return disc(*point, options.delta, options.segments),
        _ => {}
    }

    let pass = |delta: f64| OffsetPass {
        delta,
        corners: options.corners,
        segments: options.segments,
        keep_side_ends: false,
    };

    if path.is_closed && points.len() >= 3 {
        if signed_area(&points) < 0.0 {
            points.reverse();
        }
        let outer = pass(options.delta).apply(&points, true);
        let mut outlines = vec![outer];
        let mut inner = pass(-options.delta).apply(&points, true);
        if inner.len() >= 3 && keeps_orientation(&points, &inner) {
            inner.reverse();
            outlines.push(inner);
        }
        return Geom2::from_outlines(&outlines);
    }

    let reversed: Vec<DVec2> = points.iter().rev().copied().collect();
    let right = pass(options.delta).apply(&points, false);
    let left = pass(options.delta).apply(&reversed, false);
    let (Some(&first), Some(&last)) = (points.first(), points.last()) else {
        return Geom2::new();
    };

    let mut outline = right.clone();
    if options.corners == Corners::Round {
        if let (Some(&right_end), Some(&left_start)) = (right.last(), left.first()) {
            outline.extend(arc_between(last, right_end - last, left_start - last, true, options.segments));
        }
    }
    outline.extend_from_slice(&left);
    if options.corners == Corners::Round {
        if let (Some(&left_end), Some(&right_start)) = (left.last(), right.first()) {
            outline.extend(arc_between(first, left_end - first, right_start - first, true, options.segments));
        }
    }
    Geom2::from_outlines(&[outline])
}

fn disc(center: DVec2, radius: f64, segments: usize) -> Geom2 {
    debug!(segments, "expanding a single point");
    let step = TAU / segments as f64;
    let outline: Vec<DVec2> = (0..segments)
        .map(|i| center + DVec2::from_angle(i as f64 * step) * radius)
        .collect();
    Geom2::from_outlines(&[outline])
}

/// Adds or removes the sweep of a sphere of radius `|delta|` over the
/// surface of `solid`.
pub(super) fn round_solid(solid: &Geom3, delta: f64, segments: usize) -> Result<Geom3> {
    if solid.is_empty() || delta == 0.0 {
        return Ok(solid.clone());
    }

    let ball = sphere_points(delta.abs(), segments);
    let pieces: Vec<Geom3> = solid
        .polygons
        .iter()
        .map(|polygon| {
            let points: Vec<DVec3> = polygon
                .vertices
                .iter()
                .flat_map(|&vertex| ball.iter().map(move |&offset| vertex + offset))
                .collect();
            hull_of_points(&points)
        })
        .filter(|piece| !piece.is_empty())
        .collect();
    debug!(polygons = solid.polygons.len(), pieces = pieces.len(), "rounding solid");

    let references: Vec<&Geom3> = pieces.iter().collect();
    let shell = union(&references)?;
    if delta > 0.0 {
        union(&[solid, &shell])
    } else {
        subtract(&[solid, &shell])
    }
}
