//! Shadows of solids on a plane.

use super::ProjectOptions;
use crate::booleans::union;
use crate::error::{ModelingError, Result};
use crate::geometries::geom2::signed_area;
use crate::geometries::{Geom2, Geom3};
use config::constants::NUMERIC_EPSILON;
use glam::{DQuat, DVec2, DVec3};
use tracing::debug;

/// Union of the projections of every polygon of `solid` onto the plane
/// through `options.origin` with normal `options.axis`.
///
/// Coordinates are taken relative to the origin, in a frame whose Z axis is
/// the projection axis; projecting along Z keeps X and Y unchanged.
pub(super) fn project(options: &ProjectOptions, solid: &Geom3) -> Result<Geom2> {
    let axis = options
        .axis
        .try_normalize()
        .ok_or_else(|| ModelingError::invalid_option("axis", "must not be a zero vector"))?;
    let to_plane = DQuat::from_rotation_arc(axis, DVec3::Z);

    let shadows: Vec<Geom2> = solid
        .polygons
        .iter()
        .filter_map(|polygon| {
            let mut points: Vec<DVec2> = polygon
                .vertices
                .iter()
                .map(|&vertex| (to_plane * (vertex - options.origin)).truncate())
                .collect();
            points.dedup();
            let area = signed_area(&points);
            if area.abs() < NUMERIC_EPSILON {
                return None;
            }
            if area < 0.0 {
                points.reverse();
            }
            Geom2::from_points(&points).ok()
        })
        .collect();
    debug!(polygons = solid.polygons.len(), shadows = shadows.len(), "project");

    if shadows.is_empty() {
        return Ok(Geom2::new());
    }
    let references: Vec<&Geom2> = shadows.iter().collect();
    let mut region = union(&references)?;
    region.color = solid.color;
    Ok(region)
}
