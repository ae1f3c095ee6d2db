//! Solids swept from copies of a planar region.
//!
//! A region is placed in space by a sequence of matrices. Consecutive copies
//! are joined side by side with triangular walls, and the first and last
//! copies are capped unless the sweep closes on itself.

use crate::error::Result;
use crate::geometries::{Geom2, Geom3, Poly3};
use crate::tessellation::{group_outlines, is_convex, triangulate};
use glam::{DMat4, DVec2, DVec3};

/// How the ends of a sweep are finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SweepEnds {
    /// Cap the first and last copies.
    Capped,
    /// Join the last copy back to the first.
    Looped,
}

/// Sweeps `base` through `placements`.
///
/// The solid is turned outside out when the sweep runs against the region
/// normal. The result takes the color of `base`.
///
/// # Errors
///
/// Fails when a cap cannot be triangulated.
pub(crate) fn sweep(base: &Geom2, placements: &[DMat4], ends: SweepEnds) -> Result<Geom3> {
    if base.is_empty() || placements.len() < 2 {
        return Ok(Geom3::new());
    }

    let place = |matrix: &DMat4, point: DVec2| matrix.transform_point3(point.extend(0.0));
    let mut polygons = Vec::new();

    let mut pairs: Vec<(&DMat4, &DMat4)> = placements.iter().zip(placements.iter().skip(1)).collect();
    if ends == SweepEnds::Looped {
        if let (Some(last), Some(first)) = (placements.last(), placements.first()) {
            pairs.push((last, first));
        }
    }
    for (bottom, top) in pairs {
        for &[a, b] in &base.sides {
            let (a0, b0) = (place(bottom, a), place(bottom, b));
            let (a1, b1) = (place(top, a), place(top, b));
            push_if_valid(&mut polygons, vec![a0, b0, b1]);
            push_if_valid(&mut polygons, vec![a0, b1, a1]);
        }
    }

    if ends == SweepEnds::Capped {
        let caps = cap_outlines(base)?;
        if let (Some(first), Some(last)) = (placements.first(), placements.last()) {
            for cap in &caps {
                let bottom: Vec<DVec3> = cap.iter().rev().map(|&p| place(first, p)).collect();
                push_if_valid(&mut polygons, bottom);
                let top: Vec<DVec3> = cap.iter().map(|&p| place(last, p)).collect();
                push_if_valid(&mut polygons, top);
            }
        }
    }

    let mut solid = Geom3::from_polygons(polygons);
    if signed_volume(&solid) < 0.0 {
        solid = solid.invert();
    }
    solid.color = base.color;
    Ok(solid)
}

fn push_if_valid(polygons: &mut Vec<Poly3>, vertices: Vec<DVec3>) {
    let polygon = Poly3::new(vertices);
    if !polygon.is_degenerate() {
        polygons.push(polygon);
    }
}

fn signed_volume(solid: &Geom3) -> f64 {
    solid.polygons.iter().map(Poly3::signed_volume).sum()
}

/// Counter-clockwise pieces covering `base`: convex outlines without holes
/// as they are, everything else as triangles.
fn cap_outlines(base: &Geom2) -> Result<Vec<Vec<DVec2>>> {
    let mut caps = Vec::new();
    for polygon in group_outlines(base.to_outlines()) {
        if polygon.holes.is_empty() && is_convex(&polygon.outer) {
            caps.push(polygon.outer);
        } else {
            caps.extend(triangulate(&polygon)?.into_iter().map(|t| t.to_vec()));
        }
    }
    Ok(caps)
}
