//! Merges coplanar polygons of a solid into as few convex polygons as
//! possible.

use crate::booleans::union;
use crate::geometries::plane::PlaneFrame;
use crate::geometries::{point_key, Geom2, Geom3, Plane, PointKey, Poly3};
use crate::tessellation::{convex_partition, group_outlines};
use config::constants::EPS;
use glam::{DVec2, DVec3};
use std::collections::HashMap;
use tracing::trace;

/// Rebuilds every group of coplanar polygons as convex pieces of their
/// union.
///
/// Vertices are reused where the merged outline still passes through them.
/// Groups that fail to merge keep their original polygons.
pub fn retessellate(geometry: &Geom3) -> Geom3 {
    let mut groups: Vec<(Plane, Vec<&Poly3>)> = Vec::new();
    for polygon in &geometry.polygons {
        if polygon.is_degenerate() {
            continue;
        }
        let plane = polygon.plane();
        match groups.iter_mut().find(|(p, _)| p.approx_eq(&plane, EPS)) {
            Some((_, members)) => members.push(polygon),
            None => groups.push((plane, vec![polygon])),
        }
    }

    let mut polygons = Vec::with_capacity(geometry.polygons.len());
    for (plane, members) in groups {
        if members.len() == 1 {
            polygons.extend(members.into_iter().cloned());
            continue;
        }
        match merge_coplanar(&plane, &members) {
            Some(merged) => polygons.extend(merged),
            None => polygons.extend(members.into_iter().cloned()),
        }
    }

    trace!(
        before = geometry.polygons.len(),
        after = polygons.len(),
        "retessellate"
    );
    Geom3 {
        polygons,
        color: geometry.color,
    }
}

fn merge_coplanar(plane: &Plane, members: &[&Poly3]) -> Option<Vec<Poly3>> {
    let frame = PlaneFrame::new(plane);
    let mut originals: HashMap<PointKey, DVec3> = HashMap::new();
    let mut regions = Vec::with_capacity(members.len());
    for polygon in members {
        let points: Vec<DVec2> = polygon
            .vertices
            .iter()
            .map(|&vertex| {
                let local = frame.to_local(vertex);
                originals.entry(point_key(local)).or_insert(vertex);
                local
            })
            .collect();
        regions.push(Geom2::from_points(&points).ok()?);
    }

    let references: Vec<&Geom2> = regions.iter().collect();
    let merged = union(&references).ok()?;

    let mut polygons = Vec::new();
    for outline in group_outlines(merged.to_outlines()) {
        for piece in convex_partition(&outline).ok()? {
            let vertices = piece
                .into_iter()
                .map(|p| {
                    originals
                        .get(&point_key(p))
                        .copied()
                        .unwrap_or_else(|| frame.to_world(p))
                })
                .collect();
            polygons.push(Poly3::new(vertices));
        }
    }
    Some(polygons)
}
