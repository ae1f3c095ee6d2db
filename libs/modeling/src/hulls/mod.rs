//! # Convex Hulls
//!
//! Convex hulls of regions, solids and paths, plus chained hulls.
//!
//! - 2D hulls use Andrew's monotone chain over every point of the operands
//! - 3D hulls use QuickHull; coplanar hull triangles are merged back into
//!   convex faces
//!
//! Hull results carry no color.
//!
//! Chained hulls join their links with [`ChainHull::join_links`]: regions
//! and solids union them, paths keep the first link since paths have no
//! union.
//!
//! ## Example
//!
//! ```rust,ignore
//! use modeling::hulls::{hull, hull_chain};
//!
//! let capsule = hull(&[&left_circle, &right_circle])?;
//! let snake = hull_chain(&[&a, &b, &c])?;
//! ```

mod hull2;
mod quickhull;

use crate::booleans::{union, Boolean};
use crate::error::{ModelingError, Result};
use crate::geometries::plane::PlaneFrame;
use crate::geometries::{point_key, Geom2, Geom3, Path2, Plane, PointKey, Poly3};
use config::constants::EPS;
use glam::{DVec2, DVec3};
use hull2::hull_points;
use quickhull::convex_hull;
use std::collections::HashMap;
use tracing::debug;

/// Geometry values that have a convex hull.
pub trait Hull: Sized {
    /// Convex hull of every point of `geometries`.
    fn hull_of(geometries: &[&Self]) -> Self;
}

impl Hull for Geom2 {
    fn hull_of(geometries: &[&Self]) -> Self {
        let points: Vec<DVec2> = geometries
            .iter()
            .flat_map(|g| g.sides.iter().map(|side| side[0]))
            .collect();
        let outline = hull_points(&points);
        if outline.len() < 3 {
            return Geom2::new();
        }
        Geom2::from_points(&outline).unwrap_or_default()
    }
}

impl Hull for Path2 {
    /// The hull is always a closed path.
    fn hull_of(geometries: &[&Self]) -> Self {
        let points: Vec<DVec2> = geometries
            .iter()
            .flat_map(|p| p.points.iter().copied())
            .collect();
        Path2::from_points(&hull_points(&points), true)
    }
}

impl Hull for Geom3 {
    /// Input without volume gives an empty solid.
    fn hull_of(geometries: &[&Self]) -> Self {
        let points: Vec<DVec3> = geometries.iter().flat_map(|g| g.vertices()).collect();
        hull_of_points(&points)
    }
}

/// Hulls whose links can be joined into one chained result.
pub trait ChainHull: Hull {
    /// Joins the hulls of consecutive pairs, in chain order.
    ///
    /// # Errors
    ///
    /// Propagates boolean errors.
    fn join_links(links: Vec<Self>) -> Result<Self>;
}

impl ChainHull for Geom2 {
    fn join_links(links: Vec<Self>) -> Result<Self> {
        union_links(&links)
    }
}

impl ChainHull for Geom3 {
    fn join_links(links: Vec<Self>) -> Result<Self> {
        union_links(&links)
    }
}

impl ChainHull for Path2 {
    /// The first link, the hull of the first two paths.
    fn join_links(links: Vec<Self>) -> Result<Self> {
        if links.len() > 1 {
            debug!(dropped = links.len() - 1, "path chain keeps the first link");
        }
        links
            .into_iter()
            .next()
            .ok_or_else(|| no_operands("hull_chain"))
    }
}

fn union_links<G: Boolean>(links: &[G]) -> Result<G> {
    let references: Vec<&G> = links.iter().collect();
    union(&references)
}

/// Convex solid around `points`; empty when they span no volume.
pub(crate) fn hull_of_points(points: &[DVec3]) -> Geom3 {
    match convex_hull(points) {
        Ok(hull) => Geom3::from_polygons(merge_hull_faces(&hull.points, &hull.triangles)),
        Err(error) => {
            debug!(%error, "hull has no volume");
            Geom3::new()
        }
    }
}

/// Groups hull triangles by plane and rebuilds each group as one convex
/// face through the original hull points.
fn merge_hull_faces(points: &[DVec3], triangles: &[[usize; 3]]) -> Vec<Poly3> {
    let mut groups: Vec<(Plane, Vec<usize>)> = Vec::new();
    for &[a, b, c] in triangles {
        let Some(plane) = Plane::from_points(points[a], points[b], points[c]) else {
            continue;
        };
        match groups.iter_mut().find(|(p, _)| p.approx_eq(&plane, EPS)) {
            Some((_, members)) => members.extend([a, b, c]),
            None => groups.push((plane, vec![a, b, c])),
        }
    }

    groups
        .into_iter()
        .filter_map(|(plane, members)| {
            let frame = PlaneFrame::new(&plane);
            let mut originals: HashMap<PointKey, DVec3> = HashMap::new();
            let local: Vec<DVec2> = members
                .iter()
                .map(|&index| {
                    let point = frame.to_local(points[index]);
                    originals.insert(point_key(point), points[index]);
                    point
                })
                .collect();
            let outline = hull_points(&local);
            if outline.len() < 3 {
                return None;
            }
            let vertices = outline
                .into_iter()
                .map(|p| {
                    originals
                        .get(&point_key(p))
                        .copied()
                        .unwrap_or_else(|| frame.to_world(p))
                })
                .collect();
            Some(Poly3::new(vertices))
        })
        .collect()
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Convex hull of all `geometries`.
///
/// # Errors
///
/// Fails when `geometries` is empty.
pub fn hull<G: Hull>(geometries: &[&G]) -> Result<G> {
    if geometries.is_empty() {
        return Err(no_operands("hull"));
    }
    debug!(operands = geometries.len(), "hull");
    Ok(G::hull_of(geometries))
}

/// Hulls each consecutive pair of `geometries` and joins the links.
///
/// A single geometry gives its own hull. Regions and solids give the union
/// of the links; paths give the closed hull of the first two paths.
///
/// # Errors
///
/// Fails when `geometries` is empty.
pub fn hull_chain<G: ChainHull>(geometries: &[&G]) -> Result<G> {
    match geometries {
        [] => Err(no_operands("hull_chain")),
        [single] => Ok(G::hull_of(&[*single])),
        _ => {
            debug!(operands = geometries.len(), "hull_chain");
            let links: Vec<G> = geometries
                .windows(2)
                .map(|pair| G::hull_of(pair))
                .collect();
            G::join_links(links)
        }
    }
}

fn no_operands(operation: &str) -> ModelingError {
    ModelingError::invalid_option(
        "geometries",
        format!("{operation} needs one or more geometries"),
    )
}

#[cfg(test)]
mod tests;
