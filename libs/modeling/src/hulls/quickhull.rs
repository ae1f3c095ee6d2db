//! # QuickHull Algorithm
//!
//! 3D convex hull computation using the QuickHull algorithm.
//! Based on the original algorithm by Barber, Dobkin, and Huhdanpaa.
//!
//! ## Algorithm Steps
//!
//! 1. Find 6 extreme points (min/max on each axis)
//! 2. Build initial tetrahedron from 4 non-coplanar points
//! 3. Assign remaining points to faces they're outside of
//! 4. For each face with outside points:
//!    a. Find farthest point
//!    b. Find horizon edges (boundary of visible faces)
//!    c. Create new faces from horizon to farthest point
//!    d. Reassign outside points to new faces
//! 5. Repeat until no faces have outside points
//!
//! Faces are oriented against a point strictly inside the initial
//! tetrahedron, which stays inside the hull as it grows.

use crate::booleans::weld::Welder3;
use crate::error::{ModelingError, Result};
use crate::geometries::vertex_key;
use config::constants::{EPS, VERTEX_MERGE_EPSILON};
use glam::DVec3;
use std::collections::{HashMap, HashSet};

/// Triangles of a convex hull, indexing into the returned point list.
pub(crate) struct HullTriangles {
    pub points: Vec<DVec3>,
    pub triangles: Vec<[usize; 3]>,
}

/// Computes the convex hull of a set of 3D points.
///
/// # Errors
///
/// Fails when fewer than four distinct points are given or when all of them
/// lie in one plane.
pub(crate) fn convex_hull(points: &[DVec3]) -> Result<HullTriangles> {
    let unique_points = remove_duplicates(points);
    if unique_points.len() < 4 {
        return Err(ModelingError::degenerate(
            "convex hull requires at least 4 distinct points",
        ));
    }

    let (initial_faces, interior) = build_initial_simplex(&unique_points)?;
    let faces = quickhull_iterate(initial_faces, interior, &unique_points);

    Ok(HullTriangles {
        triangles: faces.iter().map(|f| f.vertices).collect(),
        points: unique_points,
    })
}

/// A face of the convex hull (triangle).
#[derive(Debug, Clone)]
struct HullFace {
    /// Indices of the three vertices
    vertices: [usize; 3],
    /// Outward-pointing normal
    normal: DVec3,
    /// Distance from origin along normal
    distance: f64,
    /// Points outside this face (indices into points array)
    outside_points: Vec<usize>,
}

impl HullFace {
    fn new(v0: usize, v1: usize, v2: usize, points: &[DVec3]) -> Self {
        let p0 = points[v0];
        let normal = (points[v1] - p0).cross(points[v2] - p0).normalize_or_zero();
        Self {
            vertices: [v0, v1, v2],
            normal,
            distance: normal.dot(p0),
            outside_points: Vec::new(),
        }
    }

    /// Face through the three points with its normal facing away from
    /// `interior`.
    fn outward(v0: usize, v1: usize, v2: usize, interior: DVec3, points: &[DVec3]) -> Self {
        let face = Self::new(v0, v1, v2, points);
        if face.signed_distance(interior) > 0.0 {
            Self::new(v0, v2, v1, points)
        } else {
            face
        }
    }

    fn signed_distance(&self, point: DVec3) -> f64 {
        self.normal.dot(point) - self.distance
    }

    fn is_outside(&self, point: DVec3) -> bool {
        self.signed_distance(point) > EPS
    }

    fn farthest_point(&self, points: &[DVec3]) -> Option<usize> {
        self.outside_points.iter().copied().max_by(|&a, &b| {
            self.signed_distance(points[a])
                .total_cmp(&self.signed_distance(points[b]))
        })
    }
}

fn remove_duplicates(points: &[DVec3]) -> Vec<DVec3> {
    let mut welder = Welder3::new(VERTEX_MERGE_EPSILON);
    let mut seen = HashSet::new();
    points
        .iter()
        .map(|&point| welder.weld(point))
        .filter(|&point| seen.insert(vertex_key(point)))
        .collect()
}

/// Builds the initial tetrahedron from extreme points and returns it with a
/// point strictly inside it.
fn build_initial_simplex(points: &[DVec3]) -> Result<(Vec<HullFace>, DVec3)> {
    let mut extremes = [0usize; 6];
    for (i, p) in points.iter().enumerate() {
        for axis in 0..3 {
            if p[axis] < points[extremes[axis * 2]][axis] {
                extremes[axis * 2] = i;
            }
            if p[axis] > points[extremes[axis * 2 + 1]][axis] {
                extremes[axis * 2 + 1] = i;
            }
        }
    }

    let (p0, p1) = find_farthest_pair(&extremes, points);
    let p2 = find_farthest_from_line(p0, p1, points)?;
    let p3 = find_farthest_from_plane(p0, p1, p2, points)?;

    let interior = (points[p0] + points[p1] + points[p2] + points[p3]) / 4.0;
    let mut faces = vec![
        HullFace::outward(p0, p1, p2, interior, points),
        HullFace::outward(p0, p2, p3, interior, points),
        HullFace::outward(p0, p3, p1, interior, points),
        HullFace::outward(p1, p3, p2, interior, points),
    ];

    for (index, &point) in points.iter().enumerate() {
        if [p0, p1, p2, p3].contains(&index) {
            continue;
        }
        if let Some(face) = faces.iter_mut().find(|f| f.is_outside(point)) {
            face.outside_points.push(index);
        }
    }

    Ok((faces, interior))
}

fn find_farthest_pair(indices: &[usize], points: &[DVec3]) -> (usize, usize) {
    let mut max_dist = 0.0;
    let mut best = (indices[0], indices[1]);
    for (i, &a) in indices.iter().enumerate() {
        for &b in indices.iter().skip(i + 1) {
            let dist = points[a].distance_squared(points[b]);
            if dist > max_dist {
                max_dist = dist;
                best = (a, b);
            }
        }
    }
    best
}

fn find_farthest_from_line(p0: usize, p1: usize, points: &[DVec3]) -> Result<usize> {
    let direction = (points[p1] - points[p0]).normalize_or_zero();
    let mut max_dist = EPS;
    let mut best = None;
    for (i, p) in points.iter().enumerate() {
        if i == p0 || i == p1 {
            continue;
        }
        let v = *p - points[p0];
        let dist = (v - v.dot(direction) * direction).length();
        if dist > max_dist {
            max_dist = dist;
            best = Some(i);
        }
    }
    best.ok_or_else(|| ModelingError::degenerate("all hull points are collinear"))
}

fn find_farthest_from_plane(p0: usize, p1: usize, p2: usize, points: &[DVec3]) -> Result<usize> {
    let normal = (points[p1] - points[p0])
        .cross(points[p2] - points[p0])
        .normalize_or_zero();
    let mut max_dist = EPS;
    let mut best = None;
    for (i, p) in points.iter().enumerate() {
        if i == p0 || i == p1 || i == p2 {
            continue;
        }
        let dist = normal.dot(*p - points[p0]).abs();
        if dist > max_dist {
            max_dist = dist;
            best = Some(i);
        }
    }
    best.ok_or_else(|| ModelingError::degenerate("all hull points are coplanar"))
}

/// Grows the hull until no face has outside points.
fn quickhull_iterate(mut faces: Vec<HullFace>, interior: DVec3, points: &[DVec3]) -> Vec<HullFace> {
    while let Some(face_idx) = faces.iter().position(|f| !f.outside_points.is_empty()) {
        let Some(farthest) = faces[face_idx].farthest_point(points) else {
            break;
        };
        let apex = points[farthest];

        let visible: Vec<usize> = faces
            .iter()
            .enumerate()
            .filter(|(_, f)| f.is_outside(apex))
            .map(|(i, _)| i)
            .collect();
        if visible.is_empty() {
            // the apex sits within tolerance of every face; it is not a hull point
            faces[face_idx].outside_points.retain(|&p| p != farthest);
            continue;
        }

        let horizon = find_horizon_edges(&faces, &visible);

        let mut reassign: Vec<usize> = Vec::new();
        for &idx in &visible {
            reassign.extend(&faces[idx].outside_points);
        }
        reassign.retain(|&p| p != farthest);

        let mut visible_sorted = visible;
        visible_sorted.sort_unstable_by(|a, b| b.cmp(a));
        for idx in visible_sorted {
            faces.swap_remove(idx);
        }

        let first_new = faces.len();
        for (e0, e1) in horizon {
            faces.push(HullFace::outward(e0, e1, farthest, interior, points));
        }

        for idx in reassign {
            let point = points[idx];
            if let Some(face) = faces[first_new..].iter_mut().find(|f| f.is_outside(point)) {
                face.outside_points.push(idx);
            }
        }
    }
    faces
}

/// Edges of the visible faces that are not shared with another visible face.
fn find_horizon_edges(faces: &[HullFace], visible: &[usize]) -> Vec<(usize, usize)> {
    let mut edge_count: HashMap<(usize, usize), usize> = HashMap::new();
    let edges_of = |idx: usize| {
        let v = faces[idx].vertices;
        [(v[0], v[1]), (v[1], v[2]), (v[2], v[0])]
    };
    let key = |(a, b): (usize, usize)| if a < b { (a, b) } else { (b, a) };

    for &idx in visible {
        for edge in edges_of(idx) {
            *edge_count.entry(key(edge)).or_insert(0) += 1;
        }
    }

    visible
        .iter()
        .flat_map(|&idx| edges_of(idx))
        .filter(|&edge| edge_count.get(&key(edge)) == Some(&1))
        .collect()
}
