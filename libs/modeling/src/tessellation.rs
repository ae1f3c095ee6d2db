//! # Tessellation
//!
//! Turns planar outlines into convex polygons.
//!
//! Outlines come from region sides: counter-clockwise outers and clockwise
//! holes. They are grouped into polygons with holes, triangulated with
//! `earcutr`, and the triangles are merged greedily back into convex pieces
//! (Hertel-Mehlhorn).

use crate::error::{ModelingError, Result};
use crate::geometries::geom2::signed_area;
use config::constants::{approx_zero, NUMERIC_EPSILON};
use glam::DVec2;
use std::collections::HashMap;

/// An outer outline with the holes inside it.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PolygonWithHoles {
    /// Counter-clockwise outer boundary.
    pub outer: Vec<DVec2>,
    /// Clockwise holes.
    pub holes: Vec<Vec<DVec2>>,
}

/// Assigns each hole to the smallest outer outline containing it.
///
/// Outlines without area are dropped, and so are holes no outer outline
/// contains.
pub(crate) fn group_outlines(outlines: Vec<Vec<DVec2>>) -> Vec<PolygonWithHoles> {
    let mut polygons = Vec::new();
    let mut areas = Vec::new();
    let mut holes = Vec::new();
    for outline in outlines {
        let area = signed_area(&outline);
        if area > NUMERIC_EPSILON {
            areas.push(area);
            polygons.push(PolygonWithHoles {
                outer: outline,
                holes: Vec::new(),
            });
        } else if area < -NUMERIC_EPSILON {
            holes.push(outline);
        }
    }

    for hole in holes {
        let owner = polygons
            .iter()
            .enumerate()
            .filter(|(_, polygon)| contains_loop(&polygon.outer, &hole))
            .min_by(|(a, _), (b, _)| areas[*a].total_cmp(&areas[*b]))
            .map(|(index, _)| index);
        if let Some(index) = owner {
            polygons[index].holes.push(hole);
        }
    }
    polygons
}

/// Triangles covering `polygon`, counter-clockwise.
///
/// # Errors
///
/// Fails when the triangulator rejects the outlines.
pub(crate) fn triangulate(polygon: &PolygonWithHoles) -> Result<Vec<[DVec2; 3]>> {
    let (points, triangles) = triangle_indices(polygon)?;
    Ok(triangles
        .into_iter()
        .map(|[a, b, c]| [points[a], points[b], points[c]])
        .collect())
}

/// Convex polygons covering `polygon`, counter-clockwise.
///
/// # Errors
///
/// Fails when the triangulator rejects the outlines.
pub(crate) fn convex_partition(polygon: &PolygonWithHoles) -> Result<Vec<Vec<DVec2>>> {
    if polygon.holes.is_empty() && is_convex(&polygon.outer) {
        return Ok(vec![polygon.outer.clone()]);
    }

    let (points, triangles) = triangle_indices(polygon)?;
    let mut pieces: Vec<Option<Vec<usize>>> =
        triangles.into_iter().map(|t| Some(t.to_vec())).collect();

    // merge across shared diagonals while the union stays convex
    let mut merged = true;
    while merged {
        merged = false;
        let mut edges: HashMap<(usize, usize), usize> = HashMap::new();
        for (index, piece) in pieces.iter().enumerate() {
            if let Some(piece) = piece {
                for i in 0..piece.len() {
                    edges.insert((piece[i], piece[(i + 1) % piece.len()]), index);
                }
            }
        }

        'search: for index in 0..pieces.len() {
            let Some(piece) = pieces[index].clone() else {
                continue;
            };
            for i in 0..piece.len() {
                let (a, b) = (piece[i], piece[(i + 1) % piece.len()]);
                let Some(&other) = edges.get(&(b, a)) else {
                    continue;
                };
                if other == index {
                    continue;
                }
                let Some(neighbour) = pieces[other].as_ref() else {
                    continue;
                };
                let candidate = join_pieces(&piece, neighbour, a, b);
                let outline: Vec<DVec2> = candidate.iter().map(|&v| points[v]).collect();
                if is_convex(&outline) {
                    pieces[index] = Some(candidate);
                    pieces[other] = None;
                    merged = true;
                    break 'search;
                }
            }
        }
    }

    Ok(pieces
        .into_iter()
        .flatten()
        .map(|piece| piece.into_iter().map(|v| points[v]).collect())
        .collect())
}

/// Joins two pieces sharing the directed edge `a → b` of `first`.
fn join_pieces(first: &[usize], second: &[usize], a: usize, b: usize) -> Vec<usize> {
    let rotate_to = |piece: &[usize], start: usize| -> Vec<usize> {
        let offset = piece.iter().position(|&v| v == start).unwrap_or(0);
        piece[offset..].iter().chain(&piece[..offset]).copied().collect()
    };
    // first runs b .. a, second runs a .. b
    let mut joined = rotate_to(first, b);
    let second = rotate_to(second, a);
    joined.extend_from_slice(&second[1..second.len() - 1]);
    joined
}

fn triangle_indices(polygon: &PolygonWithHoles) -> Result<(Vec<DVec2>, Vec<[usize; 3]>)> {
    let mut points: Vec<DVec2> = polygon.outer.clone();
    let mut hole_indices = Vec::with_capacity(polygon.holes.len());
    for hole in &polygon.holes {
        hole_indices.push(points.len());
        points.extend_from_slice(hole);
    }
    let data: Vec<f64> = points.iter().flat_map(|p| [p.x, p.y]).collect();

    let indices = earcutr::earcut(&data, &hole_indices, 2)
        .map_err(|err| ModelingError::degenerate(format!("triangulation failed: {err:?}")))?;

    let triangles = indices
        .chunks_exact(3)
        .filter_map(|t| {
            let [a, b, c] = [t[0], t[1], t[2]];
            let turn = (points[b] - points[a]).perp_dot(points[c] - points[a]);
            if turn.abs() < NUMERIC_EPSILON {
                None
            } else if turn > 0.0 {
                Some([a, b, c])
            } else {
                Some([a, c, b])
            }
        })
        .collect();
    Ok((points, triangles))
}

/// True when no corner of the counter-clockwise loop turns right.
pub(crate) fn is_convex(points: &[DVec2]) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }
    (0..n).all(|i| {
        let previous = points[(i + n - 1) % n];
        let here = points[i];
        let next = points[(i + 1) % n];
        (here - previous).perp_dot(next - here) >= -NUMERIC_EPSILON
    })
}

/// Even-odd test; points on the boundary may go either way.
pub(crate) fn point_in_loop(point: DVec2, outline: &[DVec2]) -> bool {
    let n = outline.len();
    let mut inside = false;
    for i in 0..n {
        let a = outline[i];
        let b = outline[(i + 1) % n];
        if (a.y > point.y) != (b.y > point.y) {
            let x = a.x + (point.y - a.y) / (b.y - a.y) * (b.x - a.x);
            if point.x < x {
                inside = !inside;
            }
        }
    }
    inside
}

fn on_boundary(point: DVec2, outline: &[DVec2]) -> bool {
    let n = outline.len();
    (0..n).any(|i| {
        let a = outline[i];
        let b = outline[(i + 1) % n];
        let direction = b - a;
        let length_squared = direction.length_squared();
        if length_squared < NUMERIC_EPSILON {
            return approx_zero(point.distance(a));
        }
        let t = ((point - a).dot(direction) / length_squared).clamp(0.0, 1.0);
        approx_zero(point.distance(a + direction * t))
    })
}

fn contains_loop(outer: &[DVec2], inner: &[DVec2]) -> bool {
    let probe = inner
        .iter()
        .copied()
        .find(|&p| !on_boundary(p, outer))
        .unwrap_or_else(|| inner.iter().copied().sum::<DVec2>() / inner.len().max(1) as f64);
    point_in_loop(probe, outer)
}
