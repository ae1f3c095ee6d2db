//! # Region Booleans
//!
//! Boolean operations on 2D regions. Sides are the boundary elements of the
//! BSP tree, each with an outward normal on its right hand. The raw output
//! is canonicalized: endpoints are welded, zero-length and cancelling sides
//! are dropped, and collinear runs merge into single sides.

use super::bsp::{self, BspPolygon, Split};
use super::weld::Welder2;
use super::{shortcut, BooleanOperation, Shortcut};
use crate::geometries::geom2::{outline_sides, Geom2, Side};
use crate::geometries::{point_key, PointKey};
use config::constants::{NUMERIC_EPSILON, PLANE_EPSILON, VERTEX_MERGE_EPSILON};
use glam::DVec2;
use std::collections::HashMap;

const COPLANAR: u8 = 0;
const FRONT: u8 = 1;
const BACK: u8 = 2;

/// An oriented line `normal · p = w`; the front is outside the region.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Line2 {
    normal: DVec2,
    w: f64,
}

impl Line2 {
    fn signed_distance(&self, point: DVec2) -> f64 {
        self.normal.dot(point) - self.w
    }
}

/// A directed side with its cached supporting line.
#[derive(Debug, Clone)]
pub(crate) struct BspSide {
    start: DVec2,
    end: DVec2,
    line: Line2,
}

impl BspSide {
    /// Side from `start` to `end`; `None` when it has no length.
    pub(crate) fn new(start: DVec2, end: DVec2) -> Option<Self> {
        let direction = end - start;
        let length = direction.length();
        if length < NUMERIC_EPSILON {
            return None;
        }
        let normal = DVec2::new(direction.y, -direction.x) / length;
        Some(Self {
            start,
            end,
            line: Line2 {
                normal,
                w: normal.dot(start),
            },
        })
    }

    fn piece(&self, start: DVec2, end: DVec2) -> Self {
        Self {
            start,
            end,
            line: self.line,
        }
    }
}

fn classify(distance: f64) -> u8 {
    if distance < -PLANE_EPSILON {
        BACK
    } else if distance > PLANE_EPSILON {
        FRONT
    } else {
        COPLANAR
    }
}

impl BspPolygon for BspSide {
    type Plane = Line2;

    fn plane(&self) -> Line2 {
        self.line
    }

    fn flip(&mut self) {
        std::mem::swap(&mut self.start, &mut self.end);
        self.line = Self::flip_plane(&self.line);
    }

    fn flip_plane(plane: &Line2) -> Line2 {
        Line2 {
            normal: -plane.normal,
            w: -plane.w,
        }
    }

    fn split(&self, plane: &Line2, out: &mut Split<Self>) {
        let start_distance = plane.signed_distance(self.start);
        let end_distance = plane.signed_distance(self.end);
        let start_type = classify(start_distance);
        let end_type = classify(end_distance);

        match start_type | end_type {
            COPLANAR => {
                if plane.normal.dot(self.line.normal) > 0.0 {
                    out.coplanar_front.push(self.clone());
                } else {
                    out.coplanar_back.push(self.clone());
                }
            }
            FRONT => out.front.push(self.clone()),
            BACK => out.back.push(self.clone()),
            _ => {
                let t = start_distance / (start_distance - end_distance);
                let middle = self.start.lerp(self.end, t);
                let first = self.piece(self.start, middle);
                let second = self.piece(middle, self.end);
                if start_type == FRONT {
                    out.front.push(first);
                    out.back.push(second);
                } else {
                    out.back.push(first);
                    out.front.push(second);
                }
            }
        }
    }
}

fn to_bsp(geometry: &Geom2) -> Vec<BspSide> {
    geometry
        .sides
        .iter()
        .filter_map(|&[start, end]| BspSide::new(start, end))
        .collect()
}

/// Combines two regions. The result takes the color of `a`.
pub(crate) fn combine(operation: BooleanOperation, a: &Geom2, b: &Geom2) -> Geom2 {
    if let Some(shortcut) = shortcut(operation, a, a.is_empty(), b, b.is_empty()) {
        let sides = match shortcut {
            Shortcut::Empty => Vec::new(),
            Shortcut::First => a.sides.clone(),
            Shortcut::Second => b.sides.clone(),
            Shortcut::Both => [a.sides.as_slice(), b.sides.as_slice()].concat(),
        };
        return Geom2 {
            sides,
            color: a.color,
        };
    }

    let (first, second) = (to_bsp(a), to_bsp(b));
    let sides = match operation {
        BooleanOperation::Union => bsp::union(first, second),
        BooleanOperation::Intersect => bsp::intersect(first, second),
        BooleanOperation::Subtract => bsp::subtract(first, second),
    };
    let sides: Vec<Side> = sides.into_iter().map(|s| [s.start, s.end]).collect();
    let mut result = canonicalize(sides);
    result.color = a.color;
    result
}

// =============================================================================
// CANONICALIZATION
// =============================================================================

/// Cleans a side soup into closed outlines.
///
/// Sides whose ends cannot be chained into a loop are kept as they are.
pub(crate) fn canonicalize(sides: Vec<Side>) -> Geom2 {
    let mut welder = Welder2::new(VERTEX_MERGE_EPSILON);
    let welded = sides
        .into_iter()
        .map(|[start, end]| [welder.weld(start), welder.weld(end)])
        .filter(|[start, end]| start != end);

    // a side and its reverse enclose nothing
    let mut kept: Vec<Option<Side>> = Vec::new();
    let mut by_key: HashMap<(PointKey, PointKey), Vec<usize>> = HashMap::new();
    for side in welded {
        let (start, end) = (point_key(side[0]), point_key(side[1]));
        if let Some(index) = by_key.get_mut(&(end, start)).and_then(Vec::pop) {
            kept[index] = None;
            continue;
        }
        by_key.entry((start, end)).or_default().push(kept.len());
        kept.push(Some(side));
    }

    let soup = Geom2::from_sides(kept.into_iter().flatten().collect());
    let mut sides = Vec::with_capacity(soup.sides.len());
    for chain in soup.chains() {
        if chain.closed {
            let points = simplify_loop(chain.points, VERTEX_MERGE_EPSILON);
            if points.len() >= 3 {
                sides.extend(outline_sides(&points));
            }
        } else {
            sides.extend(chain.points.windows(2).map(|pair| [pair[0], pair[1]]));
        }
    }
    Geom2::from_sides(sides)
}

/// Removes repeated, collinear and spike vertices from a closed loop.
pub(crate) fn simplify_loop(mut points: Vec<DVec2>, tolerance: f64) -> Vec<DVec2> {
    let mut changed = true;
    while changed && points.len() >= 3 {
        changed = false;
        let mut index = 0;
        while index < points.len() && points.len() >= 3 {
            let n = points.len();
            let previous = points[(index + n - 1) % n];
            let here = points[index];
            let next = points[(index + 1) % n];
            let redundant = here.distance(next) < tolerance
                || previous.distance(next) < tolerance
                || distance_to_line(here, previous, next) < tolerance;
            if redundant {
                points.remove(index);
                changed = true;
            } else {
                index += 1;
            }
        }
    }
    if points.len() < 3 {
        points.clear();
    }
    points
}

fn distance_to_line(point: DVec2, a: DVec2, b: DVec2) -> f64 {
    let direction = b - a;
    let length = direction.length();
    if length < NUMERIC_EPSILON {
        return point.distance(a);
    }
    direction.perp_dot(point - a).abs() / length
}
