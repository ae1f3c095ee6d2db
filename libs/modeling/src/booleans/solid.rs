//! # Solid Booleans
//!
//! Boolean operations on 3D solids. Polygons keep the plane of the polygon
//! they were split from, so fragments never drift off their face.

use super::bsp::{self, BspPolygon, Split};
use super::{shortcut, BooleanOperation, Shortcut};
use crate::geometries::{Geom3, Plane, Poly3};
use config::constants::PLANE_EPSILON;
use glam::DVec3;

const COPLANAR: u8 = 0;
const FRONT: u8 = 1;
const BACK: u8 = 2;
const SPANNING: u8 = 3;

/// A convex polygon with its cached plane.
#[derive(Debug, Clone)]
pub(crate) struct BspPoly3 {
    vertices: Vec<DVec3>,
    plane: Plane,
}

impl BspPoly3 {
    /// `None` for polygons without area.
    pub(crate) fn from_poly3(polygon: &Poly3) -> Option<Self> {
        if polygon.is_degenerate() {
            return None;
        }
        Some(Self {
            vertices: polygon.vertices.clone(),
            plane: polygon.plane(),
        })
    }

    pub(crate) fn into_poly3(self) -> Poly3 {
        Poly3::new(self.vertices)
    }
}

fn classify(plane: &Plane, vertex: DVec3) -> u8 {
    let distance = plane.signed_distance(vertex);
    if distance < -PLANE_EPSILON {
        BACK
    } else if distance > PLANE_EPSILON {
        FRONT
    } else {
        COPLANAR
    }
}

impl BspPolygon for BspPoly3 {
    type Plane = Plane;

    fn plane(&self) -> Plane {
        self.plane
    }

    fn flip(&mut self) {
        self.vertices.reverse();
        self.plane = self.plane.flipped();
    }

    fn flip_plane(plane: &Plane) -> Plane {
        plane.flipped()
    }

    fn split(&self, plane: &Plane, out: &mut Split<Self>) {
        let types: Vec<u8> = self.vertices.iter().map(|&v| classify(plane, v)).collect();
        let polygon_type = types.iter().fold(COPLANAR, |acc, &t| acc | t);

        match polygon_type {
            COPLANAR => {
                if plane.normal.dot(self.plane.normal) > 0.0 {
                    out.coplanar_front.push(self.clone());
                } else {
                    out.coplanar_back.push(self.clone());
                }
            }
            FRONT => out.front.push(self.clone()),
            BACK => out.back.push(self.clone()),
            _ => {
                let n = self.vertices.len();
                let mut front = Vec::with_capacity(n + 1);
                let mut back = Vec::with_capacity(n + 1);
                for i in 0..n {
                    let j = (i + 1) % n;
                    let (ti, tj) = (types[i], types[j]);
                    let (vi, vj) = (self.vertices[i], self.vertices[j]);
                    if ti != BACK {
                        front.push(vi);
                    }
                    if ti != FRONT {
                        back.push(vi);
                    }
                    if ti | tj == SPANNING {
                        let t = (plane.w - plane.normal.dot(vi)) / plane.normal.dot(vj - vi);
                        let crossing = vi.lerp(vj, t);
                        front.push(crossing);
                        back.push(crossing);
                    }
                }
                if front.len() >= 3 {
                    out.front.push(Self {
                        vertices: front,
                        plane: self.plane,
                    });
                }
                if back.len() >= 3 {
                    out.back.push(Self {
                        vertices: back,
                        plane: self.plane,
                    });
                }
            }
        }
    }
}

fn to_bsp(geometry: &Geom3) -> Vec<BspPoly3> {
    geometry.polygons.iter().filter_map(BspPoly3::from_poly3).collect()
}

/// Combines two solids without merging coplanar fragments. The result takes
/// the color of `a`.
pub(crate) fn combine(operation: BooleanOperation, a: &Geom3, b: &Geom3) -> Geom3 {
    if let Some(shortcut) = shortcut(operation, a, a.is_empty(), b, b.is_empty()) {
        let polygons = match shortcut {
            Shortcut::Empty => Vec::new(),
            Shortcut::First => a.polygons.clone(),
            Shortcut::Second => b.polygons.clone(),
            Shortcut::Both => [a.polygons.as_slice(), b.polygons.as_slice()].concat(),
        };
        return Geom3 {
            polygons,
            color: a.color,
        };
    }

    let (first, second) = (to_bsp(a), to_bsp(b));
    let polygons = match operation {
        BooleanOperation::Union => bsp::union(first, second),
        BooleanOperation::Intersect => bsp::intersect(first, second),
        BooleanOperation::Subtract => bsp::subtract(first, second),
    };
    Geom3 {
        polygons: polygons.into_iter().map(BspPoly3::into_poly3).collect(),
        color: a.color,
    }
}
