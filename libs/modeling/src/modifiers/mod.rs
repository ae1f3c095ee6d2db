//! # Modifiers
//!
//! Cleanup passes over geometry values: snapping coordinates to a grid and
//! merging coplanar polygons of solids.

mod retessellate;

pub use retessellate::retessellate;

use crate::geometries::{Geom2, Geom3, Path2, Poly3};
use crate::measurements::Measure;
use glam::{DVec2, DVec3};

/// Geometry values that can be snapped to a grid.
pub trait Snap: Sized {
    /// Rounds every coordinate to a multiple of the value's epsilon and drops
    /// what became degenerate.
    fn snap(&self) -> Self;
}

fn snap_value(value: f64, epsilon: f64) -> f64 {
    (value / epsilon).round() * epsilon + 0.0
}

fn snap2(point: DVec2, epsilon: f64) -> DVec2 {
    DVec2::new(snap_value(point.x, epsilon), snap_value(point.y, epsilon))
}

fn snap3(point: DVec3, epsilon: f64) -> DVec3 {
    DVec3::new(
        snap_value(point.x, epsilon),
        snap_value(point.y, epsilon),
        snap_value(point.z, epsilon),
    )
}

impl Snap for Geom2 {
    fn snap(&self) -> Self {
        let epsilon = self.measure_epsilon();
        if epsilon <= 0.0 {
            return self.clone();
        }
        let sides = self
            .sides
            .iter()
            .map(|&[a, b]| [snap2(a, epsilon), snap2(b, epsilon)])
            .collect();
        Self {
            color: self.color,
            ..Geom2::from_sides(sides)
        }
    }
}

impl Snap for Geom3 {
    fn snap(&self) -> Self {
        let epsilon = self.measure_epsilon();
        if epsilon <= 0.0 {
            return self.clone();
        }
        let polygons = self
            .polygons
            .iter()
            .filter_map(|polygon| {
                let mut vertices: Vec<DVec3> =
                    polygon.vertices.iter().map(|&v| snap3(v, epsilon)).collect();
                vertices.dedup();
                while vertices.len() > 1 && vertices.first() == vertices.last() {
                    vertices.pop();
                }
                let snapped = Poly3::new(vertices);
                (!snapped.is_degenerate()).then_some(snapped)
            })
            .collect();
        Self {
            polygons,
            color: self.color,
        }
    }
}

impl Snap for Path2 {
    fn snap(&self) -> Self {
        let epsilon = self.measure_epsilon();
        if epsilon <= 0.0 {
            return self.clone();
        }
        let mut points: Vec<DVec2> = self.points.iter().map(|&p| snap2(p, epsilon)).collect();
        points.dedup();
        let mut snapped = Path2::from_points(&points, self.is_closed);
        snapped.color = self.color;
        snapped
    }
}

/// Snaps `geometry` to the grid of its own epsilon.
pub fn snap<G: Snap>(geometry: &G) -> G {
    geometry.snap()
}

#[cfg(test)]
mod tests;
