//! # Geom3
//!
//! A 3D solid described by planar convex polygons facing outward.

use super::poly3::Poly3;
use super::Rgba;
use glam::{DMat4, DVec3};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 3D solid bounded by polygons.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Geom3 {
    pub polygons: Vec<Poly3>,
    pub color: Option<Rgba>,
}

impl Geom3 {
    /// Creates an empty solid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a solid from polygons.
    pub fn from_polygons(polygons: Vec<Poly3>) -> Self {
        Self {
            polygons,
            color: None,
        }
    }

    /// Creates a solid with one polygon per vertex list.
    ///
    /// Lists with fewer than three vertices are ignored.
    pub fn from_points(lists: &[Vec<DVec3>]) -> Self {
        let polygons = lists
            .iter()
            .filter(|vertices| vertices.len() >= 3)
            .map(|vertices| Poly3::new(vertices.clone()))
            .collect();
        Self::from_polygons(polygons)
    }

    /// The polygons of the solid.
    pub fn to_polygons(&self) -> &[Poly3] {
        &self.polygons
    }

    /// Vertex lists, one per polygon.
    pub fn to_points(&self) -> Vec<Vec<DVec3>> {
        self.polygons.iter().map(|p| p.vertices.clone()).collect()
    }

    /// Iterates over every polygon vertex.
    pub fn vertices(&self) -> impl Iterator<Item = DVec3> + '_ {
        self.polygons.iter().flat_map(|p| p.vertices.iter().copied())
    }

    /// True when the solid has no polygons.
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Turns the solid inside out.
    pub fn invert(&self) -> Self {
        Self {
            polygons: self.polygons.iter().map(Poly3::inverted).collect(),
            color: self.color,
        }
    }

    /// Applies `matrix` to every polygon.
    pub fn transform(&self, matrix: &DMat4) -> Self {
        Self {
            polygons: self.polygons.iter().map(|p| p.transform(matrix)).collect(),
            color: self.color,
        }
    }
}

impl fmt::Display for Geom3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "geom3 ({} polygons):", self.polygons.len())?;
        for polygon in &self.polygons {
            writeln!(f, "  {polygon}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_face() -> Vec<DVec3> {
        vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(1.0, 1.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
        ]
    }

    #[test]
    fn test_from_points() {
        let geometry = Geom3::from_points(&[square_face(), vec![DVec3::ZERO]]);
        assert_eq!(geometry.to_polygons().len(), 1);
        assert_eq!(geometry.to_points()[0], square_face());
    }

    #[test]
    fn test_invert_reverses_vertices() {
        let geometry = Geom3::from_points(&[square_face()]);
        let inverted = geometry.invert();
        let mut expected = square_face();
        expected.reverse();
        assert_eq!(inverted.polygons[0].vertices, expected);
        assert_eq!(geometry.polygons[0].vertices, square_face());
    }

    #[test]
    fn test_transform_keeps_color() {
        let mut geometry = Geom3::from_points(&[square_face()]);
        geometry.color = Some([1.0, 0.0, 0.0, 1.0]);
        let moved = geometry.transform(&DMat4::from_translation(DVec3::Z));
        assert_eq!(moved.color, geometry.color);
        assert_eq!(moved.polygons[0].vertices[0], DVec3::Z);
    }

    #[test]
    fn test_display() {
        let text = Geom3::from_points(&[square_face()]).to_string();
        assert!(text.starts_with("geom3 (1 polygons):"));
        assert!(text.contains("poly3: vertices: [[0.0000000, 0.0000000, 0.0000000]"));
    }
}
