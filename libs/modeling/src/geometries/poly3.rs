//! # Poly3
//!
//! A planar convex polygon in 3D, vertices counter-clockwise when seen from
//! the front (outside) of the surface it belongs to.

use super::plane::Plane;
use super::fmt_vec3;
use config::constants::NUMERIC_EPSILON;
use glam::{DMat4, DVec3};
use serde::{Deserialize, Serialize};

/// A planar convex polygon.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Poly3 {
    pub vertices: Vec<DVec3>,
}

impl Poly3 {
    /// Creates a polygon from its vertices.
    pub fn new(vertices: Vec<DVec3>) -> Self {
        Self { vertices }
    }

    /// Unnormalized Newell normal; its length is twice the polygon area.
    pub fn newell_normal(&self) -> DVec3 {
        let n = self.vertices.len();
        let mut normal = DVec3::ZERO;
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            normal.x += (a.y - b.y) * (a.z + b.z);
            normal.y += (a.z - b.z) * (a.x + b.x);
            normal.z += (a.x - b.x) * (a.y + b.y);
        }
        normal
    }

    /// True when the polygon has fewer than three vertices or no area.
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3 || self.newell_normal().length() < NUMERIC_EPSILON
    }

    /// Supporting plane of the polygon.
    ///
    /// Degenerate polygons yield a plane with a zero normal.
    pub fn plane(&self) -> Plane {
        let normal = self.newell_normal().normalize_or_zero();
        let centroid = self.centroid();
        Plane::new(normal, normal.dot(centroid))
    }

    /// Average of the vertices.
    pub fn centroid(&self) -> DVec3 {
        if self.vertices.is_empty() {
            return DVec3::ZERO;
        }
        self.vertices.iter().copied().sum::<DVec3>() / self.vertices.len() as f64
    }

    /// Surface area.
    pub fn area(&self) -> f64 {
        0.5 * self.newell_normal().length()
    }

    /// Signed volume of the cone from the origin to this polygon.
    ///
    /// Summed over a closed mesh this gives the enclosed volume.
    pub fn signed_volume(&self) -> f64 {
        let Some(&first) = self.vertices.first() else {
            return 0.0;
        };
        self.vertices
            .windows(2)
            .skip(1)
            .map(|pair| first.dot(pair[0].cross(pair[1])) / 6.0)
            .sum()
    }

    /// The same polygon facing the other way.
    pub fn inverted(&self) -> Self {
        let mut vertices = self.vertices.clone();
        vertices.reverse();
        Self { vertices }
    }

    /// Applies `matrix`; mirroring matrices keep the polygon facing outward.
    pub fn transform(&self, matrix: &DMat4) -> Self {
        let mut vertices: Vec<DVec3> = self
            .vertices
            .iter()
            .map(|&v| matrix.transform_point3(v))
            .collect();
        if matrix.determinant() < 0.0 {
            vertices.reverse();
        }
        Self { vertices }
    }

    /// True when every corner turns the same way around the normal.
    pub fn is_convex(&self) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return false;
        }
        let normal = self.newell_normal();
        (0..n).all(|i| {
            let prev = self.vertices[(i + n - 1) % n];
            let here = self.vertices[i];
            let next = self.vertices[(i + 1) % n];
            (here - prev).cross(next - here).dot(normal) >= -NUMERIC_EPSILON
        })
    }
}

impl std::fmt::Display for Poly3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let vertices: Vec<String> = self.vertices.iter().map(|&v| fmt_vec3(v)).collect();
        write!(f, "poly3: vertices: [{}]", vertices.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_square() -> Poly3 {
        Poly3::new(vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(1.0, 1.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
        ])
    }

    #[test]
    fn test_area_and_plane() {
        let square = unit_square();
        assert_relative_eq!(square.area(), 1.0);
        assert_relative_eq!(square.plane().normal.z, 1.0);
        assert!(square.is_convex());
    }

    #[test]
    fn test_inverted_flips_plane() {
        let square = unit_square().inverted();
        assert_relative_eq!(square.plane().normal.z, -1.0);
        assert_eq!(square.vertices[0], DVec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_degenerate() {
        let line = Poly3::new(vec![DVec3::ZERO, DVec3::X, DVec3::X * 2.0]);
        assert!(line.is_degenerate());
        assert!(!unit_square().is_degenerate());
    }

    #[test]
    fn test_mirror_transform_keeps_orientation() {
        // a face looking up becomes a face looking down after mirroring in z
        let mirrored = unit_square().transform(&DMat4::from_scale(DVec3::new(1.0, 1.0, -1.0)));
        assert_relative_eq!(mirrored.plane().normal.z, -1.0);
        let flipped = unit_square().transform(&DMat4::from_scale(DVec3::new(1.0, -1.0, 1.0)));
        assert_relative_eq!(flipped.plane().normal.z, 1.0);
    }

    #[test]
    fn test_non_convex() {
        let arrow = Poly3::new(vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(2.0, 0.0, 0.0),
            DVec3::new(1.0, 0.5, 0.0),
            DVec3::new(1.0, 2.0, 0.0),
        ]);
        assert!(!arrow.is_convex());
    }
}
