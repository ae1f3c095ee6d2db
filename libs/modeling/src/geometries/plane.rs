//! # Plane
//!
//! An oriented plane `normal · p = w`.

use config::constants::NUMERIC_EPSILON;
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// An oriented plane in Hessian normal form.
///
/// Points with a positive signed distance lie in front of the plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    /// Unit normal.
    pub normal: DVec3,
    /// Distance of the plane from the origin along the normal.
    pub w: f64,
}

impl Plane {
    /// Creates a plane from a unit normal and offset.
    pub fn new(normal: DVec3, w: f64) -> Self {
        Self { normal, w }
    }

    /// Plane through three points, oriented by their counter-clockwise order.
    ///
    /// Returns `None` when the points are collinear.
    pub fn from_points(a: DVec3, b: DVec3, c: DVec3) -> Option<Self> {
        let normal = (b - a).cross(c - a);
        let length = normal.length();
        if length < NUMERIC_EPSILON {
            return None;
        }
        let normal = normal / length;
        Some(Self {
            normal,
            w: normal.dot(a),
        })
    }

    /// Plane with the given normal passing through `point`.
    ///
    /// Returns `None` for a zero normal.
    pub fn from_normal_and_point(normal: DVec3, point: DVec3) -> Option<Self> {
        let normal = normal.try_normalize()?;
        Some(Self {
            normal,
            w: normal.dot(point),
        })
    }

    /// The same plane facing the opposite way.
    pub fn flipped(&self) -> Self {
        Self {
            normal: -self.normal,
            w: -self.w,
        }
    }

    /// Signed distance of `point` from the plane.
    #[inline]
    pub fn signed_distance(&self, point: DVec3) -> f64 {
        self.normal.dot(point) - self.w
    }

    /// Orthogonal projection of `point` onto the plane.
    pub fn project_point(&self, point: DVec3) -> DVec3 {
        point - self.normal * self.signed_distance(point)
    }

    /// Whether both planes coincide within `epsilon`, including orientation.
    pub fn approx_eq(&self, other: &Plane, epsilon: f64) -> bool {
        (self.normal - other.normal).abs().max_element() < epsilon
            && (self.w - other.w).abs() < epsilon
    }
}

/// A 2D coordinate frame on a plane; counter-clockwise in the frame is
/// counter-clockwise about the plane normal.
pub(crate) struct PlaneFrame {
    origin: DVec3,
    u: DVec3,
    v: DVec3,
}

impl PlaneFrame {
    pub(crate) fn new(plane: &Plane) -> Self {
        let u = plane.normal.any_orthonormal_vector();
        Self {
            origin: plane.normal * plane.w,
            u,
            v: plane.normal.cross(u),
        }
    }

    pub(crate) fn to_local(&self, point: DVec3) -> DVec2 {
        let offset = point - self.origin;
        DVec2::new(offset.dot(self.u), offset.dot(self.v))
    }

    pub(crate) fn to_world(&self, point: DVec2) -> DVec3 {
        self.origin + self.u * point.x + self.v * point.y
    }
}
