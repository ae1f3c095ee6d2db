//! # Measurements
//!
//! Area, volume, bounds, centers and tolerance of geometry values.
//!
//! All measurements are reported in 3D; 2D values have `z = 0`.

use crate::geometries::{Geom2, Geom3, Path2};
use config::constants::{scaled_epsilon, NUMERIC_EPSILON};
use glam::{DVec2, DVec3};

/// Axis-aligned bounds as `[min, max]`.
pub type BoundingBox = [DVec3; 2];

/// A sphere as center and radius.
pub type BoundingSphere = (DVec3, f64);

/// Measurements every geometry value supports.
pub trait Measure {
    /// Enclosed area (2D) or surface area (3D).
    fn measure_area(&self) -> f64;

    /// Enclosed volume; zero for 2D values.
    fn measure_volume(&self) -> f64;

    /// Axis-aligned bounds. Empty values report a box at the origin.
    fn measure_bounding_box(&self) -> BoundingBox;

    /// Sphere around the average of the points reaching the farthest one.
    fn measure_bounding_sphere(&self) -> BoundingSphere;

    /// Centroid of the enclosed area or volume.
    fn measure_center_of_mass(&self) -> DVec3;

    /// Tolerance suited to the size of the value.
    fn measure_epsilon(&self) -> f64;

    /// Center of the bounding box.
    fn measure_center(&self) -> DVec3 {
        let [min, max] = self.measure_bounding_box();
        (min + max) * 0.5
    }

    /// Extent of the bounding box along each axis.
    fn measure_dimensions(&self) -> DVec3 {
        let [min, max] = self.measure_bounding_box();
        max - min
    }
}

/// Bounds enclosing every geometry in `geometries`.
pub fn measure_aggregate_bounding_box<G: Measure>(geometries: &[&G]) -> BoundingBox {
    let mut boxes = geometries.iter().map(|g| g.measure_bounding_box());
    let Some(first) = boxes.next() else {
        return [DVec3::ZERO, DVec3::ZERO];
    };
    boxes.fold(first, |[min, max], [lo, hi]| [min.min(lo), max.max(hi)])
}

fn bounds_of(points: impl IntoIterator<Item = DVec3>) -> BoundingBox {
    let mut points = points.into_iter();
    let Some(first) = points.next() else {
        return [DVec3::ZERO, DVec3::ZERO];
    };
    points.fold([first, first], |[min, max], p| [min.min(p), max.max(p)])
}

fn sphere_of(points: &[DVec3]) -> BoundingSphere {
    if points.is_empty() {
        return (DVec3::ZERO, 0.0);
    }
    let center = points.iter().copied().sum::<DVec3>() / points.len() as f64;
    let radius = points
        .iter()
        .map(|p| p.distance_squared(center))
        .fold(0.0, f64::max)
        .sqrt();
    (center, radius)
}

fn lift(point: DVec2) -> DVec3 {
    point.extend(0.0)
}

impl Measure for Geom2 {
    fn measure_area(&self) -> f64 {
        self.sides.iter().map(|[a, b]| a.perp_dot(*b)).sum::<f64>() * 0.5
    }

    fn measure_volume(&self) -> f64 {
        0.0
    }

    fn measure_bounding_box(&self) -> BoundingBox {
        bounds_of(self.sides.iter().map(|side| lift(side[0])))
    }

    fn measure_bounding_sphere(&self) -> BoundingSphere {
        let points: Vec<DVec3> = self.sides.iter().map(|side| lift(side[0])).collect();
        sphere_of(&points)
    }

    fn measure_center_of_mass(&self) -> DVec3 {
        let mut doubled_area = 0.0;
        let mut weighted = DVec2::ZERO;
        for &[a, b] in &self.sides {
            let cross = a.perp_dot(b);
            doubled_area += cross;
            weighted += (a + b) * cross;
        }
        if doubled_area.abs() < NUMERIC_EPSILON {
            return DVec3::ZERO;
        }
        lift(weighted / (3.0 * doubled_area))
    }

    fn measure_epsilon(&self) -> f64 {
        let dimensions = self.measure_dimensions();
        scaled_epsilon(&[dimensions.x, dimensions.y])
    }
}

impl Measure for Geom3 {
    fn measure_area(&self) -> f64 {
        self.polygons.iter().map(|p| p.area()).sum()
    }

    fn measure_volume(&self) -> f64 {
        self.polygons.iter().map(|p| p.signed_volume()).sum()
    }

    fn measure_bounding_box(&self) -> BoundingBox {
        bounds_of(self.vertices())
    }

    fn measure_bounding_sphere(&self) -> BoundingSphere {
        let points: Vec<DVec3> = self.vertices().collect();
        sphere_of(&points)
    }

    fn measure_center_of_mass(&self) -> DVec3 {
        let mut volume = 0.0;
        let mut weighted = DVec3::ZERO;
        for polygon in &self.polygons {
            let Some(&first) = polygon.vertices.first() else {
                continue;
            };
            for pair in polygon.vertices.windows(2).skip(1) {
                let tetra = first.dot(pair[0].cross(pair[1])) / 6.0;
                volume += tetra;
                weighted += (first + pair[0] + pair[1]) * (tetra / 4.0);
            }
        }
        if volume.abs() < NUMERIC_EPSILON {
            return DVec3::ZERO;
        }
        weighted / volume
    }

    fn measure_epsilon(&self) -> f64 {
        let dimensions = self.measure_dimensions();
        scaled_epsilon(&dimensions.to_array())
    }
}

impl Measure for Path2 {
    fn measure_area(&self) -> f64 {
        0.0
    }

    fn measure_volume(&self) -> f64 {
        0.0
    }

    fn measure_bounding_box(&self) -> BoundingBox {
        bounds_of(self.points.iter().map(|&p| lift(p)))
    }

    fn measure_bounding_sphere(&self) -> BoundingSphere {
        let points: Vec<DVec3> = self.points.iter().map(|&p| lift(p)).collect();
        sphere_of(&points)
    }

    /// A path has no mass; the origin is reported.
    fn measure_center_of_mass(&self) -> DVec3 {
        DVec3::ZERO
    }

    fn measure_epsilon(&self) -> f64 {
        let dimensions = self.measure_dimensions();
        scaled_epsilon(&[dimensions.x, dimensions.y])
    }
}
