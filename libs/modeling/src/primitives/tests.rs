//! Tests for primitive generators.

use super::*;
use crate::error::ModelingError;
use crate::measurements::Measure;
use approx::assert_relative_eq;
use glam::{DVec2, DVec3};
use std::f64::consts::{PI, TAU};

fn ngon_area(sides: usize, radius: f64) -> f64 {
    0.5 * sides as f64 * radius * radius * (TAU / sides as f64).sin()
}

// =============================================================================
// REGIONS
// =============================================================================

#[test]
fn test_circle_defaults() {
    let region = circle(&CircleOptions::default()).unwrap();
    assert_eq!(region.sides.len(), 32);
    assert_relative_eq!(region.measure_area(), ngon_area(32, 1.0), epsilon = 1e-9);
}

#[test]
fn test_partial_circle_is_a_pie_slice() {
    let options = CircleOptions {
        end_angle: PI,
        ..Default::default()
    };
    let region = circle(&options).unwrap();
    // 17 points on the arc and the center
    assert_eq!(region.sides.len(), 18);
    assert_relative_eq!(region.measure_area(), ngon_area(32, 1.0) / 2.0, epsilon = 1e-9);
    assert!(region.measure_bounding_box()[0].y > -1e-9);
}

#[test]
fn test_ellipse_defaults_and_radii() {
    assert_eq!(ellipse(&EllipseOptions::default()).unwrap().sides.len(), 32);

    let options = EllipseOptions {
        center: DVec2::new(5.0, 5.0),
        radius: DVec2::new(3.0, 1.0),
        ..Default::default()
    };
    let [min, max] = ellipse(&options).unwrap().measure_bounding_box();
    assert_relative_eq!(min.x, 2.0, epsilon = 1e-9);
    assert_relative_eq!(max.x, 8.0, epsilon = 1e-9);
    assert_relative_eq!(max.y, 6.0, epsilon = 1e-9);
}

#[test]
fn test_circle_rejects_bad_options() {
    let zero_radius = CircleOptions {
        radius: 0.0,
        ..Default::default()
    };
    assert!(matches!(
        circle(&zero_radius),
        Err(ModelingError::InvalidOption { option: "radius", .. })
    ));
    let few_segments = CircleOptions {
        segments: 2,
        ..Default::default()
    };
    assert!(matches!(
        circle(&few_segments),
        Err(ModelingError::InvalidOption { option: "segments", .. })
    ));
}

#[test]
fn test_rectangle_and_square() {
    let options = RectangleOptions {
        center: DVec2::new(1.0, 1.0),
        size: DVec2::new(4.0, 2.0),
    };
    let region = rectangle(&options).unwrap();
    assert_eq!(region.sides.len(), 4);
    assert_relative_eq!(region.measure_area(), 8.0);

    let region = square(&SquareOptions {
        size: 5.0,
        ..Default::default()
    })
    .unwrap();
    assert_relative_eq!(region.measure_area(), 25.0);
    let [min, max] = region.measure_bounding_box();
    assert_eq!(min, DVec3::new(-2.5, -2.5, 0.0));
    assert_eq!(max, DVec3::new(2.5, 2.5, 0.0));

    let negative = RectangleOptions {
        size: DVec2::new(-1.0, 1.0),
        ..Default::default()
    };
    assert!(rectangle(&negative).is_err());
}

#[test]
fn test_rounded_rectangle() {
    let region = rounded_rectangle(&RoundedRectangleOptions::default()).unwrap();
    assert_eq!(region.sides.len(), 36);
    let area = region.measure_area();
    let exact = 4.0 - (4.0 - PI) * 0.2 * 0.2;
    assert!(area < exact && area > exact - 0.01, "area {area}");

    let too_round = RoundedRectangleOptions {
        round_radius: 1.0,
        ..Default::default()
    };
    assert!(matches!(
        rounded_rectangle(&too_round),
        Err(ModelingError::InvalidOption { option: "round_radius", .. })
    ));
}

#[test]
fn test_star() {
    let region = star(&StarOptions::default()).unwrap();
    assert_eq!(region.sides.len(), 10);
    assert_relative_eq!(region.measure_bounding_box()[1].x, 1.0, epsilon = 1e-9);

    let dense = StarOptions {
        density: 3,
        ..Default::default()
    };
    assert!(matches!(
        star(&dense),
        Err(ModelingError::InvalidOption { option: "density", .. })
    ));

    let explicit = StarOptions {
        vertices: 4,
        inner_radius: 0.5,
        ..Default::default()
    };
    assert_eq!(star(&explicit).unwrap().sides.len(), 8);
}

#[test]
fn test_polygon_with_hole() {
    let options = PolygonOptions {
        points: vec![
            vec![
                DVec2::new(0.0, 0.0),
                DVec2::new(4.0, 0.0),
                DVec2::new(4.0, 4.0),
                DVec2::new(0.0, 4.0),
            ],
            vec![
                DVec2::new(1.0, 1.0),
                DVec2::new(1.0, 3.0),
                DVec2::new(3.0, 3.0),
                DVec2::new(3.0, 1.0),
            ],
        ],
        paths: None,
    };
    let region = polygon(&options).unwrap();
    assert_eq!(region.sides.len(), 8);
    assert_relative_eq!(region.measure_area(), 12.0);
}

#[test]
fn test_polygon_with_paths() {
    let points = vec![vec![
        DVec2::new(0.0, 0.0),
        DVec2::new(2.0, 0.0),
        DVec2::new(2.0, 2.0),
        DVec2::new(0.0, 2.0),
    ]];
    let options = PolygonOptions {
        points: points.clone(),
        paths: Some(vec![vec![0, 1, 2]]),
    };
    assert_relative_eq!(polygon(&options).unwrap().measure_area(), 2.0);

    let out_of_range = PolygonOptions {
        points,
        paths: Some(vec![vec![0, 1, 7]]),
    };
    assert!(matches!(
        polygon(&out_of_range),
        Err(ModelingError::InvalidOption { option: "paths", .. })
    ));
    assert!(polygon(&PolygonOptions::default()).is_err());
}

// =============================================================================
// SOLIDS
// =============================================================================

#[test]
fn test_cube() {
    let options = CubeOptions {
        center: DVec3::splat(5.0),
        size: 5.0,
    };
    let solid = cube(&options).unwrap();
    assert_eq!(solid.polygons.len(), 6);
    assert_relative_eq!(solid.measure_volume(), 125.0, epsilon = 1e-9);
    assert_eq!(solid.measure_center(), DVec3::splat(5.0));
}

#[test]
fn test_cuboid_measurements() {
    let options = CuboidOptions {
        size: DVec3::new(3.0, 5.0, 7.0),
        ..Default::default()
    };
    let solid = cuboid(&options).unwrap();
    assert_eq!(solid.polygons.len(), 6);
    assert_relative_eq!(solid.measure_area(), 142.0, epsilon = 1e-9);
    assert_relative_eq!(solid.measure_volume(), 105.0, epsilon = 1e-9);
    assert_relative_eq!(solid.measure_epsilon(), 5e-5, epsilon = 1e-12);
    let [min, max] = solid.measure_bounding_box();
    assert_eq!(min, DVec3::new(-1.5, -2.5, -3.5));
    assert_eq!(max, DVec3::new(1.5, 2.5, 3.5));

    let flat = CuboidOptions {
        size: DVec3::new(1.0, 0.0, 1.0),
        ..Default::default()
    };
    assert!(cuboid(&flat).is_err());
}

#[test]
fn test_cylinder() {
    let solid = cylinder(&CylinderOptions::default()).unwrap();
    assert_eq!(solid.polygons.len(), 34);
    assert_relative_eq!(solid.measure_volume(), ngon_area(32, 1.0) * 2.0, epsilon = 1e-9);
    let [min, max] = solid.measure_bounding_box();
    assert_relative_eq!(min.z, -1.0);
    assert_relative_eq!(max.z, 1.0);
}

#[test]
fn test_cone_from_elliptic_cylinder() {
    let options = CylinderEllipticOptions {
        start_radius: DVec2::ZERO,
        end_radius: DVec2::new(2.0, 1.0),
        ..Default::default()
    };
    let solid = cylinder_elliptic(&options).unwrap();
    assert_eq!(solid.polygons.len(), 33);
    let base = ngon_area(32, 1.0) * 2.0;
    assert_relative_eq!(solid.measure_volume(), base * 2.0 / 3.0, epsilon = 1e-9);

    let needle = CylinderEllipticOptions {
        start_radius: DVec2::ZERO,
        end_radius: DVec2::ZERO,
        ..Default::default()
    };
    assert!(cylinder_elliptic(&needle).is_err());
}

#[test]
fn test_rounded_cylinder() {
    let solid = rounded_cylinder(&RoundedCylinderOptions::default()).unwrap();
    let [min, max] = solid.measure_bounding_box();
    assert_relative_eq!(min.z, -1.0, epsilon = 1e-9);
    assert_relative_eq!(max.z, 1.0, epsilon = 1e-9);
    let volume = solid.measure_volume();
    assert!(volume > 5.5 && volume < 2.0 * PI, "volume {volume}");

    let too_round = RoundedCylinderOptions {
        round_radius: 1.5,
        ..Default::default()
    };
    assert!(rounded_cylinder(&too_round).is_err());
}

#[test]
fn test_sphere_and_ellipsoid() {
    let solid = sphere(&SphereOptions::default()).unwrap();
    assert_eq!(solid.polygons.len(), 32 * 16);
    let volume = solid.measure_volume();
    assert!(volume > 4.0 && volume < 4.0 / 3.0 * PI, "volume {volume}");

    let options = EllipsoidOptions {
        center: DVec3::new(0.0, 0.0, 10.0),
        radius: DVec3::new(1.0, 2.0, 3.0),
        segments: 16,
    };
    let [min, max] = ellipsoid(&options).unwrap().measure_bounding_box();
    assert_relative_eq!(min.z, 7.0, epsilon = 1e-9);
    assert_relative_eq!(max.z, 13.0, epsilon = 1e-9);
    assert_relative_eq!(max.y, 2.0, epsilon = 1e-9);
}

#[test]
fn test_geodesic_sphere() {
    let solid = geodesic_sphere(&GeodesicSphereOptions::default()).unwrap();
    assert_eq!(solid.polygons.len(), 20);
    assert!(solid.measure_volume() > 0.0);

    let options = GeodesicSphereOptions {
        radius: 3.0,
        frequency: 12,
    };
    let solid = geodesic_sphere(&options).unwrap();
    assert_eq!(solid.polygons.len(), 80);
    for vertex in solid.vertices() {
        assert_relative_eq!(vertex.length(), 3.0, epsilon = 1e-9);
    }

    let coarse = GeodesicSphereOptions {
        frequency: 5,
        ..Default::default()
    };
    assert!(geodesic_sphere(&coarse).is_err());
}

#[test]
fn test_rounded_cuboid() {
    let solid = rounded_cuboid(&RoundedCuboidOptions::default()).unwrap();
    let [min, max] = solid.measure_bounding_box();
    assert_relative_eq!(min.x, -1.0, epsilon = 1e-9);
    assert_relative_eq!(max.z, 1.0, epsilon = 1e-9);
    let volume = solid.measure_volume();
    assert!(volume > 7.7 && volume < 7.81, "volume {volume}");
}

#[test]
fn test_torus() {
    let solid = torus(&TorusOptions::default()).unwrap();
    assert_eq!(solid.polygons.len(), 32 * 32 * 2);
    let exact = 2.0 * PI * PI * 4.0;
    let volume = solid.measure_volume();
    assert!(volume > 0.95 * exact && volume < exact, "volume {volume}");

    let fat = TorusOptions {
        inner_radius: 5.0,
        ..Default::default()
    };
    assert!(matches!(
        torus(&fat),
        Err(ModelingError::InvalidOption { option: "inner_radius", .. })
    ));
}

#[test]
fn test_polyhedron_orientation() {
    let mut options = PolyhedronOptions {
        points: vec![DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z],
        faces: vec![vec![0, 2, 1], vec![0, 1, 3], vec![0, 3, 2], vec![1, 2, 3]],
        orientation: Orientation::Outward,
    };
    assert_relative_eq!(polyhedron(&options).unwrap().measure_volume(), 1.0 / 6.0, epsilon = 1e-12);

    options.orientation = Orientation::Inward;
    assert_relative_eq!(polyhedron(&options).unwrap().measure_volume(), -1.0 / 6.0, epsilon = 1e-12);

    options.faces.push(vec![0, 1, 9]);
    assert!(matches!(
        polyhedron(&options),
        Err(ModelingError::InvalidOption { option: "faces", .. })
    ));
}

// =============================================================================
// PATHS
// =============================================================================

#[test]
fn test_full_arc_is_closed() {
    let path = arc(&ArcOptions::default()).unwrap();
    assert_eq!(path.points.len(), 33);
    assert!(path.is_closed);
}

#[test]
fn test_half_arc_is_open() {
    let options = ArcOptions {
        end_angle: PI,
        ..Default::default()
    };
    let path = arc(&options).unwrap();
    assert_eq!(path.points.len(), 18);
    assert!(!path.is_closed);
    assert_relative_eq!(path.points[17].x, -1.0, epsilon = 1e-9);
}

#[test]
fn test_tangent_arc_keeps_its_ends() {
    let options = ArcOptions {
        end_angle: PI,
        make_tangent: true,
        ..Default::default()
    };
    let path = arc(&options).unwrap();
    assert_eq!(path.points.len(), 20);
    assert_relative_eq!(path.points[0].x, 1.0, epsilon = 1e-9);
    assert_relative_eq!(path.points[19].x, -1.0, epsilon = 1e-9);
}

#[test]
fn test_tiny_arc_is_a_point() {
    let options = ArcOptions {
        start_angle: 1.0,
        end_angle: 1.0,
        ..Default::default()
    };
    assert_eq!(arc(&options).unwrap().points.len(), 1);
}

#[test]
fn test_line() {
    let path = line(&[DVec2::ZERO, DVec2::X, DVec2::ONE]).unwrap();
    assert_eq!(path.points.len(), 3);
    assert!(!path.is_closed);
    assert!(line(&[DVec2::ZERO]).is_err());
}
