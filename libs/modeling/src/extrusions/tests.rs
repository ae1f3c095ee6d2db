//! Tests for extrusions and projection.

use super::*;
use crate::geometries::Poly3;
use crate::measurements::Measure;
use approx::assert_relative_eq;
use glam::DVec2;
use std::f64::consts::{FRAC_PI_2, PI};

fn square_at(center: DVec2, size: f64) -> Geom2 {
    let h = size / 2.0;
    Geom2::from_points(&[
        center + DVec2::new(-h, -h),
        center + DVec2::new(h, -h),
        center + DVec2::new(h, h),
        center + DVec2::new(-h, h),
    ])
    .unwrap()
}

fn block(size: DVec3) -> Geom3 {
    let h = size / 2.0;
    let c = |x: f64, y: f64, z: f64| DVec3::new(x, y, z) * h;
    Geom3::from_polygons(
        vec![
            vec![c(-1.0, -1.0, -1.0), c(-1.0, -1.0, 1.0), c(-1.0, 1.0, 1.0), c(-1.0, 1.0, -1.0)],
            vec![c(1.0, -1.0, -1.0), c(1.0, 1.0, -1.0), c(1.0, 1.0, 1.0), c(1.0, -1.0, 1.0)],
            vec![c(-1.0, -1.0, -1.0), c(1.0, -1.0, -1.0), c(1.0, -1.0, 1.0), c(-1.0, -1.0, 1.0)],
            vec![c(-1.0, 1.0, -1.0), c(-1.0, 1.0, 1.0), c(1.0, 1.0, 1.0), c(1.0, 1.0, -1.0)],
            vec![c(-1.0, -1.0, -1.0), c(-1.0, 1.0, -1.0), c(1.0, 1.0, -1.0), c(1.0, -1.0, -1.0)],
            vec![c(-1.0, -1.0, 1.0), c(1.0, -1.0, 1.0), c(1.0, 1.0, 1.0), c(-1.0, 1.0, 1.0)],
        ]
        .into_iter()
        .map(Poly3::new)
        .collect(),
    )
}

fn triangle_path(closed: bool) -> Path2 {
    Path2::from_points(
        &[DVec2::new(0.0, 0.0), DVec2::new(10.0, 10.0), DVec2::new(0.0, 10.0)],
        closed,
    )
}

// =============================================================================
// LINEAR
// =============================================================================

#[test]
fn test_linear_square() {
    let square = square_at(DVec2::new(10.0, 0.0), 5.0);
    let solid = extrude_linear(&ExtrudeLinearOptions::default(), &square).unwrap();
    assert_eq!(solid.polygons.len(), 10);
    assert_relative_eq!(solid.measure_volume(), 25.0, epsilon = 1e-9);
    let [min, max] = solid.measure_bounding_box();
    assert_relative_eq!(min.z, 0.0);
    assert_relative_eq!(max.z, 1.0);
}

#[test]
fn test_linear_volume_is_area_times_height() {
    let square = square_at(DVec2::ZERO, 3.0);
    let options = ExtrudeLinearOptions {
        height: 4.0,
        ..Default::default()
    };
    let solid = extrude_linear(&options, &square).unwrap();
    assert_relative_eq!(solid.measure_volume(), 36.0, epsilon = 1e-9);

    let shadow = project(&ProjectOptions::default(), &solid).unwrap();
    assert_relative_eq!(shadow.measure_area(), 9.0, epsilon = 1e-9);
}

#[test]
fn test_linear_downwards_is_not_inside_out() {
    let options = ExtrudeLinearOptions {
        height: -2.0,
        ..Default::default()
    };
    let solid = extrude_linear(&options, &square_at(DVec2::ZERO, 1.0)).unwrap();
    assert_relative_eq!(solid.measure_volume(), 2.0, epsilon = 1e-9);
}

#[test]
fn test_linear_twist() {
    let options = ExtrudeLinearOptions {
        height: 5.0,
        twist_angle: FRAC_PI_2,
        twist_steps: 4,
    };
    let solid = extrude_linear(&options, &square_at(DVec2::ZERO, 2.0)).unwrap();
    assert_eq!(solid.polygons.len(), 4 * 4 * 2 + 2);
    assert_relative_eq!(solid.measure_bounding_box()[1].z, 5.0);
    assert!(solid.measure_volume() > 0.0);
}

#[test]
fn test_linear_closed_path() {
    let solid = extrude_linear(&ExtrudeLinearOptions::default(), &triangle_path(true)).unwrap();
    assert_eq!(solid.polygons.len(), 8);
    assert_relative_eq!(solid.measure_volume(), 50.0, epsilon = 1e-9);
}

#[test]
fn test_linear_open_path_ending_at_start() {
    let path = Path2::from_points(
        &[
            DVec2::new(0.0, 0.0),
            DVec2::new(10.0, 10.0),
            DVec2::new(0.0, 10.0),
            DVec2::new(0.0, 0.0),
        ],
        false,
    );
    assert!(!path.is_closed);
    let solid = extrude_linear(&ExtrudeLinearOptions::default(), &path).unwrap();
    assert_eq!(solid.polygons.len(), 8);
    assert_relative_eq!(solid.measure_volume(), 50.0, epsilon = 1e-9);
}

#[test]
fn test_linear_open_path_fails() {
    assert!(matches!(
        extrude_linear(&ExtrudeLinearOptions::default(), &triangle_path(false)),
        Err(ModelingError::OpenPath { .. })
    ));
}

#[test]
fn test_linear_rejects_zero_height() {
    let options = ExtrudeLinearOptions {
        height: 0.0,
        ..Default::default()
    };
    assert!(matches!(
        extrude_linear(&options, &square_at(DVec2::ZERO, 1.0)),
        Err(ModelingError::InvalidOption { option: "height", .. })
    ));
}

#[test]
fn test_linear_keeps_color() {
    let mut square = square_at(DVec2::ZERO, 1.0);
    square.color = Some([1.0, 0.5, 0.0, 1.0]);
    let solid = extrude_linear(&ExtrudeLinearOptions::default(), &square).unwrap();
    assert_eq!(solid.color, square.color);
}

// =============================================================================
// RECTANGULAR
// =============================================================================

#[test]
fn test_rectangular_along_open_path() {
    let options = ExtrudeRectangularOptions {
        size: 2.0,
        height: 10.0,
    };
    let solid = extrude_rectangular(&options, &triangle_path(false)).unwrap();
    assert_eq!(solid.polygons.len(), 20);
    assert!(solid.measure_volume() > 0.0);
}

#[test]
fn test_rectangular_around_region() {
    let options = ExtrudeRectangularOptions {
        size: 1.0,
        height: 1.0,
    };
    let solid = extrude_rectangular(&options, &square_at(DVec2::ZERO, 10.0)).unwrap();
    assert_relative_eq!(solid.measure_volume(), 144.0 - 64.0, epsilon = 1e-9);
}

#[test]
fn test_rectangular_rejects_bad_size() {
    let options = ExtrudeRectangularOptions {
        size: 0.0,
        height: 1.0,
    };
    assert!(extrude_rectangular(&options, &triangle_path(false)).is_err());
    assert!(extrude_rectangular(&ExtrudeRectangularOptions::default(), &Path2::new()).is_err());
}

// =============================================================================
// ROTATE AND HELICAL
// =============================================================================

#[test]
fn test_rotate_full_turn() {
    let square = square_at(DVec2::new(10.0, 0.0), 5.0);
    let solid = extrude_rotate(&ExtrudeRotateOptions::default(), &square).unwrap();
    assert_eq!(solid.polygons.len(), 96);
    let exact = 2.0 * PI * 10.0 * 25.0;
    let volume = solid.measure_volume();
    assert!(volume > 0.9 * exact && volume < exact, "volume {volume}");
}

#[test]
fn test_rotate_half_turn_is_capped() {
    let square = square_at(DVec2::new(10.0, 0.0), 5.0);
    let options = ExtrudeRotateOptions {
        angle: PI,
        ..Default::default()
    };
    let solid = extrude_rotate(&options, &square).unwrap();
    assert_eq!(solid.polygons.len(), 6 * 4 * 2 + 2);
    let [min, max] = solid.measure_bounding_box();
    assert!(min.y > -1e-9);
    assert_relative_eq!(max.z, 2.5, epsilon = 1e-9);
}

#[test]
fn test_rotate_mirrors_left_side_regions() {
    let square = square_at(DVec2::new(-10.0, 0.0), 5.0);
    let solid = extrude_rotate(&ExtrudeRotateOptions::default(), &square).unwrap();
    assert_eq!(solid.polygons.len(), 96);
    assert!(solid.measure_volume() > 0.0);
}

#[test]
fn test_rotate_rejects_few_segments() {
    let options = ExtrudeRotateOptions {
        segments: 2,
        ..Default::default()
    };
    assert!(extrude_rotate(&options, &square_at(DVec2::new(5.0, 0.0), 1.0)).is_err());
}

#[test]
fn test_helical_rises_by_pitch() {
    let square = square_at(DVec2::new(10.0, 0.0), 2.0);
    let solid = extrude_helical(&ExtrudeHelicalOptions::default(), &square).unwrap();
    assert_eq!(solid.polygons.len(), 32 * 4 * 2 + 2);
    let [min, max] = solid.measure_bounding_box();
    assert_relative_eq!(min.z, -1.0, epsilon = 1e-9);
    assert_relative_eq!(max.z, 11.0, epsilon = 1e-9);
    assert!(solid.measure_volume() > 0.0);
}

#[test]
fn test_helical_rejects_regions_across_the_axis() {
    let square = square_at(DVec2::ZERO, 2.0);
    assert!(matches!(
        extrude_helical(&ExtrudeHelicalOptions::default(), &square),
        Err(ModelingError::Unsupported { .. })
    ));
}

// =============================================================================
// PROJECT
// =============================================================================

#[test]
fn test_project_cube() {
    let region = project(&ProjectOptions::default(), &block(DVec3::splat(5.0))).unwrap();
    assert_eq!(region.sides.len(), 4);
    assert_relative_eq!(region.measure_area(), 25.0, epsilon = 1e-9);
}

#[test]
fn test_project_along_x() {
    let options = ProjectOptions {
        axis: DVec3::X,
        origin: DVec3::ZERO,
    };
    let region = project(&options, &block(DVec3::new(1.0, 2.0, 3.0))).unwrap();
    assert_relative_eq!(region.measure_area(), 6.0, epsilon = 1e-9);
}

#[test]
fn test_project_empty_and_zero_axis() {
    assert!(project(&ProjectOptions::default(), &Geom3::new()).unwrap().is_empty());
    let options = ProjectOptions {
        axis: DVec3::ZERO,
        origin: DVec3::ZERO,
    };
    assert!(project(&options, &block(DVec3::ONE)).is_err());
}
