//! Tests for convex hulls.

use super::*;
use crate::measurements::Measure;
use approx::assert_relative_eq;

fn triangle_path(offset: DVec2) -> Path2 {
    Path2::from_points(
        &[
            offset,
            offset + DVec2::new(1.0, 1.0),
            offset + DVec2::new(0.0, 1.0),
        ],
        false,
    )
}

fn three_triangles() -> [Path2; 3] {
    [
        triangle_path(DVec2::ZERO),
        triangle_path(DVec2::new(5.0, 5.0)),
        triangle_path(DVec2::new(-5.0, 5.0)),
    ]
}

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

fn unit_cube() -> Geom3 {
    let corners: Vec<DVec3> = (0..8)
        .map(|i| DVec3::new((i & 1) as f64, ((i >> 1) & 1) as f64, ((i >> 2) & 1) as f64))
        .collect();
    // only the vertices matter to a hull
    Geom3::from_polygons(vec![
        Poly3::new(corners[0..4].to_vec()),
        Poly3::new(corners[4..8].to_vec()),
    ])
}

#[test]
fn test_hull_of_cube_points_has_six_faces() {
    let result = hull(&[&unit_cube()]).unwrap();
    assert_eq!(result.polygons.len(), 6);
    assert!(result.polygons.iter().all(|p| p.vertices.len() == 4));
    assert_relative_eq!(result.measure_volume(), 1.0, epsilon = 1e-9);
    assert_relative_eq!(result.measure_area(), 6.0, epsilon = 1e-9);
}

#[test]
fn test_hull_of_flat_solid_is_empty() {
    let flat = Geom3::from_polygons(vec![Poly3::new(vec![DVec3::ZERO, DVec3::X, DVec3::Y])]);
    assert!(hull(&[&flat]).unwrap().is_empty());
}

#[test]
fn test_path_hull_of_three_triangles() {
    let [a, b, c] = three_triangles();
    let result = hull(&[&a, &b, &c]).unwrap();
    assert!(result.is_closed);
    assert_eq!(
        result.points,
        vec![
            DVec2::new(-5.0, 5.0),
            DVec2::new(0.0, 0.0),
            DVec2::new(6.0, 6.0),
            DVec2::new(-5.0, 6.0),
        ]
    );
}

#[test]
fn test_path_hull_chain_is_first_link() {
    let [a, b, c] = three_triangles();
    let chain = hull_chain(&[&a, &b, &c]).unwrap();
    assert!(chain.is_closed);
    assert_eq!(
        chain.points,
        vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(6.0, 6.0),
            DVec2::new(5.0, 6.0),
            DVec2::new(0.0, 1.0),
        ]
    );
    assert_eq!(chain, hull(&[&a, &b]).unwrap());
}

#[test]
fn test_region_hull_of_two_squares() {
    let a = square_at(DVec2::ZERO, 2.0);
    let b = square_at(DVec2::new(4.0, 0.0), 2.0);
    let result = hull(&[&a, &b]).unwrap();
    assert_eq!(result.sides.len(), 4);
    assert_relative_eq!(result.measure_area(), 12.0, epsilon = 1e-9);
}

#[test]
fn test_hull_drops_color() {
    let mut a = square_at(DVec2::ZERO, 2.0);
    a.color = Some([1.0, 0.0, 0.0, 1.0]);
    assert_eq!(hull(&[&a]).unwrap().color, None);
}

#[test]
fn test_hull_chain_of_three_squares() {
    let a = square_at(DVec2::ZERO, 2.0);
    let b = square_at(DVec2::new(4.0, 0.0), 2.0);
    let c = square_at(DVec2::new(4.0, 4.0), 2.0);
    let chain = hull_chain(&[&a, &b, &c]).unwrap();
    // two 6x2 capsules overlapping in the middle square
    assert_relative_eq!(chain.measure_area(), 20.0, epsilon = 1e-9);
}

#[test]
fn test_hull_chain_of_one_is_its_hull() {
    let a = square_at(DVec2::ZERO, 2.0);
    assert_eq!(hull_chain(&[&a]).unwrap(), hull(&[&a]).unwrap());
}

#[test]
fn test_hull_without_operands() {
    let none: [&Geom2; 0] = [];
    assert!(matches!(
        hull(&none),
        Err(ModelingError::InvalidOption { option: "geometries", .. })
    ));
    assert!(hull_chain(&none).is_err());
}
