//! Tests for modifiers.

use super::*;
use approx::assert_relative_eq;

fn quad(points: [[f64; 3]; 4]) -> Poly3 {
    Poly3::new(points.iter().map(|&p| DVec3::from_array(p)).collect())
}

#[test]
fn test_snap_geom2_rounds_to_epsilon_grid() {
    let region = Geom2::from_points(&[
        DVec2::new(0.0, 0.0),
        DVec2::new(10.000001, 0.0),
        DVec2::new(10.0, 10.0),
        DVec2::new(0.0, 10.0),
    ])
    .unwrap();
    let snapped = region.snap();
    assert_eq!(snapped.sides.len(), 4);
    // both right-hand corners land on the same grid column
    assert_eq!(snapped.sides[1][1].x, snapped.sides[2][1].x);
    assert_relative_eq!(snapped.sides[1][1].x, 10.0, epsilon = 1e-5);
}

#[test]
fn test_snap_path_drops_repeated_points() {
    let path = Path2::from_points(
        &[
            DVec2::new(0.0, 0.0),
            DVec2::new(5.0, 0.0),
            DVec2::new(5.0000000001, 0.0),
            DVec2::new(5.0, 5.0),
        ],
        false,
    );
    let snapped = snap(&path);
    assert_eq!(snapped.points.len(), 3);
    assert!(!snapped.is_closed);
}

#[test]
fn test_snap_geom3_drops_slivers() {
    let solid = Geom3::from_polygons(vec![
        quad([[0.0, 0.0, 0.0], [4.0, 0.0, 0.0], [4.0, 4.0, 0.0], [0.0, 4.0, 0.0]]),
        Poly3::new(vec![
            DVec3::new(0.0, 0.0, 4.0),
            DVec3::new(4.0, 0.0, 4.0),
            DVec3::new(4.0, 0.0000000001, 4.0),
        ]),
    ]);
    let snapped = solid.snap();
    assert_eq!(snapped.polygons.len(), 1);
}

#[test]
fn test_snap_empty_is_unchanged() {
    assert_eq!(Geom2::new().snap(), Geom2::new());
}

#[test]
fn test_retessellate_merges_coplanar_squares() {
    let split_face = Geom3::from_polygons(vec![
        quad([[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]]),
        quad([[1.0, 0.0, 0.0], [2.0, 0.0, 0.0], [2.0, 1.0, 0.0], [1.0, 1.0, 0.0]]),
        quad([[0.0, 0.0, 1.0], [0.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 0.0, 1.0]]),
    ]);
    let merged = retessellate(&split_face);
    assert_eq!(merged.polygons.len(), 2);
    let areas: f64 = merged.polygons.iter().map(Poly3::area).sum();
    assert_relative_eq!(areas, 3.0, epsilon = 1e-9);
    // original corners are reused
    assert!(merged.polygons[0]
        .vertices
        .iter()
        .any(|&v| v == DVec3::new(2.0, 1.0, 0.0)));
}

#[test]
fn test_retessellate_keeps_color_and_single_faces() {
    let mut solid = Geom3::from_polygons(vec![quad([
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [1.0, 1.0, 0.0],
        [0.0, 1.0, 0.0],
    ])]);
    solid.color = Some([0.0, 1.0, 0.0, 1.0]);
    let result = retessellate(&solid);
    assert_eq!(result, solid);
}
