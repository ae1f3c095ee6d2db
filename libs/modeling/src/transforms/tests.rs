//! Tests for transforms.

use super::*;
use crate::geometries::Poly3;
use approx::assert_abs_diff_eq;
use glam::DVec2;
use std::f64::consts::FRAC_PI_2;

fn unit_square() -> Geom2 {
    Geom2::from_points(&[
        DVec2::new(0.0, 0.0),
        DVec2::new(1.0, 0.0),
        DVec2::new(1.0, 1.0),
        DVec2::new(0.0, 1.0),
    ])
    .unwrap()
}

#[test]
fn test_translate() {
    let moved = translate(DVec3::new(2.0, 3.0, 0.0), &unit_square());
    assert_eq!(moved.to_points()[1], DVec2::new(2.0, 3.0));
}

#[test]
fn test_rotate_about_z() {
    let path = Path2::from_points(&[DVec2::new(1.0, 0.0)], false);
    let turned = rotate(DVec3::new(0.0, 0.0, FRAC_PI_2), &path);
    assert_abs_diff_eq!(turned.points[0].x, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(turned.points[0].y, 1.0, epsilon = 1e-12);
}

#[test]
fn test_rotate_order_x_then_z() {
    let face = Geom3::from_polygons(vec![Poly3::new(vec![
        DVec3::new(0.0, 1.0, 0.0),
        DVec3::new(0.0, 1.0, 1.0),
        DVec3::new(1.0, 1.0, 0.0),
    ])]);
    // X by 90 takes +Y to +Z, Z by 90 leaves it there
    let turned = rotate(DVec3::new(FRAC_PI_2, 0.0, FRAC_PI_2), &face);
    let first = turned.polygons[0].vertices[0];
    assert_abs_diff_eq!(first.x, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(first.y, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(first.z, 1.0, epsilon = 1e-12);
}

#[test]
fn test_scale_rejects_non_positive_factors() {
    assert!(scale(DVec3::new(2.0, 0.0, 1.0), &unit_square()).is_err());
    let scaled = scale(DVec3::new(2.0, 3.0, 1.0), &unit_square()).unwrap();
    assert_abs_diff_eq!(scaled.measure_area(), 6.0, epsilon = 1e-12);
}

#[test]
fn test_mirror_keeps_region_area_positive() {
    let options = MirrorOptions {
        normal: DVec3::X,
        ..MirrorOptions::default()
    };
    let mirrored = mirror(&options, &unit_square()).unwrap();
    assert_abs_diff_eq!(mirrored.measure_area(), 1.0, epsilon = 1e-12);
    let [min, max] = mirrored.measure_bounding_box();
    assert_eq!(min.x, -1.0);
    assert_eq!(max.x, 0.0);
}

#[test]
fn test_mirror_about_offset_plane() {
    let options = MirrorOptions {
        origin: DVec3::new(2.0, 0.0, 0.0),
        normal: DVec3::new(3.0, 0.0, 0.0),
    };
    let path = Path2::from_points(&[DVec2::new(1.0, 0.0), DVec2::new(0.0, 0.0)], false);
    let mirrored = mirror(&options, &path).unwrap();
    assert_abs_diff_eq!(mirrored.points[0].x, 3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(mirrored.points[1].x, 4.0, epsilon = 1e-12);
}

#[test]
fn test_mirror_rejects_zero_normal() {
    let options = MirrorOptions {
        normal: DVec3::ZERO,
        ..MirrorOptions::default()
    };
    assert!(matches!(
        mirror(&options, &unit_square()),
        Err(ModelingError::InvalidOption { option: "normal", .. })
    ));
}

#[test]
fn test_center_selected_axes() {
    let moved = translate(DVec3::new(5.0, 5.0, 0.0), &unit_square());
    let centered = center(&CenterOptions::default(), &moved);
    assert_eq!(centered.measure_center(), DVec3::ZERO);

    let only_x = center(
        &CenterOptions {
            axes: [true, false, false],
            ..CenterOptions::default()
        },
        &moved,
    );
    assert_eq!(only_x.measure_center(), DVec3::new(0.0, 5.5, 0.0));
}

#[test]
fn test_align_default_modes() {
    let face = Geom3::from_polygons(vec![Poly3::new(vec![
        DVec3::new(1.0, 1.0, 4.0),
        DVec3::new(3.0, 1.0, 4.0),
        DVec3::new(3.0, 3.0, 6.0),
    ])]);
    let aligned = align(&AlignOptions::default(), &face);
    let [min, max] = aligned.measure_bounding_box();
    assert_eq!(min, DVec3::new(-1.0, -1.0, 0.0));
    assert_eq!(max, DVec3::new(1.0, 1.0, 2.0));
}

#[test]
fn test_align_max_and_none() {
    let options = AlignOptions {
        modes: [AlignMode::Max, AlignMode::None, AlignMode::None],
        relative_to: DVec3::new(10.0, 0.0, 0.0),
    };
    let aligned = align(&options, &unit_square());
    let [min, max] = aligned.measure_bounding_box();
    assert_eq!(max.x, 10.0);
    assert_eq!(min.y, 0.0);
}
