//! Laws that hold for every wrapper kind.

use approx::assert_relative_eq;
use modeling_objects::prelude::*;

fn rectangle(center: DVec2) -> PlanarRegion {
    PlanarRegion::rectangle(&RectangleOptions {
        center,
        size: DVec2::splat(5.0),
    })
    .unwrap()
}

#[test]
fn operations_leave_receiver_and_operands_alone() {
    let a = rectangle(DVec2::ZERO);
    let b = rectangle(DVec2::splat(2.5));
    let (a_before, b_before) = (a.clone(), b.clone());

    let _ = a.union([&b]).unwrap();
    let _ = a.subtract([&b]).unwrap();
    let _ = a.hull([&b]).unwrap();
    let _ = a.translate([1.0, 2.0, 3.0]);
    let _ = a.colorize("red").unwrap();
    let _ = a.extrude_linear(&ExtrudeLinearOptions::default()).unwrap();

    assert_eq!(a, a_before);
    assert_eq!(b, b_before);
}

#[test]
fn identity_laws() {
    let a = rectangle(DVec2::ZERO);

    assert_relative_eq!(a.union([&a]).unwrap().measure_area(), 25.0, epsilon = 1e-9);
    assert_relative_eq!(a.intersect([&a]).unwrap().measure_area(), 25.0, epsilon = 1e-9);
    assert!(a.subtract([&a]).unwrap().to_sides().is_empty());
    let alone = a.union(Vec::<&PlanarRegion>::new()).unwrap();
    assert_relative_eq!(alone.measure_area(), 25.0, epsilon = 1e-9);
}

#[test]
fn nested_and_flat_operands_agree() {
    let a = rectangle(DVec2::ZERO);
    let b = rectangle(DVec2::new(2.5, 0.0));
    let c = rectangle(DVec2::new(0.0, 2.5));
    let d = rectangle(DVec2::splat(2.5));

    let flat = a.union([&b, &c, &d]).unwrap();

    let rest = vec![c.clone(), d.clone()];
    let first: Operand<PlanarRegion> = Operand::from(&b);
    let tail: Operand<PlanarRegion> = Operand::from(&rest);
    let nested = a
        .union(vec![first.clone(), Operand::from(vec![tail.clone()])])
        .unwrap();
    assert_eq!(nested, flat);

    let from_slice = a.union([first, tail]).unwrap();
    assert_eq!(from_slice, flat);
    assert_relative_eq!(flat.measure_area(), 56.25, epsilon = 1e-9);
}

#[test]
fn boolean_color_follows_first_geometry() {
    let red = rectangle(DVec2::ZERO).colorize("red").unwrap();
    let blue = rectangle(DVec2::splat(2.5)).colorize("blue").unwrap();

    let difference = red.subtract([&blue]).unwrap();
    assert_eq!(difference.geometry().color, Some([1.0, 0.0, 0.0, 1.0]));

    let union = red.union([&blue]).unwrap();
    assert_eq!(union.geometry().color, Some([0.0, 0.0, 1.0, 1.0]));
}

#[test]
fn transforms_keep_color() {
    let red = rectangle(DVec2::ZERO).colorize("red").unwrap();
    let moved = red.translate_x(3.0).rotate_z(0.5).scale_y(2.0).unwrap();
    assert_eq!(moved.geometry().color, red.geometry().color);

    let solid = red.extrude_linear(&ExtrudeLinearOptions::default()).unwrap();
    assert_eq!(solid.geometry().color, red.geometry().color);
}

#[test]
fn snap_rounds_to_epsilon() {
    let a = rectangle(DVec2::ZERO).translate_x(1e-9);
    let snapped = a.snap();
    assert_relative_eq!(snapped.measure_bounding_box()[0].x, -2.5, epsilon = 1e-12);
    assert!((a.measure_bounding_box()[0].x + 2.5).abs() > 1e-10);
}

#[test]
fn promotions_cover_every_kind() {
    let region = rectangle(DVec2::new(10.0, 0.0));
    let solid = region.extrude_linear(&ExtrudeLinearOptions::default()).unwrap();
    let back = solid.project(&ProjectOptions::default()).unwrap();
    assert_relative_eq!(back.measure_area(), region.measure_area(), epsilon = 1e-9);

    let path = Curve2D::line(&[DVec2::ZERO, DVec2::new(4.0, 0.0)]).unwrap();
    let band = path.expand(&ExpandOptions::default()).unwrap();
    assert_relative_eq!(band.measure_area(), 8.0, epsilon = 1e-9);
    let slab = band
        .extrude_linear(&ExtrudeLinearOptions {
            height: 2.0,
            ..Default::default()
        })
        .unwrap();
    assert_relative_eq!(slab.measure_volume(), 16.0, epsilon = 1e-9);
}
