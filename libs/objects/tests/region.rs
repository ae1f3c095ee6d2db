use approx::assert_relative_eq;
use modeling_objects::prelude::*;
use std::f64::consts::FRAC_PI_2;

fn square(size: f64) -> PlanarRegion {
    PlanarRegion::square(&SquareOptions {
        size,
        ..Default::default()
    })
    .unwrap()
}

fn triangle() -> PlanarRegion {
    PlanarRegion::from_points(&[DVec2::ZERO, DVec2::new(5.0, 0.0), DVec2::new(5.0, 5.0)]).unwrap()
}

#[test]
fn square_measurements() {
    let region = square(5.0);
    assert_eq!(region.to_sides().len(), 4);
    assert_relative_eq!(region.measure_area(), 25.0);
    assert_eq!(
        region.measure_bounding_box(),
        [DVec3::new(-2.5, -2.5, 0.0), DVec3::new(2.5, 2.5, 0.0)]
    );
    assert_eq!(region.measure_volume(), 0.0);
}

#[test]
fn primitives_have_expected_sides() {
    assert_eq!(PlanarRegion::circle(&CircleOptions::default()).unwrap().to_sides().len(), 32);
    assert_eq!(PlanarRegion::ellipse(&EllipseOptions::default()).unwrap().to_sides().len(), 32);
    assert_eq!(
        PlanarRegion::rounded_rectangle(&RoundedRectangleOptions::default())
            .unwrap()
            .to_sides()
            .len(),
        36
    );
    assert_eq!(PlanarRegion::star(&StarOptions::default()).unwrap().to_sides().len(), 10);
    assert_eq!(PlanarRegion::rectangle(&RectangleOptions::default()).unwrap().to_sides().len(), 4);
}

#[test]
fn from_points_needs_three_points() {
    assert!(PlanarRegion::from_points(&[DVec2::ZERO, DVec2::X]).is_err());
    let closed = PlanarRegion::from_points(&[DVec2::ZERO, DVec2::X, DVec2::ONE, DVec2::ZERO]).unwrap();
    assert_eq!(closed.to_sides().len(), 3);
}

#[test]
fn colorize_clone_and_reverse() {
    let region = triangle();
    let red = region.colorize("red").unwrap();
    assert_eq!(red.geometry().color, Some([1.0, 0.0, 0.0, 1.0]));
    assert_eq!(region.geometry().color, None);
    assert!(region.colorize("not-a-color").is_err());

    let copy = region.clone();
    assert_eq!(copy, region);

    let reversed = region.reverse();
    assert_eq!(reversed.to_sides().len(), 3);
    assert_relative_eq!(reversed.measure_area(), -12.5);
}

#[test]
fn offset_squares_booleans() {
    let a = PlanarRegion::rectangle(&RectangleOptions {
        size: DVec2::splat(5.0),
        ..Default::default()
    })
    .unwrap();
    let b = a.translate([2.5, 2.5, 0.0]);

    assert_eq!(a.union([&b]).unwrap().to_sides().len(), 8);
    assert_eq!(a.intersect([&b]).unwrap().to_sides().len(), 4);
    assert_eq!(a.subtract([&b]).unwrap().to_sides().len(), 6);
}

#[test]
fn center_and_transforms() {
    let region = triangle();
    let centered = region.center(&CenterOptions::default());
    assert_eq!(centered.to_sides()[0], [DVec2::new(2.5, 2.5), DVec2::new(-2.5, -2.5)]);
    assert_eq!(centered.to_sides()[1], [DVec2::new(-2.5, -2.5), DVec2::new(2.5, -2.5)]);

    let mirrored = region.mirror(&MirrorOptions {
        normal: DVec3::Y,
        ..Default::default()
    });
    let mirrored = mirrored.unwrap();
    assert_relative_eq!(mirrored.measure_area(), 12.5);
    assert_relative_eq!(mirrored.measure_bounding_box()[0].y, -5.0);
    assert_eq!(region.mirror_y(), mirrored);

    let rotated = region.rotate_z(FRAC_PI_2);
    let [min, max] = rotated.measure_bounding_box();
    assert_relative_eq!(min.x, -5.0, epsilon = 1e-12);
    assert_relative_eq!(max.y, 5.0, epsilon = 1e-12);

    let scaled = region.scale([2.0, 0.5, 1.0]).unwrap();
    assert_eq!(scaled.to_sides()[0], [DVec2::new(10.0, 2.5), DVec2::ZERO]);
    assert!(region.scale_x(0.0).is_err());

    let moved = region.translate([-5.0, 5.0, 0.0]);
    assert_eq!(moved.to_sides()[0], [DVec2::new(0.0, 10.0), DVec2::new(-5.0, 5.0)]);
    assert_eq!(region.translate_x(1.0).measure_center().x, region.measure_center().x + 1.0);
}

#[test]
fn align_moves_bounds() {
    let region = square(2.0);
    let aligned = region.align(&AlignOptions {
        modes: [AlignMode::Min, AlignMode::Max, AlignMode::None],
        relative_to: DVec3::new(10.0, 10.0, 0.0),
    });
    let [min, max] = aligned.measure_bounding_box();
    assert_relative_eq!(min.x, 10.0);
    assert_relative_eq!(max.y, 10.0);
}

#[test]
fn offset_and_expand() {
    let region = square(5.0);
    let grown = region
        .offset(&OffsetOptions {
            delta: 2.0,
            ..Default::default()
        })
        .unwrap();
    assert_eq!(grown.to_sides().len(), 12);
    assert_relative_eq!(grown.measure_bounding_box()[1].x, 4.5);

    let shrunk = region
        .expand(&ExpandOptions {
            delta: -1.0,
            ..Default::default()
        })
        .unwrap();
    assert_eq!(shrunk.to_sides().len(), 4);
    assert_relative_eq!(shrunk.measure_area(), 9.0, epsilon = 1e-9);
}

#[test]
fn conversions() {
    let region = PlanarRegion::square(&SquareOptions {
        center: DVec2::new(10.0, 0.0),
        size: 5.0,
    })
    .unwrap();
    assert_eq!(region.to_outlines().len(), 1);

    let block = region.extrude_linear(&ExtrudeLinearOptions::default()).unwrap();
    assert_eq!(block.to_polygons().len(), 10);

    let ring = region.extrude_rotate(&ExtrudeRotateOptions::default()).unwrap();
    assert_eq!(ring.to_polygons().len(), 96);

    let helix = region
        .extrude_helical(&ExtrudeHelicalOptions::default())
        .unwrap();
    assert!(helix.measure_volume() > 0.0);

    let frame = region
        .extrude_rectangular(&ExtrudeRectangularOptions::default())
        .unwrap();
    assert_relative_eq!(frame.measure_volume(), 49.0 - 9.0, epsilon = 1e-9);
}

#[test]
fn hulls() {
    let a = square(2.0);
    let b = a.translate_x(4.0);
    let c = b.translate_y(4.0);

    let hull = a.hull([&b]).unwrap();
    assert_relative_eq!(hull.measure_area(), 12.0, epsilon = 1e-9);

    let chain = a.hull_chain([&b, &c]).unwrap();
    assert_relative_eq!(chain.measure_area(), 20.0, epsilon = 1e-9);
}

#[test]
fn display_is_prefixed() {
    assert!(square(1.0).to_string().starts_with("PlanarRegion: geom2"));
}
