//! Revolving regions about the Z axis.
//!
//! The region's X axis becomes the radius and its Y axis becomes the height,
//! so the region is stood up in the XZ plane before it is turned.

use super::slices::{sweep, SweepEnds};
use super::{ExtrudeHelicalOptions, ExtrudeRotateOptions};
use crate::error::{ModelingError, Result};
use crate::geometries::{Geom2, Geom3, Side};
use config::constants::{approx_equal, EPS, MIN_SEGMENTS};
use glam::{DMat4, DVec2, DVec3};
use std::f64::consts::{FRAC_PI_2, TAU};
use tracing::debug;

pub(super) fn extrude_rotate(options: &ExtrudeRotateOptions, base: &Geom2) -> Result<Geom3> {
    if options.segments < MIN_SEGMENTS {
        return Err(ModelingError::invalid_option(
            "segments",
            format!("must be {MIN_SEGMENTS} or more"),
        ));
    }
    if !options.angle.is_finite() || options.angle == 0.0 {
        return Err(ModelingError::invalid_option("angle", "must be a non-zero finite number"));
    }

    let angle = options.angle.clamp(-TAU, TAU);
    let full = approx_equal(angle.abs(), TAU);
    let steps = ((options.segments as f64) * angle.abs() / TAU).ceil().max(1.0) as usize;
    debug!(angle, steps, full, "extrude_rotate");

    let profile = one_sided(base);
    let stand_up = DMat4::from_rotation_x(FRAC_PI_2);
    let count = if full { steps } else { steps + 1 };
    let placements: Vec<DMat4> = (0..count)
        .map(|step| {
            let turn = options.start_angle + angle * step as f64 / steps as f64;
            DMat4::from_rotation_z(turn) * stand_up
        })
        .collect();
    let ends = if full { SweepEnds::Looped } else { SweepEnds::Capped };
    sweep(&profile, &placements, ends)
}

pub(super) fn extrude_helical(options: &ExtrudeHelicalOptions, base: &Geom2) -> Result<Geom3> {
    if options.segments_per_rotation < MIN_SEGMENTS {
        return Err(ModelingError::invalid_option(
            "segments_per_rotation",
            format!("must be {MIN_SEGMENTS} or more"),
        ));
    }
    if !options.angle.is_finite() || options.angle == 0.0 {
        return Err(ModelingError::invalid_option("angle", "must be a non-zero finite number"));
    }
    let [min, max] = bounds_x(base);
    if min < -EPS && max > EPS {
        return Err(ModelingError::unsupported(
            "helical extrusion needs the region on one side of the Y axis",
        ));
    }

    let rotations = options.angle.abs() / TAU;
    let steps = ((options.segments_per_rotation as f64) * rotations).round().max(2.0) as usize;
    debug!(angle = options.angle, pitch = options.pitch, steps, "extrude_helical");

    let stand_up = DMat4::from_rotation_x(FRAC_PI_2);
    let placements: Vec<DMat4> = (0..=steps)
        .map(|step| {
            let fraction = step as f64 / steps as f64;
            let turn = options.start_angle + options.angle * fraction;
            let rise = options.pitch * rotations * fraction;
            let drift = options.end_offset * fraction;
            DMat4::from_rotation_z(turn)
                * DMat4::from_translation(DVec3::new(drift, 0.0, rise))
                * stand_up
        })
        .collect();
    sweep(base, &placements, SweepEnds::Capped)
}

fn bounds_x(base: &Geom2) -> [f64; 2] {
    base.sides.iter().fold([0.0, 0.0], |[min, max], side| {
        [min.min(side[0].x), max.max(side[0].x)]
    })
}

/// Moves the region to the positive side of the Y axis.
///
/// A region mostly left of the axis is mirrored first; whatever still lies
/// left of the axis is flattened onto it.
fn one_sided(base: &Geom2) -> Geom2 {
    let (left, right) = base.sides.iter().fold((0usize, 0usize), |(left, right), side| {
        if side[0].x < 0.0 {
            (left + 1, right)
        } else {
            (left, right + 1)
        }
    });
    if left == 0 {
        return base.clone();
    }
    let mirror = left > right;
    let fix = |point: DVec2| {
        let x = if mirror { -point.x } else { point.x };
        DVec2::new(x.max(0.0), point.y)
    };
    let sides: Vec<Side> = base
        .sides
        .iter()
        .map(|&[a, b]| {
            if mirror {
                // mirroring reverses the winding
                [fix(b), fix(a)]
            } else {
                [fix(a), fix(b)]
            }
        })
        .collect();
    Geom2 {
        color: base.color,
        ..Geom2::from_sides(sides)
    }
}
