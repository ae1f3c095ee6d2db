//! Straight extrusions, with optional twist, and rectangular extrusions
//! along paths.

use super::slices::{sweep, SweepEnds};
use super::{ExtrudeLinearOptions, ExtrudeRectangularOptions, ExtrusionSource};
use crate::booleans::union;
use crate::error::{ModelingError, Result};
use crate::expansions::{expand, ExpandOptions};
use crate::geometries::{Geom2, Geom3};
use glam::{DMat4, DVec3};
use tracing::debug;

pub(super) fn extrude_linear(options: &ExtrudeLinearOptions, base: &Geom2) -> Result<Geom3> {
    if !options.height.is_finite() || options.height == 0.0 {
        return Err(ModelingError::invalid_option(
            "height",
            "must be a non-zero finite number",
        ));
    }
    if options.twist_steps == 0 {
        return Err(ModelingError::invalid_option("twist_steps", "must be 1 or more"));
    }

    let steps = if options.twist_angle == 0.0 {
        1
    } else {
        options.twist_steps
    };
    debug!(height = options.height, steps, "extrude_linear");

    let placements: Vec<DMat4> = (0..=steps)
        .map(|step| {
            let fraction = step as f64 / steps as f64;
            DMat4::from_translation(DVec3::Z * options.height * fraction)
                * DMat4::from_rotation_z(options.twist_angle * fraction)
        })
        .collect();
    sweep(base, &placements, SweepEnds::Capped)
}

pub(super) fn extrude_rectangular<G: ExtrusionSource>(
    options: &ExtrudeRectangularOptions,
    source: &G,
) -> Result<Geom3> {
    if options.size.is_nan() || options.size <= 0.0 {
        return Err(ModelingError::invalid_option("size", "must be greater than 0"));
    }

    let paths = source.extrusion_paths();
    if paths.is_empty() {
        return Err(ModelingError::degenerate(
            "rectangular extrusion needs a non-empty path",
        ));
    }
    let stroke = ExpandOptions {
        delta: options.size,
        ..Default::default()
    };
    let strokes = paths
        .iter()
        .map(|path| expand(&stroke, path))
        .collect::<Result<Vec<Geom2>>>()?;
    let references: Vec<&Geom2> = strokes.iter().collect();
    let mut outline = union(&references)?;
    outline.color = source.source_color();

    let linear = ExtrudeLinearOptions {
        height: options.height,
        ..Default::default()
    };
    extrude_linear(&linear, &outline)
}
