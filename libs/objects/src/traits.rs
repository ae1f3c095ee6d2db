//! # Capability Traits
//!
//! Operations shared by every wrapper kind, written once as provided
//! methods. Each wrapper only says how to reach its geometry value; the
//! traits dispatch to the kernel and re-wrap what comes back.
//!
//! | Trait | Operations |
//! |---|---|
//! | [`GeometryWrapper`] | wrap, unwrap, `colorize`, `snap` |
//! | [`Transformable`] | `transform`, `translate`, `rotate`, `scale`, `mirror`, `center`, `align` and per-axis helpers |
//! | [`Measurable`] | area, volume, bounds, centers, epsilon |
//! | [`BooleanCombinable`] | `union`, `intersect`, `subtract` |
//! | [`HullCombinable`] | `hull`, `hull_chain` |
//!
//! Variadic operands are passed as anything iterable over [`Operand`]s and
//! flattened once, depth first, before the kernel sees them.

use glam::{DMat4, DVec3};
use modeling::booleans::{self, Boolean};
use modeling::colors::{self, ColorSpec, Colored};
use modeling::hulls::{self, ChainHull, Hull};
use modeling::measurements::{BoundingBox, BoundingSphere, Measure};
use modeling::modifiers::{self, Snap};
use modeling::transforms::{self, AlignOptions, CenterOptions, MirrorOptions, Transform};
use modeling::Result;
use std::fmt;

// =============================================================================
// WRAPPER
// =============================================================================

/// A value that owns exactly one kernel geometry value.
pub trait GeometryWrapper: Sized {
    type Geometry: Clone + fmt::Display + Colored + Snap;

    /// The wrapped geometry, borrowed.
    fn geometry(&self) -> &Self::Geometry;

    /// Unwraps the geometry.
    fn into_geometry(self) -> Self::Geometry;

    /// Wraps a geometry value.
    fn from_geometry(geometry: Self::Geometry) -> Self;

    /// A copy in the given color.
    ///
    /// # Errors
    ///
    /// Fails for unknown color names and channels outside `0.0..=1.0`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let red = square.colorize("red")?;
    /// let teal = square.colorize([0.0, 0.5, 0.5])?;
    /// ```
    fn colorize(&self, color: impl Into<ColorSpec>) -> Result<Self> {
        colors::colorize(color, self.geometry()).map(Self::from_geometry)
    }

    /// A copy with coordinates rounded to the geometry's epsilon grid.
    fn snap(&self) -> Self {
        Self::from_geometry(modifiers::snap(self.geometry()))
    }
}

// =============================================================================
// TRANSFORMS
// =============================================================================

/// Affine transforms. Only [`transform`](Transformable::transform) touches
/// the kernel directly; everything else builds on it or on the kernel's
/// transform helpers.
pub trait Transformable: GeometryWrapper
where
    Self::Geometry: Transform + Measure,
{
    fn transform(&self, matrix: &DMat4) -> Self {
        Self::from_geometry(transforms::transform(matrix, self.geometry()))
    }

    fn translate(&self, offset: impl Into<DVec3>) -> Self {
        Self::from_geometry(transforms::translate(offset.into(), self.geometry()))
    }

    fn translate_x(&self, offset: f64) -> Self {
        self.translate(DVec3::X * offset)
    }

    fn translate_y(&self, offset: f64) -> Self {
        self.translate(DVec3::Y * offset)
    }

    fn translate_z(&self, offset: f64) -> Self {
        self.translate(DVec3::Z * offset)
    }

    /// Rotates by angles in radians about X, then Y, then Z.
    fn rotate(&self, angles: impl Into<DVec3>) -> Self {
        Self::from_geometry(transforms::rotate(angles.into(), self.geometry()))
    }

    fn rotate_x(&self, angle: f64) -> Self {
        self.rotate(DVec3::X * angle)
    }

    fn rotate_y(&self, angle: f64) -> Self {
        self.rotate(DVec3::Y * angle)
    }

    fn rotate_z(&self, angle: f64) -> Self {
        self.rotate(DVec3::Z * angle)
    }

    /// Scales about the origin.
    ///
    /// # Errors
    ///
    /// Factors must be positive.
    fn scale(&self, factors: impl Into<DVec3>) -> Result<Self> {
        transforms::scale(factors.into(), self.geometry()).map(Self::from_geometry)
    }

    fn scale_x(&self, factor: f64) -> Result<Self> {
        self.scale(DVec3::new(factor, 1.0, 1.0))
    }

    fn scale_y(&self, factor: f64) -> Result<Self> {
        self.scale(DVec3::new(1.0, factor, 1.0))
    }

    fn scale_z(&self, factor: f64) -> Result<Self> {
        self.scale(DVec3::new(1.0, 1.0, factor))
    }

    /// Mirrors about a plane.
    ///
    /// # Errors
    ///
    /// Fails for a zero normal.
    fn mirror(&self, options: &MirrorOptions) -> Result<Self> {
        transforms::mirror(options, self.geometry()).map(Self::from_geometry)
    }

    /// Mirrors about the YZ plane through the origin.
    fn mirror_x(&self) -> Self {
        self.transform(&DMat4::from_scale(DVec3::new(-1.0, 1.0, 1.0)))
    }

    /// Mirrors about the XZ plane through the origin.
    fn mirror_y(&self) -> Self {
        self.transform(&DMat4::from_scale(DVec3::new(1.0, -1.0, 1.0)))
    }

    /// Mirrors about the XY plane through the origin.
    fn mirror_z(&self) -> Self {
        self.transform(&DMat4::from_scale(DVec3::new(1.0, 1.0, -1.0)))
    }

    fn center(&self, options: &CenterOptions) -> Self {
        Self::from_geometry(transforms::center(options, self.geometry()))
    }

    fn center_x(&self) -> Self {
        self.center(&CenterOptions {
            axes: [true, false, false],
            ..Default::default()
        })
    }

    fn center_y(&self) -> Self {
        self.center(&CenterOptions {
            axes: [false, true, false],
            ..Default::default()
        })
    }

    fn center_z(&self) -> Self {
        self.center(&CenterOptions {
            axes: [false, false, true],
            ..Default::default()
        })
    }

    fn align(&self, options: &AlignOptions) -> Self {
        Self::from_geometry(transforms::align(options, self.geometry()))
    }
}

// =============================================================================
// MEASUREMENTS
// =============================================================================

/// Measurements, answered by the kernel. Regions report no volume and paths
/// report neither area nor volume.
pub trait Measurable: GeometryWrapper
where
    Self::Geometry: Measure,
{
    fn measure_area(&self) -> f64 {
        self.geometry().measure_area()
    }

    fn measure_bounding_box(&self) -> BoundingBox {
        self.geometry().measure_bounding_box()
    }

    fn measure_bounding_sphere(&self) -> BoundingSphere {
        self.geometry().measure_bounding_sphere()
    }

    fn measure_center(&self) -> DVec3 {
        self.geometry().measure_center()
    }

    fn measure_center_of_mass(&self) -> DVec3 {
        self.geometry().measure_center_of_mass()
    }

    fn measure_dimensions(&self) -> DVec3 {
        self.geometry().measure_dimensions()
    }

    fn measure_epsilon(&self) -> f64 {
        self.geometry().measure_epsilon()
    }

    fn measure_volume(&self) -> f64 {
        self.geometry().measure_volume()
    }
}

// =============================================================================
// OPERANDS
// =============================================================================

/// One operand, or a nested list of them.
#[derive(Debug)]
pub enum Operand<'a, T> {
    Single(&'a T),
    Nested(Vec<Operand<'a, T>>),
}

impl<T> Clone for Operand<'_, T> {
    fn clone(&self) -> Self {
        match self {
            Self::Single(value) => Self::Single(*value),
            Self::Nested(operands) => Self::Nested(operands.clone()),
        }
    }
}

impl<'a, T> From<&'a T> for Operand<'a, T> {
    fn from(value: &'a T) -> Self {
        Self::Single(value)
    }
}

impl<'a, T> From<&'a [T]> for Operand<'a, T> {
    fn from(values: &'a [T]) -> Self {
        Self::Nested(values.iter().map(Self::Single).collect())
    }
}

impl<'a, T> From<&'a Vec<T>> for Operand<'a, T> {
    fn from(values: &'a Vec<T>) -> Self {
        Self::from(values.as_slice())
    }
}

impl<'a, T> From<Vec<Operand<'a, T>>> for Operand<'a, T> {
    fn from(operands: Vec<Operand<'a, T>>) -> Self {
        Self::Nested(operands)
    }
}

impl<'a, T> Operand<'a, T> {
    fn collect_into(self, out: &mut Vec<&'a T>) {
        match self {
            Self::Single(value) => out.push(value),
            Self::Nested(operands) => {
                for operand in operands {
                    operand.collect_into(out);
                }
            }
        }
    }
}

/// Flattens operands depth first, left to right.
///
/// # Example
///
/// ```rust,ignore
/// let nested = vec![Operand::from(&a), Operand::from(vec![Operand::from(&b), Operand::from(&c)])];
/// assert_eq!(flatten(nested).len(), 3);
/// ```
pub fn flatten<'a, T, I>(operands: I) -> Vec<&'a T>
where
    I: IntoIterator,
    I::Item: Into<Operand<'a, T>>,
{
    let mut out = Vec::new();
    for operand in operands {
        operand.into().collect_into(&mut out);
    }
    out
}

// =============================================================================
// BOOLEANS AND HULLS
// =============================================================================

/// Boolean operations against any number of operands.
///
/// The result takes the color of the first geometry handed to the kernel:
/// the first operand for `union`, the receiver otherwise.
pub trait BooleanCombinable: GeometryWrapper
where
    Self::Geometry: Boolean,
{
    /// Union of the operands and the receiver, which is passed last.
    ///
    /// # Errors
    ///
    /// Propagates kernel errors.
    fn union<'a, I>(&self, others: I) -> Result<Self>
    where
        Self: 'a,
        I: IntoIterator,
        I::Item: Into<Operand<'a, Self>>,
    {
        let others = flatten(others);
        let mut geometries: Vec<&Self::Geometry> =
            others.iter().map(|other| other.geometry()).collect();
        geometries.push(self.geometry());
        booleans::union(&geometries).map(Self::from_geometry)
    }

    /// Intersection of the receiver and the operands.
    ///
    /// # Errors
    ///
    /// Propagates kernel errors.
    fn intersect<'a, I>(&self, others: I) -> Result<Self>
    where
        Self: 'a,
        I: IntoIterator,
        I::Item: Into<Operand<'a, Self>>,
    {
        let geometries = receiver_first(self, others);
        booleans::intersect(&geometries).map(Self::from_geometry)
    }

    /// The receiver minus every operand.
    ///
    /// # Errors
    ///
    /// Propagates kernel errors.
    fn subtract<'a, I>(&self, others: I) -> Result<Self>
    where
        Self: 'a,
        I: IntoIterator,
        I::Item: Into<Operand<'a, Self>>,
    {
        let geometries = receiver_first(self, others);
        booleans::subtract(&geometries).map(Self::from_geometry)
    }
}

/// Convex hulls of the receiver together with any number of operands.
pub trait HullCombinable: GeometryWrapper
where
    Self::Geometry: Hull,
{
    /// Convex hull of the receiver and the operands.
    ///
    /// # Errors
    ///
    /// Propagates kernel errors.
    fn hull<'a, I>(&self, others: I) -> Result<Self>
    where
        Self: 'a,
        I: IntoIterator,
        I::Item: Into<Operand<'a, Self>>,
    {
        let geometries = receiver_first(self, others);
        hulls::hull(&geometries).map(Self::from_geometry)
    }

    /// Hulls of each consecutive pair, starting at the receiver, joined into
    /// one result. Regions and solids union the links; a path chain is the
    /// closed hull of the receiver and the first operand.
    ///
    /// # Errors
    ///
    /// Propagates kernel errors.
    fn hull_chain<'a, I>(&self, others: I) -> Result<Self>
    where
        Self: 'a,
        Self::Geometry: ChainHull,
        I: IntoIterator,
        I::Item: Into<Operand<'a, Self>>,
    {
        let geometries = receiver_first(self, others);
        hulls::hull_chain(&geometries).map(Self::from_geometry)
    }
}

fn receiver_first<'s, 'a: 's, W, I>(receiver: &'s W, others: I) -> Vec<&'s W::Geometry>
where
    W: GeometryWrapper + 'a,
    I: IntoIterator,
    I::Item: Into<Operand<'a, W>>,
{
    let others = flatten(others);
    std::iter::once(receiver.geometry())
        .chain(others.into_iter().map(GeometryWrapper::geometry))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_keeps_order() {
        let values = [1, 2, 3, 4];
        let nested = vec![
            Operand::from(&values[0]),
            Operand::from(vec![Operand::from(&values[1]), Operand::from(&values[1..3])]),
            Operand::from(&values[3]),
        ];
        let flat: Vec<i32> = flatten(nested).into_iter().copied().collect();
        assert_eq!(flat, vec![1, 2, 2, 3, 4]);
    }

    #[test]
    fn test_flatten_plain_references() {
        let values = vec![5, 6];
        assert_eq!(flatten(&values).len(), 2);
        let operand: Operand<i32> = Operand::from(&values);
        assert_eq!(flatten([operand]).len(), 2);
        assert!(flatten(Vec::<&i32>::new()).is_empty());
    }
}
