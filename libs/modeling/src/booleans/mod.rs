//! # Boolean Operations (CSG)
//!
//! Union, intersection and subtraction of 2D regions and 3D solids using BSP
//! trees, plus [`scission`] of solids into connected pieces.
//!
//! ## Algorithm
//!
//! Based on the csg.js algorithm by Evan Wallace:
//! - Union: A.clipTo(B); B.clipTo(A); B.invert(); B.clipTo(A); B.invert(); combine
//! - Subtract: A.invert(); A.clipTo(B); B.clipTo(A); B.invert(); B.clipTo(A); B.invert(); combine; result.invert()
//! - Intersect: A.invert(); B.clipTo(A); B.invert(); A.clipTo(B); B.clipTo(A); combine; result.invert()
//!
//! Operands whose bounding boxes do not overlap skip the trees entirely.
//! Region results are cleaned into closed outlines after every step; solid
//! results have their coplanar fragments merged once at the end.
//!
//! ## Example
//!
//! ```rust,ignore
//! use modeling::booleans::{subtract, union};
//!
//! let plate = subtract(&[&square, &hole])?;
//! let both = union(&[&plate, &other])?;
//! ```

pub(crate) mod bsp;
pub(crate) mod region;
mod scission;
mod solid;
pub(crate) mod weld;

pub use scission::scission;

use crate::error::{ModelingError, Result};
use crate::geometries::{Geom2, Geom3};
use crate::measurements::Measure;
use crate::modifiers::retessellate;
use config::constants::EPS;
use tracing::debug;

/// The three boolean operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanOperation {
    Union,
    Intersect,
    Subtract,
}

/// Geometry values that support boolean operations.
pub trait Boolean: Measure + Clone {
    /// Combines two values. The result takes the color of `a`.
    fn combine(operation: BooleanOperation, a: &Self, b: &Self) -> Self;

    /// Cleanup applied once to the final result.
    fn finish(self) -> Self {
        self
    }
}

impl Boolean for Geom2 {
    fn combine(operation: BooleanOperation, a: &Self, b: &Self) -> Self {
        region::combine(operation, a, b)
    }
}

impl Boolean for Geom3 {
    fn combine(operation: BooleanOperation, a: &Self, b: &Self) -> Self {
        solid::combine(operation, a, b)
    }

    fn finish(self) -> Self {
        retessellate(&self)
    }
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Union of all `geometries`.
///
/// Operands are combined pairwise in a balanced tree. The result takes the
/// color of the first operand.
///
/// # Errors
///
/// Fails when `geometries` is empty.
pub fn union<G: Boolean>(geometries: &[&G]) -> Result<G> {
    if geometries.is_empty() {
        return Err(no_operands("union"));
    }
    debug!(operands = geometries.len(), "union");

    let mut layer: Vec<G> = geometries.iter().map(|&g| g.clone()).collect();
    while layer.len() > 1 {
        let mut next = Vec::with_capacity(layer.len().div_ceil(2));
        for pair in layer.chunks(2) {
            match pair {
                [a, b] => next.push(G::combine(BooleanOperation::Union, a, b)),
                [a] => next.push(a.clone()),
                _ => {}
            }
        }
        layer = next;
    }
    let result = layer.pop().ok_or_else(|| no_operands("union"))?;
    Ok(result.finish())
}

/// Intersection of all `geometries`, folded left to right.
///
/// # Errors
///
/// Fails when `geometries` is empty.
pub fn intersect<G: Boolean>(geometries: &[&G]) -> Result<G> {
    fold(BooleanOperation::Intersect, geometries, "intersect")
}

/// The first geometry minus every other one.
///
/// # Errors
///
/// Fails when `geometries` is empty.
pub fn subtract<G: Boolean>(geometries: &[&G]) -> Result<G> {
    fold(BooleanOperation::Subtract, geometries, "subtract")
}

fn fold<G: Boolean>(
    operation: BooleanOperation,
    geometries: &[&G],
    name: &'static str,
) -> Result<G> {
    let (first, rest) = geometries
        .split_first()
        .ok_or_else(|| no_operands(name))?;
    debug!(operands = geometries.len(), "{name}");
    let result = rest
        .iter()
        .fold((*first).clone(), |acc, &next| G::combine(operation, &acc, next));
    Ok(result.finish())
}

fn no_operands(operation: &str) -> ModelingError {
    ModelingError::invalid_option(
        "geometries",
        format!("{operation} needs one or more geometries"),
    )
}

// =============================================================================
// SHORTCUTS
// =============================================================================

/// Outcome of a boolean that needs no BSP work.
pub(crate) enum Shortcut {
    Empty,
    First,
    Second,
    /// Both operands side by side.
    Both,
}

/// Decides empty and disjoint operands without building trees.
pub(crate) fn shortcut<G: Measure>(
    operation: BooleanOperation,
    a: &G,
    a_empty: bool,
    b: &G,
    b_empty: bool,
) -> Option<Shortcut> {
    use BooleanOperation::*;

    match (operation, a_empty, b_empty) {
        (_, true, true) => return Some(Shortcut::Empty),
        (Union, true, false) => return Some(Shortcut::Second),
        (Union, false, true) => return Some(Shortcut::First),
        (Intersect, true, _) | (Intersect, _, true) => return Some(Shortcut::Empty),
        (Subtract, true, _) => return Some(Shortcut::Empty),
        (Subtract, false, true) => return Some(Shortcut::First),
        _ => {}
    }

    if !bounds_disjoint(a, b) {
        return None;
    }
    Some(match operation {
        Union => Shortcut::Both,
        Intersect => Shortcut::Empty,
        Subtract => Shortcut::First,
    })
}

fn bounds_disjoint<G: Measure>(a: &G, b: &G) -> bool {
    let [a_min, a_max] = a.measure_bounding_box();
    let [b_min, b_max] = b.measure_bounding_box();
    (0..3).any(|axis| a_max[axis] < b_min[axis] - EPS || b_max[axis] < a_min[axis] - EPS)
}
