//! # Geom2
//!
//! A 2D region described by directed sides. The region lies to the left of
//! every side, so outer outlines run counter-clockwise and holes clockwise.

use super::{fmt_vec2, point_key, PointKey, Rgba};
use crate::error::{ModelingError, Result};
use glam::{DMat4, DVec2, DVec3};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A directed side: start point, end point.
pub type Side = [DVec2; 2];

/// A 2D region bounded by directed sides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Geom2 {
    pub sides: Vec<Side>,
    pub color: Option<Rgba>,
}

/// A chain of connected sides recovered from a side soup.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Chain {
    pub points: Vec<DVec2>,
    pub closed: bool,
}

impl Geom2 {
    /// Creates an empty region.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a region from sides, dropping zero-length ones.
    pub fn from_sides(sides: Vec<Side>) -> Self {
        Self {
            sides: sides.into_iter().filter(|s| s[0] != s[1]).collect(),
            color: None,
        }
    }

    /// Creates a region from a single closed outline.
    ///
    /// A closing point equal to the first point is ignored. No check is made
    /// for self intersection.
    ///
    /// # Errors
    ///
    /// Fails when fewer than three points are given.
    pub fn from_points(points: &[DVec2]) -> Result<Self> {
        let mut length = points.len();
        if length < 3 {
            return Err(ModelingError::degenerate(
                "a closed outline needs three or more points",
            ));
        }
        if points[0] == points[length - 1] {
            length -= 1;
        }
        Ok(Self::from_sides(outline_sides(&points[..length])))
    }

    /// Creates a region from several closed outlines.
    ///
    /// Outlines with fewer than three points are skipped.
    pub fn from_outlines(outlines: &[Vec<DVec2>]) -> Self {
        let sides = outlines
            .iter()
            .filter(|outline| outline.len() >= 3)
            .flat_map(|outline| outline_sides(outline))
            .collect();
        Self::from_sides(sides)
    }

    /// The sides of the region.
    pub fn to_sides(&self) -> &[Side] {
        &self.sides
    }

    /// The start point of every side.
    pub fn to_points(&self) -> Vec<DVec2> {
        self.sides.iter().map(|side| side[0]).collect()
    }

    /// Groups the sides into outlines.
    ///
    /// Each outline lists every corner once; the closing side is implicit.
    pub fn to_outlines(&self) -> Vec<Vec<DVec2>> {
        self.chains().into_iter().map(|chain| chain.points).collect()
    }

    /// True when the region has no sides.
    pub fn is_empty(&self) -> bool {
        self.sides.is_empty()
    }

    /// Flips the direction of every side, swapping inside and outside.
    pub fn reverse(&self) -> Self {
        let sides = self.sides.iter().rev().map(|&[a, b]| [b, a]).collect();
        Self {
            sides,
            color: self.color,
        }
    }

    /// Applies `matrix` in the XY plane.
    ///
    /// Mirroring matrices reverse the sides so the region stays on the left.
    pub fn transform(&self, matrix: &DMat4) -> Self {
        let apply = |p: DVec2| matrix.transform_point3(DVec3::new(p.x, p.y, 0.0)).truncate();
        let sides: Vec<Side> = self
            .sides
            .iter()
            .map(|&[a, b]| [apply(a), apply(b)])
            .collect();
        let transformed = Self {
            sides,
            color: self.color,
        };
        if matrix.determinant() < 0.0 {
            transformed.reverse()
        } else {
            transformed
        }
    }

    /// Follows sides end to start, producing closed loops where possible.
    ///
    /// When several sides leave the same point, the one turning most to the
    /// left is taken, which keeps touching outlines apart.
    pub(crate) fn chains(&self) -> Vec<Chain> {
        let mut by_start: HashMap<PointKey, Vec<usize>> = HashMap::new();
        for (index, side) in self.sides.iter().enumerate() {
            by_start.entry(point_key(side[0])).or_default().push(index);
        }

        let mut used = vec![false; self.sides.len()];
        let mut chains = Vec::new();
        for first in 0..self.sides.len() {
            if used[first] {
                continue;
            }
            used[first] = true;
            let start = point_key(self.sides[first][0]);
            let mut points = vec![self.sides[first][0]];
            let mut current = first;
            let closed = loop {
                let [from, to] = self.sides[current];
                if point_key(to) == start {
                    break true;
                }
                points.push(to);
                let incoming = to - from;
                let next = by_start.get(&point_key(to)).and_then(|candidates| {
                    candidates
                        .iter()
                        .copied()
                        .filter(|&i| !used[i])
                        .max_by(|&a, &b| {
                            let turn_a = turn_angle(incoming, self.sides[a][1] - self.sides[a][0]);
                            let turn_b = turn_angle(incoming, self.sides[b][1] - self.sides[b][0]);
                            turn_a.total_cmp(&turn_b)
                        })
                });
                match next {
                    Some(index) => {
                        used[index] = true;
                        current = index;
                    }
                    None => break false,
                }
            };
            chains.push(Chain { points, closed });
        }
        chains
    }
}

/// Signed angle turning from `incoming` to `outgoing`, positive to the left.
fn turn_angle(incoming: DVec2, outgoing: DVec2) -> f64 {
    incoming.perp_dot(outgoing).atan2(incoming.dot(outgoing))
}

/// Sides of a closed loop, starting with the side that closes it.
pub(crate) fn outline_sides(points: &[DVec2]) -> Vec<Side> {
    let Some(&last) = points.last() else {
        return Vec::new();
    };
    let mut previous = last;
    points
        .iter()
        .map(|&point| {
            let side = [previous, point];
            previous = point;
            side
        })
        .collect()
}

/// Signed area of a closed loop; positive for counter-clockwise loops.
pub fn signed_area(points: &[DVec2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    (0..n)
        .map(|i| points[i].perp_dot(points[(i + 1) % n]))
        .sum::<f64>()
        * 0.5
}

impl fmt::Display for Geom2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "geom2 ({} sides):", self.sides.len())?;
        for &[a, b] in &self.sides {
            writeln!(f, "  {} -> {}", fmt_vec2(a), fmt_vec2(b))?;
        }
        Ok(())
    }
}
