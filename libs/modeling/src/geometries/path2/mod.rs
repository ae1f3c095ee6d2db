//! # Path2
//!
//! An ordered sequence of 2D points with an explicit closed flag.
//!
//! When closed, the final segment joins the last point back to the first and
//! the last point never repeats the first.

mod arc;
mod bezier;

pub use arc::AppendArcOptions;
pub use bezier::AppendBezierOptions;

use super::{fmt_vec2, Rgba};
use crate::error::{ModelingError, Result};
use config::constants::EPS;
use glam::{DMat4, DVec2, DVec3};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ends closer than this are the same point for closing purposes.
const CLOSE_DISTANCE: f64 = EPS * EPS;

fn ends_meet(points: &[DVec2]) -> bool {
    match (points.first(), points.last()) {
        (Some(&first), Some(&last)) if points.len() > 1 => first.distance(last) < CLOSE_DISTANCE,
        _ => false,
    }
}

/// A 2D path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Path2 {
    pub points: Vec<DVec2>,
    pub is_closed: bool,
    pub color: Option<Rgba>,
    /// Last control point of the most recently appended bezier curve.
    pub last_bezier_control: Option<DVec2>,
}

impl Path2 {
    /// Creates an empty open path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a path from points, closed only when `closed` is set.
    ///
    /// An open path keeps every point, including a last point that lands on
    /// the first.
    pub fn from_points(points: &[DVec2], closed: bool) -> Self {
        let path = Self {
            points: points.to_vec(),
            ..Self::default()
        };
        if closed {
            path.close()
        } else {
            path
        }
    }

    /// The points of the path.
    pub fn to_points(&self) -> &[DVec2] {
        &self.points
    }

    /// True when the path is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// True when the last point lands on the first, whatever the closed flag.
    pub fn ends_meet(&self) -> bool {
        ends_meet(&self.points)
    }

    /// Marks the path closed, removing trailing points that repeat the first.
    pub fn close(&self) -> Self {
        let mut closed = self.clone();
        if closed.is_closed {
            return closed;
        }
        closed.is_closed = true;
        if let Some(&first) = closed.points.first() {
            while closed.points.len() > 1 {
                match closed.points.last() {
                    Some(&last) if first.distance(last) < CLOSE_DISTANCE => {
                        closed.points.pop();
                    }
                    _ => break,
                }
            }
        }
        closed
    }

    /// Joins paths end to start.
    ///
    /// A junction point shared by consecutive paths is kept once. The result
    /// takes the closed flag of the last path, and is closed when its ends
    /// meet.
    ///
    /// # Errors
    ///
    /// Fails when a closed path is followed by a path with more points.
    pub fn concat(paths: &[&Path2]) -> Result<Self> {
        let mut closed = false;
        let mut points: Vec<DVec2> = Vec::new();
        for path in paths {
            let mut incoming: &[DVec2] = &path.points;
            if let (Some(last), Some(first)) = (points.last(), incoming.first()) {
                if last == first {
                    incoming = &incoming[1..];
                }
            }
            if closed && !incoming.is_empty() {
                return Err(ModelingError::ClosedPath {
                    operation: "concatenate to",
                });
            }
            closed = path.is_closed;
            points.extend_from_slice(incoming);
        }
        Ok(Self::from_points(&points, closed || ends_meet(&points)))
    }

    /// Appends one point. The result is open.
    pub fn append_point(&self, point: DVec2) -> Self {
        self.append_points(&[point])
    }

    /// Appends points, skipping a first point equal to the current end.
    ///
    /// The result is always open; close it again with [`Path2::close`].
    pub fn append_points(&self, points: &[DVec2]) -> Self {
        let mut incoming = points;
        if let (Some(last), Some(first)) = (self.points.last(), incoming.first()) {
            if last == first {
                incoming = &incoming[1..];
            }
        }
        let mut joined = self.points.clone();
        joined.extend_from_slice(incoming);
        Self {
            points: joined,
            is_closed: false,
            color: self.color,
            last_bezier_control: None,
        }
    }

    /// Reverses the order of the points.
    pub fn reverse(&self) -> Self {
        let mut reversed = self.clone();
        reversed.points.reverse();
        reversed.last_bezier_control = None;
        reversed
    }

    /// Applies `matrix` in the XY plane.
    pub fn transform(&self, matrix: &DMat4) -> Self {
        let points = self
            .points
            .iter()
            .map(|p| matrix.transform_point3(DVec3::new(p.x, p.y, 0.0)).truncate())
            .collect();
        Self {
            points,
            is_closed: self.is_closed,
            color: self.color,
            last_bezier_control: None,
        }
    }

    pub(crate) fn last_point(&self, operation: &'static str) -> Result<DVec2> {
        if self.is_closed {
            return Err(ModelingError::ClosedPath { operation });
        }
        self.points
            .last()
            .copied()
            .ok_or_else(|| ModelingError::degenerate(format!("cannot {operation} an empty path")))
    }
}

impl fmt::Display for Path2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.is_closed { "closed" } else { "open" };
        writeln!(f, "path2 ({} points, {state}):", self.points.len())?;
        let points: Vec<String> = self.points.iter().map(|&p| fmt_vec2(p)).collect();
        writeln!(f, "  [{}]", points.join(", "))
    }
}
