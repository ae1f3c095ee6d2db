//! Offsetting of point sequences by a signed distance.
//!
//! Each segment moves along its right-hand normal by `delta`. Where
//! neighbouring moved segments overlap they are trimmed to their
//! intersection; where they open a gap the gap is filled according to the
//! corner style. Segments of a closed loop that end up reversed by the
//! trimming are removed until the loop is consistent again.

use super::Corners;
use crate::geometries::geom2::signed_area;
use config::constants::NUMERIC_EPSILON;
use glam::DVec2;
use std::f64::consts::TAU;

/// A segment of the input moved along its normal.
struct MovedEdge {
    /// Index of the source start point.
    start: usize,
    /// Index of the source end point.
    end: usize,
    direction: DVec2,
    segment: [DVec2; 2],
}

/// How two consecutive moved segments are joined.
enum Joint {
    /// Open end of a path; no neighbouring segment.
    End,
    /// Both moved segments meet at one point.
    Meet(DVec2),
    /// The moved segments keep their ends with these points between them.
    Fill(Vec<DVec2>),
    /// A gap between segments that were not neighbours in the input; the
    /// segment after it is collapsing as well.
    Open,
}

/// Parameters of one offset pass.
pub(crate) struct OffsetPass {
    pub delta: f64,
    pub corners: Corners,
    pub segments: usize,
    /// With [`Corners::Edge`], keep the ends of every moved segment and add
    /// the mitre point between them instead of replacing them by it.
    pub keep_side_ends: bool,
}

impl OffsetPass {
    /// Offsets `points`; the right-hand side of travel grows for positive
    /// deltas. A closed loop that collapses completely comes back empty.
    pub(crate) fn apply(&self, points: &[DVec2], closed: bool) -> Vec<DVec2> {
        let points = clean(points, closed);
        let n = points.len();
        let edge_count = if closed { n } else { n.saturating_sub(1) };
        if edge_count == 0 || (closed && n < 3) {
            return points;
        }

        let mut edges: Vec<MovedEdge> = (0..edge_count)
            .map(|i| {
                let (start, end) = (i, (i + 1) % n);
                let direction = (points[end] - points[start]).normalize_or_zero();
                let shift = DVec2::new(direction.y, -direction.x) * self.delta;
                MovedEdge {
                    start,
                    end,
                    direction,
                    segment: [points[start] + shift, points[end] + shift],
                }
            })
            .collect();

        loop {
            let joints = self.joints(&points, &edges, closed);
            if !closed {
                return clean(&assemble(&edges, &joints, closed), closed);
            }
            match collapsed_edge(&edges, &joints) {
                None => return clean(&assemble(&edges, &joints, closed), closed),
                Some(_) if edges.len() <= 3 => return Vec::new(),
                Some(index) => {
                    edges.remove(index);
                }
            }
        }
    }

    /// Joint in front of every edge; open paths get a trailing end joint.
    fn joints(&self, points: &[DVec2], edges: &[MovedEdge], closed: bool) -> Vec<Joint> {
        let m = edges.len();
        let mut joints: Vec<Joint> = (0..m)
            .map(|k| {
                if !closed && k == 0 {
                    return Joint::End;
                }
                let previous = &edges[(k + m - 1) % m];
                let corner = (previous.end == edges[k].start).then(|| points[edges[k].start]);
                self.joint(corner, previous, &edges[k])
            })
            .collect();
        if !closed {
            joints.push(Joint::End);
        }
        joints
    }

    fn joint(&self, corner: Option<DVec2>, incoming: &MovedEdge, outgoing: &MovedEdge) -> Joint {
        let turn = incoming.direction.perp_dot(outgoing.direction);
        let straight = incoming.direction.dot(outgoing.direction) > 0.0;
        if turn.abs() < NUMERIC_EPSILON && straight {
            return Joint::Meet(outgoing.segment[0]);
        }

        let opens_gap = turn.abs() < NUMERIC_EPSILON || turn * self.delta > 0.0;
        let mitre = line_intersection(&incoming.segment, &outgoing.segment);
        if !opens_gap {
            return Joint::Meet(mitre.unwrap_or(outgoing.segment[0]));
        }
        let Some(center) = corner else {
            return Joint::Open;
        };

        match self.corners {
            Corners::Edge => match mitre {
                Some(point) if self.keep_side_ends => Joint::Fill(vec![point]),
                Some(point) => Joint::Meet(point),
                None => Joint::Fill(Vec::new()),
            },
            Corners::Round => Joint::Fill(arc_between(
                center,
                incoming.segment[1] - center,
                outgoing.segment[0] - center,
                self.delta > 0.0,
                self.segments,
            )),
            Corners::Chamfer => Joint::Fill(Vec::new()),
        }
    }
}

fn assemble(edges: &[MovedEdge], joints: &[Joint], closed: bool) -> Vec<DVec2> {
    let m = edges.len();
    let mut result = Vec::with_capacity(m * 3);
    for (k, edge) in edges.iter().enumerate() {
        match &joints[k] {
            Joint::Meet(point) => result.push(*point),
            Joint::Fill(between) => {
                result.extend_from_slice(between);
                result.push(edge.segment[0]);
            }
            Joint::End | Joint::Open => result.push(edge.segment[0]),
        }
        let next = if closed { (k + 1) % m } else { k + 1 };
        if !matches!(joints[next], Joint::Meet(_)) {
            result.push(edge.segment[1]);
        }
    }
    result
}

/// First edge of a closed loop whose trimmed segment runs backwards.
fn collapsed_edge(edges: &[MovedEdge], joints: &[Joint]) -> Option<usize> {
    let m = edges.len();
    edges.iter().enumerate().position(|(k, edge)| {
        if matches!(joints[k], Joint::Open) {
            return true;
        }
        let start = match joints[k] {
            Joint::Meet(point) => point,
            _ => edge.segment[0],
        };
        let end = match joints[(k + 1) % m] {
            Joint::Meet(point) => point,
            _ => edge.segment[1],
        };
        (end - start).dot(edge.direction) < -NUMERIC_EPSILON
    })
}

/// Points strictly between `from` and `to` on a circle around `center`,
/// sweeping counter-clockwise when `counter_clockwise` is set.
pub(crate) fn arc_between(
    center: DVec2,
    from: DVec2,
    to: DVec2,
    counter_clockwise: bool,
    segments: usize,
) -> Vec<DVec2> {
    let mut sweep = from.angle_between(to);
    if counter_clockwise && sweep < 0.0 {
        sweep += TAU;
    } else if !counter_clockwise && sweep > 0.0 {
        sweep -= TAU;
    }
    let steps = ((sweep.abs() / TAU) * segments as f64).ceil().max(1.0) as usize;
    (1..steps)
        .map(|step| {
            let angle = sweep * step as f64 / steps as f64;
            center + DVec2::from_angle(angle).rotate(from)
        })
        .collect()
}

/// Intersection of the infinite lines through two segments.
fn line_intersection(a: &[DVec2; 2], b: &[DVec2; 2]) -> Option<DVec2> {
    let da = a[1] - a[0];
    let db = b[1] - b[0];
    let denominator = da.perp_dot(db);
    if denominator.abs() < NUMERIC_EPSILON {
        return None;
    }
    let t = (b[0] - a[0]).perp_dot(db) / denominator;
    Some(a[0] + da * t)
}

/// Drops repeated points, including a closing point equal to the first.
fn clean(points: &[DVec2], closed: bool) -> Vec<DVec2> {
    let mut cleaned: Vec<DVec2> = Vec::with_capacity(points.len());
    for &point in points {
        if cleaned
            .last()
            .map_or(true, |last| last.distance(point) > NUMERIC_EPSILON)
        {
            cleaned.push(point);
        }
    }
    if closed {
        while cleaned.len() > 1
            && cleaned
                .first()
                .zip(cleaned.last())
                .is_some_and(|(first, last)| first.distance(*last) <= NUMERIC_EPSILON)
        {
            cleaned.pop();
        }
    }
    cleaned
}

/// True when an offset loop kept the orientation of its source loop.
pub(crate) fn keeps_orientation(source: &[DVec2], offset: &[DVec2]) -> bool {
    let before = signed_area(source);
    let after = signed_area(offset);
    after.abs() > NUMERIC_EPSILON && before.signum() == after.signum()
}
