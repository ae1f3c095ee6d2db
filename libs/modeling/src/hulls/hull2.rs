//! Planar convex hull by Andrew's monotone chain.

use config::constants::NUMERIC_EPSILON;
use glam::DVec2;

/// Counter-clockwise hull of `points` without collinear corners.
///
/// Returns fewer than three points when the input has no area.
pub(crate) fn hull_points(points: &[DVec2]) -> Vec<DVec2> {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    sorted.dedup();
    if sorted.len() < 3 {
        return sorted;
    }

    let turns_left = |o: DVec2, a: DVec2, b: DVec2| (a - o).perp_dot(b - o) > NUMERIC_EPSILON;

    let mut lower: Vec<DVec2> = Vec::with_capacity(sorted.len());
    for &point in &sorted {
        while lower.len() >= 2 && !turns_left(lower[lower.len() - 2], lower[lower.len() - 1], point) {
            lower.pop();
        }
        lower.push(point);
    }

    let mut upper: Vec<DVec2> = Vec::with_capacity(sorted.len());
    for &point in sorted.iter().rev() {
        while upper.len() >= 2 && !turns_left(upper[upper.len() - 2], upper[upper.len() - 1], point) {
            upper.pop();
        }
        upper.push(point);
    }

    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_with_inner_and_edge_points() {
        let points = [
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(2.0, 0.0),
            DVec2::new(2.0, 2.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(0.0, 2.0),
        ];
        let hull = hull_points(&points);
        assert_eq!(
            hull,
            vec![
                DVec2::new(0.0, 0.0),
                DVec2::new(2.0, 0.0),
                DVec2::new(2.0, 2.0),
                DVec2::new(0.0, 2.0),
            ]
        );
    }

    #[test]
    fn test_collinear_points_have_no_hull() {
        let points = [DVec2::ZERO, DVec2::X, DVec2::X * 2.0];
        assert!(hull_points(&points).len() < 3);
    }
}
