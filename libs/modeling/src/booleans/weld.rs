//! # Vertex Welding
//!
//! Snaps nearly coincident points onto the first point seen within a
//! tolerance. Points are bucketed in a grid with cells one tolerance wide,
//! so a lookup only inspects the neighbouring cells.

use glam::{DVec2, DVec3};
use std::collections::HashMap;

/// Welds 2D points.
pub(crate) struct Welder2 {
    tolerance: f64,
    cells: HashMap<(i64, i64), Vec<DVec2>>,
}

impl Welder2 {
    pub(crate) fn new(tolerance: f64) -> Self {
        Self {
            tolerance,
            cells: HashMap::new(),
        }
    }

    fn cell(&self, point: DVec2) -> (i64, i64) {
        (
            (point.x / self.tolerance).floor() as i64,
            (point.y / self.tolerance).floor() as i64,
        )
    }

    /// Returns the representative of `point`, registering it when new.
    pub(crate) fn weld(&mut self, point: DVec2) -> DVec2 {
        let (cx, cy) = self.cell(point);
        for dx in -1..=1 {
            for dy in -1..=1 {
                if let Some(candidates) = self.cells.get(&(cx + dx, cy + dy)) {
                    if let Some(&found) = candidates
                        .iter()
                        .find(|c| c.distance(point) < self.tolerance)
                    {
                        return found;
                    }
                }
            }
        }
        self.cells.entry((cx, cy)).or_default().push(point);
        point
    }
}

/// Welds 3D points.
pub(crate) struct Welder3 {
    tolerance: f64,
    cells: HashMap<(i64, i64, i64), Vec<DVec3>>,
}

impl Welder3 {
    pub(crate) fn new(tolerance: f64) -> Self {
        Self {
            tolerance,
            cells: HashMap::new(),
        }
    }

    fn cell(&self, point: DVec3) -> (i64, i64, i64) {
        (
            (point.x / self.tolerance).floor() as i64,
            (point.y / self.tolerance).floor() as i64,
            (point.z / self.tolerance).floor() as i64,
        )
    }

    /// Returns the representative of `point`, registering it when new.
    pub(crate) fn weld(&mut self, point: DVec3) -> DVec3 {
        let (cx, cy, cz) = self.cell(point);
        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    let Some(candidates) = self.cells.get(&(cx + dx, cy + dy, cz + dz)) else {
                        continue;
                    };
                    if let Some(&found) = candidates
                        .iter()
                        .find(|c| c.distance(point) < self.tolerance)
                    {
                        return found;
                    }
                }
            }
        }
        self.cells.entry((cx, cy, cz)).or_default().push(point);
        point
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weld2_snaps_close_points() {
        let mut welder = Welder2::new(1e-5);
        let first = welder.weld(DVec2::new(1.0, 1.0));
        let second = welder.weld(DVec2::new(1.0 + 1e-7, 1.0 - 1e-7));
        assert_eq!(first, second);
        let far = welder.weld(DVec2::new(1.001, 1.0));
        assert_ne!(far, first);
    }

    #[test]
    fn test_weld3_across_cell_boundary() {
        let mut welder = Welder3::new(1e-5);
        let first = welder.weld(DVec3::new(0.0, 0.0, -1e-7));
        let second = welder.weld(DVec3::new(0.0, 0.0, 1e-7));
        assert_eq!(first, second);
    }
}
