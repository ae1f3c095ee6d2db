//! # Scission
//!
//! Splits a solid into its connected pieces. Two polygons belong to the same
//! piece when they share a vertex, directly or through other polygons.

use super::weld::Welder3;
use crate::geometries::{vertex_key, Geom3, VertexKey};
use config::constants::VERTEX_MERGE_EPSILON;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tracing::debug;

/// Splits `geometry` into one solid per connected group of polygons.
///
/// Pieces are ordered by their first polygon and keep the color of the
/// input.
///
/// # Example
///
/// ```rust,ignore
/// let pieces = scission(&union(&[&left_cube, &far_right_cube])?);
/// assert_eq!(pieces.len(), 2);
/// ```
pub fn scission(geometry: &Geom3) -> Vec<Geom3> {
    let count = geometry.polygons.len();
    let mut parents: Vec<usize> = (0..count).collect();
    let mut welder = Welder3::new(VERTEX_MERGE_EPSILON);
    let mut owners: HashMap<VertexKey, usize> = HashMap::new();

    for (index, polygon) in geometry.polygons.iter().enumerate() {
        for &vertex in &polygon.vertices {
            match owners.entry(vertex_key(welder.weld(vertex))) {
                Entry::Occupied(entry) => join(&mut parents, *entry.get(), index),
                Entry::Vacant(entry) => {
                    entry.insert(index);
                }
            }
        }
    }

    let mut piece_of_root: HashMap<usize, usize> = HashMap::new();
    let mut pieces: Vec<Geom3> = Vec::new();
    for (index, polygon) in geometry.polygons.iter().enumerate() {
        let root = find(&mut parents, index);
        let piece = *piece_of_root.entry(root).or_insert_with(|| {
            pieces.push(Geom3 {
                polygons: Vec::new(),
                color: geometry.color,
            });
            pieces.len() - 1
        });
        pieces[piece].polygons.push(polygon.clone());
    }

    debug!(polygons = count, pieces = pieces.len(), "scission");
    pieces
}

fn find(parents: &mut [usize], mut index: usize) -> usize {
    while parents[index] != index {
        parents[index] = parents[parents[index]];
        index = parents[index];
    }
    index
}

fn join(parents: &mut [usize], a: usize, b: usize) {
    let (root_a, root_b) = (find(parents, a), find(parents, b));
    if root_a != root_b {
        parents[root_b.max(root_a)] = root_a.min(root_b);
    }
}
