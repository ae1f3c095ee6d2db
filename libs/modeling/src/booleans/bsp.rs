//! # BSP Tree
//!
//! Binary Space Partitioning tree for boolean operations.
//! Based on the csg.js algorithm by Evan Wallace.
//!
//! The tree is generic over its boundary elements: planar polygons for
//! solids and directed sides for regions. Each element knows its own
//! hyperplane (a plane in 3D, a line in 2D) and how to split itself by
//! another one; the tree only sorts elements into front and back.
//!
//! ## Algorithm
//!
//! Each BSP node contains:
//! - A dividing hyperplane
//! - Elements coplanar with the hyperplane
//! - Front subtree (elements in front of the hyperplane)
//! - Back subtree (elements behind the hyperplane)
//!
//! ## Operations
//!
//! - `build`: Insert elements, splitting them where they cross node planes
//! - `clip_to`: Remove elements from this tree that are inside another tree
//! - `invert`: Flip all elements and swap front/back subtrees
//! - `all_polygons`: Collect all elements from the tree
//!
//! ## Stack Safety
//!
//! `build` recurses and grows the stack on demand through `stacker`; the
//! traversals use explicit work stacks.

use config::constants::{STACK_GROW_BYTES, STACK_RED_ZONE_BYTES};
use stacker::maybe_grow;

/// Output buckets of a split.
pub(crate) struct Split<P> {
    /// Coplanar elements facing the same way as the splitting plane.
    pub coplanar_front: Vec<P>,
    /// Coplanar elements facing the opposite way.
    pub coplanar_back: Vec<P>,
    pub front: Vec<P>,
    pub back: Vec<P>,
}

impl<P> Default for Split<P> {
    fn default() -> Self {
        Self {
            coplanar_front: Vec::new(),
            coplanar_back: Vec::new(),
            front: Vec::new(),
            back: Vec::new(),
        }
    }
}

/// Boundary elements a BSP tree can hold.
pub(crate) trait BspPolygon: Clone {
    /// The hyperplane type: a plane for polygons, a line for sides.
    type Plane: Copy;

    /// Supporting hyperplane, facing outward.
    fn plane(&self) -> Self::Plane;

    /// Reverses the element so that it faces the other way.
    fn flip(&mut self);

    /// The same hyperplane facing the other way.
    fn flip_plane(plane: &Self::Plane) -> Self::Plane;

    /// Classifies the element against `plane`, splitting it when it spans.
    fn split(&self, plane: &Self::Plane, out: &mut Split<Self>);
}

/// A node in the BSP tree.
///
/// # Example
///
/// ```rust,ignore
/// let mut a = Node::new(sides_of(&first));
/// let b = Node::new(sides_of(&second));
/// a.clip_to(&b);
/// ```
pub(crate) struct Node<P: BspPolygon> {
    plane: Option<P::Plane>,
    front: Option<Box<Node<P>>>,
    back: Option<Box<Node<P>>>,
    polygons: Vec<P>,
}

impl<P: BspPolygon> Node<P> {
    fn empty() -> Self {
        Self {
            plane: None,
            front: None,
            back: None,
            polygons: Vec::new(),
        }
    }

    /// Creates a tree holding `polygons`.
    pub(crate) fn new(polygons: Vec<P>) -> Self {
        let mut node = Self::empty();
        node.build(polygons);
        node
    }

    /// Inserts polygons, splitting them by the planes already in the tree.
    ///
    /// A node without a plane takes the plane of the first polygon.
    pub(crate) fn build(&mut self, polygons: Vec<P>) {
        if polygons.is_empty() {
            return;
        }
        maybe_grow(STACK_RED_ZONE_BYTES, STACK_GROW_BYTES, || {
            let plane = match self.plane {
                Some(plane) => plane,
                None => {
                    let plane = polygons[0].plane();
                    self.plane = Some(plane);
                    plane
                }
            };

            let mut split = Split::default();
            for polygon in &polygons {
                polygon.split(&plane, &mut split);
            }
            self.polygons.append(&mut split.coplanar_front);
            self.polygons.append(&mut split.coplanar_back);

            if !split.front.is_empty() {
                self.front
                    .get_or_insert_with(|| Box::new(Node::empty()))
                    .build(split.front);
            }
            if !split.back.is_empty() {
                self.back
                    .get_or_insert_with(|| Box::new(Node::empty()))
                    .build(split.back);
            }
        });
    }

    /// Converts solid space to empty space and empty space to solid space.
    pub(crate) fn invert(&mut self) {
        let mut stack: Vec<&mut Node<P>> = vec![self];
        while let Some(node) = stack.pop() {
            for polygon in &mut node.polygons {
                polygon.flip();
            }
            node.plane = node.plane.as_ref().map(P::flip_plane);
            std::mem::swap(&mut node.front, &mut node.back);
            if let Some(front) = node.front.as_deref_mut() {
                stack.push(front);
            }
            if let Some(back) = node.back.as_deref_mut() {
                stack.push(back);
            }
        }
    }

    /// Removes the parts of `polygons` that are inside this tree.
    ///
    /// Coplanar polygons facing the node plane are sent to the front, the
    /// others to the back. Whatever reaches a missing back subtree is inside
    /// and discarded.
    pub(crate) fn clip_polygons(&self, polygons: Vec<P>) -> Vec<P> {
        let mut result = Vec::new();
        let mut stack: Vec<(&Node<P>, Vec<P>)> = vec![(self, polygons)];

        while let Some((node, polygons)) = stack.pop() {
            if polygons.is_empty() {
                continue;
            }
            let Some(plane) = node.plane else {
                result.extend(polygons);
                continue;
            };

            let mut split = Split::default();
            for polygon in &polygons {
                polygon.split(&plane, &mut split);
            }
            let mut front = split.front;
            front.append(&mut split.coplanar_front);
            let mut back = split.back;
            back.append(&mut split.coplanar_back);

            if let Some(back_node) = node.back.as_deref() {
                stack.push((back_node, back));
            }
            match node.front.as_deref() {
                Some(front_node) => stack.push((front_node, front)),
                None => result.extend(front),
            }
        }

        result
    }

    /// Removes every polygon of this tree that is inside `other`.
    pub(crate) fn clip_to(&mut self, other: &Node<P>) {
        let mut stack: Vec<&mut Node<P>> = vec![self];
        while let Some(node) = stack.pop() {
            let polygons = std::mem::take(&mut node.polygons);
            node.polygons = other.clip_polygons(polygons);
            if let Some(front) = node.front.as_deref_mut() {
                stack.push(front);
            }
            if let Some(back) = node.back.as_deref_mut() {
                stack.push(back);
            }
        }
    }

    /// Collects every polygon in the tree.
    pub(crate) fn all_polygons(&self) -> Vec<P> {
        let mut result = Vec::new();
        let mut stack: Vec<&Node<P>> = vec![self];
        while let Some(node) = stack.pop() {
            result.extend(node.polygons.iter().cloned());
            if let Some(back) = node.back.as_deref() {
                stack.push(back);
            }
            if let Some(front) = node.front.as_deref() {
                stack.push(front);
            }
        }
        result
    }
}

impl<P: BspPolygon> Drop for Node<P> {
    fn drop(&mut self) {
        // Deep trees would overflow the stack with the default recursive drop.
        let mut stack = Vec::new();
        if let Some(front) = self.front.take() {
            stack.push(front);
        }
        if let Some(back) = self.back.take() {
            stack.push(back);
        }
        while let Some(mut node) = stack.pop() {
            if let Some(front) = node.front.take() {
                stack.push(front);
            }
            if let Some(back) = node.back.take() {
                stack.push(back);
            }
        }
    }
}

// =============================================================================
// BOOLEAN SEQUENCES
// =============================================================================

/// Elements of `a ∪ b`.
pub(crate) fn union<P: BspPolygon>(a: Vec<P>, b: Vec<P>) -> Vec<P> {
    let mut a = Node::new(a);
    let mut b = Node::new(b);
    a.clip_to(&b);
    b.clip_to(&a);
    b.invert();
    b.clip_to(&a);
    b.invert();
    a.build(b.all_polygons());
    a.all_polygons()
}

/// Elements of `a − b`.
pub(crate) fn subtract<P: BspPolygon>(a: Vec<P>, b: Vec<P>) -> Vec<P> {
    let mut a = Node::new(a);
    let mut b = Node::new(b);
    a.invert();
    a.clip_to(&b);
    b.clip_to(&a);
    b.invert();
    b.clip_to(&a);
    b.invert();
    a.build(b.all_polygons());
    a.invert();
    a.all_polygons()
}

/// Elements of `a ∩ b`.
pub(crate) fn intersect<P: BspPolygon>(a: Vec<P>, b: Vec<P>) -> Vec<P> {
    let mut a = Node::new(a);
    let mut b = Node::new(b);
    a.invert();
    b.clip_to(&a);
    b.invert();
    a.clip_to(&b);
    b.clip_to(&a);
    a.build(b.all_polygons());
    a.invert();
    a.all_polygons()
}
