//! Tree facade over the root node.

use crate::geom::{Boundary, Point};
use crate::node::Node;

/// A point-region quadtree over a fixed world boundary.
///
/// Average-case O(log n) rectangular range queries over a population of
/// moving points. Insert and remove take per-node write locks, queries take
/// read locks, so a tree can be shared behind an `Arc` and hit from many
/// threads at once. Moves are modeled as remove-then-insert; stored points
/// never mutate in place.
pub struct QuadTree<D> {
    root: Node<D>,
}

impl<D> QuadTree<D> {
    /// Create an empty tree covering `world`, splitting any leaf that grows
    /// beyond `capacity` points. A capacity below 1 is clamped to 1.
    pub fn new(world: Boundary, capacity: usize) -> Self {
        Self {
            root: Node::new(world, capacity.max(1), 0),
        }
    }

    /// Store a point. Returns false if it lies outside the world boundary.
    pub fn insert(&self, point: Point<D>) -> bool {
        self.root.insert(point)
    }

    /// Number of points currently stored.
    pub fn len(&self) -> usize {
        self.root.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The world boundary the tree was created with.
    pub fn boundary(&self) -> &Boundary {
        self.root.boundary()
    }
}

impl<D: PartialEq> QuadTree<D> {
    /// Remove the stored point matching `point` on both coordinates and
    /// payload. Returns false if no such point exists.
    pub fn remove(&self, point: &Point<D>) -> bool {
        self.root.remove(point)
    }
}

impl<D: Clone> QuadTree<D> {
    /// Collect every stored point inside `region`, in no particular order.
    ///
    /// The result is a copy: later tree mutation does not affect it. Each
    /// node is read-locked independently during the descent, so a concurrent
    /// writer may be observed in one subtree and missed in another; callers
    /// get a consistent set of per-leaf snapshots, not a global snapshot.
    pub fn query(&self, region: &Boundary) -> Vec<Point<D>> {
        let mut found = Vec::new();
        self.root.query(region, &mut found);
        found
    }
}
