//! Geometry primitives for the spatial index.

/// A point in 2D space with an attached payload.
///
/// The payload is opaque to the index: it is compared by equality during
/// removal and cloned into query results, nothing else.
#[derive(Debug, Clone, PartialEq)]
pub struct Point<D> {
    /// Planar X coordinate (longitude).
    pub x: f64,
    /// Planar Y coordinate (latitude).
    pub y: f64,
    /// Caller-supplied payload.
    pub data: D,
}

impl<D> Point<D> {
    #[inline]
    pub fn new(x: f64, y: f64, data: D) -> Self {
        Self { x, y, data }
    }
}

/// Axis-aligned rectangle expressed as a center plus half-extents.
///
/// The covered region is the half-open box `[x-half_w, x+half_w) x
/// [y-half_h, y+half_h)`: west and south edges inclusive, east and north
/// edges exclusive, so sibling rectangles tile a parent without overlap.
#[derive(Debug, Clone, Copy)]
pub struct Boundary {
    /// Center X.
    pub x: f64,
    /// Center Y.
    pub y: f64,
    /// Half the width, from the center to the east edge.
    pub half_w: f64,
    /// Half the height, from the center to the north edge.
    pub half_h: f64,
}

impl Boundary {
    pub fn new(x: f64, y: f64, half_w: f64, half_h: f64) -> Self {
        debug_assert!(half_w > 0.0 && half_h > 0.0, "half-extents must be positive");
        Self { x, y, half_w, half_h }
    }

    /// West edge.
    #[inline]
    pub fn min_x(&self) -> f64 {
        self.x - self.half_w
    }

    /// East edge (exclusive).
    #[inline]
    pub fn max_x(&self) -> f64 {
        self.x + self.half_w
    }

    /// South edge.
    #[inline]
    pub fn min_y(&self) -> f64 {
        self.y - self.half_h
    }

    /// North edge (exclusive).
    #[inline]
    pub fn max_y(&self) -> f64 {
        self.y + self.half_h
    }

    /// Check if a coordinate lies inside the boundary.
    #[inline]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.min_x() && x < self.max_x() && y >= self.min_y() && y < self.max_y()
    }

    /// Check if two boundaries overlap.
    ///
    /// The `<=` on the separated side is the half-open dual of the strict
    /// `<` in `contains`: edge-adjacent rectangles do not intersect.
    #[inline]
    pub fn intersects(&self, other: &Boundary) -> bool {
        !(self.min_x() >= other.max_x()
            || self.max_x() <= other.min_x()
            || self.min_y() >= other.max_y()
            || self.max_y() <= other.min_y())
    }
}
