use std::collections::HashMap;

use tilesearch_core::Point;

/// A search frontier record: where it is, what it cost to get there, and
/// the coordinate it was expanded from (`None` for the source).
///
/// Records are plain data; deduplication happens in a separate
/// coordinate-keyed visited set, never through this type's equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PathPoint {
    pub(crate) point: Point,
    pub(crate) distance: i32,
    pub(crate) previous: Option<Point>,
}

impl PathPoint {
    #[inline]
    pub(crate) fn source(point: Point) -> Self {
        Self {
            point,
            distance: 0,
            previous: None,
        }
    }

    /// Record for stepping from `self` onto `next`, which costs `cost`.
    #[inline]
    pub(crate) fn step(&self, next: Point, cost: i32) -> Self {
        Self {
            point: next,
            distance: self.distance + cost,
            previous: Some(self.point),
        }
    }
}

/// Walk the predecessor mapping from `dest` back to the source and return the
/// points in source-to-destination order.
///
/// Every coordinate on the chain must have an entry in `came_from`; the chain
/// ends at the entry whose parent is `None`.
pub(crate) fn reconstruct(came_from: &HashMap<Point, Option<Point>>, dest: Point) -> Vec<Point> {
    let mut path = Vec::new();
    let mut cur = Some(dest);
    while let Some(p) = cur {
        path.push(p);
        cur = came_from.get(&p).copied().flatten();
    }
    path.reverse();
    path
}
