use tilesearch_core::{Point, TileGrid};

/// Read-only view of a tile grid, as consumed by [`find_path`](crate::find_path)
/// and [`build_radius`](crate::build_radius).
///
/// Implementations decide what happens for out-of-bounds points; searches
/// never validate coordinates themselves and let such failures propagate.
pub trait TileMap {
    /// Whether `p` has no occupant.
    fn is_empty(&self, p: Point) -> bool;

    /// Cost of entering `p`. Must be > 0.
    fn movement_cost(&self, p: Point) -> i32;

    /// Append the in-bounds 4-directional neighbours of `p` into `buf`.
    /// The caller clears `buf` before calling.
    ///
    /// Order only affects tie-breaking between equally good paths.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

impl<O> TileMap for TileGrid<O> {
    #[inline]
    fn is_empty(&self, p: Point) -> bool {
        TileGrid::is_empty(self, p)
    }

    #[inline]
    fn movement_cost(&self, p: Point) -> i32 {
        TileGrid::movement_cost(self, p)
    }

    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(TileGrid::neighbors(self, p));
    }
}

impl<M: TileMap + ?Sized> TileMap for &M {
    #[inline]
    fn is_empty(&self, p: Point) -> bool {
        (**self).is_empty(p)
    }

    #[inline]
    fn movement_cost(&self, p: Point) -> i32 {
        (**self).movement_cost(p)
    }

    #[inline]
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        (**self).neighbors(p, buf)
    }
}
