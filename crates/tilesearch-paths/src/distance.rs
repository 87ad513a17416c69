use tilesearch_core::Point;

/// Manhattan (L1) distance between two points.
///
/// On a 4-connected grid whose entry costs are all at least 1 this never
/// overestimates the cost of reaching `b` from `a`.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
