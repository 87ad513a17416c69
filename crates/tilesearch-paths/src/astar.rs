use std::collections::HashMap;

use log::{debug, trace};
use tilesearch_core::Point;

use crate::distance::manhattan;
use crate::node::{PathPoint, reconstruct};
use crate::queue::PriorityQueue;
use crate::traits::TileMap;

/// Compute a lowest-cost path from `source` to `dest` using A*.
///
/// Returns the full path (including both endpoints), or `None` when `dest` is
/// occupied or cannot be reached through empty tiles. The occupancy of
/// `source` itself is never checked. When `source == dest` and the tile is
/// empty the result is `Some(vec![source])`.
///
/// The frontier is a min-ordered [`PriorityQueue`] keyed by
/// `g + manhattan(node, dest)`. A coordinate is closed the first time it is
/// dequeued; later frontier records for it are discarded and closed
/// neighbours are never enqueued again (no decrease-key). With entry costs of
/// at least 1 the Manhattan estimate is consistent, so the first record
/// dequeued for a coordinate already carries its cheapest cost.
///
/// Out-of-bounds handling is left to `map`.
pub fn find_path<M: TileMap + ?Sized>(map: &M, source: Point, dest: Point) -> Option<Vec<Point>> {
    if !map.is_empty(dest) {
        debug!("find_path {} -> {}: destination occupied", source, dest);
        return None;
    }

    let mut open: PriorityQueue<PathPoint> = PriorityQueue::min_heap();
    open.add(PathPoint::source(source), manhattan(source, dest));

    // Closed set: a coordinate is closed once it has an entry, which also
    // records the coordinate it was reached from.
    let mut closed: HashMap<Point, Option<Point>> = HashMap::new();
    let mut nbuf = Vec::with_capacity(4);

    while let Ok((current, _)) = open.remove() {
        if closed.contains_key(&current.point) {
            // Stale record.
            continue;
        }
        closed.insert(current.point, current.previous);

        if current.point == dest {
            trace!(
                "find_path {} -> {}: cost {}, {} closed, {} still open",
                source,
                dest,
                current.distance,
                closed.len(),
                open.len()
            );
            return Some(reconstruct(&closed, dest));
        }

        nbuf.clear();
        map.neighbors(current.point, &mut nbuf);

        for &np in nbuf.iter() {
            if closed.contains_key(&np) || !map.is_empty(np) {
                continue;
            }
            let next = current.step(np, map.movement_cost(np));
            open.add(next, next.distance + manhattan(np, dest));
        }
    }

    debug!(
        "find_path {} -> {}: unreachable after closing {} tiles",
        source,
        dest,
        closed.len()
    );
    None
}

/// Total cost of walking `path`: the entry cost of every point after the
/// first. An empty or single-point path costs 0.
pub fn path_cost<M: TileMap + ?Sized>(map: &M, path: &[Point]) -> i32 {
    path.iter().skip(1).map(|&p| map.movement_cost(p)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testgrid::{assert_valid_path, dijkstra, parse, random_grid};
    use tilesearch_core::TileGrid;

    #[test]
    fn open_3x3_staircase() {
        let g = parse(&["...", "...", "..."]);
        let src = Point::new(0, 0);
        let dst = Point::new(2, 2);
        let path = find_path(&g, src, dst).expect("path");
        assert_eq!(path.len(), 5);
        assert_eq!(path_cost(&g, &path), 4);
        assert_valid_path(&g, &path, src, dst);
    }

    #[test]
    fn open_grid_cost_equals_manhattan() {
        let g: TileGrid<char> = TileGrid::new(12, 9);
        for (src, dst) in [
            (Point::new(0, 0), Point::new(11, 8)),
            (Point::new(11, 0), Point::new(0, 8)),
            (Point::new(3, 7), Point::new(3, 1)),
            (Point::new(9, 4), Point::new(2, 4)),
        ] {
            let path = find_path(&g, src, dst).unwrap();
            assert_eq!(path_cost(&g, &path), manhattan(src, dst));
            assert_valid_path(&g, &path, src, dst);
        }
    }

    #[test]
    fn occupied_destination_is_never_reached() {
        let mut g = parse(&["...", "...", "..."]);
        let dst = Point::new(1, 0);
        g.set_occupant(dst, Some('@')).unwrap();
        // Adjacent and otherwise trivially reachable.
        assert_eq!(find_path(&g, Point::new(0, 0), dst), None);
        // Even when standing on it.
        assert_eq!(find_path(&g, dst, dst), None);
    }

    #[test]
    fn walled_off_destination() {
        let g = parse(&["...", "###", "..."]);
        assert_eq!(find_path(&g, Point::new(0, 0), Point::new(2, 2)), None);
    }

    #[test]
    fn enclosed_destination() {
        let g = parse(&[".....", "..#..", ".#.#.", "..#..", "....."]);
        assert_eq!(find_path(&g, Point::new(0, 0), Point::new(2, 2)), None);
    }

    #[test]
    fn source_equals_destination() {
        let g = parse(&["..", ".."]);
        let p = Point::new(1, 1);
        assert_eq!(find_path(&g, p, p), Some(vec![p]));
        assert_eq!(path_cost(&g, &[p]), 0);
    }

    #[test]
    fn occupied_source_still_searches() {
        let mut g = parse(&["....", "....", "...."]);
        let src = Point::new(0, 1);
        let dst = Point::new(3, 1);
        g.set_occupant(src, Some('@')).unwrap();
        let path = find_path(&g, src, dst).unwrap();
        assert_valid_path(&g, &path, src, dst);
        assert_eq!(path_cost(&g, &path), 3);
    }

    #[test]
    fn detours_around_expensive_tiles() {
        let g = parse(&[".....", ".999.", "....."]);
        let src = Point::new(0, 1);
        let dst = Point::new(4, 1);
        let path = find_path(&g, src, dst).unwrap();
        assert_valid_path(&g, &path, src, dst);
        assert_eq!(path_cost(&g, &path), 6);
        assert_eq!(path.len(), 7);
        assert!(path.iter().all(|p| p.y != 1 || p.x == 0 || p.x == 4));
    }

    #[test]
    fn winds_through_maze() {
        let g = parse(&[
            ".#...#...",
            ".#.#.#.#.",
            ".#.#.#.#.",
            "...#...#.",
        ]);
        let src = Point::new(0, 0);
        let dst = Point::new(8, 0);
        let path = find_path(&g, src, dst).unwrap();
        assert_valid_path(&g, &path, src, dst);
        assert_eq!(path_cost(&g, &path), 20);
    }

    #[test]
    fn matches_reference_costs_on_random_grids() {
        let mut rng = rand::rng();
        for _ in 0..60 {
            let g = random_grid(&mut rng, 14, 10, 25, 5);
            let cells: Vec<Point> = g.bounds().iter().collect();
            let src = cells[(cells.len() * 3) / 7];
            let dist = dijkstra(&g, src);
            for &dst in cells.iter().step_by(5) {
                let got = find_path(&g, src, dst);
                if !g.is_empty(dst) {
                    assert_eq!(got, None);
                    continue;
                }
                match (got, dist.get(&dst)) {
                    (Some(path), Some(&best)) => {
                        assert_valid_path(&g, &path, src, dst);
                        assert_eq!(path_cost(&g, &path), best, "{} -> {}", src, dst);
                    }
                    (None, None) => {}
                    (got, best) => panic!("{} -> {}: got {:?}, reference {:?}", src, dst, got, best),
                }
            }
        }
    }

    #[test]
    fn concurrent_searches_share_grid() {
        let g = parse(&["......", ".####.", "......", ".####.", "......"]);
        let targets = [Point::new(5, 4), Point::new(0, 4), Point::new(5, 0), Point::new(3, 2)];
        std::thread::scope(|s| {
            let handles: Vec<_> = targets
                .iter()
                .map(|&dst| {
                    let g = &g;
                    s.spawn(move || find_path(g, Point::new(0, 0), dst))
                })
                .collect();
            for (h, &dst) in handles.into_iter().zip(targets.iter()) {
                let path = h.join().unwrap().unwrap();
                assert_valid_path(&g, &path, Point::new(0, 0), dst);
            }
        });
    }

    #[test]
    #[should_panic(expected = "outside grid bounds")]
    fn out_of_bounds_destination_propagates() {
        let g = parse(&["..", ".."]);
        find_path(&g, Point::new(0, 0), Point::new(5, 5));
    }
}
