use std::collections::{HashSet, VecDeque};

use log::trace;
use tilesearch_core::Point;

use crate::node::PathPoint;
use crate::traits::TileMap;

/// Flood-fill outwards from `source`, collecting every empty tile reachable
/// within a cumulative movement `budget`.
///
/// The result always contains `source`, whatever its occupancy. A neighbour
/// is added when it is empty, unvisited, and its entry cost plus the
/// distance of the tile it was reached from does not exceed `budget`.
///
/// Traversal is breadth-first and a tile keeps the first distance it was
/// reached with. With uniform entry costs this is exact; with mixed costs a
/// tile first reached by a longer but expensive route is not revisited, so
/// tiles near the edge of the budget can be missed compared to a full
/// Dijkstra radius.
pub fn build_radius<M: TileMap + ?Sized>(map: &M, source: Point, budget: i32) -> HashSet<Point> {
    let mut visited = HashSet::from([source]);
    let mut queue = VecDeque::from([PathPoint::source(source)]);
    let mut nbuf = Vec::with_capacity(4);

    while let Some(current) = queue.pop_front() {
        nbuf.clear();
        map.neighbors(current.point, &mut nbuf);

        for &np in nbuf.iter() {
            if visited.contains(&np) || !map.is_empty(np) {
                continue;
            }
            let next = current.step(np, map.movement_cost(np));
            if next.distance > budget {
                continue;
            }
            visited.insert(np);
            queue.push_back(next);
        }
    }

    trace!(
        "build_radius {} budget {}: {} tiles",
        source,
        budget,
        visited.len()
    );
    visited
}
