//! Grid builders and a reference Dijkstra shared by the search tests.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use rand::{Rng, RngExt};
use tilesearch_core::{Point, TileGrid};

use crate::traits::TileMap;

/// Build a grid from text rows: `.` is an empty cost-1 tile, `#` is occupied,
/// and a digit `1`-`9` is an empty tile with that entry cost.
pub(crate) fn parse(rows: &[&str]) -> TileGrid<char> {
    let height = rows.len() as i32;
    let width = rows.first().map_or(0, |r| r.len()) as i32;
    let mut g = TileGrid::new(width, height);
    for (y, row) in rows.iter().enumerate() {
        assert_eq!(row.len() as i32, width, "ragged row {}", y);
        for (x, ch) in row.chars().enumerate() {
            let p = Point::new(x as i32, y as i32);
            match ch {
                '.' => {}
                '#' => {
                    g.set_occupant(p, Some('#')).unwrap();
                }
                '1'..='9' => {
                    let cost = ch.to_digit(10).unwrap() as i32;
                    g.set_movement_cost(p, cost).unwrap();
                }
                other => panic!("unexpected tile {:?}", other),
            }
        }
    }
    g
}

/// A grid where each tile is occupied with probability `wall_pct`% and has
/// an entry cost in `1..=max_cost`.
pub(crate) fn random_grid(
    rng: &mut impl Rng,
    width: i32,
    height: i32,
    wall_pct: u32,
    max_cost: i32,
) -> TileGrid<char> {
    let mut g = TileGrid::new(width, height);
    for p in g.bounds() {
        if rng.random_range(0..100) < wall_pct {
            g.set_occupant(p, Some('#')).unwrap();
        }
        g.set_movement_cost(p, rng.random_range(1..=max_cost)).unwrap();
    }
    g
}

/// Exact lowest entry-cost distances from `source` over empty tiles.
pub(crate) fn dijkstra<M: TileMap>(map: &M, source: Point) -> HashMap<Point, i32> {
    let mut dist = HashMap::from([(source, 0)]);
    let mut heap = BinaryHeap::from([Reverse((0, source.x, source.y))]);
    let mut nbuf = Vec::new();
    while let Some(Reverse((d, x, y))) = heap.pop() {
        let p = Point::new(x, y);
        if dist.get(&p).is_some_and(|&best| d > best) {
            continue;
        }
        nbuf.clear();
        map.neighbors(p, &mut nbuf);
        for &n in nbuf.iter() {
            if !map.is_empty(n) {
                continue;
            }
            let nd = d + map.movement_cost(n);
            if dist.get(&n).is_none_or(|&best| nd < best) {
                dist.insert(n, nd);
                heap.push(Reverse((nd, n.x, n.y)));
            }
        }
    }
    dist
}

/// Path starts at `src`, ends at `dst`, only steps between neighbours, only
/// enters empty tiles, and never repeats a point.
pub(crate) fn assert_valid_path<M: TileMap>(map: &M, path: &[Point], src: Point, dst: Point) {
    assert_eq!(path.first(), Some(&src), "path {:?}", path);
    assert_eq!(path.last(), Some(&dst), "path {:?}", path);
    let mut nbuf = Vec::new();
    for w in path.windows(2) {
        assert!(w[0].is_adjacent(w[1]), "{} -> {} is not a step", w[0], w[1]);
        nbuf.clear();
        map.neighbors(w[0], &mut nbuf);
        assert!(nbuf.contains(&w[1]), "{} is off the map", w[1]);
        assert!(map.is_empty(w[1]), "path enters occupied {}", w[1]);
    }
    let unique: HashSet<_> = path.iter().collect();
    assert_eq!(unique.len(), path.len(), "path repeats a point: {:?}", path);
}
