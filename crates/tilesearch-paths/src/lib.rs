//! Search algorithms over occupancy/movement-cost tile grids.
//!
//! - **A\*** lowest-cost path search ([`find_path`])
//! - **Bounded flood fill** of the tiles reachable within a movement budget
//!   ([`build_radius`])
//! - A reusable max/min binary-heap [`PriorityQueue`]
//!
//! Searches read the grid through the [`TileMap`] trait, which
//! [`TileGrid`](tilesearch_core::TileGrid) implements. All search state lives
//! for a single call; nothing is cached between calls and the grid is never
//! mutated.

mod astar;
mod bfs;
mod distance;
mod node;
mod queue;
#[cfg(test)]
mod testgrid;
mod traits;

pub use astar::{find_path, path_cost};
pub use bfs::build_radius;
pub use distance::manhattan;
pub use queue::{EmptyQueueError, HeapOrder, PriorityQueue};
pub use traits::TileMap;
