//! **tilesearch-core**: core types for tile-grid searches.
//!
//! This crate provides the types shared across the *tilesearch* workspace:
//! geometry primitives, the occupancy/movement-cost tile grid, and the
//! colour palette used to draw it.

pub mod color;
pub mod geom;
pub mod grid;

pub use color::{Color, db32};
pub use geom::{Point, Range, RangeIter};
pub use grid::{DEFAULT_MOVEMENT_COST, GridError, Tile, TileGrid};
