//! The [`TileGrid`] type, a 2D grid of tiles with an optional occupant and a
//! movement cost each.
//!
//! Read accessors taking a [`Point`] panic when the point lies outside the
//! grid, the same way slice indexing does. Setters return
//! [`GridError::OutOfBounds`] instead.

use std::fmt;

use crate::geom::{Point, Range};

/// Movement cost of a freshly created tile.
pub const DEFAULT_MOVEMENT_COST: i32 = 1;

// ---------------------------------------------------------------------------
// GridError
// ---------------------------------------------------------------------------

/// Errors returned by [`TileGrid`] mutators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// The point is outside the grid bounds.
    OutOfBounds {
        /// Requested point.
        point: Point,
        /// Grid bounds.
        bounds: Range,
    },
    /// Movement costs must be strictly positive.
    InvalidCost {
        /// Rejected cost.
        cost: i32,
    },
    /// Tile storage does not hold `width * height` tiles.
    SizeMismatch {
        width: i32,
        height: i32,
        tiles: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { point, bounds } => {
                write!(f, "point {} is outside grid bounds {}", point, bounds)
            }
            Self::InvalidCost { cost } => {
                write!(f, "movement cost must be positive, got {}", cost)
            }
            Self::SizeMismatch {
                width,
                height,
                tiles,
            } => write!(f, "a {}x{} grid cannot hold {} tiles", width, height, tiles),
        }
    }
}

impl std::error::Error for GridError {}

// ---------------------------------------------------------------------------
// Tile
// ---------------------------------------------------------------------------

/// A single grid tile.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile<O> {
    pub occupant: Option<O>,
    pub movement_cost: i32,
}

impl<O> Default for Tile<O> {
    fn default() -> Self {
        Self {
            occupant: None,
            movement_cost: DEFAULT_MOVEMENT_COST,
        }
    }
}

// ---------------------------------------------------------------------------
// TileGrid
// ---------------------------------------------------------------------------

/// A `width × height` grid of [`Tile`]s, stored row-major.
///
/// `O` is whatever the game places on a tile (a unit id, an entity handle…).
/// A tile without an occupant is *empty*.
///
/// Deserialized grids are checked like constructed ones: dimensions must be
/// non-negative, match the tile count, and every cost must be at least 1.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "RawTileGrid<O>",
        bound(deserialize = "O: serde::Deserialize<'de>")
    )
)]
pub struct TileGrid<O> {
    tiles: Vec<Tile<O>>,
    width: i32,
    height: i32,
}

/// Unchecked wire form of a [`TileGrid`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawTileGrid<O> {
    tiles: Vec<Tile<O>>,
    width: i32,
    height: i32,
}

#[cfg(feature = "serde")]
impl<O> TryFrom<RawTileGrid<O>> for TileGrid<O> {
    type Error = GridError;

    fn try_from(raw: RawTileGrid<O>) -> Result<Self, GridError> {
        let RawTileGrid {
            tiles,
            width,
            height,
        } = raw;
        let expected = (width as i64) * (height as i64);
        if width < 0 || height < 0 || tiles.len() as i64 != expected {
            return Err(GridError::SizeMismatch {
                width,
                height,
                tiles: tiles.len(),
            });
        }
        if let Some(t) = tiles.iter().find(|t| t.movement_cost < 1) {
            return Err(GridError::InvalidCost {
                cost: t.movement_cost,
            });
        }
        Ok(Self {
            tiles,
            width,
            height,
        })
    }
}

impl<O> TileGrid<O> {
    /// Create a grid of empty tiles with the default movement cost.
    /// Negative dimensions are treated as zero.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        let mut tiles = Vec::with_capacity((width as usize) * (height as usize));
        tiles.resize_with((width as usize) * (height as usize), Tile::default);
        Self {
            tiles,
            width,
            height,
        }
    }

    /// Width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The bounding range `[0, 0) - (width, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// The point of the grid with the greatest x and y value.
    #[inline]
    pub fn max_point(&self) -> Point {
        Point::new(self.width - 1, self.height - 1)
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    #[inline]
    fn index(&self, p: Point) -> Result<usize, GridError> {
        if !self.contains(p) {
            return Err(GridError::OutOfBounds {
                point: p,
                bounds: self.bounds(),
            });
        }
        Ok((p.y as usize) * (self.width as usize) + (p.x as usize))
    }

    /// Borrow the tile at `p`, or `None` when `p` is out of bounds.
    pub fn tile(&self, p: Point) -> Option<&Tile<O>> {
        self.index(p).ok().map(|i| &self.tiles[i])
    }

    fn tile_or_panic(&self, p: Point) -> &Tile<O> {
        match self.index(p) {
            Ok(i) => &self.tiles[i],
            Err(err) => panic!("{}", err),
        }
    }

    /// Cost to enter `p`.
    ///
    /// # Panics
    ///
    /// Panics if `p` is out of bounds.
    pub fn movement_cost(&self, p: Point) -> i32 {
        self.tile_or_panic(p).movement_cost
    }

    /// Set the cost to enter `p`. Costs below 1 are rejected.
    pub fn set_movement_cost(&mut self, p: Point, cost: i32) -> Result<(), GridError> {
        if cost < 1 {
            return Err(GridError::InvalidCost { cost });
        }
        let i = self.index(p)?;
        self.tiles[i].movement_cost = cost;
        Ok(())
    }

    /// Whether `p` has no occupant.
    ///
    /// # Panics
    ///
    /// Panics if `p` is out of bounds.
    pub fn is_empty(&self, p: Point) -> bool {
        self.tile_or_panic(p).occupant.is_none()
    }

    /// The occupant at `p`, if any.
    ///
    /// # Panics
    ///
    /// Panics if `p` is out of bounds.
    pub fn occupant(&self, p: Point) -> Option<&O> {
        self.tile_or_panic(p).occupant.as_ref()
    }

    /// Place (or clear, with `None`) the occupant at `p`, returning whatever
    /// was there before.
    pub fn set_occupant(&mut self, p: Point, occupant: Option<O>) -> Result<Option<O>, GridError> {
        let i = self.index(p)?;
        Ok(std::mem::replace(&mut self.tiles[i].occupant, occupant))
    }

    /// Move the occupant of `src` onto `dest`, leaving `src` empty.
    ///
    /// Returns `Ok(false)` and changes nothing when `src` has no occupant.
    /// An occupant already on `dest` is overwritten.
    pub fn move_occupant(&mut self, src: Point, dest: Point) -> Result<bool, GridError> {
        let si = self.index(src)?;
        let di = self.index(dest)?;
        if si == di {
            return Ok(self.tiles[si].occupant.is_some());
        }
        match self.tiles[si].occupant.take() {
            Some(o) => {
                self.tiles[di].occupant = Some(o);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// In-bounds cardinal neighbours of `p`, ordered left, right, up, down.
    pub fn neighbors(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        p.neighbors_4().into_iter().filter(move |&n| self.contains(n))
    }

    /// Row-major iterator over `(Point, &Tile)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &Tile<O>)> + '_ {
        self.bounds().iter().zip(self.tiles.iter())
    }
}
