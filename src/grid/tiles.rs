//! Tile arena and adjacency construction.

use log::debug;
use thiserror::Error;

use super::obstacle::Obstacle;
use crate::core::GridCoord;

/// Index of a tile in the grid's arena.
pub type TileId = usize;

/// Grid construction error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Width or height is zero
    #[error("invalid grid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },

    /// An obstacle rectangle has non-positive extent
    #[error("invalid obstacle rectangle at index {index}: {width}x{height}")]
    InvalidObstacle {
        /// Position in the obstacle list.
        index: usize,
        /// Rectangle width.
        width: i32,
        /// Rectangle height.
        height: i32,
    },
}

/// One passable cell: its coordinate and its adjacency.
#[derive(Clone, Debug)]
pub struct Tile {
    /// Cell coordinate.
    pub coord: GridCoord,
    /// Arena indices of adjacent passable tiles. Populated at construction
    /// time only; always symmetric.
    pub neighbors: Vec<TileId>,
}

/// A tile grid over a rectangular area with rectangular obstacles.
///
/// Passable cells hold exactly one tile in a contiguous arena; blocked and
/// out-of-bounds cells have no tile. Adjacency is 8-connected and built
/// during the row-major construction scan: each new tile links
/// bidirectionally to its already-created top-left, top, top-right and left
/// neighbors, which makes symmetry structural rather than checked.
///
/// The grid is immutable after construction. Searches keep their scratch
/// state (costs, parents) in per-call arrays indexed by [`TileId`], so any
/// number of sequential searches can run against the same grid.
#[derive(Clone, Debug)]
pub struct TileGrid {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
    lookup: Vec<Option<TileId>>,
}

impl TileGrid {
    /// Build a grid from dimensions and an obstacle list.
    ///
    /// Cells are scanned in row-major order, top-to-bottom and
    /// left-to-right. A cell inside any obstacle rectangle is blocked.
    /// Construction is all-or-nothing: invalid dimensions or a malformed
    /// obstacle reject the whole build.
    pub fn build(width: usize, height: usize, obstacles: &[Obstacle]) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        for (index, obs) in obstacles.iter().enumerate() {
            if !obs.is_valid() {
                return Err(GridError::InvalidObstacle {
                    index,
                    width: obs.width,
                    height: obs.height,
                });
            }
        }

        let mut grid = Self {
            width,
            height,
            tiles: Vec::new(),
            lookup: vec![None; width * height],
        };

        for y in 0..height as i32 {
            for x in 0..width as i32 {
                if obstacles.iter().any(|obs| obs.contains(x, y)) {
                    continue;
                }
                let id = grid.tiles.len();
                grid.tiles.push(Tile {
                    coord: GridCoord::new(x, y),
                    neighbors: Vec::new(),
                });
                // Link to the neighbors the scan has already created:
                // top-left, top, top-right, left.
                for (nx, ny) in [(x - 1, y - 1), (x, y - 1), (x + 1, y - 1), (x - 1, y)] {
                    if let Some(nid) = grid.tile_at(nx, ny) {
                        grid.tiles[id].neighbors.push(nid);
                        grid.tiles[nid].neighbors.push(id);
                    }
                }
                grid.lookup[y as usize * width + x as usize] = Some(id);
            }
        }

        debug!(
            "[Grid] built {}x{}: {} tiles, {} blocked",
            width,
            height,
            grid.tile_count(),
            grid.blocked_count()
        );
        Ok(grid)
    }

    /// Grid width in cells
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether `(x, y)` lies within the grid bounds
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Look up the tile at `(x, y)`.
    ///
    /// Returns `None` when the cell is out of bounds or blocked; never
    /// panics. This is the only bounds-safety boundary the search engines
    /// rely on.
    #[inline]
    pub fn tile_at(&self, x: i32, y: i32) -> Option<TileId> {
        if !self.contains(x, y) {
            return None;
        }
        self.lookup[y as usize * self.width + x as usize]
    }

    /// Coordinate of a tile
    #[inline]
    pub fn coord(&self, id: TileId) -> GridCoord {
        self.tiles[id].coord
    }

    /// Adjacent tiles, in construction order.
    ///
    /// For a tile whose full neighborhood is passable the order is
    /// top-left, top, top-right, left (linked when the tile was created),
    /// then right, bottom-left, bottom, bottom-right (backlinked as those
    /// tiles were created). The order is fixed for a given grid, which
    /// makes search expansion deterministic.
    #[inline]
    pub fn neighbors(&self, id: TileId) -> &[TileId] {
        &self.tiles[id].neighbors
    }

    /// Number of passable tiles
    #[inline]
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Number of blocked cells
    #[inline]
    pub fn blocked_count(&self) -> usize {
        self.width * self.height - self.tiles.len()
    }
}
