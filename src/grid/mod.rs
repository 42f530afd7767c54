//! Tile grid model.
//!
//! This module owns the grid the planners search over:
//!
//! - [`Obstacle`]: axis-aligned rectangles of blocked cells
//! - [`TileGrid`]: arena of passable tiles with construction-time adjacency
//! - [`GridError`]: all-or-nothing construction failures

mod obstacle;
mod tiles;

pub use obstacle::Obstacle;
pub use tiles::{GridError, Tile, TileGrid, TileId};
