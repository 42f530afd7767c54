//! Display-only record of which poses last visited which cells.

use crate::core::GridCoord;

/// A dense per-cell record written by the continuous search.
///
/// Each cell holds the occupied-tile coordinate left by the last pose popped
/// at that cell, last-writer-wins. The record is purely observational: the
/// search never reads it, only external renderers do.
#[derive(Clone, Debug)]
pub struct VisitationRecord {
    width: usize,
    height: usize,
    cells: Vec<Option<GridCoord>>,
}

impl VisitationRecord {
    /// Create an empty record for a `width` x `height` grid
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    /// Record `tile` as the last occupant of `cell`. Out-of-bounds cells are
    /// ignored.
    pub(crate) fn record(&mut self, cell: GridCoord, tile: GridCoord) {
        if cell.x < 0
            || cell.y < 0
            || cell.x as usize >= self.width
            || cell.y as usize >= self.height
        {
            return;
        }
        self.cells[cell.y as usize * self.width + cell.x as usize] = Some(tile);
    }

    /// The occupied tile left by the last pose to visit `(x, y)`, or `None`
    /// if the cell was never visited or is out of bounds
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<GridCoord> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        self.cells[y as usize * self.width + x as usize]
    }

    /// Number of visited cells
    pub fn visited_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Iterate over `(cell, occupied tile)` pairs for visited cells
    pub fn iter_visited(&self) -> impl Iterator<Item = (GridCoord, GridCoord)> + '_ {
        self.cells.iter().enumerate().filter_map(move |(i, c)| {
            c.map(|tile| {
                (
                    GridCoord::new((i % self.width) as i32, (i / self.width) as i32),
                    tile,
                )
            })
        })
    }
}
