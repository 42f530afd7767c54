//! Axis-aligned rectangular obstacles in tile coordinates.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle of blocked tiles.
///
/// Covers cells with `x ∈ [x, x+width)` and `y ∈ [y, y+height)`. Obstacles
/// are immutable once constructed and may overlap each other; a cell blocked
/// by any obstacle is blocked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge (tile coordinates).
    pub x: i32,
    /// Top edge (tile coordinates).
    pub y: i32,
    /// Width in tiles.
    pub width: i32,
    /// Height in tiles.
    pub height: i32,
}

impl Obstacle {
    /// Create a new obstacle rectangle
    #[inline]
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether the rectangle has positive extent on both axes
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Whether the cell `(x, y)` lies within this rectangle
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_half_open() {
        let obs = Obstacle::new(1, 2, 3, 2);
        assert!(obs.contains(1, 2));
        assert!(obs.contains(3, 3));
        // Right and bottom edges are exclusive
        assert!(!obs.contains(4, 2));
        assert!(!obs.contains(1, 4));
        assert!(!obs.contains(0, 2));
    }

    #[test]
    fn test_validity() {
        assert!(Obstacle::new(0, 0, 1, 1).is_valid());
        assert!(!Obstacle::new(0, 0, 0, 1).is_valid());
        assert!(!Obstacle::new(0, 0, 1, -1).is_valid());
    }
}
