//! Continuous pose type: position plus heading.

use serde::{Deserialize, Serialize};

use super::point::Vec2;

/// A continuous-space pose: a position in tile units and a unit heading.
///
/// Poses are not aligned to grid cells; the cell a pose occupies is derived
/// from its position with [`Vec2::cell`]. The heading is stored as a unit
/// direction vector rather than an angle because every consumer (turn-circle
/// placement, heading flips) needs the vector form.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Pose {
    /// Position in tile units.
    pub position: Vec2,
    /// Unit heading. A degenerate (near-zero) heading is kept as given and
    /// produces no motion candidates downstream.
    pub heading: Vec2,
}

impl Pose {
    /// Create a new pose. The heading is normalized; a near-zero heading is
    /// kept as-is.
    #[inline]
    pub fn new(position: Vec2, heading: Vec2) -> Self {
        Self {
            position,
            heading: heading.normalized(),
        }
    }

    /// The left-hand perpendicular of the heading (unit vector).
    #[inline]
    pub fn left(&self) -> Vec2 {
        self.heading.perpendicular()
    }

    /// The right-hand perpendicular of the heading (unit vector).
    #[inline]
    pub fn right(&self) -> Vec2 {
        -self.heading.perpendicular()
    }

    /// Centers of the two lateral turning circles at the given radius.
    #[inline]
    pub fn turn_centers(&self, radius: f32) -> [Vec2; 2] {
        let lateral = self.heading.perpendicular() * radius;
        [self.position + lateral, self.position - lateral]
    }
}
