//! Coordinate types for the tile grid.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// Grid coordinates (integer cell indices)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridCoord {
    /// X coordinate (column index)
    pub x: i32,
    /// Y coordinate (row index)
    pub y: i32,
}

impl GridCoord {
    /// Create a new grid coordinate
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another coordinate
    #[inline]
    pub fn distance(&self, other: &GridCoord) -> f32 {
        let dx = (self.x - other.x) as f32;
        let dy = (self.y - other.y) as f32;
        (dx * dx + dy * dy).sqrt()
    }

    /// Chebyshev distance (max of x and y distance) - used for 8-connected grids
    #[inline]
    pub fn chebyshev_distance(&self, other: &GridCoord) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }

    /// Difference to another coordinate as a float vector
    #[inline]
    pub fn step_to(&self, other: &GridCoord) -> Vec2 {
        Vec2::new((other.x - self.x) as f32, (other.y - self.y) as f32)
    }

    /// Center of this cell in continuous coordinates
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x as f32 + 0.5, self.y as f32 + 0.5)
    }
}

impl Add for GridCoord {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        GridCoord::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for GridCoord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        GridCoord::new(self.x - other.x, self.y - other.y)
    }
}

/// Continuous coordinates in tile units (f32)
///
/// One unit equals one tile edge. Cell `(x, y)` covers the area from
/// `(x, y)` inclusive to `(x+1, y+1)` exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    /// X coordinate in tile units
    pub x: f32,
    /// Y coordinate in tile units
    pub y: f32,
}

impl Vec2 {
    /// Create a new vector
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Zero vector (origin)
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(&self, other: &Vec2) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Squared distance (faster, avoids sqrt)
    #[inline]
    pub fn distance_squared(&self, other: &Vec2) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Length (magnitude) of this vector
    #[inline]
    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Squared length (faster, avoids sqrt)
    #[inline]
    pub fn length_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    /// Normalize to unit length.
    ///
    /// A vector shorter than `f32::EPSILON` is returned unchanged; callers
    /// that must not proceed with a degenerate direction check
    /// [`length_squared`](Self::length_squared) first.
    #[inline]
    pub fn normalized(&self) -> Vec2 {
        let len = self.length();
        if len > f32::EPSILON {
            Vec2::new(self.x / len, self.y / len)
        } else {
            *self
        }
    }

    /// Dot product with another vector
    #[inline]
    pub fn dot(&self, other: &Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Left perpendicular (counter-clockwise 90° rotation)
    #[inline]
    pub fn perpendicular(&self) -> Vec2 {
        Vec2::new(-self.y, self.x)
    }

    /// The grid cell containing this point (component-wise floor)
    #[inline]
    pub fn cell(&self) -> GridCoord {
        GridCoord::new(self.x.floor() as i32, self.y.floor() as i32)
    }

    /// Check approximate equality within an epsilon
    #[inline]
    pub fn approx_eq(&self, other: Vec2, epsilon: f32) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }
}

impl Add for Vec2 {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Vec2::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Vec2::new(self.x * scalar, self.y * scalar)
    }
}

impl Neg for Vec2 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Vec2::new(-self.x, -self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_grid_coord_distance() {
        let a = GridCoord::new(0, 0);
        let b = GridCoord::new(3, 4);
        assert_relative_eq!(a.distance(&b), 5.0, epsilon = 1e-6);
        assert_eq!(a.chebyshev_distance(&b), 4);
    }

    #[test]
    fn test_vec2_distance() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(3.0, 4.0);
        assert_relative_eq!(a.distance(&b), 5.0, epsilon = 1e-6);
        assert_relative_eq!(a.distance_squared(&b), 25.0, epsilon = 1e-6);
    }

    #[test]
    fn test_normalized() {
        let v = Vec2::new(3.0, 4.0).normalized();
        assert_relative_eq!(v.length(), 1.0, epsilon = 1e-6);

        // Degenerate vector is returned unchanged, never NaN
        let zero = Vec2::ZERO.normalized();
        assert_eq!(zero, Vec2::ZERO);
    }

    #[test]
    fn test_perpendicular() {
        let v = Vec2::new(1.0, 0.0);
        let p = v.perpendicular();
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(p.y, 1.0, epsilon = 1e-6);
        assert_relative_eq!(v.dot(&p), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_cell_floors_components() {
        assert_eq!(Vec2::new(2.7, 3.1).cell(), GridCoord::new(2, 3));
        assert_eq!(Vec2::new(0.0, 0.99).cell(), GridCoord::new(0, 0));
        assert_eq!(Vec2::new(-0.01, 1.0).cell(), GridCoord::new(-1, 1));
    }

    #[test]
    fn test_step_to() {
        let a = GridCoord::new(2, 2);
        let b = GridCoord::new(3, 1);
        let v = a.step_to(&b);
        assert_relative_eq!(v.x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(v.y, -1.0, epsilon = 1e-6);
    }
}
