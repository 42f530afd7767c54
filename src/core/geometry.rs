//! Segment and circle primitives for turn-circle expansion.

use super::point::{GridCoord, Vec2};

/// A 2-D line segment between two points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    /// Segment start point.
    pub start: Vec2,
    /// Segment end point.
    pub end: Vec2,
}

impl Segment {
    /// Create a new segment
    #[inline]
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// Direction vector (not normalized)
    #[inline]
    pub fn direction(&self) -> Vec2 {
        self.end - self.start
    }

    /// Point at parameter `t` along the segment (`t=0` start, `t=1` end)
    #[inline]
    pub fn point_at(&self, t: f32) -> Vec2 {
        self.start + self.direction() * t
    }
}

/// A circle defined by center and radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    /// Center point.
    pub center: Vec2,
    /// Radius in tile units.
    pub radius: f32,
}

impl Circle {
    /// Create a new circle
    #[inline]
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Intersect this circle with a line segment.
    ///
    /// Solves `|start + t·d - center|² = r²` for `t` and keeps roots with
    /// `t ∈ [0, 1]`. A vanishing discriminant yields the single tangent
    /// point. Degenerate inputs (zero-length segment, non-positive radius)
    /// yield no intersections rather than NaN.
    pub fn segment_intersections(&self, segment: &Segment) -> Vec<Vec2> {
        let mut points = Vec::new();
        if self.radius <= f32::EPSILON {
            return points;
        }

        let d = segment.direction();
        let f = segment.start - self.center;

        let a = d.dot(&d);
        if a <= f32::EPSILON {
            return points;
        }
        let b = 2.0 * f.dot(&d);
        let c = f.dot(&f) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < -f32::EPSILON {
            return points;
        }

        if discriminant.abs() <= f32::EPSILON {
            // Tangent: one root
            let t = -b / (2.0 * a);
            if (0.0..=1.0).contains(&t) {
                points.push(segment.point_at(t));
            }
            return points;
        }

        let sqrt_disc = discriminant.sqrt();
        for t in [(-b - sqrt_disc) / (2.0 * a), (-b + sqrt_disc) / (2.0 * a)] {
            if (0.0..=1.0).contains(&t) {
                points.push(segment.point_at(t));
            }
        }
        points
    }
}

/// The four boundary segments of the unit-square cell at `coord`.
///
/// Cell `(x, y)` spans `(x, y)` to `(x+1, y+1)`; edges are returned in the
/// order top, right, bottom, left (counter-clockwise corners).
pub fn cell_boundary(coord: GridCoord) -> [Segment; 4] {
    let x = coord.x as f32;
    let y = coord.y as f32;
    let nw = Vec2::new(x, y);
    let ne = Vec2::new(x + 1.0, y);
    let se = Vec2::new(x + 1.0, y + 1.0);
    let sw = Vec2::new(x, y + 1.0);
    [
        Segment::new(nw, ne),
        Segment::new(ne, se),
        Segment::new(se, sw),
        Segment::new(sw, nw),
    ]
}
