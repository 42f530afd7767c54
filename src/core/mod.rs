//! Core types for the marga-nav planning library.
//!
//! This module provides the fundamental types used throughout the library:
//! - [`GridCoord`] and [`Vec2`]: integer cell and continuous tile-unit coordinates
//! - [`Pose`]: continuous position + unit heading
//! - [`Segment`], [`Circle`] and [`cell_boundary`]: turn-circle geometry

mod geometry;
mod point;
mod pose;

pub use geometry::{cell_boundary, Circle, Segment};
pub use point::{GridCoord, Vec2};
pub use pose::Pose;
