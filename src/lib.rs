//! # Marga-Nav: Tile-Grid Path Planning Library
//!
//! A single-threaded planning library for one mobile agent on a 2-D tile
//! grid with rectangular obstacles. Two engines share one grid model:
//!
//! - **Discrete A\***: best-first search over tile adjacency with a
//!   Euclidean heuristic; optional turn-penalty mode that discourages
//!   direction changes sharper than 90°.
//! - **Curvature-constrained search**: best-first search over continuous
//!   poses (position + heading) generated on demand by intersecting two
//!   lateral turning circles with the boundary of the occupied tile, so
//!   motion respects a minimum turning radius.
//!
//! ## Quick Start
//!
//! ```rust
//! use marga_nav::{AStarPlanner, GridCoord, Obstacle, SearchMode, TileGrid};
//!
//! let obstacles = [Obstacle::new(1, 0, 2, 2), Obstacle::new(3, 0, 3, 4)];
//! let grid = TileGrid::build(10, 10, &obstacles).unwrap();
//!
//! let planner = AStarPlanner::with_defaults();
//! let result = planner.find_path(
//!     &grid,
//!     GridCoord::new(0, 0),
//!     GridCoord::new(9, 9),
//!     SearchMode::Shortest,
//! );
//! assert!(result.success);
//! println!("{} tiles, cost {:.2}", result.length_cells(), result.cost);
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: fundamental types (`GridCoord`, `Vec2`, `Pose`, turn-circle
//!   geometry)
//! - [`grid`]: obstacle rectangles and the tile arena with
//!   construction-time adjacency
//! - [`pathfinding`]: both planners, result types, visitation record
//! - [`config`]: serde-backed settings with YAML load/save
//!
//! ## Data Flow
//!
//! ```text
//! Obstacle list ──► TileGrid ──┬──► AStarPlanner ──────┐
//!                              │                       ├──► tile path
//!                              └──► CurvaturePlanner ──┤
//!                                        │             └──► diagnostics
//!                                        ▼
//!                                 VisitationRecord ──► external renderer
//! ```
//!
//! ## Execution Model
//!
//! Every search is a single synchronous pass: no threads, no yielding, no
//! timeout or cancellation. An unreachable goal terminates when the
//! frontier is exhausted (bounded by grid size in both engines; the
//! continuous engine is bounded by its tile-keyed explored set). The grid
//! is immutable during search — scratch state lives in per-call arrays —
//! so sequential searches against one grid need no reset step.

pub mod config;
pub mod core;
pub mod grid;
pub mod pathfinding;

// Re-export main types at crate root
pub use config::{AStarSettings, ConfigError, CurvatureSettings, PlannerConfig};
pub use core::{GridCoord, Pose, Vec2};
pub use grid::{GridError, Obstacle, TileGrid, TileId};
pub use pathfinding::{
    AStarPlanner, CurvaturePlanner, PathFailure, PathResult, PoseSearchResult, SearchMode,
    VisitationRecord,
};
