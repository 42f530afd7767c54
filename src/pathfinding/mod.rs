//! Path planning engines.
//!
//! This module provides both search engines and their shared result types:
//!
//! - **Discrete A\***: [`AStarPlanner`] searches the tile adjacency graph,
//!   optionally penalizing sharp direction changes
//!   ([`SearchMode::TurnAware`]).
//! - **Curvature-constrained search**: [`CurvaturePlanner`] searches
//!   continuous poses generated by turn-circle/boundary intersection.
//!
//! ## Discrete search
//!
//! ```rust,ignore
//! use marga_nav::{AStarPlanner, SearchMode};
//!
//! let planner = AStarPlanner::with_defaults();
//! let result = planner.find_path(&grid, start, goal, SearchMode::Shortest);
//! if result.success {
//!     println!("{} tiles, cost {:.2}", result.length_cells(), result.cost);
//! }
//! ```
//!
//! ## Curvature-constrained search
//!
//! ```rust,ignore
//! use marga_nav::{CurvaturePlanner, core::{Pose, Vec2}};
//!
//! let planner = CurvaturePlanner::with_defaults();
//! let start = Pose::new(Vec2::new(0.5, 0.5), Vec2::new(0.0, 1.0));
//! let goal = Pose::new(Vec2::new(9.5, 3.5), Vec2::new(0.0, 1.0));
//! let result = planner.find_path(&grid, start, goal);
//! ```

pub mod astar;
pub mod curvature;
pub mod types;
pub mod visitation;

pub use astar::{find_path, path_exists, AStarPlanner, SearchMode};
pub use curvature::CurvaturePlanner;
pub use types::{PathFailure, PathResult, PoseSearchResult};
pub use visitation::VisitationRecord;
