//! Result and failure types shared by both planners.

use crate::core::GridCoord;
use crate::pathfinding::visitation::VisitationRecord;

/// Reason a search produced no path
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathFailure {
    /// Start or goal is outside the grid bounds
    OutOfBounds,
    /// Start coordinate lies on a blocked cell
    StartBlocked,
    /// Goal coordinate lies on a blocked cell
    GoalBlocked,
    /// The frontier emptied without reaching the goal. A normal outcome,
    /// not a fault: the grid simply has no traversable route.
    NoPath,
}

/// Result of a discrete grid search
#[derive(Clone, Debug)]
pub struct PathResult {
    /// Tile path from start to goal inclusive (empty if no path found)
    pub path: Vec<GridCoord>,
    /// Total path cost
    pub cost: f32,
    /// Number of tiles expanded during the search
    pub nodes_expanded: usize,
    /// Whether a path was found
    pub success: bool,
    /// Reason for failure (if any)
    pub failure_reason: Option<PathFailure>,
}

impl PathResult {
    /// Create a failed result with an explicitly empty path
    pub(crate) fn failed(reason: PathFailure, nodes_expanded: usize) -> Self {
        Self {
            path: Vec::new(),
            cost: f32::INFINITY,
            nodes_expanded,
            success: false,
            failure_reason: Some(reason),
        }
    }

    /// Path length in cells
    pub fn length_cells(&self) -> usize {
        self.path.len()
    }
}

/// Result of a curvature-constrained pose search
#[derive(Clone, Debug)]
pub struct PoseSearchResult {
    /// Occupied-tile path from start to goal inclusive (empty if no path found)
    pub path: Vec<GridCoord>,
    /// Total path cost (distance traveled in tile units)
    pub cost: f32,
    /// Number of poses expanded during the search
    pub poses_expanded: usize,
    /// Whether a path was found
    pub success: bool,
    /// Reason for failure (if any)
    pub failure_reason: Option<PathFailure>,
    /// Per-cell record of the last visiting pose's occupied tile,
    /// for external renderers
    pub visitation: VisitationRecord,
}

impl PoseSearchResult {
    /// Create a failed result with an explicitly empty path
    pub(crate) fn failed(
        reason: PathFailure,
        poses_expanded: usize,
        visitation: VisitationRecord,
    ) -> Self {
        Self {
            path: Vec::new(),
            cost: f32::INFINITY,
            poses_expanded,
            success: false,
            failure_reason: Some(reason),
            visitation,
        }
    }

    /// Path length in cells
    pub fn length_cells(&self) -> usize {
        self.path.len()
    }
}
