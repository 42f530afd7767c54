//! Discrete A* search over the tile grid.
//!
//! Two modes:
//! - [`SearchMode::Shortest`]: plain Euclidean-heuristic A*. The heuristic is
//!   admissible and consistent (per-step cost equals Euclidean step length),
//!   so returned paths are optimal.
//! - [`SearchMode::TurnAware`]: direction changes above 90° multiply the step
//!   cost by a factor growing linearly to 4.0 at 180°. The Euclidean
//!   heuristic is inadmissible under this cost model, so paths are good but
//!   not guaranteed optimal. That is a property of the mode, not a defect.

use log::{debug, trace};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::f32::consts::FRAC_PI_2;

use super::types::{PathFailure, PathResult};
use crate::config::AStarSettings;
use crate::core::GridCoord;
use crate::grid::{TileGrid, TileId};

/// Search mode for the discrete engine
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Plain shortest path under Euclidean step costs
    #[default]
    Shortest,
    /// Penalize direction changes sharper than 90°
    TurnAware,
}

/// An entry in the open frontier
#[derive(Clone, Copy, Debug)]
struct OpenEntry {
    f_cost: f32,
    tile: TileId,
    /// Monotone insertion counter; equal-cost entries pop oldest-first,
    /// which keeps expansion deterministic.
    counter: u32,
}

impl Eq for OpenEntry {}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.counter == other.counter
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior
        other
            .f_cost
            .partial_cmp(&self.f_cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.counter.cmp(&self.counter))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Discrete A* planner
pub struct AStarPlanner {
    settings: AStarSettings,
}

impl AStarPlanner {
    /// Create a new planner with the given settings
    pub fn new(settings: AStarSettings) -> Self {
        Self { settings }
    }

    /// Create with default settings
    pub fn with_defaults() -> Self {
        Self::new(AStarSettings::default())
    }

    /// Find a path from `start` to `goal` (tile coordinates).
    ///
    /// Endpoints are validated before any search work: out-of-bounds or
    /// blocked coordinates fail with a distinguishable reason and are never
    /// substituted with a nearby tile. Frontier exhaustion is a normal
    /// outcome and returns an explicitly empty path.
    ///
    /// Neighbors are expanded in the grid's fixed construction order (see
    /// [`TileGrid::neighbors`]); two identical calls produce identical paths
    /// and diagnostics.
    pub fn find_path(
        &self,
        grid: &TileGrid,
        start: GridCoord,
        goal: GridCoord,
        mode: SearchMode,
    ) -> PathResult {
        trace!(
            "[AStar] find_path: start=({},{}) goal=({},{}) mode={:?}",
            start.x,
            start.y,
            goal.x,
            goal.y,
            mode
        );

        if !grid.contains(start.x, start.y) || !grid.contains(goal.x, goal.y) {
            debug!("[AStar] FAILED: OutOfBounds - start or goal outside grid");
            return PathResult::failed(PathFailure::OutOfBounds, 0);
        }
        let Some(start_id) = grid.tile_at(start.x, start.y) else {
            debug!("[AStar] FAILED: StartBlocked at ({},{})", start.x, start.y);
            return PathResult::failed(PathFailure::StartBlocked, 0);
        };
        let Some(goal_id) = grid.tile_at(goal.x, goal.y) else {
            debug!("[AStar] FAILED: GoalBlocked at ({},{})", goal.x, goal.y);
            return PathResult::failed(PathFailure::GoalBlocked, 0);
        };

        // Per-search scratch, indexed by tile id; the grid itself is never
        // mutated, so sequential searches need no reset step.
        let n = grid.tile_count();
        let mut g_costs = vec![f32::INFINITY; n];
        let mut parents: Vec<Option<TileId>> = vec![None; n];
        let mut closed = vec![false; n];

        let mut open_set = BinaryHeap::new();
        let mut counter: u32 = 0;

        g_costs[start_id] = 0.0;
        open_set.push(OpenEntry {
            f_cost: start.distance(&goal),
            tile: start_id,
            counter,
        });
        counter += 1;

        let mut nodes_expanded = 0;

        while let Some(current) = open_set.pop() {
            let current_id = current.tile;
            if closed[current_id] {
                continue;
            }
            closed[current_id] = true;
            nodes_expanded += 1;

            if current_id == goal_id {
                let path = reconstruct_path(grid, &parents, goal_id);
                let cost = g_costs[goal_id];
                trace!(
                    "[AStar] SUCCESS: path length={} cells, cost={:.2}, nodes_expanded={}",
                    path.len(),
                    cost,
                    nodes_expanded
                );
                return PathResult {
                    path,
                    cost,
                    nodes_expanded,
                    success: true,
                    failure_reason: None,
                };
            }

            let current_coord = grid.coord(current_id);
            let parent_coord = parents[current_id].map(|p| grid.coord(p));

            for &neighbor_id in grid.neighbors(current_id) {
                if closed[neighbor_id] {
                    continue;
                }
                let neighbor_coord = grid.coord(neighbor_id);

                let mut step = self.step_cost(current_coord, neighbor_coord);
                if mode == SearchMode::TurnAware {
                    step *= self.turn_factor(parent_coord, current_coord, neighbor_coord);
                }

                let tentative = g_costs[current_id] + step;
                // Already in the frontier with an equal or better cost: skip.
                // Strictly better: relax in place and re-push (the stale
                // entry is discarded via the closed check when popped).
                if tentative >= g_costs[neighbor_id] {
                    continue;
                }
                g_costs[neighbor_id] = tentative;
                parents[neighbor_id] = Some(current_id);
                open_set.push(OpenEntry {
                    f_cost: tentative + neighbor_coord.distance(&goal),
                    tile: neighbor_id,
                    counter,
                });
                counter += 1;
            }
        }

        debug!(
            "[AStar] FAILED: NoPath after expanding {} nodes",
            nodes_expanded
        );
        PathResult::failed(PathFailure::NoPath, nodes_expanded)
    }

    /// Cost of an explicit tile sequence under the given mode.
    ///
    /// Evaluates consecutive steps with the same cost model the search uses,
    /// including turn penalties relative to each step's predecessor. Useful
    /// for comparing candidate paths in diagnostics and tests.
    pub fn path_cost(&self, path: &[GridCoord], mode: SearchMode) -> f32 {
        let mut cost = 0.0;
        for i in 1..path.len() {
            let mut step = self.step_cost(path[i - 1], path[i]);
            if mode == SearchMode::TurnAware {
                let prev = if i >= 2 { Some(path[i - 2]) } else { None };
                step *= self.turn_factor(prev, path[i - 1], path[i]);
            }
            cost += step;
        }
        cost
    }

    /// Step cost between adjacent tiles: 1.0 axis-aligned, `diagonal_cost`
    /// for diagonal moves
    #[inline]
    fn step_cost(&self, from: GridCoord, to: GridCoord) -> f32 {
        if from.x != to.x && from.y != to.y {
            self.settings.diagonal_cost
        } else {
            1.0
        }
    }

    /// Turn penalty factor for the step `current -> candidate` arriving from
    /// `prev`.
    ///
    /// 1.0 up to and including 90°, then linear in the angle up to
    /// `max_turn_factor` at 180°. A tile with no parent turns by definition
    /// 0°.
    fn turn_factor(
        &self,
        prev: Option<GridCoord>,
        current: GridCoord,
        candidate: GridCoord,
    ) -> f32 {
        let Some(prev) = prev else {
            return 1.0;
        };
        let incoming = prev.step_to(&current);
        let outgoing = current.step_to(&candidate);
        let denom = incoming.length() * outgoing.length();
        if denom <= f32::EPSILON {
            return 1.0;
        }
        let angle = (incoming.dot(&outgoing) / denom).clamp(-1.0, 1.0).acos();
        if angle <= FRAC_PI_2 {
            1.0
        } else {
            1.0 + (self.settings.max_turn_factor - 1.0) * (angle - FRAC_PI_2) / FRAC_PI_2
        }
    }
}

/// Quick path finding with default settings
pub fn find_path(grid: &TileGrid, start: GridCoord, goal: GridCoord) -> PathResult {
    AStarPlanner::with_defaults().find_path(grid, start, goal, SearchMode::Shortest)
}

/// Check if a path exists (faster to ask than to inspect a full result)
pub fn path_exists(grid: &TileGrid, start: GridCoord, goal: GridCoord) -> bool {
    find_path(grid, start, goal).success
}

/// Walk parent links from `terminal` back to the root and reverse into
/// start-to-goal order.
fn reconstruct_path(
    grid: &TileGrid,
    parents: &[Option<TileId>],
    terminal: TileId,
) -> Vec<GridCoord> {
    let mut path = Vec::new();
    let mut current = terminal;
    loop {
        path.push(grid.coord(current));
        match parents[current] {
            Some(parent) => current = parent,
            None => break,
        }
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Obstacle;
    use approx::assert_relative_eq;
    use std::f32::consts::SQRT_2;

    fn open_grid(n: usize) -> TileGrid {
        TileGrid::build(n, n, &[]).unwrap()
    }

    #[test]
    fn test_simple_path() {
        let grid = open_grid(10);
        let planner = AStarPlanner::with_defaults();

        let result = planner.find_path(
            &grid,
            GridCoord::new(1, 5),
            GridCoord::new(8, 5),
            SearchMode::Shortest,
        );

        assert!(result.success);
        assert_eq!(result.path[0], GridCoord::new(1, 5));
        assert_eq!(*result.path.last().unwrap(), GridCoord::new(8, 5));
        assert_relative_eq!(result.cost, 7.0, epsilon = 1e-5);
    }

    #[test]
    fn test_pure_diagonal_cost() {
        let grid = open_grid(8);
        let planner = AStarPlanner::with_defaults();

        let result = planner.find_path(
            &grid,
            GridCoord::new(0, 0),
            GridCoord::new(7, 7),
            SearchMode::Shortest,
        );

        assert!(result.success);
        assert_eq!(result.length_cells(), 8);
        assert_relative_eq!(result.cost, 7.0 * SQRT_2, epsilon = 1e-4);
    }

    #[test]
    fn test_path_around_obstacle() {
        let grid = TileGrid::build(10, 10, &[Obstacle::new(4, 0, 1, 9)]).unwrap();
        let planner = AStarPlanner::with_defaults();

        let result = planner.find_path(
            &grid,
            GridCoord::new(1, 1),
            GridCoord::new(8, 1),
            SearchMode::Shortest,
        );

        assert!(result.success);
        // Must detour through row 9
        assert!(result.path.iter().any(|c| c.y == 9));
        for pair in result.path.windows(2) {
            assert_eq!(pair[0].chebyshev_distance(&pair[1]), 1);
        }
    }

    #[test]
    fn test_no_path() {
        let grid = TileGrid::build(10, 10, &[Obstacle::new(4, 0, 1, 10)]).unwrap();
        let planner = AStarPlanner::with_defaults();

        let result = planner.find_path(
            &grid,
            GridCoord::new(1, 1),
            GridCoord::new(8, 1),
            SearchMode::Shortest,
        );

        assert!(!result.success);
        assert!(result.path.is_empty());
        assert_eq!(result.failure_reason, Some(PathFailure::NoPath));
        assert!(result.nodes_expanded > 0);
    }

    #[test]
    fn test_invalid_endpoints() {
        let grid = TileGrid::build(10, 10, &[Obstacle::new(3, 3, 2, 2)]).unwrap();
        let planner = AStarPlanner::with_defaults();

        let blocked = planner.find_path(
            &grid,
            GridCoord::new(3, 3),
            GridCoord::new(8, 8),
            SearchMode::Shortest,
        );
        assert_eq!(blocked.failure_reason, Some(PathFailure::StartBlocked));

        let goal_blocked = planner.find_path(
            &grid,
            GridCoord::new(0, 0),
            GridCoord::new(4, 4),
            SearchMode::Shortest,
        );
        assert_eq!(goal_blocked.failure_reason, Some(PathFailure::GoalBlocked));

        let outside = planner.find_path(
            &grid,
            GridCoord::new(0, 0),
            GridCoord::new(10, 3),
            SearchMode::Shortest,
        );
        assert_eq!(outside.failure_reason, Some(PathFailure::OutOfBounds));
        assert_eq!(outside.nodes_expanded, 0);
    }

    #[test]
    fn test_start_equals_goal() {
        let grid = open_grid(5);
        let planner = AStarPlanner::with_defaults();

        let result = planner.find_path(
            &grid,
            GridCoord::new(2, 2),
            GridCoord::new(2, 2),
            SearchMode::Shortest,
        );

        assert!(result.success);
        assert_eq!(result.path, vec![GridCoord::new(2, 2)]);
        assert_relative_eq!(result.cost, 0.0);
    }

    #[test]
    fn test_turn_factor_boundaries() {
        let planner = AStarPlanner::with_defaults();

        // No parent: 0° by definition
        assert_relative_eq!(
            planner.turn_factor(None, GridCoord::new(0, 0), GridCoord::new(1, 0)),
            1.0
        );
        // Straight through: 0°
        assert_relative_eq!(
            planner.turn_factor(
                Some(GridCoord::new(0, 0)),
                GridCoord::new(1, 0),
                GridCoord::new(2, 0)
            ),
            1.0
        );
        // Exactly 90°: still unpenalized
        assert_relative_eq!(
            planner.turn_factor(
                Some(GridCoord::new(0, 0)),
                GridCoord::new(1, 0),
                GridCoord::new(1, 1)
            ),
            1.0,
            epsilon = 1e-5
        );
        // 135°
        assert_relative_eq!(
            planner.turn_factor(
                Some(GridCoord::new(0, 0)),
                GridCoord::new(1, 0),
                GridCoord::new(0, 1)
            ),
            2.5,
            epsilon = 1e-4
        );
        // Full reversal: the documented 4x factor
        assert_relative_eq!(
            planner.turn_factor(
                Some(GridCoord::new(0, 0)),
                GridCoord::new(1, 0),
                GridCoord::new(0, 0)
            ),
            4.0,
            epsilon = 1e-4
        );
    }

    #[test]
    fn test_u_turn_path_cost() {
        let planner = AStarPlanner::with_defaults();

        let u_turn = [
            GridCoord::new(0, 0),
            GridCoord::new(1, 0),
            GridCoord::new(0, 0),
        ];
        let straight = [
            GridCoord::new(0, 0),
            GridCoord::new(1, 0),
            GridCoord::new(2, 0),
        ];

        let u_cost = planner.path_cost(&u_turn, SearchMode::TurnAware);
        let s_cost = planner.path_cost(&straight, SearchMode::TurnAware);

        // The reversing step costs 4x a plain step
        assert_relative_eq!(u_cost, 1.0 + 4.0, epsilon = 1e-4);
        assert_relative_eq!(s_cost, 2.0, epsilon = 1e-5);
        assert!(u_cost > s_cost);
    }

    #[test]
    fn test_turn_aware_open_grid_matches_shortest() {
        // Optimal open-grid paths never turn sharper than 90°, so both
        // modes agree there.
        let grid = open_grid(8);
        let planner = AStarPlanner::with_defaults();

        let plain = planner.find_path(
            &grid,
            GridCoord::new(0, 3),
            GridCoord::new(7, 4),
            SearchMode::Shortest,
        );
        let aware = planner.find_path(
            &grid,
            GridCoord::new(0, 3),
            GridCoord::new(7, 4),
            SearchMode::TurnAware,
        );

        assert!(plain.success && aware.success);
        assert_relative_eq!(plain.cost, aware.cost, epsilon = 1e-4);
    }

    #[test]
    fn test_deterministic_expansion() {
        let grid = TileGrid::build(12, 12, &[Obstacle::new(5, 2, 2, 8)]).unwrap();
        let planner = AStarPlanner::with_defaults();

        let a = planner.find_path(
            &grid,
            GridCoord::new(1, 6),
            GridCoord::new(10, 6),
            SearchMode::Shortest,
        );
        let b = planner.find_path(
            &grid,
            GridCoord::new(1, 6),
            GridCoord::new(10, 6),
            SearchMode::Shortest,
        );

        assert_eq!(a.path, b.path);
        assert_eq!(a.nodes_expanded, b.nodes_expanded);
    }
}
