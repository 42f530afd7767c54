//! Curvature-constrained search over continuous poses.
//!
//! Instead of fixed neighbor lookup, each expansion synthesizes candidate
//! poses geometrically: two lateral turning circles are placed at the fixed
//! turning radius on either side of the current heading, and intersected
//! with the four boundary segments of the currently occupied tile. Every
//! intersection becomes a fresh pose nudged slightly off the boundary.
//!
//! The explored set is keyed by occupied tile, not by pose: once any pose
//! occupying a tile has been expanded, no further pose occupying that tile
//! is explored. This collapses branching to at most one finalized approach
//! per tile — a deliberate, modeled trade of completeness for tractability,
//! and what bounds the search by the tile count. The goal test is likewise
//! tile-based.

use log::{debug, trace};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::types::{PathFailure, PoseSearchResult};
use super::visitation::VisitationRecord;
use crate::config::CurvatureSettings;
use crate::core::{cell_boundary, Circle, GridCoord, Pose, Vec2};
use crate::grid::{TileGrid, TileId};

/// Index of a pose node in the search's arena.
type PoseId = usize;

/// A pose node created by one expansion event.
///
/// Nodes are never reused or relaxed; parent links form a tree.
#[derive(Clone, Copy, Debug)]
struct PoseNode {
    position: Vec2,
    heading: Vec2,
    tile: TileId,
    /// Cumulative distance traveled. The goal-distance heuristic is computed
    /// transiently at comparison time and never stored.
    g_cost: f32,
    parent: Option<PoseId>,
}

/// An entry in the open frontier
#[derive(Clone, Copy, Debug)]
struct OpenEntry {
    f_cost: f32,
    node: PoseId,
    /// Monotone insertion counter for deterministic equal-cost ordering.
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

/// Curvature-constrained pose planner
pub struct CurvaturePlanner {
    settings: CurvatureSettings,
}

impl CurvaturePlanner {
    /// Create a new planner with the given settings
    pub fn new(settings: CurvatureSettings) -> Self {
        Self { settings }
    }

    /// Create with default settings
    pub fn with_defaults() -> Self {
        Self::new(CurvatureSettings::default())
    }

    /// Find a tile path from `start` to the tile under `goal`.
    ///
    /// Endpoints are validated positionally before any search work. The
    /// returned path lists the occupied tile of each pose along the parent
    /// chain, start to goal inclusive. Degenerate geometry (zero-length
    /// headings, zero radius, vanishing discriminants) produces no
    /// candidates rather than NaN; a search whose expansions all degenerate
    /// ends in `NoPath` once the frontier empties.
    pub fn find_path(&self, grid: &TileGrid, start: Pose, goal: Pose) -> PoseSearchResult {
        trace!(
            "[Curvature] find_path: start=({:.2},{:.2}) goal=({:.2},{:.2}) radius={}",
            start.position.x,
            start.position.y,
            goal.position.x,
            goal.position.y,
            self.settings.turning_radius
        );

        let mut visitation = VisitationRecord::new(grid.width(), grid.height());

        let start_cell = start.position.cell();
        let goal_cell = goal.position.cell();
        if !grid.contains(start_cell.x, start_cell.y) || !grid.contains(goal_cell.x, goal_cell.y) {
            debug!("[Curvature] FAILED: OutOfBounds - start or goal outside grid");
            return PoseSearchResult::failed(PathFailure::OutOfBounds, 0, visitation);
        }
        let Some(start_tile) = grid.tile_at(start_cell.x, start_cell.y) else {
            debug!(
                "[Curvature] FAILED: StartBlocked at ({},{})",
                start_cell.x, start_cell.y
            );
            return PoseSearchResult::failed(PathFailure::StartBlocked, 0, visitation);
        };
        let Some(goal_tile) = grid.tile_at(goal_cell.x, goal_cell.y) else {
            debug!(
                "[Curvature] FAILED: GoalBlocked at ({},{})",
                goal_cell.x, goal_cell.y
            );
            return PoseSearchResult::failed(PathFailure::GoalBlocked, 0, visitation);
        };

        let mut arena: Vec<PoseNode> = Vec::new();
        let mut explored = vec![false; grid.tile_count()];
        let mut open_set = BinaryHeap::new();
        let mut counter: u32 = 0;

        arena.push(PoseNode {
            position: start.position,
            heading: start.heading.normalized(),
            tile: start_tile,
            g_cost: 0.0,
            parent: None,
        });
        open_set.push(OpenEntry {
            f_cost: start.position.distance(&goal.position),
            node: 0,
            counter,
        });
        counter += 1;

        let mut poses_expanded = 0;

        while let Some(current) = open_set.pop() {
            let node = arena[current.node];

            // Display-only side effect: every popped pose stamps its cell
            // with its occupied tile, last-writer-wins.
            visitation.record(node.position.cell(), grid.coord(node.tile));

            if explored[node.tile] {
                continue;
            }
            explored[node.tile] = true;
            poses_expanded += 1;

            if node.tile == goal_tile {
                let path = reconstruct_path(grid, &arena, current.node);
                trace!(
                    "[Curvature] SUCCESS: path length={} cells, cost={:.2}, poses_expanded={}",
                    path.len(),
                    node.g_cost,
                    poses_expanded
                );
                return PoseSearchResult {
                    path,
                    cost: node.g_cost,
                    poses_expanded,
                    success: true,
                    failure_reason: None,
                    visitation,
                };
            }

            self.expand(
                grid,
                &mut arena,
                &mut open_set,
                &mut counter,
                current.node,
                &explored,
                goal.position,
            );
        }

        debug!(
            "[Curvature] FAILED: NoPath after expanding {} poses",
            poses_expanded
        );
        PoseSearchResult::failed(PathFailure::NoPath, poses_expanded, visitation)
    }

    /// Generate candidate poses from one expansion event.
    ///
    /// Both turning circles are intersected with the occupied tile's
    /// boundary; each intersection point becomes a fresh pose whose heading
    /// is the radial perpendicular, flipped when it opposes the current
    /// heading, and whose position is nudged off the boundary along that
    /// heading. Candidates landing outside the grid, on blocked cells, or
    /// on already-explored tiles are discarded.
    #[allow(clippy::too_many_arguments)]
    fn expand(
        &self,
        grid: &TileGrid,
        arena: &mut Vec<PoseNode>,
        open_set: &mut BinaryHeap<OpenEntry>,
        counter: &mut u32,
        current: PoseId,
        explored: &[bool],
        goal_position: Vec2,
    ) {
        let node = arena[current];
        let radius = self.settings.turning_radius;
        if radius <= f32::EPSILON || node.heading.length_squared() <= f32::EPSILON {
            return;
        }

        let tile_coord = grid.coord(node.tile);
        let lateral = node.heading.perpendicular() * radius;

        for center in [node.position + lateral, node.position - lateral] {
            let circle = Circle::new(center, radius);
            for segment in cell_boundary(tile_coord) {
                for point in circle.segment_intersections(&segment) {
                    let radial = point - center;
                    if radial.length_squared() <= f32::EPSILON {
                        continue;
                    }
                    let mut heading = radial.perpendicular().normalized();
                    if heading.dot(&node.heading) <= 0.0 {
                        heading = -heading;
                    }
                    let position = point + heading * self.settings.boundary_nudge;

                    let cell = position.cell();
                    let Some(tile) = grid.tile_at(cell.x, cell.y) else {
                        continue;
                    };
                    if explored[tile] {
                        continue;
                    }

                    let g_cost = node.g_cost + node.position.distance(&position);
                    let id = arena.len();
                    arena.push(PoseNode {
                        position,
                        heading,
                        tile,
                        g_cost,
                        parent: Some(current),
                    });
                    open_set.push(OpenEntry {
                        f_cost: g_cost + position.distance(&goal_position),
                        node: id,
                        counter: *counter,
                    });
                    *counter += 1;
                }
            }
        }
    }
}

/// Walk parent links from the terminal pose back to the start, collecting
/// occupied tiles, and reverse into start-to-goal order.
fn reconstruct_path(grid: &TileGrid, arena: &[PoseNode], terminal: PoseId) -> Vec<GridCoord> {
    let mut path = Vec::new();
    let mut current = terminal;
    loop {
        path.push(grid.coord(arena[current].tile));
        match arena[current].parent {
            Some(parent) => current = parent,
            None => break,
        }
    }
    path.reverse();
    path
}
