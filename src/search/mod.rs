//! The A* driver and the open/closed set structures it runs on.
use grid_util::point::Point;
use log::{debug, info, trace, warn};
use thiserror::Error;

use crate::error::GridError;
use crate::grid::Grid;
use crate::heuristic::{Heuristic, Manhattan};

pub mod closed;
pub mod frontier;
pub mod state;

pub use closed::ClosedSet;
pub use frontier::Frontier;
pub use state::{Node, SearchState};

/// Cost of moving to an adjacent cell.
pub const STEP_COST: u32 = 1;

/// Options for [AstarSearch].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Maximum number of cells to expand before giving up with
    /// [SearchFailure::BudgetExhausted]. Unlimited when [None].
    pub max_expansions: Option<usize>,
    /// Reject start/goal pairs on different connected components before searching.
    pub component_precheck: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_expansions: None,
            component_precheck: true,
        }
    }
}

impl SearchConfig {
    pub fn with_max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }

    pub fn with_component_precheck(mut self, enabled: bool) -> Self {
        self.component_precheck = enabled;
        self
    }
}

/// Why a search ended without a path. These are ordinary outcomes, not errors of the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SearchFailure {
    #[error("no path exists between start and goal")]
    NoPathFound,
    #[error("gave up after expanding {limit} cells")]
    BudgetExhausted { limit: usize },
}

/// Outcome of a search. `path` runs from start to goal inclusive and is empty exactly when
/// `found` is [false]; `length` counts edges.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub found: bool,
    pub length: usize,
    pub path: Vec<Point>,
    /// Number of cells added to the closed set.
    pub expanded: usize,
    pub failure: Option<SearchFailure>,
}

impl SearchResult {
    fn success(path: Vec<Point>, expanded: usize) -> SearchResult {
        SearchResult {
            found: true,
            length: path.len().saturating_sub(1),
            path,
            expanded,
            failure: None,
        }
    }

    fn failed(reason: SearchFailure, expanded: usize) -> SearchResult {
        SearchResult {
            found: false,
            length: 0,
            path: Vec::new(),
            expanded,
            failure: Some(reason),
        }
    }
}

/// A* over a [Grid] with unit step costs and a pluggable [Heuristic].
///
/// The search itself holds no per-run state: every call creates its own [Frontier],
/// [ClosedSet] and [SearchState], so one instance can serve many searches, including concurrent
/// ones over a shared grid.
#[derive(Clone, Debug, Default)]
pub struct AstarSearch<H = Manhattan> {
    heuristic: H,
    config: SearchConfig,
}

impl AstarSearch<Manhattan> {
    pub fn new() -> AstarSearch<Manhattan> {
        AstarSearch::default()
    }
}

impl<H: Heuristic> AstarSearch<H> {
    pub fn with_heuristic(heuristic: H) -> AstarSearch<H> {
        AstarSearch {
            heuristic,
            config: SearchConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Searches from the grid's start to its goal.
    pub fn search(&self, grid: &Grid) -> SearchResult {
        self.run(grid, grid.start(), grid.goal())
    }

    /// Searches between arbitrary free cells of the grid, ignoring its own markers.
    pub fn search_between(
        &self,
        grid: &Grid,
        start: Point,
        goal: Point,
    ) -> Result<SearchResult, GridError> {
        for point in [start, goal] {
            if !grid.reachable(&point) {
                return Err(GridError::InvalidEndpoint { point });
            }
        }
        Ok(self.run(grid, start, goal))
    }

    fn run(&self, grid: &Grid, start: Point, goal: Point) -> SearchResult {
        if self.config.component_precheck && !grid.connected(&start, &goal) {
            info!("{} is not reachable from {}", goal, start);
            return SearchResult::failed(SearchFailure::NoPathFound, 0);
        }

        let h = self.heuristic.estimate(&start, &goal);
        let mut state = SearchState::seed(start, h);
        let mut frontier = Frontier::new();
        let mut closed = ClosedSet::for_grid(grid);
        frontier.push(start, h);

        while let Some((current, _)) = frontier.pop_min() {
            // A cheaper entry for this cell was already expanded.
            if closed.contains(&current) {
                continue;
            }
            let Some((index, g)) = state.lookup(&current).map(|(index, node)| (index, node.g))
            else {
                continue;
            };
            if let Some(limit) = self.config.max_expansions {
                if closed.len() >= limit {
                    warn!(
                        "Search from {} to {} stopped after {} expansions",
                        start, goal, limit
                    );
                    return SearchResult::failed(
                        SearchFailure::BudgetExhausted { limit },
                        closed.len(),
                    );
                }
            }
            closed.add(current);

            if current == goal {
                let path = state.path_to(index);
                debug!(
                    "Found path of length {} from {} to {} after {} expansions",
                    g,
                    start,
                    goal,
                    closed.len()
                );
                return SearchResult::success(path, closed.len());
            }

            trace!("Expanding {} with g = {}", current, g);
            for neighbor in grid.neighbors(&current) {
                if !grid.reachable(&neighbor) || closed.contains(&neighbor) {
                    continue;
                }
                if let Some(estimated_cost) =
                    state.relax(neighbor, index, g + STEP_COST, |point| {
                        self.heuristic.estimate(point, &goal)
                    })
                {
                    frontier.push(neighbor, estimated_cost);
                }
            }
        }
        if self.config.component_precheck {
            warn!("Reachable goal {} could not be pathed to from {}", goal, start);
        }
        SearchResult::failed(SearchFailure::NoPathFound, closed.len())
    }
}
