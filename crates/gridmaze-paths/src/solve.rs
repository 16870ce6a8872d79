//! One-shot pipeline: maze → graph → route → search → path.

use std::fmt;

use gridmaze_core::{Maze, Point};

use crate::endpoints::{EndpointError, Endpoints};
use crate::graph::{Graph, GraphError};
use crate::path::{Outcome, Path};

/// Everything a renderer needs to report on a solved (or unsolvable) maze.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    size: Point,
    open_cells: Vec<Point>,
    endpoints: Option<Endpoints>,
    outcome: Outcome,
}

impl Solution {
    /// Maze size (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Point {
        self.size
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.size.y
    }

    /// All open cells in row-major order, path cells included.
    #[inline]
    pub fn open_cells(&self) -> &[Point] {
        &self.open_cells
    }

    #[inline]
    pub fn open_count(&self) -> usize {
        self.open_cells.len()
    }

    /// The endpoints that were searched between; `None` for an empty maze.
    #[inline]
    pub fn endpoints(&self) -> Option<Endpoints> {
        self.endpoints
    }

    #[inline]
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    #[inline]
    pub fn is_solved(&self) -> bool {
        self.outcome.is_found()
    }

    pub fn path(&self) -> Option<&Path> {
        self.outcome.path()
    }

    pub fn steps(&self) -> Option<usize> {
        self.outcome.steps()
    }
}

/// Errors from [`solve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    Graph(GraphError),
    /// An explicitly requested endpoint is not an open cell.
    Endpoint(EndpointError),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Graph(e) => write!(f, "solve: {e}"),
            Self::Endpoint(e) => write!(f, "solve: {e}"),
        }
    }
}

impl std::error::Error for SolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Graph(e) => Some(e),
            Self::Endpoint(e) => Some(e),
        }
    }
}

impl From<GraphError> for SolveError {
    fn from(e: GraphError) -> Self {
        Self::Graph(e)
    }
}

impl From<EndpointError> for SolveError {
    fn from(e: EndpointError) -> Self {
        Self::Endpoint(e)
    }
}

/// Find the shortest path through `maze`.
///
/// With `endpoints == None` the search runs from the top-left to the
/// bottom-right corner, and a blocked corner simply means there is no
/// solution. Explicit endpoints that are not open cells are an error.
pub fn solve(maze: &Maze, endpoints: Option<Endpoints>) -> Result<Solution, SolveError> {
    let explicit = endpoints.is_some();
    let endpoints = endpoints.or_else(|| Endpoints::corners(maze.bounds()));

    let mut solution = Solution {
        size: maze.size(),
        open_cells: maze.open_cells().to_vec(),
        endpoints,
        outcome: Outcome::Unreachable,
    };
    let Some(endpoints) = endpoints else {
        log::debug!("empty maze, nothing to solve");
        return Ok(solution);
    };

    let mut graph = Graph::build(maze)?;
    let route = match graph.route(endpoints) {
        Ok(route) => route,
        Err(e) if !explicit => {
            log::debug!("no solution: {e}");
            return Ok(solution);
        }
        Err(e) => return Err(e.into()),
    };

    graph.search(route.origin());
    solution.outcome = graph.path_to(route.destination());
    Ok(solution)
}
