//! Shortest paths through text mazes.
//!
//! The pipeline is:
//!
//! 1. parse the text into a [`Maze`](gridmaze_core::Maze) (in `gridmaze-core`);
//! 2. [`Graph::build`] turns its open cells into nodes with up to four
//!    neighbours, probed right, down, left, up;
//! 3. [`Graph::route`] checks that the requested [`Endpoints`] are open cells;
//! 4. [`Graph::search`] runs a breadth-first search driven by a [`Frontier`];
//! 5. [`Graph::path_to`] follows predecessor links back to the origin.
//!
//! [`solve`] runs all of the above in one call.
//!
//! Nodes live in a single arena owned by the [`Graph`] and refer to each other
//! through [`NodeId`] handles.

mod bfs;
mod endpoints;
mod frontier;
mod graph;
mod path;
mod solve;

#[cfg(test)]
mod testing;

pub use bfs::SearchStats;
pub use endpoints::{EndpointError, Endpoints, Role, Route};
pub use frontier::{EmptyFrontier, Frontier};
pub use graph::{Graph, GraphError, Node, NodeId};
pub use path::{Outcome, Path};
pub use solve::{Solution, SolveError, solve};
