//! Where a search starts and ends.

use std::fmt;

use gridmaze_core::{Point, Range};

use crate::graph::{Graph, NodeId};

/// An origin/destination pair of cell positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Endpoints {
    pub origin: Point,
    pub destination: Point,
}

impl Endpoints {
    pub const fn new(origin: Point, destination: Point) -> Self {
        Self {
            origin,
            destination,
        }
    }

    /// Top-left to bottom-right corner of `bounds`, or `None` for an empty
    /// range.
    pub fn corners(bounds: Range) -> Option<Self> {
        let last = bounds.last()?;
        Some(Self::new(bounds.min, last))
    }
}

impl fmt::Display for Endpoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.origin, self.destination)
    }
}

/// [`Endpoints`] resolved to nodes of a particular [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    origin: NodeId,
    destination: NodeId,
    endpoints: Endpoints,
}

impl Route {
    #[inline]
    pub fn origin(&self) -> NodeId {
        self.origin
    }

    #[inline]
    pub fn destination(&self) -> NodeId {
        self.destination
    }

    #[inline]
    pub fn endpoints(&self) -> Endpoints {
        self.endpoints
    }
}

/// Which end of a route an [`EndpointError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Origin,
    Destination,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Role::Origin => "origin",
            Role::Destination => "destination",
        })
    }
}

/// An endpoint that is not an open cell of the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointError {
    /// Outside the maze rectangle.
    OutOfBounds { role: Role, pos: Point },
    /// Inside the maze but on a blocked cell.
    Blocked { role: Role, pos: Point },
}

impl EndpointError {
    pub fn role(&self) -> Role {
        match *self {
            Self::OutOfBounds { role, .. } | Self::Blocked { role, .. } => role,
        }
    }
}

impl fmt::Display for EndpointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { role, pos } => write!(f, "{role} {pos} is outside the maze"),
            Self::Blocked { role, pos } => write!(f, "{role} {pos} is not an open cell"),
        }
    }
}

impl std::error::Error for EndpointError {}

impl Graph {
    /// Resolve `endpoints` to nodes, failing if either one is not an open
    /// cell.
    pub fn route(&self, endpoints: Endpoints) -> Result<Route, EndpointError> {
        let origin = self.resolve(endpoints.origin, Role::Origin)?;
        let destination = self.resolve(endpoints.destination, Role::Destination)?;
        Ok(Route {
            origin,
            destination,
            endpoints,
        })
    }

    fn resolve(&self, pos: Point, role: Role) -> Result<NodeId, EndpointError> {
        if !self.bounds.contains(pos) {
            return Err(EndpointError::OutOfBounds { role, pos });
        }
        self.node_at(pos).ok_or(EndpointError::Blocked { role, pos })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridmaze_core::Maze;

    #[test]
    fn corners_of_bounds() {
        let e = Endpoints::corners(Range::new(0, 0, 4, 3)).unwrap();
        assert_eq!(e.origin, Point::new(0, 0));
        assert_eq!(e.destination, Point::new(3, 2));
        assert_eq!(Endpoints::corners(Range::default()), None);
    }

    #[test]
    fn route_resolves_open_cells() {
        let g = Graph::build(&Maze::parse("00\n10\n")).unwrap();
        let r = g
            .route(Endpoints::new(Point::new(0, 0), Point::new(1, 1)))
            .unwrap();
        assert_eq!(g.node(r.origin()).pos(), Point::new(0, 0));
        assert_eq!(g.node(r.destination()).pos(), Point::new(1, 1));
        assert_eq!(r.endpoints().destination, Point::new(1, 1));
    }

    #[test]
    fn route_rejects_blocked_and_outside() {
        let g = Graph::build(&Maze::parse("00\n10\n")).unwrap();
        let err = g
            .route(Endpoints::new(Point::new(0, 1), Point::new(1, 1)))
            .unwrap_err();
        assert_eq!(
            err,
            EndpointError::Blocked {
                role: Role::Origin,
                pos: Point::new(0, 1)
            }
        );
        let err = g
            .route(Endpoints::new(Point::new(0, 0), Point::new(5, 5)))
            .unwrap_err();
        assert_eq!(err.role(), Role::Destination);
        assert!(matches!(err, EndpointError::OutOfBounds { .. }));
        assert_eq!(err.to_string(), "destination (5, 5) is outside the maze");
    }

    #[test]
    fn blocked_corner_is_not_routable() {
        let maze = Maze::parse("10\n00\n");
        let g = Graph::build(&maze).unwrap();
        let ends = Endpoints::corners(maze.bounds()).unwrap();
        assert!(g.route(ends).is_err());
    }
}
