use gridmaze_core::Point;

use crate::graph::{Graph, NodeId};

/// Cells from origin to destination, both included.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    cells: Vec<Point>,
}

impl Path {
    /// The cells in walking order.
    #[inline]
    pub fn cells(&self) -> &[Point] {
        &self.cells
    }

    /// Number of cells on the path, endpoints included. This is the figure
    /// reported as "N steps".
    #[inline]
    pub fn steps(&self) -> usize {
        self.cells.len()
    }

    /// Number of moves between cells (`steps() - 1`).
    #[inline]
    pub fn edges(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    pub fn origin(&self) -> Option<Point> {
        self.cells.first().copied()
    }

    pub fn destination(&self) -> Option<Point> {
        self.cells.last().copied()
    }

    /// Whether `p` lies on the path.
    pub fn contains(&self, p: Point) -> bool {
        self.cells.contains(&p)
    }
}

/// Result of asking for a path: either one was found or the destination was
/// never reached.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Found(Path),
    Unreachable,
}

impl Outcome {
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Outcome::Found(_))
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Outcome::Found(path) => Some(path),
            Outcome::Unreachable => None,
        }
    }

    /// Step count of the found path.
    pub fn steps(&self) -> Option<usize> {
        self.path().map(Path::steps)
    }
}

impl Graph {
    /// Walk predecessor links back from `destination` to the origin of the
    /// last [`search`](Self::search) and return the path in forward order.
    ///
    /// Returns [`Outcome::Unreachable`] if no search has run yet or the
    /// destination was not reached by it.
    pub fn path_to(&self, destination: NodeId) -> Outcome {
        let Some(origin) = self.source else {
            return Outcome::Unreachable;
        };
        let Some(distance) = self.nodes[destination.0].distance else {
            return Outcome::Unreachable;
        };

        let mut cells = Vec::with_capacity(distance as usize + 1);
        let mut ci = destination;
        loop {
            let node = &self.nodes[ci.0];
            cells.push(node.pos());
            if ci == origin {
                break;
            }
            let Some(prev) = node.predecessor else {
                unreachable!("predecessor chain broken at {}", node.pos());
            };
            ci = prev;
        }
        cells.reverse();

        debug_assert_eq!(cells.len(), distance as usize + 1);
        debug_assert!(cells.windows(2).all(|w| {
            let d = w[1] - w[0];
            d.x.abs() + d.y.abs() == 1
        }));
        Outcome::Found(Path { cells })
    }
}
