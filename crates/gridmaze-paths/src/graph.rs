use std::fmt;

use gridmaze_core::{Maze, Point, Range};

/// Handle to a node inside a [`Graph`].
///
/// `NodeId(i)` is the i-th open cell of the maze in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position in the graph's node arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One open cell of the maze, plus the search state attached to it.
///
/// Only [`Graph::search`] writes `distance` and `predecessor`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pos: Point,
    pub(crate) distance: Option<u32>,
    pub(crate) predecessor: Option<NodeId>,
    pub(crate) neighbors: Vec<NodeId>,
}

impl Node {
    /// Cell position.
    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    /// Hop count from the last search origin, `None` if not reached.
    #[inline]
    pub fn distance(&self) -> Option<u32> {
        self.distance
    }

    /// The node this one was reached from; `None` for the origin and for
    /// unreached nodes.
    #[inline]
    pub fn predecessor(&self) -> Option<NodeId> {
        self.predecessor
    }

    /// Adjacent open cells, in right, down, left, up order.
    #[inline]
    pub fn neighbors(&self) -> &[NodeId] {
        &self.neighbors
    }

    #[inline]
    pub fn is_reached(&self) -> bool {
        self.distance.is_some()
    }
}

/// Navigable graph over the open cells of a [`Maze`].
///
/// The graph is the only owner of its nodes; links between nodes are
/// [`NodeId`] handles into the same arena.
#[derive(Debug, Clone)]
pub struct Graph {
    pub(crate) nodes: Vec<Node>,
    pub(crate) lookup: Vec<Option<NodeId>>,
    pub(crate) bounds: Range,
    /// Origin of the last completed search.
    pub(crate) source: Option<NodeId>,
}

impl Graph {
    /// Build the graph for `maze`.
    ///
    /// Each open cell gets a node whose neighbours are the in-bounds open
    /// cells to its right, below, left and above, probed in that order.
    /// Runs in O(open cells) plus O(width × height) for the position lookup.
    pub fn build(maze: &Maze) -> Result<Self, GraphError> {
        let bounds = maze.bounds();
        let count = maze.open_count();

        let mut nodes = Vec::new();
        nodes
            .try_reserve_exact(count)
            .map_err(|_| GraphError::Allocation {
                what: "nodes",
                requested: count,
            })?;

        let mut edges = 0;
        for &p in maze.open_cells() {
            let mut neighbors = Vec::new();
            neighbors
                .try_reserve_exact(4)
                .map_err(|_| GraphError::Allocation {
                    what: "neighbor links",
                    requested: 4,
                })?;
            for n in p.neighbors_4() {
                if let Some(i) = maze.open_index(n) {
                    neighbors.push(NodeId(i));
                }
            }
            edges += neighbors.len();
            nodes.push(Node {
                pos: p,
                distance: None,
                predecessor: None,
                neighbors,
            });
        }

        let mut lookup = Vec::new();
        lookup
            .try_reserve_exact(bounds.len())
            .map_err(|_| GraphError::Allocation {
                what: "lookup slots",
                requested: bounds.len(),
            })?;
        lookup.extend(bounds.iter().map(|p| maze.open_index(p).map(NodeId)));

        log::debug!(
            "built graph over {}: {} nodes, {} edges",
            bounds,
            nodes.len(),
            edges / 2
        );

        Ok(Self {
            nodes,
            lookup,
            bounds,
            source: None,
        })
    }

    /// Number of nodes (open cells).
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The maze rectangle the graph was built from.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Borrow a node.
    ///
    /// # Panics
    ///
    /// If `id` does not belong to this graph.
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// All nodes, indexed by [`NodeId::index`].
    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Iterate over `(id, node)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// The node at `p`, if `p` is an open cell.
    #[inline]
    pub fn node_at(&self, p: Point) -> Option<NodeId> {
        if !self.bounds.contains(p) {
            return None;
        }
        let x = (p.x - self.bounds.min.x) as usize;
        let y = (p.y - self.bounds.min.y) as usize;
        self.lookup[y * self.bounds.width() as usize + x]
    }

    /// Origin of the most recent [`search`](Self::search), if any.
    #[inline]
    pub fn source(&self) -> Option<NodeId> {
        self.source
    }
}

/// Errors raised while building a [`Graph`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Storage for part of the graph could not be reserved.
    Allocation {
        what: &'static str,
        requested: usize,
    },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allocation { what, requested } => {
                write!(f, "graph: cannot allocate {requested} {what}")
            }
        }
    }
}

impl std::error::Error for GraphError {}
