use crate::frontier::Frontier;
use crate::graph::{Graph, NodeId};

/// Summary of one [`Graph::search`] run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes removed from the frontier and expanded.
    pub expanded: usize,
    /// Nodes that ended with a distance, origin included.
    pub reached: usize,
}

impl Graph {
    /// Breadth-first search from `origin` over unit-cost edges.
    ///
    /// Clears any previous search state, then labels every node reachable
    /// from `origin` with its hop count and the neighbour it was first
    /// reached from. Nodes that cannot be reached keep `distance() == None`.
    ///
    /// A neighbour is relabelled when it is unvisited or when the new
    /// distance is strictly smaller than its current one. With unit costs
    /// only the first case ever fires; the second keeps the loop correct
    /// for costs other than one.
    ///
    /// # Panics
    ///
    /// If `origin` does not belong to this graph.
    pub fn search(&mut self, origin: NodeId) -> SearchStats {
        for n in self.nodes.iter_mut() {
            n.distance = None;
            n.predecessor = None;
        }
        self.source = None;

        let mut frontier: Frontier<NodeId> = Frontier::new();
        let mut stats = SearchStats {
            expanded: 0,
            reached: 1,
        };

        self.nodes[origin.0].distance = Some(0);
        frontier.insert(origin, 0);

        while !frontier.is_empty() {
            let current = match frontier.remove_front() {
                Ok(id) => id,
                Err(e) => unreachable!("{e}"),
            };
            stats.expanded += 1;

            let Some(current_dist) = self.nodes[current.0].distance else {
                unreachable!("node {current} queued without a distance");
            };
            let candidate = current_dist + 1;

            let neighbors = std::mem::take(&mut self.nodes[current.0].neighbors);
            for &ni in neighbors.iter() {
                let n = &mut self.nodes[ni.0];
                let improves = match n.distance {
                    None => true,
                    Some(d) => candidate < d,
                };
                if !improves {
                    continue;
                }
                if n.distance.is_none() {
                    stats.reached += 1;
                }
                n.predecessor = Some(current);
                n.distance = Some(candidate);
                log::trace!("{} reached from {} at {}", n.pos(), current, candidate);
                frontier.insert(ni, candidate);
            }
            self.nodes[current.0].neighbors = neighbors;
        }

        self.source = Some(origin);
        log::debug!(
            "search from {}: expanded {}, reached {} of {}",
            self.nodes[origin.0].pos(),
            stats.expanded,
            stats.reached,
            self.nodes.len()
        );
        stats
    }
}
