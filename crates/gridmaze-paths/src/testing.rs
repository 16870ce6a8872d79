//! Helpers shared by the unit tests: random mazes and independent reference
//! searches that work directly on the [`Maze`] rather than on a [`Graph`].
//!
//! [`Graph`]: crate::Graph

use std::collections::VecDeque;

use gridmaze_core::{Maze, Point};
use rand::Rng;

/// A `width` × `height` maze where each cell is blocked with probability
/// `blocked`. The top-left cell is always open.
pub(crate) fn random_maze(rng: &mut impl Rng, width: i32, height: i32, blocked: f64) -> Maze {
    let mut text = String::new();
    for y in 0..height {
        for x in 0..width {
            let wall = (x, y) != (0, 0) && rng.random_bool(blocked);
            text.push(if wall { '1' } else { '0' });
        }
        text.push('\n');
    }
    Maze::parse(&text)
}

/// Plain BFS over the maze tiles; distances indexed by open-cell index.
pub(crate) fn reference_distances(maze: &Maze, origin: Point) -> Vec<Option<u32>> {
    let mut dist = vec![None; maze.open_count()];
    let Some(oi) = maze.open_index(origin) else {
        return dist;
    };
    dist[oi] = Some(0);
    let mut queue = VecDeque::from([origin]);
    while let Some(p) = queue.pop_front() {
        let d = dist[maze.open_index(p).unwrap()].unwrap();
        for n in p.neighbors_4() {
            if let Some(ni) = maze.open_index(n) {
                if dist[ni].is_none() {
                    dist[ni] = Some(d + 1);
                    queue.push_back(n);
                }
            }
        }
    }
    dist
}

/// Whether `to` can be reached from `from` by an iterative flood fill.
pub(crate) fn flood_reaches(maze: &Maze, from: Point, to: Point) -> bool {
    let Some(start) = maze.open_index(from) else {
        return false;
    };
    let mut seen = vec![false; maze.open_count()];
    seen[start] = true;
    let mut stack = vec![from];
    while let Some(p) = stack.pop() {
        if p == to {
            return true;
        }
        for n in p.neighbors_4() {
            if let Some(ni) = maze.open_index(n) {
                if !seen[ni] {
                    seen[ni] = true;
                    stack.push(n);
                }
            }
        }
    }
    false
}
