//! **gridmaze-core** — geometry and maze text parsing.
//!
//! This crate provides the types shared by the rest of the *gridmaze*
//! workspace: integer geometry primitives and the [`Maze`] grid parsed from
//! `0`/`1` text.

pub mod geom;
pub mod maze;

pub use geom::{Point, Range};
pub use maze::{Maze, Tile};
