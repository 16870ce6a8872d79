//! Text maze parsing.
//!
//! A maze is written as rows of `'0'` (open) and `'1'` (blocked) characters
//! separated by `'\n'`. Anything else on a row (spaces, tabs, `'\r'`) is
//! ignored, so `"0 0 1"` and `"001"` describe the same row. Rows of
//! different lengths are accepted: the maze is as wide as its longest row and
//! shorter rows are padded with blocked cells.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::geom::{Point, Range};

/// What occupies a single maze cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    /// Passable; encoded `'0'`.
    Open,
    /// Impassable; encoded `'1'`, also used for padding short rows.
    #[default]
    Blocked,
}

impl Tile {
    /// The character this tile is written as.
    pub const fn symbol(self) -> char {
        match self {
            Tile::Open => '0',
            Tile::Blocked => '1',
        }
    }
}

/// A parsed maze: its dimensions, the open cells in discovery order and a
/// dense lookup from position to open-cell index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    /// Open cells in row-major scan order.
    open: Vec<Point>,
    /// `lookup[y * width + x]` is the index into `open`, if the cell is open.
    lookup: Vec<Option<usize>>,
    width: i32,
    height: i32,
}

impl Maze {
    /// Parse maze text. Never fails: unknown characters are skipped and an
    /// input without any open cell yields a maze with `open_count() == 0`.
    pub fn parse(s: &str) -> Self {
        let mut open = Vec::new();
        let mut x: i32 = 0;
        let mut y: i32 = 0;
        let mut width: i32 = 0;
        let mut last = None;

        for ch in s.chars() {
            match ch {
                '\n' => {
                    width = width.max(x);
                    x = 0;
                    y += 1;
                }
                '0' => {
                    open.push(Point::new(x, y));
                    x += 1;
                }
                '1' => x += 1,
                _ => {}
            }
            last = Some(ch);
        }
        width = width.max(x);

        // A final row without a line break still counts.
        let height = match last {
            None => 0,
            Some('\n') => y,
            Some(_) => y + 1,
        };

        let mut lookup = vec![None; (width as usize) * (height as usize)];
        for (i, p) in open.iter().enumerate() {
            lookup[(p.y * width + p.x) as usize] = Some(i);
        }

        Self {
            open,
            lookup,
            width,
            height,
        }
    }

    /// Number of columns (length of the longest row).
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Size as a `Point` (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// The rectangle `[0, width) x [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Number of open cells.
    #[inline]
    pub fn open_count(&self) -> usize {
        self.open.len()
    }

    /// Open cells in row-major order.
    #[inline]
    pub fn open_cells(&self) -> &[Point] {
        &self.open
    }

    /// Position of `p` in [`open_cells`](Self::open_cells), or `None` if `p`
    /// is blocked or out of bounds.
    #[inline]
    pub fn open_index(&self, p: Point) -> Option<usize> {
        if !self.bounds().contains(p) {
            return None;
        }
        self.lookup[(p.y * self.width + p.x) as usize]
    }

    /// Whether `p` is an open cell.
    #[inline]
    pub fn is_open(&self, p: Point) -> bool {
        self.open_index(p).is_some()
    }

    /// The tile at `p`, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<Tile> {
        if !self.bounds().contains(p) {
            return None;
        }
        Some(if self.is_open(p) {
            Tile::Open
        } else {
            Tile::Blocked
        })
    }
}

impl FromStr for Maze {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for Maze {
    /// Normalized form: space-separated symbols, one row per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                if x > 0 {
                    f.write_str(" ")?;
                }
                let tile = self.at(Point::new(x, y)).unwrap_or_default();
                write!(f, "{}", tile.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
