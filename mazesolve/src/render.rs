//! Text boards.
//!
//! Cells are drawn two characters wide. Walls and padding are `O`, open cells
//! are blank and path cells are `+` when the path is shown. Bordered boards
//! leave a gap in the frame at the entry (top-left) and exit (bottom-right).

use std::io::{self, Write};

use gridmaze_core::{Maze, Point};
use gridmaze_paths::Solution;

const WALL: char = 'O';
const OPEN: char = ' ';
const TRAIL: char = '+';

fn write_frame(out: &mut impl Write, width: i32) -> io::Result<()> {
    let len = (2 * width + 3).max(0) as usize;
    write!(out, "{}", WALL.to_string().repeat(len))
}

/// The parsed maze as `0`/`1` cells, preceded by a `Read this matrix:`
/// header.
pub fn write_matrix(out: &mut impl Write, maze: &Maze) -> io::Result<()> {
    write!(out, "Read this matrix:")?;
    for y in 0..maze.height() {
        writeln!(out)?;
        for x in 0..maze.width() {
            let symbol = if maze.is_open(Point::new(x, y)) { '0' } else { '1' };
            write!(out, "{symbol} ")?;
        }
    }
    writeln!(out)
}

/// A board with no open cells at all.
pub fn write_blocked_board(
    out: &mut impl Write,
    width: i32,
    height: i32,
    borders: bool,
) -> io::Result<()> {
    if borders {
        write_frame(out, width)?;
    }
    for y in 0..height {
        writeln!(out)?;
        if borders && y != 0 {
            write!(out, "{WALL} ")?;
        }
        for _ in 0..width {
            write!(out, "{WALL} ")?;
        }
        if borders && y != height - 1 {
            write!(out, "{WALL}")?;
        }
    }
    if borders {
        writeln!(out)?;
        write_frame(out, width)?;
    }
    writeln!(out)
}

/// The framed board of a solved maze. Path cells are marked only when
/// `show_path` is set; otherwise they render as open cells.
pub fn write_solution_board(
    out: &mut impl Write,
    solution: &Solution,
    show_path: bool,
) -> io::Result<()> {
    let width = solution.width();
    let height = solution.height();
    let mut board = vec![WALL; (width.max(0) as usize) * (height.max(0) as usize)];
    let idx = |p: Point| (p.y * width + p.x) as usize;

    if let Some(path) = solution.path() {
        for &p in path.cells() {
            board[idx(p)] = TRAIL;
        }
    }
    for &p in solution.open_cells() {
        if board[idx(p)] != TRAIL {
            board[idx(p)] = OPEN;
        }
    }

    write_frame(out, width)?;
    writeln!(out)?;
    if show_path {
        write!(out, "{TRAIL} ")?;
    } else {
        write!(out, "  ")?;
    }
    for y in 0..height {
        if y > 0 {
            write!(out, "{WALL} ")?;
        }
        for x in 0..width {
            let c = board[idx(Point::new(x, y))];
            if c == TRAIL && !show_path {
                write!(out, "  ")?;
            } else {
                write!(out, "{c} ")?;
            }
        }
        if y == height - 1 {
            if show_path {
                writeln!(out, "{TRAIL}")?;
            } else {
                writeln!(out, " ")?;
            }
        } else {
            writeln!(out, "{WALL}")?;
        }
    }
    write_frame(out, width)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridmaze_paths::solve;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    const DETOUR: &str = "0 0 1\n0 1 0\n0 0 0\n";

    #[test]
    fn matrix_listing() {
        let maze = Maze::parse("0 1\n0\n");
        let s = render(|out| write_matrix(out, &maze));
        assert_eq!(s, "Read this matrix:\n0 1 \n0 1 \n");
    }

    #[test]
    fn solution_with_path() {
        let sol = solve(&Maze::parse(DETOUR), None).unwrap();
        let s = render(|out| write_solution_board(out, &sol, true));
        let want = "\
OOOOOOOOO
+ +   O O
O + O   O
O + + + +
OOOOOOOOO
";
        assert_eq!(s, want);
    }

    #[test]
    fn solution_without_path() {
        let sol = solve(&Maze::parse(DETOUR), None).unwrap();
        let s = render(|out| write_solution_board(out, &sol, false));
        let want = [
            "OOOOOOOOO",
            "      O O",
            "O   O   O",
            "O        ",
            "OOOOOOOOO",
        ];
        assert_eq!(s.lines().collect::<Vec<_>>(), want);
    }

    #[test]
    fn open_grid_path_hugs_left_then_bottom() {
        let sol = solve(&Maze::parse("0 0 0\n0 0 0\n0 0 0\n"), None).unwrap();
        let s = render(|out| write_solution_board(out, &sol, true));
        let want = [
            "OOOOOOOOO",
            "+ +     O",
            "O +     O",
            "O + + + +",
            "OOOOOOOOO",
        ];
        assert_eq!(s.lines().collect::<Vec<_>>(), want);
    }

    #[test]
    fn single_cell_solution() {
        let sol = solve(&Maze::parse("0\n"), None).unwrap();
        let s = render(|out| write_solution_board(out, &sol, true));
        assert_eq!(s, "OOOOO\n+ + +\nOOOOO\n");
    }

    #[test]
    fn blocked_board_with_borders() {
        let s = render(|out| write_blocked_board(out, 2, 2, true));
        assert_eq!(s, "OOOOOOO\nO O O\nO O O \nOOOOOOO\n");
    }

    #[test]
    fn blocked_board_plain() {
        let s = render(|out| write_blocked_board(out, 2, 1, false));
        assert_eq!(s, "\nO O \n");
    }
}
