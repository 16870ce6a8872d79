//! Command-line options and the text report they select.

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use gridmaze_core::{Maze, Point};
use gridmaze_paths::{Endpoints, solve};

use crate::render;

/// Find the shortest path through a maze of 0 (open) and 1 (blocked) cells.
///
/// By default the path runs from the top-left to the bottom-right corner.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Add borders and pretty print
    #[arg(short, long)]
    pub borders: bool,

    /// Print shortest solution steps
    #[arg(short, long)]
    pub steps: bool,

    /// Print matrix after reading
    #[arg(short, long)]
    pub matrix: bool,

    /// Print solution with path
    #[arg(short, long)]
    pub path: bool,

    /// Read maze from INFILE (default stdin)
    #[arg(short, long, value_name = "INFILE")]
    pub input: Option<PathBuf>,

    /// Write output to OUTFILE (default stdout)
    #[arg(short, long, value_name = "OUTFILE")]
    pub output: Option<PathBuf>,

    /// Start cell instead of the top-left corner
    #[arg(long, value_name = "X,Y", value_parser = parse_point, requires = "destination")]
    pub origin: Option<Point>,

    /// Goal cell instead of the bottom-right corner
    #[arg(long, value_name = "X,Y", value_parser = parse_point, requires = "origin")]
    pub destination: Option<Point>,

    /// Print the solution as JSON instead of text
    #[arg(long, conflicts_with_all = ["borders", "steps", "matrix", "path"])]
    pub json: bool,

    /// More log output on stderr (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            borders: self.borders,
            steps: self.steps,
            matrix: self.matrix,
            path: self.path,
        }
    }

    /// Explicit endpoints, if both were given.
    pub fn endpoints(&self) -> Option<Endpoints> {
        Some(Endpoints::new(self.origin?, self.destination?))
    }

    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

/// Which parts of the text report to print.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub borders: bool,
    pub steps: bool,
    pub matrix: bool,
    pub path: bool,
}

/// Parse `X,Y` into a point.
pub fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got `{s}`"))?;
    let x = x
        .trim()
        .parse()
        .map_err(|e| format!("bad x coordinate `{x}`: {e}"))?;
    let y = y
        .trim()
        .parse()
        .map_err(|e| format!("bad y coordinate `{y}`: {e}"))?;
    Ok(Point::new(x, y))
}

/// Solve `maze` and write the text report chosen by `opts`.
///
/// `No solution.` is printed whenever the maze has open cells but no path;
/// for a maze without open cells it is only printed together with the step
/// count.
pub fn report(
    out: &mut impl Write,
    maze: &Maze,
    endpoints: Option<Endpoints>,
    opts: RenderOptions,
) -> anyhow::Result<()> {
    if maze.open_count() == 0 {
        log::info!("maze {}x{} has no open cells", maze.width(), maze.height());
        if opts.borders || opts.matrix {
            render::write_blocked_board(out, maze.width(), maze.height(), opts.borders)?;
        }
        if opts.steps {
            writeln!(out, "No solution.")?;
        }
        return Ok(());
    }

    let solution = solve(maze, endpoints)?;
    let ends_open = solution
        .endpoints()
        .is_some_and(|e| maze.is_open(e.origin) && maze.is_open(e.destination));
    if !ends_open {
        writeln!(out, "No solution.")?;
        return Ok(());
    }

    if opts.matrix {
        render::write_matrix(out, maze)?;
    }

    let Some(steps) = solution.steps() else {
        writeln!(out, "No solution.")?;
        return Ok(());
    };
    if opts.steps {
        writeln!(out, "Solution in {steps} steps.")?;
    }
    if opts.path || opts.borders {
        render::write_solution_board(out, &solution, opts.path)?;
    }
    Ok(())
}

/// Solve `maze` and write the [`Solution`](gridmaze_paths::Solution) as
/// pretty-printed JSON.
pub fn report_json(
    out: &mut impl Write,
    maze: &Maze,
    endpoints: Option<Endpoints>,
) -> anyhow::Result<()> {
    let solution = solve(maze, endpoints)?;
    serde_json::to_writer_pretty(&mut *out, &solution)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str, opts: RenderOptions) -> String {
        let mut buf = Vec::new();
        report(&mut buf, &Maze::parse(text), None, opts).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("mazesolve").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn parse_short_flags() {
        let a = args(&["-bsmp", "-i", "in.txt", "-o", "out.txt"]);
        assert_eq!(
            a.render_options(),
            RenderOptions {
                borders: true,
                steps: true,
                matrix: true,
                path: true
            }
        );
        assert_eq!(a.input, Some(PathBuf::from("in.txt")));
        assert_eq!(a.output, Some(PathBuf::from("out.txt")));
        assert_eq!(a.endpoints(), None);
        assert_eq!(a.log_level(), log::LevelFilter::Warn);
    }

    #[test]
    fn parse_endpoints_and_verbosity() {
        let a = args(&["--origin", "1,2", "--destination", "3, 4", "-vv"]);
        assert_eq!(
            a.endpoints(),
            Some(Endpoints::new(Point::new(1, 2), Point::new(3, 4)))
        );
        assert_eq!(a.log_level(), log::LevelFilter::Debug);
    }

    #[test]
    fn endpoints_come_in_pairs() {
        let argv = ["mazesolve", "--origin", "0,0"];
        assert!(Args::try_parse_from(argv).is_err());
    }

    #[test]
    fn json_excludes_text_flags() {
        assert!(Args::try_parse_from(["mazesolve", "--json", "-s"]).is_err());
        assert!(args(&["--json"]).json);
    }

    #[test]
    fn point_parsing() {
        assert_eq!(parse_point("4,5"), Ok(Point::new(4, 5)));
        assert_eq!(parse_point(" 4 , 5 "), Ok(Point::new(4, 5)));
        assert!(parse_point("4").is_err());
        assert!(parse_point("a,1").is_err());
    }

    #[test]
    fn steps_only() {
        let opts = RenderOptions {
            steps: true,
            ..Default::default()
        };
        assert_eq!(run("0 0 1\n0 1 0\n0 0 0\n", opts), "Solution in 5 steps.\n");
    }

    #[test]
    fn unsolvable_prints_no_solution_regardless_of_flags() {
        assert_eq!(run("0 1 0\n", RenderOptions::default()), "No solution.\n");
        // Blocked corner: the matrix is not printed either.
        let opts = RenderOptions {
            matrix: true,
            ..Default::default()
        };
        assert_eq!(run("1 0\n0 0\n", opts), "No solution.\n");
    }

    #[test]
    fn matrix_then_no_solution_when_unreachable() {
        let opts = RenderOptions {
            matrix: true,
            ..Default::default()
        };
        assert_eq!(
            run("0 1 0\n", opts),
            "Read this matrix:\n0 1 0 \nNo solution.\n"
        );
    }

    #[test]
    fn steps_and_board() {
        let opts = RenderOptions {
            steps: true,
            path: true,
            ..Default::default()
        };
        assert_eq!(run("0\n", opts), "Solution in 1 steps.\nOOOOO\n+ + +\nOOOOO\n");
    }

    #[test]
    fn no_open_cells() {
        assert_eq!(run("1 1\n", RenderOptions::default()), "");
        let opts = RenderOptions {
            steps: true,
            borders: true,
            ..Default::default()
        };
        assert_eq!(run("1 1\n", opts), "OOOOOOO\nO O \nOOOOOOO\nNo solution.\n");
    }

    #[test]
    fn explicit_blocked_endpoint_is_an_error() {
        let mut buf = Vec::new();
        let ends = Endpoints::new(Point::new(0, 0), Point::new(1, 0));
        let err = report(&mut buf, &Maze::parse("0 1\n"), Some(ends), RenderOptions::default());
        assert!(err.is_err());
        assert!(buf.is_empty());
    }

    #[test]
    fn json_report() {
        let mut buf = Vec::new();
        report_json(&mut buf, &Maze::parse("0 0\n"), None).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(v["size"], serde_json::json!({"x": 2, "y": 1}));
        assert_eq!(
            v["outcome"]["Found"]["cells"],
            serde_json::json!([{"x": 0, "y": 0}, {"x": 1, "y": 0}])
        );
    }
}
