//! `mazesolve`: solve a 0/1 text maze read from a file or stdin.

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

use anyhow::Context;
use clap::Parser;
use gridmaze_core::Maze;
use mazesolve_lib::{Args, report, report_json};

fn read_maze(input: Option<&Path>) -> anyhow::Result<Maze> {
    let bytes = match input {
        Some(path) => {
            std::fs::read(path).with_context(|| format!("cannot read {}", path.display()))?
        }
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("cannot read stdin")?;
            buf
        }
    };
    let maze = Maze::parse(&String::from_utf8_lossy(&bytes));
    log::info!(
        "read {}x{} maze with {} open cells",
        maze.width(),
        maze.height(),
        maze.open_count()
    );
    Ok(maze)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    let maze = read_maze(args.input.as_deref())?;

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("cannot create {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    if args.json {
        report_json(&mut out, &maze, args.endpoints())?;
    } else {
        report(&mut out, &maze, args.endpoints(), args.render_options())?;
    }
    out.flush().context("cannot flush output")?;
    Ok(())
}
