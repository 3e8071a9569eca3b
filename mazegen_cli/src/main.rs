//! Maze image generator.
//!
//! Examples:
//!   mazegen 25
//!   mazegen 25 --fill 0.35 --seed 7 --out maze.png
//!   mazegen 41 --solution --out solved.png
//!   mazegen 15 --json maze.json
//!
//! Generates a square maze with exactly one boundary-to-boundary solution
//! and writes it as a PNG (plus an optional JSON dump of the grid and
//! paths). Unseeded runs pick a seed from the clock and log it, so any
//! maze can be regenerated later.

mod render;

use std::path::PathBuf;
use std::process;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use tracing::info;

use mazegen::maze::{Generator, MazeConfig, MazeError};
use render::RenderOptions;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Maze(#[from] MazeError),
    #[error("image write failed: {0}")]
    Image(#[from] image::ImageError),
    #[error("json write failed: {0}")]
    Json(#[from] std::io::Error),
}

struct Options {
    cfg: MazeConfig,
    render: RenderOptions,
    out: PathBuf,
    json: Option<PathBuf>,
}

fn usage() -> ! {
    eprintln!("Usage: mazegen <size> [options]\n");
    eprintln!("Options:");
    eprintln!("  --ratio <float>    Minimum solution length as a multiple of size (default 3.0)");
    eprintln!("  --fill <float>     Route-cell fraction to reach, in [0,1) (default 0.3)");
    eprintln!("  --seed <u64>       Fixed seed for reproducible mazes (default: from clock)");
    eprintln!("  --out <path>       Output image path (default maze.png)");
    eprintln!("  --solution         Highlight the solution path in the image");
    eprintln!("  --json <path>      Also dump grid and paths as JSON");
    eprintln!("  --tile-px <int>    Pixels per cell (default 20)");
    eprintln!("  --no-round         Disable corner rounding");
    process::exit(1);
}

fn parse_args(args: &[String]) -> Result<Options, CliError> {
    if args.is_empty() || args[0] == "-h" || args[0] == "--help" {
        usage();
    }

    let size: u32 = args[0]
        .parse()
        .map_err(|_| CliError::Usage(format!("size must be an integer, got '{}'", args[0])))?;
    let mut cfg = MazeConfig::new(size);
    let mut render = RenderOptions::default();
    let mut out = PathBuf::from("maze.png");
    let mut json = None;

    let mut it = args[1..].iter();
    while let Some(flag) = it.next() {
        match flag.as_str() {
            "--ratio" => cfg.path_length_ratio = parse_value(flag, it.next())?,
            "--fill" => cfg.fill_threshold = parse_value(flag, it.next())?,
            "--seed" => cfg.seed = Some(parse_value(flag, it.next())?),
            "--out" => out = PathBuf::from(required(flag, it.next())?),
            "--json" => json = Some(PathBuf::from(required(flag, it.next())?)),
            "--tile-px" => render.tile_px = parse_value(flag, it.next())?,
            "--solution" => render.solution_color = Some([230, 60, 60, 255]),
            "--no-round" => render.corner_radius = 0,
            other => return Err(CliError::Usage(format!("unknown option '{other}'"))),
        }
    }

    if cfg.seed.is_none() {
        cfg.seed = Some(clock_seed());
    }

    Ok(Options {
        cfg,
        render,
        out,
        json,
    })
}

fn required<'a>(flag: &str, value: Option<&'a String>) -> Result<&'a String, CliError> {
    value.ok_or_else(|| CliError::Usage(format!("{flag} needs a value")))
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> Result<T, CliError> {
    let raw = required(flag, value)?;
    raw.parse()
        .map_err(|_| CliError::Usage(format!("bad value '{raw}' for {flag}")))
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}

fn run(args: &[String]) -> Result<(), CliError> {
    let opts = parse_args(args)?;

    let mut gen = Generator::new(opts.cfg)?;
    let started = Instant::now();
    let maze = gen.generate()?;
    info!(
        size = opts.cfg.size,
        seed = opts.cfg.seed,
        solution_edges = maze.solution.len() - 1,
        branches = maze.branches.len(),
        route_fraction = maze.grid.route_fraction(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "maze generated"
    );

    if let Some(json_path) = &opts.json {
        let file = std::fs::File::create(json_path)?;
        serde_json::to_writer_pretty(file, &maze).map_err(std::io::Error::from)?;
        info!(path = %json_path.display(), "json written");
    }

    render::save(&maze, &opts.out, &opts.render)?;
    info!(path = %opts.out.display(), "image written");
    Ok(())
}

fn main() {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(e) = run(&args) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
