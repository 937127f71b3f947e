// main.rs - Conway's Game of Life in the terminal

use cgol::{terminal, Driver, EdgeSetting, Result, Seed, Settings, GENERATION_LIMIT};
use clap::Parser;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process;

/// Conway's Game of Life, drawn in the terminal
#[derive(Parser, Debug)]
#[command(name = "cgol")]
#[command(about = "Play Conway's Game of Life from a grid file")]
struct Args {
    /// Grid file: one row per line, `x` for live cells and `-` for dead ones
    #[arg(default_value = "grid.txt")]
    grid: PathBuf,

    /// Start from a built-in pattern (block, blinker, toad, beacon, glider, r-pentomino)
    #[arg(long)]
    pattern: Option<String>,

    /// TOML settings file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Edge behaviour, overrides the settings file
    #[arg(long, value_enum)]
    edge: Option<EdgeSetting>,

    /// Debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(if args.verbose { "cgol=debug" } else { "cgol=info" })
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let mut settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if let Some(edge) = args.edge {
        settings.edge = edge;
    }

    let seed = match args.pattern {
        Some(name) => Seed::Pattern(name),
        None => Seed::File(args.grid),
    };
    let grid = match seed.load(&settings) {
        Ok(grid) => grid,
        Err(e) if settings.abort_on_malformed => {
            tracing::error!("[Error] {e}");
            process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    if let Err(e) = terminal::enable_ansi() {
        tracing::warn!("could not enable ANSI escapes: {e}");
    }

    let stdout = io::stdout();
    let mut driver = Driver::new(BufWriter::new(stdout.lock()), &settings);
    driver.run(grid, GENERATION_LIMIT)?;
    Ok(())
}
