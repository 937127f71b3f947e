// main.rs - Windowed view of a Game of Life run
// Plays the same generations as the terminal version, with coloured cells

use cgol::{CycleDetector, EdgeSetting, Grid, Seed, Settings, GENERATION_LIMIT};
use clap::Parser;
use eframe::egui;
use egui::Color32;
use std::error::Error;
use std::path::PathBuf;
use std::process;
use std::time::{Duration, Instant};

mod ui;

/// Conway's Game of Life in a window
#[derive(Parser, Debug)]
#[command(name = "grid_display")]
struct Args {
    /// Grid file: one row per line, `x` for live cells and `-` for dead ones
    #[arg(default_value = "grid.txt")]
    grid: PathBuf,

    /// Start from a built-in pattern instead of a grid file
    #[arg(long)]
    pattern: Option<String>,

    /// TOML settings file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Edge behaviour, overrides the settings file
    #[arg(long, value_enum)]
    edge: Option<EdgeSetting>,
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter("grid_display=info,cgol=info")
        .init();

    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
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
    let viewer = GridViewer::new(grid, &settings);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 950.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Box::new(viewer)),
    )?;
    Ok(())
}

/// Read-only player: one generation per interval until the limit.
pub struct GridViewer {
    pub grid            : Grid,
    pub generation      : u32,
    pub last_update     : Instant,
    pub update_interval : Duration,
    pub live_color      : Color32,
    pub dead_color      : Color32,
    cycles              : CycleDetector,
    pub period          : Option<usize>,   // Set once the grid starts repeating
}

impl GridViewer {
    pub fn new(grid: Grid, settings: &Settings) -> Self {
        let mut cycles = CycleDetector::new();
        cycles.observe(&grid);

        Self {
            grid,
            generation      : 0,
            last_update     : Instant::now(),
            update_interval : settings.interval(),
            live_color      : Color32::from_rgb(0, 200, 0),
            dead_color      : Color32::from_rgb(40, 40, 40),
            cycles,
            period          : None,
        }
    }

    pub fn finished(&self) -> bool {
        self.generation + 1 >= GENERATION_LIMIT
    }

    pub fn update_generation(&mut self) {
        if self.finished() {
            return;
        }

        self.grid = self.grid.evolve();
        self.generation += 1;

        if self.period.is_none() {
            self.period = self.cycles.observe(&self.grid);
            if let Some(period) = self.period {
                tracing::info!(generation = self.generation, period, "grid is repeating");
            }
        }
    }
}
