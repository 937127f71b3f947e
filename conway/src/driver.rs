// driver.rs - The generation loop: draw, step, pause, repeat

use crate::config::Settings;
use crate::cycle::CycleDetector;
use crate::grid::Grid;
use crate::render::{render_lines, RenderStyle};
use crate::terminal;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

pub struct Driver<W: Write> {
    out            : W,
    style          : RenderStyle,
    interval       : Duration,
    cycles         : CycleDetector,
    cycle_reported : bool,
}

impl<W: Write> Driver<W> {
    pub fn new(out: W, settings: &Settings) -> Self {
        Self {
            out,
            style          : settings.style.clone(),
            interval       : settings.interval(),
            cycles         : CycleDetector::new(),
            cycle_reported : false,
        }
    }

    /// Show `generations` frames, starting with `grid` itself as generation 0,
    /// and return the last grid shown.
    pub fn run(&mut self, mut grid: Grid, generations: u32) -> io::Result<Grid> {
        tracing::info!(generations, edge = ?grid.edge(), "simulation starting");

        for generation in 0..generations {
            if generation > 0 {
                grid = grid.evolve();
            }
            self.draw(&grid, generation)?;
            self.track_cycle(&grid, generation);

            if generation + 1 < generations && !self.interval.is_zero() {
                thread::sleep(self.interval);
            }
        }

        tracing::info!(live = grid.population(), "simulation finished");
        Ok(grid)
    }

    fn draw(&mut self, grid: &Grid, generation: u32) -> io::Result<()> {
        terminal::clear(&mut self.out)?;
        writeln!(self.out, "Generation: {generation}")?;
        for line in render_lines(grid, &self.style) {
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()
    }

    fn track_cycle(&mut self, grid: &Grid, generation: u32) {
        tracing::debug!(generation, live = grid.population(), "generation drawn");
        if let Some(period) = self.cycles.observe(grid) {
            if !self.cycle_reported {
                tracing::info!(generation, period, "grid is repeating");
                self.cycle_reported = true;
            }
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
