//! Conway's Game of Life on a finite board, played in the terminal.
//!
//! A [`Grid`] is loaded from text, stepped with [`evolve`] under a
//! wrap-around or clipped [`EdgePolicy`], and drawn frame by frame by the
//! [`Driver`].

pub mod config;
pub mod cycle;
pub mod driver;
pub mod error;
pub mod evolve;
pub mod grid;
pub mod loader;
pub mod patterns;
pub mod render;
pub mod terminal;

pub use config::{EdgeSetting, Settings, GENERATION_LIMIT};
pub use cycle::CycleDetector;
pub use driver::Driver;
pub use error::{CgolError, ConfigError, FormatError, GridError, LoadError, Result};
pub use evolve::{evolve, live_neighbors, neighbors, next_state};
pub use grid::{EdgePolicy, Grid};
pub use loader::{load_file, parse, Seed, Symbols};
pub use render::{render, render_lines, RenderStyle};
