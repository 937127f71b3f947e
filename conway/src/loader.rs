//! Grid text format
//!
//! One row per line, one character per cell. Two symbols are recognised, one
//! for a live cell and one for a dead cell (`x` and `-` unless configured
//! otherwise). `\r` is ignored and trailing line breaks are dropped, so files
//! written on any platform load the same way.

use crate::config::Settings;
use crate::error::{FormatError, LoadError};
use crate::grid::{EdgePolicy, Grid, TRow};
use crate::patterns;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Dead border around a built-in pattern used as a starting grid.
pub const PATTERN_MARGIN: usize = 8;

/// Characters used for live and dead cells in grid text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Symbols {
    pub live: char,
    pub dead: char,
}

impl Default for Symbols {
    fn default() -> Self {
        Self { live: 'x', dead: '-' }
    }
}

impl Symbols {
    fn cell(&self, ch: char) -> Option<bool> {
        if ch == self.live {
            Some(true)
        } else if ch == self.dead {
            Some(false)
        } else {
            None
        }
    }
}

/// Parse grid text. The first line fixes the width; the first bad line wins.
pub fn parse(text: &str, symbols: &Symbols, edge: EdgePolicy) -> Result<Grid, FormatError> {
    let text = text.replace('\r', "");
    let text = text.trim_end_matches('\n');

    let width = text.split('\n').next().map(|l| l.chars().count()).unwrap_or(0);
    if width == 0 {
        return Err(FormatError::Empty);
    }

    let mut rows: Vec<TRow> = Vec::new();
    for (y, line) in text.split('\n').enumerate() {
        let found = line.chars().count();
        if found != width {
            return Err(FormatError::WidthMismatch { line: y + 1, expected: width, found });
        }

        let row = line
            .chars()
            .enumerate()
            .map(|(x, ch)| {
                symbols
                    .cell(ch)
                    .ok_or(FormatError::InvalidCharacter { ch, row: y + 1, col: x + 1 })
            })
            .collect::<Result<TRow, _>>()?;
        rows.push(row);
    }

    Ok(Grid::from_parts(rows.len(), width, edge, rows))
}

/// Read and parse a grid file.
pub fn load_file(path: &Path, symbols: &Symbols, edge: EdgePolicy) -> Result<Grid, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let grid = parse(&text, symbols, edge)?;
    tracing::info!(
        path = %path.display(),
        height = grid.height(),
        width = grid.width(),
        live = grid.population(),
        "loaded grid"
    );
    Ok(grid)
}

/// Where the first generation comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Seed {
    File(PathBuf),
    Pattern(String),
}

impl Seed {
    pub fn load(&self, settings: &Settings) -> Result<Grid, LoadError> {
        let edge = settings.edge_policy();
        match self {
            Seed::File(path) => load_file(path, &settings.symbols, edge),
            Seed::Pattern(name) => patterns::find(name)
                .map(|p| p.to_grid(PATTERN_MARGIN, edge))
                .ok_or_else(|| LoadError::UnknownPattern(name.clone())),
        }
    }
}
