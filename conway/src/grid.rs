// grid.rs - Grid types for Conway's Game of Life

use crate::error::GridError;

pub type TRow = Vec<bool>;

/// How neighbor coordinates behave past the edge of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EdgePolicy {
    /// Toroidal: coordinates wrap modulo height/width.
    #[default]
    Wrap,
    /// Out-of-bounds neighbors are dropped.
    Clip,
}

/// Rectangular board of cells, `true` = alive.
///
/// The shape is fixed at construction: `height >= 1`, `width >= 1`, and every
/// row holds exactly `width` cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    height : usize,
    width  : usize,
    edge   : EdgePolicy,
    cells  : Vec<TRow>,
}

impl Grid {
    /// Build a grid from rows, checking that it is non-empty and rectangular.
    pub fn from_rows(rows: Vec<TRow>, edge: EdgePolicy) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(GridError::Empty { height, width });
        }

        if let Some((row, found)) = rows
            .iter()
            .enumerate()
            .find(|(_, r)| r.len() != width)
            .map(|(i, r)| (i, r.len()))
        {
            return Err(GridError::Ragged { row, expected: width, found });
        }

        Ok(Self { height, width, edge, cells: rows })
    }

    /// All-dead grid of the given size.
    pub fn dead(height: usize, width: usize, edge: EdgePolicy) -> Result<Self, GridError> {
        Self::from_rows(vec![vec![false; width]; height], edge)
    }

    pub fn height(&self) -> usize { self.height }
    pub fn width(&self) -> usize { self.width }
    pub fn edge(&self) -> EdgePolicy { self.edge }

    /// Same cells under another edge policy.
    pub fn with_edge(mut self, edge: EdgePolicy) -> Self {
        self.edge = edge;
        self
    }

    /// Cell state, or `None` outside the board.
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Set a cell. Returns `false` (and changes nothing) outside the board.
    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> bool {
        match self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) => { *cell = alive; true }
            None       => false,
        }
    }

    pub fn rows(&self) -> &[TRow] {
        &self.cells
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().map(|r| r.iter().filter(|&&c| c).count()).sum()
    }

    // Crate-internal constructor for values whose shape is already known good.
    pub(crate) fn from_parts(height: usize, width: usize, edge: EdgePolicy, cells: Vec<TRow>) -> Self {
        debug_assert!(cells.len() == height && cells.iter().all(|r| r.len() == width));
        Self { height, width, edge, cells }
    }
}
