// evolve.rs - One generation step for Conway's Game of Life
//
// Every cell of the next generation is computed from the *input* grid only;
// the result is a freshly allocated Grid and the input is never touched.

use crate::grid::{EdgePolicy, Grid, TRow};

const OFFSETS: [(isize, isize); 8] = [
    (-1,-1),(-1, 0),(-1, 1),
    ( 0,-1),        ( 0, 1),
    ( 1,-1),( 1, 0),( 1, 1),
];

/// Neighbor positions of `(row, col)` in row-major offset order.
///
/// Under `Wrap` there are always 8 positions, and on boards with a side of 1
/// or 2 the same cell can appear more than once. Under `Clip` positions off
/// the board are dropped, leaving 3 for a corner and 5 for an edge cell.
/// A board with no rows or no columns has no positions at all.
pub fn neighbors(row: usize, col: usize, height: usize, width: usize, edge: EdgePolicy) -> Vec<(usize, usize)> {
    if height == 0 || width == 0 {
        return Vec::new();
    }

    let (h, w) = (height as isize, width as isize);
    let mut out = Vec::with_capacity(OFFSETS.len());

    for &(dr, dc) in &OFFSETS {
        let nr = row as isize + dr;
        let nc = col as isize + dc;
        match edge {
            EdgePolicy::Wrap => {
                out.push((nr.rem_euclid(h) as usize, nc.rem_euclid(w) as usize));
            }
            EdgePolicy::Clip => {
                if (0..h).contains(&nr) && (0..w).contains(&nc) {
                    out.push((nr as usize, nc as usize));
                }
            }
        }
    }
    out
}

/// Live cells among the neighbor positions of `(row, col)`, duplicates included.
pub fn live_neighbors(grid: &Grid, row: usize, col: usize) -> usize {
    neighbors(row, col, grid.height(), grid.width(), grid.edge())
        .into_iter()
        .filter(|&(nr, nc)| grid.get(nr, nc).unwrap_or(false))
        .count()
}

/// B3/S23.
pub fn next_state(alive: bool, count: usize) -> bool {
    match (alive, count) {
        (true, 2) | (true, 3) => true,   // Survival
        (false, 3)            => true,   // Birth
        _                     => false,  // Death or stays dead
    }
}

/// Compute the next generation. Same size and edge policy as the input.
pub fn evolve(grid: &Grid) -> Grid {
    let cells: Vec<TRow> = grid
        .rows()
        .iter()
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(col, &alive)| next_state(alive, live_neighbors(grid, row, col)))
                .collect()
        })
        .collect();

    Grid::from_parts(grid.height(), grid.width(), grid.edge(), cells)
}

impl Grid {
    pub fn evolve(&self) -> Grid {
        evolve(self)
    }
}
