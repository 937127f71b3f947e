use crate::grid::{EdgePolicy, Grid};

/// A named shape, as live-cell offsets from its top-left corner.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Block",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
];

/// Case-insensitive lookup by name.
pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

impl Pattern {
    /// Bounding box as (height, width).
    pub fn size(&self) -> (usize, usize) {
        self.cells.iter().fold((0, 0), |(h, w), &(r, c)| (h.max(r + 1), w.max(c + 1)))
    }

    /// Set the pattern's cells alive with its corner at `origin`.
    /// Cells falling off the board are skipped; returns how many were placed.
    pub fn stamp(&self, grid: &mut Grid, origin: (usize, usize)) -> usize {
        self.cells
            .iter()
            .filter(|&&(r, c)| grid.set(origin.0 + r, origin.1 + c, true))
            .count()
    }

    /// A fresh grid holding only this pattern, with `margin` dead cells on every side.
    pub fn to_grid(&self, margin: usize, edge: EdgePolicy) -> Grid {
        let (h, w) = self.size();
        let (height, width) = (h + 2 * margin, w + 2 * margin);
        let mut grid = Grid::from_parts(height, width, edge, vec![vec![false; width]; height]);
        self.stamp(&mut grid, (margin, margin));
        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_is_case_insensitive() {
        assert_eq!(find("glider").map(|p| p.name), Some("Glider"));
        assert_eq!(find("R-PENTOMINO").map(|p| p.name), Some("R-pentomino"));
        assert!(find("gosper").is_none());
    }

    #[test]
    fn test_to_grid_places_every_cell() {
        for pattern in PATTERNS {
            let grid = pattern.to_grid(2, EdgePolicy::Clip);
            let (h, w) = pattern.size();
            assert_eq!(grid.height(), h + 4, "{}", pattern.name);
            assert_eq!(grid.width(), w + 4, "{}", pattern.name);
            assert_eq!(grid.population(), pattern.cells.len(), "{}", pattern.name);
        }
    }

    #[test]
    fn test_stamp_skips_off_board_cells() {
        let mut grid = Grid::dead(3, 3, EdgePolicy::Wrap).unwrap();
        let placed = find("Blinker").unwrap().stamp(&mut grid, (2, 1));
        assert_eq!(placed, 2);
        assert_eq!(grid.population(), 2);
    }

    #[test]
    fn test_glider_returns_shifted_after_four_generations() {
        let glider = find("Glider").unwrap();
        let start = glider.to_grid(3, EdgePolicy::Clip);
        let mut after = start.clone();
        for _ in 0..4 {
            after = after.evolve();
        }

        let mut expected = Grid::dead(start.height(), start.width(), EdgePolicy::Clip).unwrap();
        glider.stamp(&mut expected, (4, 4));
        assert_eq!(after, expected);
    }

    #[test]
    fn test_oscillators_have_period_two() {
        for name in ["Blinker", "Toad", "Beacon"] {
            let grid = find(name).unwrap().to_grid(2, EdgePolicy::Clip);
            let once = grid.evolve();
            assert_ne!(once, grid, "{name}");
            assert_eq!(once.evolve(), grid, "{name}");
        }
    }
}
