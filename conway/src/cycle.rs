// cycle.rs - Detect when the simulation starts repeating itself

use crate::grid::Grid;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

const HISTORY: usize = 10;

/// Ring of the last few generation hashes.
#[derive(Debug, Default)]
pub struct CycleDetector {
    grid_history  : [u64; HISTORY],   // Fixed array of recent grid hashes
    history_count : usize,            // Total generations observed
}

pub fn hash_grid(grid: &Grid) -> u64 {
    let mut hasher = DefaultHasher::new();
    grid.rows().hash(&mut hasher);
    hasher.finish()
}

impl CycleDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a generation. Returns the period if the same cells were seen
    /// within the last `HISTORY` generations.
    pub fn observe(&mut self, grid: &Grid) -> Option<usize> {
        let current_hash = hash_grid(grid);
        let seen = self.history_count.min(HISTORY);

        let period = (1..=seen).find(|&back| {
            let slot = (self.history_count - back) % HISTORY;
            self.grid_history[slot] == current_hash
        });

        self.grid_history[self.history_count % HISTORY] = current_hash;   // Circular buffer
        self.history_count += 1;
        period
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::EdgePolicy;
    use crate::patterns;

    #[test]
    fn test_still_life_has_period_one() {
        let block = patterns::find("Block").unwrap().to_grid(1, EdgePolicy::Clip);
        let mut detector = CycleDetector::new();
        assert_eq!(detector.observe(&block), None);
        assert_eq!(detector.observe(&block.evolve()), Some(1));
    }

    #[test]
    fn test_blinker_has_period_two() {
        let mut grid = patterns::find("Blinker").unwrap().to_grid(1, EdgePolicy::Clip);
        let mut detector = CycleDetector::new();
        assert_eq!(detector.observe(&grid), None);
        grid = grid.evolve();
        assert_eq!(detector.observe(&grid), None);
        grid = grid.evolve();
        assert_eq!(detector.observe(&grid), Some(2));
    }

    #[test]
    fn test_fresh_detector_ignores_empty_slots() {
        let mut detector = CycleDetector::new();
        let empty = Grid::dead(2, 2, EdgePolicy::Wrap).unwrap();
        assert_eq!(detector.observe(&empty), None);

        detector.reset();
        assert_eq!(detector.observe(&empty), None);
    }

    #[test]
    fn test_history_is_bounded() {
        let mut detector = CycleDetector::new();
        let mut grid = Grid::dead(1, 12, EdgePolicy::Clip).unwrap();
        grid.set(0, 0, true);
        let first = grid.clone();
        detector.observe(&first);

        for col in 1..12 {
            let mut g = Grid::dead(1, 12, EdgePolicy::Clip).unwrap();
            g.set(0, col, true);
            assert_eq!(detector.observe(&g), None);
        }
        // Eleven generations back is out of reach.
        assert_eq!(detector.observe(&first), None);
    }
}
