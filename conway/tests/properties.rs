//! Property tests for the grid engine
//!
//! Random boards of every small shape, under both edge policies.

use cgol::{evolve, neighbors, parse, render, EdgePolicy, Grid, RenderStyle, Symbols};
use proptest::prelude::*;

fn edge_policy() -> impl Strategy<Value = EdgePolicy> {
    prop_oneof![Just(EdgePolicy::Wrap), Just(EdgePolicy::Clip)]
}

fn any_grid() -> impl Strategy<Value = Grid> {
    (1usize..9, 1usize..9, edge_policy()).prop_flat_map(|(height, width, edge)| {
        prop::collection::vec(prop::collection::vec(any::<bool>(), width), height)
            .prop_map(move |rows| Grid::from_rows(rows, edge).unwrap())
    })
}

proptest! {
    #[test]
    fn evolve_keeps_shape_and_input(grid in any_grid()) {
        let before = grid.clone();
        let next = evolve(&grid);
        prop_assert_eq!(next.height(), grid.height());
        prop_assert_eq!(next.width(), grid.width());
        prop_assert_eq!(next.edge(), grid.edge());
        prop_assert_eq!(grid, before);
    }

    #[test]
    fn neighbor_positions_stay_on_board(
        height in 1usize..9,
        width in 1usize..9,
        edge in edge_policy(),
        seed in any::<(usize, usize)>(),
    ) {
        let (row, col) = (seed.0 % height, seed.1 % width);
        let list = neighbors(row, col, height, width, edge);

        match edge {
            EdgePolicy::Wrap => {
                prop_assert_eq!(list.len(), 8);
            }
            EdgePolicy::Clip => {
                let rows = (row > 0) as usize + 1 + (row + 1 < height) as usize;
                let cols = (col > 0) as usize + 1 + (col + 1 < width) as usize;
                prop_assert_eq!(list.len(), rows * cols - 1);
                prop_assert!(!list.contains(&(row, col)));
            }
        }
        prop_assert!(list.iter().all(|&(r, c)| r < height && c < width));
    }

    #[test]
    fn plain_render_parses_back(grid in any_grid()) {
        let symbols = Symbols::default();
        let text = render(&grid, &RenderStyle::plain(&symbols));
        let parsed = parse(&text, &symbols, grid.edge()).unwrap();
        prop_assert_eq!(parsed, grid);
    }

    #[test]
    fn dead_board_stays_dead(height in 1usize..9, width in 1usize..9, edge in edge_policy()) {
        let grid = Grid::dead(height, width, edge).unwrap();
        prop_assert_eq!(evolve(&grid), grid);
    }
}
