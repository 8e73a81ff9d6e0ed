use proptest::collection::vec;
use proptest::prelude::*;

use lifecycle::engine::History;
use lifecycle::engine::is_terminal;
use lifecycle::grid::Dimensions;
use lifecycle::grid::Grid;

/// Random grids of up to 16x16 cells
fn grids() -> impl Strategy<Value = Grid> {
    (1usize..=16, 1usize..=16).prop_flat_map(|(rows, cols)| {
        vec(any::<bool>(), rows * cols).prop_map(move |cells| {
            let dims = Dimensions::new(rows, cols).unwrap();
            let live = cells
                .into_iter()
                .enumerate()
                .filter(|&(_, alive)| alive)
                .map(|(i, _)| (i / cols, i % cols));

            Grid::from_cells(dims, live)
        })
    })
}

proptest! {
    #[test]
    fn step_is_deterministic(grid in grids()) {
        let a = grid.step();
        let b = grid.clone().step();

        prop_assert_eq!(a.fingerprint(), b.fingerprint());
        prop_assert_eq!(a, b);
    }

    #[test]
    fn step_keeps_dimensions(grid in grids()) {
        prop_assert_eq!(grid.step().dimensions(), grid.dimensions());
    }

    #[test]
    fn step_leaves_input_alone(grid in grids()) {
        let before = grid.clone();
        let _ = grid.step();

        prop_assert_eq!(grid, before);
    }

    #[test]
    fn neighbors_are_bounded(grid in grids()) {
        let (rows, cols) = (grid.rows(), grid.cols());

        for row in 0..rows {
            for col in 0..cols {
                let n = grid.neighbors(row, col) as usize;

                // Cells on an edge have fewer neighbors to begin with
                let r = 1 + usize::from(row > 0) + usize::from(row + 1 < rows);
                let c = 1 + usize::from(col > 0) + usize::from(col + 1 < cols);

                prop_assert!(n < r * c);
            }
        }
    }

    #[test]
    fn empty_grids_are_terminal(rows in 1usize..64, cols in 1usize..64) {
        let grid = Grid::new(Dimensions::new(rows, cols).unwrap());

        prop_assert!(is_terminal(&grid, &History::new()));
        prop_assert!(grid.step().is_empty());
    }

    #[test]
    fn recorded_grids_are_terminal(grid in grids()) {
        let mut history = History::new();
        history.record(grid.fingerprint(), 0);

        prop_assert!(is_terminal(&grid, &history));
    }
}
