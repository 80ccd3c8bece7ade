use broadside::{validate_layout, Grid, Orientation, Outcome, ShipSpec, GRID_SIZE};
use proptest::prelude::*;

const SIZE: usize = GRID_SIZE as usize;

fn placement(len: usize) -> impl Strategy<Value = ShipSpec> {
    (any::<bool>(), 0..SIZE, 0..SIZE).prop_map(move |(horizontal, row, col)| {
        if horizontal {
            ShipSpec::new(row, col.min(SIZE - len), Orientation::Horizontal, len)
        } else {
            ShipSpec::new(row.min(SIZE - len), col, Orientation::Vertical, len)
        }
    })
}

/// True when any two cells of the specs coincide or touch side-on.
fn touching(a: &ShipSpec, b: &ShipSpec) -> bool {
    a.cells().any(|(ar, ac)| {
        b.cells()
            .any(|(br, bc)| ar.abs_diff(br) + ac.abs_diff(bc) < 2)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Any in-bounds, non-touching pair of straight ships with the right
    /// lengths validates, wherever it sits.
    #[test]
    fn straight_non_touching_fleets_validate(a in placement(3), b in placement(4)) {
        prop_assume!(!touching(&a, &b));
        let grid = Grid::with_fleet(&[a, b]).unwrap();
        prop_assert!(validate_layout(&grid, &[3, 4]));
        prop_assert!(validate_layout(&grid, &[4, 3]));
    }

    /// Toggling any cell twice restores the grid exactly.
    #[test]
    fn double_toggle_is_identity(
        row in 0..SIZE,
        col in 0..SIZE,
        seeds in proptest::collection::vec((0..SIZE, 0..SIZE), 0..12),
    ) {
        let mut grid = Grid::new();
        for (r, c) in seeds {
            grid = grid.toggled(r, c).unwrap();
        }
        let back = grid.toggled(row, col).unwrap().toggled(row, col).unwrap();
        prop_assert_eq!(back, grid);
    }

    /// A second attack on one cell reports `AlreadyAttacked` and leaves
    /// every flag unchanged.
    #[test]
    fn fire_is_idempotent(
        row in 0..SIZE,
        col in 0..SIZE,
        seeds in proptest::collection::vec((0..SIZE, 0..SIZE), 0..12),
    ) {
        let mut grid = Grid::new();
        for (r, c) in seeds {
            grid = grid.toggled(r, c).unwrap();
        }
        let (once, _) = grid.fire(row, col).unwrap();
        let (twice, outcome) = once.fire(row, col).unwrap();
        prop_assert_eq!(outcome, Outcome::AlreadyAttacked);
        prop_assert_eq!(twice, once);
    }
}
