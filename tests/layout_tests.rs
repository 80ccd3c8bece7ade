use broadside::{validate_layout, Grid};

fn grid_of(cells: &[(usize, usize)]) -> Grid {
    let mut grid = Grid::new();
    for &(row, col) in cells {
        grid = grid.toggled(row, col).unwrap();
    }
    grid
}

#[test]
fn test_empty_grid_matches_only_an_empty_requirement() {
    let grid = Grid::new();
    assert!(!validate_layout(&grid, &[3, 4]));
    assert!(validate_layout(&grid, &[]));
}

#[test]
fn test_sample_fleet_is_valid() {
    // 3 across row 3, 4 down column H
    let grid = grid_of(&[(2, 3), (2, 4), (2, 5), (6, 7), (7, 7), (8, 7), (9, 7)]);
    assert!(validate_layout(&grid, &[3, 4]));
}

#[test]
fn test_required_length_order_does_not_matter() {
    let grid = grid_of(&[(2, 3), (2, 4), (2, 5), (6, 7), (7, 7), (8, 7), (9, 7)]);
    assert!(validate_layout(&grid, &[4, 3]));
}

#[test]
fn test_shortened_ship_changes_the_multiset() {
    // one cell removed from the 4-ship leaves lengths 3 and 3
    let grid = grid_of(&[(2, 3), (2, 4), (2, 5), (6, 7), (7, 7), (8, 7)]);
    assert!(!validate_layout(&grid, &[3, 4]));
}

#[test]
fn test_bent_ship_is_rejected() {
    // three across with one cell hanging below the end, plus a straight 3
    let grid = grid_of(&[(2, 3), (2, 4), (2, 5), (3, 5), (6, 7), (7, 7), (8, 7)]);
    assert!(!validate_layout(&grid, &[3, 4]));
}

#[test]
fn test_block_is_rejected() {
    // a 2x2 block is neither all-same-row nor all-same-column
    let grid = grid_of(&[(4, 4), (4, 5), (5, 4), (5, 5)]);
    assert!(!validate_layout(&grid, &[4]));
}

#[test]
fn test_diagonal_contact_keeps_ships_separate() {
    // the 4-ship's head touches the 3-ship's tail corner to corner
    let grid = grid_of(&[(0, 0), (0, 1), (0, 2), (1, 3), (2, 3), (3, 3), (4, 3)]);
    assert!(validate_layout(&grid, &[3, 4]));
}

#[test]
fn test_orthogonal_contact_merges_ships() {
    // the same two lengths, but touching side-on they fuse into one bent
    // component
    let grid = grid_of(&[(0, 0), (0, 1), (0, 2), (1, 2), (2, 2), (3, 2), (4, 2)]);
    assert!(!validate_layout(&grid, &[3, 4]));
}

#[test]
fn test_collinear_contact_merges_into_one_longer_ship() {
    // a 3 and a 4 laid end to end on one row read as a single 7
    let grid = grid_of(&[(5, 0), (5, 1), (5, 2), (5, 3), (5, 4), (5, 5), (5, 6)]);
    assert!(!validate_layout(&grid, &[3, 4]));
    assert!(validate_layout(&grid, &[7]));
}

#[test]
fn test_duplicate_required_lengths() {
    let pair_of_threes = grid_of(&[(0, 0), (0, 1), (0, 2), (5, 0), (5, 1), (5, 2)]);
    assert!(validate_layout(&pair_of_threes, &[3, 3]));
    assert!(!validate_layout(&pair_of_threes, &[3, 4]));

    let three_and_four = grid_of(&[(0, 0), (0, 1), (0, 2), (5, 0), (5, 1), (5, 2), (5, 3)]);
    assert!(!validate_layout(&three_and_four, &[3, 3]));
}

#[test]
fn test_single_cells_are_length_one_ships() {
    let lone = grid_of(&[(9, 9)]);
    assert!(validate_layout(&lone, &[1]));
    assert!(!validate_layout(&lone, &[3, 4]));
}

#[test]
fn test_stray_cell_breaks_the_match() {
    let grid = grid_of(&[
        (2, 3),
        (2, 4),
        (2, 5),
        (6, 7),
        (7, 7),
        (8, 7),
        (9, 7),
        (0, 0),
    ]);
    assert!(!validate_layout(&grid, &[3, 4]));
}
