//! Placement validation: occupied cells must form exactly the required
//! multiset of straight ships.

use crate::config::GRID_SIZE;
use crate::grid::{Grid, Plane};

const SIZE: usize = GRID_SIZE as usize;
const CELLS: usize = SIZE * SIZE;

/// 4-directional neighborhood; diagonal contact does not connect ships.
const STEPS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Checks that the grid's occupied cells form straight ships whose
/// lengths match `required` exactly as a multiset, in any order.
///
/// A ship is a maximal 4-connected component of occupied cells; it is
/// straight when all of its cells share a row or share a column. An empty
/// grid only matches an empty requirement.
pub fn validate_layout(grid: &Grid, required: &[usize]) -> bool {
    let mut visited = Plane::new();
    let mut found = [0usize; CELLS];
    let mut count = 0usize;

    for row in 0..SIZE {
        for col in 0..SIZE {
            if !occupied(grid, row, col) || seen(&visited, row, col) {
                continue;
            }
            match trace_ship(grid, &mut visited, row, col) {
                Some(len) => {
                    found[count] = len;
                    count += 1;
                }
                // bent ship, stop scanning
                None => return false,
            }
        }
    }

    if count != required.len() {
        return false;
    }
    let found = &mut found[..count];
    found.sort_unstable();
    let mut want = [0usize; CELLS];
    want[..count].copy_from_slice(required);
    let want = &mut want[..count];
    want.sort_unstable();
    found == want
}

/// Flood-fills the component containing (row, col), marking it visited.
/// Returns its cell count, or `None` when the component is not a straight
/// line. Uses an explicit stack; every cell is pushed at most once, so
/// the stack is bounded by the cell count.
fn trace_ship(grid: &Grid, visited: &mut Plane, row: usize, col: usize) -> Option<usize> {
    let mut stack = [(0usize, 0usize); CELLS];
    let mut top = 0usize;
    let _ = visited.set(row, col);
    stack[top] = (row, col);
    top += 1;

    let mut len = 0usize;
    let mut same_row = true;
    let mut same_col = true;

    while top > 0 {
        top -= 1;
        let (r, c) = stack[top];
        len += 1;
        same_row &= r == row;
        same_col &= c == col;

        for (dr, dc) in STEPS {
            let (nr, nc) = (r as isize + dr, c as isize + dc);
            if nr < 0 || nr >= SIZE as isize || nc < 0 || nc >= SIZE as isize {
                continue;
            }
            let (nr, nc) = (nr as usize, nc as usize);
            if occupied(grid, nr, nc) && !seen(visited, nr, nc) {
                let _ = visited.set(nr, nc);
                stack[top] = (nr, nc);
                top += 1;
            }
        }
    }

    (same_row || same_col).then_some(len)
}

fn occupied(grid: &Grid, row: usize, col: usize) -> bool {
    grid.ships().get(row, col).unwrap_or(false)
}

fn seen(visited: &Plane, row: usize, col: usize) -> bool {
    visited.get(row, col).unwrap_or(false)
}
