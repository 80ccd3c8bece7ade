//! Grid state for one player's waters.

use crate::common::{Cell, Outcome};
use crate::config::GRID_SIZE;
use crate::mask::{Mask, MaskError};
use crate::ship::ShipSpec;

/// Cell plane sized for the configured grid.
pub type Plane = Mask<u128, { GRID_SIZE as usize }>;

/// One player's waters: an occupancy plane and a hit plane.
///
/// `Grid` is a small `Copy` value; mutating operations take `&self` and
/// return the updated grid, so a grid held elsewhere never observes a
/// partial update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    ships: Plane,
    hits: Plane,
}

impl Grid {
    /// Empty grid: no ships, no hits.
    pub fn new() -> Self {
        Grid {
            ships: Plane::new(),
            hits: Plane::new(),
        }
    }

    /// Grid with the given fleet stamped into the occupancy plane.
    ///
    /// Specs are trusted: overlap and shape are not checked here. A spec
    /// reaching outside the grid surfaces as `OutOfBounds`.
    pub fn with_fleet(fleet: &[ShipSpec]) -> Result<Self, MaskError> {
        let mut ships = Plane::new();
        for spec in fleet {
            for (row, col) in spec.cells() {
                ships.set(row, col)?;
            }
        }
        Ok(Grid {
            ships,
            hits: Plane::new(),
        })
    }

    /// Occupancy plane.
    pub fn ships(&self) -> Plane {
        self.ships
    }

    /// Hit plane.
    pub fn hits(&self) -> Plane {
        self.hits
    }

    /// Readout of one cell.
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, MaskError> {
        Ok(Cell {
            occupied: self.ships.get(row, col)?,
            hit: self.hits.get(row, col)?,
        })
    }

    /// Copy of this grid with the occupancy flag at (row, col) flipped.
    /// Hit flags are untouched.
    pub fn toggled(&self, row: usize, col: usize) -> Result<Grid, MaskError> {
        let mut next = *self;
        next.ships.toggle(row, col)?;
        Ok(next)
    }

    /// Resolves an attack at (row, col).
    ///
    /// An already-attacked cell returns the grid unchanged and
    /// [`Outcome::AlreadyAttacked`]; otherwise the cell is marked hit and
    /// the outcome reports whether a ship was there.
    pub fn fire(&self, row: usize, col: usize) -> Result<(Grid, Outcome), MaskError> {
        if self.hits.get(row, col)? {
            return Ok((*self, Outcome::AlreadyAttacked));
        }
        let mut next = *self;
        next.hits.set(row, col)?;
        let outcome = if self.ships.get(row, col)? {
            Outcome::Hit
        } else {
            Outcome::Miss
        };
        Ok((next, outcome))
    }

    /// Applies scripted incoming fire at (row, col): the cell is marked
    /// hit only when a ship is there. Open water is left untouched.
    pub fn shelled(&self, row: usize, col: usize) -> Result<Grid, MaskError> {
        let mut next = *self;
        if next.ships.get(row, col)? {
            next.hits.set(row, col)?;
        }
        Ok(next)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
