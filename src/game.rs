//! Session state machine: placement editing, the validation-gated battle
//! transition, attack forwarding and display snapshots.

use crate::common::{Cell, CellView, GameError, Outcome, Phase};
use crate::config::{GRID_SIZE, OPENING_SALVO, OPPONENT_FLEET, PLAYER_SHIP_LENGTHS};
use crate::grid::Grid;
use crate::layout::validate_layout;

const SIZE: usize = GRID_SIZE as usize;

/// Display snapshot of a session: the phase, the player's own cells and
/// the opponent cells as the presentation layer may see them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionView {
    pub phase: Phase,
    pub player: [[Cell; SIZE]; SIZE],
    pub opponent: [[CellView; SIZE]; SIZE],
}

/// One game session: both grids, the current phase, and every operation
/// the presentation layer may invoke.
///
/// The session is the sole owner of its grids. All mutation goes through
/// the operations below, and each operation completes fully before the
/// next is processed; grid updates are whole-value replacements.
pub struct GameSession {
    player: Grid,
    opponent: Grid,
    phase: Phase,
}

impl GameSession {
    /// Fresh session: empty player grid, opponent fleet stamped from
    /// configuration, phase set to placement.
    pub fn new() -> Result<Self, GameError> {
        Ok(GameSession {
            player: Grid::new(),
            opponent: Grid::with_fleet(&OPPONENT_FLEET)?,
            phase: Phase::Placement,
        })
    }

    /// Current lifecycle stage.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The player's own grid.
    pub fn player_grid(&self) -> Grid {
        self.player
    }

    /// Flips ship occupancy at (row, col) on the player grid. Only
    /// available during placement; battle-phase calls are rejected and
    /// leave the grid untouched.
    pub fn toggle_placement(&mut self, row: usize, col: usize) -> Result<(), GameError> {
        self.require_phase(Phase::Placement)?;
        self.player = self.player.toggled(row, col)?;
        Ok(())
    }

    /// Validates the placement and, when it matches the required fleet,
    /// applies the scripted opening salvo to the player grid and moves
    /// the session to battle. The transition is one-shot. On failure the
    /// phase and both grids are untouched, so the player can keep
    /// editing.
    pub fn start_battle(&mut self) -> Result<(), GameError> {
        self.require_phase(Phase::Placement)?;
        if !validate_layout(&self.player, &PLAYER_SHIP_LENGTHS) {
            return Err(GameError::InvalidPlacement {
                required: &PLAYER_SHIP_LENGTHS,
            });
        }
        let mut board = self.player;
        for (row, col) in OPENING_SALVO {
            board = board.shelled(row, col)?;
        }
        self.player = board;
        self.phase = Phase::Battle;
        Ok(())
    }

    /// Attacks the opponent grid at (row, col). Only available during
    /// battle; repeated attacks on one cell report `AlreadyAttacked` and
    /// change nothing.
    pub fn attack_opponent(&mut self, row: usize, col: usize) -> Result<Outcome, GameError> {
        self.require_phase(Phase::Battle)?;
        let (next, outcome) = self.opponent.fire(row, col)?;
        self.opponent = next;
        Ok(outcome)
    }

    /// Readout of one player-grid cell.
    pub fn player_cell(&self, row: usize, col: usize) -> Result<Cell, GameError> {
        Ok(self.player.cell(row, col)?)
    }

    /// Display view of one opponent cell. Occupancy is revealed only for
    /// attacked cells; everything else reads `Unknown`.
    pub fn opponent_cell(&self, row: usize, col: usize) -> Result<CellView, GameError> {
        let cell = self.opponent.cell(row, col)?;
        Ok(if !cell.hit {
            CellView::Unknown
        } else if cell.occupied {
            CellView::Hit
        } else {
            CellView::Miss
        })
    }

    /// Full display snapshot of the session.
    pub fn view(&self) -> SessionView {
        let mut view = SessionView {
            phase: self.phase,
            player: [[Cell::default(); SIZE]; SIZE],
            opponent: [[CellView::Unknown; SIZE]; SIZE],
        };
        for row in 0..SIZE {
            for col in 0..SIZE {
                view.player[row][col] = self.player.cell(row, col).unwrap_or_default();
                view.opponent[row][col] =
                    self.opponent_cell(row, col).unwrap_or(CellView::Unknown);
            }
        }
        view
    }

    fn require_phase(&self, required: Phase) -> Result<(), GameError> {
        if self.phase == required {
            Ok(())
        } else {
            Err(GameError::WrongPhase {
                required,
                current: self.phase,
            })
        }
    }
}
