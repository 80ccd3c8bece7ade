//! Common types: phases, attack outcomes, cell readouts and errors.

use core::fmt;

use crate::mask::MaskError;

/// Lifecycle stage of a session. Starts at `Placement` and moves once,
/// irreversibly, to `Battle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// The player is editing ship positions on their own grid.
    Placement,
    /// Placement is locked; the player attacks the opponent grid.
    Battle,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Placement => write!(f, "placement"),
            Phase::Battle => write!(f, "battle"),
        }
    }
}

/// Result of one attack on a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// The cell held a ship and is now marked hit.
    Hit,
    /// The cell was open water and is now marked hit.
    Miss,
    /// The cell had already been attacked; nothing changed.
    AlreadyAttacked,
}

/// Full readout of one player-grid cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub occupied: bool,
    pub hit: bool,
}

/// Opponent-grid cell as the presentation layer may see it. Occupancy is
/// revealed only for attacked cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellView {
    /// Not attacked yet; occupancy stays hidden.
    #[default]
    Unknown,
    /// Attacked, a ship was there.
    Hit,
    /// Attacked, open water.
    Miss,
}

/// Errors returned by session operations.
#[derive(Debug, PartialEq, Eq)]
pub enum GameError {
    /// Underlying mask error (out-of-range coordinate or plane capacity).
    Mask(MaskError),
    /// Operation is not available in the current phase.
    WrongPhase { required: Phase, current: Phase },
    /// The player grid does not form the required fleet.
    InvalidPlacement { required: &'static [usize] },
}

impl From<MaskError> for GameError {
    fn from(err: MaskError) -> Self {
        GameError::Mask(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Mask(e) => write!(f, "Mask error: {}", e),
            GameError::WrongPhase { required, current } => {
                write!(
                    f,
                    "Operation requires the {} phase, session is in {}",
                    required, current
                )
            }
            GameError::InvalidPlacement { required } => {
                write!(
                    f,
                    "Invalid ship placement. Place exactly {} ships of lengths",
                    required.len()
                )?;
                for (i, len) in required.iter().enumerate() {
                    if i == 0 {
                        write!(f, " {}", len)?;
                    } else {
                        write!(f, " and {}", len)?;
                    }
                }
                Ok(())
            }
        }
    }
}
