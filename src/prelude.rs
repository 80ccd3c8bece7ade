//! Commonly used types and utilities for ease of import.

pub use crate::{validate_layout, GameError, GameSession, Grid, Outcome, Phase, SessionView};

#[cfg(feature = "std")]
pub use crate::{init_logging, print_session, run_interactive};
