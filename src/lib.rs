#![cfg_attr(not(feature = "std"), no_std)]

mod common;
mod config;
#[cfg(feature = "std")]
mod console;
mod game;
mod grid;
mod layout;
#[cfg(feature = "std")]
mod logging;
mod mask;
pub mod prelude;
mod ship;

pub use common::*;
pub use config::*;
#[cfg(feature = "std")]
pub use console::*;
pub use game::*;
pub use grid::*;
pub use layout::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use mask::{Coords, Mask, MaskError};
pub use ship::*;
