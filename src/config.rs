use crate::ship::{Orientation, ShipSpec};

pub const GRID_SIZE: u8 = 10;

/// Ship lengths the player must place, one ship per entry.
pub const PLAYER_SHIP_LENGTHS: [usize; 2] = [3, 4];

/// Fixed opponent fleet, stamped once at session construction.
pub const OPPONENT_FLEET: [ShipSpec; 2] = [
    ShipSpec::new(2, 3, Orientation::Horizontal, 3),
    ShipSpec::new(6, 7, Orientation::Vertical, 3),
];

/// Incoming fire applied to the player grid when battle starts.
/// Coordinates over open water have no effect.
pub const OPENING_SALVO: [(usize, usize); 2] = [(2, 4), (7, 7)];
