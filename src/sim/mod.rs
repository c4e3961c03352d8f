//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Input arrives as a per-frame snapshot
//! - Stable iteration order (obstacles in spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{find_collision, player_hits_obstacle};
pub use state::{GamePhase, GameState, Obstacle, Player};
pub use tick::{TickInput, TickOutcome, tick};
