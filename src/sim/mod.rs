//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (formation slot order)
//! - No rendering or platform dependencies

pub mod bounds;
pub mod movement;
pub mod state;
pub mod tick;

pub use bounds::Aabb;
pub use movement::{formation_step, ship_step};
pub use state::{Alien, GameEvent, GamePhase, GameState, Laser, MovementModel, Ship, SweepDir};
pub use tick::{TickInput, tick};
