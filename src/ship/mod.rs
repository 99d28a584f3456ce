//! Ship module: ship entity, input handling, and firing.
//!
//! ## Sub-module layout
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`state`] | `Ship` component and the `ShipControls` intent resource |
//! | [`control`] | Input systems: arrow keys / Space → intent, steering, integration, wrap |
//! | [`combat`] | Bullet firing with cooldown |
//!
//! All public items are re-exported at this level.

pub mod combat;
pub mod control;
pub mod state;

pub use combat::ship_fire_system;
pub use control::{keyboard_to_controls_system, ship_controls_clear_system, ship_movement_system};
pub use state::{Ship, ShipControls};

use bevy::prelude::*;
use std::time::Duration;

/// Spawn the session's ship in the centre of the screen.
///
/// `now` seeds the fire cooldown, so the first shot is possible
/// `shoot_delay_ms` after the ship appears.
pub fn spawn_ship(commands: &mut Commands, now: Duration) -> Entity {
    let entity = commands.spawn(Ship::new(now)).id();
    info!("Ship spawned at screen centre");
    entity
}
