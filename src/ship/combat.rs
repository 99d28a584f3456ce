//! Bullet firing.
//!
//! Firing is rate-limited against the simulation's monotonic clock: a shot is
//! only accepted when more than `shoot_delay_ms` has passed since the previous
//! one (or since the ship spawned).

use super::state::{Ship, ShipControls};
use crate::bullet::Bullet;
use crate::config::GameConfig;
use bevy::prelude::*;

/// Spawn a bullet when fire is held and the cooldown has elapsed.
pub fn ship_fire_system(
    mut commands: Commands,
    mut q: Query<&mut Ship>,
    controls: Res<ShipControls>,
    time: Res<Time>,
    config: Res<GameConfig>,
) {
    if !controls.fire {
        return;
    }
    let Ok(mut ship) = q.single_mut() else {
        return;
    };

    let now = time.elapsed();
    if !ship.try_fire(now, config.shoot_delay()) {
        return;
    }

    commands.spawn(Bullet::fired_from(&ship, now, &config));
}
