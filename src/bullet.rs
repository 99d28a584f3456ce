//! Bullets: spawn state, drift, and lifetime expiry.
//!
//! Bullets fly in a straight line at the velocity they were fired with and do
//! not wrap at the screen edges.  A bullet is removed once its age reaches
//! `bullet_lifetime_ms`, or earlier when it hits a rock (see
//! [`crate::collision`]).

use crate::config::GameConfig;
use crate::constants::BULLET_SPRITE_SIZE;
use crate::geometry::{heading, Aabb};
use crate::ship::Ship;
use bevy::prelude::*;
use std::time::Duration;

/// A fired round.
#[derive(Component, Debug, Clone, PartialEq)]
#[require(Transform, Visibility)]
pub struct Bullet {
    pub pos: Vec2,
    /// Pixels per tick.
    pub vel: Vec2,
    /// Heading of the ship at the moment of firing (degrees).
    pub rot: f32,
    /// Monotonic timestamp of the shot.
    pub spawned_at: Duration,
}

impl Bullet {
    /// A bullet leaving `ship`'s nose at `now`.
    ///
    /// It appears `bullet_spawn_offset` ahead of the ship centre and moves at
    /// the ship's velocity plus a `bullet_speed` impulse along the heading.
    pub fn fired_from(ship: &Ship, now: Duration, config: &GameConfig) -> Self {
        Self {
            pos: ship.pos + heading(ship.rot, config.bullet_spawn_offset),
            vel: ship.vel + heading(ship.rot, config.bullet_speed),
            rot: ship.rot,
            spawned_at: now,
        }
    }

    /// Time since the shot.
    #[inline]
    pub fn age(&self, now: Duration) -> Duration {
        now.saturating_sub(self.spawned_at)
    }

    #[inline]
    pub fn is_expired(&self, now: Duration, lifetime: Duration) -> bool {
        self.age(now) >= lifetime
    }

    /// Move one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// Collision box of the rotated bullet sprite.
    pub fn bounds(&self) -> Aabb {
        Aabb::from_rotated_rect(self.pos, BULLET_SPRITE_SIZE, self.rot)
    }
}

/// Despawn bullets whose lifetime has run out.
pub fn bullet_lifetime_system(
    mut commands: Commands,
    q: Query<(Entity, &Bullet)>,
    time: Res<Time>,
    config: Res<GameConfig>,
) {
    let now = time.elapsed();
    let lifetime = config.bullet_lifetime();
    for (entity, bullet) in q.iter() {
        if bullet.is_expired(now, lifetime) {
            commands.entity(entity).despawn();
        }
    }
}

/// Move every bullet one tick.
pub fn bullet_motion_system(mut q: Query<&mut Bullet>) {
    for mut bullet in q.iter_mut() {
        bullet.advance();
    }
}
