//! Ship component and the per-tick control intent.
//!
//! Systems that mutate this state are in the sibling modules:
//! - [`super::control`]: keyboard → intent, steering and integration
//! - [`super::combat`]: firing with cooldown

use crate::config::GameConfig;
use crate::constants::{HEIGHT, SHIP_SPRITE_SIZE, WIDTH};
use crate::geometry::{heading, wrap_degrees, wrap_to_screen, Aabb};
use bevy::prelude::*;
use std::time::Duration;

// ── Components ─────────────────────────────────────────────────────────────────

/// The player's ship.  Exactly one exists while a session is running.
///
/// All fields are in screen space (see [`crate::constants`]); the rendered
/// `Transform` is derived from them every frame.
#[derive(Component, Debug, Clone, PartialEq)]
#[require(Transform, Visibility)]
pub struct Ship {
    pub pos: Vec2,
    /// Pixels per tick.
    pub vel: Vec2,
    /// Heading in degrees, always in `[0, 360)`.
    pub rot: f32,
    /// Rotation applied this tick (degrees); reset every tick.
    pub rot_speed: f32,
    /// Thrust applied this tick; reset every tick.
    pub thrust: Vec2,
    /// Monotonic timestamp of the last shot (or of the spawn, before any shot).
    pub last_shot: Duration,
}

impl Ship {
    /// A motionless ship in the centre of the screen, pointing up.
    pub fn new(now: Duration) -> Self {
        Self {
            pos: Vec2::new(WIDTH / 2.0, HEIGHT / 2.0),
            vel: Vec2::ZERO,
            rot: 0.0,
            rot_speed: 0.0,
            thrust: Vec2::ZERO,
            last_shot: now,
        }
    }

    /// Collision box of the rotated ship sprite.
    pub fn bounds(&self) -> Aabb {
        Aabb::from_rotated_rect(self.pos, SHIP_SPRITE_SIZE, self.rot)
    }

    /// Translate this tick's intent into rotation speed and thrust.
    ///
    /// Thrust uses the heading from *before* this tick's rotation.  When both
    /// rotate keys are held, right wins.
    pub fn steer(&mut self, controls: &ShipControls, config: &GameConfig) {
        self.rot_speed = 0.0;
        self.thrust = Vec2::ZERO;
        if controls.rotate_left {
            self.rot_speed = config.rotation_speed;
        }
        if controls.rotate_right {
            self.rot_speed = -config.rotation_speed;
        }
        if controls.thrust {
            self.thrust = heading(self.rot, config.thrust_power);
        }
    }

    /// Advance one tick: rotate, apply thrust and friction, move, wrap.
    pub fn integrate(&mut self, friction: f32) {
        self.rot = wrap_degrees(self.rot + self.rot_speed);
        let acc = self.thrust - self.vel * friction;
        self.vel += acc;
        self.pos = wrap_to_screen(self.pos + self.vel);
    }

    /// Record a shot at `now` if the cooldown has elapsed.
    ///
    /// Returns `true` when a bullet should be spawned.
    pub fn try_fire(&mut self, now: Duration, delay: Duration) -> bool {
        if now.saturating_sub(self.last_shot) > delay {
            self.last_shot = now;
            true
        } else {
            false
        }
    }
}

// ── Input Abstraction ──────────────────────────────────────────────────────────

/// The four logical actions requested for the current tick.
///
/// Cleared at the start of every tick, filled by
/// [`super::control::keyboard_to_controls_system`], consumed by the movement
/// and fire systems.  Tests populate it directly instead of faking key presses.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipControls {
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub thrust: bool,
    pub fire: bool,
}
