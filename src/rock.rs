//! Rocks: size classes, spawning, spin and drift, and splitting.
//!
//! Rocks come in four size classes (0 = tiny … 3 = big).  A destroyed rock of
//! size `s > 0` splits into exactly two rocks of size `s - 1` at its last
//! position; a destroyed size-0 rock leaves nothing behind.
//!
//! Unlike the ship, rocks wrap using their own bounding box: a rock only jumps
//! to the far side once it has drifted completely off screen, so it never pops
//! in or out while still visible.

use crate::config::GameConfig;
use crate::constants::{
    HEIGHT, ROCK_MAX_SIZE, ROCK_SPIN_SPEEDS, ROCK_SPRITE_SIZES, ROCK_VARIANTS, SCORE_BASE, WIDTH,
};
use crate::geometry::{wrap_degrees, Aabb};
use bevy::prelude::*;
use rand::Rng;

/// Size class of a rock, `0..=ROCK_MAX_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RockSize(u8);

impl RockSize {
    pub const TINY: RockSize = RockSize(0);
    pub const LARGEST: RockSize = RockSize(ROCK_MAX_SIZE);

    /// `None` when `size` is out of range.
    pub fn new(size: u8) -> Option<Self> {
        (size <= ROCK_MAX_SIZE).then_some(Self(size))
    }

    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }

    /// The size class of this rock's fragments; `None` for the smallest class.
    #[inline]
    pub fn smaller(self) -> Option<Self> {
        self.0.checked_sub(1).map(Self)
    }

    /// Points for destroying a rock of this size: smaller rocks are worth more.
    #[inline]
    pub fn points(self) -> u32 {
        SCORE_BASE - self.0 as u32
    }
}

/// A drifting, spinning rock.
#[derive(Component, Debug, Clone, PartialEq)]
#[require(Transform, Visibility)]
pub struct Rock {
    pub pos: Vec2,
    /// Pixels per tick.
    pub vel: Vec2,
    /// Current rotation in degrees, `[0, 360)`.
    pub rot: f32,
    /// Degrees per tick.
    pub rot_speed: f32,
    pub size: RockSize,
    /// Which of the size's sprite variants this rock uses.
    pub variant: usize,
}

impl Rock {
    /// A rock of `size` at `pos` with a random velocity, spin and sprite.
    pub fn random_at(pos: Vec2, size: RockSize, config: &GameConfig, rng: &mut impl Rng) -> Self {
        let range = config.rock_speed_range;
        Self {
            pos,
            vel: Vec2::new(rng.gen_range(-range..=range), rng.gen_range(-range..=range)),
            rot: 0.0,
            rot_speed: ROCK_SPIN_SPEEDS[rng.gen_range(0..ROCK_SPIN_SPEEDS.len())],
            size,
            variant: rng.gen_range(0..ROCK_VARIANTS),
        }
    }

    /// A big rock placed just outside the left or the top edge.
    ///
    /// Left edge: the box's right side touches `x = 0` and its top is anywhere
    /// in `[0, HEIGHT]`.  Top edge: the box's bottom touches `y = 0` and its
    /// left side is anywhere in `[0, WIDTH]`.
    pub fn at_screen_edge(config: &GameConfig, rng: &mut impl Rng) -> Self {
        let mut rock = Self::random_at(Vec2::ZERO, RockSize::LARGEST, config, rng);
        let size = rock.sprite_size();
        rock.pos = if rng.gen_bool(0.5) {
            Vec2::new(-size.x / 2.0, rng.gen_range(0.0..=HEIGHT) + size.y / 2.0)
        } else {
            Vec2::new(rng.gen_range(0.0..=WIDTH) + size.x / 2.0, -size.y / 2.0)
        };
        rock
    }

    /// Unrotated sprite size.
    #[inline]
    pub fn sprite_size(&self) -> Vec2 {
        ROCK_SPRITE_SIZES[self.size.get() as usize][self.variant]
    }

    /// Collision box of the rotated rock sprite.
    pub fn bounds(&self) -> Aabb {
        Aabb::from_rotated_rect(self.pos, self.sprite_size(), self.rot)
    }

    /// Advance one tick: spin, drift, then wrap once fully off screen.
    pub fn advance(&mut self) {
        self.rot = wrap_degrees(self.rot + self.rot_speed);
        self.pos += self.vel;

        let b = self.bounds();
        let (w, h) = (b.width(), b.height());
        if b.left() < -w {
            // left edge re-enters at the right border
            self.pos.x = WIDTH + w / 2.0;
        } else if b.right() > WIDTH + w {
            self.pos.x = -w / 2.0;
        }
        if b.top() < -h {
            self.pos.y = HEIGHT + h / 2.0;
        } else if b.bottom() > HEIGHT + h {
            self.pos.y = -h / 2.0;
        }
    }

    /// Fragments left behind when this rock is destroyed.
    ///
    /// Two rocks one size smaller at this rock's position, each with its own
    /// random velocity and spin; nothing for the smallest size.
    pub fn split(&self, config: &GameConfig, rng: &mut impl Rng) -> Vec<Rock> {
        match self.size.smaller() {
            Some(size) => (0..2)
                .map(|_| Rock::random_at(self.pos, size, config, rng))
                .collect(),
            None => Vec::new(),
        }
    }
}

/// Spawn the opening wave of big rocks along the screen edges.
pub fn spawn_initial_rocks(commands: &mut Commands, config: &GameConfig, rng: &mut impl Rng) {
    for _ in 0..config.initial_rock_count {
        commands.spawn(Rock::at_screen_edge(config, rng));
    }
    info!("Spawned {} rocks", config.initial_rock_count);
}

/// Spin and move every rock one tick.
pub fn rock_motion_system(mut q: Query<&mut Rock>) {
    for mut rock in q.iter_mut() {
        rock.advance();
    }
}
