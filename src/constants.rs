//! Centralised gameplay and presentation constants.
//!
//! All tuneable values live here so they can be found, reasoned-about, and
//! modified in one place.  Values that players may want to tweak without a
//! rebuild are mirrored by [`crate::config::GameConfig`]; everything else
//! (screen size, sprite sizes, key bindings) is fixed at compile time.
//!
//! ## Units
//!
//! Game space is screen space: origin in the top-left corner, +Y pointing
//! down.  Distances are pixels, velocities are pixels **per tick**, angles are
//! degrees (counter-clockwise on screen) and durations are milliseconds.

use bevy::prelude::*;

// ── Window ────────────────────────────────────────────────────────────────────

/// Playfield width in pixels.  Ship positions always satisfy `0 <= x < WIDTH`.
pub const WIDTH: f32 = 800.0;

/// Playfield height in pixels.
pub const HEIGHT: f32 = 600.0;

/// Fixed simulation rate (ticks per second).
pub const FPS: f64 = 60.0;

/// Window title.
pub const TITLE: &str = "Space Rocks!";

// ── Ship ──────────────────────────────────────────────────────────────────────

/// Magnitude of the thrust vector applied while the thrust key is held.
pub const THRUST_POWER: f32 = 0.2;

/// Linear friction coefficient: `acc -= FRICTION * velocity` every tick.
///
/// Terminal speed under full thrust is `THRUST_POWER / FRICTION` = 10 px/tick.
pub const FRICTION: f32 = 0.02;

/// Ship rotation rate while a rotate key is held (degrees per tick).
pub const ROTATION_SPEED: f32 = 2.0;

/// Minimum interval between two shots (ms).
pub const SHOOT_DELAY_MS: u64 = 350;

// ── Key bindings ──────────────────────────────────────────────────────────────

pub const KEY_ROTATE_LEFT: KeyCode = KeyCode::ArrowLeft;
pub const KEY_ROTATE_RIGHT: KeyCode = KeyCode::ArrowRight;
pub const KEY_THRUST: KeyCode = KeyCode::ArrowUp;
pub const KEY_FIRE: KeyCode = KeyCode::Space;

// ── Bullets ───────────────────────────────────────────────────────────────────

/// Forward impulse added to the ship velocity when a bullet is fired (px/tick).
pub const BULLET_SPEED: f32 = 8.0;

/// Distance ahead of the ship centre at which bullets appear (px).
pub const BULLET_SPAWN_OFFSET: f32 = 20.0;

/// Bullet lifetime (ms).
pub const BULLET_LIFETIME_MS: u64 = 2000;

// ── Rocks ─────────────────────────────────────────────────────────────────────

/// Largest rock size class.  Sizes run `0..=ROCK_MAX_SIZE`.
pub const ROCK_MAX_SIZE: u8 = 3;

/// Rocks spawned when a session starts (all of size [`ROCK_MAX_SIZE`]).
pub const INITIAL_ROCK_COUNT: usize = 3;

/// Rock velocity components are drawn uniformly from `[-RANGE, RANGE]`.
pub const ROCK_SPEED_RANGE: f32 = 2.0;

/// Possible per-rock spin rates (degrees per tick).
pub const ROCK_SPIN_SPEEDS: [f32; 4] = [-1.0, -0.5, 0.5, 1.0];

/// Points awarded for a rock are `SCORE_BASE - size`.
pub const SCORE_BASE: u32 = 4;

// ── Sprites ───────────────────────────────────────────────────────────────────

/// Unrotated ship sprite size (the source art scaled by 0.6).
pub const SHIP_SPRITE_SIZE: Vec2 = Vec2::new(59.0, 45.0);

/// Unrotated bullet sprite size (the source art scaled by 0.4).
pub const BULLET_SPRITE_SIZE: Vec2 = Vec2::new(4.0, 22.0);

/// Unrotated rock sprite sizes, indexed `[size][variant]`.
pub const ROCK_SPRITE_SIZES: [[Vec2; 2]; 4] = [
    [Vec2::new(18.0, 18.0), Vec2::new(16.0, 15.0)],
    [Vec2::new(28.0, 28.0), Vec2::new(29.0, 26.0)],
    [Vec2::new(43.0, 43.0), Vec2::new(45.0, 40.0)],
    [Vec2::new(101.0, 84.0), Vec2::new(120.0, 98.0)],
];

/// Number of sprite variants available for each rock size.
pub const ROCK_VARIANTS: usize = 2;

// ── Assets ────────────────────────────────────────────────────────────────────

/// Ship sprite, relative to the Bevy asset root.
pub const SHIP_IMAGE: &str = "img/playerShip1_red.png";

/// Bullet sprite.
pub const BULLET_IMAGE: &str = "img/laserBlue01.png";

/// Rock sprites, indexed `[size][variant]`.
pub const ROCK_IMAGES: [[&str; 2]; 4] = [
    ["img/meteorGrey_tiny1.png", "img/meteorGrey_tiny2.png"],
    ["img/meteorGrey_small1.png", "img/meteorGrey_small2.png"],
    ["img/meteorGrey_med1.png", "img/meteorGrey_med2.png"],
    ["img/meteorGrey_big1.png", "img/meteorGrey_big2.png"],
];

/// Optional tuning file read at startup.
pub const CONFIG_PATH: &str = "assets/game.toml";

// ── HUD ───────────────────────────────────────────────────────────────────────

/// Score HUD font size.
pub const HUD_FONT_SIZE: f32 = 24.0;
