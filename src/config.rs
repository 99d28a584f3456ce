//! Runtime gameplay configuration loaded from `assets/game.toml`.
//!
//! [`GameConfig`] is a Bevy [`Resource`] that mirrors the tuneable constants
//! in [`crate::constants`].  At startup, [`load_game_config`] reads
//! `assets/game.toml` and overwrites the defaults with any values present in
//! the file.  Missing keys fall back to the compile-time defaults, so a minimal
//! TOML can override just the values you care about:
//!
//! ```toml
//! friction = 0.03
//! shoot_delay_ms = 250
//! ```
//!
//! Screen size, sprite sizes and key bindings are not configurable.

use crate::constants::*;
use crate::error::{GameError, GameResult};
use bevy::prelude::*;
use serde::Deserialize;
use std::time::Duration;

/// Runtime-tunable gameplay configuration.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // ── Ship ──────────────────────────────────────────────────────────────────
    pub thrust_power: f32,
    pub friction: f32,
    pub rotation_speed: f32,
    pub shoot_delay_ms: u64,

    // ── Bullets ───────────────────────────────────────────────────────────────
    pub bullet_speed: f32,
    pub bullet_spawn_offset: f32,
    pub bullet_lifetime_ms: u64,

    // ── Rocks ─────────────────────────────────────────────────────────────────
    pub rock_speed_range: f32,
    pub initial_rock_count: usize,

    // ── HUD ───────────────────────────────────────────────────────────────────
    pub hud_font_size: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            thrust_power: THRUST_POWER,
            friction: FRICTION,
            rotation_speed: ROTATION_SPEED,
            shoot_delay_ms: SHOOT_DELAY_MS,
            bullet_speed: BULLET_SPEED,
            bullet_spawn_offset: BULLET_SPAWN_OFFSET,
            bullet_lifetime_ms: BULLET_LIFETIME_MS,
            rock_speed_range: ROCK_SPEED_RANGE,
            initial_rock_count: INITIAL_ROCK_COUNT,
            hud_font_size: HUD_FONT_SIZE,
        }
    }
}

impl GameConfig {
    /// Minimum time between two shots.
    #[inline]
    pub fn shoot_delay(&self) -> Duration {
        Duration::from_millis(self.shoot_delay_ms)
    }

    /// How long a bullet lives before it is removed.
    #[inline]
    pub fn bullet_lifetime(&self) -> Duration {
        Duration::from_millis(self.bullet_lifetime_ms)
    }

    /// Parse a config from TOML text and validate it.
    pub fn from_toml_str(path: &'static str, contents: &str) -> GameResult<Self> {
        let config: GameConfig =
            toml::from_str(contents).map_err(|source| GameError::ConfigParse { path, source })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the simulation cannot run with.
    ///
    /// Every float must be finite; NaN fails every range check below.
    pub fn validate(&self) -> GameResult<()> {
        let floats: [(&'static str, f32, fn(f32) -> bool, &'static str); 7] = [
            ("thrust_power", self.thrust_power, |v| v > 0.0, "(0.0, ∞)"),
            ("friction", self.friction, |v| (0.0..1.0).contains(&v), "[0.0, 1.0)"),
            ("rotation_speed", self.rotation_speed, |v| v > 0.0, "(0.0, ∞)"),
            ("bullet_speed", self.bullet_speed, |v| v > 0.0, "(0.0, ∞)"),
            ("bullet_spawn_offset", self.bullet_spawn_offset, |v| v >= 0.0, "[0.0, ∞)"),
            ("rock_speed_range", self.rock_speed_range, |v| v >= 0.0, "[0.0, ∞)"),
            ("hud_font_size", self.hud_font_size, |v| v > 0.0, "(0.0, ∞)"),
        ];
        for (name, value, in_range, expected) in floats {
            if !value.is_finite() || !in_range(value) {
                return Err(GameError::InvalidConfig {
                    name,
                    value: value as f64,
                    expected,
                });
            }
        }

        let durations = [
            ("shoot_delay_ms", self.shoot_delay_ms),
            ("bullet_lifetime_ms", self.bullet_lifetime_ms),
        ];
        for (name, ms) in durations {
            if ms == 0 {
                return Err(GameError::InvalidConfig {
                    name,
                    value: 0.0,
                    expected: "(0, ∞)",
                });
            }
        }
        Ok(())
    }
}

/// Startup system: attempt to load `assets/game.toml` and overwrite the
/// `GameConfig` resource with any values present in the file.
///
/// A missing file is not an error.  Read, parse and validation failures are
/// logged and the compiled defaults stay in place.
pub fn load_game_config(mut config: ResMut<GameConfig>) {
    let contents = match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            info!("No {CONFIG_PATH} found; using compiled defaults");
            return;
        }
        Err(source) => {
            let err = GameError::ConfigRead {
                path: CONFIG_PATH,
                source,
            };
            warn!("{err}; using defaults");
            return;
        }
    };

    match GameConfig::from_toml_str(CONFIG_PATH, &contents) {
        Ok(loaded) => {
            *config = loaded;
            info!("Loaded game config from {CONFIG_PATH}");
        }
        Err(err) => warn!("{err}; using defaults"),
    }
}
