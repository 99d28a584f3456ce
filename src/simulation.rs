//! Simulation plugin: the fixed-rate gameplay tick.
//!
//! While in [`GameState::Playing`], every `FixedUpdate` tick (60 Hz) runs one
//! strictly ordered chain:
//!
//! | Step | System                           | Module        |
//! |------|----------------------------------|---------------|
//! | 1    | `ship_controls_clear_system`     | ship::control |
//! | 2    | `keyboard_to_controls_system`    | ship::control |
//! | 3    | `bullet_lifetime_system`         | bullet        |
//! | 4    | `bullet_motion_system`           | bullet        |
//! | 5    | `rock_motion_system`             | rock          |
//! | 6    | `ship_fire_system`               | ship::combat  |
//! | 7    | `ship_movement_system`           | ship::control |
//! | 8    | `bullet_rock_collision_system`   | collision     |
//! | 9    | `ship_rock_collision_system`     | collision     |
//!
//! A shot leaves from the ship's pose at the start of the tick, and a new
//! bullet first moves on the tick after it was fired.
//!
//! Drawing happens every frame in `Update` (see [`crate::rendering`]); Bevy's
//! fixed-step runner decides how many ticks each frame needs.

use crate::bullet::{bullet_lifetime_system, bullet_motion_system};
use crate::collision::{bullet_rock_collision_system, ship_rock_collision_system};
use crate::config::GameConfig;
use crate::constants::FPS;
use crate::menu::GameState;
use crate::rock::rock_motion_system;
use crate::session::{end_session, start_session, Score};
use crate::ship::{
    keyboard_to_controls_system, ship_controls_clear_system, ship_fire_system,
    ship_movement_system, ShipControls,
};
use bevy::prelude::*;

/// System set containing the whole gameplay tick.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameplaySet;

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(FPS))
            .init_resource::<GameConfig>()
            .init_resource::<ShipControls>()
            .init_resource::<Score>()
            .add_systems(OnEnter(GameState::Playing), start_session)
            .add_systems(OnExit(GameState::Playing), end_session)
            .add_systems(
                FixedUpdate,
                (
                    ship_controls_clear_system,
                    keyboard_to_controls_system,
                    bullet_lifetime_system,
                    bullet_motion_system,
                    rock_motion_system,
                    ship_fire_system,
                    ship_movement_system,
                    bullet_rock_collision_system,
                    ship_rock_collision_system,
                )
                    .chain()
                    .in_set(GameplaySet)
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
