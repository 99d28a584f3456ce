//! Ship input and movement systems.
//!
//! ## Pipeline (runs in order every fixed tick)
//!
//! 1. [`ship_controls_clear_system`]: resets [`ShipControls`].
//! 2. [`keyboard_to_controls_system`]: arrow keys / Space → [`ShipControls`].
//! 3. [`ship_movement_system`]: steers, integrates and wraps the ship.
//!
//! Firing reads the same intent and lives in [`super::combat`].  It runs
//! between steps 2 and 3, so a shot leaves from the pose the ship had before
//! this tick's turn and move.

use super::state::{Ship, ShipControls};
use crate::config::GameConfig;
use crate::constants::{KEY_FIRE, KEY_ROTATE_LEFT, KEY_ROTATE_RIGHT, KEY_THRUST};
use bevy::prelude::*;

// ── Step 1: Clear ─────────────────────────────────────────────────────────────

/// Reset [`ShipControls`] at the start of every tick.
pub fn ship_controls_clear_system(mut controls: ResMut<ShipControls>) {
    *controls = ShipControls::default();
}

// ── Step 2: Keyboard → Controls ───────────────────────────────────────────────

/// Translate the held keys into [`ShipControls`].
///
/// | Key        | Action        |
/// |------------|---------------|
/// | ArrowLeft  | rotate left   |
/// | ArrowRight | rotate right  |
/// | ArrowUp    | thrust        |
/// | Space      | fire          |
pub fn keyboard_to_controls_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut controls: ResMut<ShipControls>,
) {
    controls.rotate_left = keys.pressed(KEY_ROTATE_LEFT);
    controls.rotate_right = keys.pressed(KEY_ROTATE_RIGHT);
    controls.thrust = keys.pressed(KEY_THRUST);
    controls.fire = keys.pressed(KEY_FIRE);
}

// ── Step 3: Controls → motion ─────────────────────────────────────────────────

/// Steer and integrate the ship for one tick.
pub fn ship_movement_system(
    mut q: Query<&mut Ship>,
    controls: Res<ShipControls>,
    config: Res<GameConfig>,
) {
    let Ok(mut ship) = q.single_mut() else {
        return;
    };
    ship.steer(&controls, &config);
    ship.integrate(config.friction);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{HEIGHT, WIDTH};
    use std::time::Duration;

    // ── helpers ───────────────────────────────────────────────────────────────

    /// Minimal app with just what the control pipeline needs: no window, no
    /// renderer, no fixed-step schedule.
    fn build_test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(ShipControls::default());
        app.insert_resource(GameConfig::default());
        app.insert_resource(ButtonInput::<KeyCode>::default());
        app.add_systems(
            Update,
            (
                ship_controls_clear_system,
                keyboard_to_controls_system,
                ship_movement_system,
            )
                .chain(),
        );
        app
    }

    fn ship(app: &mut App) -> Ship {
        app.world_mut()
            .query::<&Ship>()
            .single(app.world())
            .expect("exactly one ship")
            .clone()
    }

    fn press(app: &mut App, key: KeyCode) {
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(key);
    }

    // ── keyboard_to_controls_system ───────────────────────────────────────────

    #[test]
    fn held_keys_map_to_controls() {
        let mut app = build_test_app();
        press(&mut app, KeyCode::ArrowUp);
        press(&mut app, KeyCode::Space);
        app.update();

        let controls = *app.world().resource::<ShipControls>();
        assert_eq!(
            controls,
            ShipControls {
                thrust: true,
                fire: true,
                ..Default::default()
            }
        );
    }

    #[test]
    fn released_key_clears_control() {
        let mut app = build_test_app();
        press(&mut app, KeyCode::ArrowLeft);
        app.update();
        assert!(app.world().resource::<ShipControls>().rotate_left);

        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .release(KeyCode::ArrowLeft);
        app.update();
        assert!(!app.world().resource::<ShipControls>().rotate_left);
    }

    // ── ship_movement_system ──────────────────────────────────────────────────

    #[test]
    fn left_key_rotates_ship_each_tick() {
        let mut app = build_test_app();
        app.world_mut().spawn(Ship::new(Duration::ZERO));
        press(&mut app, KeyCode::ArrowLeft);

        for _ in 0..3 {
            app.update();
        }

        assert!((ship(&mut app).rot - 6.0).abs() < 1e-4);
    }

    #[test]
    fn thrust_moves_ship_up_the_screen() {
        let mut app = build_test_app();
        app.world_mut().spawn(Ship::new(Duration::ZERO));
        press(&mut app, KeyCode::ArrowUp);

        for _ in 0..10 {
            app.update();
        }

        let ship = ship(&mut app);
        assert!(ship.vel.y < 0.0, "expected upward velocity, got {:?}", ship.vel);
        assert!(ship.pos.y < HEIGHT / 2.0);
        assert!((ship.pos.x - WIDTH / 2.0).abs() < 1e-3);
    }

    #[test]
    fn no_ship_is_a_no_op() {
        let mut app = build_test_app();
        press(&mut app, KeyCode::ArrowUp);
        app.update();
        assert_eq!(app.world_mut().query::<&Ship>().iter(app.world()).count(), 0);
    }
}
