//! Headless end-to-end tests of a running session.
//!
//! The clock is driven by `TimeUpdateStrategy::ManualDuration` at one fixed
//! tick per `app.update()`, and keys are pressed directly on
//! `ButtonInput<KeyCode>`.

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;
use space_rocks::bullet::Bullet;
use space_rocks::constants::{HEIGHT, WIDTH};
use space_rocks::menu::{GameState, MenuPlugin};
use space_rocks::ship::Ship;
use space_rocks::simulation::SimulationPlugin;
use std::time::Duration;

fn build_session_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin, MenuPlugin, SimulationPlugin));
    app.insert_resource(ButtonInput::<KeyCode>::default());
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
        1.0 / 60.0,
    )));
    // Settle into Playing.
    app.update();
    app.update();
    assert_eq!(
        *app.world().resource::<State<GameState>>().get(),
        GameState::Playing
    );
    app
}

fn press(app: &mut App, key: KeyCode) {
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().press(key);
}

fn ship(app: &mut App) -> Ship {
    app.world_mut()
        .query::<&Ship>()
        .single(app.world())
        .expect("exactly one ship")
        .clone()
}

fn bullet_count(app: &mut App) -> usize {
    app.world_mut().query::<&Bullet>().iter(app.world()).count()
}

#[test]
fn idle_ship_stays_in_the_centre() {
    let mut app = build_session_app();
    for _ in 0..30 {
        app.update();
    }
    let ship = ship(&mut app);
    assert_eq!(ship.pos, Vec2::new(WIDTH / 2.0, HEIGHT / 2.0));
    assert_eq!(ship.vel, Vec2::ZERO);
    assert_eq!(bullet_count(&mut app), 0);
}

#[test]
fn thrust_moves_ship_up_the_screen() {
    let mut app = build_session_app();
    press(&mut app, KeyCode::ArrowUp);
    for _ in 0..30 {
        app.update();
    }
    let ship = ship(&mut app);
    assert!(ship.vel.y < 0.0, "vel {:?}", ship.vel);
    assert!(ship.pos.y < HEIGHT / 2.0, "pos {:?}", ship.pos);
    assert!(ship.vel.x.abs() < 1e-3);
}

#[test]
fn rotate_left_turns_counter_clockwise() {
    let mut app = build_session_app();
    press(&mut app, KeyCode::ArrowLeft);
    for _ in 0..10 {
        app.update();
    }
    let rot = ship(&mut app).rot;
    assert!(rot > 0.0 && rot < 180.0, "rot {rot}");
}

#[test]
fn holding_fire_respects_the_cooldown() {
    let mut app = build_session_app();
    press(&mut app, KeyCode::Space);
    // Under half a second: one shot after the 350 ms cooldown, not two.
    for _ in 0..30 {
        app.update();
    }
    assert_eq!(bullet_count(&mut app), 1);
}
