//! Game session context: score and the session lifecycle.
//!
//! A session is one run of the `Playing` state.  [`start_session`] resets the
//! score and spawns the ship plus the opening rocks; [`end_session`] removes
//! every gameplay entity so the next session starts from a clean world.

use crate::bullet::Bullet;
use crate::config::GameConfig;
use crate::rock::{spawn_initial_rocks, Rock, RockSize};
use crate::ship::{spawn_ship, Ship};
use bevy::prelude::*;

/// Score for the current session.
///
/// - `points`: `4 - size` per destroyed rock.
/// - `rocks_destroyed`: rocks destroyed by bullets.
/// - `ship_contacts`: rocks that ran into the ship (no gameplay effect).
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub points: u32,
    pub rocks_destroyed: u32,
    pub ship_contacts: u32,
}

impl Score {
    /// Credit a rock of `size` destroyed by a bullet.
    #[inline]
    pub fn award(&mut self, size: RockSize) {
        self.points += size.points();
        self.rocks_destroyed += 1;
    }
}

/// `OnEnter(Playing)`: reset the score, spawn the ship and the opening rocks.
///
/// The ship's fire cooldown is seeded from the fixed-step clock, which is the
/// clock the fire system reads.
pub fn start_session(
    mut commands: Commands,
    mut score: ResMut<Score>,
    config: Res<GameConfig>,
    time: Res<Time<Fixed>>,
) {
    *score = Score::default();
    spawn_ship(&mut commands, time.elapsed());
    spawn_initial_rocks(&mut commands, &config, &mut rand::thread_rng());
    info!("Session started");
}

/// `OnExit(Playing)`: despawn the ship, every rock and every bullet.
#[allow(clippy::type_complexity)]
pub fn end_session(
    mut commands: Commands,
    q: Query<Entity, Or<(With<Ship>, With<Rock>, With<Bullet>)>>,
    score: Res<Score>,
) {
    for entity in q.iter() {
        commands.entity(entity).despawn();
    }
    info!(
        "Session ended: {} points, {} rocks destroyed",
        score.points, score.rocks_destroyed
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn award_adds_four_minus_size() {
        let mut score = Score::default();
        score.award(RockSize::LARGEST);
        assert_eq!(score.points, 1);
        score.award(RockSize::TINY);
        assert_eq!(score.points, 5);
        assert_eq!(score.rocks_destroyed, 2);
    }

    fn build_test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(GameConfig::default());
        app.insert_resource(Score {
            points: 99,
            rocks_destroyed: 7,
            ship_contacts: 1,
        });
        app
    }

    #[test]
    fn start_session_spawns_ship_and_three_big_rocks() {
        let mut app = build_test_app();
        app.add_systems(Update, start_session);
        app.update();

        let world = app.world_mut();
        assert_eq!(world.query::<&Ship>().iter(world).count(), 1);
        let rocks: Vec<RockSize> = world.query::<&Rock>().iter(world).map(|r| r.size).collect();
        assert_eq!(rocks, vec![RockSize::LARGEST; 3]);
        assert_eq!(*world.resource::<Score>(), Score::default());
    }

    #[test]
    fn end_session_clears_gameplay_entities_only() {
        let mut app = build_test_app();
        app.add_systems(Startup, start_session);
        app.add_systems(Update, end_session);
        let bystander = app.world_mut().spawn(Transform::default()).id();
        app.update();

        let world = app.world_mut();
        assert_eq!(world.query::<&Ship>().iter(world).count(), 0);
        assert_eq!(world.query::<&Rock>().iter(world).count(), 0);
        assert!(world.get_entity(bystander).is_ok());
    }
}
