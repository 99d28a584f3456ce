//! Collision resolution between bullets, rocks, and the ship.
//!
//! Runs once per tick after every entity has moved:
//!
//! 1. [`bullet_rock_collision_system`]: each rock touched by at least one
//!    unused bullet is destroyed together with those bullets, the score grows
//!    by `4 - size`, and rocks bigger than size 0 split in two.
//! 2. [`ship_rock_collision_system`]: rocks touching the ship are removed.
//!    The ship has no shield or lives, so the contact only shows up in the log
//!    and in [`Score::ship_contacts`].
//!
//! Overlap is a strict test on the bounding boxes of the rotated sprites.
//! The pairing logic is kept free of ECS types so it can be tested directly.

use crate::bullet::Bullet;
use crate::config::GameConfig;
use crate::geometry::Aabb;
use crate::rock::Rock;
use crate::session::Score;
use crate::ship::Ship;
use bevy::prelude::*;

/// One destroyed rock and the bullets that destroyed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RockHit<K> {
    pub rock: K,
    pub bullets: Vec<K>,
}

/// Pair rocks with the bullets that hit them.
///
/// Rocks are visited in order; a bullet is consumed by the first rock it
/// overlaps, so one bullet never destroys two rocks.  A rock hit by several
/// bullets in the same tick takes all of them with it.
pub fn find_bullet_hits<K: Copy>(rocks: &[(K, Aabb)], bullets: &[(K, Aabb)]) -> Vec<RockHit<K>> {
    let mut used = vec![false; bullets.len()];
    let mut hits = Vec::new();

    for &(rock, rock_box) in rocks {
        let mut hit_by = Vec::new();
        for (i, &(bullet, bullet_box)) in bullets.iter().enumerate() {
            if !used[i] && rock_box.intersects(&bullet_box) {
                used[i] = true;
                hit_by.push(bullet);
            }
        }
        if !hit_by.is_empty() {
            hits.push(RockHit {
                rock,
                bullets: hit_by,
            });
        }
    }
    hits
}

/// Rocks overlapping the ship.
pub fn find_ship_contacts<K: Copy>(ship: &Aabb, rocks: &[(K, Aabb)]) -> Vec<K> {
    rocks
        .iter()
        .filter(|(_, rock_box)| ship.intersects(rock_box))
        .map(|&(rock, _)| rock)
        .collect()
}

/// Destroy hit rocks and bullets, award points, and spawn fragments.
pub fn bullet_rock_collision_system(
    mut commands: Commands,
    rocks: Query<(Entity, &Rock)>,
    bullets: Query<(Entity, &Bullet)>,
    mut score: ResMut<Score>,
    config: Res<GameConfig>,
) {
    if bullets.is_empty() {
        return;
    }
    let rock_boxes: Vec<(Entity, Aabb)> = rocks.iter().map(|(e, r)| (e, r.bounds())).collect();
    let bullet_boxes: Vec<(Entity, Aabb)> =
        bullets.iter().map(|(e, b)| (e, b.bounds())).collect();

    let mut rng = rand::thread_rng();
    for hit in find_bullet_hits(&rock_boxes, &bullet_boxes) {
        let Ok((_, rock)) = rocks.get(hit.rock) else {
            continue;
        };

        score.award(rock.size);
        let fragments = rock.split(&config, &mut rng);
        debug!(
            "Rock of size {} destroyed at {:?}, {} fragments",
            rock.size.get(),
            rock.pos,
            fragments.len()
        );
        for fragment in fragments {
            commands.spawn(fragment);
        }

        commands.entity(hit.rock).despawn();
        for bullet in hit.bullets {
            commands.entity(bullet).despawn();
        }
    }
}

/// Remove rocks that touch the ship.
///
/// The ship itself is unaffected: there is no shield or life counter.
pub fn ship_rock_collision_system(
    mut commands: Commands,
    ships: Query<&Ship>,
    rocks: Query<(Entity, &Rock)>,
    mut score: ResMut<Score>,
) {
    let Ok(ship) = ships.single() else {
        return;
    };
    let rock_boxes: Vec<(Entity, Aabb)> = rocks.iter().map(|(e, r)| (e, r.bounds())).collect();

    for rock in find_ship_contacts(&ship.bounds(), &rock_boxes) {
        score.ship_contacts += 1;
        debug!("Rock {rock:?} hit the ship");
        commands.entity(rock).despawn();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rock::RockSize;
    use std::time::Duration;

    fn boxed(id: usize, x: f32, y: f32) -> (usize, Aabb) {
        (id, Aabb::new(Vec2::new(x, y), Vec2::splat(10.0)))
    }

    // ── find_bullet_hits ──────────────────────────────────────────────────────

    #[test]
    fn no_overlap_no_hits() {
        let rocks = [boxed(1, 0.0, 0.0)];
        let bullets = [boxed(10, 100.0, 100.0)];
        assert!(find_bullet_hits(&rocks, &bullets).is_empty());
    }

    #[test]
    fn single_overlap_pairs_rock_and_bullet() {
        let rocks = [boxed(1, 0.0, 0.0), boxed(2, 200.0, 0.0)];
        let bullets = [boxed(10, 202.0, 3.0)];
        assert_eq!(
            find_bullet_hits(&rocks, &bullets),
            vec![RockHit {
                rock: 2,
                bullets: vec![10]
            }]
        );
    }

    #[test]
    fn bullet_is_consumed_by_first_rock_only() {
        // Two overlapping rocks, one bullet in the overlap.
        let rocks = [boxed(1, 0.0, 0.0), boxed(2, 4.0, 0.0)];
        let bullets = [boxed(10, 2.0, 0.0)];
        let hits = find_bullet_hits(&rocks, &bullets);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].rock, 1);
    }

    #[test]
    fn several_bullets_on_one_rock_all_go() {
        let rocks = [boxed(1, 0.0, 0.0)];
        let bullets = [boxed(10, 3.0, 0.0), boxed(11, -3.0, 0.0), boxed(12, 50.0, 0.0)];
        let hits = find_bullet_hits(&rocks, &bullets);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].bullets, vec![10, 11]);
    }

    #[test]
    fn ship_contacts_lists_every_touching_rock() {
        let ship = Aabb::new(Vec2::ZERO, Vec2::splat(20.0));
        let rocks = [boxed(1, 12.0, 0.0), boxed(2, 0.0, -12.0), boxed(3, 40.0, 0.0)];
        assert_eq!(find_ship_contacts(&ship, &rocks), vec![1, 2]);
    }

    // ── systems ───────────────────────────────────────────────────────────────

    fn build_test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(GameConfig::default());
        app.insert_resource(Score::default());
        app.add_systems(
            Update,
            (bullet_rock_collision_system, ship_rock_collision_system).chain(),
        );
        app
    }

    fn rock(pos: Vec2, size: u8) -> Rock {
        Rock {
            pos,
            vel: Vec2::ZERO,
            rot: 0.0,
            rot_speed: 0.0,
            size: RockSize::new(size).expect("valid size"),
            variant: 0,
        }
    }

    fn bullet(pos: Vec2) -> Bullet {
        Bullet {
            pos,
            vel: Vec2::ZERO,
            rot: 0.0,
            spawned_at: Duration::ZERO,
        }
    }

    fn rocks(app: &mut App) -> Vec<Rock> {
        app.world_mut()
            .query::<&Rock>()
            .iter(app.world())
            .cloned()
            .collect()
    }

    fn bullet_count(app: &mut App) -> usize {
        app.world_mut().query::<&Bullet>().iter(app.world()).count()
    }

    #[test]
    fn hit_big_rock_splits_into_two_medium_rocks() {
        let mut app = build_test_app();
        let at = Vec2::new(600.0, 450.0);
        app.world_mut().spawn(rock(at, 3));
        app.world_mut().spawn(bullet(at + Vec2::new(5.0, 0.0)));
        app.update();

        let left = rocks(&mut app);
        assert_eq!(left.len(), 2);
        for r in &left {
            assert_eq!(r.size.get(), 2);
            assert_eq!(r.pos, at);
        }
        assert_eq!(bullet_count(&mut app), 0);
        let score = *app.world().resource::<Score>();
        assert_eq!(score.points, 1);
        assert_eq!(score.rocks_destroyed, 1);
    }

    #[test]
    fn hit_tiny_rock_leaves_nothing() {
        let mut app = build_test_app();
        let at = Vec2::new(100.0, 100.0);
        app.world_mut().spawn(rock(at, 0));
        app.world_mut().spawn(bullet(at));
        app.update();

        assert!(rocks(&mut app).is_empty());
        assert_eq!(bullet_count(&mut app), 0);
        assert_eq!(app.world().resource::<Score>().points, 4);
    }

    #[test]
    fn score_grows_by_four_minus_size_for_each_size() {
        for size in 0..=3u8 {
            let mut app = build_test_app();
            let at = Vec2::new(200.0, 200.0);
            app.world_mut().spawn(rock(at, size));
            app.world_mut().spawn(bullet(at));
            app.update();
            assert_eq!(
                app.world().resource::<Score>().points,
                4 - size as u32,
                "size {size}"
            );
        }
    }

    #[test]
    fn missed_bullet_and_rock_survive() {
        let mut app = build_test_app();
        app.world_mut().spawn(rock(Vec2::new(100.0, 100.0), 2));
        app.world_mut().spawn(bullet(Vec2::new(500.0, 500.0)));
        app.update();

        assert_eq!(rocks(&mut app).len(), 1);
        assert_eq!(bullet_count(&mut app), 1);
        assert_eq!(app.world().resource::<Score>().points, 0);
    }

    #[test]
    fn rock_touching_ship_is_removed_without_score() {
        let mut app = build_test_app();
        let ship = Ship::new(Duration::ZERO);
        app.world_mut().spawn(rock(ship.pos + Vec2::new(20.0, 0.0), 1));
        app.world_mut().spawn(rock(Vec2::new(50.0, 50.0), 1));
        app.world_mut().spawn(ship);
        app.update();

        assert_eq!(rocks(&mut app).len(), 1);
        let score = *app.world().resource::<Score>();
        assert_eq!(score.points, 0);
        assert_eq!(score.ship_contacts, 1);
        assert_eq!(app.world_mut().query::<&Ship>().iter(app.world()).count(), 1);
    }
}
