//! Rendering plugin: sprites, transform sync and the score HUD.
//!
//! Gameplay state lives in screen coordinates (origin top-left, +y down,
//! rotation in degrees).  This module is the only place that converts it to
//! Bevy's world space.
//!
//! ## Systems
//!
//! | System                        | Schedule  | Purpose                              |
//! |-------------------------------|-----------|--------------------------------------|
//! | `setup_hud_score`             | Startup   | Spawn the score HUD node             |
//! | `check_sprite_assets_system`  | Update    | Exit if a sprite image failed to load|
//! | `attach_ship_sprite_system`   | Update    | Give new ships their sprite          |
//! | `attach_rock_sprite_system`   | Update    | Give new rocks their sprite          |
//! | `attach_bullet_sprite_system` | Update    | Give new bullets their sprite        |
//! | `sync_transform_system::<T>`  | Update    | Copy game position/rotation to world |
//! | `hud_score_display_system`    | Update    | Refresh score HUD text               |

use crate::bullet::Bullet;
use crate::config::GameConfig;
use crate::constants::{BULLET_SPRITE_SIZE, SHIP_SPRITE_SIZE};
use crate::geometry::screen_to_world;
use crate::graphics::{
    check_sprite_assets_system, load_sprite_assets, setup_camera, SpriteAssets, SpriteLoadStatus,
};
use crate::rock::Rock;
use crate::session::Score;
use crate::ship::Ship;
use bevy::prelude::*;

/// Marker for the score HUD root node.
#[derive(Component)]
pub struct HudScoreDisplay;

/// Anything drawn at a game-space position and rotation.
pub trait ScreenPlaced: Component {
    /// Draw order; higher is drawn on top.
    const LAYER: f32;

    fn screen_pos(&self) -> Vec2;

    /// Degrees, counter-clockwise.
    fn screen_rot(&self) -> f32;
}

impl ScreenPlaced for Rock {
    const LAYER: f32 = 0.0;

    fn screen_pos(&self) -> Vec2 {
        self.pos
    }

    fn screen_rot(&self) -> f32 {
        self.rot
    }
}

impl ScreenPlaced for Bullet {
    const LAYER: f32 = 1.0;

    fn screen_pos(&self) -> Vec2 {
        self.pos
    }

    fn screen_rot(&self) -> f32 {
        self.rot
    }
}

impl ScreenPlaced for Ship {
    const LAYER: f32 = 2.0;

    fn screen_pos(&self) -> Vec2 {
        self.pos
    }

    fn screen_rot(&self) -> f32 {
        self.rot
    }
}

/// World-space transform for a game-space pose.
pub fn world_transform(pos: Vec2, rot_degrees: f32, layer: f32) -> Transform {
    Transform::from_translation(screen_to_world(pos).extend(layer))
        .with_rotation(Quat::from_rotation_z(rot_degrees.to_radians()))
}

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SpriteLoadStatus>()
            .add_systems(
                Startup,
                (
                    setup_camera,
                    load_sprite_assets,
                    setup_hud_score.after(crate::config::load_game_config),
                ),
            )
            .add_systems(
                Update,
                (
                    check_sprite_assets_system,
                    (
                        attach_ship_sprite_system,
                        attach_rock_sprite_system,
                        attach_bullet_sprite_system,
                    ),
                    (
                        sync_transform_system::<Ship>,
                        sync_transform_system::<Rock>,
                        sync_transform_system::<Bullet>,
                    ),
                    hud_score_display_system,
                ),
            );
    }
}

// ── Sprites ───────────────────────────────────────────────────────────────────

fn sized_sprite(image: &Handle<Image>, size: Vec2) -> Sprite {
    Sprite {
        image: image.clone(),
        custom_size: Some(size),
        ..default()
    }
}

pub fn attach_ship_sprite_system(
    mut commands: Commands,
    q: Query<Entity, Added<Ship>>,
    assets: Res<SpriteAssets>,
) {
    for entity in q.iter() {
        commands
            .entity(entity)
            .insert(sized_sprite(&assets.ship, SHIP_SPRITE_SIZE));
    }
}

pub fn attach_rock_sprite_system(
    mut commands: Commands,
    q: Query<(Entity, &Rock), Added<Rock>>,
    assets: Res<SpriteAssets>,
) {
    for (entity, rock) in q.iter() {
        let image = &assets.rocks[rock.size.get() as usize][rock.variant];
        commands
            .entity(entity)
            .insert(sized_sprite(image, rock.sprite_size()));
    }
}

pub fn attach_bullet_sprite_system(
    mut commands: Commands,
    q: Query<Entity, Added<Bullet>>,
    assets: Res<SpriteAssets>,
) {
    for entity in q.iter() {
        commands
            .entity(entity)
            .insert(sized_sprite(&assets.bullet, BULLET_SPRITE_SIZE));
    }
}

/// Copy each `T`'s game-space pose into its `Transform`.
pub fn sync_transform_system<T: ScreenPlaced>(mut q: Query<(&T, &mut Transform)>) {
    for (placed, mut transform) in q.iter_mut() {
        *transform = world_transform(placed.screen_pos(), placed.screen_rot(), T::LAYER);
    }
}

// ── HUD ───────────────────────────────────────────────────────────────────────

/// Spawn the score HUD in the top-left corner.
pub fn setup_hud_score(mut commands: Commands, config: Res<GameConfig>) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(10.0),
                top: Val::Px(10.0),
                ..default()
            },
            HudScoreDisplay,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(score_text(&Score::default())),
                TextFont {
                    font_size: config.hud_font_size,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

pub fn score_text(score: &Score) -> String {
    format!("Score: {}", score.points)
}

/// Refresh the HUD text whenever the score changes.
pub fn hud_score_display_system(
    score: Res<Score>,
    parent_query: Query<&Children, With<HudScoreDisplay>>,
    mut text_query: Query<&mut Text>,
) {
    if !score.is_changed() {
        return;
    }
    for children in parent_query.iter() {
        for child in children.iter() {
            if let Ok(mut text) = text_query.get_mut(child) {
                *text = Text::new(score_text(&score));
            }
        }
    }
}
