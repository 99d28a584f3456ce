use crate::constants::{BULLET_IMAGE, ROCK_IMAGES, SHIP_IMAGE};
use crate::error::GameError;
use bevy::asset::LoadState;
use bevy::prelude::*;

/// Image handles for every sprite in the game.
///
/// Created by [`load_sprite_assets`] at startup; `rocks[size][variant]`.
#[derive(Resource, Debug, Clone)]
pub struct SpriteAssets {
    pub ship: Handle<Image>,
    pub bullet: Handle<Image>,
    pub rocks: [[Handle<Image>; 2]; 4],
}

impl SpriteAssets {
    /// Every handle paired with the path it was loaded from.
    pub fn iter_with_paths(&self) -> impl Iterator<Item = (&'static str, &Handle<Image>)> {
        let rocks = ROCK_IMAGES
            .iter()
            .flatten()
            .copied()
            .zip(self.rocks.iter().flatten());
        [(SHIP_IMAGE, &self.ship), (BULLET_IMAGE, &self.bullet)]
            .into_iter()
            .chain(rocks)
    }
}

/// Queue every sprite image for loading.
pub fn load_sprite_assets(mut commands: Commands, asset_server: Res<AssetServer>) {
    let assets = SpriteAssets {
        ship: asset_server.load(SHIP_IMAGE),
        bullet: asset_server.load(BULLET_IMAGE),
        rocks: ROCK_IMAGES.map(|variants| variants.map(|path| asset_server.load(path))),
    };
    commands.insert_resource(assets);
    info!("Sprite assets queued");
}

/// Progress of the sprite images queued by [`load_sprite_assets`].
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SpriteLoadStatus {
    #[default]
    Pending,
    Ready,
    Failed,
}

/// Abort the app if any sprite image failed to load.
///
/// Stops checking once every image is loaded or one has failed.
pub fn check_sprite_assets_system(
    assets: Res<SpriteAssets>,
    asset_server: Res<AssetServer>,
    mut status: ResMut<SpriteLoadStatus>,
    mut exit: MessageWriter<AppExit>,
) {
    if *status != SpriteLoadStatus::Pending {
        return;
    }

    let mut all_loaded = true;
    for (path, handle) in assets.iter_with_paths() {
        match asset_server.get_load_state(handle.id()) {
            Some(LoadState::Loaded) => {}
            Some(LoadState::Failed(reason)) => {
                let err = GameError::AssetLoad {
                    path: path.to_string(),
                    reason: reason.to_string(),
                };
                error!("{err}");
                exit.write(AppExit::error());
                *status = SpriteLoadStatus::Failed;
                return;
            }
            _ => all_loaded = false,
        }
    }

    if all_loaded {
        info!("Sprite assets loaded");
        *status = SpriteLoadStatus::Ready;
    }
}

/// Setup camera for 2D rendering
pub fn setup_camera(mut commands: Commands) {
    // Default projection maps one world unit to one window pixel
    commands.spawn(Camera2d);
    info!("Camera spawned");
}
