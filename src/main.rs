use bevy::prelude::*;
use bevy::window::WindowResolution;
use space_rocks::config::{self, GameConfig};
use space_rocks::constants::{HEIGHT, TITLE, WIDTH};
use space_rocks::menu::MenuPlugin;
use space_rocks::rendering::RenderingPlugin;
use space_rocks::simulation::SimulationPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: TITLE.into(),
                resolution: WindowResolution::new(WIDTH as u32, HEIGHT as u32),
                resizable: false,
                ..Default::default()
            }),
            ..Default::default()
        }))
        .insert_resource(ClearColor(Color::BLACK))
        // Compiled defaults; load_game_config overwrites them from
        // assets/game.toml (if present) before the first session starts.
        .insert_resource(GameConfig::default())
        .add_systems(Startup, config::load_game_config)
        .add_plugins(MenuPlugin)
        .add_plugins(SimulationPlugin)
        .add_plugins(RenderingPlugin)
        .run();
}
