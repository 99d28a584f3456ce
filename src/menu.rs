//! Top-level `GameState` machine and the pass-through screens.
//!
//! ## States
//!
//! | State            | Description                                       |
//! |------------------|---------------------------------------------------|
//! | `StartScreen`    | Initial state; immediately hands over to `Playing` |
//! | `Playing`        | A session is running; all gameplay systems active |
//! | `GameOverScreen` | Immediately hands back to `StartScreen`           |
//!
//! Neither screen shows anything yet, so a session that ends starts over
//! straight away.  Nothing in the game ends a session on its own: the player
//! quits by closing the window.
//!
//! ## Systems (registered by `MenuPlugin`)
//!
//! | System                  | Schedule                     |
//! |-------------------------|------------------------------|
//! | `show_start_screen`     | `OnEnter(StartScreen)`       |
//! | `show_game_over_screen` | `OnEnter(GameOverScreen)`    |
//! | `log_state_transitions` | `Update`                     |

use bevy::prelude::*;

// ── Game state ────────────────────────────────────────────────────────────────

/// Top-level application state machine.
///
/// Every gameplay system in [`crate::simulation::SimulationPlugin`] runs
/// under `.run_if(in_state(GameState::Playing))`.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    /// Title screen; shown on startup.
    #[default]
    StartScreen,
    /// Active gameplay.
    Playing,
    /// Shown after a session ends.
    GameOverScreen,
}

// ── Plugin ────────────────────────────────────────────────────────────────────

/// Registers `GameState` and the screen handlers.
///
/// Add this plugin before any plugin that uses `in_state(GameState::..)`.
pub struct MenuPlugin;

impl Plugin for MenuPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .add_systems(OnEnter(GameState::StartScreen), show_start_screen)
            .add_systems(OnEnter(GameState::GameOverScreen), show_game_over_screen)
            .add_systems(Update, log_state_transitions);
    }
}

/// `OnEnter(StartScreen)`: nothing to show, go straight to a new session.
pub fn show_start_screen(mut next_state: ResMut<NextState<GameState>>) {
    next_state.set(GameState::Playing);
}

/// `OnEnter(GameOverScreen)`: nothing to show, go back to the start screen.
pub fn show_game_over_screen(mut next_state: ResMut<NextState<GameState>>) {
    next_state.set(GameState::StartScreen);
}

/// Log every state change.
pub fn log_state_transitions(state: Res<State<GameState>>) {
    if state.is_changed() {
        info!("Game state: {:?}", state.get());
    }
}
