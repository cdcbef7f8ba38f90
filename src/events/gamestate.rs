//! Game state transition event and observer.
//!
//! Systems request a change to the high-level [`GameStates`] by updating
//! [`NextGameState`]. Emitting a [`GameStateChangedEvent`] then triggers the
//! observer in this module, which applies the transition to [`GameState`]
//! and runs the enter hook stored in
//! [`crate::resources::systemsstore::SystemsStore`] for the new state.
use crate::resources::gamestate::NextGameStates::{Pending, Unchanged};
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::systemsstore::SystemsStore;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

/// Event used to indicate that a pending game state transition should be
/// applied.
#[derive(Event, Debug, Clone, Copy)]
pub struct GameStateChangedEvent {}

/// Observer that applies a pending game state transition.
///
/// - Reads the intention from [`NextGameState`].
/// - If pending, copies the new value into [`GameState`], runs the exit and
///   enter hooks and resets [`NextGameState`] to [`Unchanged`].
/// - If any required resource is missing, logs a diagnostic and returns.
pub fn observe_gamestate_change_event(
    _trigger: On<GameStateChangedEvent>,
    mut commands: Commands,
    mut next_game_state: Option<ResMut<NextGameState>>,
    mut game_state: Option<ResMut<GameState>>,
    systems_store: Option<Res<SystemsStore>>,
) {
    debug!("GameStateChangedEvent triggered");

    let (Some(next_game_state), Some(game_state)) =
        (next_game_state.as_deref_mut(), game_state.as_deref_mut())
    else {
        warn!(
            "One or more resources missing in observe_gamestate_change_event. next_state: {:?}, game_state: {:?}",
            next_game_state.is_some(),
            game_state.is_some()
        );
        return;
    };

    match next_game_state.get().clone() {
        Pending(new_state) => {
            let old_state = game_state.get().clone();
            info!("Transitioning from {:?} to {:?}", old_state, new_state);
            game_state.set(new_state.clone());
            next_game_state.reset();
            on_state_exit(&old_state);
            on_state_enter(&new_state, &mut commands, systems_store.as_deref());
        }
        Unchanged => {
            debug!("No state change pending.");
        }
    }
}

/// Internal: run state-specific "enter" hooks for the given state.
fn on_state_enter(
    state: &GameStates,
    commands: &mut Commands,
    systems_store: Option<&SystemsStore>,
) {
    match state {
        GameStates::None => debug!("Entered None state"),
        GameStates::Setup => match systems_store.and_then(|store| store.get("setup")) {
            Some(setup_system_id) => commands.run_system(*setup_system_id),
            None => warn!("Setup system not found in SystemsStore"),
        },
        GameStates::Playing => debug!("Entered Playing state"),
        GameStates::Paused => info!("Game paused"),
        GameStates::GameWon => info!("Showing end screen"),
        GameStates::Quitting => info!("Quitting"),
    }
}

/// Internal: log leaving the given state.
fn on_state_exit(state: &GameStates) {
    match state {
        GameStates::Paused => info!("Game resumed"),
        other => debug!("Exited {:?} state", other),
    }
}
