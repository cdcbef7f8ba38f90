//! Game state systems and run conditions.
use crate::events::gamestate::GameStateChangedEvent;
use crate::resources::gamestate::{GameState, GameStates, NextGameState, NextGameStates};
use crate::resources::levelslider::LevelSlider;
use bevy_ecs::prelude::*;

/// Trigger a [`GameStateChangedEvent`] when a transition is pending.
pub fn check_pending_state(mut commands: Commands, next_state: Res<NextGameState>) {
    if let NextGameStates::Pending(_new_state) = next_state.get() {
        commands.trigger(GameStateChangedEvent {});
    }
}

pub fn state_is_playing(state: Res<GameState>) -> bool {
    matches!(state.get(), GameStates::Playing)
}

/// False once the last level has been left through the top.
pub fn level_not_ended(slider: Option<Res<LevelSlider>>) -> bool {
    slider.is_some_and(|slider| !slider.is_ended())
}
