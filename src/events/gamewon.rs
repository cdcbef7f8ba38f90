//! End-of-game event.
//!
//! Triggered once, when the player climbs out of the last level. The observer
//! stores an [`EndGameSummary`] for the end screen and requests the
//! [`GameStates::GameWon`] state.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

use crate::resources::endgame::EndGameSummary;
use crate::resources::gamestate::{GameStates, NextGameState};

/// The game was won. `rescued` holds the names of every friend saved.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct GameWonEvent {
    pub rescued: Vec<String>,
}

/// Observer that builds the end-game summary and requests the won state.
pub fn game_won_observer(
    trigger: On<GameWonEvent>,
    mut commands: Commands,
    mut next_state: ResMut<NextGameState>,
) {
    let summary = EndGameSummary::from_rescued(trigger.event().rescued.as_slice());
    info!(
        "Game won: rescued {}/{} friends",
        summary.rescued.len(),
        summary.total
    );
    commands.insert_resource(summary);
    next_state.set(GameStates::GameWon);
}
