//! Input systems.
//!
//! - [`update_input_state`] reads hardware input from Raylib each frame and
//!   writes the results into [`InputState`].
//! - [`input_actions_system`] turns key presses into game actions: toggling
//!   debug mode via [`SwitchDebugEvent`], pausing/resuming play and
//!   restarting a run.
use bevy_ecs::prelude::*;
use log::debug;

use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::input::{BoolState, InputState};

/// Poll Raylib for keyboard input and update the `InputState` resource.
pub fn update_input_state(mut input: ResMut<InputState>, rl: NonSend<raylib::RaylibHandle>) {
    let poll = |state: &mut BoolState| {
        let down = state.bindings().any(|key| rl.is_key_down(key));
        state.set_down(down);
    };

    poll(&mut input.move_left);
    poll(&mut input.move_right);
    poll(&mut input.move_up);
    poll(&mut input.move_down);
    poll(&mut input.jump);
    poll(&mut input.mode_debug);
    poll(&mut input.pause);
    poll(&mut input.restart);
}

/// React to action keys pressed this frame.
///
/// The debug key toggles [`crate::resources::debugmode::DebugMode`] in any
/// state. The pause key switches between `Playing` and `Paused`, and leaves
/// the end screen. The restart key goes back to `Setup` from the pause and
/// end screens.
pub fn input_actions_system(
    mut commands: Commands,
    input: Res<InputState>,
    state: Res<GameState>,
    mut next_state: ResMut<NextGameState>,
) {
    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }

    if input.pause.just_pressed {
        match state.get() {
            GameStates::Playing => next_state.set(GameStates::Paused),
            GameStates::Paused => next_state.set(GameStates::Playing),
            GameStates::GameWon => next_state.set(GameStates::Quitting),
            other => debug!("Pause key ignored in {:?}", other),
        }
    } else if input.restart.just_pressed {
        match state.get() {
            GameStates::Paused | GameStates::GameWon => next_state.set(GameStates::Setup),
            other => debug!("Restart key ignored in {:?}", other),
        }
    }
}
