//! World bootstrap and gameplay schedule.
//!
//! [`init_world`] inserts every resource the game needs and registers the
//! observers; [`start_game`] requests the `Setup` state, whose hook
//! ([`setup`]) loads the first level and spawns the player. The returned
//! [`build_gameplay_schedule`] runs without a window so the whole loop can
//! be driven headless; the binary adds input polling and rendering on top.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use log::{info, warn};

use crate::components::movement::Movement;
use crate::components::player::Player;
use crate::components::transform::Transform;
use crate::events::boundary::level_transition_observer;
use crate::events::gamestate::{GameStateChangedEvent, observe_gamestate_change_event};
use crate::events::gamewon::game_won_observer;
use crate::events::rescue::rescue_observer;
use crate::events::switchdebug::switch_debug_observer;
use crate::resources::endgame::EndGameSummary;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::input::InputState;
use crate::resources::level::Level;
use crate::resources::levelslider::LevelSlider;
use crate::resources::levelsource::{LevelLoader, LevelSource};
use crate::resources::screensize::ScreenSize;
use crate::resources::systemsstore::SystemsStore;
use crate::resources::worldtime::WorldTime;
use crate::systems::gamestate::{check_pending_state, level_not_ended, state_is_playing};
use crate::systems::input::input_actions_system;
use crate::systems::player::player_update_system;

/// Insert resources, register observers and state hooks.
pub fn init_world(world: &mut World, config: GameConfig, source: impl LevelSource + 'static) {
    world.insert_resource(WorldTime::default());
    world.insert_resource(ScreenSize {
        w: config.window_width as i32,
        h: config.window_height as i32,
    });
    world.insert_resource(InputState::default());
    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());
    world.insert_resource(LevelLoader::new(source));
    world.insert_resource(config);

    register_observers(world);

    let mut systems_store = SystemsStore::new();
    systems_store.register(world, "setup", setup);
    world.insert_resource(systems_store);

    world.flush();
}

/// Register the observers of the event bus, in fan-out order.
pub fn register_observers(world: &mut World) {
    world.spawn(Observer::new(observe_gamestate_change_event));
    world.spawn(Observer::new(rescue_observer));
    world.spawn(Observer::new(level_transition_observer));
    world.spawn(Observer::new(game_won_observer));
    world.spawn(Observer::new(switch_debug_observer));
    world.flush();
}

/// Enter the `Setup` state immediately.
pub fn start_game(world: &mut World) {
    world.resource_mut::<NextGameState>().set(GameStates::Setup);
    world.trigger(GameStateChangedEvent {});
    world.flush();
}

/// Systems that advance the game one frame. No rendering or polling.
pub fn build_gameplay_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems(input_actions_system);
    update.add_systems(check_pending_state.after(input_actions_system));
    update.add_systems(
        player_update_system
            .run_if(state_is_playing)
            .run_if(level_not_ended)
            .after(check_pending_state),
    );
    update
}

/// `Setup` hook: build the slider, load the start level and spawn the player
/// in the middle of the screen. Any previous run is discarded.
pub fn setup(
    mut commands: Commands,
    config: Res<GameConfig>,
    loader: Option<Res<LevelLoader>>,
    mut next_state: ResMut<NextGameState>,
    players: Query<Entity, With<Player>>,
) {
    for entity in players.iter() {
        commands.entity(entity).despawn();
    }
    commands.remove_resource::<EndGameSummary>();

    let mut slider = LevelSlider::new(config.min_level, config.max_level, config.min_level);
    if !slider.go_to_level(config.start_level) {
        warn!(
            "Start level {} outside {}..={}, starting at {}",
            config.start_level,
            config.min_level,
            config.max_level,
            slider.current_level_num()
        );
    }

    let level = match loader {
        Some(loader) => Level::load(loader.source(), slider.current_level_num()),
        None => {
            warn!("No level loader present, using an empty level");
            Level::fallback(slider.current_level_num())
        }
    };

    let x = (config.window_width as f32 - config.player_width as f32) / 2.0;
    let y = (config.window_height as f32 - config.player_height as f32) / 2.0;
    commands.spawn((
        Transform::new(x, y, config.player_width, config.player_height),
        Movement::new(config.speed, config.gravity, config.jump_velocity),
        Player::new(config.max_charge_time),
    ));
    info!(
        "Player spawned at ({}, {}) on level {}",
        x,
        y,
        slider.current_level_num()
    );

    commands.insert_resource(level);
    commands.insert_resource(slider);
    next_state.set(GameStates::Playing);
}
