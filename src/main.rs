//! Potato Quest main entry point.
//!
//! A vertical platformer written in Rust using:
//! - **raylib** for windowing, input and drawing
//! - **bevy_ecs** for the entity-component-system architecture
//!
//! # Main Loop
//!
//! 1. Parse the command line and load `config.ini` into [`GameConfig`]
//! 2. Open the raylib window and build the ECS world
//! 3. Enter the `Setup` state, which loads the start level and spawns the player
//! 4. Every frame: update time, poll input, advance the player, render
//! 5. Leave when the window is closed or the game reaches `Quitting`
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --start-level 3
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use std::path::PathBuf;

use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info, warn};

use potatoquest::game;
use potatoquest::resources::debugmode::DebugMode;
use potatoquest::resources::gameconfig::GameConfig;
use potatoquest::resources::gamestate::{GameState, GameStates};
use potatoquest::resources::levelsource::JsonLevelSource;
use potatoquest::systems::input::{input_actions_system, update_input_state};
use potatoquest::systems::player::player_update_system;
use potatoquest::systems::render::render_system;
use potatoquest::systems::time::update_world_time;

/// Potato Quest
#[derive(Parser)]
#[command(version, about = "Climb ten levels and bring your friends home.")]
struct Cli {
    /// Path to the configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Level to start on, overriding the configuration file.
    #[arg(long, value_name = "N")]
    start_level: Option<i32>,

    /// Start with debug walking and overlays enabled.
    #[arg(long)]
    debug: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}; using default settings", e);
    }
    if let Some(start_level) = cli.start_level {
        config.start_level = start_level;
    }

    // --------------- Raylib window ---------------
    let (mut rl, thread) = raylib::init()
        .size(config.window_width as i32, config.window_height as i32)
        .title(&config.title)
        .build();
    rl.set_target_fps(config.target_fps);
    // Escape pauses instead of closing
    rl.set_exit_key(None);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    let source = JsonLevelSource::new(config.levels_dir.clone());
    game::init_world(&mut world, config, source);
    if cli.debug {
        world.insert_resource(DebugMode {});
    }
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    game::start_game(&mut world);

    let mut update = game::build_gameplay_schedule();
    update.add_systems(update_input_state.before(input_actions_system));
    update.add_systems(render_system.after(player_update_system));

    if let Err(e) = update.initialize(&mut world) {
        error!("Failed to initialize schedule: {:?}", e);
        std::process::exit(1);
    }

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
        && world.resource::<GameState>().get() != &GameStates::Quitting
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers();
    }
    info!("Bye!");
}
