//! Headless gameplay integration tests: the full schedule and observer bus
//! driven frame by frame against in-memory levels.

use bevy_ecs::prelude::*;
use rustc_hash::FxHashMap;

use potatoquest::components::movement::Movement;
use potatoquest::components::player::Player;
use potatoquest::components::transform::Transform;
use potatoquest::events::rescue::RescuedEvent;
use potatoquest::game;
use potatoquest::resources::debugmode::DebugMode;
use potatoquest::resources::endgame::EndGameSummary;
use potatoquest::resources::gameconfig::GameConfig;
use potatoquest::resources::gamestate::{GameState, GameStates};
use potatoquest::resources::input::InputState;
use potatoquest::resources::level::Level;
use potatoquest::resources::levelslider::LevelSlider;
use potatoquest::resources::levelsource::{LevelData, RescuableSpec, TileSpec};
use potatoquest::systems::time::update_world_time;

const DT: f32 = 1.0 / 60.0;
const EPSILON: f32 = 1e-2;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

/// Floor two tiles thick with its top at y = 704.
fn floor_level(friends: Vec<RescuableSpec>) -> LevelData {
    LevelData {
        tile_size: 32,
        background: None,
        tiles: vec![TileSpec {
            x: 0,
            y: 22,
            w: 32,
            h: 2,
        }],
        rescuables: friends,
    }
}

fn empty_level() -> LevelData {
    LevelData {
        tile_size: 32,
        background: Some([0, 0, 0]),
        tiles: vec![],
        rescuables: vec![],
    }
}

struct Game {
    world: World,
    schedule: Schedule,
}

impl Game {
    fn new(config: GameConfig, levels: FxHashMap<i32, LevelData>) -> Self {
        let mut world = World::new();
        game::init_world(&mut world, config, levels);
        game::start_game(&mut world);
        let mut game = Self {
            world,
            schedule: game::build_gameplay_schedule(),
        };
        // Applies the pending Setup -> Playing transition.
        game.frame(0.0);
        game
    }

    fn frame(&mut self, dt: f32) {
        update_world_time(&mut self.world, dt);
        self.schedule.run(&mut self.world);
    }

    fn frames(&mut self, count: usize) {
        for _ in 0..count {
            self.frame(DT);
        }
    }

    fn player(&mut self) -> (Transform, Movement, Player) {
        let mut q = self
            .world
            .query::<(&Transform, &Movement, &Player)>();
        let (t, m, p) = q.single(&self.world).unwrap();
        (*t, *m, p.clone())
    }

    fn place_player(&mut self, y: f32, vy: f32) {
        let mut q = self
            .world
            .query_filtered::<(&mut Transform, &mut Movement), With<Player>>();
        let (mut t, mut m) = q.single_mut(&mut self.world).unwrap();
        t.set_y(y);
        m.vy = vy;
        m.is_on_ground = false;
    }

    fn state(&self) -> GameStates {
        self.world.resource::<GameState>().get().clone()
    }

    fn slider(&self) -> &LevelSlider {
        self.world.resource::<LevelSlider>()
    }

    fn input(&mut self) -> Mut<'_, InputState> {
        self.world.resource_mut::<InputState>()
    }
}

fn levels(entries: Vec<(i32, LevelData)>) -> FxHashMap<i32, LevelData> {
    entries.into_iter().collect()
}

#[test]
fn setup_spawns_player_on_start_level() {
    let mut config = GameConfig::new();
    config.start_level = 2;
    let mut game = Game::new(
        config,
        levels(vec![(1, empty_level()), (2, floor_level(vec![]))]),
    );

    assert_eq!(game.state(), GameStates::Playing);
    assert_eq!(game.slider().current_level_num(), 2);
    assert_eq!(game.world.resource::<Level>().number(), 2);
    assert_eq!(game.world.resource::<Level>().tiles().len(), 1);

    let (t, m, _) = game.player();
    assert_eq!(t.x(), 496.0);
    assert_eq!(t.y(), 360.0);
    assert_eq!((t.width(), t.height()), (32, 48));
    assert_eq!(m.speed, 400.0);
}

#[test]
fn player_falls_and_lands_on_the_floor() {
    let mut game = Game::new(GameConfig::new(), levels(vec![(1, floor_level(vec![]))]));

    game.frames(90);

    let (t, m, p) = game.player();
    assert!(m.is_on_ground);
    assert!(approx_eq(t.bottom(), 704.0));
    assert_eq!(m.vy, 0.0);
    assert!(!p.air_direction_locked);
}

#[test]
fn walking_into_a_friend_rescues_it() {
    let friend = RescuableSpec {
        name: "cheese".into(),
        x: 15,
        y: 21,
        w: 1,
        h: 1,
    };
    let mut game = Game::new(
        GameConfig::new(),
        levels(vec![(1, floor_level(vec![friend]))]),
    );

    game.frames(90);

    assert!(game.world.resource::<Level>().rescuables().is_empty());
    let rescued = game.slider().rescued_characters();
    assert_eq!(rescued.len(), 1);
    assert!(rescued.contains("cheese"));
}

#[test]
fn rescue_events_accumulate_as_a_set() {
    let mut game = Game::new(GameConfig::new(), levels(vec![(1, empty_level())]));

    for name in ["milk", "butter", "milk", "dried_meat", "butter"] {
        game.world.trigger(RescuedEvent { name: name.into() });
    }
    game.world.flush();

    let rescued = game.slider().rescued_characters();
    assert_eq!(rescued.len(), 3);
    for name in ["milk", "butter", "dried_meat"] {
        assert!(rescued.contains(name));
    }
}

#[test]
fn leaving_the_top_loads_the_next_level() {
    let mut game = Game::new(
        GameConfig::new(),
        levels(vec![(1, floor_level(vec![])), (2, empty_level())]),
    );
    game.place_player(5.0, -600.0);

    game.frame(DT);

    assert_eq!(game.slider().current_level_num(), 2);
    assert_eq!(game.world.resource::<Level>().number(), 2);
    let (t, m, _) = game.player();
    assert!(approx_eq(t.y(), 768.0 - 48.0 - 5.0));
    assert!(approx_eq(m.vy, -600.0 + 2000.0 * DT));
}

#[test]
fn falling_out_of_the_bottom_returns_to_the_previous_level() {
    let mut config = GameConfig::new();
    config.start_level = 2;
    let mut game = Game::new(config, levels(vec![(1, empty_level()), (2, empty_level())]));
    game.place_player(768.0 - 48.0 - 1.0, 300.0);

    game.frame(DT);

    assert_eq!(game.slider().current_level_num(), 1);
    let (t, m, _) = game.player();
    assert!(approx_eq(t.y(), 5.0));
    assert!(approx_eq(m.vy, (300.0 + 2000.0 * DT) * 0.9));
}

#[test]
fn bottom_of_the_first_level_is_a_dead_end() {
    let mut game = Game::new(GameConfig::new(), levels(vec![(1, empty_level())]));
    game.place_player(768.0 - 48.0 - 1.0, 300.0);

    game.frames(3);

    assert_eq!(game.slider().current_level_num(), 1);
    let (t, _, _) = game.player();
    assert!(t.bottom() > 768.0);
}

#[test]
fn missing_level_falls_back_to_an_empty_one() {
    let mut game = Game::new(GameConfig::new(), levels(vec![]));

    let level = game.world.resource::<Level>();
    assert!(level.load_failed());
    assert!(level.tiles().is_empty());

    let (before, _, _) = game.player();
    game.frames(5);
    let (after, m, _) = game.player();
    assert!(after.y() > before.y());
    assert!(!m.is_on_ground);
}

#[test]
fn leaving_the_last_level_wins_and_freezes_play() {
    let mut config = GameConfig::new();
    config.max_level = 2;
    config.start_level = 2;
    let mut game = Game::new(config, levels(vec![(2, empty_level())]));
    game.world.trigger(RescuedEvent {
        name: "milk".into(),
    });
    game.world.flush();
    game.place_player(5.0, -600.0);

    game.frame(DT);

    assert!(game.slider().is_ended());
    assert_eq!(game.slider().current_level_num(), 2);
    let summary = game.world.resource::<EndGameSummary>();
    assert_eq!(summary.rescued, vec!["milk".to_string()]);
    assert_eq!(summary.total, 4);

    game.frame(DT);
    assert_eq!(game.state(), GameStates::GameWon);

    let (frozen, frozen_m, _) = game.player();
    game.frames(10);
    let (t, m, _) = game.player();
    assert_eq!(t, frozen);
    assert_eq!(m, frozen_m);
}

#[test]
fn debug_key_toggles_on_press_only() {
    let mut game = Game::new(GameConfig::new(), levels(vec![(1, empty_level())]));
    assert!(!game.world.contains_resource::<DebugMode>());

    game.input().mode_debug.set_down(true);
    game.frame(DT);
    assert!(game.world.contains_resource::<DebugMode>());

    // Still held: no second toggle.
    game.input().mode_debug.set_down(true);
    game.frame(DT);
    assert!(game.world.contains_resource::<DebugMode>());

    game.input().mode_debug.set_down(false);
    game.frame(DT);
    game.input().mode_debug.set_down(true);
    game.frame(DT);
    assert!(!game.world.contains_resource::<DebugMode>());
}

#[test]
fn debug_walk_ignores_gravity() {
    let mut game = Game::new(GameConfig::new(), levels(vec![(1, floor_level(vec![]))]));
    game.world.insert_resource(DebugMode {});

    let (before, _, _) = game.player();
    game.input().move_right.set_down(true);
    game.frames(10);
    let (after, _, _) = game.player();

    assert_eq!(after.y(), before.y());
    assert!(after.x() > before.x());
}

#[test]
fn pause_key_freezes_and_resumes() {
    let mut game = Game::new(GameConfig::new(), levels(vec![(1, empty_level())]));

    game.input().pause.set_down(true);
    game.frame(DT);
    game.input().pause.set_down(false);
    game.frame(DT);
    assert_eq!(game.state(), GameStates::Paused);

    let (paused_at, _, _) = game.player();
    game.frames(10);
    let (still, _, _) = game.player();
    assert_eq!(paused_at, still);

    game.input().pause.set_down(true);
    game.frame(DT);
    game.input().pause.set_down(false);
    game.frame(DT);
    assert_eq!(game.state(), GameStates::Playing);
    let (moving, _, _) = game.player();
    assert!(moving.y() > still.y());
}

#[test]
fn restart_after_winning_starts_a_fresh_run() {
    let mut config = GameConfig::new();
    config.max_level = 2;
    config.start_level = 2;
    let mut game = Game::new(config, levels(vec![(2, empty_level())]));
    game.world.trigger(RescuedEvent {
        name: "butter".into(),
    });
    game.world.flush();
    game.place_player(5.0, -600.0);
    game.frames(2);
    assert_eq!(game.state(), GameStates::GameWon);

    game.input().restart.set_down(true);
    game.frame(DT);
    game.input().restart.set_down(false);
    game.frames(2);

    assert_eq!(game.state(), GameStates::Playing);
    let slider = game.slider();
    assert!(!slider.is_ended());
    assert_eq!(slider.current_level_num(), 2);
    assert!(slider.rescued_characters().is_empty());
    assert!(!game.world.contains_resource::<EndGameSummary>());

    let mut players = game.world.query::<&Player>();
    assert_eq!(players.iter(&game.world).count(), 1);
    let (t, _, _) = game.player();
    assert!(t.y() > 360.0);
}

#[test]
fn restart_key_only_acts_off_the_playfield() {
    let mut game = Game::new(GameConfig::new(), levels(vec![(1, empty_level())]));
    game.world.trigger(RescuedEvent { name: "milk".into() });
    game.world.flush();

    game.input().restart.set_down(true);
    game.frame(DT);
    game.input().restart.set_down(false);
    game.frame(DT);
    assert_eq!(game.state(), GameStates::Playing);
    assert_eq!(game.slider().rescued_characters().len(), 1);

    game.input().pause.set_down(true);
    game.frame(DT);
    game.input().pause.set_down(false);
    game.frame(DT);
    assert_eq!(game.state(), GameStates::Paused);

    game.input().restart.set_down(true);
    game.frame(DT);
    game.input().restart.set_down(false);
    game.frames(2);
    assert_eq!(game.state(), GameStates::Playing);
    assert!(game.slider().rescued_characters().is_empty());
}
