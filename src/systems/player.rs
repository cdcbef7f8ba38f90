//! Per-frame player update.
//!
//! [`player_update_system`] reads the [`InputState`], advances the player
//! entity against the resident [`Level`] and emits the resulting events:
//! one [`RescuedEvent`] per friend touched, then at most one
//! [`BoundaryHitEvent`]. The observers for those events run when the
//! system's commands are applied, still inside the same frame.
//!
//! The frame logic itself lives in [`step_player`] and [`step_debug_walk`],
//! plain functions over the player's components, so it can be exercised
//! without a world.

use bevy_ecs::prelude::*;
use log::{debug, trace};

use crate::components::movement::{Movement, charge_multiplier};
use crate::components::player::{AnimationState, Facing, Player};
use crate::components::transform::Transform;
use crate::events::boundary::{BoundaryHitEvent, BoundarySide};
use crate::events::rescue::RescuedEvent;
use crate::resources::debugmode::DebugMode;
use crate::resources::input::InputState;
use crate::resources::level::Level;
use crate::resources::screensize::ScreenSize;
use crate::resources::worldtime::WorldTime;
use crate::systems::collision::{check_bounds, check_on_ground, handle_collisions};

/// What the player wants to do this frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlayerIntent {
    /// -1 left, 0 none, 1 right.
    pub horizontal: f32,
    /// -1 up, 0 none, 1 down. Only used by the debug walk.
    pub vertical: f32,
    pub jump_held: bool,
}

impl PlayerIntent {
    pub fn from_input(input: &InputState) -> Self {
        Self {
            horizontal: input.horizontal(),
            vertical: input.vertical(),
            jump_held: input.jump.active,
        }
    }
}

/// Events produced by one player step.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlayerStep {
    pub rescued: Vec<String>,
    pub boundary: Option<BoundarySide>,
}

/// Advance the player one frame and emit the resulting events.
///
/// Does nothing when there is no player entity or no level resident.
pub fn player_update_system(
    mut commands: Commands,
    time: Res<WorldTime>,
    input: Res<InputState>,
    screen: Res<ScreenSize>,
    debug_mode: Option<Res<DebugMode>>,
    level: Option<ResMut<Level>>,
    mut players: Query<(&mut Transform, &mut Movement, &mut Player)>,
) {
    let Some(mut level) = level else {
        trace!("No level resident, skipping player update");
        return;
    };
    let intent = PlayerIntent::from_input(&input);

    for (mut transform, mut movement, mut player) in players.iter_mut() {
        let step = if debug_mode.is_some() {
            PlayerStep {
                rescued: Vec::new(),
                boundary: step_debug_walk(
                    &mut transform,
                    &mut movement,
                    &mut player,
                    &intent,
                    (screen.w, screen.h),
                    time.delta,
                ),
            }
        } else {
            step_player(
                &mut transform,
                &mut movement,
                &mut player,
                &intent,
                &mut level,
                (screen.w, screen.h),
                time.delta,
            )
        };

        for name in step.rescued {
            commands.trigger(RescuedEvent { name });
        }
        if let Some(side) = step.boundary {
            debug!("Player left the screen through the {:?} edge", side);
            commands.trigger(BoundaryHitEvent { side });
        }
    }
}

/// One frame of normal platforming for the player.
///
/// Order: horizontal intent, charge jump, gravity, tile collision with wall
/// bounce, ground probe, animation state, rescue, boundary check.
pub fn step_player(
    transform: &mut Transform,
    movement: &mut Movement,
    player: &mut Player,
    intent: &PlayerIntent,
    level: &mut Level,
    (window_width, window_height): (i32, i32),
    dt: f32,
) -> PlayerStep {
    let was_on_ground = movement.is_on_ground;
    apply_horizontal_intent(movement, player, intent.horizontal);
    update_charge_jump(movement, player, intent.jump_held, dt);
    movement.apply_gravity(dt);

    let prior_vx = movement.vx;
    let outcome = handle_collisions(transform, movement, level.tiles(), dt);
    if !was_on_ground && prior_vx != 0.0 && outcome.hit_horizontal {
        movement.vx = -prior_vx;
        player.air_movement_disabled_by_wall = true;
        player.facing = player.facing.flipped();
        debug!("Bounced off a wall, vx {} -> {}", prior_vx, movement.vx);
    }

    let grounded = check_on_ground(transform, level.tiles());
    if grounded && !was_on_ground {
        player.reset_air_control();
    }
    movement.is_on_ground = grounded;

    player.animation = select_animation(movement, player);

    let rescued = level.take_rescued(transform);
    let boundary = check_bounds(transform, movement, window_width, window_height);

    PlayerStep { rescued, boundary }
}

/// One frame of the debug walk: four directions at walking speed, no
/// gravity, tiles or friends. Boundary exits are still reported.
pub fn step_debug_walk(
    transform: &mut Transform,
    movement: &mut Movement,
    player: &mut Player,
    intent: &PlayerIntent,
    (window_width, window_height): (i32, i32),
    dt: f32,
) -> Option<BoundarySide> {
    movement.vx = intent.horizontal * movement.speed;
    movement.vy = intent.vertical * movement.speed;
    if let Some(facing) = Facing::from_direction(intent.horizontal) {
        player.facing = facing;
    }
    player.clear_charge();
    player.was_space_pressed = intent.jump_held;
    movement.update_position(transform, dt);
    player.animation = if movement.vx != 0.0 || movement.vy != 0.0 {
        AnimationState::Run
    } else {
        AnimationState::Idle
    };
    check_bounds(transform, movement, window_width, window_height)
}

fn apply_horizontal_intent(movement: &mut Movement, player: &mut Player, direction: f32) {
    if movement.is_on_ground {
        movement.set_horizontal_velocity(direction);
        if let Some(facing) = Facing::from_direction(direction) {
            player.facing = facing;
        }
        return;
    }
    // No input mid-air keeps the current vx; only a committed direction locks.
    if player.air_movement_disabled_by_wall || player.air_direction_locked || direction == 0.0 {
        return;
    }
    movement.set_horizontal_velocity(direction);
    if let Some(facing) = Facing::from_direction(direction) {
        player.facing = facing;
    }
    player.air_direction_locked = true;
}

fn update_charge_jump(movement: &mut Movement, player: &mut Player, jump_held: bool, dt: f32) {
    if movement.is_on_ground {
        if jump_held {
            player.accumulate_charge(dt);
        } else if player.was_space_pressed && player.is_charging_jump {
            let multiplier = charge_multiplier(player.charge_time, player.max_charge_time);
            if movement.jump(multiplier) {
                debug!(
                    "Jump after {:.2}s charge, multiplier {:.2}, vy {}",
                    player.charge_time, multiplier, movement.vy
                );
                if movement.vx != 0.0 {
                    player.air_direction_locked = true;
                }
            }
            player.clear_charge();
        }
    } else if player.is_charging_jump {
        player.clear_charge();
    }
    player.was_space_pressed = jump_held;
}

fn select_animation(movement: &Movement, player: &Player) -> AnimationState {
    if !movement.is_on_ground {
        AnimationState::Jump
    } else if player.is_charging_jump {
        AnimationState::Charge
    } else if movement.vx != 0.0 {
        AnimationState::Run
    } else {
        AnimationState::Idle
    }
}
