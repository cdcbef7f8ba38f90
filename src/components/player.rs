//! The potato: the single long-lived actor of the game.
//!
//! [`Player`] holds the state that is specific to the controllable character
//! on top of its [`Transform`](super::transform::Transform) and
//! [`Movement`](super::movement::Movement): facing, charge-jump bookkeeping
//! and the air-control flags. The entity survives level transitions; only
//! its position is rewritten by the level slider.

use bevy_ecs::prelude::Component;

/// Horizontal facing of the sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    pub fn flipped(self) -> Self {
        match self {
            Facing::Left => Facing::Right,
            Facing::Right => Facing::Left,
        }
    }

    /// Facing that matches a nonzero horizontal direction.
    pub fn from_direction(direction: f32) -> Option<Self> {
        if direction > 0.0 {
            Some(Facing::Right)
        } else if direction < 0.0 {
            Some(Facing::Left)
        } else {
            None
        }
    }
}

/// Animation track requested from the sprite collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Run,
    Charge,
    Jump,
}

/// Charge-jump and air-control state of the player.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Player {
    pub facing: Facing,
    pub animation: AnimationState,
    /// Jump key is being held on the ground.
    pub is_charging_jump: bool,
    /// Seconds the jump key has been held, clamped to `max_charge_time`.
    pub charge_time: f32,
    pub max_charge_time: f32,
    /// Jump key state on the previous frame, used to detect the release.
    pub was_space_pressed: bool,
    /// A direction was committed mid-air; input is ignored until landing.
    pub air_direction_locked: bool,
    /// Bounced off a wall mid-air; input is ignored until landing.
    pub air_movement_disabled_by_wall: bool,
}

impl Player {
    pub fn new(max_charge_time: f32) -> Self {
        Self {
            facing: Facing::default(),
            animation: AnimationState::default(),
            is_charging_jump: false,
            charge_time: 0.0,
            max_charge_time,
            was_space_pressed: false,
            air_direction_locked: false,
            air_movement_disabled_by_wall: false,
        }
    }

    /// Accumulate charge for `dt` seconds, saturating at `max_charge_time`.
    pub fn accumulate_charge(&mut self, dt: f32) {
        self.is_charging_jump = true;
        self.charge_time = (self.charge_time + dt).min(self.max_charge_time);
    }

    pub fn clear_charge(&mut self) {
        self.is_charging_jump = false;
        self.charge_time = 0.0;
    }

    /// Reset both air-control flags. Called on landing.
    pub fn reset_air_control(&mut self) {
        self.air_direction_locked = false;
        self.air_movement_disabled_by_wall = false;
    }
}
