//! Per-frame keyboard input resource.
//!
//! Captures the keys the game cares about and exposes them to systems via
//! the [`InputState`] resource. Arrow keys move, WASD is accepted as an
//! alternative, space charges and releases jumps.
//!
//! The resource is filled by polling raylib once per frame outside the
//! gameplay schedule. Tests drive it directly through [`BoolState::set_down`].
use bevy_ecs::prelude::*;
use raylib::prelude::*;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with its keyboard bindings.
pub struct BoolState {
    /// Whether the key is currently held this frame.
    pub active: bool,
    /// Whether the key went down this frame.
    pub just_pressed: bool,
    /// Whether the key went up this frame.
    pub just_released: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
    /// Optional second key for the same action.
    pub alt_binding: Option<KeyboardKey>,
}

impl Default for BoolState {
    fn default() -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding: KeyboardKey::KEY_NULL,
            alt_binding: None,
        }
    }
}

impl BoolState {
    fn bound(key_binding: KeyboardKey, alt_binding: Option<KeyboardKey>) -> Self {
        Self {
            key_binding,
            alt_binding,
            ..Self::default()
        }
    }

    /// Store this frame's held state and derive the press/release edges
    /// from the previous one.
    pub fn set_down(&mut self, down: bool) {
        self.just_pressed = down && !self.active;
        self.just_released = !down && self.active;
        self.active = down;
    }

    /// Keys to poll for this action.
    pub fn bindings(&self) -> impl Iterator<Item = KeyboardKey> + '_ {
        std::iter::once(self.key_binding).chain(self.alt_binding)
    }
}

/// Resource capturing the per-frame keyboard state relevant to gameplay.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub move_left: BoolState,
    pub move_right: BoolState,
    /// Only used while walking freely in debug mode.
    pub move_up: BoolState,
    pub move_down: BoolState,
    pub jump: BoolState,
    pub mode_debug: BoolState,
    pub pause: BoolState,
    /// Starts a new run from the pause or end screen.
    pub restart: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            move_left: BoolState::bound(KeyboardKey::KEY_LEFT, Some(KeyboardKey::KEY_A)),
            move_right: BoolState::bound(KeyboardKey::KEY_RIGHT, Some(KeyboardKey::KEY_D)),
            move_up: BoolState::bound(KeyboardKey::KEY_UP, Some(KeyboardKey::KEY_W)),
            move_down: BoolState::bound(KeyboardKey::KEY_DOWN, Some(KeyboardKey::KEY_S)),
            jump: BoolState::bound(KeyboardKey::KEY_SPACE, None),
            mode_debug: BoolState::bound(KeyboardKey::KEY_F1, None),
            pause: BoolState::bound(KeyboardKey::KEY_ESCAPE, None),
            restart: BoolState::bound(KeyboardKey::KEY_R, Some(KeyboardKey::KEY_ENTER)),
        }
    }
}

impl InputState {
    /// Horizontal intent: `1` right, `-1` left, `0` for none or both.
    pub fn horizontal(&self) -> f32 {
        axis(self.move_left.active, self.move_right.active)
    }

    /// Vertical intent: `1` down, `-1` up, `0` for none or both.
    pub fn vertical(&self) -> f32 {
        axis(self.move_up.active, self.move_down.active)
    }
}

fn axis(negative: bool, positive: bool) -> f32 {
    match (negative, positive) {
        (true, false) => -1.0,
        (false, true) => 1.0,
        _ => 0.0,
    }
}
