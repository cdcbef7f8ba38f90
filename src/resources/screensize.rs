//! Screen size resource.
//!
//! Stores the playfield dimensions in pixels. Side walls clamp against `w`
//! and a level is exactly `h` pixels tall, so top and bottom exits are
//! measured against it.

use bevy_ecs::prelude::Resource;

/// Current screen size in pixels.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}
