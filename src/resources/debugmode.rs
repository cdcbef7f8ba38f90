//! Debug toggle resource.
//!
//! The mere presence of this resource switches the player to free walking
//! and enables collision box overlays. Remove it to disable debug behavior.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, debug walking and overlays are on.
#[derive(Resource, Debug, Clone, Copy)]
pub struct DebugMode {}
