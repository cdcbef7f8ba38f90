//! The resident level.
//!
//! Exactly one [`Level`] lives in the world at a time. It owns the immutable
//! tile list and the friends still waiting to be rescued. It does not own the
//! player: the player entity is bound to whichever level is resident and is
//! updated against it by the player system.

use bevy_ecs::prelude::Resource;
use log::{error, info};

use crate::components::collider::colliders_overlap;
use crate::components::rescuable::Rescuable;
use crate::components::tile::Tile;
use crate::components::transform::Transform;
use crate::resources::levelsource::LevelSource;

/// Background used when a level file does not specify one.
pub const DEFAULT_BACKGROUND: [u8; 3] = [24, 20, 37];

/// Current level: number, tiles and rescuable friends.
#[derive(Resource, Debug, Clone)]
pub struct Level {
    number: i32,
    tiles: Vec<Tile>,
    rescuables: Vec<Rescuable>,
    background: [u8; 3],
    load_failed: bool,
}

impl Level {
    /// Build a level from already loaded parts.
    pub fn new(number: i32, tiles: Vec<Tile>, rescuables: Vec<Rescuable>) -> Self {
        Self {
            number,
            tiles,
            rescuables,
            background: DEFAULT_BACKGROUND,
            load_failed: false,
        }
    }

    /// Load level `number` from `source`.
    ///
    /// A load failure is logged and replaced by an empty level with a
    /// fallback background, so play continues in a visibly degraded state.
    pub fn load(source: &dyn LevelSource, number: i32) -> Self {
        match source.load_level(number) {
            Ok(data) => {
                let tiles = data.build_tiles();
                let rescuables = data.build_rescuables();
                info!(
                    "Level {} loaded: {} tiles, {} friends",
                    number,
                    tiles.len(),
                    rescuables.len()
                );
                Self {
                    number,
                    tiles,
                    rescuables,
                    background: data.background.unwrap_or(DEFAULT_BACKGROUND),
                    load_failed: false,
                }
            }
            Err(e) => {
                error!("Error loading level {}: {}", number, e);
                Self::fallback(number)
            }
        }
    }

    /// Empty level with a color picked from the level number.
    pub fn fallback(number: i32) -> Self {
        Self {
            number,
            tiles: Vec::new(),
            rescuables: Vec::new(),
            background: fallback_color(number),
            load_failed: true,
        }
    }

    pub fn number(&self) -> i32 {
        self.number
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn rescuables(&self) -> &[Rescuable] {
        &self.rescuables
    }

    pub fn background(&self) -> [u8; 3] {
        self.background
    }

    /// True when this level is the empty stand-in for a failed load.
    pub fn load_failed(&self) -> bool {
        self.load_failed
    }

    /// Remove every friend touching `transform` and return their names.
    pub fn take_rescued(&mut self, transform: &Transform) -> Vec<String> {
        let mut rescued = Vec::new();
        self.rescuables.retain(|friend| {
            if colliders_overlap(transform, friend) {
                rescued.push(friend.name.clone());
                false
            } else {
                true
            }
        });
        rescued
    }
}

/// Deterministic but arbitrary color for a level number.
pub fn fallback_color(number: i32) -> [u8; 3] {
    let mut rng = fastrand::Rng::with_seed(number as u64);
    [rng.u8(..), rng.u8(..), rng.u8(..)]
}
