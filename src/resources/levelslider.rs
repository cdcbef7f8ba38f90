//! Level sequence state machine.
//!
//! The [`LevelSlider`] resource knows which level number is resident, which
//! friends were rescued so far and whether the game has ended. Boundary exits
//! reported by the player drive it:
//!
//! - top exit: climb to the next level and respawn near the bottom edge,
//!   keeping both velocity components; past the last level the game is won.
//! - bottom exit: drop to the previous level and respawn near the top edge,
//!   keeping `vx` and damping a falling `vy` to 90%; below the first level
//!   nothing happens.
//!
//! A transition swaps the [`Level`] and repositions the player in one call,
//! so no frame ever sees a half-finished transition.

use bevy_ecs::prelude::Resource;
use log::{debug, info};
use rustc_hash::FxHashSet;

use crate::components::movement::Movement;
use crate::components::transform::Transform;
use crate::events::boundary::BoundarySide;
use crate::resources::level::Level;
use crate::resources::levelsource::LevelSource;

/// Share of a falling `vy` kept when re-entering the previous level from the top.
pub const DESCENT_DAMPING: f32 = 0.9;

/// Result of feeding a boundary exit to the slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideOutcome {
    /// Moved up to the contained level number.
    Ascended(i32),
    /// Moved down to the contained level number.
    Descended(i32),
    /// Left the top of the last level; the game is over.
    Won,
    /// Left the bottom of the first level; nothing changed.
    Blocked,
    /// The game had already ended; nothing changed.
    Ignored,
}

/// Where the player is in the level sequence.
#[derive(Resource, Debug, Clone)]
pub struct LevelSlider {
    min_level: i32,
    max_level: i32,
    current_level_num: i32,
    rescued_characters: FxHashSet<String>,
    ended: bool,
}

impl LevelSlider {
    /// Create a slider over `min_level..=max_level`, starting at `start_level`
    /// clamped into that range.
    pub fn new(min_level: i32, max_level: i32, start_level: i32) -> Self {
        let max_level = max_level.max(min_level);
        Self {
            min_level,
            max_level,
            current_level_num: start_level.clamp(min_level, max_level),
            rescued_characters: FxHashSet::default(),
            ended: false,
        }
    }

    pub fn min_level(&self) -> i32 {
        self.min_level
    }

    pub fn max_level(&self) -> i32 {
        self.max_level
    }

    pub fn current_level_num(&self) -> i32 {
        self.current_level_num
    }

    /// Friends rescued during this run. Only ever grows.
    pub fn rescued_characters(&self) -> &FxHashSet<String> {
        &self.rescued_characters
    }

    /// Once true, gameplay stops updating.
    pub fn is_ended(&self) -> bool {
        self.ended
    }

    /// Record a rescued friend. Adding the same name twice has no effect.
    pub fn rescue(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        let added = self.rescued_characters.insert(name.clone());
        if added {
            info!(
                "Rescued {} ({} so far)",
                name,
                self.rescued_characters.len()
            );
        }
        added
    }

    /// Jump straight to level `number`. Returns false if out of range.
    pub fn go_to_level(&mut self, number: i32) -> bool {
        if self.ended || number < self.min_level || number > self.max_level {
            return false;
        }
        self.current_level_num = number;
        info!("Switched to level {}", number);
        true
    }

    /// React to the player leaving the screen through `side`.
    ///
    /// On a level change `level` is replaced by the newly loaded level and
    /// the player is repositioned `spawn_margin` pixels inside the opposite
    /// edge, keeping its `x`.
    #[allow(clippy::too_many_arguments)]
    pub fn handle_boundary(
        &mut self,
        side: BoundarySide,
        transform: &mut Transform,
        movement: &mut Movement,
        level: &mut Level,
        source: &dyn LevelSource,
        window_height: i32,
        spawn_margin: f32,
    ) -> SlideOutcome {
        if self.ended {
            return SlideOutcome::Ignored;
        }
        match side {
            BoundarySide::Top => {
                if self.current_level_num + 1 > self.max_level {
                    self.ended = true;
                    info!(
                        "Left the top of level {}: game won with {} friends",
                        self.current_level_num,
                        self.rescued_characters.len()
                    );
                    return SlideOutcome::Won;
                }
                let (vx, vy) = (movement.vx, movement.vy);
                self.current_level_num += 1;
                *level = Level::load(source, self.current_level_num);
                let y = window_height as f32 - transform.height() as f32 - spawn_margin;
                transform.set_y(y);
                movement.vx = vx;
                movement.vy = vy;
                info!("Climbed to level {}", self.current_level_num);
                SlideOutcome::Ascended(self.current_level_num)
            }
            BoundarySide::Bottom => {
                if self.current_level_num - 1 < self.min_level {
                    debug!("Bottom of the first level reached, staying");
                    return SlideOutcome::Blocked;
                }
                let (vx, vy) = (movement.vx, movement.vy);
                self.current_level_num -= 1;
                *level = Level::load(source, self.current_level_num);
                transform.set_y(spawn_margin);
                movement.vx = vx;
                movement.vy = if vy > 0.0 { vy * DESCENT_DAMPING } else { vy };
                info!("Fell back to level {}", self.current_level_num);
                SlideOutcome::Descended(self.current_level_num)
            }
        }
    }

    /// Overall climb progress in `[0, 1]` for a player at `player_y`.
    ///
    /// Each level is an equal slice; inside the current slice progress grows
    /// as the player rises toward the top of the screen.
    pub fn altitude_progress(&self, player_y: f32, window_height: i32) -> f32 {
        let level_count = (self.max_level - self.min_level + 1) as f32;
        let below = (self.current_level_num - self.min_level) as f32;
        let within = 1.0 - player_y / window_height.max(1) as f32;
        ((below + within) / level_count).clamp(0.0, 1.0)
    }
}
