//! Screen-boundary exits and the level transition they drive.
//!
//! The player system emits a [`BoundaryHitEvent`] when the player box leaves
//! the screen through the top or the bottom edge. [`level_transition_observer`]
//! forwards the exit to the [`LevelSlider`], which swaps the resident level
//! and repositions the player before the frame continues.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, warn};

use crate::components::movement::Movement;
use crate::components::player::Player;
use crate::components::transform::Transform;
use crate::events::gamewon::GameWonEvent;
use crate::resources::gameconfig::GameConfig;
use crate::resources::level::Level;
use crate::resources::levelslider::{LevelSlider, SlideOutcome};
use crate::resources::levelsource::LevelLoader;
use crate::resources::screensize::ScreenSize;

/// Screen edge the player crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundarySide {
    Top,
    Bottom,
}

/// Emitted when the player leaves the screen vertically.
#[derive(Event, Debug, Clone, Copy)]
pub struct BoundaryHitEvent {
    pub side: BoundarySide,
}

/// Observer that runs the level transition for a boundary exit.
///
/// When the last level is left through the top a [`GameWonEvent`] carrying
/// the rescued names is triggered.
#[allow(clippy::too_many_arguments)]
pub fn level_transition_observer(
    trigger: On<BoundaryHitEvent>,
    mut commands: Commands,
    mut players: Query<(&mut Transform, &mut Movement), With<Player>>,
    slider: Option<ResMut<LevelSlider>>,
    level: Option<ResMut<Level>>,
    loader: Option<Res<LevelLoader>>,
    screen: Res<ScreenSize>,
    config: Res<GameConfig>,
) {
    let side = trigger.event().side;
    debug!("BoundaryHitEvent triggered: {:?}", side);

    let (Some(mut slider), Some(mut level), Some(loader)) = (slider, level, loader) else {
        warn!("Level resources missing, ignoring boundary exit {:?}", side);
        return;
    };
    let Ok((mut transform, mut movement)) = players.single_mut() else {
        warn!("No single player entity, ignoring boundary exit {:?}", side);
        return;
    };

    let outcome = slider.handle_boundary(
        side,
        &mut transform,
        &mut movement,
        &mut level,
        loader.source(),
        screen.h,
        config.spawn_margin,
    );

    if outcome == SlideOutcome::Won {
        let mut rescued: Vec<String> = slider.rescued_characters().iter().cloned().collect();
        rescued.sort();
        commands.trigger(GameWonEvent { rescued });
    }
}
