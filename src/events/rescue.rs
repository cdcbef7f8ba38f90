//! Friend rescue notification.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::resources::levelslider::LevelSlider;

/// Emitted once per friend when the player touches it.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct RescuedEvent {
    pub name: String,
}

/// Observer that records the rescued friend on the [`LevelSlider`].
pub fn rescue_observer(trigger: On<RescuedEvent>, slider: Option<ResMut<LevelSlider>>) {
    let name = &trigger.event().name;
    match slider {
        Some(mut slider) => {
            slider.rescue(name.as_str());
        }
        None => debug!("Rescued {} with no level slider present", name),
    }
}
