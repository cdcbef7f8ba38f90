//! End-of-game summary shown on the win screen.
use bevy_ecs::prelude::Resource;

use crate::components::rescuable::FRIENDS;

/// Friends rescued over the whole run.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct EndGameSummary {
    /// Rescued names, in roster order. Unknown names are dropped.
    pub rescued: Vec<String>,
    /// Size of the full roster.
    pub total: usize,
}

impl EndGameSummary {
    pub fn from_rescued<S: AsRef<str>>(names: &[S]) -> Self {
        let rescued = FRIENDS
            .iter()
            .filter(|friend| names.iter().any(|n| n.as_ref() == **friend))
            .map(|friend| friend.to_string())
            .collect();
        Self {
            rescued,
            total: FRIENDS.len(),
        }
    }

    /// True when every friend on the roster was rescued.
    pub fn all_rescued(&self) -> bool {
        self.rescued.len() == self.total
    }

    /// Text for the end screen, e.g. `Friends rescued: 2/4`.
    pub fn headline(&self) -> String {
        if self.all_rescued() {
            "All friends rescued!".to_string()
        } else {
            format!("Friends rescued: {}/{}", self.rescued.len(), self.total)
        }
    }
}
