use bevy::prelude::*;

use crate::state::GameState;

#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum InGameSet {
    RoundChecks,
    UserInput,
    EntityUpdates,
    CollisionDetection,
    UiUpdates,
}

pub struct SchedulePlugin;

impl Plugin for SchedulePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                // Rest detection looks at last frame's velocities, before a launch can touch them
                InGameSet::RoundChecks,
                InGameSet::UserInput,
                InGameSet::EntityUpdates,
                InGameSet::CollisionDetection,
                InGameSet::UiUpdates,
            )
                .chain()
                .run_if(in_state(GameState::InGame)),
        );
    }
}
