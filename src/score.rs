use crate::config::BEST_SCORE_KEY;
use crate::layers::is_bird;
use crate::preferences::Preferences;
use crate::schedule::InGameSet;
use avian2d::prelude::*;
use bevy::prelude::*;

pub struct ScorePlugin;

impl Plugin for ScorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Score>()
            .add_systems(Startup, load_best_score)
            .add_systems(Update, score_bird_contacts.in_set(InGameSet::CollisionDetection));
    }
}

/// Current round score and best score seen so far. The best score only
/// ever goes up.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    current: u32,
    best: u32,
}

impl Score {
    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Counts one contact. Returns true when this raised the best score.
    pub fn record_hit(&mut self) -> bool {
        self.current = self.current.saturating_add(1);
        if self.current > self.best {
            self.best = self.current;
            return true;
        }
        false
    }

    pub fn restore_best(&mut self, best: u32) {
        self.best = self.best.max(best);
    }

    pub fn reset(&mut self) {
        self.current = 0;
    }
}

fn load_best_score(mut score: ResMut<Score>, preferences: Res<Preferences>) {
    let stored = preferences.integer(BEST_SCORE_KEY);
    // Negative or oversized values can only come from a hand-edited file
    let best = u32::try_from(stored).unwrap_or(0);
    score.restore_best(best);
    info!("Best score loaded: {}", score.best());
}

fn score_bird_contacts(
    mut collision_event_reader: EventReader<CollisionStarted>,
    layers: Query<&CollisionLayers>,
    mut score: ResMut<Score>,
    mut preferences: ResMut<Preferences>,
) {
    for CollisionStarted(entity1, entity2) in collision_event_reader.read() {
        let bird_involved = [*entity1, *entity2].into_iter().any(|entity| layers.get(entity).is_ok_and(is_bird));
        if !bird_involved {
            continue;
        }

        if score.record_hit() {
            let best = score.best();
            if let Err(err) = preferences.set_integer(BEST_SCORE_KEY, i64::from(best)) {
                error!("Could not save best score {best}: {err}");
            }
        }
        debug!("Bird contact, score {}", score.current());
    }
}
