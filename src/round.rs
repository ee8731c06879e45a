use crate::scene::SceneTuning;
use crate::schedule::InGameSet;
use crate::score::Score;
use crate::world::{Bird, LaunchOrigin};
use avian2d::math::Vector;
use avian2d::prelude::*;
use bevy::prelude::*;

pub struct RoundPlugin;

impl Plugin for RoundPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Round>()
            .add_systems(Update, reset_when_bird_rests.in_set(InGameSet::RoundChecks));
    }
}

/// `started` is set by a launch and cleared when the bird comes to rest.
#[derive(Resource, Debug, Default)]
pub struct Round {
    pub started: bool,
}

pub fn is_at_rest(linear: Vector, angular: f32, threshold: f32) -> bool {
    linear.x.abs() < threshold && linear.y.abs() < threshold && angular.abs() < threshold
}

fn reset_when_bird_rests(
    mut round: ResMut<Round>,
    mut score: ResMut<Score>,
    tuning: Res<SceneTuning>,
    mut bird_query: Query<
        (&LaunchOrigin, &mut Transform, &mut LinearVelocity, &mut AngularVelocity, &mut GravityScale),
        With<Bird>,
    >,
) {
    if !round.started {
        return;
    }
    let Ok((origin, mut transform, mut linear_velocity, mut angular_velocity, mut gravity_scale)) =
        bird_query.get_single_mut()
    else {
        return;
    };
    if !is_at_rest(linear_velocity.0, angular_velocity.0, tuning.rest_threshold) {
        return;
    }

    info!("Bird at rest, round over with score {}", score.current());

    linear_velocity.0 = Vector::ZERO;
    angular_velocity.0 = 0.0;
    gravity_scale.0 = 0.0;
    transform.translation = origin.0.extend(transform.translation.z);

    score.reset();
    round.started = false;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixture {
        app: App,
        bird: Entity,
    }

    fn fixture(started: bool, velocity: Vector, angular: f32) -> Fixture {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(Round { started })
            .insert_resource(SceneTuning::default())
            .init_resource::<Score>()
            .add_systems(Update, reset_when_bird_rests);

        let mut score = Score::default();
        score.record_hit();
        score.record_hit();
        score.record_hit();
        app.insert_resource(score);

        let bird = app
            .world_mut()
            .spawn((
                Bird { half_size: Vec2::splat(30.0) },
                LaunchOrigin(Vec2::new(-450.0, -190.0)),
                Transform::from_xyz(200.0, -340.0, 2.0),
                LinearVelocity(velocity),
                AngularVelocity(angular),
                GravityScale(1.0),
            ))
            .id();

        Fixture { app, bird }
    }

    #[test]
    fn rest_requires_every_component_under_threshold() {
        assert!(is_at_rest(Vector::new(0.05, -0.09), 0.0, 0.1));
        assert!(!is_at_rest(Vector::new(0.1, 0.0), 0.0, 0.1));
        assert!(!is_at_rest(Vector::new(0.0, -0.2), 0.0, 0.1));
        assert!(!is_at_rest(Vector::ZERO, -0.5, 0.1));
    }

    #[test]
    fn resting_bird_resets_the_round() {
        let Fixture { mut app, bird } = fixture(true, Vector::new(0.01, 0.0), 0.02);

        app.update();

        assert!(!app.world().resource::<Round>().started);
        let score = *app.world().resource::<Score>();
        assert_eq!(score.current(), 0);
        assert_eq!(score.best(), 3);

        let bird = app.world().entity(bird);
        assert_eq!(bird.get::<Transform>().unwrap().translation, Vec3::new(-450.0, -190.0, 2.0));
        assert_eq!(bird.get::<LinearVelocity>().unwrap().0, Vector::ZERO);
        assert_eq!(bird.get::<AngularVelocity>().unwrap().0, 0.0);
        assert_eq!(bird.get::<GravityScale>().unwrap().0, 0.0);
    }

    #[test]
    fn moving_bird_keeps_the_round_going() {
        let Fixture { mut app, bird } = fixture(true, Vector::new(120.0, -30.0), 0.0);

        app.update();

        assert!(app.world().resource::<Round>().started);
        assert_eq!(app.world().resource::<Score>().current(), 3);
        assert_eq!(app.world().entity(bird).get::<Transform>().unwrap().translation.x, 200.0);
    }

    #[test]
    fn idle_bird_before_launch_is_left_alone() {
        let Fixture { mut app, bird } = fixture(false, Vector::ZERO, 0.0);

        app.update();

        assert_eq!(app.world().resource::<Score>().current(), 3);
        assert_eq!(app.world().entity(bird).get::<GravityScale>().unwrap().0, 1.0);
    }
}
