use crate::inputs::PointerAction;
use crate::round::Round;
use crate::scene::SceneTuning;
use crate::schedule::InGameSet;
use crate::world::{Bird, LaunchOrigin};
use avian2d::math::Vector;
use avian2d::prelude::*;
use bevy::prelude::*;

pub struct SlingPlugin;

impl Plugin for SlingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, sling_bird.in_set(InGameSet::EntityUpdates));
    }
}

/// Velocity change produced by an impulse on a body of `mass`.
pub fn launch_velocity(impulse: Vector, mass: f32) -> Vector {
    if mass > f32::EPSILON {
        impulse / mass
    } else {
        Vector::ZERO
    }
}

/// Drags the bird while it is held and flings it on release. Ignored once
/// the round has started.
fn sling_bird(
    mut pointer_reader: EventReader<PointerAction>,
    mut round: ResMut<Round>,
    tuning: Res<SceneTuning>,
    mut bird_query: Query<(
        Entity,
        &Bird,
        &LaunchOrigin,
        &Mass,
        &mut Transform,
        &mut LinearVelocity,
        &mut AngularVelocity,
        &mut GravityScale,
    )>,
    mut commands: Commands,
) {
    let Ok((entity, bird, origin, mass, mut transform, mut linear_velocity, mut angular_velocity, mut gravity_scale)) =
        bird_query.get_single_mut()
    else {
        return;
    };

    for event in pointer_reader.read() {
        if round.started {
            continue;
        }
        let center = transform.translation.truncate();

        match *event {
            PointerAction::Pressed(location) | PointerAction::Moved(location) => {
                if !bird.contains(center, location) {
                    continue;
                }
                transform.translation = location.extend(transform.translation.z);
                linear_velocity.0 = Vector::ZERO;
                angular_velocity.0 = 0.0;
                commands.entity(entity).remove::<Sleeping>();
            }
            PointerAction::Released(location) => {
                if !bird.contains(center, location) {
                    continue;
                }
                let impulse = (origin.0 - location) * tuning.launch_impulse_scale;
                linear_velocity.0 += launch_velocity(impulse, mass.0);
                gravity_scale.0 = tuning.launched_gravity_scale;
                round.started = true;
                commands.entity(entity).remove::<Sleeping>();
                info!("Bird launched with impulse {impulse:?}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: Vec2 = Vec2::new(-450.0, -190.0);

    fn sling_app(started: bool) -> (App, Entity) {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_event::<PointerAction>()
            .insert_resource(Round { started })
            .insert_resource(SceneTuning::default())
            .add_systems(Update, sling_bird);

        let bird = app
            .world_mut()
            .spawn((
                Bird { half_size: Vec2::splat(30.0) },
                LaunchOrigin(ORIGIN),
                Mass(0.5),
                Transform::from_translation(ORIGIN.extend(2.0)),
                LinearVelocity(Vector::ZERO),
                AngularVelocity(0.0),
                GravityScale(0.0),
            ))
            .id();
        (app, bird)
    }

    fn send(app: &mut App, actions: &[PointerAction]) {
        for action in actions {
            app.world_mut().send_event(*action);
        }
        app.update();
    }

    fn position(app: &App, bird: Entity) -> Vec2 {
        app.world().entity(bird).get::<Transform>().unwrap().translation.truncate()
    }

    #[test]
    fn drag_moves_bird_with_pointer() {
        let (mut app, bird) = sling_app(false);

        send(&mut app, &[PointerAction::Pressed(ORIGIN), PointerAction::Moved(ORIGIN + Vec2::new(-20.0, -10.0))]);

        assert_eq!(position(&app, bird), ORIGIN + Vec2::new(-20.0, -10.0));
        assert!(!app.world().resource::<Round>().started);
    }

    #[test]
    fn pointer_away_from_bird_is_ignored() {
        let (mut app, bird) = sling_app(false);

        send(&mut app, &[PointerAction::Moved(Vec2::ZERO), PointerAction::Released(Vec2::ZERO)]);

        assert_eq!(position(&app, bird), ORIGIN);
        assert!(!app.world().resource::<Round>().started);
    }

    #[test]
    fn release_flings_bird_towards_origin() {
        let (mut app, bird) = sling_app(false);
        let pulled = ORIGIN + Vec2::new(-25.0, -20.0);

        send(&mut app, &[PointerAction::Pressed(ORIGIN), PointerAction::Moved(pulled), PointerAction::Released(pulled)]);

        assert!(app.world().resource::<Round>().started);
        let entity = app.world().entity(bird);
        // impulse (25, 20) on a 0.5 mass body
        assert_eq!(entity.get::<LinearVelocity>().unwrap().0, Vector::new(50.0, 40.0));
        assert_eq!(entity.get::<GravityScale>().unwrap().0, 1.0);
    }

    #[test]
    fn no_dragging_once_the_round_started() {
        let (mut app, bird) = sling_app(true);

        send(&mut app, &[PointerAction::Moved(ORIGIN + Vec2::new(5.0, 5.0)), PointerAction::Released(ORIGIN)]);

        assert_eq!(position(&app, bird), ORIGIN);
        assert_eq!(app.world().entity(bird).get::<LinearVelocity>().unwrap().0, Vector::ZERO);
    }

    #[test]
    fn second_release_in_same_frame_does_not_stack() {
        let (mut app, bird) = sling_app(false);
        let pulled = ORIGIN + Vec2::new(-10.0, 0.0);

        send(
            &mut app,
            &[PointerAction::Moved(pulled), PointerAction::Released(pulled), PointerAction::Released(pulled)],
        );

        assert_eq!(app.world().entity(bird).get::<LinearVelocity>().unwrap().0, Vector::new(20.0, 0.0));
    }

    #[test]
    fn massless_body_gets_no_velocity() {
        assert_eq!(launch_velocity(Vector::new(3.0, 4.0), 0.0), Vector::ZERO);
        assert_eq!(launch_velocity(Vector::new(3.0, 4.0), 2.0), Vector::new(1.5, 2.0));
    }
}
