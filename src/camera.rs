use crate::scene::SceneLayout;
use crate::state::GameState;
use bevy::prelude::*;
use bevy::render::camera::ScalingMode;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_camera)
            .add_systems(OnEnter(GameState::InGame), fit_camera_to_scene);
    }
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2dBundle::default());
}

/// Aspect-fit: the whole scene frame stays visible whatever the window shape.
fn fit_camera_to_scene(mut projection: Query<&mut OrthographicProjection, With<Camera2d>>, layout: Res<SceneLayout>) {
    let Ok(mut projection) = projection.get_single_mut() else {
        return;
    };

    let size = layout.frame_size();
    projection.scaling_mode = ScalingMode::AutoMin { min_width: size.x, min_height: size.y };
    debug!("Camera fitted to scene frame {size:?}");
}
