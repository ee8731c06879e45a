use bird_toss::prelude::*;

fn main() {
    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Bird Toss".into(),
                        name: Some("bird_toss.app".into()),
                        resolution: (WINDOW_WIDTH, WINDOW_HEIGHT).into(),
                        present_mode: PresentMode::AutoVsync,
                        ..default()
                    }),
                    ..default()
                })
                .set(LogPlugin { filter: "info,wgpu=warn,bird_toss=debug".into(), ..default() }),
        )
        .add_plugins(PhysicsPlugins::default().with_length_unit(UNIT_SCALE))
        .insert_resource(Gravity(DEFAULT_GRAVITY))
        .insert_resource(ClearColor(BACKGROUND_COLOR))
        .add_plugins((LoadersPlugins, GamePlugins, UtilityPlugins { debug_enable: cfg!(debug_assertions) }))
        .run();
}
