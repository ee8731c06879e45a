use avian2d::prelude::PhysicsDebugPlugin;
use bevy::input::common_conditions::input_toggle_active;
use bevy::prelude::*;
use bevy_inspector_egui::quick::WorldInspectorPlugin;
use iyes_perf_ui::prelude::*;

use crate::round::Round;
use crate::score::Score;

#[derive(Default)]
pub struct DebugPlugin {
    pub enable: bool,
}
impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        if !self.enable {
            return;
        }

        app.add_plugins(PerfUiPlugin)
            // we want Bevy to measure these values for us:
            .add_plugins(bevy::diagnostic::FrameTimeDiagnosticsPlugin)
            .add_plugins(bevy::diagnostic::EntityCountDiagnosticsPlugin)
            .add_plugins(PhysicsDebugPlugin::default())
            .add_plugins(WorldInspectorPlugin::new().run_if(input_toggle_active(false, KeyCode::F1)))
            .add_systems(Startup, debug_startup)
            .add_systems(Update, log_round_changes.run_if(resource_changed::<Round>));
    }
}

fn debug_startup(mut commands: Commands) {
    commands.spawn((
        PerfUiRoot { display_labels: false, layout_horizontal: true, ..Default::default() },
        PerfUiEntryFPS::default(),
        PerfUiEntryEntityCount::default(),
    ));
}

fn log_round_changes(round: Res<Round>, score: Res<Score>) {
    debug!("Round started: {}, score {}, best {}", round.started, score.current(), score.best());
}
