use crate::{
    AssetLoaderPlugin, CameraPlugin, DebugPlugin, HudPlugin, InputsPlugin, PreferencesPlugin, RoundPlugin,
    SchedulePlugin, ScorePlugin, SlingPlugin, StatePlugin, WorldPlugin,
};
use bevy::app::{PluginGroup, PluginGroupBuilder};

/// A group of plugins that has loading assets involved
pub struct LoadersPlugins;
impl PluginGroup for LoadersPlugins {
    fn build(self) -> PluginGroupBuilder {
        PluginGroupBuilder::start::<Self>()
            .add(StatePlugin)
            .add(SchedulePlugin)
            .add(AssetLoaderPlugin)
            .add(PreferencesPlugin)
    }
}

pub struct GamePlugins;
impl PluginGroup for GamePlugins {
    fn build(self) -> PluginGroupBuilder {
        PluginGroupBuilder::start::<Self>()
            .add(WorldPlugin)
            .add(InputsPlugin)
            .add(SlingPlugin)
            .add(ScorePlugin)
            .add(RoundPlugin)
            .add(HudPlugin)
    }
}

pub struct UtilityPlugins {
    pub debug_enable: bool,
}
impl PluginGroup for UtilityPlugins {
    fn build(self) -> PluginGroupBuilder {
        PluginGroupBuilder::start::<Self>().add(DebugPlugin { enable: self.debug_enable }).add(CameraPlugin)
    }
}
