use crate::config::SCENE_ASSET_PATH;
use crate::scene::{SceneLayout, SceneTuning};
use crate::state::GameState;
use bevy::{
    asset::{io::Reader, AssetLoader, AsyncReadExt, LoadContext, LoadState},
    prelude::*,
};
use thiserror::Error;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SceneLoaderError {
    /// An [IO](std::io) Error
    #[error("Could not load scene file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Could not parse scene file: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Default)]
struct SceneLayoutLoader;
impl AssetLoader for SceneLayoutLoader {
    type Asset = SceneLayout;
    type Settings = ();
    type Error = SceneLoaderError;

    async fn load<'a>(
        &'a self,
        reader: &'a mut Reader<'_>,
        _settings: &'a (),
        load_context: &'a mut LoadContext<'_>,
    ) -> Result<Self::Asset, Self::Error> {
        debug!("Loading scene {:?}", load_context.path());
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).await?;

        Ok(serde_json::from_slice(&bytes)?)
    }

    fn extensions(&self) -> &[&str] {
        &["scene.json"]
    }
}

#[derive(Resource, Default)]
pub struct AssetStore {
    pub scene: Handle<SceneLayout>,
}

pub struct AssetLoaderPlugin;
impl Plugin for AssetLoaderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AssetStore>()
            .init_asset::<SceneLayout>()
            .init_asset_loader::<SceneLayoutLoader>()
            .add_systems(PreStartup, setup)
            .add_systems(Update, install_scene_on_load.run_if(in_state(GameState::LoadingAssets)));
    }
}

fn setup(mut store: ResMut<AssetStore>, asset_server: Res<AssetServer>) {
    store.scene = asset_server.load(SCENE_ASSET_PATH);
}

fn install_scene_on_load(
    mut commands: Commands,
    store: Res<AssetStore>,
    asset_server: Res<AssetServer>,
    layouts: Res<Assets<SceneLayout>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let layout = if let Some(layout) = layouts.get(&store.scene) {
        info!("Scene loaded with {} nodes", layout.nodes.len());
        layout.clone()
    } else if let Some(LoadState::Failed(err)) = asset_server.get_load_state(&store.scene) {
        error!("Scene {SCENE_ASSET_PATH} failed to load, using built-in layout: {err}");
        SceneLayout::builtin()
    } else {
        return;
    };

    install_scene(&mut commands, layout);
    next_state.set(GameState::InGame);
}

fn install_scene(commands: &mut Commands, layout: SceneLayout) {
    let tuning: SceneTuning = layout.tuning;
    commands.insert_resource(tuning);
    commands.insert_resource(layout);
}
