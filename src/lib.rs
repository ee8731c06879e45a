pub mod asset_loader;
pub mod camera;
pub mod config;
pub mod debug;
pub mod hud;
pub mod inputs;
pub mod layers;
pub mod plugin_groups;
pub mod preferences;
pub mod prelude;
pub mod round;
pub mod scene;
pub mod schedule;
pub mod score;
pub mod sling;
pub mod state;
pub mod world;

pub use asset_loader::AssetLoaderPlugin;
pub use camera::CameraPlugin;
pub use debug::DebugPlugin;
pub use hud::HudPlugin;
pub use inputs::InputsPlugin;
pub use preferences::PreferencesPlugin;
pub use round::RoundPlugin;
pub use schedule::SchedulePlugin;
pub use score::ScorePlugin;
pub use sling::SlingPlugin;
pub use state::StatePlugin;
pub use world::WorldPlugin;
