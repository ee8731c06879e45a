// src/prelude.rs
pub use crate::config::*;
pub use crate::plugin_groups::{GamePlugins, LoadersPlugins, UtilityPlugins};
pub use avian2d::prelude::*;
pub use bevy::log::LogPlugin;
pub use bevy::prelude::*;
pub use bevy::window::PresentMode;
