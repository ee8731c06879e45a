//! Small key-value preference store for values that outlive a session.

use bevy::prelude::{App, Deref, DerefMut, Plugin, Resource};
use directories::ProjectDirs;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum PreferencesError {
    #[error("Could not access preferences file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Could not read preferences: {0}")]
    Json(#[from] serde_json::Error),
}

/// Integer preferences keyed by name. Reading a key that was never written
/// yields 0.
pub trait PreferenceStore: Send + Sync {
    fn integer(&self, key: &str) -> i64;
    fn set_integer(&mut self, key: &str, value: i64) -> Result<(), PreferencesError>;
}

/// Preferences kept as a JSON object on disk, rewritten on every change.
#[derive(Debug)]
pub struct JsonPreferences {
    path: PathBuf,
    values: BTreeMap<String, i64>,
}

impl JsonPreferences {
    /// Opens the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PreferencesError> {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(json) => serde_json::from_str(&json)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(err.into()),
        };
        Ok(Self { path, values })
    }

    /// `preferences.json` in the platform data directory, if one exists.
    pub fn default_path() -> Option<PathBuf> {
        let project_dirs = ProjectDirs::from("", "", "bird-toss")?;
        Some(project_dirs.data_dir().join("preferences.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<(), PreferencesError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.values)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl PreferenceStore for JsonPreferences {
    fn integer(&self, key: &str) -> i64 {
        self.values.get(key).copied().unwrap_or(0)
    }

    fn set_integer(&mut self, key: &str, value: i64) -> Result<(), PreferencesError> {
        self.values.insert(key.to_string(), value);
        self.save()
    }
}

#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: BTreeMap<String, i64>,
}

impl PreferenceStore for MemoryPreferences {
    fn integer(&self, key: &str) -> i64 {
        self.values.get(key).copied().unwrap_or(0)
    }

    fn set_integer(&mut self, key: &str, value: i64) -> Result<(), PreferencesError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

#[derive(Resource, Deref, DerefMut)]
pub struct Preferences(pub Box<dyn PreferenceStore>);

impl Preferences {
    pub fn in_memory() -> Self {
        Self(Box::new(MemoryPreferences::default()))
    }

    /// File-backed preferences, or an in-memory store when the file is not usable.
    pub fn open_default() -> Self {
        let Some(path) = JsonPreferences::default_path() else {
            log::warn!("No data directory available, preferences will not persist");
            return Self::in_memory();
        };
        Self::open_at(&path)
    }

    pub fn open_at(path: &Path) -> Self {
        match JsonPreferences::open(path) {
            Ok(store) => {
                log::debug!("Preferences loaded from {}", store.path().display());
                Self(Box::new(store))
            }
            Err(err) => {
                log::warn!("Ignoring preferences at {}: {err}", path.display());
                Self::in_memory()
            }
        }
    }
}

pub struct PreferencesPlugin;

impl Plugin for PreferencesPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Preferences::open_default());
    }
}
