//! Persisted generator settings.

use crate::error::MenuError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings file, relative to the project root.
pub const CONFIG_FILE: &str = "ProjectSettings/SceneLoadMenu.toml";

/// Build-list settings read once per command and passed down explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuConfig {
    /// Scenes whose path contains this substring go into the build list.
    #[serde(
        rename = "BuildScenePath",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub build_scene_path: Option<String>,
    /// Scene pinned to the first build-list slot.
    #[serde(
        rename = "FirstScenePath",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub first_scene_path: Option<String>,
}

impl MenuConfig {
    /// Load settings for the project at `root`. A missing file yields the
    /// default (both settings unset).
    pub fn load(root: &Path) -> Result<Self, MenuError> {
        let path = root.join(CONFIG_FILE);
        if !path.is_file() {
            log::debug!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let text = fs::read_to_string(&path)?;
        let config: MenuConfig = toml::from_str(&text).map_err(|e| MenuError::ConfigParse {
            path: path.clone(),
            message: e.to_string(),
        })?;

        Ok(Self {
            build_scene_path: normalize_setting(config.build_scene_path),
            first_scene_path: normalize_setting(config.first_scene_path),
        })
    }

    /// Load settings, treating an unreadable settings file as "unset".
    ///
    /// The error is logged; with both settings unset the build-list sync is
    /// a no-op and menu generation still runs.
    pub fn load_or_default(root: &Path) -> Self {
        Self::load(root).unwrap_or_else(|e| {
            log::error!("Build list settings ignored: {}", e);
            Self::default()
        })
    }

    /// Write settings for the project at `root`, creating the settings
    /// directory if needed.
    pub fn save(&self, root: &Path) -> Result<PathBuf, MenuError> {
        let path = root.join(CONFIG_FILE);
        let text = toml::to_string(self).map_err(|e| MenuError::ConfigWrite {
            path: path.clone(),
            message: e.to_string(),
        })?;

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(&path, text)?;
        Ok(path)
    }

    /// Configured build directory, if set and non-empty.
    pub fn build_dir(&self) -> Option<&str> {
        self.build_scene_path.as_deref().filter(|s| !s.is_empty())
    }

    /// Configured first scene, if set and non-empty.
    pub fn first_scene(&self) -> Option<&str> {
        self.first_scene_path.as_deref().filter(|s| !s.is_empty())
    }

    /// Set `BuildScenePath`; an empty path unsets it.
    pub fn set_build_dir(&mut self, path: &str) {
        self.build_scene_path = normalize_setting(Some(path.to_string()));
    }

    /// Set `FirstScenePath`; an empty path unsets it.
    pub fn set_first_scene(&mut self, path: &str) {
        self.first_scene_path = normalize_setting(Some(path.to_string()));
    }

    /// Reset both settings to unset.
    pub fn clear(&mut self) {
        self.build_scene_path = None;
        self.first_scene_path = None;
    }
}

/// Convert a user-supplied path into the form the asset index reports:
/// project-relative when it lies inside `root`, with forward slashes.
pub fn asset_path_arg(root: &Path, path: &Path) -> String {
    let relative = if path.is_absolute() {
        root.canonicalize()
            .ok()
            .and_then(|root| path.strip_prefix(&root).ok().map(Path::to_path_buf))
            .unwrap_or_else(|| path.to_path_buf())
    } else {
        path.to_path_buf()
    };
    relative.to_string_lossy().replace('\\', "/")
}

fn normalize_setting(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().replace('\\', "/"))
        .filter(|s| !s.is_empty())
}
