//! Filesystem-backed editor host for a Unity-style project directory.

use crate::error::MenuError;
use scene_menu_hal::{BuildEntry, EditorHost};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Indexed asset root, relative to the project root.
pub const ASSETS_DIR: &str = "Assets";

/// Scene asset extension.
pub const SCENE_EXTENSION: &str = "unity";

/// Build list file, relative to the project root.
pub const BUILD_LIST_FILE: &str = "ProjectSettings/EditorBuildScenes.toml";

/// On-disk layout of the build list.
#[derive(Debug, Default, Serialize, Deserialize)]
struct BuildListFile {
    #[serde(default)]
    scenes: Vec<BuildListRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct BuildListRecord {
    path: String,
    #[serde(default = "default_enabled")]
    enabled: bool,
}

fn default_enabled() -> bool {
    true
}

/// Editor host over a project directory.
///
/// The asset index is a snapshot of every file under `Assets/`, taken when
/// the host is opened and again on [`EditorHost::refresh`].
#[derive(Debug)]
pub struct ProjectHost {
    root: PathBuf,
    assets: Vec<String>,
}

impl ProjectHost {
    /// Open the project at `root` and index its assets.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, MenuError> {
        let root = root.into();
        let assets = scan_assets(&root)?;
        log::debug!("Indexed {} assets under {}", assets.len(), root.display());
        Ok(Self { root, assets })
    }

    /// All indexed asset paths (project-relative, forward slashes).
    pub fn assets(&self) -> &[String] {
        &self.assets
    }
}

impl EditorHost for ProjectHost {
    type Error = MenuError;

    fn list_scene_paths(&self) -> Result<Vec<String>, MenuError> {
        Ok(self
            .assets
            .iter()
            .filter(|p| has_extension(p, SCENE_EXTENSION))
            .cloned()
            .collect())
    }

    fn resolve_asset_path(&self, name: &str) -> Result<Option<String>, MenuError> {
        Ok(self
            .assets
            .iter()
            .find(|p| Path::new(p.as_str()).file_stem().and_then(|s| s.to_str()) == Some(name))
            .cloned())
    }

    fn build_entries(&self) -> Result<Vec<BuildEntry>, MenuError> {
        let path = self.root.join(BUILD_LIST_FILE);
        if !path.is_file() {
            return Ok(Vec::new());
        }

        let text = fs::read_to_string(&path)?;
        let list: BuildListFile = toml::from_str(&text).map_err(|e| MenuError::ConfigParse {
            path: path.clone(),
            message: e.to_string(),
        })?;

        Ok(list
            .scenes
            .into_iter()
            .map(|r| BuildEntry {
                path: r.path,
                enabled: r.enabled,
            })
            .collect())
    }

    fn set_build_entries(&mut self, entries: Vec<BuildEntry>) -> Result<(), MenuError> {
        let path = self.root.join(BUILD_LIST_FILE);
        let list = BuildListFile {
            scenes: entries
                .into_iter()
                .map(|e| BuildListRecord {
                    path: e.path,
                    enabled: e.enabled,
                })
                .collect(),
        };
        let text = toml::to_string(&list).map_err(|e| MenuError::ConfigWrite {
            path: path.clone(),
            message: e.to_string(),
        })?;

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(&path, text)?;
        Ok(())
    }

    fn file_exists(&self, path: &Path) -> bool {
        self.root.join(path).is_file()
    }

    fn write_file(&mut self, path: &Path, contents: &str) -> Result<(), MenuError> {
        let mut file = fs::File::create(self.root.join(path))?;
        file.write_all(contents.as_bytes())?;
        file.flush()?;
        Ok(())
    }

    fn refresh(&mut self) -> Result<(), MenuError> {
        self.assets = scan_assets(&self.root)?;
        log::debug!("Re-indexed {} assets", self.assets.len());
        Ok(())
    }
}

/// Collect every asset under `root/Assets`, walked in file-name order.
///
/// Hidden entries (leading `.`), entries ending in `~` and `.meta` files are
/// not assets.
fn scan_assets(root: &Path) -> Result<Vec<String>, MenuError> {
    let assets_dir = root.join(ASSETS_DIR);
    if !assets_dir.is_dir() {
        log::warn!("No {} directory in {}", ASSETS_DIR, root.display());
        return Ok(Vec::new());
    }

    let mut assets = Vec::new();
    let walker = WalkDir::new(&assets_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_ignored(e));

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() || has_extension_path(entry.path(), "meta") {
            continue;
        }
        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        assets.push(to_asset_path(relative));
    }

    Ok(assets)
}

fn is_ignored(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.') || name.ends_with('~'))
}

fn has_extension(path: &str, extension: &str) -> bool {
    has_extension_path(Path::new(path), extension)
}

fn has_extension_path(path: &Path, extension: &str) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}

/// Join path components with `/` regardless of platform.
fn to_asset_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
