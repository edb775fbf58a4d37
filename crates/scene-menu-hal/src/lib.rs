//! Host abstraction for the scene-menu generator.
//!
//! The generator never talks to an editor directly. Everything it reads from
//! or writes to the host (asset index, build configuration, output files)
//! goes through [`EditorHost`], so the naming and emission pipeline can run
//! against an in-memory fake as easily as against a real project.

use std::fmt;
use std::path::Path;

/// One row of the host's build-configuration list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildEntry {
    /// Project-relative scene path (forward slashes).
    pub path: String,
    /// Whether the scene ships in a packaged build.
    pub enabled: bool,
}

impl BuildEntry {
    /// An enabled entry for `path`.
    pub fn enabled(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            enabled: true,
        }
    }
}

/// Capability set the generator consumes from its host editor.
///
/// Implementations own the asset index and the build-configuration list.
/// All methods are called from a single thread, one command at a time.
pub trait EditorHost {
    type Error: fmt::Display;

    /// List every scene asset in the project, in index order.
    fn list_scene_paths(&self) -> Result<Vec<String>, Self::Error>;

    /// Resolve an asset by name to its project path.
    ///
    /// Returns `Ok(None)` when no asset with that name is indexed.
    fn resolve_asset_path(&self, name: &str) -> Result<Option<String>, Self::Error>;

    /// Snapshot of the current build-configuration list.
    fn build_entries(&self) -> Result<Vec<BuildEntry>, Self::Error>;

    /// Replace the whole build-configuration list.
    fn set_build_entries(&mut self, entries: Vec<BuildEntry>) -> Result<(), Self::Error>;

    /// Returns true if a file already exists at the project path.
    fn file_exists(&self, path: &Path) -> bool;

    /// Write `contents` to the project path, replacing any existing file.
    /// The file must be closed before this returns.
    fn write_file(&mut self, path: &Path, contents: &str) -> Result<(), Self::Error>;

    /// Ask the host to re-index after files changed on disk.
    fn refresh(&mut self) -> Result<(), Self::Error>;
}
