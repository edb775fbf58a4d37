use std::path::PathBuf;

/// One discovered scene, ready for method emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    /// Project-relative path as reported by the asset index.
    pub path: String,
    /// Normalized, run-unique identifier fragment.
    pub scene_name: String,
    /// Path was in the build list when the record was built.
    pub in_build: bool,
    /// Name or path looks like a test/debug/example/plugin scene.
    pub is_test: bool,
}

/// Result of the build-list synchronization step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// `BuildScenePath` is unset; the build list was not touched.
    Skipped,
    /// The asset index returned no scenes; the build list was not touched.
    NoScenes,
    /// The build list was replaced with `count` entries.
    Replaced { count: usize },
}

/// Metadata about a successfully written menu file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuReport {
    /// Project-relative path of the generated file.
    pub output_path: PathBuf,
    /// A previous version of the file was replaced.
    pub overwritten: bool,
    /// Number of scene records that produced methods.
    pub scene_count: usize,
    /// Number of emitted action blocks.
    pub method_count: usize,
}

/// How a generation run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// The menu file was written.
    Written(MenuReport),
    /// The asset index returned no usable scenes; nothing was written.
    NoScenes,
    /// Scenes were found but no methods came out; nothing was written.
    NoMethods,
}
