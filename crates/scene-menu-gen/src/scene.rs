use crate::identifier::{dedupe_name, scene_name_from_path};
use crate::types::Scene;
use scene_menu_hal::BuildEntry;

/// Lower-case substrings that mark a scene as test/debug content.
const TEST_MARKERS: [&str; 4] = ["test", "debug", "example", "plugin"];

impl Scene {
    /// Build a scene record, deriving `in_build` from the given build-list
    /// snapshot and `is_test` from the name and path.
    pub fn new(path: String, scene_name: String, build_entries: &[BuildEntry]) -> Self {
        let in_build = build_entries.iter().any(|entry| entry.path == path);
        let is_test = looks_like_test_scene(&scene_name, &path);
        Self {
            path,
            scene_name,
            in_build,
            is_test,
        }
    }
}

/// Returns true if the lower-cased name or path contains a test marker.
pub fn looks_like_test_scene(scene_name: &str, path: &str) -> bool {
    let name = scene_name.to_lowercase();
    let path = path.to_lowercase();
    TEST_MARKERS
        .iter()
        .any(|marker| name.contains(marker) || path.contains(marker))
}

/// Turn discovered scene paths into uniquely named scene records.
///
/// Records keep discovery order. Scenes whose names cannot be normalized are
/// logged and skipped.
pub fn collect_scenes(paths: &[String], build_entries: &[BuildEntry]) -> Vec<Scene> {
    let mut scenes: Vec<Scene> = Vec::with_capacity(paths.len());

    for path in paths {
        let candidate = match scene_name_from_path(path) {
            Ok(name) => name,
            Err(e) => {
                log::error!("{} ({})", e, path);
                continue;
            }
        };

        let scene_name = dedupe_name(candidate, &scenes);
        log::debug!("Scene {} -> {}", path, scene_name);
        scenes.push(Scene::new(path.clone(), scene_name, build_entries));
    }

    scenes
}
