use crate::config::MenuConfig;
use crate::error::MenuError;
use crate::types::SyncOutcome;
use scene_menu_hal::{BuildEntry, EditorHost};

/// Compute the new build list from discovered scene paths.
///
/// Every path containing `build_dir` is included, enabled, in discovery
/// order. A path equal to `first_scene` is moved to the front.
pub fn plan_build_list(
    paths: &[String],
    build_dir: &str,
    first_scene: Option<&str>,
) -> Vec<BuildEntry> {
    let mut entries: Vec<BuildEntry> = Vec::new();

    for path in paths.iter().filter(|p| p.contains(build_dir)) {
        let entry = BuildEntry::enabled(path.as_str());
        if first_scene == Some(path.as_str()) {
            entries.insert(0, entry);
        } else {
            entries.push(entry);
        }
    }

    entries
}

/// Rewrite the host's build list from the configured build directory.
///
/// No-op when `BuildScenePath` is unset or no scenes are indexed. Otherwise
/// the host's list is replaced wholesale.
pub fn register_build_scenes<H: EditorHost>(
    host: &mut H,
    config: &MenuConfig,
) -> Result<SyncOutcome, MenuError> {
    let Some(build_dir) = config.build_dir() else {
        log::debug!("BuildScenePath not set, leaving build list alone");
        return Ok(SyncOutcome::Skipped);
    };

    let paths = host
        .list_scene_paths()
        .map_err(|e| MenuError::host("scene listing", e))?;
    if paths.is_empty() {
        return Ok(SyncOutcome::NoScenes);
    }

    let entries = plan_build_list(&paths, build_dir, config.first_scene());
    let count = entries.len();

    host.set_build_entries(entries)
        .map_err(|e| MenuError::host("build list update", e))?;

    log::info!("Build list set to {} scenes under {}", count, build_dir);
    Ok(SyncOutcome::Replaced { count })
}
