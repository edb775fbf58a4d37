/// Error types for menu generation.
pub mod error;

/// Core type definitions.
pub mod types;

/// Persisted build-list settings.
pub mod config;

/// Scene name normalization and deduplication.
pub mod identifier;

/// Scene record construction.
pub mod scene;

/// Build-list synchronization.
pub mod build_list;

/// Fixed-slot template filling.
pub mod template;

/// Per-scene menu method generation.
pub mod emitter;

/// Output document assembly and writing.
pub mod assembler;

/// Filesystem-backed editor host.
pub mod project;

pub use config::MenuConfig;
pub use error::MenuError;
pub use project::ProjectHost;
pub use scene_menu_hal::{BuildEntry, EditorHost};
pub use types::{GenerateOutcome, MenuReport, Scene, SyncOutcome};

/// Run the "Generate Scene Menu" command.
///
/// Synchronizes the build list first; a failure there is logged and does not
/// stop generation. Then regenerates the menu file from scratch.
pub fn generate_scene_menu<H: EditorHost>(
    host: &mut H,
    config: &MenuConfig,
) -> Result<GenerateOutcome, MenuError> {
    match build_list::register_build_scenes(host, config) {
        Ok(outcome) => log::debug!("Build list sync: {:?}", outcome),
        Err(e) => log::error!("Build list sync failed: {}", e),
    }

    generate_menu(host)
}

/// Discover scenes, emit their menu methods and write the menu file.
///
/// Returns [`GenerateOutcome::NoScenes`] or [`GenerateOutcome::NoMethods`]
/// (with a warning logged) when there is nothing to write.
pub fn generate_menu<H: EditorHost>(host: &mut H) -> Result<GenerateOutcome, MenuError> {
    let paths = host
        .list_scene_paths()
        .map_err(|e| MenuError::host("scene listing", e))?;
    if paths.is_empty() {
        log::warn!("No scenes found");
        return Ok(GenerateOutcome::NoScenes);
    }

    // Only feeds `in_build`; an unreadable list means nothing is in the build.
    let build_entries = host.build_entries().unwrap_or_else(|e| {
        log::error!("Build list read failed, treating as empty: {}", e);
        Vec::new()
    });

    let scenes = scene::collect_scenes(&paths, &build_entries);
    if scenes.is_empty() {
        log::warn!("No scenes found with usable names");
        return Ok(GenerateOutcome::NoScenes);
    }

    let methods = emitter::emit_methods(&scenes);
    let Some(file) = assembler::write_menu(host, &methods)? else {
        return Ok(GenerateOutcome::NoMethods);
    };

    Ok(GenerateOutcome::Written(MenuReport {
        output_path: file.path,
        overwritten: file.overwritten,
        scene_count: scenes.len(),
        method_count: emitter::method_count(&scenes),
    }))
}
