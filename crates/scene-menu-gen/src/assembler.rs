use crate::error::MenuError;
use crate::template::{fill, Slot};
use scene_menu_hal::EditorHost;
use std::path::{Path, PathBuf};

/// Name of the generated file.
pub const OUTPUT_FILENAME: &str = "SceneLoadMenu.cs";

/// Asset name of the generator script; output is written next to it.
pub const GENERATOR_NAME: &str = "SceneLoadMenuGenerator";

const TEMPLATE_CLASS: &str = r#"using UnityEditor;
using UnityEditor.SceneManagement;
namespace charcolle.Utility {

    public static class SceneLoadMenu {
    #METHODS#
    }
}
"#;

/// A menu file that was written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuFile {
    /// Project-relative output path.
    pub path: PathBuf,
    /// A previous version was replaced.
    pub overwritten: bool,
}

/// Wrap the concatenated method blocks in the generated class.
pub fn assemble_document(methods: &str) -> String {
    fill(TEMPLATE_CLASS, &[(Slot::Methods, methods)])
}

/// Where the generated file goes: the generator script's directory.
pub fn output_path<H: EditorHost>(host: &H) -> Result<PathBuf, MenuError> {
    let generator = host
        .resolve_asset_path(GENERATOR_NAME)
        .map_err(|e| MenuError::host("asset lookup", e))?
        .ok_or_else(|| MenuError::GeneratorNotFound(GENERATOR_NAME.to_string()))?;

    let dir = Path::new(&generator).parent().unwrap_or_else(|| Path::new(""));
    Ok(dir.join(OUTPUT_FILENAME))
}

/// Write the generated menu and ask the host to re-index.
///
/// Returns `Ok(None)` without touching the disk if `methods` is empty.
/// An existing file is replaced unconditionally.
pub fn write_menu<H: EditorHost>(
    host: &mut H,
    methods: &str,
) -> Result<Option<MenuFile>, MenuError> {
    if methods.is_empty() {
        log::warn!("No methods generated, {} not written", OUTPUT_FILENAME);
        return Ok(None);
    }

    let path = output_path(host)?;
    let document = assemble_document(methods);

    let overwritten = host.file_exists(&path);
    if overwritten {
        log::info!("Menu will be overwritten: {}", path.display());
    }

    host.write_file(&path, &document)
        .map_err(|e| MenuError::host("file write", e))?;
    host.refresh().map_err(|e| MenuError::host("refresh", e))?;

    log::info!("Menu is created: {}", path.display());
    Ok(Some(MenuFile { path, overwritten }))
}
