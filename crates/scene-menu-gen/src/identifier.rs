use crate::emitter::MenuAction;
use crate::error::MenuError;
use crate::types::Scene;
use std::path::Path;

/// Characters that are mapped to `_` in scene names.
const REPLACED_CHARS: [char; 5] = [' ', '(', ')', '-', '&'];

/// Derive a normalized scene name from a scene asset path.
///
/// Uses the file name without extension (e.g. `Assets/Scenes/My Scene (2).unity`
/// → `My_Scene__2_`). Names made up entirely of symbol characters are rejected.
pub fn scene_name_from_path(path: &str) -> Result<String, MenuError> {
    let stem = Path::new(path)
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| MenuError::InvalidSceneName {
            name: path.to_string(),
        })?;

    if is_symbolic_only(stem) {
        return Err(MenuError::InvalidSceneName {
            name: stem.to_string(),
        });
    }

    Ok(normalize_scene_name(stem))
}

/// Replace spaces, parentheses, hyphens and ampersands with `_`.
pub fn normalize_scene_name(name: &str) -> String {
    name.chars()
        .map(|ch| if REPLACED_CHARS.contains(&ch) { '_' } else { ch })
        .collect()
}

/// Returns true if `name` is non-empty and consists only of ASCII
/// punctuation/symbols (plus `¥`).
pub fn is_symbolic_only(name: &str) -> bool {
    !name.is_empty() && name.chars().all(is_symbol_char)
}

fn is_symbol_char(ch: char) -> bool {
    matches!(ch, '!'..='/' | ':'..='@' | '['..='`' | '{'..='~' | '¥')
}

/// Make `candidate` unique against the scenes accepted so far.
///
/// The n-th repeat of a name gets `_n` appended, counted by exact match in
/// discovery order. If that name is still taken (a scene literally named
/// `Main_1`, or one whose generated method identifiers would clash) the
/// counter keeps going until it is free.
pub fn dedupe_name(candidate: String, accepted: &[Scene]) -> String {
    if !is_taken(&candidate, accepted) {
        return candidate;
    }

    let duplicates = accepted
        .iter()
        .filter(|s| s.scene_name == candidate)
        .count();

    let mut n = duplicates.max(1);
    loop {
        let name = format!("{}_{}", candidate, n);
        if !is_taken(&name, accepted) {
            return name;
        }
        n += 1;
    }
}

/// A name is taken if any identifier it would generate is already generated
/// by an accepted scene.
fn is_taken(name: &str, accepted: &[Scene]) -> bool {
    let wanted: Vec<String> = method_names(name).collect();
    accepted
        .iter()
        .flat_map(|s| method_names(&s.scene_name))
        .any(|taken| wanted.contains(&taken))
}

fn method_names(name: &str) -> impl Iterator<Item = String> + '_ {
    MenuAction::ALL
        .into_iter()
        .map(move |action| format!("{}{}", name, action.suffix()))
}
