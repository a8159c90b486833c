//! Script discovery and loading.

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::base::Language;
use crate::base::constants::SUPPORTED_EXTENSIONS;
use crate::document::SourceDocument;
use crate::error::{ConvertError, Result};

/// Recursively collects every `.cs` and `.js` script under `dir`, sorted by path.
///
/// Hidden directories (`.git`, `.vs`, ...) are not entered.
pub fn collect_script_paths(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    let walker = WalkDir::new(dir.as_ref())
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry));

    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_file() && has_script_extension(entry.path()) {
            paths.push(entry.into_path());
        }
    }
    Ok(paths)
}

/// Language of a script, from its extension.
pub fn script_language(path: &Path) -> Result<Language> {
    let ext = get_extension(path)?;
    Language::from_extension(ext)
        .ok_or_else(|| ConvertError::UnsupportedExtension(ext.to_string()))
}

/// Reads a script into a [`SourceDocument`].
pub fn load_script(path: impl AsRef<Path>) -> Result<SourceDocument> {
    let path = path.as_ref();
    let language = script_language(path)?;
    let text = std::fs::read_to_string(path).map_err(|e| ConvertError::io(path, e))?;
    Ok(SourceDocument::new(text, language))
}

fn get_extension(path: &Path) -> Result<&str> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .ok_or_else(|| ConvertError::UnsupportedExtension(path.display().to_string()))
}

fn has_script_extension(path: &Path) -> bool {
    get_extension(path).is_ok_and(|ext| {
        SUPPORTED_EXTENSIONS
            .iter()
            .any(|supported| ext.eq_ignore_ascii_case(supported))
    })
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
}
