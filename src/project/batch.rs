//! Parallel conversion of many scripts.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::convert::{ConversionReport, Converter};
use crate::error::{ConvertError, Result};
use crate::options::ConvertOptions;

use super::file_loader;

/// Why a script is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The script carries the "don't convert" marker.
    Tagged,
    /// Nothing in the script needed rewriting.
    Unchanged,
}

/// What to do with one script after conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptAction {
    Rewrite(String),
    Skip(SkipReason),
}

/// Result of converting one script file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptOutcome {
    pub path: PathBuf,
    pub report: ConversionReport,
    pub action: ScriptAction,
}

impl ScriptOutcome {
    /// Rewritten text, when the script is to be overwritten.
    pub fn output(&self) -> Option<&str> {
        match &self.action {
            ScriptAction::Rewrite(text) => Some(text),
            ScriptAction::Skip(_) => None,
        }
    }

    pub fn skip_reason(&self) -> Option<SkipReason> {
        match self.action {
            ScriptAction::Rewrite(_) => None,
            ScriptAction::Skip(reason) => Some(reason),
        }
    }
}

/// Converts a single script file without writing anything.
pub fn convert_path(
    converter: &Converter,
    path: &Path,
    options: &ConvertOptions,
) -> Result<ScriptOutcome> {
    let doc = file_loader::load_script(path)?;

    if options.respect_tag && converter.tag().has_tag(doc.original()) {
        debug!(path = %path.display(), "skipping tagged script");
        return Ok(ScriptOutcome {
            path: path.to_path_buf(),
            report: converter.analyze(&doc),
            action: ScriptAction::Skip(SkipReason::Tagged),
        });
    }

    let script = converter.convert(&doc, options);
    let action = if script.is_changed() {
        ScriptAction::Rewrite(script.output)
    } else {
        ScriptAction::Skip(SkipReason::Unchanged)
    };
    Ok(ScriptOutcome {
        path: path.to_path_buf(),
        report: script.report,
        action,
    })
}

/// Converts `paths` in parallel; results keep the order of `paths`.
///
/// A file that cannot be read yields an error entry and does not stop the batch.
pub fn convert_paths(
    converter: &Converter,
    paths: &[PathBuf],
    options: &ConvertOptions,
) -> Vec<Result<ScriptOutcome>> {
    let outcomes: Vec<Result<ScriptOutcome>> = paths
        .par_iter()
        .map(|path| {
            let outcome = convert_path(converter, path, options);
            if let Err(e) = &outcome {
                warn!(path = %path.display(), error = %e, "failed to convert script");
            }
            outcome
        })
        .collect();

    let rewritten = outcomes
        .iter()
        .filter(|o| o.as_ref().is_ok_and(|o| o.output().is_some()))
        .count();
    info!(scripts = paths.len(), rewritten, "batch conversion finished");
    outcomes
}

/// Collects and converts every script under `dir`.
pub fn convert_directory(
    converter: &Converter,
    dir: impl AsRef<Path>,
    options: &ConvertOptions,
) -> Result<Vec<Result<ScriptOutcome>>> {
    let paths = file_loader::collect_script_paths(dir)?;
    Ok(convert_paths(converter, &paths, options))
}

/// Writes a rewritten script back to disk, backing up the original first when
/// `options.create_backups` is set. Returns whether anything was written.
pub fn write_outcome(outcome: &ScriptOutcome, options: &ConvertOptions) -> Result<bool> {
    let Some(output) = outcome.output() else {
        return Ok(false);
    };
    let path = &outcome.path;

    if options.create_backups {
        let backup = backup_path(path, &options.backup_extension);
        std::fs::copy(path, &backup).map_err(|e| ConvertError::io(&backup, e))?;
        debug!(path = %backup.display(), "wrote backup");
    }
    std::fs::write(path, output).map_err(|e| ConvertError::io(path, e))?;
    Ok(true)
}

/// `Player.cs` becomes `Player.cs.<extension>`.
pub fn backup_path(path: &Path, extension: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".");
    name.push(extension);
    PathBuf::from(name)
}
