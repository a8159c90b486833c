mod batch;
pub mod file_loader;

pub use batch::{
    ScriptAction, ScriptOutcome, SkipReason, backup_path, convert_directory, convert_path,
    convert_paths, write_outcome,
};
pub use file_loader::{collect_script_paths, load_script, script_language};

#[cfg(test)]
mod tests;
