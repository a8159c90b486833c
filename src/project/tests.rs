use std::fs;
use std::path::Path;

use tempfile::TempDir;

use super::*;
use crate::base::Language;
use crate::convert::{ConvState, Converter};
use crate::error::ConvertError;
use crate::options::ConvertOptions;
use crate::tag::TAG_LINE;

fn write(dir: &Path, name: &str, text: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, text).unwrap();
}

fn project() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "Player.cs", "float h = Input.GetAxis(\"Horizontal\");\n");
    write(dir.path(), "Scripts/Menu.js", "var p = Input.mousePosition;\n");
    write(dir.path(), "Scripts/Plain.cs", "class Plain {}\n");
    write(
        dir.path(),
        "Scripts/Tagged.cs",
        &format!("{TAG_LINE}\nbool b = Input.anyKey;\n"),
    );
    write(dir.path(), "readme.txt", "Input.anyKey");
    write(dir.path(), ".git/hooks/Hook.cs", "Input.anyKey;");
    dir
}

fn names(paths: &[std::path::PathBuf], root: &Path) -> Vec<String> {
    paths
        .iter()
        .map(|p| {
            p.strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

#[test]
fn test_collect_script_paths() {
    let dir = project();
    let paths = collect_script_paths(dir.path()).unwrap();
    assert_eq!(
        names(&paths, dir.path()),
        vec![
            "Player.cs",
            "Scripts/Menu.js",
            "Scripts/Plain.cs",
            "Scripts/Tagged.cs"
        ]
    );
}

#[test]
fn test_collect_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let result = collect_script_paths(dir.path().join("missing"));
    assert!(matches!(result, Err(ConvertError::Walk(_))));
}

#[test]
fn test_load_script_detects_language() {
    let dir = project();
    let doc = load_script(dir.path().join("Scripts/Menu.js")).unwrap();
    assert_eq!(doc.language(), Language::UnityScript);
    assert_eq!(
        script_language(Path::new("A.CS")).unwrap(),
        Language::CSharp
    );
}

#[test]
fn test_load_script_rejects_other_files() {
    let dir = project();
    let result = load_script(dir.path().join("readme.txt"));
    assert!(matches!(result, Err(ConvertError::UnsupportedExtension(ext)) if ext == "txt"));
}

#[test]
fn test_load_missing_script_is_io_error() {
    let dir = TempDir::new().unwrap();
    let result = load_script(dir.path().join("Gone.cs"));
    assert!(matches!(result, Err(ConvertError::Io { .. })));
}

#[test]
fn test_convert_directory_outcomes() {
    let dir = project();
    let converter = Converter::new().unwrap();
    let outcomes = convert_directory(&converter, dir.path(), &ConvertOptions::default()).unwrap();
    let outcomes: Vec<ScriptOutcome> = outcomes.into_iter().map(|o| o.unwrap()).collect();

    assert_eq!(outcomes.len(), 4);
    assert_eq!(
        outcomes[0].output(),
        Some("float h = ControlFreak2.CF2Input.GetAxis(\"Horizontal\");\n")
    );
    assert_eq!(outcomes[0].report.state(), ConvState::Ok);
    assert_eq!(
        outcomes[1].output(),
        Some("var p = ControlFreak2.CF2Input.mousePosition;\n")
    );
    assert_eq!(outcomes[2].skip_reason(), Some(SkipReason::Unchanged));
    assert_eq!(outcomes[3].skip_reason(), Some(SkipReason::Tagged));
    assert!(outcomes[3].report.is_tagged());
    assert_eq!(outcomes[3].report.ok_count(), 1);
}

#[test]
fn test_forced_conversion_ignores_marker() {
    let dir = project();
    let converter = Converter::new().unwrap();
    let outcome = convert_path(
        &converter,
        &dir.path().join("Scripts/Tagged.cs"),
        &ConvertOptions::forced(),
    )
    .unwrap();
    assert_eq!(
        outcome.output(),
        Some("bool b = ControlFreak2.CF2Input.anyKey;\n")
    );
}

#[test]
fn test_failures_do_not_stop_the_batch() {
    let dir = project();
    let converter = Converter::new().unwrap();
    let paths = vec![dir.path().join("Missing.cs"), dir.path().join("Player.cs")];
    let outcomes = convert_paths(&converter, &paths, &ConvertOptions::default());
    assert!(outcomes[0].is_err());
    assert!(outcomes[1].as_ref().is_ok_and(|o| o.output().is_some()));
}

#[test]
fn test_write_outcome_with_backup() {
    let dir = project();
    let converter = Converter::new().unwrap();
    let path = dir.path().join("Player.cs");
    let options = ConvertOptions::default();
    let outcome = convert_path(&converter, &path, &options).unwrap();

    assert!(write_outcome(&outcome, &options).unwrap());
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "float h = ControlFreak2.CF2Input.GetAxis(\"Horizontal\");\n"
    );
    let backup = dir.path().join("Player.cs.backup");
    assert_eq!(backup, backup_path(&path, "backup"));
    assert_eq!(
        fs::read_to_string(backup).unwrap(),
        "float h = Input.GetAxis(\"Horizontal\");\n"
    );
}

#[test]
fn test_write_outcome_without_backup() {
    let dir = project();
    let converter = Converter::new().unwrap();
    let path = dir.path().join("Scripts/Menu.js");
    let options = ConvertOptions {
        create_backups: false,
        ..ConvertOptions::default()
    };
    let outcome = convert_path(&converter, &path, &options).unwrap();

    assert!(write_outcome(&outcome, &options).unwrap());
    assert!(!dir.path().join("Scripts/Menu.js.backup").exists());
}

#[test]
fn test_skipped_outcome_is_not_written() {
    let dir = project();
    let converter = Converter::new().unwrap();
    let path = dir.path().join("Scripts/Plain.cs");
    let options = ConvertOptions::default();
    let outcome = convert_path(&converter, &path, &options).unwrap();

    assert!(!write_outcome(&outcome, &options).unwrap());
    assert!(!dir.path().join("Scripts/Plain.cs.backup").exists());
}

#[test]
fn test_tagged_script_with_byte_order_mark_is_skipped() {
    let dir = TempDir::new().unwrap();
    let text = format!("\u{FEFF}{TAG_LINE}\nvar p = Input.mousePosition;\n");
    write(dir.path(), "A.cs", &text);
    let converter = Converter::new().unwrap();
    let path = dir.path().join("A.cs");

    let outcome = convert_path(&converter, &path, &ConvertOptions::default()).unwrap();
    assert_eq!(outcome.skip_reason(), Some(SkipReason::Tagged));
    assert!(outcome.report.is_tagged());

    let forced = convert_path(&converter, &path, &ConvertOptions::forced()).unwrap();
    assert_eq!(
        forced.output(),
        Some("\u{FEFF}var p = ControlFreak2.CF2Input.mousePosition;\n")
    );
}

#[test]
fn test_byte_order_mark_survives_rewrite() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "B.cs", "\u{FEFF}bool b = Input.anyKey;\n");
    let converter = Converter::new().unwrap();
    let path = dir.path().join("B.cs");
    let options = ConvertOptions {
        create_backups: false,
        ..ConvertOptions::default()
    };

    let outcome = convert_path(&converter, &path, &options).unwrap();
    assert!(write_outcome(&outcome, &options).unwrap());
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "\u{FEFF}bool b = ControlFreak2.CF2Input.anyKey;\n"
    );
}

#[test]
fn test_unchanged_script_with_byte_order_mark_is_skipped() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "C.cs", "\u{FEFF}class C {}\n");
    let converter = Converter::new().unwrap();
    let outcome = convert_path(
        &converter,
        &dir.path().join("C.cs"),
        &ConvertOptions::default(),
    )
    .unwrap();
    assert_eq!(outcome.skip_reason(), Some(SkipReason::Unchanged));
}
