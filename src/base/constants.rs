//! Domain constants.

/// Script file extensions the converter accepts.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["cs", "js"];

/// C# script extension
pub const CSHARP_EXT: &str = "cs";

/// UnityScript (Unity's JavaScript dialect) extension
pub const UNITYSCRIPT_EXT: &str = "js";

/// Suffix appended to a script path when a backup is written before overwriting it.
pub const BACKUP_EXTENSION: &str = "backup";
