//! Conversion options

use crate::base::constants::BACKUP_EXTENSION;

/// Options for converting scripts
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConvertOptions {
    /// Skip scripts carrying the "don't convert" marker in batch runs
    pub respect_tag: bool,
    /// Remove the marker from converted output
    pub strip_tag: bool,
    /// Write `<script>.<backup_extension>` before overwriting a script
    pub create_backups: bool,
    /// Extension appended to backup copies (without the dot)
    pub backup_extension: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            respect_tag: true,
            strip_tag: true,
            create_backups: true,
            backup_extension: BACKUP_EXTENSION.to_string(),
        }
    }
}

impl ConvertOptions {
    /// Options for converting a script the user explicitly picked, marker or not.
    pub fn forced() -> Self {
        Self {
            respect_tag: false,
            ..Self::default()
        }
    }
}
