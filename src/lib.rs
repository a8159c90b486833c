//! # cf2-converter
//!
//! Rewrites Unity scripts that use the legacy `Input`, `Screen` and `Cursor`
//! classes (and the `Touch` type) so they call Control Freak 2 instead.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! project   → Directory walking, parallel batch runs, backups
//!   ↓
//! convert   → Strategies, classification, reports, output splicing
//!   ↓
//! patterns  → Site matchers with balanced argument lists
//!   ↓
//! knowledge → Per-surface API tables, key name translation
//!   ↓
//! document  → Original + sanitized text, comment/string blocks
//!   ↓
//! sanitize  → Comment and string literal masking
//!   ↓
//! base      → Language, line endings, TextRange, LineCol
//! ```
//!
//! ## Example
//!
//! ```
//! use cf2_converter::{Converter, Language};
//!
//! let converter = Converter::new().unwrap();
//! let script = converter.convert_str("if (Input.GetKey(\"x\")) Jump();", Language::CSharp);
//! assert_eq!(script.output, "if (ControlFreak2.CF2Input.GetKey(KeyCode.X)) Jump();");
//! ```

// ============================================================================
// MODULES (dependency order: base → sanitize → document → knowledge → patterns → convert → project)
// ============================================================================

/// Foundation types: Language, LineEnding, TextRange, LineCol
pub mod base;

/// Comment and string literal masking
pub mod sanitize;

/// Source text paired with its sanitized view
pub mod document;

/// API tables for the legacy surfaces and key names
pub mod knowledge;

/// Call, property and type-use site matchers
pub mod patterns;

/// Classification, reports and output reconstruction
pub mod convert;

/// "Don't convert" marker handling
pub mod tag;

/// Batch conversion of script files
pub mod project;

pub mod error;
pub mod options;

// Re-export foundation types
pub use base::{Language, LineCol, LineEnding, TextRange, TextSize};

pub use convert::{
    ConvState, ConversionReport, ConvertedScript, Converter, Fragment, ProblemType, RigNames,
    WarningType,
};
pub use document::SourceDocument;
pub use error::{ConvertError, Result};
pub use knowledge::{ApiKnowledgeBase, ConverterConfig, KeyNameTable, Surface, TypeKnowledgeBase};
pub use options::ConvertOptions;
pub use tag::TagController;
