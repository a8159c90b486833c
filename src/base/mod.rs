//! Foundation types for the converter.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`TextRange`], [`TextSize`] - Byte offsets into a script
//! - [`LineCol`], [`LineSweep`] - 1-based line/column lookup
//! - [`LineEnding`] - Detected newline style of a script
//! - [`Language`] - Script language tag
//! - Domain constants (file extensions, backup suffix)
//!
//! This module has NO dependencies on other crate modules.

pub mod constants;
mod language;
mod position;

pub use language::{Language, LineEnding};
pub use position::{LineCol, LineSweep, text_range};

// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};
