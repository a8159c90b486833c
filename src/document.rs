//! Source documents.
//!
//! A [`SourceDocument`] owns the original text of one script together with its
//! sanitized twin and the comment/string blocks found while sanitizing. Pattern
//! matching runs on the sanitized text; every matched span is then read back from the
//! original text by offset.
//!
//! A leading UTF-8 byte order mark is not part of the original text; the document
//! only remembers that it was there so converted output can carry it again.

use crate::base::{Language, LineEnding, TextRange, TextSize};
use crate::sanitize::{CommentBlock, sanitize};

const BOM: char = '\u{FEFF}';

/// One script prepared for conversion.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    original: String,
    sanitized: String,
    blocks: Vec<CommentBlock>,
    line_ending: LineEnding,
    language: Language,
    bom: bool,
}

impl SourceDocument {
    pub fn new(text: impl Into<String>, language: Language) -> Self {
        let mut original: String = text.into();
        let bom = original.starts_with(BOM);
        if bom {
            original.drain(..BOM.len_utf8());
        }
        let sanitized = sanitize(&original);
        let line_ending = LineEnding::detect(&original);
        Self {
            original,
            sanitized: sanitized.text,
            blocks: sanitized.blocks,
            line_ending,
            language,
            bom,
        }
    }

    /// Whether the script started with a byte order mark.
    pub fn has_bom(&self) -> bool {
        self.bom
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    /// Copy of the original with all comment content replaced by spaces.
    pub fn sanitized(&self) -> &str {
        &self.sanitized
    }

    /// Comment and string/char literal blocks, ordered by start offset.
    pub fn comment_blocks(&self) -> &[CommentBlock] {
        &self.blocks
    }

    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn len(&self) -> TextSize {
        TextSize::of(self.original.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.original.is_empty()
    }

    /// Original text covered by `range`.
    pub fn slice(&self, range: TextRange) -> &str {
        &self.original[range]
    }

    /// Check whether `range` lies entirely inside one comment or literal block.
    ///
    /// Both bounds are inclusive: a range ending exactly where a block ends (such as
    /// the tail of an unterminated string at end of file) counts as inside.
    pub fn is_in_block(&self, range: TextRange) -> bool {
        let idx = self
            .blocks
            .partition_point(|block| block.range.start() <= range.start());
        idx > 0 && self.blocks[idx - 1].contains_range(range)
    }

    /// Index of the first block that ends after `offset`.
    pub(crate) fn first_block_after(&self, offset: usize) -> usize {
        self.blocks
            .partition_point(|block| usize::from(block.range.end()) <= offset)
    }
}
