//! Lexical sanitizer.
//!
//! Blanks comment content so that call-site patterns can never match inside a
//! comment, and records every comment and string/char literal span for a second
//! filtering pass over matches. Preprocessor lines (`#region`, `#if`) count as
//! comments so that an apostrophe in a region name never opens a char literal.
//!
//! The scan is a single forward pass over the text with no backtracking. The
//! sanitized output always has the same byte length as the input: masked characters
//! become one space per UTF-8 byte and newlines are kept so line numbers computed on
//! either text agree.

use crate::base::{TextRange, text_range};

/// What kind of span a [`CommentBlock`] covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BlockKind {
    /// `// ...` up to (not including) the newline
    LineComment,
    /// `/* ... */`
    BlockComment,
    /// `"..."` or verbatim `@"..."`
    String,
    /// `'...'`
    AltString,
    /// `#region`, `#if` and other preprocessor lines, masked like a line comment
    Directive,
}

impl BlockKind {
    pub fn is_comment(&self) -> bool {
        matches!(
            self,
            Self::LineComment | Self::BlockComment | Self::Directive
        )
    }
}

/// A half-open span of a comment or literal in the original text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommentBlock {
    pub kind: BlockKind,
    pub range: TextRange,
}

impl CommentBlock {
    pub fn new(kind: BlockKind, range: TextRange) -> Self {
        Self { kind, range }
    }

    /// Byte offset of the block start.
    pub fn index(&self) -> usize {
        self.range.start().into()
    }

    /// Byte length of the block.
    pub fn len(&self) -> usize {
        self.range.len().into()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    /// Check whether `range` lies entirely inside this block (inclusive end).
    pub fn contains_range(&self, range: TextRange) -> bool {
        self.range.start() <= range.start() && range.end() <= self.range.end()
    }
}

/// Output of [`sanitize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sanitized {
    /// Same-length copy of the input with comment content blanked
    pub text: String,
    /// Comment and literal blocks in source order
    pub blocks: Vec<CommentBlock>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    None,
    LineComment,
    BlockComment,
    String { verbatim: bool },
    AltString,
    Directive,
}

impl State {
    fn block_kind(self) -> Option<BlockKind> {
        match self {
            Self::None => None,
            Self::LineComment => Some(BlockKind::LineComment),
            Self::BlockComment => Some(BlockKind::BlockComment),
            Self::String { .. } => Some(BlockKind::String),
            Self::AltString => Some(BlockKind::AltString),
            Self::Directive => Some(BlockKind::Directive),
        }
    }
}

/// Mask comment content and collect comment/literal blocks.
pub fn sanitize(text: &str) -> Sanitized {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut blocks = Vec::new();
    let mut state = State::None;
    let mut block_start = 0;
    // only blanks seen since the last newline
    let mut at_line_start = true;

    let mut chars = text.char_indices();
    while let Some((i, c)) = chars.next() {
        let next = bytes.get(i + 1).copied();
        match state {
            State::None => match (c, next) {
                ('#', _) if at_line_start => {
                    state = State::Directive;
                    block_start = i;
                    mask(&mut out, c);
                }
                ('/', Some(b'/')) => {
                    state = State::LineComment;
                    block_start = i;
                    out.push_str("  ");
                    chars.next();
                }
                ('/', Some(b'*')) => {
                    state = State::BlockComment;
                    block_start = i;
                    out.push_str("  ");
                    chars.next();
                }
                ('"', _) => {
                    state = State::String {
                        verbatim: is_verbatim_prefix(bytes, i),
                    };
                    block_start = i;
                    out.push(c);
                }
                ('\'', _) => {
                    state = State::AltString;
                    block_start = i;
                    out.push(c);
                }
                _ => out.push(c),
            },
            State::LineComment | State::Directive => {
                if c == '\n' {
                    if let Some(kind) = state.block_kind() {
                        blocks.push(CommentBlock::new(kind, text_range(block_start, i)));
                    }
                    state = State::None;
                    out.push('\n');
                } else {
                    mask(&mut out, c);
                }
            }
            State::BlockComment => {
                if c == '*' && next == Some(b'/') {
                    out.push_str("  ");
                    chars.next();
                    blocks.push(CommentBlock::new(
                        BlockKind::BlockComment,
                        text_range(block_start, i + 2),
                    ));
                    state = State::None;
                } else if c == '\n' {
                    out.push('\n');
                } else {
                    mask(&mut out, c);
                }
            }
            State::String { verbatim: true } => {
                out.push(c);
                if c == '"' {
                    if next == Some(b'"') {
                        // "" inside a verbatim string is an escaped quote
                        out.push('"');
                        chars.next();
                    } else {
                        blocks.push(CommentBlock::new(
                            BlockKind::String,
                            text_range(block_start, i + 1),
                        ));
                        state = State::None;
                    }
                }
            }
            State::String { verbatim: false } | State::AltString => {
                out.push(c);
                let quote = if state == State::AltString { '\'' } else { '"' };
                if c == '\\' {
                    if let Some((_, escaped)) = chars.next() {
                        out.push(escaped);
                    }
                } else if c == quote {
                    if let Some(kind) = state.block_kind() {
                        blocks.push(CommentBlock::new(kind, text_range(block_start, i + 1)));
                    }
                    state = State::None;
                }
            }
        }
        at_line_start = match c {
            '\n' => true,
            ' ' | '\t' => at_line_start && state == State::None,
            _ => false,
        };
    }

    if let Some(kind) = state.block_kind() {
        blocks.push(CommentBlock::new(kind, text_range(block_start, text.len())));
    }

    Sanitized { text: out, blocks }
}

/// Replace one character with as many spaces as it has UTF-8 bytes.
#[inline]
fn mask(out: &mut String, c: char) {
    for _ in 0..c.len_utf8() {
        out.push(' ');
    }
}

/// `@"` and `$@"` / `@$"` open verbatim strings.
fn is_verbatim_prefix(bytes: &[u8], quote: usize) -> bool {
    match quote {
        0 => false,
        1 => bytes[0] == b'@',
        _ => {
            bytes[quote - 1] == b'@' || (bytes[quote - 1] == b'$' && bytes[quote - 2] == b'@')
        }
    }
}

#[cfg(test)]
mod tests;
