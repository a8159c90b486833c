//! Position tracking for fragments
//!
//! Converts byte offsets into the 1-based line/column pairs shown in conversion reports.

use text_size::{TextRange, TextSize};

/// A position in a script (1-based line and column, column counted in characters)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineCol {
    pub line: u32,
    pub column: u32,
}

impl LineCol {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl Default for LineCol {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

/// Build a range from `usize` byte offsets, as produced by regex matches.
#[inline]
pub fn text_range(start: usize, end: usize) -> TextRange {
    TextRange::new(TextSize::new(start as u32), TextSize::new(end as u32))
}

/// Forward-only offset to line/column cursor.
///
/// Offsets must be queried in non-decreasing order. Each query only walks the
/// bytes between the previous offset and the new one, so resolving a sorted list
/// of offsets touches every byte of the text at most once.
#[derive(Debug, Clone)]
pub struct LineSweep<'a> {
    text: &'a str,
    pos: usize,
    line: u32,
    line_start: usize,
}

impl<'a> LineSweep<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            line: 1,
            line_start: 0,
        }
    }

    /// Resolve `offset` to a line/column pair.
    ///
    /// An offset behind the cursor restarts the sweep from the top of the text.
    pub fn locate(&mut self, offset: TextSize) -> LineCol {
        let target = usize::from(offset).min(self.text.len());
        if target < self.pos {
            *self = Self::new(self.text);
        }

        for (i, byte) in self.text.as_bytes()[self.pos..target].iter().enumerate() {
            if *byte == b'\n' {
                self.line += 1;
                self.line_start = self.pos + i + 1;
            }
        }
        self.pos = target;

        let column = self
            .text
            .get(self.line_start..target)
            .map_or(target - self.line_start, |s| s.chars().count());
        LineCol::new(self.line, column as u32 + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sweep_in_order() {
        let text = "ab\ncd\n\nef";
        let mut sweep = LineSweep::new(text);
        assert_eq!(sweep.locate(TextSize::new(0)), LineCol::new(1, 1));
        assert_eq!(sweep.locate(TextSize::new(1)), LineCol::new(1, 2));
        assert_eq!(sweep.locate(TextSize::new(3)), LineCol::new(2, 1));
        assert_eq!(sweep.locate(TextSize::new(7)), LineCol::new(4, 1));
        assert_eq!(sweep.locate(TextSize::new(8)), LineCol::new(4, 2));
    }

    #[test]
    fn test_sweep_restarts_when_queried_backwards() {
        let text = "a\nb\nc";
        let mut sweep = LineSweep::new(text);
        assert_eq!(sweep.locate(TextSize::new(4)), LineCol::new(3, 1));
        assert_eq!(sweep.locate(TextSize::new(2)), LineCol::new(2, 1));
    }

    #[test]
    fn test_column_counts_characters() {
        let text = "é = x";
        let mut sweep = LineSweep::new(text);
        // 'é' is two bytes, '=' starts at byte 3
        assert_eq!(sweep.locate(TextSize::new(3)), LineCol::new(1, 3));
    }

    #[test]
    fn test_text_range() {
        let range = text_range(2, 5);
        assert_eq!(u32::from(range.start()), 2);
        assert_eq!(u32::from(range.len()), 3);
    }
}
