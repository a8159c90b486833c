//! "Don't convert" marker.
//!
//! A script opts out of batch conversion with a marker comment:
//!
//! ```text
//! // DON'T CONVERT TO CF2!
//! // (Remove the line above to allow automatic conversion.)
//! ```
//!
//! Detection is forgiving: any case, any apostrophe (or none), "do not",
//! underscores for spaces, "Control Freak 2" spelled out and trailing punctuation
//! all count. The hint line is optional and removed together with the marker.
//! A leading UTF-8 byte order mark stays in front of the marker.

use regex::Regex;

use crate::base::LineEnding;
use crate::error::Result;

/// Canonical marker line inserted by [`TagController::set_tag`].
pub const TAG_LINE: &str = "// DON'T CONVERT TO CF2!";

/// Hint line inserted right below [`TAG_LINE`].
pub const TAG_HINT_LINE: &str = "// (Remove the line above to allow automatic conversion.)";

const TAG_PATTERN: &str = concat!(
    r"(?imR)^[ \t]*//+[ \t]*",
    r"(?:do[ \t_]*n[ \t]*(?:['’‘`´][ \t]*)?t|do[ \t_]+not)",
    r"[ \t_]+convert[ \t_]+to[ \t_]+",
    r"(?:cf[ \t_]*2|control[ \t_]*freak[ \t_]*2)",
    r"[ \t!.?]*",
    r"(?:(?:\r\n|\n|\r)[ \t]*//[^\r\n]*remove[^\r\n]*)?",
    r"(?:\r\n|\n|\r|$)",
);

const BOM: char = '\u{FEFF}';

/// Split a leading byte order mark off `text`.
fn split_bom(text: &str) -> (&str, &str) {
    match text.strip_prefix(BOM) {
        Some(body) => (&text[..BOM.len_utf8()], body),
        None => ("", text),
    }
}

/// Reads and writes the marker.
#[derive(Debug, Clone)]
pub struct TagController {
    pattern: Regex,
}

impl TagController {
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(TAG_PATTERN)?,
        })
    }

    pub fn has_tag(&self, text: &str) -> bool {
        let (_, body) = split_bom(text);
        self.pattern.is_match(body)
    }

    /// Add (`on`) or remove (`!on`) the marker.
    ///
    /// Adding is a no-op when a marker is already present; removing drops every
    /// marker occurrence together with its hint line.
    pub fn set_tag(&self, text: &str, on: bool, line_ending: LineEnding) -> String {
        let (bom, body) = split_bom(text);
        if on {
            if self.pattern.is_match(body) {
                return text.to_string();
            }
            let nl = line_ending.as_str();
            format!("{bom}{TAG_LINE}{nl}{TAG_HINT_LINE}{nl}{body}")
        } else {
            format!("{bom}{}", self.pattern.replace_all(body, ""))
        }
    }
}
