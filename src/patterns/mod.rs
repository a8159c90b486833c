//! Call-site pattern library.
//!
//! Three matchers find the places legacy code touches a surface:
//!
//! ```text
//! method    <boundary> Class . Member ( args )
//! property  <boundary> Class . Member <anchor>
//! type      <start> [Namespace .] TypeName <end>
//! ```
//!
//! All matchers search the sanitized text, so a hit can never come from a comment.
//! The `regex` crate has no look-around, so boundary and anchor characters are
//! consumed by the match and the search resumes at the end of the matched body;
//! `Input.a+Input.b` still yields both sites.
//!
//! Each hit is reported as a list of [`Part`]s (class, dot, member, ...) whose ranges
//! index the original text. Rewriting emits a replacement for some parts and copies
//! the original text of all others, which keeps argument text and spacing intact.

mod grammar;

use regex::{Captures, Regex};
use smol_str::SmolStr;
use tracing::trace;

use crate::base::{TextRange, text_range};
use crate::document::SourceDocument;
use crate::error::Result;

pub use grammar::{class_alternation, method_regex, property_regex, type_regex};

/// Shape of a matched site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MemberKind {
    Method,
    Property,
    Type,
}

/// Role of one captured piece of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartKind {
    /// Legacy class name, including any namespace written with it
    Class,
    /// Namespace qualifier in front of a bare type name
    Namespace,
    /// Type name of a type-specifier match
    TypeName,
    /// `.` with surrounding whitespace
    Dot,
    Member,
    /// Whitespace and `(` after a method name
    Open,
    /// Argument text between the parentheses
    Args,
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Part {
    pub kind: PartKind,
    pub range: TextRange,
}

impl Part {
    pub fn new(kind: PartKind, range: TextRange) -> Self {
        Self { kind, range }
    }
}

/// One matched site, as contiguous parts in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch {
    pub kind: MemberKind,
    pub parts: Vec<Part>,
    /// Argument range of a method call; kept when the parts are shortened
    pub args: Option<TextRange>,
}

impl PatternMatch {
    /// Range covered by all parts.
    pub fn range(&self) -> TextRange {
        match (self.parts.first(), self.parts.last()) {
            (Some(first), Some(last)) => first.range.cover(last.range),
            _ => TextRange::default(),
        }
    }

    pub fn part(&self, kind: PartKind) -> Option<Part> {
        self.parts.iter().copied().find(|part| part.kind == kind)
    }

    /// Drop the argument list and closing parenthesis, keeping `Class . Member (`.
    ///
    /// Used when another site is nested inside the arguments; the argument text is
    /// then copied through as untouched source.
    pub fn truncate_to_head(&mut self) {
        if let Some(open) = self.parts.iter().position(|p| p.kind == PartKind::Open) {
            self.parts.truncate(open + 1);
        }
    }

    pub fn is_truncated(&self) -> bool {
        self.kind == MemberKind::Method && self.part(PartKind::Close).is_none()
    }
}

fn capture_parts(caps: &Captures<'_>, groups: &[(&str, PartKind)]) -> Vec<Part> {
    groups
        .iter()
        .filter_map(|(name, kind)| {
            caps.name(name)
                .map(|m| Part::new(*kind, text_range(m.start(), m.end())))
        })
        .collect()
}

/// Matches `Class.Method(args)` call sites.
#[derive(Debug, Clone)]
pub struct MethodPattern {
    regex: Regex,
}

impl MethodPattern {
    pub fn new(classes: &[SmolStr]) -> Result<Self> {
        Ok(Self {
            regex: Regex::new(&method_regex(classes))?,
        })
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn find_all(&self, doc: &SourceDocument) -> Vec<PatternMatch> {
        const GROUPS: &[(&str, PartKind)] = &[
            ("class", PartKind::Class),
            ("dot", PartKind::Dot),
            ("member", PartKind::Member),
            ("open", PartKind::Open),
        ];

        let text = doc.sanitized();
        let mut matches = Vec::new();
        let mut pos = 0;

        while let Some(caps) = self.regex.captures_at(text, pos) {
            let (Some(class), Some(open)) = (caps.name("class"), caps.name("open")) else {
                break;
            };
            // Resume on the `(` itself: it is the boundary of a nested call.
            pos = open.end() - 1;

            if doc.is_in_block(text_range(class.start(), open.end())) {
                trace!(offset = class.start(), "method match inside comment or literal");
                continue;
            }
            let Some(close) = find_closing_paren(doc, open.end()) else {
                trace!(offset = open.end(), "unbalanced call arguments, skipping");
                continue;
            };

            let mut parts = capture_parts(&caps, GROUPS);
            let args = text_range(open.end(), close);
            parts.push(Part::new(PartKind::Args, args));
            parts.push(Part::new(PartKind::Close, text_range(close, close + 1)));

            let site = PatternMatch {
                kind: MemberKind::Method,
                parts,
                args: Some(args),
            };
            if doc.is_in_block(site.range()) {
                trace!(range = ?site.range(), "method match inside comment or literal");
                continue;
            }
            matches.push(site);
        }
        matches
    }
}

/// Matches `Class.property` reads and writes.
#[derive(Debug, Clone)]
pub struct PropertyPattern {
    regex: Regex,
}

impl PropertyPattern {
    pub fn new(classes: &[SmolStr]) -> Result<Self> {
        Ok(Self {
            regex: Regex::new(&property_regex(classes))?,
        })
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn find_all(&self, doc: &SourceDocument) -> Vec<PatternMatch> {
        const GROUPS: &[(&str, PartKind)] = &[
            ("class", PartKind::Class),
            ("dot", PartKind::Dot),
            ("member", PartKind::Member),
        ];

        let text = doc.sanitized();
        let mut matches = Vec::new();
        let mut pos = 0;

        while let Some(caps) = self.regex.captures_at(text, pos) {
            let Some(member) = caps.name("member") else {
                break;
            };
            pos = member.end();

            let site = PatternMatch {
                kind: MemberKind::Property,
                parts: capture_parts(&caps, GROUPS),
                args: None,
            };
            if doc.is_in_block(site.range()) {
                trace!(range = ?site.range(), "property match inside comment or literal");
                continue;
            }
            matches.push(site);
        }
        matches
    }
}

/// Matches `[Namespace.]TypeName` in declarations.
#[derive(Debug, Clone)]
pub struct TypePattern {
    regex: Regex,
}

impl TypePattern {
    pub fn new(namespaces: &[SmolStr], type_name: &str) -> Result<Self> {
        Ok(Self {
            regex: Regex::new(&type_regex(namespaces, type_name))?,
        })
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn find_all(&self, doc: &SourceDocument) -> Vec<PatternMatch> {
        const GROUPS: &[(&str, PartKind)] = &[
            ("ns", PartKind::Namespace),
            ("type", PartKind::TypeName),
        ];

        let text = doc.sanitized();
        let mut matches = Vec::new();
        let mut pos = 0;

        while let Some(caps) = self.regex.captures_at(text, pos) {
            let Some(type_name) = caps.name("type") else {
                break;
            };
            pos = type_name.end();

            let site = PatternMatch {
                kind: MemberKind::Type,
                parts: capture_parts(&caps, GROUPS),
                args: None,
            };
            if doc.is_in_block(site.range()) {
                trace!(range = ?site.range(), "type match inside comment or literal");
                continue;
            }
            matches.push(site);
        }
        matches
    }
}

/// Find the `)` balancing an already opened `(`.
///
/// Parentheses inside string and char literals are skipped. A `;` before the
/// balancing parenthesis means the call is malformed and yields `None`.
fn find_closing_paren(doc: &SourceDocument, from: usize) -> Option<usize> {
    let bytes = doc.sanitized().as_bytes();
    let blocks = doc.comment_blocks();
    let mut next_block = doc.first_block_after(from);
    let mut depth = 1usize;
    let mut i = from;

    while i < bytes.len() {
        if let Some(block) = blocks.get(next_block) {
            if block.index() <= i {
                i = i.max(block.index() + block.len());
                next_block += 1;
                continue;
            }
        }

        match bytes[i] {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            b';' => return None,
            _ => {}
        }
        i += 1;
    }
    None
}
