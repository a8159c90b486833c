//! Literal argument recognizers.
//!
//! Methods such as `GetKey` or `GetAxis` are only rewritten when their argument is
//! provably a literal of the expected kind. Anything else (a variable, a call, a
//! concatenation) is left alone and reported.
//!
//! UnityScript also accepts single-quoted strings; in C# those are char literals
//! and never prove a string or key name.

use regex::Regex;
use smol_str::SmolStr;

use crate::base::Language;
use crate::error::Result;
use crate::knowledge::{KeyNameTable, LiteralKind};

const STRING_LITERAL: &str =
    r#"^\s*(?:@"(?P<verbatim>(?:[^"]|"")*)"|"(?P<plain>(?:[^"\\\n]|\\.)*)")\s*$"#;
const ALT_STRING_LITERAL: &str = r"^\s*'(?P<alt>(?:[^'\\\n]|\\.)*)'\s*$";
const INT_LITERAL: &str = r"^\s*(?P<value>[-+]?[0-9]+)\s*$";
const KEYCODE_LITERAL: &str =
    r"^\s*(?:UnityEngine\s*\.\s*)?KeyCode\s*\.\s*(?P<key>[A-Za-z_][A-Za-z0-9_]*)\s*$";

/// Result of checking an argument against a [`LiteralKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiteralProof {
    Proven {
        /// Literal value (string content, integer text or key code member)
        value: SmolStr,
        /// Replacement argument text, when the literal has to be translated
        rewrite: Option<String>,
    },
    NotLiteral,
    /// A string was given for a key, but the name has no `KeyCode` member
    UnknownKey(String),
}

#[derive(Debug, Clone)]
pub struct LiteralRecognizer {
    string: Regex,
    alt_string: Regex,
    int: Regex,
    keycode: Regex,
}

impl LiteralRecognizer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            string: Regex::new(STRING_LITERAL)?,
            alt_string: Regex::new(ALT_STRING_LITERAL)?,
            int: Regex::new(INT_LITERAL)?,
            keycode: Regex::new(KEYCODE_LITERAL)?,
        })
    }

    /// Check `args` (the raw text between the parentheses) against `kind`.
    pub fn prove(
        &self,
        kind: LiteralKind,
        args: &str,
        keys: &KeyNameTable,
        language: Language,
    ) -> LiteralProof {
        match kind {
            LiteralKind::None => LiteralProof::Proven {
                value: SmolStr::new(args.trim()),
                rewrite: None,
            },
            LiteralKind::String => match self.string_value(args, language) {
                Some(value) => LiteralProof::Proven {
                    value: value.into(),
                    rewrite: None,
                },
                None => LiteralProof::NotLiteral,
            },
            LiteralKind::Int => match self.int.captures(args).and_then(|c| c.name("value")) {
                Some(value) => LiteralProof::Proven {
                    value: value.as_str().into(),
                    rewrite: None,
                },
                None => LiteralProof::NotLiteral,
            },
            LiteralKind::KeyCode => self.prove_keycode(args, keys, language),
        }
    }

    fn prove_keycode(&self, args: &str, keys: &KeyNameTable, language: Language) -> LiteralProof {
        if let Some(key) = self.keycode.captures(args).and_then(|c| c.name("key")) {
            return LiteralProof::Proven {
                value: key.as_str().into(),
                rewrite: None,
            };
        }

        let Some(name) = self.string_value(args, language) else {
            return LiteralProof::NotLiteral;
        };
        match keys.translate(&name) {
            Some(key) => {
                let trimmed = args.trim_start();
                let lead = &args[..args.len() - trimmed.len()];
                let trail = &trimmed[trimmed.trim_end().len()..];
                LiteralProof::Proven {
                    rewrite: Some(format!("{lead}KeyCode.{key}{trail}")),
                    value: key,
                }
            }
            None => LiteralProof::UnknownKey(name),
        }
    }

    /// Unescaped content of a string literal argument.
    fn string_value(&self, args: &str, language: Language) -> Option<String> {
        if language == Language::UnityScript {
            if let Some(alt) = self.alt_string.captures(args).and_then(|c| c.name("alt")) {
                return Some(unescape(alt.as_str()));
            }
        }
        let caps = self.string.captures(args)?;
        if let Some(verbatim) = caps.name("verbatim") {
            return Some(verbatim.as_str().replace("\"\"", "\""));
        }
        caps.name("plain").map(|plain| unescape(plain.as_str()))
    }
}

fn unescape(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut chars = content.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('0') => out.push('\0'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}
