//! Script language and line-ending detection.

use std::fmt;

use super::constants::{CSHARP_EXT, UNITYSCRIPT_EXT};

/// Language a script is written in.
///
/// Both languages call the same Unity API surface, so the tag never changes how
/// call sites are matched. It only drives cosmetic output such as display names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Language {
    #[default]
    CSharp,
    UnityScript,
}

impl Language {
    /// Detect the language from a file extension (without the dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            CSHARP_EXT => Some(Self::CSharp),
            UNITYSCRIPT_EXT => Some(Self::UnityScript),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::CSharp => CSHARP_EXT,
            Self::UnityScript => UNITYSCRIPT_EXT,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::CSharp => "C#",
            Self::UnityScript => "UnityScript",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Newline style used by a script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
    Cr,
}

impl LineEnding {
    /// Detect the dominant line ending of `text`.
    ///
    /// Ties and newline-free text resolve to [`LineEnding::Lf`].
    pub fn detect(text: &str) -> Self {
        let bytes = text.as_bytes();
        let (mut lf, mut crlf, mut cr) = (0usize, 0usize, 0usize);
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'\r' if bytes.get(i + 1) == Some(&b'\n') => {
                    crlf += 1;
                    i += 1;
                }
                b'\r' => cr += 1,
                b'\n' => lf += 1,
                _ => {}
            }
            i += 1;
        }

        if crlf > lf && crlf >= cr {
            Self::CrLf
        } else if cr > lf && cr > crlf {
            Self::Cr
        } else {
            Self::Lf
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
            Self::Cr => "\r",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_from_extension() {
        assert_eq!(Language::from_extension("cs"), Some(Language::CSharp));
        assert_eq!(Language::from_extension("JS"), Some(Language::UnityScript));
        assert_eq!(Language::from_extension("boo"), None);
    }

    #[test]
    fn test_detect_line_endings() {
        assert_eq!(LineEnding::detect("a\nb\n"), LineEnding::Lf);
        assert_eq!(LineEnding::detect("a\r\nb\r\nc\n"), LineEnding::CrLf);
        assert_eq!(LineEnding::detect("a\rb\r"), LineEnding::Cr);
        assert_eq!(LineEnding::detect("no newline"), LineEnding::Lf);
    }
}
