//! Key-name to `KeyCode` translation.
//!
//! Legacy code often passes key names as strings (`Input.GetKey("left shift")`).
//! The replacement API only takes `KeyCode` values, so a proven string literal is
//! rewritten to the matching enum member.

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

/// Case-insensitive key-name table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyNameTable {
    aliases: FxHashMap<SmolStr, SmolStr>,
}

const NAMED_KEYS: &[(&str, &str)] = &[
    // Arrows
    ("up", "UpArrow"),
    ("down", "DownArrow"),
    ("left", "LeftArrow"),
    ("right", "RightArrow"),
    // Modifiers
    ("left shift", "LeftShift"),
    ("right shift", "RightShift"),
    ("left ctrl", "LeftControl"),
    ("right ctrl", "RightControl"),
    ("left alt", "LeftAlt"),
    ("right alt", "RightAlt"),
    ("left cmd", "LeftCommand"),
    ("right cmd", "RightCommand"),
    ("left windows", "LeftWindows"),
    ("right windows", "RightWindows"),
    ("alt gr", "AltGr"),
    ("caps lock", "CapsLock"),
    ("numlock", "Numlock"),
    ("scroll lock", "ScrollLock"),
    // Editing and navigation
    ("backspace", "Backspace"),
    ("tab", "Tab"),
    ("return", "Return"),
    ("enter", "KeypadEnter"),
    ("escape", "Escape"),
    ("space", "Space"),
    ("delete", "Delete"),
    ("insert", "Insert"),
    ("home", "Home"),
    ("end", "End"),
    ("page up", "PageUp"),
    ("page down", "PageDown"),
    ("clear", "Clear"),
    ("pause", "Pause"),
    ("print screen", "Print"),
    ("sys req", "SysReq"),
    ("break", "Break"),
    ("help", "Help"),
    ("menu", "Menu"),
    // Punctuation
    ("-", "Minus"),
    ("=", "Equals"),
    ("[", "LeftBracket"),
    ("]", "RightBracket"),
    ("\\", "Backslash"),
    (";", "Semicolon"),
    ("'", "Quote"),
    (",", "Comma"),
    (".", "Period"),
    ("/", "Slash"),
    ("`", "BackQuote"),
    ("!", "Exclaim"),
    ("\"", "DoubleQuote"),
    ("#", "Hash"),
    ("$", "Dollar"),
    ("&", "Ampersand"),
    ("(", "LeftParen"),
    (")", "RightParen"),
    ("*", "Asterisk"),
    ("+", "Plus"),
    (":", "Colon"),
    ("<", "Less"),
    (">", "Greater"),
    ("?", "Question"),
    ("@", "At"),
    ("^", "Caret"),
    ("_", "Underscore"),
    // Keypad operators
    ("[.]", "KeypadPeriod"),
    ("[/]", "KeypadDivide"),
    ("[*]", "KeypadMultiply"),
    ("[-]", "KeypadMinus"),
    ("[+]", "KeypadPlus"),
    ("equals", "KeypadEquals"),
];

impl KeyNameTable {
    /// Table without any entries; single letters and digits still translate.
    pub fn empty() -> Self {
        Self {
            aliases: FxHashMap::default(),
        }
    }

    /// Add or replace an alias. Names are matched case-insensitively.
    pub fn insert(&mut self, name: &str, key: impl Into<SmolStr>) {
        self.aliases.insert(SmolStr::new(name.to_lowercase()), key.into());
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    /// Translate a key name into a `KeyCode` member name (`"x"` -> `X`).
    pub fn translate(&self, name: &str) -> Option<SmolStr> {
        let mut chars = name.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if c.is_ascii_alphabetic() {
                return Some(SmolStr::new(c.to_ascii_uppercase().to_string()));
            }
            if c.is_ascii_digit() {
                return Some(SmolStr::new(format!("Alpha{c}")));
            }
        }
        self.aliases.get(name.to_lowercase().as_str()).cloned()
    }
}

impl Default for KeyNameTable {
    fn default() -> Self {
        let mut table = Self::empty();
        for (name, key) in NAMED_KEYS {
            table.insert(name, *key);
        }
        for digit in 0..=9 {
            table.insert(&format!("[{digit}]"), format!("Keypad{digit}"));
        }
        for button in 0..=6 {
            table.insert(&format!("mouse {button}"), format!("Mouse{button}"));
        }
        for f in 1..=15 {
            table.insert(&format!("f{f}"), format!("F{f}"));
        }
        for button in 0..=19 {
            table.insert(
                &format!("joystick button {button}"),
                format!("JoystickButton{button}"),
            );
        }
        table
    }
}
