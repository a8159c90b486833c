//! API knowledge bases.
//!
//! One [`ApiKnowledgeBase`] per legacy class family ("surface") describes how its
//! members map onto the Control Freak 2 replacement: which methods exist and what
//! literal argument they need, which members are safe to leave alone, and which only
//! existed on the Control Freak 1 surface. [`TypeKnowledgeBase`] covers bare type
//! names (`Touch`) that need a fully qualified replacement.
//!
//! The tables are plain data, built once and only read afterwards.

mod builtin;
mod keycodes;

use std::fmt;

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use crate::error::{ConvertError, Result};

pub use keycodes::KeyNameTable;

/// A legacy API class family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Surface {
    Input,
    Screen,
    Cursor,
    Touch,
}

impl Surface {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Input => "Input",
            Self::Screen => "Screen",
            Self::Cursor => "Cursor",
            Self::Touch => "Touch",
        }
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Literal kind a method argument must be proven to be before the call is rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LiteralKind {
    /// Any argument text is accepted
    #[default]
    None,
    /// `KeyCode.X` or a quoted key name such as `"left shift"`
    KeyCode,
    /// A string literal
    String,
    /// An integer literal
    Int,
}

/// Input rig element a proven literal argument names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RigElement {
    Axis,
    Button,
    Key,
    MouseButton,
}

/// A method the replacement class supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MethodDescriptor {
    pub literal: LiteralKind,
    pub rig: Option<RigElement>,
}

impl MethodDescriptor {
    pub fn new(literal: LiteralKind) -> Self {
        Self { literal, rig: None }
    }

    pub fn with_rig(mut self, rig: RigElement) -> Self {
        self.rig = Some(rig);
        self
    }
}

/// Conversion table for one surface.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ApiKnowledgeBase {
    pub surface: Surface,
    /// Class names as written in legacy code, optionally namespace-qualified
    pub legacy_classes: Vec<SmolStr>,
    /// Fully qualified replacement class
    pub converted_class: SmolStr,
    /// Whether `Class.Method(...)` call sites are matched at all
    pub match_methods: bool,
    /// Whether `Class.property` sites are matched at all
    pub match_properties: bool,
    pub methods: IndexMap<SmolStr, MethodDescriptor>,
    pub ignored_methods: FxHashSet<SmolStr>,
    pub ignored_properties: FxHashSet<SmolStr>,
    pub supported_properties: FxHashSet<SmolStr>,
    pub legacy_methods: FxHashSet<SmolStr>,
    pub legacy_properties: FxHashSet<SmolStr>,
}

impl ApiKnowledgeBase {
    /// Empty table for `surface`; fill it with the builder methods.
    pub fn new(surface: Surface, converted_class: impl Into<SmolStr>) -> Self {
        Self {
            surface,
            legacy_classes: Vec::new(),
            converted_class: converted_class.into(),
            match_methods: true,
            match_properties: true,
            methods: IndexMap::new(),
            ignored_methods: FxHashSet::default(),
            ignored_properties: FxHashSet::default(),
            supported_properties: FxHashSet::default(),
            legacy_methods: FxHashSet::default(),
            legacy_properties: FxHashSet::default(),
        }
    }

    pub fn with_classes(mut self, classes: &[&str]) -> Self {
        self.legacy_classes = classes.iter().map(|c| SmolStr::new(c)).collect();
        self
    }

    pub fn with_method(mut self, name: &str, descriptor: MethodDescriptor) -> Self {
        self.methods.insert(SmolStr::new(name), descriptor);
        self
    }

    pub fn with_ignored_methods(mut self, names: &[&str]) -> Self {
        self.ignored_methods.extend(names.iter().map(|n| SmolStr::new(n)));
        self
    }

    pub fn with_ignored_properties(mut self, names: &[&str]) -> Self {
        self.ignored_properties.extend(names.iter().map(|n| SmolStr::new(n)));
        self
    }

    pub fn with_supported_properties(mut self, names: &[&str]) -> Self {
        self.supported_properties.extend(names.iter().map(|n| SmolStr::new(n)));
        self
    }

    pub fn with_legacy_methods(mut self, names: &[&str]) -> Self {
        self.legacy_methods.extend(names.iter().map(|n| SmolStr::new(n)));
        self
    }

    pub fn with_legacy_properties(mut self, names: &[&str]) -> Self {
        self.legacy_properties.extend(names.iter().map(|n| SmolStr::new(n)));
        self
    }

    pub fn without_methods(mut self) -> Self {
        self.match_methods = false;
        self
    }

    pub fn method(&self, name: &str) -> Option<&MethodDescriptor> {
        self.methods.get(name)
    }

    pub fn is_method_ignored(&self, name: &str) -> bool {
        self.ignored_methods.contains(name)
    }

    pub fn is_property_ignored(&self, name: &str) -> bool {
        self.ignored_properties.contains(name)
    }

    pub fn is_property_supported(&self, name: &str) -> bool {
        self.supported_properties.contains(name)
    }

    pub fn is_legacy_method(&self, name: &str) -> bool {
        self.legacy_methods.contains(name)
    }

    pub fn is_legacy_property(&self, name: &str) -> bool {
        self.legacy_properties.contains(name)
    }

    /// Reject tables that cannot produce a working matcher.
    pub fn validate(&self) -> Result<()> {
        if self.legacy_classes.is_empty() {
            return Err(ConvertError::invalid_knowledge_base(
                self.surface,
                "no legacy class names",
            ));
        }
        if let Some(bad) = self
            .legacy_classes
            .iter()
            .find(|name| !is_qualified_identifier(name))
        {
            return Err(ConvertError::invalid_knowledge_base(
                self.surface,
                format!("'{bad}' is not a class name"),
            ));
        }
        if !is_qualified_identifier(&self.converted_class) {
            return Err(ConvertError::invalid_knowledge_base(
                self.surface,
                format!("'{}' is not a class name", self.converted_class),
            ));
        }
        Ok(())
    }
}

/// Conversion table for a bare type name.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeKnowledgeBase {
    pub surface: Surface,
    /// Namespaces the legacy type may be qualified with
    pub namespaces: Vec<SmolStr>,
    pub type_name: SmolStr,
    /// Fully qualified replacement type
    pub converted_type: SmolStr,
}

impl TypeKnowledgeBase {
    pub fn validate(&self) -> Result<()> {
        let names = std::iter::once(&self.type_name)
            .chain(self.namespaces.iter())
            .chain(std::iter::once(&self.converted_type));
        for name in names {
            if !is_qualified_identifier(name) {
                return Err(ConvertError::invalid_knowledge_base(
                    self.surface,
                    format!("'{name}' is not a type name"),
                ));
            }
        }
        Ok(())
    }
}

/// Everything a [`Converter`](crate::Converter) is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConverterConfig {
    pub surfaces: Vec<ApiKnowledgeBase>,
    pub types: Vec<TypeKnowledgeBase>,
    pub keys: KeyNameTable,
}

impl Default for ConverterConfig {
    /// Built-in Unity `Input` / `Screen` / `Cursor` / `Touch` tables.
    fn default() -> Self {
        Self {
            surfaces: vec![builtin::input(), builtin::screen(), builtin::cursor()],
            types: vec![builtin::touch()],
            keys: KeyNameTable::default(),
        }
    }
}

#[cfg(feature = "serde")]
impl ConverterConfig {
    /// Load a full configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// `Name` or `Namespace.Name` made of Unicode identifiers.
pub(crate) fn is_qualified_identifier(name: &str) -> bool {
    !name.is_empty()
        && name.split('.').all(|segment| {
            let mut chars = segment.chars();
            chars
                .next()
                .is_some_and(|c| c == '_' || unicode_ident::is_xid_start(c))
                && chars.all(unicode_ident::is_xid_continue)
        })
}

#[cfg(test)]
mod tests;
