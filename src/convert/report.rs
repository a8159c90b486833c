//! Fragments and conversion reports.

use indexmap::IndexSet;
use smol_str::SmolStr;

use crate::base::{LineCol, TextRange};
use crate::knowledge::{RigElement, Surface};
use crate::patterns::MemberKind;

/// Hard problem that blocks conversion of a site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProblemType {
    #[default]
    None,
    /// Member only exists on the Control Freak 1 surface
    ControlFreak1Feature,
}

impl ProblemType {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::ControlFreak1Feature => "Control Freak 1 feature without a replacement",
        }
    }
}

/// Reviewable condition attached to a site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WarningType {
    #[default]
    None,
    /// Method not in the knowledge base; rewritten at the class name only
    UnknownMethod,
    /// Property not in the knowledge base; rewritten at the class name only
    UnknownProperty,
    /// Argument is not a literal of the required kind; left unchanged
    NonLiteralParam,
    /// Quoted key name with no `KeyCode` equivalent; left unchanged
    UnknownKeyName,
}

impl WarningType {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Whether a site carrying this warning is still rewritten.
    pub fn allows_rewrite(&self) -> bool {
        matches!(self, Self::None | Self::UnknownMethod | Self::UnknownProperty)
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::UnknownMethod => "unknown method, class name replaced",
            Self::UnknownProperty => "unknown property, class name replaced",
            Self::NonLiteralParam => "argument is not a literal, left unchanged",
            Self::UnknownKeyName => "unknown key name, left unchanged",
        }
    }
}

/// Aggregate classification of one script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConvState {
    /// The script does not reference any legacy surface
    #[default]
    NothingChanged,
    Ok,
    OkWithWarnings,
    Problematic,
}

impl ConvState {
    /// Derive the state from classified fragments.
    ///
    /// Starts at `Ok`, the first warning upgrades to `OkWithWarnings` and the first
    /// problem to `Problematic`, which is terminal.
    pub fn from_fragments(fragments: &[Fragment]) -> Self {
        if fragments.is_empty() {
            return Self::NothingChanged;
        }
        let mut state = Self::Ok;
        for fragment in fragments {
            if !fragment.problem.is_none() {
                return Self::Problematic;
            }
            if !fragment.warning.is_none() {
                state = Self::OkWithWarnings;
            }
        }
        state
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NothingChanged => "nothing changed",
            Self::Ok => "ok",
            Self::OkWithWarnings => "ok with warnings",
            Self::Problematic => "problematic",
        }
    }
}

/// One recognized legacy call, property or type-use site.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fragment {
    pub surface: Surface,
    pub kind: MemberKind,
    /// Span of `original` in the source text
    pub range: TextRange,
    pub pos: LineCol,
    pub original: String,
    /// Rewritten text; equal to `original` when the site is not safe to rewrite
    pub modified: String,
    pub used_class: SmolStr,
    pub used_member: SmolStr,
    /// Raw argument text of a method call
    pub used_param: Option<String>,
    /// Value of a proven literal argument (axis name, key code, ...)
    pub literal: Option<SmolStr>,
    pub rig: Option<RigElement>,
    pub problem: ProblemType,
    pub warning: WarningType,
}

impl Fragment {
    pub fn file_pos(&self) -> usize {
        self.range.start().into()
    }

    pub fn line(&self) -> u32 {
        self.pos.line
    }

    pub fn is_changed(&self) -> bool {
        self.original != self.modified
    }

    /// `ok`, `warning` or `error` bucket of this fragment.
    pub fn severity(&self) -> &'static str {
        if !self.problem.is_none() {
            "error"
        } else if !self.warning.is_none() {
            "warning"
        } else {
            "ok"
        }
    }
}

/// Names referenced by proven literal arguments, in order of first use.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RigNames {
    pub axes: IndexSet<SmolStr>,
    pub buttons: IndexSet<SmolStr>,
    pub keys: IndexSet<SmolStr>,
    pub mouse_buttons: IndexSet<SmolStr>,
}

impl RigNames {
    fn record(&mut self, rig: RigElement, name: &SmolStr) {
        let set = match rig {
            RigElement::Axis => &mut self.axes,
            RigElement::Button => &mut self.buttons,
            RigElement::Key => &mut self.keys,
            RigElement::MouseButton => &mut self.mouse_buttons,
        };
        set.insert(name.clone());
    }

    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
            && self.buttons.is_empty()
            && self.keys.is_empty()
            && self.mouse_buttons.is_empty()
    }
}

/// Classified fragments of one script.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ConversionReport {
    fragments: Vec<Fragment>,
    ok: Vec<usize>,
    warnings: Vec<usize>,
    errors: Vec<usize>,
    state: ConvState,
    tagged: bool,
    rig: RigNames,
}

impl ConversionReport {
    /// Bucket sorted fragments and derive the aggregate state.
    pub fn new(fragments: Vec<Fragment>, tagged: bool) -> Self {
        let mut ok = Vec::new();
        let mut warnings = Vec::new();
        let mut errors = Vec::new();
        let mut rig = RigNames::default();

        for (idx, fragment) in fragments.iter().enumerate() {
            if !fragment.problem.is_none() {
                errors.push(idx);
            } else if !fragment.warning.is_none() {
                warnings.push(idx);
            } else {
                ok.push(idx);
                if let (Some(element), Some(name)) = (fragment.rig, &fragment.literal) {
                    rig.record(element, name);
                }
            }
        }

        let state = ConvState::from_fragments(&fragments);
        Self {
            fragments,
            ok,
            warnings,
            errors,
            state,
            tagged,
            rig,
        }
    }

    /// All fragments, sorted by offset.
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn ok(&self) -> impl Iterator<Item = &Fragment> {
        self.ok.iter().map(|&idx| &self.fragments[idx])
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Fragment> {
        self.warnings.iter().map(|&idx| &self.fragments[idx])
    }

    pub fn errors(&self) -> impl Iterator<Item = &Fragment> {
        self.errors.iter().map(|&idx| &self.fragments[idx])
    }

    pub fn ok_count(&self) -> usize {
        self.ok.len()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn state(&self) -> ConvState {
        self.state
    }

    /// Whether the script carries the "don't convert" marker.
    pub fn is_tagged(&self) -> bool {
        self.tagged
    }

    pub fn rig_names(&self) -> &RigNames {
        &self.rig
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
