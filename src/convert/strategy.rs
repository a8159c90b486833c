//! Per-surface converter strategies and the shared classifier.
//!
//! Every surface is one [`Strategy`] record holding its compiled matchers and its
//! knowledge base. A single [`classify`] function turns a matched site into a
//! [`Fragment`] for any strategy; surfaces differ only in their tables.

use smol_str::SmolStr;

use crate::base::Language;
use crate::document::SourceDocument;
use crate::error::Result;
use crate::knowledge::{
    ApiKnowledgeBase, KeyNameTable, LiteralKind, RigElement, Surface, TypeKnowledgeBase,
};
use crate::patterns::{
    MemberKind, MethodPattern, PartKind, PatternMatch, PropertyPattern, TypePattern,
};

use super::literal::{LiteralProof, LiteralRecognizer};
use super::report::{Fragment, ProblemType, WarningType};

/// Converter for a `Class.member` surface (`Input`, `Screen`, `Cursor`).
#[derive(Debug, Clone)]
pub struct ClassConverter {
    kb: ApiKnowledgeBase,
    methods: Option<MethodPattern>,
    properties: Option<PropertyPattern>,
}

impl ClassConverter {
    pub fn new(kb: ApiKnowledgeBase) -> Result<Self> {
        kb.validate()?;
        let methods = if kb.match_methods {
            Some(MethodPattern::new(&kb.legacy_classes)?)
        } else {
            None
        };
        let properties = if kb.match_properties {
            Some(PropertyPattern::new(&kb.legacy_classes)?)
        } else {
            None
        };
        Ok(Self {
            kb,
            methods,
            properties,
        })
    }

    pub fn knowledge(&self) -> &ApiKnowledgeBase {
        &self.kb
    }

    pub fn method_pattern(&self) -> Option<&MethodPattern> {
        self.methods.as_ref()
    }

    pub fn property_pattern(&self) -> Option<&PropertyPattern> {
        self.properties.as_ref()
    }
}

/// Converter for a bare type name (`Touch`).
#[derive(Debug, Clone)]
pub struct TypeConverter {
    kb: TypeKnowledgeBase,
    pattern: TypePattern,
}

impl TypeConverter {
    pub fn new(kb: TypeKnowledgeBase) -> Result<Self> {
        kb.validate()?;
        let pattern = TypePattern::new(&kb.namespaces, &kb.type_name)?;
        Ok(Self { kb, pattern })
    }

    pub fn knowledge(&self) -> &TypeKnowledgeBase {
        &self.kb
    }

    pub fn pattern(&self) -> &TypePattern {
        &self.pattern
    }
}

/// One legacy surface.
#[derive(Debug, Clone)]
pub enum Strategy {
    Class(ClassConverter),
    Type(TypeConverter),
}

impl Strategy {
    pub fn surface(&self) -> Surface {
        match self {
            Self::Class(conv) => conv.kb.surface,
            Self::Type(conv) => conv.kb.surface,
        }
    }

    /// Replacement emitted for the class or type-name part.
    pub fn converted_name(&self) -> &str {
        match self {
            Self::Class(conv) => &conv.kb.converted_class,
            Self::Type(conv) => &conv.kb.converted_type,
        }
    }

    /// All sites of this surface in `doc`, methods before properties.
    pub fn find_sites(&self, doc: &SourceDocument) -> Vec<PatternMatch> {
        match self {
            Self::Class(conv) => {
                let mut sites = conv
                    .methods
                    .as_ref()
                    .map(|p| p.find_all(doc))
                    .unwrap_or_default();
                if let Some(properties) = &conv.properties {
                    sites.extend(properties.find_all(doc));
                }
                sites
            }
            Self::Type(conv) => conv.pattern.find_all(doc),
        }
    }
}

/// Shared lookup state for [`classify`].
pub(crate) struct ClassifyContext<'a> {
    pub literals: &'a LiteralRecognizer,
    pub keys: &'a KeyNameTable,
    pub language: Language,
}

#[derive(Debug, Default)]
struct Verdict {
    problem: ProblemType,
    warning: WarningType,
    args_rewrite: Option<String>,
    literal: Option<SmolStr>,
    rig: Option<RigElement>,
}

/// Classify one site and build its rewrite.
///
/// Returns `None` for members the knowledge base ignores: they behave the same on
/// both APIs and are not reported at all.
pub(crate) fn classify(
    strategy: &Strategy,
    site: &PatternMatch,
    doc: &SourceDocument,
    ctx: &ClassifyContext<'_>,
) -> Option<Fragment> {
    let member = site
        .part(PartKind::Member)
        .or_else(|| site.part(PartKind::TypeName))
        .map(|part| doc.slice(part.range))
        .unwrap_or_default();
    let args = site.args.map(|range| doc.slice(range));

    let verdict = match (strategy, site.kind) {
        (Strategy::Class(conv), MemberKind::Method) => {
            classify_method(&conv.kb, member, args.unwrap_or_default(), ctx)?
        }
        (Strategy::Class(conv), MemberKind::Property) => classify_property(&conv.kb, member)?,
        (Strategy::Type(_), MemberKind::Type) => Verdict::default(),
        _ => return None,
    };

    let original = doc.slice(site.range()).to_string();
    let modified = if verdict.problem.is_none() && verdict.warning.allows_rewrite() {
        render(
            site,
            doc,
            strategy.converted_name(),
            verdict.args_rewrite.as_deref(),
        )
    } else {
        original.clone()
    };

    let used_class = site
        .part(PartKind::Class)
        .map(|part| doc.slice(part.range))
        .unwrap_or(original.as_str());

    Some(Fragment {
        surface: strategy.surface(),
        kind: site.kind,
        range: site.range(),
        pos: Default::default(),
        used_class: SmolStr::new(used_class),
        used_member: SmolStr::new(member),
        used_param: args.map(String::from),
        literal: verdict.literal,
        rig: verdict.rig,
        problem: verdict.problem,
        warning: verdict.warning,
        original,
        modified,
    })
}

fn classify_method(
    kb: &ApiKnowledgeBase,
    name: &str,
    args: &str,
    ctx: &ClassifyContext<'_>,
) -> Option<Verdict> {
    if kb.is_method_ignored(name) {
        return None;
    }

    let mut verdict = Verdict::default();
    if let Some(descriptor) = kb.method(name) {
        if descriptor.literal != LiteralKind::None {
            let proof = ctx
                .literals
                .prove(descriptor.literal, args, ctx.keys, ctx.language);
            match proof {
                LiteralProof::Proven { value, rewrite } => {
                    verdict.literal = Some(value);
                    verdict.rig = descriptor.rig;
                    verdict.args_rewrite = rewrite;
                }
                LiteralProof::NotLiteral => verdict.warning = WarningType::NonLiteralParam,
                LiteralProof::UnknownKey(_) => verdict.warning = WarningType::UnknownKeyName,
            }
        }
    } else if kb.is_legacy_method(name) {
        verdict.problem = ProblemType::ControlFreak1Feature;
    } else {
        verdict.warning = WarningType::UnknownMethod;
    }
    Some(verdict)
}

fn classify_property(kb: &ApiKnowledgeBase, name: &str) -> Option<Verdict> {
    if kb.is_property_ignored(name) {
        return None;
    }

    let mut verdict = Verdict::default();
    if kb.is_property_supported(name) {
        // plain rewrite
    } else if kb.is_legacy_property(name) {
        verdict.problem = ProblemType::ControlFreak1Feature;
    } else {
        verdict.warning = WarningType::UnknownProperty;
    }
    Some(verdict)
}

/// Emit the replacement for class/type parts, the translated literal for the
/// argument part when there is one, and the original text of every other part.
fn render(
    site: &PatternMatch,
    doc: &SourceDocument,
    converted: &str,
    args_rewrite: Option<&str>,
) -> String {
    let mut out = String::new();
    for part in &site.parts {
        match part.kind {
            PartKind::Class | PartKind::TypeName => out.push_str(converted),
            PartKind::Namespace => {}
            PartKind::Args => out.push_str(args_rewrite.unwrap_or(doc.slice(part.range))),
            PartKind::Dot | PartKind::Member | PartKind::Open | PartKind::Close => {
                out.push_str(doc.slice(part.range))
            }
        }
    }
    out
}
