//! Script conversion.
//!
//! A [`Converter`] is assembled once from a [`ConverterConfig`] and is then only
//! read, so one instance can serve any number of documents, on any number of
//! threads. Converting a document runs a fixed pipeline:
//!
//! ```text
//! find sites (per strategy) → order + resolve nesting → classify
//!     → line numbers → report → splice rewrites → strip marker
//! ```

mod collect;
mod literal;
mod reconstruct;
mod report;
mod strategy;


use tracing::debug;

use crate::base::Language;
use crate::document::SourceDocument;
use crate::error::Result;
use crate::knowledge::{ConverterConfig, KeyNameTable};
use crate::options::ConvertOptions;
use crate::tag::TagController;

pub use literal::{LiteralProof, LiteralRecognizer};
pub use reconstruct::reconstruct;
pub use report::{ConvState, ConversionReport, Fragment, ProblemType, RigNames, WarningType};
pub use strategy::{ClassConverter, Strategy, TypeConverter};

use strategy::ClassifyContext;

/// Rewritten text of one script plus its report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedScript {
    pub output: String,
    pub report: ConversionReport,
    changed: bool,
}

impl ConvertedScript {
    /// Whether `output` differs from the input text (byte order mark aside).
    pub fn is_changed(&self) -> bool {
        self.changed
    }

    pub fn state(&self) -> ConvState {
        self.report.state()
    }
}

/// Immutable conversion engine.
#[derive(Debug, Clone)]
pub struct Converter {
    strategies: Vec<Strategy>,
    literals: LiteralRecognizer,
    keys: KeyNameTable,
    tag: TagController,
}

impl Converter {
    /// Converter over the built-in Unity tables.
    pub fn new() -> Result<Self> {
        Self::with_config(ConverterConfig::default())
    }

    pub fn with_config(config: ConverterConfig) -> Result<Self> {
        let mut strategies = Vec::with_capacity(config.surfaces.len() + config.types.len());
        for kb in config.surfaces {
            strategies.push(Strategy::Class(ClassConverter::new(kb)?));
        }
        for kb in config.types {
            strategies.push(Strategy::Type(TypeConverter::new(kb)?));
        }

        Ok(Self {
            strategies,
            literals: LiteralRecognizer::new()?,
            keys: config.keys,
            tag: TagController::new()?,
        })
    }

    pub fn strategies(&self) -> &[Strategy] {
        &self.strategies
    }

    pub fn tag(&self) -> &TagController {
        &self.tag
    }

    /// Find and classify every legacy site without producing output text.
    pub fn analyze(&self, doc: &SourceDocument) -> ConversionReport {
        let ctx = ClassifyContext {
            literals: &self.literals,
            keys: &self.keys,
            language: doc.language(),
        };
        let fragments = collect::collect(&self.strategies, doc, &ctx);
        let report = ConversionReport::new(fragments, self.tag.has_tag(doc.original()));

        debug!(
            language = %doc.language(),
            fragments = report.fragments().len(),
            warnings = report.warning_count(),
            errors = report.error_count(),
            state = report.state().as_str(),
            "analyzed script"
        );
        report
    }

    /// Analyze `doc` and splice every safe rewrite into its text.
    pub fn convert(&self, doc: &SourceDocument, options: &ConvertOptions) -> ConvertedScript {
        let report = self.analyze(doc);
        let mut output = reconstruct(doc.original(), report.fragments());
        if options.strip_tag && report.is_tagged() {
            output = self.tag.set_tag(&output, false, doc.line_ending());
        }
        let changed = output != doc.original();
        if doc.has_bom() {
            output.insert(0, '\u{FEFF}');
        }
        ConvertedScript {
            output,
            report,
            changed,
        }
    }

    /// Convenience wrapper over [`Converter::convert`] with default options.
    pub fn convert_str(&self, text: &str, language: Language) -> ConvertedScript {
        let doc = SourceDocument::new(text, language);
        self.convert(&doc, &ConvertOptions::default())
    }
}
