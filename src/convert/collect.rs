//! Fragment collection.
//!
//! Runs every strategy over a document, orders the sites, resolves nesting, then
//! classifies and positions the resulting fragments.

use tracing::trace;

use crate::base::LineSweep;
use crate::document::SourceDocument;
use crate::patterns::{MemberKind, PatternMatch};

use super::report::Fragment;
use super::strategy::{ClassifyContext, Strategy, classify};

/// Collect the classified fragments of `doc`, sorted by offset and non-overlapping.
pub(crate) fn collect(
    strategies: &[Strategy],
    doc: &SourceDocument,
    ctx: &ClassifyContext<'_>,
) -> Vec<Fragment> {
    let mut sites: Vec<(usize, PatternMatch)> = strategies
        .iter()
        .enumerate()
        .flat_map(|(idx, strategy)| {
            strategy
                .find_sites(doc)
                .into_iter()
                .map(move |site| (idx, site))
        })
        .collect();
    sites.sort_by_key(|(_, site)| site.range().start());

    let sites = resolve_overlaps(sites);

    let mut fragments: Vec<Fragment> = sites
        .iter()
        .filter_map(|(idx, site)| classify(&strategies[*idx], site, doc, ctx))
        .collect();
    assign_positions(doc.original(), &mut fragments);
    fragments
}

/// Make sorted sites pairwise disjoint.
///
/// A method call whose argument list encloses a later site is shortened to its
/// head, so both are rewritten independently. Any other overlap drops the later
/// site. Kept sites stay sorted and disjoint, so only the last one can reach past
/// the start of the next site.
fn resolve_overlaps(sites: Vec<(usize, PatternMatch)>) -> Vec<(usize, PatternMatch)> {
    let mut kept: Vec<(usize, PatternMatch)> = Vec::with_capacity(sites.len());

    for (idx, site) in sites {
        let range = site.range();
        if let Some((_, prev)) = kept.last_mut() {
            let prev_range = prev.range();
            if prev_range.end() > range.start() {
                let encloses = prev.kind == MemberKind::Method
                    && prev.args.is_some_and(|args| args.contains_range(range));
                if !encloses {
                    trace!(?range, ?prev_range, "dropping overlapping site");
                    continue;
                }
                prev.truncate_to_head();
            }
        }
        kept.push((idx, site));
    }
    kept
}

/// Fill in line/column with one forward sweep; `fragments` must be sorted.
fn assign_positions(text: &str, fragments: &mut [Fragment]) {
    let mut sweep = LineSweep::new(text);
    for fragment in fragments {
        fragment.pos = sweep.locate(fragment.range.start());
    }
}
