//! Status resolution: partition the catalog into enabled/disabled
//!
//! One-shot classification. Evidence is collected exactly once per pass and
//! reused for every add-on; when the cluster is not ready the evidence
//! source is never invoked and the partition is empty, because individual
//! add-on status is meaningless without a running control plane.

use crate::catalog::AddonDescriptor;
use crate::error::Result;
use crate::evidence::{EvidenceCorpus, EvidenceSource};

/// Partition of the (filtered) catalog
///
/// Catalog iteration order is preserved within each set; every descriptor
/// lands in exactly one of the two.
#[derive(Debug, Default)]
pub struct Classification<'a> {
    pub enabled: Vec<&'a AddonDescriptor>,
    pub disabled: Vec<&'a AddonDescriptor>,
}

/// Classify every catalog entry against live evidence.
///
/// Collects the corpus once (only when ready) and delegates to
/// [`classify`]; kept separate so the matching logic stays pure and
/// testable against synthetic corpora.
pub fn resolve<'a, S: EvidenceSource>(
    catalog: &'a [AddonDescriptor],
    source: &S,
    is_ready: bool,
) -> Result<Classification<'a>> {
    if !is_ready {
        return Ok(Classification::default());
    }
    let corpus = source.collect()?;
    Ok(classify(catalog, &corpus))
}

/// Partition `catalog` against a fixed evidence corpus.
///
/// Per add-on, signature candidates are tried in declared order (resource
/// substring before sentinel file) and evaluation short-circuits on the
/// first satisfied candidate.
pub fn classify<'a>(catalog: &'a [AddonDescriptor], corpus: &EvidenceCorpus) -> Classification<'a> {
    let mut classification = Classification::default();

    for addon in catalog {
        if addon.signatures.iter().any(|sig| sig.satisfied_by(corpus)) {
            classification.enabled.push(addon);
        } else {
            classification.disabled.push(addon);
        }
    }

    classification
}
