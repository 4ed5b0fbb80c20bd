//! Record synthesis.
//!
//! The engine composes the extractor, the category mapper, and the due-date
//! resolver into a single stateless transform: one catalog entry in, one
//! canonical approval record out. The only state is the static lookup
//! tables the engine owns, built once and never mutated at runtime.
//!
//! Synthesis never fails: absence of an attribute always degrades to the
//! owning family's documented default.

mod families;

use chrono::{DateTime, Utc};
use tracing::debug;

use approval_templates::{extract, CatalogEntry, PlaceholderLexicon};
use approval_types::ApprovalRequest;

use crate::category::CategoryMapper;
use crate::schedule::resolve_due_date;
use crate::urgency::UrgencyClassifier;

pub use families::{DerivedFields, FamilyRegistry, FieldDeriver};

/// The approval request engine.
///
/// Owns the immutable configuration (classifier, mapper, lexicon, family
/// registry); every method is a pure function of that configuration, the
/// catalog input, and the caller-supplied clock.
pub struct ApprovalEngine {
    classifier: UrgencyClassifier,
    mapper: CategoryMapper,
    lexicon: PlaceholderLexicon,
    families: FamilyRegistry,
}

impl ApprovalEngine {
    /// Engine wired with the builtin lookup tables.
    pub fn builtin() -> Self {
        Self::new(
            UrgencyClassifier::builtin(),
            CategoryMapper::builtin(),
            PlaceholderLexicon::builtin(),
            FamilyRegistry::builtin(),
        )
    }

    /// Engine with caller-supplied configuration, for tests and alternate
    /// deployments.
    pub fn new(
        classifier: UrgencyClassifier,
        mapper: CategoryMapper,
        lexicon: PlaceholderLexicon,
        families: FamilyRegistry,
    ) -> Self {
        Self {
            classifier,
            mapper,
            lexicon,
            families,
        }
    }

    /// Synthesize the canonical record for one catalog entry.
    ///
    /// `index` is the entry's 1-based catalog position and determines the
    /// record id (`req-{index:04}`). The subject is the entry's example
    /// text unless the category family renders a canonical subject.
    pub fn synthesize(
        &self,
        entry: &CatalogEntry,
        index: usize,
        now: DateTime<Utc>,
    ) -> ApprovalRequest {
        let attributes = extract(&self.lexicon, &entry.details_template, &entry.example);
        let category = self.mapper.map(&entry.subsystem);
        let urgency = self.classifier.classify(&entry.action_type);
        let due_date = resolve_due_date(&self.classifier, &entry.action_type, now);

        let family = self.mapper.family(&entry.subsystem);
        let derived = self.families.derive(family, entry, &attributes, now);
        let subject = derived
            .subject
            .unwrap_or_else(|| entry.example.clone());

        debug!(
            action_type = %entry.action_type,
            %category,
            %urgency,
            attributes = attributes.len(),
            "synthesized approval record"
        );

        ApprovalRequest {
            id: format!("req-{index:04}"),
            subject,
            category,
            due_date,
            urgency,
            attributes,
            fields: derived.fields,
        }
    }

    /// Synthesize one record per catalog entry, in catalog order, with
    /// 1-based ids.
    pub fn synthesize_all(
        &self,
        catalog: &[CatalogEntry],
        now: DateTime<Utc>,
    ) -> Vec<ApprovalRequest> {
        catalog
            .iter()
            .enumerate()
            .map(|(index, entry)| self.synthesize(entry, index + 1, now))
            .collect()
    }
}
