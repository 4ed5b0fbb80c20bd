//! Approval Desk - the engine behind the approval-request review dashboard.
//!
//! Turns a small catalog of request templates (one per backend action type)
//! into fully populated, strongly-typed approval records: extracts
//! structured attributes out of loosely-formatted example text, classifies
//! each action type into an urgency tier, computes a due date with
//! business-day arithmetic, and assembles a canonical record shape that
//! downstream consumers can treat uniformly regardless of source subsystem.
//!
//! Everything is pure and synchronous: the caller supplies the clock, the
//! engine owns only immutable lookup tables, and every record is a fresh
//! value. The presentation layer consumes the finished records and nothing
//! else.
//!
//! ## Quick Start
//!
//! ```rust
//! use approval_desk::{ApprovalEngine, CatalogEntry};
//! use chrono::{TimeZone, Utc};
//!
//! let entry = CatalogEntry {
//!     subsystem: "expenses".into(),
//!     action_type: "expenses.reimburse".into(),
//!     details_template: "Transfer {amount} to {recipient}".into(),
//!     example: "Transfer $100 to Michael Johnson".into(),
//! };
//!
//! let engine = ApprovalEngine::builtin();
//! let now = Utc.with_ymd_and_hms(2025, 8, 4, 9, 0, 0).unwrap();
//! let record = engine.synthesize(&entry, 1, now);
//!
//! assert_eq!(record.id, "req-0001");
//! assert_eq!(record.attributes["amount"], "$100");
//! assert_eq!(record.attributes["recipient"], "Michael Johnson");
//! ```

// Business-day arithmetic
pub mod calendar;

// Subsystem to display-category mapping
pub mod category;

// Due-date resolution
pub mod schedule;

// Record synthesis and per-family field derivation
pub mod synthesizer;

// Urgency classification
pub mod urgency;

// Catalog and extraction layer
pub use approval_templates::{
    extract, load_catalog_from_str, normalize_key, CatalogEntry, CatalogError, PlaceholderKind,
    PlaceholderLexicon, RangePart,
};

// Canonical record types
pub use approval_types::{
    ApprovalRequest, CategoryFamily, CategoryFields, ExtractedAttributes, UrgencyTier,
};

pub use calendar::add_business_days;
pub use category::CategoryMapper;
pub use schedule::resolve_due_date;
pub use synthesizer::{ApprovalEngine, DerivedFields, FamilyRegistry, FieldDeriver};
pub use urgency::UrgencyClassifier;
