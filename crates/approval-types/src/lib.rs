//! Shared data types for the approval request engine.
//!
//! This crate holds the pure, serde-friendly types that flow between the
//! catalog, the extraction layer, and the record synthesizer:
//!
//! - [`ApprovalRequest`] - the canonical, UI-ready record shape
//! - [`CategoryFields`] - the tagged per-family field variant
//! - [`UrgencyTier`] - the coarse urgency classification driving due dates
//! - [`ExtractedAttributes`] - the sparse attribute map produced by extraction
//!
//! Everything here is immutable data; no component mutates a record after
//! synthesis.

mod record;
mod urgency;

pub use record::{ApprovalRequest, CategoryFamily, CategoryFields, ExtractedAttributes};
pub use urgency::UrgencyTier;
