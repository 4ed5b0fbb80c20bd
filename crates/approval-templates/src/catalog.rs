//! Template catalog loading.
//!
//! The catalog is an externally supplied, ordered table of request
//! templates, one per backend action type. It is typically maintained as a
//! YAML document alongside the subsystems it describes:
//!
//! ```yaml
//! catalog:
//!   - subsystem: hr
//!     action_type: hr.update-employee-record
//!     details_template: "Update {field} for {impacted employee} to {new value}"
//!     example: "Update Maria Garcia's salary. New value: $95,000. Reason: Annual merit increase"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// One catalog entry: a static description of one backend action type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Source subsystem identifier (e.g. "hr", "payroll", "procurement").
    pub subsystem: String,

    /// Action type identifier; unique within the catalog and the join key
    /// for urgency classification.
    pub action_type: String,

    /// Display template containing zero or more `{placeholder}` tokens.
    pub details_template: String,

    /// Free-text example that instantiates the template's placeholders.
    pub example: String,
}

/// Top-level YAML document shape.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    catalog: Vec<CatalogEntry>,
}

/// Errors raised while loading a catalog.
///
/// These exist only at the configuration boundary; extraction,
/// classification, scheduling, and synthesis never produce errors.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to parse catalog YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("duplicate action type in catalog: {0}")]
    DuplicateActionType(String),

    #[error("catalog contains no entries")]
    Empty,
}

/// Parse a catalog from YAML and validate its invariants.
///
/// Validates that the catalog is non-empty and that every `action_type` is
/// unique. Entry order is preserved; the synthesizer emits records in the
/// same order.
pub fn load_catalog_from_str(yaml: &str) -> Result<Vec<CatalogEntry>, CatalogError> {
    let document: CatalogDocument = serde_yaml::from_str(yaml)?;

    if document.catalog.is_empty() {
        return Err(CatalogError::Empty);
    }

    let mut seen = HashSet::new();
    for entry in &document.catalog {
        if !seen.insert(entry.action_type.as_str()) {
            return Err(CatalogError::DuplicateActionType(entry.action_type.clone()));
        }
    }

    Ok(document.catalog)
}
