//! Canonical approval request records.
//!
//! A record is the fully resolved, subsystem-independent representation of
//! one pending approval request. The presentation layer is the sole consumer
//! and must treat `attributes` as sparse and `fields` as a tagged variant -
//! no attribute key is guaranteed to be present.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::UrgencyTier;

/// Attributes recovered from a template's example text.
///
/// Keys are camelCase-normalized placeholder names. A key is present only
/// when extraction succeeded; absence is the expected steady state for any
/// placeholder the example does not instantiate. The ordered map keeps
/// serialization byte-stable across runs.
pub type ExtractedAttributes = BTreeMap<String, String>;

/// Subsystem family used to select the category-specific field variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFamily {
    /// People-centric subsystems (HR, payroll).
    Hr,
    /// Spend-centric subsystems (expenses, procurement, travel).
    Expense,
    /// Everything else; carries no derived fields.
    General,
}

/// Category-specific derived fields.
///
/// Exactly one variant is populated per record, selected by the record's
/// category family. Fields for other families are absent rather than
/// null-filled, so a consumer can never mistake a filler value for data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum CategoryFields {
    /// Spend requests: who is being paid, how much, and when it was bought.
    Expense {
        vendor: String,
        amount: Decimal,
        purchase_date: NaiveDate,
    },
    /// People requests: who is affected and what is changing.
    Hr {
        employee: String,
        field_name: String,
        changes: String,
    },
    /// No family-specific fields.
    General,
}

impl CategoryFields {
    /// The family this variant belongs to.
    pub fn family(&self) -> CategoryFamily {
        match self {
            Self::Expense { .. } => CategoryFamily::Expense,
            Self::Hr { .. } => CategoryFamily::Hr,
            Self::General => CategoryFamily::General,
        }
    }
}

/// The canonical, UI-ready representation of one approval request.
///
/// Created once per catalog entry at generation time and treated as
/// immutable by all downstream consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApprovalRequest {
    /// Stable identifier derived from the entry's 1-based catalog position.
    pub id: String,

    /// Display subject; the entry's example text unless the category family
    /// defines a canonical subject template.
    pub subject: String,

    /// Display category, e.g. "Approvals - Human Resources".
    pub category: String,

    /// Computed due date; absent when the urgency tier carries no offset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,

    /// Urgency tier the action type was classified into.
    pub urgency: UrgencyTier,

    /// Attributes recovered from the example text (sparse).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: ExtractedAttributes,

    /// Category-specific derived fields.
    pub fields: CategoryFields,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_family() {
        let fields = CategoryFields::Hr {
            employee: "Maria Garcia".into(),
            field_name: "salary".into(),
            changes: "$95,000".into(),
        };
        assert_eq!(fields.family(), CategoryFamily::Hr);
        assert_eq!(CategoryFields::General.family(), CategoryFamily::General);
    }

    #[test]
    fn test_record_serialization_shape() {
        let record = ApprovalRequest {
            id: "req-0001".into(),
            subject: "Archive #general-archive".into(),
            category: "Approvals - Chat".into(),
            due_date: None,
            urgency: UrgencyTier::None,
            attributes: ExtractedAttributes::new(),
            fields: CategoryFields::General,
        };
        let json = serde_json::to_value(&record).unwrap();
        // Absent due date and empty attributes are omitted, never null-filled.
        assert!(json.get("due_date").is_none());
        assert!(json.get("attributes").is_none());
        assert_eq!(json["fields"]["family"], "general");
    }

    #[test]
    fn test_expense_variant_serialization() {
        let fields = CategoryFields::Expense {
            vendor: "Staples".into(),
            amount: Decimal::new(240000, 2),
            purchase_date: NaiveDate::from_ymd_opt(2025, 6, 12).unwrap(),
        };
        let json = serde_json::to_value(&fields).unwrap();
        assert_eq!(json["family"], "expense");
        assert_eq!(json["vendor"], "Staples");
        assert_eq!(json["purchase_date"], "2025-06-12");
    }
}
