//! Per-family field derivation.
//!
//! Each category family registers one deriver that turns the extracted
//! attributes into the family's field variant. Adding a category is a data
//! change (register a new deriver), not a control-flow change.
//!
//! Every default a deriver applies for a missing attribute is a clearly
//! synthetic placeholder - a generic label or currency zero - so that a
//! defaulted field can never be mistaken for extracted data.

use std::collections::HashMap;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

use approval_templates::CatalogEntry;
use approval_types::{CategoryFamily, CategoryFields, ExtractedAttributes};

/// Outcome of family derivation.
pub struct DerivedFields {
    /// Canonical subject rendered by the family, if it defines one;
    /// `None` means the record keeps the entry's example text verbatim.
    pub subject: Option<String>,
    /// The populated field variant.
    pub fields: CategoryFields,
}

/// A pure "derive fields" strategy for one category family.
pub trait FieldDeriver: Send + Sync {
    fn derive(
        &self,
        entry: &CatalogEntry,
        attributes: &ExtractedAttributes,
        now: DateTime<Utc>,
    ) -> DerivedFields;
}

/// Registry mapping category families to their derivers.
pub struct FamilyRegistry {
    derivers: HashMap<CategoryFamily, Box<dyn FieldDeriver>>,
}

impl FamilyRegistry {
    /// Registry with the builtin HR, Expense, and General derivers.
    pub fn builtin() -> Self {
        let mut registry = Self {
            derivers: HashMap::new(),
        };
        registry.register(CategoryFamily::Hr, Box::new(HrDeriver));
        registry.register(CategoryFamily::Expense, Box::new(ExpenseDeriver));
        registry.register(CategoryFamily::General, Box::new(GeneralDeriver));
        registry
    }

    /// Register (or replace) the deriver for a family.
    pub fn register(&mut self, family: CategoryFamily, deriver: Box<dyn FieldDeriver>) {
        self.derivers.insert(family, deriver);
    }

    /// Derive fields for a family. A family with no registered deriver
    /// degrades to the General shape rather than failing.
    pub fn derive(
        &self,
        family: CategoryFamily,
        entry: &CatalogEntry,
        attributes: &ExtractedAttributes,
        now: DateTime<Utc>,
    ) -> DerivedFields {
        match self.derivers.get(&family) {
            Some(deriver) => deriver.derive(entry, attributes, now),
            None => DerivedFields {
                subject: None,
                fields: CategoryFields::General,
            },
        }
    }
}

/// First attribute present among `keys`.
fn first_of<'a>(attributes: &'a ExtractedAttributes, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .find_map(|key| attributes.get(*key).map(String::as_str))
}

// ============================================================================
// HR family
// ============================================================================

/// People requests. Subject stays verbatim; defaults are a generic
/// employee label, "record" for the field name, and "Pending review" for
/// the change description.
struct HrDeriver;

impl FieldDeriver for HrDeriver {
    fn derive(
        &self,
        _entry: &CatalogEntry,
        attributes: &ExtractedAttributes,
        _now: DateTime<Utc>,
    ) -> DerivedFields {
        let employee = first_of(
            attributes,
            &[
                "impactedEmployee",
                "impactedPerson",
                "employee",
                "person",
                "candidate",
                "newHire",
            ],
        )
        .unwrap_or("Unassigned employee");
        let field_name = first_of(attributes, &["field", "fieldName"]).unwrap_or("record");
        let changes =
            first_of(attributes, &["newValue", "changes"]).unwrap_or("Pending review");

        DerivedFields {
            subject: None,
            fields: CategoryFields::Hr {
                employee: employee.to_string(),
                field_name: field_name.to_string(),
                changes: changes.to_string(),
            },
        }
    }
}

// ============================================================================
// Expense family
// ============================================================================

/// Spend requests. Defines the canonical subject template
/// `"{vendor} purchase for {amount}"`, rendered from the extracted
/// attributes (raw currency text when available, "$0" otherwise).
/// Defaults: "Unknown vendor", currency zero, and the as-of date.
struct ExpenseDeriver;

impl FieldDeriver for ExpenseDeriver {
    fn derive(
        &self,
        _entry: &CatalogEntry,
        attributes: &ExtractedAttributes,
        now: DateTime<Utc>,
    ) -> DerivedFields {
        let vendor = first_of(attributes, &["vendor", "supplier", "merchant"])
            .unwrap_or("Unknown vendor");
        let amount_text = first_of(attributes, &["amount", "cost", "total", "price"]);
        let amount = amount_text.map(parse_amount).unwrap_or(Decimal::ZERO);
        let purchase_date = first_of(attributes, &["purchaseDate", "date"])
            .and_then(parse_date)
            .unwrap_or_else(|| now.date_naive());

        DerivedFields {
            subject: Some(format!(
                "{vendor} purchase for {}",
                amount_text.unwrap_or("$0")
            )),
            fields: CategoryFields::Expense {
                vendor: vendor.to_string(),
                amount,
                purchase_date,
            },
        }
    }
}

/// Parse extracted currency text ("$1,249.99") into a decimal amount.
/// Unparseable text degrades to currency zero.
fn parse_amount(text: &str) -> Decimal {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    Decimal::from_str(&cleaned).unwrap_or(Decimal::ZERO)
}

/// Parse extracted date text in ISO or US slash form.
fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(text, "%m/%d/%Y"))
        .ok()
}

// ============================================================================
// General family
// ============================================================================

/// Everything else: no derived fields, subject stays verbatim.
struct GeneralDeriver;

impl FieldDeriver for GeneralDeriver {
    fn derive(
        &self,
        _entry: &CatalogEntry,
        _attributes: &ExtractedAttributes,
        _now: DateTime<Utc>,
    ) -> DerivedFields {
        DerivedFields {
            subject: None,
            fields: CategoryFields::General,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry() -> CatalogEntry {
        CatalogEntry {
            subsystem: "expenses".into(),
            action_type: "expenses.reimburse".into(),
            details_template: "Reimburse {amount} from {vendor}".into(),
            example: "Reimburse $1,249.99 from Acme Office Supplies".into(),
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 8, 4, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_expense_derivation() {
        let mut attributes = ExtractedAttributes::new();
        attributes.insert("amount".into(), "$1,249.99".into());
        attributes.insert("vendor".into(), "Acme Office Supplies".into());

        let registry = FamilyRegistry::builtin();
        let derived = registry.derive(CategoryFamily::Expense, &entry(), &attributes, now());

        assert_eq!(
            derived.subject.as_deref(),
            Some("Acme Office Supplies purchase for $1,249.99")
        );
        match derived.fields {
            CategoryFields::Expense {
                vendor,
                amount,
                purchase_date,
            } => {
                assert_eq!(vendor, "Acme Office Supplies");
                assert_eq!(amount, Decimal::from_str("1249.99").unwrap());
                assert_eq!(purchase_date, now().date_naive());
            }
            other => panic!("expected expense fields, got {other:?}"),
        }
    }

    #[test]
    fn test_expense_defaults_are_synthetic() {
        let registry = FamilyRegistry::builtin();
        let derived = registry.derive(
            CategoryFamily::Expense,
            &entry(),
            &ExtractedAttributes::new(),
            now(),
        );

        assert_eq!(derived.subject.as_deref(), Some("Unknown vendor purchase for $0"));
        match derived.fields {
            CategoryFields::Expense { vendor, amount, .. } => {
                assert_eq!(vendor, "Unknown vendor");
                assert_eq!(amount, Decimal::ZERO);
            }
            other => panic!("expected expense fields, got {other:?}"),
        }
    }

    #[test]
    fn test_hr_defaults_and_attribute_precedence() {
        let mut attributes = ExtractedAttributes::new();
        attributes.insert("impactedEmployee".into(), "Maria Garcia".into());
        attributes.insert("newValue".into(), "$95,000".into());

        let registry = FamilyRegistry::builtin();
        let derived = registry.derive(CategoryFamily::Hr, &entry(), &attributes, now());

        assert!(derived.subject.is_none());
        match derived.fields {
            CategoryFields::Hr {
                employee,
                field_name,
                changes,
            } => {
                assert_eq!(employee, "Maria Garcia");
                assert_eq!(field_name, "record");
                assert_eq!(changes, "$95,000");
            }
            other => panic!("expected hr fields, got {other:?}"),
        }
    }

    #[test]
    fn test_general_has_no_fields() {
        let registry = FamilyRegistry::builtin();
        let derived = registry.derive(
            CategoryFamily::General,
            &entry(),
            &ExtractedAttributes::new(),
            now(),
        );
        assert!(derived.subject.is_none());
        assert_eq!(derived.fields, CategoryFields::General);
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("$2,400"), Decimal::from_str("2400").unwrap());
        assert_eq!(parse_amount("garbage"), Decimal::ZERO);
    }
}
