//! Subsystem to display-category mapping.
//!
//! Known subsystems map to a curated display name; anything else falls
//! back to `"Approvals - {subsystem}"` verbatim, preserving the original
//! identifier rather than discarding information. The mapper also assigns
//! each subsystem to a category family, which the synthesizer uses to pick
//! the category-specific field variant.

use std::collections::HashMap;

use approval_types::CategoryFamily;

/// Known subsystems: display name and family.
const SUBSYSTEMS: &[(&str, &str, CategoryFamily)] = &[
    ("hr", "Human Resources", CategoryFamily::Hr),
    ("payroll", "Payroll", CategoryFamily::Hr),
    ("scheduling", "Scheduling", CategoryFamily::General),
    ("procurement", "Procurement", CategoryFamily::Expense),
    ("travel", "Travel", CategoryFamily::Expense),
    ("expenses", "Expenses", CategoryFamily::Expense),
    ("records", "Records", CategoryFamily::General),
    ("chat", "Chat", CategoryFamily::General),
    ("security", "Security", CategoryFamily::General),
];

/// Static subsystem lookup, built once and shared by reference.
pub struct CategoryMapper {
    display_names: HashMap<String, String>,
    families: HashMap<String, CategoryFamily>,
}

impl CategoryMapper {
    /// The builtin table of known subsystems.
    pub fn builtin() -> Self {
        let mut display_names = HashMap::new();
        let mut families = HashMap::new();
        for (subsystem, display, family) in SUBSYSTEMS {
            display_names.insert(subsystem.to_string(), display.to_string());
            families.insert(subsystem.to_string(), *family);
        }
        Self {
            display_names,
            families,
        }
    }

    /// Map a subsystem to its display category.
    ///
    /// Unknown subsystems yield `"Approvals - {subsystem}"` with the
    /// identifier preserved verbatim.
    pub fn map(&self, subsystem: &str) -> String {
        match self.display_names.get(subsystem) {
            Some(display) => format!("Approvals - {display}"),
            None => format!("Approvals - {subsystem}"),
        }
    }

    /// Family for a subsystem; unknown subsystems are `General`.
    pub fn family(&self, subsystem: &str) -> CategoryFamily {
        self.families
            .get(subsystem)
            .copied()
            .unwrap_or(CategoryFamily::General)
    }
}
