//! Urgency classification of action types.
//!
//! Membership is a static, exhaustive classification of every known action
//! type; the lists are explicit and mutually exclusive. Unknown action
//! types classify as `Standard` by design - new backend actions should
//! render with a reasonable due date rather than fail.

use std::collections::HashMap;

use approval_types::UrgencyTier;

/// Action types due the next business day.
const IMMEDIATE: &[&str] = &[
    "hr.terminate-employee",
    "security.revoke-access",
    "payroll.stop-payment",
    "hr.report-incident",
];

/// Action types due within three business days.
const SHORT: &[&str] = &[
    "hr.hire-employee",
    "hr.update-employee-record",
    "payroll.adjust-salary",
    "expenses.reimburse-over-limit",
    "travel.approve-trip",
];

/// Action types due within five business days. Listing them is redundant
/// with the default but keeps the classification exhaustive and auditable.
const STANDARD: &[&str] = &[
    "procurement.purchase-order",
    "scheduling.swap-shift",
    "expenses.reimburse",
    "travel.book-accommodation",
    "hr.grant-leave",
];

/// Action types with no meaningful urgency.
const NONE: &[&str] = &[
    "records.edit-profile",
    "records.update-directory",
    "chat.archive-channel",
    "chat.export-transcript",
];

/// Static action-type to urgency-tier lookup.
///
/// Built once at startup and passed by reference into the pure scheduling
/// functions, so the engine stays testable with alternate classifications.
pub struct UrgencyClassifier {
    tiers: HashMap<String, UrgencyTier>,
}

impl UrgencyClassifier {
    /// The builtin classification of every known action type.
    pub fn builtin() -> Self {
        Self::from_memberships(IMMEDIATE, SHORT, STANDARD, NONE)
    }

    /// Build a classifier from explicit per-tier membership lists.
    pub fn from_memberships(
        immediate: &[&str],
        short: &[&str],
        standard: &[&str],
        none: &[&str],
    ) -> Self {
        let mut tiers = HashMap::new();
        for (list, tier) in [
            (immediate, UrgencyTier::Immediate),
            (short, UrgencyTier::Short),
            (standard, UrgencyTier::Standard),
            (none, UrgencyTier::None),
        ] {
            for action_type in list {
                let previous = tiers.insert(action_type.to_string(), tier);
                debug_assert!(
                    previous.is_none(),
                    "action type {action_type} listed in more than one tier"
                );
            }
        }
        Self { tiers }
    }

    /// Classify an action type. Total: unknown types yield `Standard`.
    pub fn classify(&self, action_type: &str) -> UrgencyTier {
        self.tiers
            .get(action_type)
            .copied()
            .unwrap_or(UrgencyTier::Standard)
    }
}
