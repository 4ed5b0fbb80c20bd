//! Due-date resolution.
//!
//! Composes the urgency classifier and the business calendar: an action
//! type's tier decides how many business days the requester has, and the
//! calendar walks that offset forward from the caller-supplied clock.

use chrono::{DateTime, Utc};

use crate::calendar::add_business_days;
use crate::urgency::UrgencyClassifier;

/// Resolve the due date for an action type as of `now`.
///
/// Returns `None` when the action type's tier carries no due date (record
/// edits, chat housekeeping). Deterministic given `now`; cannot fail
/// because classification is total.
pub fn resolve_due_date(
    classifier: &UrgencyClassifier,
    action_type: &str,
    now: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    let tier = classifier.classify(action_type);
    tier.business_day_offset()
        .map(|offset| add_business_days(now, offset))
}
