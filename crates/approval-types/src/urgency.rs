//! Urgency tiers and their business-day offsets.
//!
//! Every known action type belongs to exactly one tier; the tier decides how
//! many business days the requester has before the request is due. Action
//! types nobody has classified yet fall back to [`UrgencyTier::Standard`] so
//! that new backend actions render with a reasonable due date instead of
//! failing.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse classification of how quickly an action type must be addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyTier {
    /// Due the next business day (terminations, access revocations).
    Immediate,
    /// Due within three business days (hires, payroll adjustments).
    Short,
    /// Due within five business days. Default for unclassified action types.
    Standard,
    /// No due date applies (record edits, chat housekeeping).
    None,
}

impl UrgencyTier {
    /// Business-day offset used by the due-date resolver.
    ///
    /// `None` means no due date applies to this tier.
    pub fn business_day_offset(&self) -> Option<u32> {
        match self {
            Self::Immediate => Some(1),
            Self::Short => Some(3),
            Self::Standard => Some(5),
            Self::None => Option::None,
        }
    }

    /// Tier name for display.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Immediate => "immediate",
            Self::Short => "short",
            Self::Standard => "standard",
            Self::None => "none",
        }
    }
}

impl fmt::Display for UrgencyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets() {
        assert_eq!(UrgencyTier::Immediate.business_day_offset(), Some(1));
        assert_eq!(UrgencyTier::Short.business_day_offset(), Some(3));
        assert_eq!(UrgencyTier::Standard.business_day_offset(), Some(5));
        assert_eq!(UrgencyTier::None.business_day_offset(), Option::None);
    }

    #[test]
    fn test_display() {
        assert_eq!(UrgencyTier::Immediate.to_string(), "immediate");
        assert_eq!(UrgencyTier::None.to_string(), "none");
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&UrgencyTier::Short).unwrap();
        assert_eq!(json, "\"short\"");
        let tier: UrgencyTier = serde_json::from_str("\"none\"").unwrap();
        assert_eq!(tier, UrgencyTier::None);
    }
}
