//! Placeholder lexicon and extraction rules.
//!
//! The lexicon is a fixed dictionary mapping placeholder names to a
//! [`PlaceholderKind`]. Each kind owns an ordered set of extraction rules
//! applied against the example text; the first rule that produces a
//! non-empty match wins. The dictionary is large because each backend
//! subsystem names its placeholders slightly differently ("impacted
//! employee" vs "impacted person" vs "candidate").
//!
//! Rules are deliberately template-specific pattern matchers, not a general
//! parser: they are reliable for text shaped like the catalog's documented
//! examples and return absent rather than guessing anywhere else. Every
//! rule is a pure function of the example text and never fails.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

/// Action verbs that lead a request sentence ("Hire Sarah Mitchell...").
/// Shared by the person-name rules for anchoring and for cleanup.
const ACTION_VERBS: &str =
    "Hire|Onboard|Promote|Terminate|Offboard|Update|Grant|Revoke|Approve|Reinstate|Transfer|Reimburse|Swap|Assign";

// ============================================================================
// Pattern bank
// ============================================================================

/// Capitalized multi-word sequence immediately following an action verb.
static VERB_LED_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?:{ACTION_VERBS})\s+((?:[A-Z][a-z]+)(?:\s+[A-Z][a-z]+)+)"
    ))
    .unwrap()
});

/// Leading action verb, for cleaning the first split segment.
static LEADING_VERB_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"^(?:{ACTION_VERBS})\s+")).unwrap());

/// Result of the split fallback must still look like a person name.
static NAME_SHAPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][a-z]+(?:\s+[A-Z][a-z]+)+$").unwrap());

/// Capitalized multi-word sequence after a directional preposition.
static PREPOSITION_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:to|for|by|with)\s+((?:[A-Z][a-z]+)(?:\s+[A-Z][a-z]+)+)").unwrap()
});

/// First contiguous digit run.
static FIRST_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

/// Dollar sign followed by digits, commas, and an optional decimal part.
static CURRENCY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\s?\d[\d,]*(?:\.\d+)?").unwrap());

/// ISO, prose, and slash date forms.
static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b\d{4}-\d{2}-\d{2}\b|\b(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\.?\s+\d{1,2}(?:,?\s+\d{4})?\b|\b\d{1,2}/\d{1,2}/\d{2,4}\b",
    )
    .unwrap()
});

/// First parenthesized group.
static PAREN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(([^()]*)\)").unwrap());

/// Hyphen separating the two halves of a range, surrounded by whitespace.
static RANGE_SPLIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+[-\u{2013}]\s+").unwrap());

/// A following `Label:` token, bounding a labeled value capture.
static NEXT_LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s[A-Z][A-Za-z ]{0,40}:").unwrap());

/// Double-quoted string.
static QUOTED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#""([^"]+)""#).unwrap());

/// Capitalized organization name after a sourcing preposition.
static VENDOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:from|at|with)\s+([A-Z][\w&.'-]*(?:\s+[A-Z][\w&.'-]*)*)").unwrap()
});

/// Lowercase object noun between the leading verb and a preposition
/// ("Update salary for ..." captures "salary").
static VERB_OBJECT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z][a-z]+\s+([a-z]+(?:\s+[a-z]+)?)\s+(?:for|to|of|in|on)\b").unwrap()
});

// ============================================================================
// Kinds
// ============================================================================

/// Which part of a hyphenated range a placeholder resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangePart {
    Whole,
    Start,
    End,
}

/// Extraction semantics of a placeholder name.
///
/// Each kind dispatches to an ordered rule chain; the first rule producing
/// a non-empty value wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceholderKind {
    /// Person acted upon: verb-led name, then split-and-clean fallback.
    Person,
    /// Person receiving something: preposition-led name, then verb-led.
    Recipient,
    /// First contiguous digit run.
    Number,
    /// `$` amount with commas and optional decimals.
    Currency,
    /// First date-shaped token (ISO, prose, or slash form).
    Date,
    /// Hyphenated pair inside a parenthetical.
    DateRange(RangePart),
    /// Contents of the first parenthesized group.
    Parenthetical,
    /// Fixed comma-separated segment of the first parenthesized group.
    ParentheticalSegment(usize),
    /// `Label: value` prose, captured up to the next label or end of text.
    Labeled(&'static str),
    /// Double-quoted string, then parenthetical fallback.
    Quoted,
    /// Organization name after "from"/"at"/"with", then quoted fallback.
    Vendor,
    /// Lowercase object noun between the leading verb and a preposition.
    VerbObject,
}

impl PlaceholderKind {
    /// Apply this kind's rules in priority order. Returns `None` when every
    /// rule fails; never panics on any input.
    pub fn extract(&self, example: &str) -> Option<String> {
        match self {
            Self::Person => verb_led_name(example).or_else(|| split_and_clean(example)),
            Self::Recipient => preposition_name(example).or_else(|| verb_led_name(example)),
            Self::Number => first_number(example),
            Self::Currency => currency_amount(example),
            Self::Date => date_token(example),
            Self::DateRange(part) => paren_range(example, *part),
            Self::Parenthetical => paren_group(example),
            Self::ParentheticalSegment(index) => paren_segment(example, *index),
            Self::Labeled(label) => labeled_value(example, label),
            Self::Quoted => quoted_string(example).or_else(|| paren_group(example)),
            Self::Vendor => vendor_name(example).or_else(|| quoted_string(example)),
            Self::VerbObject => verb_object(example),
        }
    }
}

// ============================================================================
// Rules
// ============================================================================

fn verb_led_name(example: &str) -> Option<String> {
    VERB_LED_NAME_RE
        .captures(example)
        .map(|caps| caps[1].to_string())
}

/// Fallback person rule: cut the example at the earliest of `'s`, ` for `,
/// ` to `, clean a leading action verb off the segment, and accept the
/// result only if it still looks like a name. Anything else is absent
/// rather than a guess.
fn split_and_clean(example: &str) -> Option<String> {
    let cut = ["'s", " for ", " to "]
        .iter()
        .filter_map(|token| example.find(token))
        .min()
        .unwrap_or(example.len());
    let segment = example[..cut].trim();
    let cleaned = LEADING_VERB_RE.replace(segment, "");
    let cleaned = cleaned.trim();
    if NAME_SHAPE_RE.is_match(cleaned) {
        Some(cleaned.to_string())
    } else {
        None
    }
}

fn preposition_name(example: &str) -> Option<String> {
    PREPOSITION_NAME_RE
        .captures(example)
        .map(|caps| caps[1].to_string())
}

fn first_number(example: &str) -> Option<String> {
    FIRST_NUMBER_RE
        .find(example)
        .map(|m| m.as_str().to_string())
}

fn currency_amount(example: &str) -> Option<String> {
    CURRENCY_RE
        .find(example)
        .map(|m| m.as_str().trim_end_matches(',').to_string())
}

fn date_token(example: &str) -> Option<String> {
    DATE_RE.find(example).map(|m| m.as_str().to_string())
}

fn paren_group(example: &str) -> Option<String> {
    let caps = PAREN_RE.captures(example)?;
    let group = caps[1].trim();
    if group.is_empty() {
        None
    } else {
        Some(group.to_string())
    }
}

fn paren_segment(example: &str, index: usize) -> Option<String> {
    let group = paren_group(example)?;
    let segment = group.split(',').map(str::trim).nth(index)?;
    if segment.is_empty() {
        None
    } else {
        Some(segment.to_string())
    }
}

/// Find the first parenthetical holding a hyphen-separated pair and return
/// the requested part. Prefers a whitespace-surrounded hyphen so that ISO
/// dates inside the range survive; falls back to a lone hyphen.
fn paren_range(example: &str, part: RangePart) -> Option<String> {
    for caps in PAREN_RE.captures_iter(example) {
        let group = caps[1].trim();
        let (start, end) = if let Some(m) = RANGE_SPLIT_RE.find(group) {
            (&group[..m.start()], &group[m.end()..])
        } else if group.matches('-').count() == 1 {
            group.split_once('-')?
        } else {
            continue;
        };
        let (start, end) = (start.trim(), end.trim());
        if start.is_empty() || end.is_empty() {
            continue;
        }
        return match part {
            RangePart::Whole => Some(group.to_string()),
            RangePart::Start => Some(start.to_string()),
            RangePart::End => Some(end.to_string()),
        };
    }
    None
}

/// Case-insensitive `Label: value` capture, bounded by the next
/// `Label:`-shaped token or the end of the example.
fn labeled_value(example: &str, label: &str) -> Option<String> {
    let label_re = Regex::new(&format!(r"(?i)\b{}\s*:\s*", regex::escape(label))).ok()?;
    let found = label_re.find(example)?;
    let rest = &example[found.end()..];
    let end = NEXT_LABEL_RE
        .find(rest)
        .map(|m| m.start())
        .unwrap_or(rest.len());
    let value = rest[..end].trim().trim_end_matches('.').trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn quoted_string(example: &str) -> Option<String> {
    QUOTED_RE.captures(example).map(|caps| caps[1].to_string())
}

fn vendor_name(example: &str) -> Option<String> {
    VENDOR_RE
        .captures(example)
        .map(|caps| caps[1].trim_end_matches(['.', ',']).to_string())
}

fn verb_object(example: &str) -> Option<String> {
    VERB_OBJECT_RE
        .captures(example)
        .map(|caps| caps[1].to_string())
}

// ============================================================================
// Lexicon
// ============================================================================

/// Fixed dictionary of known placeholder names.
///
/// Built once at startup and passed by reference into extraction, so the
/// engine stays testable with alternate dictionaries. Lookup is by exact
/// name match against the trimmed placeholder token.
pub struct PlaceholderLexicon {
    kinds: HashMap<&'static str, PlaceholderKind>,
}

impl PlaceholderLexicon {
    /// The builtin dictionary covering the placeholder vocabulary used
    /// across the backend subsystems.
    pub fn builtin() -> Self {
        use PlaceholderKind::*;

        let mut kinds = HashMap::new();

        // People acted upon.
        for name in [
            "impacted employee",
            "impacted person",
            "employee",
            "person",
            "candidate",
            "new hire",
            "team member",
        ] {
            kinds.insert(name, Person);
        }

        // People on the receiving end.
        for name in ["recipient", "assignee", "manager", "approver", "delegate"] {
            kinds.insert(name, Recipient);
        }

        // Money.
        for name in ["amount", "budget", "cost", "total", "price", "salary", "limit"] {
            kinds.insert(name, Currency);
        }

        // Plain numbers.
        for name in ["number", "count", "quantity", "days", "hours", "headcount"] {
            kinds.insert(name, Number);
        }

        // Dates and ranges.
        for name in ["date", "purchase date", "due date"] {
            kinds.insert(name, Date);
        }
        kinds.insert("period", DateRange(RangePart::Whole));
        kinds.insert("date range", DateRange(RangePart::Whole));
        kinds.insert("start date", DateRange(RangePart::Start));
        kinds.insert("end date", DateRange(RangePart::End));

        // Parenthetical detail ("Staff Engineer (Platform, L6)").
        kinds.insert("role", Parenthetical);
        kinds.insert("department", ParentheticalSegment(0));
        kinds.insert("level", ParentheticalSegment(1));

        // Labeled prose ("Reason: ...", "Effective date: ...").
        kinds.insert("reason", Labeled("Reason"));
        kinds.insert("effective date", Labeled("Effective date"));
        kinds.insert("new value", Labeled("New value"));
        kinds.insert("changes", Labeled("Changes"));
        kinds.insert("justification", Labeled("Justification"));
        kinds.insert("notes", Labeled("Notes"));
        kinds.insert("status", Labeled("Status"));

        // Named things, usually quoted in prose.
        for name in [
            "record name",
            "object",
            "entity",
            "record",
            "document",
            "channel",
            "report",
            "policy",
        ] {
            kinds.insert(name, Quoted);
        }

        // Organizations.
        for name in ["vendor", "supplier", "merchant"] {
            kinds.insert(name, Vendor);
        }

        // Object nouns ("Update salary for ...").
        for name in ["field", "item", "action"] {
            kinds.insert(name, VerbObject);
        }

        Self { kinds }
    }

    /// Look up the kind for a placeholder name. `None` for names outside
    /// the dictionary; the extractor skips those tokens.
    pub fn kind_of(&self, name: &str) -> Option<PlaceholderKind> {
        self.kinds.get(name).copied()
    }

    /// Number of known placeholder names.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// True when the dictionary is empty (never for the builtin lexicon).
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verb_led_person() {
        assert_eq!(
            PlaceholderKind::Person.extract("Terminate John Smith effective immediately"),
            Some("John Smith".to_string())
        );
        assert_eq!(
            PlaceholderKind::Person.extract("Update Maria Garcia's salary"),
            Some("Maria Garcia".to_string())
        );
    }

    #[test]
    fn test_person_split_fallback() {
        // No leading action verb; the possessive split still finds the name.
        assert_eq!(
            PlaceholderKind::Person.extract("Maria Garcia's annual compensation review"),
            Some("Maria Garcia".to_string())
        );
        // Fallback refuses results that do not look like a name.
        assert_eq!(
            PlaceholderKind::Person.extract("Swap shift for coverage"),
            None
        );
    }

    #[test]
    fn test_recipient_after_preposition() {
        assert_eq!(
            PlaceholderKind::Recipient.extract("Transfer $100 to Michael Johnson"),
            Some("Michael Johnson".to_string())
        );
    }

    #[test]
    fn test_currency() {
        assert_eq!(
            PlaceholderKind::Currency.extract("Reimburse $1,249.99 for travel"),
            Some("$1,249.99".to_string())
        );
        assert_eq!(PlaceholderKind::Currency.extract("no money here"), None);
    }

    #[test]
    fn test_number() {
        assert_eq!(
            PlaceholderKind::Number.extract("Grant 12 days of leave"),
            Some("12".to_string())
        );
    }

    #[test]
    fn test_date_forms() {
        assert_eq!(
            PlaceholderKind::Date.extract("ordered on 2025-06-12"),
            Some("2025-06-12".to_string())
        );
        assert_eq!(
            PlaceholderKind::Date.extract("starting Jan 5, 2026"),
            Some("Jan 5, 2026".to_string())
        );
    }

    #[test]
    fn test_parenthetical_segments() {
        let example = "Hire Sarah Mitchell as Staff Engineer (Platform, L6)";
        assert_eq!(
            PlaceholderKind::Parenthetical.extract(example),
            Some("Platform, L6".to_string())
        );
        assert_eq!(
            PlaceholderKind::ParentheticalSegment(0).extract(example),
            Some("Platform".to_string())
        );
        assert_eq!(
            PlaceholderKind::ParentheticalSegment(1).extract(example),
            Some("L6".to_string())
        );
        assert_eq!(PlaceholderKind::ParentheticalSegment(2).extract(example), None);
    }

    #[test]
    fn test_labeled_value_bounded_by_next_label() {
        let example = "Update Maria Garcia's salary. Reason: Annual merit increase. Effective date: 2025-07-01";
        assert_eq!(
            PlaceholderKind::Labeled("Reason").extract(example),
            Some("Annual merit increase".to_string())
        );
        assert_eq!(
            PlaceholderKind::Labeled("Effective date").extract(example),
            Some("2025-07-01".to_string())
        );
        assert_eq!(PlaceholderKind::Labeled("Status").extract(example), None);
    }

    #[test]
    fn test_date_range_parts() {
        let example = "Approve leave for Dana Lee (2025-08-04 - 2025-08-15)";
        assert_eq!(
            PlaceholderKind::DateRange(RangePart::Whole).extract(example),
            Some("2025-08-04 - 2025-08-15".to_string())
        );
        assert_eq!(
            PlaceholderKind::DateRange(RangePart::Start).extract(example),
            Some("2025-08-04".to_string())
        );
        assert_eq!(
            PlaceholderKind::DateRange(RangePart::End).extract(example),
            Some("2025-08-15".to_string())
        );
    }

    #[test]
    fn test_date_range_prose_hyphen() {
        let example = "Shift swap (Mon - Wed)";
        assert_eq!(
            PlaceholderKind::DateRange(RangePart::Start).extract(example),
            Some("Mon".to_string())
        );
    }

    #[test]
    fn test_quoted_and_vendor() {
        assert_eq!(
            PlaceholderKind::Quoted.extract(r##"Archive channel "#general-2024""##),
            Some("#general-2024".to_string())
        );
        assert_eq!(
            PlaceholderKind::Vendor.extract("Purchase order from Acme Office Supplies for $2,400"),
            Some("Acme Office Supplies".to_string())
        );
    }

    #[test]
    fn test_verb_object() {
        assert_eq!(
            PlaceholderKind::VerbObject.extract("Update salary for Maria Garcia"),
            Some("salary".to_string())
        );
    }

    #[test]
    fn test_rules_total_on_junk() {
        use PlaceholderKind::*;
        let junk = ["", "   ", "((((", "$", "(-)", "::::", "\u{fffd}\u{fffd}"];
        let kinds = [
            Person,
            Recipient,
            Number,
            Currency,
            Date,
            DateRange(RangePart::Whole),
            Parenthetical,
            ParentheticalSegment(3),
            Labeled("Reason"),
            Quoted,
            Vendor,
            VerbObject,
        ];
        for example in junk {
            for kind in kinds {
                // Must never panic; absent is always acceptable.
                let _ = kind.extract(example);
            }
        }
    }

    #[test]
    fn test_builtin_lexicon_lookup() {
        let lexicon = PlaceholderLexicon::builtin();
        assert!(lexicon.len() > 40);
        assert_eq!(lexicon.kind_of("impacted employee"), Some(PlaceholderKind::Person));
        assert_eq!(lexicon.kind_of("amount"), Some(PlaceholderKind::Currency));
        assert_eq!(lexicon.kind_of("not a placeholder"), None);
    }
}
