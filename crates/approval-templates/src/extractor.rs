//! Placeholder attribute extraction.
//!
//! Scans a details template for `{placeholder}` tokens and recovers a value
//! for each from the entry's example text, using the lexicon's per-kind
//! rules. Best-effort by contract: unresolvable placeholders are simply
//! absent from the result, never an error and never a sentinel value.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use approval_types::ExtractedAttributes;

use crate::lexicon::PlaceholderLexicon;

/// Placeholder token syntax: literal text between braces.
static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{([^{}]+)\}").unwrap());

/// Extract attributes for every placeholder the template declares.
///
/// Tokens whose name is not in the lexicon, and tokens whose rules all fail
/// against the example, are omitted from the result. Calling this twice on
/// the same inputs yields the same map.
pub fn extract(
    lexicon: &PlaceholderLexicon,
    details_template: &str,
    example: &str,
) -> ExtractedAttributes {
    let mut attributes = ExtractedAttributes::new();

    for caps in PLACEHOLDER_RE.captures_iter(details_template) {
        let name = caps[1].trim();
        let Some(kind) = lexicon.kind_of(name) else {
            trace!(placeholder = name, "placeholder not in lexicon, skipping");
            continue;
        };
        match kind.extract(example) {
            Some(value) => {
                trace!(placeholder = name, value = %value, "placeholder resolved");
                attributes.insert(normalize_key(name), value);
            }
            None => {
                trace!(placeholder = name, "no extraction rule matched");
            }
        }
    }

    attributes
}

/// Normalize a placeholder name to a stable camelCase attribute key
/// ("impacted employee" becomes `impactedEmployee`).
pub fn normalize_key(name: &str) -> String {
    let mut key = String::with_capacity(name.len());
    for (index, word) in name.split_whitespace().enumerate() {
        let mut chars = word.chars();
        let Some(first) = chars.next() else {
            continue;
        };
        if index == 0 {
            key.extend(first.to_lowercase());
        } else {
            key.extend(first.to_uppercase());
        }
        key.extend(chars.flat_map(|c| c.to_lowercase()));
    }
    key
}
