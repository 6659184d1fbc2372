//! Extraction engine: pre-check plus pattern rules.
//!
//! Total over all input: malformed or non-matching text yields an empty set,
//! never an error. False positives (a markup-shaped return that is not a
//! reusable component) and false negatives (exotic declaration styles, files
//! with no indicator substring) are accepted.

use crate::extraction::patterns::PATTERN_RULES;
use crate::filters;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

/// Substrings whose presence marks a file as worth the full rule pass.
const COMPONENT_INDICATORS: [&str; 5] = ["react", "React", "jsx", "createElement", "export"];

/// A return (or arrow body) that opens a markup-style tag.
static MARKUP_RETURN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:\breturn\b|=>)\s*\(?\s*<[A-Za-z>]").expect("invalid markup regex"));

/// Extract the set of component-like declaration names from one file's text.
///
/// Names are unique per file regardless of how many rules match them, start
/// with an uppercase letter, are longer than one character, and are not
/// exact members of the rejected-name table.
pub fn extract_component_names(content: &str) -> BTreeSet<String> {
    if !looks_like_component_source(content) {
        return BTreeSet::new();
    }

    let mut names = BTreeSet::new();
    for rule in PATTERN_RULES.iter() {
        for caps in rule.pattern.captures_iter(content) {
            let name = &caps[1];
            if name.len() > 1 && !filters::is_rejected_name(name) {
                names.insert(name.to_string());
            }
        }
    }
    names
}

/// Cheap rejection pass so the rule set only runs over plausible files.
fn looks_like_component_source(content: &str) -> bool {
    COMPONENT_INDICATORS
        .iter()
        .any(|indicator| content.contains(indicator))
        || MARKUP_RETURN.is_match(content)
}
