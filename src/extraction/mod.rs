//! Heuristic extraction of component declaration names from raw text.

pub mod extractor;
pub mod patterns;

pub use extractor::extract_component_names;
pub use patterns::{PatternRule, PATTERN_RULES};
