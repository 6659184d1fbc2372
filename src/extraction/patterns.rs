//! Structural pattern rules for component declarations.
//!
//! Each rule recognizes one declaration shape and captures exactly one
//! identifier, constrained to start with an uppercase letter. The rules are
//! independent: they all run over the same text, in no priority order, and
//! the caller deduplicates with set semantics. This is pattern matching,
//! not parsing; a rule never inspects whether the matched body actually
//! renders anything.

use once_cell::sync::Lazy;
use regex::Regex;

/// A single declaration shape. `pattern` carries exactly one capture group,
/// the declaration name.
pub struct PatternRule {
    pub name: &'static str,
    pub pattern: Regex,
}

impl PatternRule {
    fn new(name: &'static str, pattern: &str) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).expect("invalid pattern rule"),
        }
    }
}

/// Initializer tail for arrow-function bindings: an optional type
/// annotation, up to two `memo`/`forwardRef` wrapper calls, then an arrow.
/// Annotations stop at statement boundaries so a match cannot leak into the
/// next declaration.
const ARROW_INIT: &str = r"=\s*(?:(?:React\s*\.\s*)?(?:memo|forwardRef)\s*\(\s*){0,2}(?:async\s+)?(?:\([^)]*\)|[A-Za-z_$][A-Za-z0-9_$]*)\s*(?::\s*[^=;{\n]*)?=>";

const UPPER_IDENT: &str = r"([A-Z][A-Za-z0-9_]*)";

pub static PATTERN_RULES: Lazy<Vec<PatternRule>> = Lazy::new(|| {
    vec![
        PatternRule::new(
            "function-declaration",
            &format!(r"\bfunction\s+{UPPER_IDENT}\s*(?:<[^>\n]*>)?\s*\("),
        ),
        PatternRule::new(
            "arrow-binding",
            &format!(r"\b(?:const|let|var)\s+{UPPER_IDENT}\s*(?::\s*[^=;\n]*?)?{ARROW_INIT}"),
        ),
        PatternRule::new(
            "class-component",
            &format!(
                r"\bclass\s+{UPPER_IDENT}(?:<[^>\n]*>)?\s+extends\s+(?:React\s*\.\s*)?(?:Component|PureComponent)\b"
            ),
        ),
        PatternRule::new(
            "export-default-function",
            &format!(r"\bexport\s+default\s+function\s+{UPPER_IDENT}\s*(?:<[^>\n]*>)?\s*\("),
        ),
        PatternRule::new(
            "export-arrow-binding",
            &format!(
                r"\bexport\s+(?:const|let|var)\s+{UPPER_IDENT}\s*(?::\s*[^=;\n]*?)?{ARROW_INIT}"
            ),
        ),
        PatternRule::new(
            "export-function",
            &format!(r"\bexport\s+function\s+{UPPER_IDENT}\s*(?:<[^>\n]*>)?\s*\("),
        ),
    ]
});
