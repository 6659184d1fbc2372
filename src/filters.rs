//! Static membership tables consulted by the walker and the extractor.
//!
//! All three sets are fixed at process start. Configurability belongs to the
//! CLI layer, not here.

use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::path::Path;

/// File extensions eligible for extraction.
pub static RECOGNIZED_EXTENSIONS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ["js", "jsx", "ts", "tsx"].into_iter().collect());

/// Directory basenames that are never descended into.
pub static IGNORED_DIRS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "node_modules",
        ".git",
        "dist",
        "build",
        "coverage",
        ".next",
        ".cache",
        "out",
    ]
    .into_iter()
    .collect()
});

/// Generic identifiers that are never reported even when a pattern rule
/// matches them. Membership is exact and case-sensitive.
pub static REJECTED_NAMES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "React",
        "Component",
        "PureComponent",
        "Fragment",
        "Props",
        "State",
        "Default",
    ]
    .into_iter()
    .collect()
});

/// Check if a path carries one of the recognized source extensions.
pub fn has_recognized_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| RECOGNIZED_EXTENSIONS.contains(ext))
        .unwrap_or(false)
}

pub fn is_ignored_dir(name: &str) -> bool {
    IGNORED_DIRS.contains(name)
}

pub fn is_rejected_name(name: &str) -> bool {
    REJECTED_NAMES.contains(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_source_extensions() {
        assert!(has_recognized_extension(Path::new("App.tsx")));
        assert!(has_recognized_extension(Path::new("src/index.js")));
        assert!(has_recognized_extension(Path::new("util.ts")));
        assert!(has_recognized_extension(Path::new("Button.jsx")));
    }

    #[test]
    fn rejects_other_extensions() {
        assert!(!has_recognized_extension(Path::new("styles.css")));
        assert!(!has_recognized_extension(Path::new("README.md")));
        assert!(!has_recognized_extension(Path::new("Makefile")));
        assert!(!has_recognized_extension(Path::new("index.js.map")));
    }

    #[test]
    fn ignored_dirs_match_basename_only() {
        assert!(is_ignored_dir("node_modules"));
        assert!(is_ignored_dir(".git"));
        assert!(!is_ignored_dir("my_node_modules"));
        assert!(!is_ignored_dir("source"));
    }

    #[test]
    fn rejected_names_are_exact_matches() {
        assert!(is_rejected_name("Component"));
        assert!(is_rejected_name("Fragment"));
        // Substring or case variants are not filtered.
        assert!(!is_rejected_name("MyComponent"));
        assert!(!is_rejected_name("component"));
        assert!(!is_rejected_name("UtilHelper"));
    }
}
