//! Lazy traversal of a source tree.
//!
//! Produces candidate files one at a time; memory held at any instant is
//! bounded by directory depth, not by the size of the tree. Ignored
//! directories are pruned before descent, so a `node_modules` with a million
//! entries costs nothing.

use crate::filters;
use log::debug;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

pub struct FileWalker {
    root: PathBuf,
}

impl FileWalker {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Walk the tree lazily, yielding files with recognized extensions.
    ///
    /// Each call starts a fresh walk. Entries that cannot be read (permission
    /// denied, removed mid-walk) are skipped, not errors; this is a
    /// best-effort walk, not an atomic snapshot. Yield order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = PathBuf> + '_ {
        WalkDir::new(&self.root)
            .into_iter()
            .filter_entry(|entry| !is_pruned_dir(entry))
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(err) => {
                    debug!("skipping unreadable entry: {err}");
                    None
                }
            })
            .filter(|entry| {
                entry.file_type().is_file() && filters::has_recognized_extension(entry.path())
            })
            .map(DirEntry::into_path)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Prune ignored directories by exact basename. The root itself is never
/// pruned: scanning `./build` explicitly should still work.
fn is_pruned_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .map(filters::is_ignored_dir)
            .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, rel: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    fn walk_names(root: &Path) -> BTreeSet<String> {
        FileWalker::new(root)
            .iter()
            .map(|p| {
                p.strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    #[test]
    fn yields_only_recognized_extensions() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "App.tsx");
        touch(tmp.path(), "index.js");
        touch(tmp.path(), "styles.css");
        touch(tmp.path(), "notes.txt");

        let found = walk_names(tmp.path());
        assert_eq!(
            found,
            ["App.tsx", "index.js"]
                .into_iter()
                .map(String::from)
                .collect()
        );
    }

    #[test]
    fn prunes_ignored_directories() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "src/App.tsx");
        touch(tmp.path(), "node_modules/lib/index.js");
        touch(tmp.path(), "dist/bundle.js");
        touch(tmp.path(), "src/node_modules/nested.tsx");

        let found = walk_names(tmp.path());
        assert_eq!(found, ["src/App.tsx"].into_iter().map(String::from).collect());
    }

    #[test]
    fn does_not_prune_the_root_itself() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "build/Main.jsx");

        // Scanning the ignored-named directory directly still yields files.
        let found = walk_names(&tmp.path().join("build"));
        assert_eq!(found, ["Main.jsx"].into_iter().map(String::from).collect());
    }

    #[test]
    fn iter_is_restartable() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "a.ts");
        touch(tmp.path(), "b.tsx");

        let walker = FileWalker::new(tmp.path());
        let first: BTreeSet<_> = walker.iter().collect();
        let second: BTreeSet<_> = walker.iter().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn descends_into_ordinary_subdirectories() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "src/components/deep/nested/Widget.tsx");

        let found = walk_names(tmp.path());
        assert_eq!(found.len(), 1);
    }
}
