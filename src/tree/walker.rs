//! Recursive repository walk that builds the directory map

use std::fs;
use std::io;
use std::path::Path;

use crate::filter::IgnoreRules;

use super::map::{DirectoryMap, ROOT_KEY, join_key};

/// Walks a repository root and records every non-ignored entry.
///
/// Directories matched by the rules are pruned whole: their subtrees are
/// never visited. Matched files are omitted and traversal continues with
/// their siblings.
pub struct TreeWalker {
    rules: IgnoreRules,
}

impl TreeWalker {
    pub fn new(rules: IgnoreRules) -> Self {
        Self { rules }
    }

    /// Walk `root` and return the directory map with sorted child lists.
    ///
    /// Filesystem errors abort the walk, except for entries that disappear
    /// mid-walk, which are skipped.
    pub fn walk(&self, root: &Path) -> io::Result<DirectoryMap> {
        let mut map = DirectoryMap::new();
        self.walk_dir(root, ROOT_KEY, &mut map)?;
        map.sort_children();
        Ok(map)
    }

    fn walk_dir(&self, dir: &Path, rel: &str, map: &mut DirectoryMap) -> io::Result<()> {
        map.visit(rel);

        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            // Removed between being recorded and being read; the root
            // itself must exist
            Err(e) if e.kind() == io::ErrorKind::NotFound && rel != ROOT_KEY => return Ok(()),
            Err(e) => return Err(e),
        };

        let mut entries = entries.collect::<io::Result<Vec<_>>>()?;
        entries.sort_by_key(|entry| entry.file_name());

        for entry in entries {
            let name = entry.file_name().to_string_lossy().into_owned();
            let rel_path = join_key(rel, &name);

            let file_type = match entry.file_type() {
                Ok(file_type) => file_type,
                Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
                Err(e) => return Err(e),
            };
            // Symlinks are skipped to prevent cycles
            if file_type.is_symlink() {
                continue;
            }

            if file_type.is_dir() {
                // A matching directory is pruned, never descended into
                if self.rules.matches(&rel_path, true) {
                    continue;
                }
                map.record_dir(rel, &name);
                self.walk_dir(&entry.path(), &rel_path, map)?;
            } else {
                if self.rules.matches(&rel_path, false) {
                    continue;
                }
                map.record_file(rel, &name);
            }
        }

        Ok(())
    }
}
