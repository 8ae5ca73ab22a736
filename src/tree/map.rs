//! Directory-to-children mapping built by the walk

use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Map key for the repository root.
pub const ROOT_KEY: &str = ".";

/// Marker suffix distinguishing directory entries from file entries.
const DIR_SUFFIX: char = '/';

/// Mapping from each directory's relative path (`"."` for the root) to its
/// immediate children.
///
/// Directory entries carry a trailing `/`; file entries are plain names.
/// Paths use forward slashes on every platform. After
/// [`DirectoryMap::sort_children`] runs, subdirectories precede files in
/// every child list and each group is in lexicographic order.
#[derive(Debug, Default)]
pub struct DirectoryMap {
    entries: BTreeMap<String, Vec<String>>,
}

impl DirectoryMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a visited directory under its own key, so directories with
    /// no surviving children still appear with an empty child list.
    pub fn visit(&mut self, dir: &str) {
        self.entries.entry(dir.to_string()).or_default();
    }

    /// Record a subdirectory as a child of `parent`.
    pub fn record_dir(&mut self, parent: &str, name: &str) {
        self.entries
            .entry(parent.to_string())
            .or_default()
            .push(format!("{}{}", name, DIR_SUFFIX));
    }

    /// Record a file as a child of `parent`.
    pub fn record_file(&mut self, parent: &str, name: &str) {
        self.entries
            .entry(parent.to_string())
            .or_default()
            .push(name.to_string());
    }

    /// The child entries of a directory, or an empty slice for an unknown
    /// key.
    pub fn children(&self, dir: &str) -> &[String] {
        self.entries.get(dir).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every directory key in the map.
    pub fn directories(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Sort every child list: subdirectories first, then files, each group
    /// in lexicographic order (entries compare as stored, marker included).
    pub fn sort_children(&mut self) {
        for children in self.entries.values_mut() {
            children.sort_by(|a, b| entry_order(a, b));
        }
    }

    /// Relative paths of every file, in the order the structure listing
    /// presents them (pre-order, subdirectories before sibling files).
    pub fn file_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        self.collect_files(ROOT_KEY, &mut paths);
        paths
    }

    fn collect_files(&self, dir: &str, paths: &mut Vec<String>) {
        for entry in self.children(dir) {
            match entry.strip_suffix(DIR_SUFFIX) {
                Some(name) => self.collect_files(&join_key(dir, name), paths),
                None => paths.push(join_key(dir, entry)),
            }
        }
    }
}

/// Join a directory key and a child name into the child's own key.
pub(crate) fn join_key(dir: &str, name: &str) -> String {
    if dir == ROOT_KEY {
        name.to_string()
    } else {
        format!("{}/{}", dir, name)
    }
}

/// Directory entries before file entries, then lexicographic order.
fn entry_order(a: &str, b: &str) -> Ordering {
    match (a.ends_with(DIR_SUFFIX), b.ends_with(DIR_SUFFIX)) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a.cmp(b),
    }
}
