//! Structure listing rendering

use crate::tree::{DirectoryMap, ROOT_KEY, join_key};

/// Render the walked tree as an indented Markdown bullet list.
///
/// One line per entry, four spaces of indentation per depth level,
/// directory entries keeping their trailing `/`. Deterministic for a given
/// map.
pub fn render_structure(map: &DirectoryMap) -> String {
    let mut out = String::new();
    render_dir(map, ROOT_KEY, 0, &mut out);
    out
}

/// Emit one directory's child lines, recursing into subdirectories.
fn render_dir(map: &DirectoryMap, dir: &str, depth: usize, out: &mut String) {
    for entry in map.children(dir) {
        out.push_str(&"    ".repeat(depth));
        out.push_str("- ");
        out.push_str(entry);
        out.push('\n');

        if let Some(name) = entry.strip_suffix('/') {
            render_dir(map, &join_key(dir, name), depth + 1, out);
        }
    }
}
