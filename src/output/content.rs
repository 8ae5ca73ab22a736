//! File content rendering

use std::fs;
use std::io;
use std::path::Path;

use crate::language::fence_tag;
use crate::tree::DirectoryMap;

/// Render every included file as a `Filepath:` heading plus a fenced block.
///
/// Files are visited in the structure listing's order, so the set of
/// `Filepath:` headers matches the listing's file leaves exactly. Bytes are
/// decoded with lossy UTF-8 conversion; a file that cannot be read aborts
/// the render.
pub fn render_contents(root: &Path, map: &DirectoryMap) -> io::Result<String> {
    let mut out = String::new();
    for rel in map.file_paths() {
        let bytes = fs::read(root.join(&rel))?;
        let text = String::from_utf8_lossy(&bytes);

        out.push_str("Filepath: /");
        out.push_str(&rel);
        out.push('\n');
        out.push_str("```");
        if let Some(tag) = fence_tag(Path::new(&rel)) {
            out.push_str(tag);
        }
        out.push('\n');
        out.push_str(&text);
        out.push_str("\n```\n\n");
    }
    Ok(out)
}
