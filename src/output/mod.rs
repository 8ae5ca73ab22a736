//! Markdown document rendering
//!
//! Two renderers over the walked tree, the structure listing and the file
//! contents, concatenated under fixed headings by [`render_document`].

mod content;
mod structure;

pub use content::render_contents;
pub use structure::render_structure;

/// Fixed output filename, written in the current working directory.
pub const OUTPUT_FILE: &str = "repo_structure.md";

/// Join the rendered sections under the document headings.
pub fn render_document(structure: &str, content: &str) -> String {
    format!("# Code Structure\n\n{}\n# Code Content\n\n{}", structure, content)
}
