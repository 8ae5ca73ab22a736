//! repo2md - Flatten a repository into a single Markdown document

pub mod filter;
pub mod git;
pub mod language;
pub mod output;
pub mod tree;

pub use filter::IgnoreRules;
pub use git::{AcquireError, Source};
pub use language::fence_tag;
pub use output::{OUTPUT_FILE, render_contents, render_document, render_structure};
pub use tree::{DirectoryMap, TreeWalker};
