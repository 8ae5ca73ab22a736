//! Gitignore-style filtering for the repository walk

use std::fs;
use std::path::Path;

use ignore::gitignore::{Gitignore, GitignoreBuilder};

/// Version-control metadata directory, always excluded.
const GIT_DIR: &str = ".git";
/// Ignore file read from the repository root, always excluded itself.
pub const IGNORE_FILE: &str = ".gitignore";
/// License file, always excluded.
const LICENSE_FILE: &str = "LICENSE";

/// Compiled ignore rules for one run.
///
/// Holds the patterns loaded from the repository's ignore file, compiled
/// with standard `.gitignore` glob semantics (`*`, `**`, leading-`/`
/// anchoring, trailing-`/` directory-only patterns, `!` negation). The
/// `.git` directory, the ignore file itself, and `LICENSE` are excluded
/// regardless of what the loaded file contains.
pub struct IgnoreRules {
    matcher: Gitignore,
}

impl IgnoreRules {
    /// Load ignore rules from the ignore file at the repository root.
    ///
    /// Blank lines and lines starting with `#` are dropped before
    /// compilation. A missing file yields rules with only the hardcoded
    /// exclusions; an unreadable file logs a warning and does the same.
    pub fn load(root: &Path) -> Self {
        let path = root.join(IGNORE_FILE);
        if !path.exists() {
            return Self::compile(std::iter::empty::<&str>());
        }
        match fs::read_to_string(&path) {
            Ok(text) => Self::compile(
                text.lines()
                    .filter(|line| !line.is_empty() && !line.starts_with('#')),
            ),
            Err(e) => {
                eprintln!(
                    "repo2md: warning: could not read {}: {}",
                    path.display(),
                    e
                );
                Self::compile(std::iter::empty::<&str>())
            }
        }
    }

    /// Compile a pattern list into a matcher.
    pub fn compile<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = GitignoreBuilder::new("");
        for pattern in patterns {
            // Malformed patterns are dropped, not fatal
            let _ = builder.add_line(None, pattern.as_ref());
        }
        let matcher = builder.build().unwrap_or_else(|_| Gitignore::empty());
        Self { matcher }
    }

    /// Check whether a path relative to the repository root is excluded.
    ///
    /// `is_dir` distinguishes directory-only patterns like `target/`.
    pub fn matches(&self, relative_path: &str, is_dir: bool) -> bool {
        // The hardcoded exclusions match by basename at any depth, even
        // when no ignore file was loaded
        let name = relative_path
            .rsplit_once('/')
            .map_or(relative_path, |(_, name)| name);
        if name == GIT_DIR || name == IGNORE_FILE || name == LICENSE_FILE {
            return true;
        }
        self.matcher.matched(relative_path, is_dir).is_ignore()
    }
}
