//! Fenced-block language tags derived from file extensions

use std::path::Path;

/// Derive the fenced-block language tag for a file.
///
/// The tag is the substring after the final `.` of the file name, as
/// reported by [`Path::extension`]. The edge cases are pinned as follows:
///
/// - a multi-dot name takes only the last segment (`a.b.go` tags as `go`)
/// - a name with no dot has no tag (`Makefile`)
/// - a leading dot with no further extension is a hidden file name, not an
///   extension (`.env` has no tag)
/// - an empty extension is treated as none (`name.` has no tag)
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use repo2md::language::fence_tag;
///
/// assert_eq!(fence_tag(Path::new("src/main.rs")), Some("rs"));
/// assert_eq!(fence_tag(Path::new("archive.tar.gz")), Some("gz"));
/// assert_eq!(fence_tag(Path::new("Makefile")), None);
/// assert_eq!(fence_tag(Path::new(".env")), None);
/// ```
pub fn fence_tag(path: &Path) -> Option<&str> {
    match path.extension()?.to_str()? {
        "" => None,
        ext => Some(ext),
    }
}
