//! Source acquisition: local directories and remote clones

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use git2::build::RepoBuilder;
use git2::{FetchOptions, RemoteCallbacks};
use tempfile::TempDir;
use thiserror::Error;

/// Failure to turn the input argument into a walkable directory.
#[derive(Debug, Error)]
pub enum AcquireError {
    #[error("could not create temporary directory: {0}")]
    TempDir(#[from] io::Error),
    #[error("{0}")]
    Clone(#[from] git2::Error),
}

/// A resolved repository root: a directory the caller named, or a fresh
/// clone in a temporary directory.
///
/// A `Cloned` source owns its [`TempDir`]; dropping the source removes the
/// clone, so cleanup happens on every exit path once acquisition has
/// succeeded.
pub enum Source {
    Local(PathBuf),
    Cloned(TempDir),
}

impl Source {
    /// Resolve the CLI input: an existing local directory is used in
    /// place, anything else is treated as a clone URL.
    pub fn resolve(input: &str) -> Result<Self, AcquireError> {
        let path = Path::new(input);
        if path.is_dir() {
            Ok(Source::Local(path.to_path_buf()))
        } else {
            Self::clone(input)
        }
    }

    /// Clone `url` into a temporary directory, streaming transfer progress
    /// to stdout.
    fn clone(url: &str) -> Result<Self, AcquireError> {
        let dir = TempDir::with_prefix("repo")?;

        let mut callbacks = RemoteCallbacks::new();
        callbacks.transfer_progress(|progress| {
            print!(
                "\rReceiving objects: {}/{}",
                progress.received_objects(),
                progress.total_objects()
            );
            let _ = io::stdout().flush();
            true
        });
        let mut fetch = FetchOptions::new();
        fetch.remote_callbacks(callbacks);

        RepoBuilder::new()
            .fetch_options(fetch)
            .clone(url, dir.path())?;
        println!();

        Ok(Source::Cloned(dir))
    }

    /// The directory to walk.
    pub fn root(&self) -> &Path {
        match self {
            Source::Local(path) => path,
            Source::Cloned(dir) => dir.path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::process::Command;
    use tempfile::TempDir;

    fn create_origin_repo() -> TempDir {
        let dir = TempDir::new().unwrap();

        Command::new("git")
            .args(["init"])
            .current_dir(dir.path())
            .output()
            .unwrap();

        Command::new("git")
            .args(["config", "user.email", "test@test.com"])
            .current_dir(dir.path())
            .output()
            .unwrap();

        Command::new("git")
            .args(["config", "user.name", "Test"])
            .current_dir(dir.path())
            .output()
            .unwrap();

        fs::write(dir.path().join("tracked.rs"), "fn main() {}\n").unwrap();

        Command::new("git")
            .args(["add", "tracked.rs"])
            .current_dir(dir.path())
            .output()
            .unwrap();

        Command::new("git")
            .args(["commit", "-m", "initial"])
            .current_dir(dir.path())
            .output()
            .unwrap();

        dir
    }

    #[test]
    fn test_existing_directory_resolves_in_place() {
        let dir = TempDir::new().unwrap();
        let source = Source::resolve(dir.path().to_str().unwrap()).unwrap();
        assert!(matches!(source, Source::Local(_)));
        assert_eq!(source.root(), dir.path());
    }

    #[test]
    fn test_nonexistent_input_fails_to_clone() {
        assert!(Source::resolve("definitely/not/a/repo").is_err());
    }

    #[test]
    fn test_clone_from_file_url() {
        let origin = create_origin_repo();
        let url = format!("file://{}", origin.path().display());

        let source = Source::resolve(&url).unwrap();
        assert!(matches!(source, Source::Cloned(_)));
        assert!(source.root().join("tracked.rs").exists());
    }

    #[test]
    fn test_cloned_source_is_removed_on_drop() {
        let origin = create_origin_repo();
        let url = format!("file://{}", origin.path().display());

        let source = Source::resolve(&url).unwrap();
        let root = source.root().to_path_buf();
        assert!(root.exists());

        drop(source);
        assert!(!root.exists());
    }
}
