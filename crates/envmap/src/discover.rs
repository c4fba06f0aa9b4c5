//! Discovery of env files by filename hint.
//!
//! Resolution walks a directory tree recursively and collects every file
//! whose name starts with the hint (so a hint of `.env` matches `.env`,
//! `.env.local`, `.env.production`). Walk order is filesystem-dependent, so
//! candidates are sorted by path before the first one is chosen; resolution
//! is therefore deterministic even when several files match.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{EnvError, Result};

/// The default filename hint used when none is given.
pub const DEFAULT_HINT: &str = ".env";

/// Find all files under `root` whose file name starts with `hint`.
///
/// Returns the matches sorted lexicographically by path; the list may be
/// empty. Directories are never candidates, and unreadable subtrees are
/// skipped rather than treated as errors.
pub fn discover_all(root: &Path, hint: &str) -> Vec<PathBuf> {
    let mut matches: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.file_name()
                .to_str()
                .is_some_and(|name| name.starts_with(hint))
        })
        .map(|e| e.into_path())
        .collect();
    matches.sort();
    matches
}

/// Resolve a filename hint to a single env file path under `root`.
///
/// When more than one file matches, the lexicographically smallest path
/// wins and a warning is logged naming the choice.
///
/// # Errors
///
/// Returns [`EnvError::NotFound`] if no file under `root` matches.
pub fn discover(root: &Path, hint: &str) -> Result<PathBuf> {
    let matches = discover_all(root, hint);
    tracing::debug!(
        hint,
        root = %root.display(),
        candidates = matches.len(),
        "env file discovery"
    );

    if matches.len() > 1 {
        tracing::warn!(
            hint,
            candidates = matches.len(),
            chosen = %matches[0].display(),
            "multiple env files match hint; picking first by path order"
        );
    }

    matches.into_iter().next().ok_or_else(|| EnvError::NotFound {
        hint: hint.to_string(),
        root: root.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_file_in_root() {
        let dir = tempfile::tempdir().unwrap();
        let env = dir.path().join(".env");
        std::fs::write(&env, "A=1\n").unwrap();

        let found = discover(dir.path(), ".env").unwrap();
        assert_eq!(found, env);
    }

    #[test]
    fn finds_file_in_subdirectory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("config").join("deep");
        std::fs::create_dir_all(&nested).unwrap();
        let env = nested.join(".env");
        std::fs::write(&env, "A=1\n").unwrap();

        let found = discover(dir.path(), ".env").unwrap();
        assert_eq!(found, env);
    }

    #[test]
    fn prefix_match_covers_suffixed_names() {
        let dir = tempfile::tempdir().unwrap();
        let env = dir.path().join(".env.production");
        std::fs::write(&env, "A=1\n").unwrap();

        let found = discover(dir.path(), ".env").unwrap();
        assert_eq!(found, env);
    }

    #[test]
    fn no_match_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("settings.txt"), "A=1\n").unwrap();

        let err = discover(dir.path(), ".env").unwrap_err();
        match err {
            EnvError::NotFound { hint, root } => {
                assert_eq!(hint, ".env");
                assert_eq!(root, dir.path());
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn multiple_matches_pick_smallest_path() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".env.local"), "A=local\n").unwrap();
        std::fs::write(dir.path().join(".env"), "A=base\n").unwrap();

        let found = discover(dir.path(), ".env").unwrap();
        assert_eq!(found, dir.path().join(".env"));

        let all = discover_all(dir.path(), ".env");
        assert_eq!(
            all,
            vec![dir.path().join(".env"), dir.path().join(".env.local")]
        );
    }

    #[test]
    fn matching_directory_is_not_a_candidate() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(".env.d")).unwrap();
        let env = dir.path().join(".env.d").join(".env");
        std::fs::write(&env, "A=1\n").unwrap();

        let found = discover(dir.path(), ".env").unwrap();
        assert_eq!(found, env);
    }
}
