//! Depth-bounded filesystem scan for git repositories.
//!
//! Walks each configured root path looking for directories literally named
//! `.git` and records their parents as repository roots. The walk is bounded:
//! any entry whose path relative to the root contains more than
//! [`MAX_RELATIVE_DEPTH`] separators prunes its whole subtree. Results come
//! back in traversal order, deterministic for a fixed tree, never sorted.

use crate::core::dirs::expand_home;
use crate::core::error::{RepoSwitcherError, Result};
use std::path::Path;
use walkdir::WalkDir;

/// Maximum number of path separators, relative to a root, at which a `.git`
/// marker is still eligible. Repositories up to 3 levels below a root are
/// found; deeper subtrees are pruned entirely.
const MAX_RELATIVE_DEPTH: usize = 3;

/// Scans every root path for git repositories.
///
/// Individual entry errors (permission denied, broken symlinks) are skipped
/// silently. A root whose walk cannot start at all is reported through the
/// second tuple element, but the remaining roots are still scanned and
/// everything found so far is preserved. When several roots fail, the last
/// failure is the one reported.
pub fn scan(paths: &[String]) -> (Vec<String>, Option<RepoSwitcherError>) {
    let mut repos = Vec::new();
    let mut failure = None;

    for path in paths {
        let root = expand_home(path);
        if let Err(e) = scan_root(&root, &mut repos) {
            log::warn!("scan of '{}' failed: {e}", root.display());
            failure = Some(e);
        }
    }

    (repos, failure)
}

fn scan_root(root: &Path, repos: &mut Vec<String>) -> Result<()> {
    let mut walker = WalkDir::new(root).into_iter();

    while let Some(entry) = walker.next() {
        let entry = match entry {
            Ok(entry) => entry,
            // Depth 0 means the walk of the root itself could not start.
            Err(e) if e.depth() == 0 => {
                return Err(RepoSwitcherError::scan_failed(root, e));
            }
            Err(_) => continue,
        };

        // walkdir depth counts components below the root, so an entry at
        // depth d sits behind d - 1 separators in its relative path.
        if entry.depth() > MAX_RELATIVE_DEPTH + 1 {
            walker.skip_current_dir();
            continue;
        }

        if entry.file_type().is_dir() && entry.file_name() == ".git" {
            if let Some(parent) = entry.path().parent() {
                repos.push(parent.to_string_lossy().into_owned());
            }
            // Stop at the .git directory itself. Sibling subtrees stay
            // eligible, so a working tree nested inside another repository
            // is still found as its own entry.
            walker.skip_current_dir();
        }
    }

    Ok(())
}
