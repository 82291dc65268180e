//! Time- and configuration-bound persistence of scan results.
//!
//! A scan's output is stored wholesale in a single JSON file
//! (`repos-cache.json` in the application configuration directory) together
//! with the scan timestamp and a fingerprint of the root path list. A stored
//! record is served as long as it is younger than [`CACHE_TTL_HOURS`] and its
//! fingerprint still matches the configured paths; otherwise a fresh scan
//! replaces it. Overwriting is the only mutation. There is no partial
//! invalidation and no locking against concurrent processes.

use crate::core::dirs::get_config_directory;
use crate::core::error::{RepoSwitcherError, Result};
use crate::core::scanner;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::PathBuf;

const CACHE_TTL_HOURS: i64 = 24;
pub const CACHE_FILE_NAME: &str = "repos-cache.json";

/// A persisted scan: discovered repository roots, when they were captured,
/// and the fingerprint of the root path list that produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoCache {
    pub repos: Vec<String>,
    pub timestamp: DateTime<Utc>,
    pub paths_hash: String,
}

impl RepoCache {
    /// A record is valid iff it is younger than the TTL and was produced by
    /// the same ordered path list. Repository paths are not re-checked on
    /// disk.
    pub fn is_valid(&self, paths: &[String]) -> bool {
        if Utc::now() - self.timestamp > Duration::hours(CACHE_TTL_HOURS) {
            log::debug!("cache expired");
            return false;
        }

        if self.paths_hash != hash_paths(paths) {
            log::debug!("paths configuration changed");
            return false;
        }

        true
    }
}

/// Fingerprint of the ordered root path list, used to detect configuration
/// changes. SHA-256 over the `|`-joined list, lowercase hex; the empty list
/// hashes the empty string.
pub fn hash_paths(paths: &[String]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(paths.join("|").as_bytes());
    hex::encode(hasher.finalize())
}

/// Handle on the single cache file.
pub struct CacheStore {
    cache_file: PathBuf,
}

impl CacheStore {
    /// Opens the store at its well-known location under the application
    /// configuration directory.
    pub fn open() -> Result<Self> {
        let config_dir = get_config_directory()?;
        Ok(Self {
            cache_file: config_dir.join(CACHE_FILE_NAME),
        })
    }

    /// Opens the store at an explicit file path.
    pub fn at(cache_file: PathBuf) -> Self {
        Self { cache_file }
    }

    /// Returns the repository list, serving the persisted record when it is
    /// valid and rescanning otherwise.
    ///
    /// Any read or parse problem with the cache file counts as a miss. After
    /// a rescan the new record is persisted best-effort: a write failure is
    /// logged and the freshly scanned list is returned regardless. A root
    /// whose walk failed outright comes back through the second tuple
    /// element, same as [`scanner::scan`]. The repositories found on the
    /// remaining roots are still returned, but the incomplete result is not
    /// persisted, so the next invocation scans again.
    pub fn list(
        &self,
        paths: &[String],
        force_refresh: bool,
    ) -> (Vec<String>, Option<RepoSwitcherError>) {
        if !force_refresh {
            match self.read() {
                Ok(cache) if cache.is_valid(paths) => {
                    log::debug!("using cached repository list");
                    return (cache.repos, None);
                }
                Ok(_) => {}
                Err(e) => log::debug!("failed to read cache: {e}"),
            }
        }

        log::debug!("scanning configured paths for git repositories");
        let (repos, scan_failure) = scanner::scan(paths);

        if scan_failure.is_some() {
            return (repos, scan_failure);
        }

        if let Err(e) = self.write(&repos, paths) {
            log::warn!("failed to write cache: {e}");
        }
        (repos, None)
    }

    pub fn read(&self) -> Result<RepoCache> {
        let content = fs::read_to_string(&self.cache_file)
            .map_err(|e| RepoSwitcherError::cache_read_failed(&self.cache_file, e))?;
        serde_json::from_str(&content)
            .map_err(|e| RepoSwitcherError::cache_parse_failed(&self.cache_file, e))
    }

    /// Overwrites the persisted record with a freshly captured one.
    pub fn write(&self, repos: &[String], paths: &[String]) -> Result<()> {
        let cache = RepoCache {
            repos: repos.to_vec(),
            timestamp: Utc::now(),
            paths_hash: hash_paths(paths),
        };

        let json = serde_json::to_string_pretty(&cache)?;

        if let Some(parent) = self.cache_file.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| RepoSwitcherError::cache_directory_creation_failed(parent, e))?;
        }

        fs::write(&self.cache_file, json)
            .map_err(|e| RepoSwitcherError::cache_write_failed(&self.cache_file, e))
    }
}
