//! Startup context shared by the command handlers.
//!
//! The repository list is resolved once when the process starts and carried
//! in an [`AppContext`] that the command layer owns and passes by reference,
//! instead of living in process-wide mutable state.

use crate::core::cache::CacheStore;
use crate::core::config::Config;
use crate::core::error::Result;
use std::collections::HashMap;
use std::path::Path;

/// Repositories known at startup, addressable by short name.
pub struct AppContext {
    repos: Vec<String>,
    repos_by_name: HashMap<String, String>,
}

impl AppContext {
    /// Resolves the repository list through the cache and builds the
    /// name lookup table.
    pub fn load(config: &Config) -> Result<Self> {
        let store = CacheStore::open()?;
        let (repos, scan_failure) = store.list(&config.paths, false);
        if let Some(e) = scan_failure {
            log::warn!("repository list may be incomplete: {e}");
        }
        Ok(Self::from_repos(repos))
    }

    /// Builds the context from an explicit repository list.
    ///
    /// Short names are directory base names. When two repositories share a
    /// base name, the later one in the list wins. The lookup table is an
    /// insertion-order overwrite, deliberately.
    pub fn from_repos(repos: Vec<String>) -> Self {
        let mut repos_by_name = HashMap::new();
        for repo in &repos {
            if let Some(name) = Path::new(repo).file_name() {
                repos_by_name.insert(name.to_string_lossy().into_owned(), repo.clone());
            }
        }
        Self {
            repos,
            repos_by_name,
        }
    }

    /// Looks up the absolute path for a repository short name.
    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.repos_by_name.get(name).map(String::as_str)
    }

    /// Known short names, sorted for stable output.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.repos_by_name.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// All discovered repository paths in traversal order.
    pub fn repos(&self) -> &[String] {
        &self.repos
    }
}
