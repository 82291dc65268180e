//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`RepoSwitcherError`] which covers every failure mode of
//! repo-switcher. It uses `thiserror` for ergonomic error definitions and
//! includes specialized constructors for the common failure scenarios.
//!
//! # Error Categories
//! - **Lookup**: repository short name not known
//! - **Configuration**: unreadable or unparseable config file (fatal at startup)
//! - **Scanning**: a root path whose directory walk could not start
//! - **Cache**: read/parse/write failures on the cache file (all recoverable)

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for repo-switcher
#[derive(Error, Debug)]
pub enum RepoSwitcherError {
    #[error("Repository '{name}' not found")]
    RepoNotFound { name: String },

    // Configuration errors
    #[error("Failed to read config file '{path}': {source}")]
    ConfigReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    // Scanner errors
    #[error("Failed to walk '{path}': {source}")]
    ScanFailed {
        path: PathBuf,
        source: walkdir::Error,
    },

    // Cache errors
    #[error("Failed to create cache directory '{path}': {source}")]
    CacheDirectoryCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read cache file '{path}': {source}")]
    CacheReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse cache file '{path}': {source}")]
    CacheParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to write cache file '{path}': {source}")]
    CacheWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using RepoSwitcherError
pub type Result<T> = std::result::Result<T, RepoSwitcherError>;

impl RepoSwitcherError {
    /// Create a repository not found error
    pub fn repo_not_found(name: impl Into<String>) -> Self {
        Self::RepoNotFound { name: name.into() }
    }

    /// Create a config read failed error
    pub fn config_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a config parse failed error
    pub fn config_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a scan failed error for a root path whose walk could not start
    pub fn scan_failed(path: impl Into<PathBuf>, source: walkdir::Error) -> Self {
        Self::ScanFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a cache directory creation failed error
    pub fn cache_directory_creation_failed(
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::CacheDirectoryCreationFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a cache read failed error
    pub fn cache_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CacheReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a cache parse failed error
    pub fn cache_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::CacheParseFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a cache write failed error
    pub fn cache_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CacheWriteFailed {
            path: path.into(),
            source,
        }
    }
}
