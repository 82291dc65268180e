//! Repo Switcher - jump to a local git repository by short name.
//!
//! This library provides the core functionality for repo-switcher: a
//! depth-bounded scanner that discovers `.git` markers below configured root
//! paths, and a cache manager that persists scan results with a 24-hour TTL
//! and a fingerprint of the configured paths.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module:
//! - Repository discovery ([`core::scanner`])
//! - Cache persistence and validity ([`core::cache`])
//! - Configuration loading ([`core::config`])
//! - Startup context for command handlers ([`core::context`])
//! - Error handling and result types

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    hash_paths,
    print_error,
    print_info,
    print_success,

    AppContext,

    CacheStore,
    Config,
    RepoCache,

    // Error handling
    RepoSwitcherError,
    Result,
};
