//! Core functionality for repo-switcher.
//!
//! This module provides the building blocks for repository discovery,
//! cache management, configuration, and error handling.

pub mod cache;
pub mod config;
pub mod context;
pub mod dirs;
pub mod error;
pub mod output;
pub mod scanner;

// === Error handling ===
// Core error type and result alias used throughout the application
pub use error::{RepoSwitcherError, Result};

// === Configuration ===
// Root paths searched for repositories
pub use config::Config;

// === Repository cache ===
// Persisted scan results with TTL and configuration fingerprint
pub use cache::{hash_paths, CacheStore, RepoCache};

// === Startup context ===
// Name-to-path lookup built once and passed into command handlers
pub use context::AppContext;

// === Output formatting ===
// Unified output formatting for consistent CLI presentation
pub use output::{print_error, print_info, print_success};
