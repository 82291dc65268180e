use crate::core::error::Result;
use std::path::PathBuf;

/// Returns the application configuration directory, honoring XDG on unixes.
///
/// Both the config file and the repository cache live here.
pub fn get_config_directory() -> Result<PathBuf> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| dirs::home_dir().unwrap_or_default().join(".config")),
        "macos" => dirs::home_dir()
            .unwrap_or_default()
            .join("Library/Application Support"),
        "windows" => dirs::config_dir().unwrap_or_default(),
        _ => dirs::config_dir().unwrap_or_default(),
    };

    Ok(base.join("repo-switcher"))
}

/// Expands a leading `~` or `~/` to the user's home directory.
///
/// Paths without the shorthand pass through unchanged.
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix('~') {
        if rest.is_empty() {
            return dirs::home_dir().unwrap_or_default();
        }
        if let Some(rest) = rest.strip_prefix('/') {
            return dirs::home_dir().unwrap_or_default().join(rest);
        }
    }
    PathBuf::from(path)
}
