use crate::core::{
    cache::CacheStore,
    config::Config,
    error::Result,
    output::{print_info, print_success},
};

/// Forces a rescan of every configured root path and rebuilds the cache.
pub fn execute_refresh(config: &Config) -> Result<()> {
    print_info("Refreshing repository cache...");

    let store = CacheStore::open()?;
    let (repos, scan_failure) = store.list(&config.paths, true);
    if let Some(e) = scan_failure {
        log::warn!("some configured paths could not be scanned: {e}");
    }

    print_success(&format!(
        "Cache refreshed successfully. Found {} repositories.",
        repos.len()
    ));
    Ok(())
}
