use crate::core::{
    context::AppContext,
    error::{RepoSwitcherError, Result},
};

/// Resolves a repository short name and prints its absolute path.
///
/// The bare path goes to stdout so shell wrappers can `cd "$(repo-switcher
/// <name>)"`. An unknown name is an error the caller turns into a non-zero
/// exit.
pub fn execute_switch(ctx: &AppContext, name: &str) -> Result<()> {
    match ctx.resolve(name) {
        Some(path) => {
            println!("{path}");
            Ok(())
        }
        None => Err(RepoSwitcherError::repo_not_found(name)),
    }
}
