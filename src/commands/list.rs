use crate::core::{context::AppContext, error::Result};

/// Prints every known repository short name, one per line.
///
/// This feeds shell completion: completion scripts call it to obtain the
/// candidate list for the positional argument.
pub fn execute_list(ctx: &AppContext) -> Result<()> {
    for name in ctx.names() {
        println!("{name}");
    }
    Ok(())
}
