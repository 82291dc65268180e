//! Command handlers: thin glue between the CLI surface and the core.

pub mod completions;
pub mod list;
pub mod refresh;
pub mod switch;

pub use completions::execute_completions;
pub use list::execute_list;
pub use refresh::execute_refresh;
pub use switch::execute_switch;
