//! CLI command handlers, one file per subcommand.

mod completions;
mod output;
mod parse;
mod resolve;
mod split;

pub use completions::run_completions;
pub use parse::run_parse;
pub use resolve::run_resolve;
pub use split::run_split;
