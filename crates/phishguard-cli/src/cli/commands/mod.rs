//! CLI command handlers. Each command is in its own file for clarity.

mod batch;
mod check;
mod completions;
mod features;
mod man;

pub use batch::run_batch;
pub use check::run_check;
pub use completions::run_completions;
pub use features::run_features;
pub use man::run_man;
