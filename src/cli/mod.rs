//! CLI command handlers.
//!
//! Testable command handlers invoked by main.rs; each handler implements the
//! business logic for one subcommand.

mod generate;
mod output;

pub use generate::{run_generate, GenerateConfig};
pub use output::{write_output, OutputTarget};
