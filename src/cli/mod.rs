//! CLI command handlers for CSAFAP.
//!
//! Each subcommand lives in its own module with a clap `Args` struct and an
//! `execute` method returning [`CliResult`].

pub mod add;
pub mod common;
pub mod config;
pub mod delete;
pub mod generate;
pub mod list;
pub mod slots;

// Re-export types used by main.rs and tests
pub use add::AddArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use delete::DeleteArgs;
pub use generate::GenerateArgs;
pub use list::ListArgs;
pub use slots::SlotsArgs;
