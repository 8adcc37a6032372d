//! Command handlers - one module per CLI command.
//!
//! Handlers follow a common pattern: an `execute` function taking the
//! [`CliContext`](crate::bootstrap::CliContext) (for commands that talk to
//! a server) plus parsed arguments, returning `Result<(), CliError>`.
//! User-facing output goes through `println!`; structured logging stays on
//! the server side.

pub mod add;
pub mod browse;
pub mod list;
pub mod serve;
pub mod show;
pub mod stats;
