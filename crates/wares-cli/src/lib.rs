//! Command-line adapter for the wares catalog.
//!
//! The `wares` binary either runs the catalog server (`serve`) or drives a
//! running server over HTTP (`list`, `show`, `add`, `stats`, `browse`)
//! through the `wares-client` gateway. Handlers hold no transport details;
//! they receive a [`CliContext`] from the bootstrap module and print their
//! results.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by the binary entry point in main.rs
use dotenvy as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;
pub mod utils;

// What main and the handler tests import
pub use bootstrap::{CliContext, bootstrap};
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
