//! Core library entry for the `unbundle` CLI.
//!
//! Rebuilds an approximation of a site's original source tree from the
//! source maps of its compiled bundles, then writes placeholder modules for
//! relative imports the rebuilt tree cannot satisfy.

pub mod acquire;
pub mod adapters;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod decompile;
pub mod error;
pub mod placeholders;
pub mod ports;

pub use error::{Error, Result};

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing or command execution fails.
pub fn run<I, T>(args: I) -> std::result::Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(&cli.command)
}
