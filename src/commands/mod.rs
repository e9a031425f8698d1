//! Command dispatch and handlers.

pub mod decompile;
pub mod fetch;
pub mod run;
pub mod stubs;

use std::path::Path;

use tracing::info;

use crate::cli::{Command, SourceArgs};
use crate::config::{self, Config};
use crate::context::ServiceContext;

/// Dispatch a parsed command to its handler using live adapters.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    let ctx = ServiceContext::live();
    dispatch_with_context(command, &ctx)
}

/// Dispatch a command with the given service context.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch_with_context(command: &Command, ctx: &ServiceContext) -> Result<(), String> {
    match command {
        Command::Run {
            sources,
            skip_download,
        } => run::run(ctx, sources, *skip_download),
        Command::Fetch { sources, dry_run } => fetch::run(ctx, sources, *dry_run),
        Command::Decompile { sources } => decompile::run(ctx, sources),
        Command::Stubs { sources } => stubs::run(ctx, sources),
    }
}

/// Loads each selected configuration record in order and hands it to `f`.
///
/// Records are processed one at a time; the first failure stops the run.
fn for_each_config<F>(ctx: &ServiceContext, sources: &SourceArgs, mut f: F) -> Result<(), String>
where
    F: FnMut(&Config) -> Result<(), String>,
{
    let files = config::discover(ctx.fs.as_ref(), &sources.sources_dir, &sources.sources)
        .map_err(|e| e.to_string())?;
    if files.is_empty() {
        info!(
            "No configuration records in {}",
            sources.sources_dir.display()
        );
    }

    for path in &files {
        let name = display_name(path);
        info!("Processing config: {name}");
        let config = Config::load(ctx.fs.as_ref(), path).map_err(|e| e.to_string())?;
        f(&config).map_err(|e| format!("{name}: {e}"))?;
        info!("Finished: {name}");
    }
    Ok(())
}

fn display_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.display().to_string(),
    }
}

/// Builds the single-threaded runtime the acquisition stage runs on.
fn runtime() -> Result<tokio::runtime::Runtime, String> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("failed to start async runtime: {e}"))
}
