//! `unbundle fetch` command.

use crate::acquire::acquire;
use crate::cli::SourceArgs;
use crate::context::ServiceContext;

/// Execute the `fetch` command: download missing map documents for each
/// record, or only list them when `dry_run` is set.
///
/// # Errors
///
/// Returns an error string if a record cannot be loaded, its input directory
/// cannot be scanned, or a downloaded map cannot be saved.
pub fn run(ctx: &ServiceContext, sources: &SourceArgs, dry_run: bool) -> Result<(), String> {
    let runtime = super::runtime()?;
    super::for_each_config(ctx, sources, |config| {
        runtime
            .block_on(acquire(ctx, config, dry_run))
            .map(|_| ())
            .map_err(|e| e.to_string())
    })
}
