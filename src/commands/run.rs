//! `unbundle run` command: the full pipeline.

use tracing::info;

use crate::acquire::acquire;
use crate::cli::SourceArgs;
use crate::context::ServiceContext;
use crate::decompile::decompile;
use crate::placeholders::write_placeholders;

/// Execute the `run` command.
///
/// For each record, in order: fetch missing maps (unless `skip_download`),
/// rebuild the tree, then stub dangling imports. Each stage finishes before
/// the next starts, since stub decisions depend on the complete tree.
///
/// # Errors
///
/// Returns an error string on the first fatal failure in any stage.
pub fn run(ctx: &ServiceContext, sources: &SourceArgs, skip_download: bool) -> Result<(), String> {
    let runtime = super::runtime()?;
    super::for_each_config(ctx, sources, |config| {
        if !skip_download {
            runtime
                .block_on(acquire(ctx, config, false))
                .map_err(|e| e.to_string())?;
        }
        decompile(ctx, config).map_err(|e| e.to_string())?;
        write_placeholders(ctx, config).map_err(|e| e.to_string())?;
        Ok(())
    })?;
    info!("All configs processed.");
    Ok(())
}
