//! `unbundle decompile` command.

use crate::cli::SourceArgs;
use crate::context::ServiceContext;
use crate::decompile::decompile;

/// Execute the `decompile` command: rebuild each record's source tree from
/// the maps already on disk.
///
/// # Errors
///
/// Returns an error string if a record cannot be loaded or its tree cannot
/// be written.
pub fn run(ctx: &ServiceContext, sources: &SourceArgs) -> Result<(), String> {
    super::for_each_config(ctx, sources, |config| {
        decompile(ctx, config)
            .map(|_| ())
            .map_err(|e| e.to_string())
    })
}
