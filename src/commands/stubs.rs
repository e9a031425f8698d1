//! `unbundle stubs` command.

use crate::cli::SourceArgs;
use crate::context::ServiceContext;
use crate::placeholders::write_placeholders;

/// Execute the `stubs` command: write placeholders for unresolved relative
/// imports in each record's rebuilt tree.
///
/// # Errors
///
/// Returns an error string if a record cannot be loaded or a stub cannot be
/// written.
pub fn run(ctx: &ServiceContext, sources: &SourceArgs) -> Result<(), String> {
    super::for_each_config(ctx, sources, |config| {
        write_placeholders(ctx, config)
            .map(|_| ())
            .map_err(|e| e.to_string())
    })
}
