//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::DEFAULT_SOURCES_DIR;

/// Top-level CLI parser for `unbundle`.
#[derive(Debug, Parser)]
#[command(
    name = "unbundle",
    version,
    about = "Rebuild source trees from bundle source maps"
)]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Selects the configuration records to process.
#[derive(Debug, Clone, Args)]
pub struct SourceArgs {
    /// Config file(s) to process, relative to the sources directory or absolute.
    #[arg(long = "source", value_name = "FILE", num_args = 1..)]
    pub sources: Vec<PathBuf>,
    /// Directory holding configuration records.
    #[arg(long, value_name = "DIR", default_value = DEFAULT_SOURCES_DIR)]
    pub sources_dir: PathBuf,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch maps, rebuild the source tree, then stub dangling imports.
    Run {
        /// Which configuration records to process.
        #[command(flatten)]
        sources: SourceArgs,
        /// Use only the maps already on disk.
        #[arg(long)]
        skip_download: bool,
    },
    /// Download map documents referenced by the compiled bundles.
    Fetch {
        /// Which configuration records to process.
        #[command(flatten)]
        sources: SourceArgs,
        /// List missing maps without downloading them.
        #[arg(long)]
        dry_run: bool,
    },
    /// Rebuild the source tree from the downloaded maps.
    Decompile {
        /// Which configuration records to process.
        #[command(flatten)]
        sources: SourceArgs,
    },
    /// Write placeholder modules for unresolved relative imports.
    Stubs {
        /// Which configuration records to process.
        #[command(flatten)]
        sources: SourceArgs,
    },
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command, SourceArgs};
    use clap::Parser;
    use std::path::PathBuf;

    fn run_args(cli: Cli) -> (SourceArgs, bool) {
        match cli.command {
            Command::Run {
                sources,
                skip_download,
            } => (sources, skip_download),
            other => panic!("expected run, got {other:?}"),
        }
    }

    #[test]
    fn parses_run_with_defaults() {
        let (sources, skip_download) = run_args(Cli::parse_from(["unbundle", "run"]));
        assert!(!skip_download);
        assert!(sources.sources.is_empty());
        assert_eq!(sources.sources_dir, PathBuf::from("sources"));
    }

    #[test]
    fn parses_multiple_sources_and_flags() {
        let cli = Cli::parse_from([
            "unbundle",
            "run",
            "--source",
            "a.json",
            "/abs/b.json",
            "--skip-download",
            "--sources-dir",
            "configs",
        ]);
        let (sources, skip_download) = run_args(cli);
        assert!(skip_download);
        assert_eq!(
            sources.sources,
            vec![PathBuf::from("a.json"), PathBuf::from("/abs/b.json")]
        );
        assert_eq!(sources.sources_dir, PathBuf::from("configs"));
    }

    #[test]
    fn parses_fetch_dry_run() {
        let cli = Cli::parse_from(["unbundle", "fetch", "--dry-run"]);
        assert!(matches!(cli.command, Command::Fetch { dry_run: true, .. }));
    }

    #[test]
    fn parses_single_stage_subcommands() {
        let cli = Cli::parse_from(["unbundle", "decompile"]);
        assert!(matches!(cli.command, Command::Decompile { .. }));
        let cli = Cli::parse_from(["unbundle", "stubs"]);
        assert!(matches!(cli.command, Command::Stubs { .. }));
    }
}
