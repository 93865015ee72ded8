//! CLI argument parsing.
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Prints GitHub compare links for packages changed by a Composer update.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, default_value_t = false, global = true)]
    /// Enable debug logging.
    pub debug: bool,

    #[arg(long, global = true)]
    /// Path to configuration file. Defaults to ./changelogs.toml if present.
    pub config: Option<PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compare two composer.lock files and print a changelog link for every
    /// updated package.
    Diff {
        #[arg(long)]
        /// Lock file before the update.
        from: PathBuf,

        #[arg(long)]
        /// Lock file after the update.
        to: PathBuf,

        #[arg(long, default_value_t = false)]
        /// Ignore packages-dev.
        no_dev: bool,

        #[arg(long, default_value_t = false)]
        /// Print results as JSON.
        json: bool,
    },

    /// Print the changelog link for a single package update.
    Compare {
        #[arg(long)]
        /// Source URL of the initial version.
        from_url: String,

        #[arg(long)]
        /// Source URL of the target version. Defaults to --from-url.
        to_url: Option<String>,

        #[arg(long)]
        /// Initial version label.
        from_version: String,

        #[arg(long)]
        /// Target version label.
        to_version: String,

        #[arg(long)]
        /// Commit reference of the initial version.
        from_ref: Option<String>,

        #[arg(long)]
        /// Commit reference of the target version.
        to_ref: Option<String>,
    },
}
