//! Command-line argument definitions for the Easel CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the composition manifest, the
//! configuration file and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Easel page composer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the composition manifest (TOML)
    #[arg(help = "Path to the manifest file")]
    pub manifest: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
