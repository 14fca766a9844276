//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Viaduct - build and dev-server configuration for bundler-built front ends
#[derive(Parser)]
#[command(name = "viaduct")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve and print the build and dev-server configuration as JSON
    Config(ConfigArgs),

    /// Print the HTML tags that load an entry point's assets
    Assets(AssetsArgs),

    /// Check that configuration resolves and the project layout is sound
    Doctor(DoctorArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct ConfigArgs {
    /// Project root (defaults to the current directory)
    #[arg(long, env = "VIADUCT_ROOT")]
    pub root: Option<PathBuf>,

    /// Only print the dev-server section
    #[arg(long, conflicts_with = "build")]
    pub dev_server: bool,

    /// Only print the build section
    #[arg(long)]
    pub build: bool,

    /// Pretty-print the JSON
    #[arg(long)]
    pub pretty: bool,

    /// Write the JSON to a file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Args)]
pub struct AssetsArgs {
    /// Manifest key of the entry point (e.g. resources/assets/js/app.js)
    pub entry: String,

    /// Project root (defaults to the current directory)
    #[arg(long, env = "VIADUCT_ROOT")]
    pub root: Option<PathBuf>,

    /// Manifest file (defaults to the build output location)
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Render dev-server tags instead of reading the manifest
    #[arg(long)]
    pub dev: bool,
}

#[derive(Args)]
pub struct DoctorArgs {
    /// Project root (defaults to the current directory)
    #[arg(long, env = "VIADUCT_ROOT")]
    pub root: Option<PathBuf>,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
