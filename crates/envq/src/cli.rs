//! Clap CLI definitions for the `envq` command.

use clap::{Args, Parser, Subcommand};

/// envq -- inspect `.env`-style configuration files.
///
/// Locates a `KEY=VALUE` file by filename hint under a directory, parses
/// it, and answers lookups against the result.
#[derive(Parser, Debug)]
#[command(
    name = "envq",
    about = "Inspect .env-style configuration files",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Global flags available to all subcommands.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Directory to search recursively (default: current directory).
    #[arg(long, global = true, default_value = ".")]
    pub dir: String,

    /// Filename hint; any file whose name starts with this matches.
    #[arg(long, global = true, default_value = envmap::DEFAULT_HINT)]
    pub hint: String,

    /// Explicit file path; skips discovery entirely.
    #[arg(long, global = true, conflicts_with_all = ["dir", "hint"])]
    pub file: Option<String>,

    /// Output in JSON format.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose/debug output.
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the value of a key.
    Get(GetArgs),

    /// List all loaded keys in file order.
    Keys,

    /// Parse the file and report how many entries it holds.
    Check,

    /// Print the resolved file path.
    Path,
}

/// Arguments for `envq get`.
#[derive(Args, Debug)]
pub struct GetArgs {
    /// The key to look up.
    pub key: String,
}
