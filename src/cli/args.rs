//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Hugodex search index builder CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Show debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Build the word and page indexes for a site
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        args: IndexArgs,
    },

    /// Parse and validate content without writing any index
    #[command(visible_alias = "c")]
    Check {
        #[command(flatten)]
        args: IndexArgs,
    },
}

/// Arguments shared by `build` and `check`.
#[derive(clap::Args, Debug, Clone)]
pub struct IndexArgs {
    /// Site root directory (the one containing content/post/)
    #[arg(value_hint = clap::ValueHint::DirPath)]
    pub root: PathBuf,

    /// Stop-word list file, one word per line (default: embedded English set)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub stopwords: Option<PathBuf>,
}
