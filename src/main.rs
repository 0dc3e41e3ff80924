//! Hugodex - a static search index builder for Hugo Markdown blogs.

#![allow(dead_code)]

mod analyze;
mod cli;
mod config;
mod frontmatter;
mod index;
mod logger;
mod pipeline;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::IndexConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Build { args } => {
            let config = IndexConfig::from_args(args)?;
            cli::build::build_index(&config)
        }
        Commands::Check { args } => {
            let config = IndexConfig::from_args(args)?;
            cli::check::check_content(&config)
        }
    }
}
