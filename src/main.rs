//! tola-permalink - resolve collection permalinks from the command line.

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use tola_permalink::cli::{self, Cli, Commands};
use tola_permalink::config::SiteConfig;
use tola_permalink::logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let cwd = std::env::current_dir().context("failed to read the current directory")?;
    let config = SiteConfig::load(&cli.config, &cwd)?;

    match &cli.command {
        Commands::Resolve { args } => cli::resolve::run_resolve(args, &config),
        Commands::Check { args } => cli::check::run_check(args, &config),
    }
}
