//! # Colorway CLI
//!
//! Renders theme artifacts from a theme config file, for build pipelines
//! and server-rendering hosts that template their own `<head>`.
//!
//! ## Commands
//!
//! - **head**: fallback `<style>` and bootstrap `<script>` markup
//! - **fallback**: the default theme rule
//! - **rules**: one class rule per additional theme
//! - **script**: the bootstrap script
//! - **vars**: a theme converted to CSS variable references, as JSON
//! - **check**: validate the config

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colorway::ColorwayConfig;
use std::path::PathBuf;
use tracing::info;

/// Colorway - CSS variable themes
#[derive(Parser, Debug)]
#[command(name = "colorway", version, about)]
struct Args {
    /// Theme config file (.toml, .yaml, .yml or .json)
    #[arg(short, long, env = "COLORWAY_CONFIG", default_value = "colorway.toml")]
    config: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the head markup for server-rendered pages
    Head,
    /// Print the fallback rule for the default theme
    Fallback,
    /// Print the class rules, one per line
    Rules,
    /// Print the bootstrap script
    Script,
    /// Print a theme converted to CSS variable references
    Vars {
        /// Theme to convert (defaults to the default theme)
        #[arg(short, long)]
        theme: Option<String>,
    },
    /// Validate the config and print a summary
    Check,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();

    let config = ColorwayConfig::load(&args.config)?;
    info!(
        "Loaded {} theme(s) from {}",
        config.themes.len(),
        args.config.display()
    );

    let output = match args.command {
        Command::Head => commands::head(&config),
        Command::Fallback => commands::fallback(&config),
        Command::Rules => commands::rules(&config),
        Command::Script => commands::script(&config),
        Command::Vars { theme } => commands::vars(&config, theme.as_deref())?,
        Command::Check => commands::check(&config),
    };

    println!("{output}");
    Ok(())
}
