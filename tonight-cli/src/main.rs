//! Tonight CLI - Command line interface for St. Augustine Tonight
//!
//! Parses AI-generated night out plans and browses the venue catalogue.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tonight_core::Config;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{ParseArgs, PromptArgs, VenuesArgs};

/// St. Augustine Tonight: night out plans, step by step
#[derive(Parser, Debug)]
#[command(name = "tonight")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Model to use for plan generation (overrides config and env)
    #[arg(long, global = true, env = "TONIGHT_MODEL")]
    model: Option<String>,

    /// Venue catalogue file (overrides config and env)
    #[arg(long, global = true, env = "TONIGHT_VENUES_FILE")]
    venues: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show version information
    Version,

    /// Parse a generated plan into steps, tips, and outro
    #[command(visible_alias = "p")]
    Parse(ParseArgs),

    /// Show the prompts used to generate a plan
    Prompt(PromptArgs),

    /// List venues and events, optionally filtered by vibe
    #[command(visible_alias = "v")]
    Venues(VenuesArgs),

    /// Show current configuration
    Config,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    let config = Config::load_with_overrides(cli.model.clone(), cli.venues.clone())?;

    if cli.verbose {
        tracing::info!(
            model = %config.generation.model,
            catalogue = ?config.venues.catalogue,
            "Configuration loaded"
        );
    }

    match cli.command {
        Some(Commands::Version) => {
            println!("tonight {}", env!("CARGO_PKG_VERSION"));
        }
        Some(Commands::Parse(args)) => {
            args.execute(cli.verbose)?;
        }
        Some(Commands::Prompt(args)) => {
            args.execute(&config)?;
        }
        Some(Commands::Venues(args)) => {
            args.execute(cli.verbose, &config)?;
        }
        Some(Commands::Config) => print_config(&config),
        None => {
            println!("St. Augustine Tonight - night out plans, step by step");
            println!();
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn print_config(config: &Config) {
    println!("Tonight Configuration");
    println!("=====================");
    println!();
    println!("Generation:");
    println!("  model: {}", config.generation.model);
    println!("  temperature: {}", config.generation.temperature);
    println!("  max_tokens: {}", config.generation.max_tokens);
    println!("  city: {}", config.generation.city);
    println!();
    println!("Defaults:");
    println!("  budget: {}", config.defaults.budget);
    println!("  time: {}", config.defaults.time);
    println!("  people: {}", config.defaults.people);
    println!();
    println!("Venues:");
    println!("  catalogue: {}", display_path(config.venues.catalogue.as_deref()));
    println!("  events: {}", display_path(config.venues.events.as_deref()));
    println!();
    if let Some(path) = Config::default_config_path() {
        println!("Config file: {}", path.display());
        if path.exists() {
            println!("  (exists)");
        } else {
            println!("  (not found - using defaults)");
        }
    }
}

fn display_path(path: Option<&std::path::Path>) -> String {
    path.map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not set)".to_string())
}
