//! reddit-persona - Behavioral persona inference from Reddit activity
//!
//! This is the main entry point. The tool resolves a profile URL to a
//! username, fetches the user's recent comments and submissions, runs the
//! persona inference engine over them, and writes a human-readable report.

mod cli;
mod config;
mod engine;
mod error;
mod logging;
mod report;
mod source;
mod types;
mod version;

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use crate::cli::{Cli, Commands, ConfigSubcommand};
use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::source::RedditClient;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprint!("{}", e.format_for_terminal());
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Version => {
            version::print_version();
            Ok(())
        }
        Commands::Config { subcommand } => {
            // Config commands use minimal logging
            logging::init_simple(tracing::Level::WARN)?;
            handle_config_command(subcommand)
        }
        Commands::Generate { url, output, config } => {
            run_generate(&url, output.as_deref(), config.as_deref(), cli.verbose, cli.quiet)
        }
    }
}

/// Run the full generate flow: parse URL, fetch activity, build the persona,
/// write the report.
fn run_generate(
    url: &str,
    output: Option<&str>,
    config_path: Option<&str>,
    verbose: u8,
    quiet: bool,
) -> Result<()> {
    // Reject a malformed profile URL before doing anything else; an invalid
    // input must have no side effects.
    let username = source::parse_profile_url(url)?;

    let config = AppConfig::load(config_path)?;

    // The guards must be kept alive for the lifetime of the program
    let _log_guards = logging::init_logging(&config.logging, verbose, quiet)?;

    let build = version::build_info();
    info!(
        version = %build.full_version(),
        username = %username,
        "Starting persona generation"
    );

    // Credentials are checked before any network interaction
    config.require_credentials()?;
    let fetcher = RedditClient::new(config.reddit.clone())?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| Error::Internal(format!("Failed to create async runtime: {}", e)))?;

    let persona = runtime.block_on(engine::build_persona(&fetcher, &username))?;

    let report_path = match output {
        Some(path) => PathBuf::from(path),
        None => report::default_report_path(&config.output_dir(), &persona.username),
    };

    report::write_report(&persona, &report_path, &config.output)?;
    println!("Persona report written: {}", report_path.display());

    Ok(())
}

/// Handle configuration subcommands
fn handle_config_command(subcommand: ConfigSubcommand) -> Result<()> {
    match subcommand {
        ConfigSubcommand::Show { config } => {
            let cfg = AppConfig::load(config.as_deref())?;
            println!("{}", toml::to_string_pretty(&cfg)?);
        }
        ConfigSubcommand::Init { path, force } => {
            config::init_config(path.as_deref(), force)?;
        }
        ConfigSubcommand::Validate { config } => {
            AppConfig::load(config.as_deref())?;
            println!("Configuration is valid.");
        }
    }

    Ok(())
}
