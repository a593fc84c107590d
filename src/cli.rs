//! CLI argument parsing using clap v4
//!
//! Defines the command-line interface for reddit-persona.

use clap::{Parser, Subcommand};

/// reddit-persona - Behavioral persona inference from Reddit activity
///
/// Fetches a user's recent comments and submissions, infers demographic,
/// personality, motivation, habit, frustration, and goal attributes, and
/// writes a human-readable persona report to a file.
#[derive(Parser, Debug)]
#[command(name = "reddit-persona")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a persona report for a Reddit user profile URL
    Generate {
        /// Profile URL, e.g. https://www.reddit.com/user/username/
        url: String,

        /// Output file path (default: persona_<username>.txt in the output dir)
        #[arg(short, long)]
        output: Option<String>,

        /// Path to configuration file
        #[arg(short, long, env = "PERSONA_CONFIG")]
        config: Option<String>,
    },

    /// Display version and build information
    Version,

    /// Configuration management
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigSubcommand {
    /// Display the current configuration
    Show {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Initialize a new configuration file
    Init {
        /// Path where to create the config file
        #[arg(short, long)]
        path: Option<String>,

        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Validate a configuration file
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        config: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        // Verifies that the CLI definition is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn test_generate_command() {
        let cli = Cli::parse_from([
            "reddit-persona",
            "generate",
            "https://www.reddit.com/user/spez/",
        ]);
        match cli.command {
            Commands::Generate { url, output, config } => {
                assert_eq!(url, "https://www.reddit.com/user/spez/");
                assert!(output.is_none());
                assert!(config.is_none());
            }
            _ => panic!("Expected Generate command"),
        }
    }

    #[test]
    fn test_generate_with_output() {
        let cli = Cli::parse_from([
            "reddit-persona",
            "generate",
            "https://www.reddit.com/user/spez/",
            "--output",
            "report.txt",
        ]);
        match cli.command {
            Commands::Generate { output, .. } => {
                assert_eq!(output, Some("report.txt".to_string()));
            }
            _ => panic!("Expected Generate command"),
        }
    }

    #[test]
    fn test_generate_with_config() {
        let cli = Cli::parse_from([
            "reddit-persona",
            "generate",
            "https://www.reddit.com/user/spez/",
            "--config",
            "/path/to/config.toml",
        ]);
        match cli.command {
            Commands::Generate { config, .. } => {
                assert_eq!(config, Some("/path/to/config.toml".to_string()));
            }
            _ => panic!("Expected Generate command"),
        }
    }

    #[test]
    fn test_verbose_flags() {
        let cli = Cli::parse_from(["reddit-persona", "-vv", "version"]);
        assert_eq!(cli.verbose, 2);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_quiet_flag() {
        let cli = Cli::parse_from(["reddit-persona", "--quiet", "version"]);
        assert!(cli.quiet);
    }

    #[test]
    fn test_config_show() {
        let cli = Cli::parse_from(["reddit-persona", "config", "show"]);
        match cli.command {
            Commands::Config {
                subcommand: ConfigSubcommand::Show { config },
            } => {
                assert!(config.is_none());
            }
            _ => panic!("Expected Config Show command"),
        }
    }

    #[test]
    fn test_config_init() {
        let cli = Cli::parse_from(["reddit-persona", "config", "init", "--force"]);
        match cli.command {
            Commands::Config {
                subcommand: ConfigSubcommand::Init { path, force },
            } => {
                assert!(path.is_none());
                assert!(force);
            }
            _ => panic!("Expected Config Init command"),
        }
    }
}
