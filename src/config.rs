//! Configuration system for reddit-persona
//!
//! Supports multiple configuration sources with the following precedence (highest to lowest):
//! 1. CLI arguments
//! 2. Environment variables (PERSONA_* prefix, plus REDDIT_CLIENT_ID/SECRET)
//! 3. Configuration file (TOML)
//! 4. Default values

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Reddit API client settings
    pub reddit: RedditSettings,

    /// Report output settings
    pub output: OutputSettings,

    /// Logging configuration
    pub logging: LoggingSettings,
}

/// Reddit API client settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RedditSettings {
    /// Script-app client id
    pub client_id: String,

    /// Script-app client secret
    pub client_secret: String,

    /// User-Agent header sent with every request (required by the Reddit API)
    pub user_agent: String,

    /// Maximum comments and maximum submissions fetched per user (each)
    pub item_limit: u32,

    /// Request timeout in seconds
    pub request_timeout_secs: u64,
}

/// Report output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Directory where persona reports are written
    pub dir: String,

    /// Maximum number of goal/frustration snippets shown per section
    pub snippet_limit: usize,

    /// Maximum characters per snippet before truncation
    pub snippet_max_chars: usize,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level: trace, debug, info, warn, error
    pub level: String,

    /// Log file path (empty = no file logging)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    /// Number of rotated log files to keep
    pub max_files: u32,

    /// Enable JSON formatted logging
    pub json_format: bool,
}

// Default implementations

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            reddit: RedditSettings::default(),
            output: OutputSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl Default for RedditSettings {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            user_agent: "reddit-persona/0.2 (persona research)".to_string(),
            item_limit: 50,
            request_timeout_secs: 30,
        }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            dir: ".".to_string(),
            snippet_limit: 3,
            snippet_max_chars: 100,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
            max_files: 5,
            json_format: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from file with environment variable overrides
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut config = Self::default();

        // 1. Load from config file if it exists
        let config_file = Self::find_config_file(config_path)?;
        if let Some(path) = config_file {
            debug!(path = %path.display(), "Loading configuration file");
            let content = fs::read_to_string(&path)
                .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))?;
            config = toml::from_str(&content).map_err(|e| Error::ConfigParse {
                message: path.display().to_string(),
                source: Some(e),
            })?;
            info!(path = %path.display(), "Configuration loaded from file");
        }

        // 2. Apply environment variable overrides
        config.apply_env_overrides();

        // 3. Expand paths
        config.expand_paths();

        // 4. Validate
        config.validate()?;

        Ok(config)
    }

    /// Find the configuration file to use
    fn find_config_file(explicit_path: Option<&str>) -> Result<Option<PathBuf>> {
        // If explicit path provided, use it (error if not found)
        if let Some(path) = explicit_path {
            let expanded = shellexpand::tilde(path);
            let path = PathBuf::from(expanded.as_ref());
            if path.exists() {
                return Ok(Some(path));
            } else {
                return Err(Error::config_not_found(path));
            }
        }

        // Search in standard locations
        let search_paths = [
            // Current directory
            PathBuf::from("reddit-persona.toml"),
            // User config directory
            dirs::config_dir()
                .map(|p| p.join("reddit-persona").join("config.toml"))
                .unwrap_or_default(),
            // Home directory
            dirs::home_dir()
                .map(|p| p.join(".reddit-persona.toml"))
                .unwrap_or_default(),
        ];

        for path in &search_paths {
            if path.exists() {
                debug!(path = %path.display(), "Found configuration file");
                return Ok(Some(path.clone()));
            }
        }

        debug!("No configuration file found, using defaults");
        Ok(None)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) {
        // Credentials keep the names the Reddit script-app convention uses
        if let Ok(val) = std::env::var("REDDIT_CLIENT_ID") {
            self.reddit.client_id = val;
        }
        if let Ok(val) = std::env::var("REDDIT_CLIENT_SECRET") {
            self.reddit.client_secret = val;
        }

        // Reddit settings
        if let Ok(val) = std::env::var("PERSONA_USER_AGENT") {
            self.reddit.user_agent = val;
        }
        if let Ok(val) = std::env::var("PERSONA_ITEM_LIMIT") {
            if let Ok(n) = val.parse() {
                self.reddit.item_limit = n;
            }
        }
        if let Ok(val) = std::env::var("PERSONA_REQUEST_TIMEOUT_SECS") {
            if let Ok(n) = val.parse() {
                self.reddit.request_timeout_secs = n;
            }
        }

        // Output settings
        if let Ok(val) = std::env::var("PERSONA_OUTPUT_DIR") {
            self.output.dir = val;
        }

        // Logging settings
        if let Ok(val) = std::env::var("PERSONA_LOG_LEVEL") {
            self.logging.level = val;
        }
        if let Ok(val) = std::env::var("PERSONA_LOG_FILE") {
            self.logging.file = Some(val);
        }
        if let Ok(val) = std::env::var("PERSONA_LOG_JSON") {
            self.logging.json_format = val.to_lowercase() == "true" || val == "1";
        }
    }

    /// Expand ~ and other path variables
    fn expand_paths(&mut self) {
        self.output.dir = expand_path(&self.output.dir);

        if let Some(ref file) = self.logging.file {
            self.logging.file = Some(expand_path(file));
        }
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        if self.reddit.user_agent.is_empty() {
            return Err(Error::config_field_invalid(
                "reddit.user_agent",
                "User-Agent cannot be empty; the Reddit API rejects anonymous clients",
            ));
        }

        if self.reddit.item_limit == 0 || self.reddit.item_limit > 100 {
            return Err(Error::config_field_invalid(
                "reddit.item_limit",
                "item_limit must be between 1 and 100",
            ));
        }

        if self.reddit.request_timeout_secs == 0 {
            return Err(Error::config_field_invalid(
                "reddit.request_timeout_secs",
                "request_timeout_secs must be greater than 0",
            ));
        }

        if self.output.snippet_limit == 0 {
            return Err(Error::config_field_invalid(
                "output.snippet_limit",
                "snippet_limit must be greater than 0",
            ));
        }

        // Validate log level
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(Error::Config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_levels.join(", ")
            )));
        }

        Ok(())
    }

    /// Check that Reddit API credentials are present.
    ///
    /// Called before any network interaction; credentials are not required
    /// for config management commands.
    pub fn require_credentials(&self) -> Result<()> {
        if self.reddit.client_id.is_empty() || self.reddit.client_secret.is_empty() {
            return Err(Error::CredentialsMissing);
        }
        Ok(())
    }

    /// Get the output directory as a PathBuf
    pub fn output_dir(&self) -> PathBuf {
        PathBuf::from(&self.output.dir)
    }
}

/// Expand ~ and environment variables in paths
fn expand_path(path: &str) -> String {
    shellexpand::full(path)
        .unwrap_or_else(|_| std::borrow::Cow::Borrowed(path))
        .into_owned()
}

/// Initialize a new configuration file
pub fn init_config(path: Option<&str>, force: bool) -> Result<()> {
    let config_path = path
        .map(|p| PathBuf::from(expand_path(p)))
        .unwrap_or_else(|| {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("reddit-persona")
                .join("config.toml")
        });

    // Check if file exists
    if config_path.exists() && !force {
        return Err(Error::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            config_path.display()
        )));
    }

    // Create parent directories
    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| Error::Config(format!("Failed to create config directory: {}", e)))?;
    }

    // Generate default config with comments
    let config_content = generate_default_config();

    // Write the file
    fs::write(&config_path, config_content).map_err(|e| Error::IoWrite {
        path: config_path.clone(),
        source: e,
    })?;

    println!("Configuration file created: {}", config_path.display());
    Ok(())
}

/// Generate default configuration content with comments
fn generate_default_config() -> String {
    r#"# reddit-persona configuration

[reddit]
# Script-app credentials from https://www.reddit.com/prefs/apps
# Can also be supplied via REDDIT_CLIENT_ID / REDDIT_CLIENT_SECRET.
client_id = ""
client_secret = ""

# User-Agent sent with every request (required by the Reddit API)
user_agent = "reddit-persona/0.2 (persona research)"

# Maximum comments and maximum submissions fetched per user (each, 1-100)
item_limit = 50

# Request timeout in seconds
request_timeout_secs = 30

[output]
# Directory where persona reports are written
dir = "."

# Maximum number of goal/frustration snippets shown per section
snippet_limit = 3

# Maximum characters per snippet before truncation
snippet_max_chars = 100

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log file path (comment out to disable file logging)
# file = "~/.local/state/reddit-persona/persona.log"

# Number of rotated log files to keep
max_files = 5

# Enable JSON formatted logging
json_format = false
"#
    .to_string()
}
