//! Error types for reddit-persona
//!
//! Provides structured error handling with:
//! - Numeric error codes for machine parsing
//! - User-friendly messages with suggestions
//! - Error context and chaining
//! - Exit codes for CLI

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for persona operations
pub type Result<T> = std::result::Result<T, Error>;

/// Numeric error codes for machine parsing and documentation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum ErrorCode {
    // Configuration errors (1xx)
    ConfigNotFound = 100,
    ConfigParseError = 101,
    ConfigValidation = 102,
    CredentialsMissing = 110,

    // IO errors (2xx)
    IoRead = 200,
    IoWrite = 201,
    IoPermission = 202,
    IoNotFound = 203,

    // Fetch errors (3xx)
    FetchFailed = 300,
    RequestTimeout = 301,
    AuthFailed = 302,
    RateLimited = 303,

    // Input errors (4xx)
    InvalidProfileUrl = 400,
    UserNotFound = 404,

    // Internal errors (9xx)
    InternalError = 900,
}

impl ErrorCode {
    /// Get the string code (e.g., "E100")
    pub fn as_str(&self) -> String {
        format!("E{}", *self as u16)
    }

    /// Get the exit code for CLI (maps to a small per-category range)
    pub fn exit_code(&self) -> i32 {
        match *self as u16 {
            100..=199 => 10, // Config errors
            200..=299 => 20, // IO errors
            300..=399 => 30, // Fetch errors
            400..=499 => 40, // Input/user errors
            900..=999 => 90, // Internal errors
            _ => 1,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type for the tool
#[derive(Error, Debug)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────

    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration parse error
    #[error("Failed to parse configuration: {message}")]
    ConfigParse {
        message: String,
        #[source]
        source: Option<toml::de::Error>,
    },

    /// Configuration validation error
    #[error("Configuration validation failed: {message}")]
    ConfigValidation { message: String, field: Option<String> },

    /// Reddit API credentials are not configured
    #[error("Reddit API credentials are not set")]
    CredentialsMissing,

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    // ─────────────────────────────────────────────────────────────
    // IO Errors
    // ─────────────────────────────────────────────────────────────

    /// File write error
    #[error("Failed to write file: {path}")]
    IoWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    Toml(#[from] toml::ser::Error),

    // ─────────────────────────────────────────────────────────────
    // Fetch Errors
    // ─────────────────────────────────────────────────────────────

    /// The Reddit API returned an unexpected response
    #[error("Fetch from {url} failed: {message}")]
    FetchFailed { url: String, message: String },

    /// Authentication against the Reddit API failed
    #[error("Reddit API authentication failed: {message}")]
    AuthFailed { message: String },

    /// The Reddit API rate limit was hit
    #[error("Reddit API rate limit exceeded")]
    RateLimited,

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // ─────────────────────────────────────────────────────────────
    // Input Errors
    // ─────────────────────────────────────────────────────────────

    /// The supplied profile URL does not look like a Reddit user profile
    #[error("Invalid Reddit user profile URL: {url}")]
    InvalidProfileUrl { url: String },

    /// The user does not exist, is suspended, or is otherwise unreachable
    #[error("User '{username}' not found or is suspended")]
    UserNotFound { username: String },

    // ─────────────────────────────────────────────────────────────
    // Internal Errors
    // ─────────────────────────────────────────────────────────────

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Get the numeric error code
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::ConfigNotFound { .. } => ErrorCode::ConfigNotFound,
            Error::ConfigParse { .. } => ErrorCode::ConfigParseError,
            Error::ConfigValidation { .. } => ErrorCode::ConfigValidation,
            Error::CredentialsMissing => ErrorCode::CredentialsMissing,
            Error::Config(_) => ErrorCode::ConfigValidation,

            Error::IoWrite { .. } => ErrorCode::IoWrite,
            Error::Io(e) => match e.kind() {
                std::io::ErrorKind::NotFound => ErrorCode::IoNotFound,
                std::io::ErrorKind::PermissionDenied => ErrorCode::IoPermission,
                _ => ErrorCode::IoRead,
            },
            Error::Toml(_) => ErrorCode::ConfigParseError,

            Error::FetchFailed { .. } => ErrorCode::FetchFailed,
            Error::AuthFailed { .. } => ErrorCode::AuthFailed,
            Error::RateLimited => ErrorCode::RateLimited,
            Error::Http(e) if e.is_timeout() => ErrorCode::RequestTimeout,
            Error::Http(_) => ErrorCode::FetchFailed,

            Error::InvalidProfileUrl { .. } => ErrorCode::InvalidProfileUrl,
            Error::UserNotFound { .. } => ErrorCode::UserNotFound,

            Error::Internal(_) => ErrorCode::InternalError,
        }
    }

    /// Check if the error is fatal to the whole invocation rather than a
    /// single-user failure
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::ConfigNotFound { .. }
                | Error::ConfigParse { .. }
                | Error::ConfigValidation { .. }
                | Error::CredentialsMissing
                | Error::Config(_)
                | Error::Internal(_)
        )
    }

    /// Get the exit code for CLI
    pub fn exit_code(&self) -> i32 {
        self.code().exit_code()
    }

    // ─────────────────────────────────────────────────────────────
    // User-Friendly Messages
    // ─────────────────────────────────────────────────────────────

    /// Get a user-friendly suggestion for how to fix this error
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Error::ConfigNotFound { .. } => Some(
                "Run 'reddit-persona config init' to create a default configuration file."
            ),
            Error::ConfigParse { .. } => Some(
                "Check your configuration file syntax. Run 'reddit-persona config validate' to see details."
            ),
            Error::ConfigValidation { .. } => Some(
                "Review the configuration file and fix the invalid values."
            ),
            Error::CredentialsMissing => Some(
                "Set REDDIT_CLIENT_ID and REDDIT_CLIENT_SECRET, or add them under [reddit] in the config file."
            ),

            Error::AuthFailed { .. } => Some(
                "Verify your Reddit API client id and secret. Script-type app credentials are required."
            ),
            Error::RateLimited => Some(
                "The Reddit API is throttling requests. Wait a minute and try again."
            ),
            Error::FetchFailed { .. } => Some(
                "Check your network connection. The Reddit API may be temporarily unavailable."
            ),

            Error::InvalidProfileUrl { .. } => Some(
                "The URL must look like: https://www.reddit.com/user/username/"
            ),
            Error::UserNotFound { .. } => Some(
                "Check the spelling of the username. Suspended and deleted accounts cannot be analyzed."
            ),

            _ => None,
        }
    }

    /// Format the error for terminal display with colors
    pub fn format_for_terminal(&self) -> String {
        let code = self.code();
        let suggestion = self.suggestion();

        let mut output = format!(
            "\x1b[31mError [{}]\x1b[0m: {}\n",
            code.as_str(),
            self
        );

        if let Some(hint) = suggestion {
            output.push_str(&format!("\n\x1b[33mHint\x1b[0m: {}\n", hint));
        }

        output
    }

    /// Format the error for logging (no colors)
    pub fn format_for_log(&self) -> String {
        let code = self.code();
        format!("[{}] {}", code.as_str(), self)
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Constructors (for ergonomic error creation)
// ─────────────────────────────────────────────────────────────────

impl Error {
    /// Create a config not found error
    pub fn config_not_found(path: impl Into<PathBuf>) -> Self {
        Error::ConfigNotFound { path: path.into() }
    }

    /// Create a config validation error with field name
    pub fn config_field_invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Error::ConfigValidation {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create a fetch failed error
    pub fn fetch_failed(url: impl Into<String>, message: impl Into<String>) -> Self {
        Error::FetchFailed {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a user not found error
    pub fn user_not_found(username: impl Into<String>) -> Self {
        Error::UserNotFound {
            username: username.into(),
        }
    }

    /// Create an invalid profile URL error
    pub fn invalid_profile_url(url: impl Into<String>) -> Self {
        Error::InvalidProfileUrl { url: url.into() }
    }
}

// ─────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────
